//! Technical analysis generators

use std::collections::BTreeMap;

use crate::models::technical::{
    MarketSentiment, SignalAction, TechnicalAnalysis, TechnicalSignal, TechnicalSignalSet,
};

/// Sentiment summary with the key indicator values.
pub fn technical_analysis() -> TechnicalAnalysis {
    TechnicalAnalysis {
        overall_sentiment: MarketSentiment::Bearish,
        confidence: 1.00,
        strength: 0.59,
        signals: summary_signals(),
        key_indicators: key_indicators(),
    }
}

/// Detailed signal listing with per-direction counts.
pub fn technical_signals() -> TechnicalSignalSet {
    TechnicalSignalSet {
        signals: detailed_signals(),
        overall_sentiment: MarketSentiment::Bearish,
        confidence: 1.00,
        strength: 0.59,
        // counts are part of the published fixture, not derived from `signals`
        bullish_signals: 1,
        bearish_signals: 4,
        neutral_signals: 0,
    }
}

fn summary_signals() -> Vec<TechnicalSignal> {
    vec![
        TechnicalSignal::new(
            "RSI",
            SignalAction::Sell,
            1.00,
            0.70,
            "RSI overbought at 84.59",
        ),
        TechnicalSignal::new(
            "Stochastic",
            SignalAction::Sell,
            0.88,
            0.65,
            "Stochastic overbought (%K: 88.8, %D: 85.2)",
        ),
        TechnicalSignal::new(
            "ADX",
            SignalAction::Sell,
            0.73,
            0.75,
            "Strong downtrend (ADX: 36.3)",
        ),
        TechnicalSignal::new(
            "Williams %R",
            SignalAction::Sell,
            0.88,
            0.60,
            "Williams %R overbought at -11.2",
        ),
    ]
}

fn detailed_signals() -> Vec<TechnicalSignal> {
    vec![
        TechnicalSignal::new(
            "RSI",
            SignalAction::Sell,
            1.00,
            0.70,
            "RSI overbought at 84.59",
        )
        .with_reading(84.59, 70.0),
        TechnicalSignal::new(
            "Stochastic",
            SignalAction::Sell,
            0.88,
            0.65,
            "Stochastic overbought (%K: 88.8, %D: 85.2)",
        )
        .with_reading(88.8, 80.0),
        TechnicalSignal::new(
            "ADX",
            SignalAction::Sell,
            0.73,
            0.75,
            "Strong downtrend (ADX: 36.3)",
        )
        .with_reading(36.3, 25.0),
        TechnicalSignal::new(
            "Williams %R",
            SignalAction::Sell,
            0.88,
            0.60,
            "Williams %R overbought at -11.2",
        )
        .with_reading(-11.2, -20.0),
        TechnicalSignal::new(
            "MACD",
            SignalAction::Buy,
            0.45,
            0.55,
            "MACD bullish crossover",
        )
        .with_reading(0.039327, 0.0),
    ]
}

fn key_indicators() -> BTreeMap<String, f64> {
    [
        ("adx", 36.26),
        ("atr", 0.0644),
        ("bollinger_position", 81.98),
        ("macd", 0.039327),
        ("macd_signal", 0.024249),
        ("rsi_14", 84.59),
    ]
    .into_iter()
    .map(|(name, value)| (name.to_string(), value))
    .collect()
}
