//! Technical analysis data models

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Trade action attached to a signal or prediction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SignalAction {
    Buy,
    Sell,
    Hold,
}

impl SignalAction {
    pub const ALL: [SignalAction; 3] = [SignalAction::Buy, SignalAction::Sell, SignalAction::Hold];
}

/// Aggregate market read across a set of signals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum MarketSentiment {
    Bullish,
    Bearish,
    Neutral,
}

/// A single indicator reading with its interpretation.
///
/// `value`/`threshold` are only present on the detailed signal listing;
/// the summary views omit them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TechnicalSignal {
    pub name: String,
    pub signal: SignalAction,
    pub strength: f64,
    pub confidence: f64,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub threshold: Option<f64>,
}

impl TechnicalSignal {
    pub fn new(
        name: &str,
        signal: SignalAction,
        strength: f64,
        confidence: f64,
        description: &str,
    ) -> Self {
        Self {
            name: name.to_string(),
            signal,
            strength,
            confidence,
            description: description.to_string(),
            value: None,
            threshold: None,
        }
    }

    /// Attach the raw indicator reading and its trigger threshold.
    pub fn with_reading(mut self, value: f64, threshold: f64) -> Self {
        self.value = Some(value);
        self.threshold = Some(threshold);
        self
    }
}

/// Summary view: sentiment rollup plus the key indicator values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TechnicalAnalysis {
    pub overall_sentiment: MarketSentiment,
    pub confidence: f64,
    pub strength: f64,
    pub signals: Vec<TechnicalSignal>,
    pub key_indicators: BTreeMap<String, f64>,
}

/// Detailed view: full signal list with per-direction counts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TechnicalSignalSet {
    pub signals: Vec<TechnicalSignal>,
    pub overall_sentiment: MarketSentiment,
    pub confidence: f64,
    pub strength: f64,
    pub bullish_signals: u32,
    pub bearish_signals: u32,
    pub neutral_signals: u32,
}
