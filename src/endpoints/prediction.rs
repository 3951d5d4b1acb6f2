//! Model prediction and performance generators

use std::collections::BTreeMap;

use chrono::{DateTime, Duration, Timelike, Utc};
use rand::seq::SliceRandom;
use rand::Rng;

use crate::endpoints::round_to;
use crate::models::prediction::{MlPrediction, PerformanceSummary, PredictionRecord};
use crate::models::technical::SignalAction;

/// Current model output targeting today's 06:00 UTC window.
pub fn ml_prediction(now: DateTime<Utc>) -> MlPrediction {
    let target_time = now
        .with_hour(6)
        .and_then(|t| t.with_minute(0))
        .and_then(|t| t.with_second(0))
        .and_then(|t| t.with_nanosecond(0))
        .unwrap_or(now);

    MlPrediction {
        direction: SignalAction::Hold,
        confidence: 1.00,
        target_time,
        model_performance: model_performance(),
        top_features: vec![
            "price_max_50".to_string(),
            "price_range_50".to_string(),
            "ema_50".to_string(),
            "sma_50".to_string(),
            "ema_10".to_string(),
        ],
    }
}

/// Resolved predictions for the trailing seven days, most recent first.
///
/// Each record draws its predicted and actual direction independently;
/// profit stays in the winning range only when the call was right.
pub fn prediction_history<R: Rng>(now: DateTime<Utc>, rng: &mut R) -> Vec<PredictionRecord> {
    (0..7)
        .map(|i| {
            let timestamp = now - Duration::days(i + 1);
            let target_timestamp = timestamp + Duration::hours(24);

            let predicted_direction = pick_direction(rng);
            let actual_direction = pick_direction(rng);
            let is_correct = predicted_direction == actual_direction;

            let profit_loss = if is_correct {
                round_to(rng.gen_range(-0.2..=0.3), 3)
            } else {
                round_to(rng.gen_range(-0.3..=0.1), 3)
            };

            PredictionRecord {
                id: i as u32 + 1,
                timestamp,
                target_timestamp,
                predicted_direction,
                actual_direction,
                confidence: round_to(rng.gen_range(0.6..=1.0), 2),
                is_correct,
                profit_loss,
            }
        })
        .collect()
}

/// Accuracy and profit rollup for the trailing week.
pub fn performance() -> PerformanceSummary {
    PerformanceSummary {
        accuracy: 0.714,
        total_predictions: 7,
        correct_predictions: 5,
        total_profit: 0.41,
    }
}

fn pick_direction<R: Rng>(rng: &mut R) -> SignalAction {
    SignalAction::ALL
        .choose(rng)
        .copied()
        .unwrap_or(SignalAction::Hold)
}

fn model_performance() -> BTreeMap<String, f64> {
    [
        ("gradient_boosting", 0.961),
        ("random_forest", 0.966),
        ("svm", 0.966),
    ]
    .into_iter()
    .map(|(model, score)| (model.to_string(), score))
    .collect()
}
