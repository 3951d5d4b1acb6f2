//! Model prediction data models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::models::technical::SignalAction;

/// Current model output for the next prediction window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MlPrediction {
    pub direction: SignalAction,
    pub confidence: f64,
    pub target_time: DateTime<Utc>,
    pub model_performance: BTreeMap<String, f64>,
    pub top_features: Vec<String>,
}

/// One resolved prediction from the trailing week.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionRecord {
    pub id: u32,
    pub timestamp: DateTime<Utc>,
    pub target_timestamp: DateTime<Utc>,
    pub predicted_direction: SignalAction,
    pub actual_direction: SignalAction,
    pub confidence: f64,
    pub is_correct: bool,
    pub profit_loss: f64,
}

/// Rollup of prediction accuracy and returns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformanceSummary {
    pub accuracy: f64,
    pub total_predictions: u32,
    pub correct_predictions: u32,
    pub total_profit: f64,
}
