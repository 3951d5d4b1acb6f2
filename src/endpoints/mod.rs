//! Query-routed endpoint dispatch and response envelopes.
//!
//! The public surface is a single `/api/forex?endpoint=<name>` route;
//! each recognized name maps to one generator. Unknown names fall back
//! to the endpoint listing, never to an error.

pub mod dashboard;
pub mod fundamental;
pub mod market;
pub mod prediction;
pub mod service;
pub mod technical;

use chrono::{DateTime, Utc};
use rand::Rng;
use serde::Serialize;
use serde_json::{json, Value};

pub const SERVICE_NAME: &str = "forex-analysis-api";
pub const SERVICE_VERSION: &str = "2.0.0";

/// Recognized values of the `endpoint` query parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Health,
    DashboardData,
    CurrentPrice,
    TechnicalAnalysis,
    PriceHistory,
    PredictionHistory,
    TechnicalSignals,
    FundamentalAnalysis,
    MlPrediction,
    Performance,
}

impl Endpoint {
    pub const ALL: [Endpoint; 10] = [
        Endpoint::Health,
        Endpoint::DashboardData,
        Endpoint::CurrentPrice,
        Endpoint::TechnicalAnalysis,
        Endpoint::PriceHistory,
        Endpoint::PredictionHistory,
        Endpoint::TechnicalSignals,
        Endpoint::FundamentalAnalysis,
        Endpoint::MlPrediction,
        Endpoint::Performance,
    ];

    /// Look a parameter value up in the endpoint table.
    pub fn from_param(param: &str) -> Option<Endpoint> {
        Endpoint::ALL.iter().copied().find(|e| e.as_str() == param)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Endpoint::Health => "health",
            Endpoint::DashboardData => "dashboard-data",
            Endpoint::CurrentPrice => "current-price",
            Endpoint::TechnicalAnalysis => "technical-analysis",
            Endpoint::PriceHistory => "price-history",
            Endpoint::PredictionHistory => "prediction-history",
            Endpoint::TechnicalSignals => "technical-signals",
            Endpoint::FundamentalAnalysis => "fundamental-analysis",
            Endpoint::MlPrediction => "ml-prediction",
            Endpoint::Performance => "performance",
        }
    }

    /// Routed form advertised by the endpoint listing.
    pub fn route(self) -> String {
        format!("/api/forex?endpoint={}", self.as_str())
    }
}

/// Standard success wrapper around a data payload.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Envelope<T> {
    pub success: bool,
    pub data: T,
    pub timestamp: DateTime<Utc>,
}

impl<T: Serialize> Envelope<T> {
    pub fn new(data: T, now: DateTime<Utc>) -> Self {
        Self {
            success: true,
            data,
            timestamp: now,
        }
    }
}

/// Produce the response body for a resolved endpoint.
///
/// `health` and the fallback listing use their own envelope-free shapes;
/// everything else is wrapped in [`Envelope`].
pub fn dispatch<R: Rng>(endpoint: Option<Endpoint>, now: DateTime<Utc>, rng: &mut R) -> Value {
    match endpoint {
        Some(Endpoint::Health) => json!(service::health(now)),
        Some(Endpoint::DashboardData) => json!(Envelope::new(dashboard::dashboard_data(now), now)),
        Some(Endpoint::CurrentPrice) => json!(Envelope::new(market::current_price(now), now)),
        Some(Endpoint::TechnicalAnalysis) => {
            json!(Envelope::new(technical::technical_analysis(), now))
        }
        Some(Endpoint::PriceHistory) => {
            json!(Envelope::new(market::price_history(now, rng), now))
        }
        Some(Endpoint::PredictionHistory) => {
            json!(Envelope::new(prediction::prediction_history(now, rng), now))
        }
        Some(Endpoint::TechnicalSignals) => {
            json!(Envelope::new(technical::technical_signals(), now))
        }
        Some(Endpoint::FundamentalAnalysis) => {
            json!(Envelope::new(fundamental::fundamental_analysis(), now))
        }
        Some(Endpoint::MlPrediction) => json!(Envelope::new(prediction::ml_prediction(now), now)),
        Some(Endpoint::Performance) => json!(Envelope::new(prediction::performance(), now)),
        None => json!(service::endpoints_list(now)),
    }
}

/// Round to a fixed number of decimal places.
pub fn round_to(value: f64, places: u32) -> f64 {
    let factor = 10f64.powi(places as i32);
    (value * factor).round() / factor
}
