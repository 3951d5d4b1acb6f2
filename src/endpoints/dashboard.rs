//! Combined dashboard generator

use chrono::{DateTime, Utc};

use crate::endpoints::{fundamental, market, prediction, technical};
use crate::models::dashboard::DashboardData;

/// Single-fetch aggregate of every analytics domain.
pub fn dashboard_data(now: DateTime<Utc>) -> DashboardData {
    DashboardData {
        current_price: market::current_price(now),
        technical_analysis: technical::technical_analysis(),
        fundamental_analysis: fundamental::fundamental_analysis(),
        ml_prediction: prediction::ml_prediction(now),
        performance: prediction::performance(),
    }
}
