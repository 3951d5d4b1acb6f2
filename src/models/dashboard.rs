//! Combined dashboard payload

use serde::{Deserialize, Serialize};

use crate::models::fundamental::FundamentalAnalysis;
use crate::models::market::PriceQuote;
use crate::models::prediction::{MlPrediction, PerformanceSummary};
use crate::models::technical::TechnicalAnalysis;

/// Everything the dashboard renders in a single fetch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardData {
    pub current_price: PriceQuote,
    pub technical_analysis: TechnicalAnalysis,
    pub fundamental_analysis: FundamentalAnalysis,
    pub ml_prediction: MlPrediction,
    pub performance: PerformanceSummary,
}
