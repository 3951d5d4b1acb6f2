//! Fundamental analysis data models

use serde::{Deserialize, Serialize};

use crate::models::technical::MarketSentiment;

/// Central bank policy stance scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PolicyStance {
    VeryDovish,
    Dovish,
    Neutral,
    Hawkish,
    VeryHawkish,
}

/// Macro read on the GBP/JPY pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FundamentalAnalysis {
    pub overall_bias: MarketSentiment,
    pub confidence: f64,
    pub uk_economic_momentum: f64,
    pub japan_economic_momentum: f64,
    pub rate_differential: f64,
    pub boe_policy: PolicyStance,
    pub boj_policy: PolicyStance,
    pub carry_trade_attractiveness: f64,
}
