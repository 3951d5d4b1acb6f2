//! Fundamental analysis generator

use crate::models::fundamental::{FundamentalAnalysis, PolicyStance};
use crate::models::technical::MarketSentiment;

/// Macro view of the pair: rate differential, policy stances, carry.
pub fn fundamental_analysis() -> FundamentalAnalysis {
    FundamentalAnalysis {
        overall_bias: MarketSentiment::Neutral,
        confidence: 0.11,
        uk_economic_momentum: -0.012,
        japan_economic_momentum: 0.014,
        rate_differential: 3.50,
        boe_policy: PolicyStance::VeryDovish,
        boj_policy: PolicyStance::Neutral,
        carry_trade_attractiveness: 0.875,
    }
}
