//! Shared data models for the analytics payloads.

pub mod dashboard;
pub mod fundamental;
pub mod market;
pub mod prediction;
pub mod technical;

pub use dashboard::DashboardData;
pub use fundamental::{FundamentalAnalysis, PolicyStance};
pub use market::{PricePoint, PriceQuote};
pub use prediction::{MlPrediction, PerformanceSummary, PredictionRecord};
pub use technical::{
    MarketSentiment, SignalAction, TechnicalAnalysis, TechnicalSignal, TechnicalSignalSet,
};
