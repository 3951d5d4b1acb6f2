//! Fxlens — GBP/JPY forex analytics API
//!
//! Serves the dashboard's analytics payloads (prices, technical and
//! fundamental readings, model predictions) over a single query-routed
//! HTTP endpoint. All payloads are produced per request; the service
//! holds no cross-request state and can be horizontally scaled.

pub mod config;
pub mod core;
pub mod endpoints;
pub mod logging;
pub mod metrics;
pub mod models;
