//! Service metadata responses: health and the endpoint listing.
//!
//! Both use their own envelope-free shapes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::endpoints::{Endpoint, SERVICE_NAME, SERVICE_VERSION};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthReport {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub service: String,
    pub version: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EndpointIndex {
    pub service: String,
    pub version: String,
    pub available_endpoints: Vec<String>,
    pub timestamp: DateTime<Utc>,
}

pub fn health(now: DateTime<Utc>) -> HealthReport {
    HealthReport {
        status: "healthy".to_string(),
        timestamp: now,
        service: SERVICE_NAME.to_string(),
        version: SERVICE_VERSION.to_string(),
    }
}

/// Fallback response for unknown or missing `endpoint` values.
pub fn endpoints_list(now: DateTime<Utc>) -> EndpointIndex {
    EndpointIndex {
        service: SERVICE_NAME.to_string(),
        version: SERVICE_VERSION.to_string(),
        available_endpoints: Endpoint::ALL.iter().map(|e| e.route()).collect(),
        timestamp: now,
    }
}
