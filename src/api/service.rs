//! Service status payloads.

use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Overall health reported by the health endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Unhealthy,
}

/// Health endpoint payload. `timestamp` is unix seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthData {
    pub status: HealthStatus,
    pub timestamp: i64,
}

impl HealthData {
    /// Report `status` as of now.
    #[must_use]
    pub fn now(status: HealthStatus) -> Self {
        Self {
            status,
            timestamp: Utc::now().timestamp(),
        }
    }
}

/// Server-sent events connection counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SseStatsData {
    pub clients: u64,
    pub subscriptions: u64,
}
