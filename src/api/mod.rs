//! API payload shapes.
//!
//! What the query service returns. Integers become decimal strings, unix
//! timestamps become RFC 3339 datetimes and composite ids become plain
//! strings. Where an entity carries everything a payload needs, the payload
//! implements `TryFrom<&Entity>`; the only failure is a timestamp chrono
//! cannot represent.

mod dealer;
mod favorite;
mod fee;
mod market;
mod oracle;
mod pagination;
mod service;

use alloy_primitives::U256;
use chrono::{DateTime, Utc};

use crate::error::SchemaError;

pub use dealer::{DealerNftData, DealerPermissionData};
pub use favorite::{CreateFavoriteRequest, WalletFavoriteData};
pub use fee::FeeWithdrawalData;
pub use market::{MarketData, MarketStateHistoryData, MarketStatsData, PredictionData};
pub use oracle::OracleRequestData;
pub use pagination::{Paginated, PaginationMeta};
pub use service::{HealthData, HealthStatus, SseStatsData};

/// Convert unix seconds to a UTC datetime.
///
/// # Errors
///
/// Returns [`SchemaError::TimestampOutOfRange`] when chrono cannot represent
/// the instant.
pub fn unix_to_datetime(value: U256) -> Result<DateTime<Utc>, SchemaError> {
    u64::try_from(value)
        .ok()
        .and_then(|secs| i64::try_from(secs).ok())
        .and_then(|secs| DateTime::from_timestamp(secs, 0))
        .ok_or(SchemaError::TimestampOutOfRange { value })
}

fn unix_to_datetime_opt(value: Option<U256>) -> Result<Option<DateTime<Utc>>, SchemaError> {
    value.map(unix_to_datetime).transpose()
}

fn decimal_opt(value: Option<U256>) -> Option<String> {
    value.map(|v| v.to_string())
}
