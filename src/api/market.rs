use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::unix_to_datetime;
use crate::entity::{MarketEntity, MarketStateHistoryEntity, MarketStatus};
use crate::error::SchemaError;

/// A market as served by the API.
///
/// `title` and the human-readable `outcome` come from off-chain metadata, so
/// there is no conversion from [`MarketEntity`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketData {
    pub id: String,
    pub chain_id: u64,
    pub market_id: String,
    pub dealer_nft_token_id: String,
    pub dealer_address: String,
    pub title: String,
    pub description: Option<String>,
    pub category: String,
    pub status: MarketStatus,
    pub outcome: Option<String>,
    pub created_at: DateTime<Utc>,
    pub resolved_at: Option<DateTime<Utc>>,
    pub block_number: String,
    pub transaction_hash: String,
}

/// A prediction as served by the API.
///
/// `created_at` is the placement time and `updated_at` the time of the latest
/// update or claim; the `last_*` provenance follows `updated_at`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionData {
    pub id: String,
    pub chain_id: u64,
    pub market_id: String,
    pub user_address: String,
    pub amount: String,
    pub percentage: u32,
    pub outcome: String,
    pub has_claimed: bool,
    pub claimed_amount: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub last_block_number: String,
    pub last_transaction_hash: String,
}

/// A market state transition as served by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketStateHistoryData {
    pub id: String,
    pub chain_id: u64,
    pub market_id: String,
    pub from_state: Option<String>,
    pub to_state: String,
    pub changed_at: DateTime<Utc>,
    pub block_number: String,
    pub transaction_hash: String,
    pub reason: Option<String>,
}

impl TryFrom<&MarketStateHistoryEntity> for MarketStateHistoryData {
    type Error = SchemaError;

    fn try_from(entity: &MarketStateHistoryEntity) -> Result<Self, Self::Error> {
        Ok(Self {
            id: entity.id.to_string(),
            chain_id: entity.chain_id,
            market_id: entity.market_id.to_string(),
            from_state: entity.from_state.clone(),
            to_state: entity.to_state.clone(),
            changed_at: unix_to_datetime(entity.changed_at)?,
            block_number: entity.block_number.to_string(),
            transaction_hash: entity.transaction_hash.clone(),
            reason: entity.reason.clone(),
        })
    }
}

/// Market counts, overall and broken down by status and by category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketStatsData {
    pub total: u64,
    pub by_status: BTreeMap<String, u64>,
    pub by_category: BTreeMap<String, u64>,
}

impl MarketStatsData {
    /// Tally `markets`. Statuses with no markets are left out.
    #[must_use]
    pub fn from_markets(markets: &[MarketEntity]) -> Self {
        markets.iter().fold(Self::default(), |mut stats, market| {
            stats.total += 1;
            *stats
                .by_status
                .entry(market.status.as_str().to_string())
                .or_default() += 1;
            *stats
                .by_category
                .entry(market.category.to_string())
                .or_default() += 1;
            stats
        })
    }
}
