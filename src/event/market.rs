//! PredictionMarket contract events.

use alloy_primitives::U256;
use serde::{Deserialize, Serialize};

use crate::common::uint::decimal;
use crate::common::Address;

/// Emitted when a new prediction market is created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketCreatedArgs {
    pub market_id: String,
    pub dealer: Address,
    #[serde(with = "decimal")]
    pub token_id: U256,
    #[serde(with = "decimal")]
    pub category: U256,
    #[serde(with = "decimal")]
    pub sub_category: U256,
    #[serde(with = "decimal")]
    pub deadline: U256,
    pub description: String,
}

/// Emitted when a user places a prediction on a market.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionPlacedArgs {
    pub market_id: String,
    pub predictor: Address,
    #[serde(with = "decimal")]
    pub amount: U256,
    #[serde(with = "decimal")]
    pub percentage: U256,
}

/// Emitted when a user updates their prediction within the grace period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionUpdatedArgs {
    pub market_id: String,
    pub predictor: Address,
    #[serde(with = "decimal")]
    pub new_amount: U256,
    #[serde(with = "decimal")]
    pub new_percentage: U256,
}

/// Emitted when a market is resolved with a final outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketResolvedArgs {
    pub market_id: String,
    #[serde(with = "decimal")]
    pub resolution: U256,
    #[serde(with = "decimal")]
    pub equilibrium: U256,
}

/// Emitted when a market is cancelled before resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketCancelledArgs {
    pub market_id: String,
}

/// Emitted when a market is abandoned without resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketAbandonedArgs {
    pub market_id: String,
}

/// Emitted when a dealer updates their fee for a market.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DealerFeeSetArgs {
    pub market_id: String,
    #[serde(with = "decimal")]
    pub fee_bps: U256,
}

/// Emitted when a winner claims their payout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WinningsClaimedArgs {
    pub market_id: String,
    pub predictor: Address,
    #[serde(with = "decimal")]
    pub amount: U256,
}

/// Emitted when a user claims a refund from a cancelled or abandoned market.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefundClaimedArgs {
    pub market_id: String,
    pub predictor: Address,
    #[serde(with = "decimal")]
    pub amount: U256,
}

/// Emitted when a dealer withdraws accumulated fees.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DealerFeesWithdrawnArgs {
    pub market_id: String,
    pub dealer: Address,
    #[serde(with = "decimal")]
    pub amount: U256,
}

/// Emitted when system fees are withdrawn to the treasury.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemFeesWithdrawnArgs {
    pub recipient: Address,
    #[serde(with = "decimal")]
    pub amount: U256,
}
