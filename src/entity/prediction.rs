//! Prediction and claim entities.

use std::fmt;

use alloy_primitives::U256;
use serde::{Deserialize, Serialize};

use crate::common::uint::decimal;
use crate::common::{ChainPrefixedId, PredictionId, TxLogId};
use crate::error::SchemaError;
use crate::validate::{same_chain, same_id, Validate};

/// Database representation of a user's prediction.
///
/// `amount` and `percentage` change on `PredictionUpdated`; `claimed` flips
/// once, when the predictor claims winnings or a refund.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionEntity {
    pub id: PredictionId,
    pub market_id: ChainPrefixedId,
    pub predictor: String,
    #[serde(with = "decimal")]
    pub amount: U256,
    /// Basis points.
    #[serde(with = "decimal")]
    pub percentage: U256,
    #[serde(with = "decimal")]
    pub placed_at: U256,
    pub claimed: bool,
    pub chain_id: u64,
    #[serde(with = "decimal")]
    pub block_number: U256,
    pub tx_hash: String,
    #[serde(with = "decimal")]
    pub timestamp: U256,
}

impl Validate for PredictionEntity {
    const KIND: &'static str = "PredictionEntity";

    fn validate(&self) -> Result<(), SchemaError> {
        same_chain(&self.id, self.id.chain_id(), self.chain_id)?;
        same_id(self.id.market_id().to_string(), &self.market_id)?;
        same_id(
            format!("{}-{}-{}", self.chain_id, self.market_id.key(), self.predictor),
            &self.id,
        )
    }

    fn chain(&self) -> Option<u64> {
        Some(self.chain_id)
    }

    fn hex_fields(&self) -> Vec<(&'static str, &str)> {
        vec![("txHash", self.tx_hash.as_str())]
    }

    fn address_fields(&self) -> Vec<(&'static str, &str)> {
        vec![("predictor", self.predictor.as_str())]
    }

    fn bps_fields(&self) -> Vec<(&'static str, U256)> {
        vec![("percentage", self.percentage)]
    }
}

/// Kind of payout a claim records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClaimType {
    Winnings,
    Refund,
}

impl ClaimType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Winnings => "winnings",
            Self::Refund => "refund",
        }
    }
}

impl fmt::Display for ClaimType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Database representation of a claim (winnings or refund). Immutable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClaimEntity {
    pub id: TxLogId,
    pub market_id: ChainPrefixedId,
    pub claimer: String,
    #[serde(with = "decimal")]
    pub amount: U256,
    pub claim_type: ClaimType,
    pub chain_id: u64,
    #[serde(with = "decimal")]
    pub block_number: U256,
    pub tx_hash: String,
    #[serde(with = "decimal")]
    pub timestamp: U256,
}

impl Validate for ClaimEntity {
    const KIND: &'static str = "ClaimEntity";

    fn validate(&self) -> Result<(), SchemaError> {
        same_chain(&self.market_id, self.market_id.chain_id(), self.chain_id)?;
        same_id(self.tx_hash.clone(), &self.id.transaction_hash())
    }

    fn chain(&self) -> Option<u64> {
        Some(self.chain_id)
    }

    fn hex_fields(&self) -> Vec<(&'static str, &str)> {
        vec![("txHash", self.tx_hash.as_str())]
    }

    fn address_fields(&self) -> Vec<(&'static str, &str)> {
        vec![("claimer", self.claimer.as_str())]
    }
}
