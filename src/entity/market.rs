//! Market and market state history entities.

use std::fmt;
use std::str::FromStr;

use alloy_primitives::U256;
use serde::{Deserialize, Serialize};

use crate::common::uint::{decimal, decimal_opt};
use crate::common::{bps, ChainPrefixedId};
use crate::error::SchemaError;
use crate::validate::{same_chain, same_id, Validate};

/// Lifecycle status of a prediction market.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum MarketStatus {
    Active,
    Cancelled,
    Resolved,
    Abandoned,
}

impl MarketStatus {
    pub const ALL: [Self; 4] = [Self::Active, Self::Cancelled, Self::Resolved, Self::Abandoned];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Cancelled => "Cancelled",
            Self::Resolved => "Resolved",
            Self::Abandoned => "Abandoned",
        }
    }

    /// True once the market can no longer change status.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::Active)
    }
}

impl FromStr for MarketStatus {
    type Err = SchemaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| SchemaError::UnknownVariant {
                kind: "market status",
                value: s.to_string(),
            })
    }
}

impl fmt::Display for MarketStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Database representation of a prediction market.
///
/// Created on `MarketCreated`; updated by fee, resolution, cancellation and
/// abandonment events; never deleted. `resolution` and `equilibrium` are set
/// exactly when `status` is [`MarketStatus::Resolved`]; read them together
/// through [`MarketEntity::outcome`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketEntity {
    pub id: ChainPrefixedId,
    pub dealer: String,
    #[serde(with = "decimal")]
    pub token_id: U256,
    #[serde(with = "decimal")]
    pub category: U256,
    #[serde(with = "decimal")]
    pub sub_category: U256,
    /// Unix seconds.
    #[serde(with = "decimal")]
    pub deadline: U256,
    pub description: String,
    #[serde(with = "decimal")]
    pub created_at: U256,
    #[serde(with = "decimal")]
    pub dealer_fee_bps: U256,
    pub status: MarketStatus,
    #[serde(default, with = "decimal_opt")]
    pub resolution: Option<U256>,
    #[serde(default, with = "decimal_opt")]
    pub equilibrium: Option<U256>,
    pub oracle_id: Option<String>,
    pub chain_id: u64,
    #[serde(with = "decimal")]
    pub block_number: U256,
    pub tx_hash: String,
    #[serde(with = "decimal")]
    pub timestamp: U256,
}

/// Typed view of a market's status and resolution fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarketOutcome {
    /// Not resolved; carries the status (never `Resolved`).
    Open(MarketStatus),
    /// Resolved with its final values, both in basis points.
    Resolved { resolution: U256, equilibrium: U256 },
}

impl MarketEntity {
    /// Read status and resolution fields as one value.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::ResolutionMismatch`] when the fields disagree with
    /// the status.
    pub fn outcome(&self) -> Result<MarketOutcome, SchemaError> {
        match (self.status, self.resolution, self.equilibrium) {
            (MarketStatus::Resolved, Some(resolution), Some(equilibrium)) => {
                Ok(MarketOutcome::Resolved {
                    resolution,
                    equilibrium,
                })
            }
            (status, None, None) if status != MarketStatus::Resolved => {
                Ok(MarketOutcome::Open(status))
            }
            (status, _, _) => Err(SchemaError::ResolutionMismatch {
                status: status.to_string(),
            }),
        }
    }

    /// Mark the market resolved, setting both resolution fields together.
    pub fn resolve(&mut self, resolution: U256, equilibrium: U256) {
        self.status = MarketStatus::Resolved;
        self.resolution = Some(resolution);
        self.equilibrium = Some(equilibrium);
    }

    /// Dealer fee as a fraction of one, e.g. 250 bps -> 0.025.
    #[must_use]
    pub fn dealer_fee_fraction(&self) -> Option<rust_decimal::Decimal> {
        bps::to_fraction(self.dealer_fee_bps)
    }
}

impl Validate for MarketEntity {
    const KIND: &'static str = "MarketEntity";

    fn validate(&self) -> Result<(), SchemaError> {
        same_chain(&self.id, self.id.chain_id(), self.chain_id)?;
        self.outcome().map(|_| ())
    }

    fn chain(&self) -> Option<u64> {
        Some(self.chain_id)
    }

    fn hex_fields(&self) -> Vec<(&'static str, &str)> {
        vec![("txHash", self.tx_hash.as_str())]
    }

    fn address_fields(&self) -> Vec<(&'static str, &str)> {
        vec![("dealer", self.dealer.as_str())]
    }

    fn bps_fields(&self) -> Vec<(&'static str, U256)> {
        let mut fields = vec![("dealerFeeBps", self.dealer_fee_bps)];
        if let Some(resolution) = self.resolution {
            fields.push(("resolution", resolution));
        }
        if let Some(equilibrium) = self.equilibrium {
            fields.push(("equilibrium", equilibrium));
        }
        fields
    }
}

/// Database representation of a market state transition.
///
/// Keyed `{chainId}-{marketId}-{blockNumber}`. `from_state` is `None` only on
/// the row recording the market's creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketStateHistoryEntity {
    pub id: ChainPrefixedId,
    pub chain_id: u64,
    pub market_id: ChainPrefixedId,
    pub from_state: Option<String>,
    pub to_state: String,
    #[serde(with = "decimal")]
    pub changed_at: U256,
    #[serde(with = "decimal")]
    pub block_number: U256,
    pub transaction_hash: String,
    pub reason: Option<String>,
}

impl MarketStateHistoryEntity {
    /// Id of the history row for `market_id` at `block_number`.
    #[must_use]
    pub fn id_for(market_id: &ChainPrefixedId, block_number: U256) -> ChainPrefixedId {
        ChainPrefixedId::from_parts(
            market_id.chain_id(),
            format_args!("{}-{block_number}", market_id.key()),
        )
    }

    /// True for the row recording the market's creation.
    #[must_use]
    pub fn is_creation(&self) -> bool {
        self.from_state.is_none()
    }
}

impl Validate for MarketStateHistoryEntity {
    const KIND: &'static str = "MarketStateHistoryEntity";

    fn validate(&self) -> Result<(), SchemaError> {
        same_chain(&self.market_id, self.market_id.chain_id(), self.chain_id)?;
        same_id(
            Self::id_for(&self.market_id, self.block_number).to_string(),
            &self.id,
        )
    }

    fn chain(&self) -> Option<u64> {
        Some(self.chain_id)
    }

    fn hex_fields(&self) -> Vec<(&'static str, &str)> {
        vec![("transactionHash", self.transaction_hash.as_str())]
    }
}
