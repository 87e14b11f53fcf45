//! On-chain event shapes.
//!
//! Each `*Args` struct mirrors the arguments of one contract event. The log
//! decoder pairs the arguments with a [`BaseEventContext`] describing where
//! the log was found; [`DecodedEvent`] carries the pair.
//!
//! # Events by contract
//!
//! - **PredictionMarket**: [`MarketCreatedArgs`], [`PredictionPlacedArgs`],
//!   [`PredictionUpdatedArgs`], [`MarketResolvedArgs`], [`MarketCancelledArgs`],
//!   [`MarketAbandonedArgs`], [`DealerFeeSetArgs`], [`WinningsClaimedArgs`],
//!   [`RefundClaimedArgs`], [`DealerFeesWithdrawnArgs`], [`SystemFeesWithdrawnArgs`]
//! - **DealerNFT**: [`LicenseIssuedArgs`], [`PermissionsSetArgs`],
//!   [`LicenseTransferredArgs`]
//! - **OracleResolver**: [`OracleRegisteredArgs`], [`OracleDataUpdatedArgs`],
//!   [`UpdaterAuthorizedArgs`]

mod dealer;
mod market;
mod oracle;

use std::fmt;
use std::str::FromStr;

use alloy_primitives::U256;
use serde::{Deserialize, Serialize};

use crate::common::uint::decimal;
use crate::common::{Hex, TxLogId};
use crate::error::SchemaError;
use crate::validate::Validate;

pub use dealer::{LicenseIssuedArgs, LicenseTransferredArgs, PermissionsSetArgs};
pub use market::{
    DealerFeeSetArgs, DealerFeesWithdrawnArgs, MarketAbandonedArgs, MarketCancelledArgs,
    MarketCreatedArgs, MarketResolvedArgs, PredictionPlacedArgs, PredictionUpdatedArgs,
    RefundClaimedArgs, SystemFeesWithdrawnArgs, WinningsClaimedArgs,
};
pub use oracle::{
    OracleDataUpdatedArgs, OracleRegisteredArgs, OracleType, UpdaterAuthorizedArgs,
};

/// Fields shared by every decoded log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BaseEventContext {
    #[serde(with = "decimal")]
    pub block_number: U256,
    #[serde(with = "decimal")]
    pub block_timestamp: U256,
    pub transaction_hash: Hex,
    #[serde(with = "decimal")]
    pub log_index: U256,
    pub chain_id: u64,
}

impl BaseEventContext {
    /// The `{transactionHash}-{logIndex}` id of this log.
    #[must_use]
    pub fn tx_log_id(&self) -> TxLogId {
        TxLogId::from_parts(self.transaction_hash.as_str(), self.log_index)
    }
}

impl Validate for BaseEventContext {
    const KIND: &'static str = "BaseEventContext";

    fn validate(&self) -> Result<(), SchemaError> {
        Ok(())
    }

    fn chain(&self) -> Option<u64> {
        Some(self.chain_id)
    }

    fn hex_fields(&self) -> Vec<(&'static str, &str)> {
        vec![("transactionHash", self.transaction_hash.as_str())]
    }
}

/// Contract that emits an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Contract {
    PredictionMarket,
    DealerNft,
    OracleResolver,
}

/// Name of a recognised contract event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    MarketCreated,
    PredictionPlaced,
    PredictionUpdated,
    MarketResolved,
    MarketCancelled,
    MarketAbandoned,
    DealerFeeSet,
    WinningsClaimed,
    RefundClaimed,
    DealerFeesWithdrawn,
    SystemFeesWithdrawn,
    LicenseIssued,
    PermissionsSet,
    LicenseTransferred,
    OracleRegistered,
    OracleDataUpdated,
    UpdaterAuthorized,
}

impl EventKind {
    /// Every event kind, grouped by contract.
    pub const ALL: [Self; 17] = [
        Self::MarketCreated,
        Self::PredictionPlaced,
        Self::PredictionUpdated,
        Self::MarketResolved,
        Self::MarketCancelled,
        Self::MarketAbandoned,
        Self::DealerFeeSet,
        Self::WinningsClaimed,
        Self::RefundClaimed,
        Self::DealerFeesWithdrawn,
        Self::SystemFeesWithdrawn,
        Self::LicenseIssued,
        Self::PermissionsSet,
        Self::LicenseTransferred,
        Self::OracleRegistered,
        Self::OracleDataUpdated,
        Self::UpdaterAuthorized,
    ];

    /// Event name as declared in the contract ABI.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::MarketCreated => "MarketCreated",
            Self::PredictionPlaced => "PredictionPlaced",
            Self::PredictionUpdated => "PredictionUpdated",
            Self::MarketResolved => "MarketResolved",
            Self::MarketCancelled => "MarketCancelled",
            Self::MarketAbandoned => "MarketAbandoned",
            Self::DealerFeeSet => "DealerFeeSet",
            Self::WinningsClaimed => "WinningsClaimed",
            Self::RefundClaimed => "RefundClaimed",
            Self::DealerFeesWithdrawn => "DealerFeesWithdrawn",
            Self::SystemFeesWithdrawn => "SystemFeesWithdrawn",
            Self::LicenseIssued => "LicenseIssued",
            Self::PermissionsSet => "PermissionsSet",
            Self::LicenseTransferred => "LicenseTransferred",
            Self::OracleRegistered => "OracleRegistered",
            Self::OracleDataUpdated => "OracleDataUpdated",
            Self::UpdaterAuthorized => "UpdaterAuthorized",
        }
    }

    /// Contract that emits this event.
    #[must_use]
    pub const fn contract(self) -> Contract {
        match self {
            Self::LicenseIssued | Self::PermissionsSet | Self::LicenseTransferred => {
                Contract::DealerNft
            }
            Self::OracleRegistered | Self::OracleDataUpdated | Self::UpdaterAuthorized => {
                Contract::OracleResolver
            }
            _ => Contract::PredictionMarket,
        }
    }
}

impl FromStr for EventKind {
    type Err = SchemaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| SchemaError::UnknownVariant {
                kind: "event",
                value: s.to_string(),
            })
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Arguments of any recognised event, tagged by event name.
///
/// Serialized as `{"event": "MarketCreated", "args": {...}}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", content = "args")]
pub enum ContractEvent {
    MarketCreated(MarketCreatedArgs),
    PredictionPlaced(PredictionPlacedArgs),
    PredictionUpdated(PredictionUpdatedArgs),
    MarketResolved(MarketResolvedArgs),
    MarketCancelled(MarketCancelledArgs),
    MarketAbandoned(MarketAbandonedArgs),
    DealerFeeSet(DealerFeeSetArgs),
    WinningsClaimed(WinningsClaimedArgs),
    RefundClaimed(RefundClaimedArgs),
    DealerFeesWithdrawn(DealerFeesWithdrawnArgs),
    SystemFeesWithdrawn(SystemFeesWithdrawnArgs),
    LicenseIssued(LicenseIssuedArgs),
    PermissionsSet(PermissionsSetArgs),
    LicenseTransferred(LicenseTransferredArgs),
    OracleRegistered(OracleRegisteredArgs),
    OracleDataUpdated(OracleDataUpdatedArgs),
    UpdaterAuthorized(UpdaterAuthorizedArgs),
}

impl ContractEvent {
    /// Name of the event.
    #[must_use]
    pub const fn kind(&self) -> EventKind {
        match self {
            Self::MarketCreated(_) => EventKind::MarketCreated,
            Self::PredictionPlaced(_) => EventKind::PredictionPlaced,
            Self::PredictionUpdated(_) => EventKind::PredictionUpdated,
            Self::MarketResolved(_) => EventKind::MarketResolved,
            Self::MarketCancelled(_) => EventKind::MarketCancelled,
            Self::MarketAbandoned(_) => EventKind::MarketAbandoned,
            Self::DealerFeeSet(_) => EventKind::DealerFeeSet,
            Self::WinningsClaimed(_) => EventKind::WinningsClaimed,
            Self::RefundClaimed(_) => EventKind::RefundClaimed,
            Self::DealerFeesWithdrawn(_) => EventKind::DealerFeesWithdrawn,
            Self::SystemFeesWithdrawn(_) => EventKind::SystemFeesWithdrawn,
            Self::LicenseIssued(_) => EventKind::LicenseIssued,
            Self::PermissionsSet(_) => EventKind::PermissionsSet,
            Self::LicenseTransferred(_) => EventKind::LicenseTransferred,
            Self::OracleRegistered(_) => EventKind::OracleRegistered,
            Self::OracleDataUpdated(_) => EventKind::OracleDataUpdated,
            Self::UpdaterAuthorized(_) => EventKind::UpdaterAuthorized,
        }
    }

    /// On-chain market id the event refers to, for market-scoped events.
    #[must_use]
    pub fn market_id(&self) -> Option<&str> {
        match self {
            Self::MarketCreated(a) => Some(&a.market_id),
            Self::PredictionPlaced(a) => Some(&a.market_id),
            Self::PredictionUpdated(a) => Some(&a.market_id),
            Self::MarketResolved(a) => Some(&a.market_id),
            Self::MarketCancelled(a) => Some(&a.market_id),
            Self::MarketAbandoned(a) => Some(&a.market_id),
            Self::DealerFeeSet(a) => Some(&a.market_id),
            Self::WinningsClaimed(a) => Some(&a.market_id),
            Self::RefundClaimed(a) => Some(&a.market_id),
            Self::DealerFeesWithdrawn(a) => Some(&a.market_id),
            _ => None,
        }
    }

    fn addresses(&self) -> Vec<(&'static str, &str)> {
        match self {
            Self::MarketCreated(a) => vec![("dealer", a.dealer.as_str())],
            Self::PredictionPlaced(a) => vec![("predictor", a.predictor.as_str())],
            Self::PredictionUpdated(a) => vec![("predictor", a.predictor.as_str())],
            Self::WinningsClaimed(a) => vec![("predictor", a.predictor.as_str())],
            Self::RefundClaimed(a) => vec![("predictor", a.predictor.as_str())],
            Self::DealerFeesWithdrawn(a) => vec![("dealer", a.dealer.as_str())],
            Self::SystemFeesWithdrawn(a) => vec![("recipient", a.recipient.as_str())],
            Self::LicenseIssued(a) => vec![("dealer", a.dealer.as_str())],
            Self::LicenseTransferred(a) => {
                vec![("from", a.from.as_str()), ("to", a.to.as_str())]
            }
            Self::OracleRegistered(a) => a.address_fields(),
            Self::UpdaterAuthorized(a) => vec![("updater", a.updater.as_str())],
            _ => Vec::new(),
        }
    }

    fn bps(&self) -> Vec<(&'static str, U256)> {
        match self {
            Self::PredictionPlaced(a) => vec![("percentage", a.percentage)],
            Self::PredictionUpdated(a) => vec![("newPercentage", a.new_percentage)],
            Self::DealerFeeSet(a) => vec![("feeBps", a.fee_bps)],
            _ => Vec::new(),
        }
    }
}

/// A decoded log: event arguments plus where they were found.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecodedEvent {
    pub context: BaseEventContext,
    #[serde(flatten)]
    pub event: ContractEvent,
}

impl DecodedEvent {
    #[must_use]
    pub fn new(context: BaseEventContext, event: ContractEvent) -> Self {
        Self { context, event }
    }

    /// Name of the decoded event.
    #[must_use]
    pub const fn kind(&self) -> EventKind {
        self.event.kind()
    }
}

impl Validate for DecodedEvent {
    const KIND: &'static str = "DecodedEvent";

    fn validate(&self) -> Result<(), SchemaError> {
        match &self.event {
            ContractEvent::PermissionsSet(args) => args.validate(),
            ContractEvent::OracleRegistered(args) => args.validate(),
            _ => Ok(()),
        }
    }

    fn chain(&self) -> Option<u64> {
        Some(self.context.chain_id)
    }

    fn hex_fields(&self) -> Vec<(&'static str, &str)> {
        self.context.hex_fields()
    }

    fn address_fields(&self) -> Vec<(&'static str, &str)> {
        self.event.addresses()
    }

    fn bps_fields(&self) -> Vec<(&'static str, U256)> {
        self.event.bps()
    }
}
