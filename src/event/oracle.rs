//! OracleResolver contract events and the oracle type enumeration.

use std::fmt;
use std::str::FromStr;

use alloy_primitives::U256;
use serde::{Deserialize, Serialize};

use crate::common::uint::decimal;
use crate::common::Address;
use crate::error::SchemaError;
use crate::validate::Validate;

/// Kinds of oracle supported by the resolver contract.
///
/// The discriminants are the on-chain encoding. Entities store the variant
/// name instead (`"Manual"`, `"PriceFeed"`, `"CustomData"`), which is also
/// the serde representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum OracleType {
    /// Resolved by hand; has no data source.
    Manual = 0,
    /// Backed by a price feed contract.
    PriceFeed = 1,
    /// Backed by a custom data contract.
    CustomData = 2,
}

impl OracleType {
    /// All oracle types in discriminant order.
    pub const ALL: [Self; 3] = [Self::Manual, Self::PriceFeed, Self::CustomData];

    /// On-chain encoding.
    #[must_use]
    pub const fn as_u8(self) -> u8 {
        self as u8
    }

    /// Variant name, as stored on entities.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Manual => "Manual",
            Self::PriceFeed => "PriceFeed",
            Self::CustomData => "CustomData",
        }
    }

    /// Whether oracles of this type read from a data source contract.
    #[must_use]
    pub const fn has_data_source(self) -> bool {
        !matches!(self, Self::Manual)
    }
}

impl TryFrom<u8> for OracleType {
    type Error = SchemaError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Manual),
            1 => Ok(Self::PriceFeed),
            2 => Ok(Self::CustomData),
            _ => Err(SchemaError::UnknownOracleType { value }),
        }
    }
}

impl From<OracleType> for u8 {
    fn from(oracle_type: OracleType) -> Self {
        oracle_type.as_u8()
    }
}

impl FromStr for OracleType {
    type Err = SchemaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| SchemaError::UnknownVariant {
                kind: "oracle type",
                value: s.to_string(),
            })
    }
}

impl fmt::Display for OracleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Emitted when a new oracle is registered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OracleRegisteredArgs {
    pub oracle_id: String,
    /// Raw on-chain value; decode with [`OracleRegisteredArgs::oracle_type`].
    pub oracle_type: u8,
    pub data_source: Address,
    #[serde(with = "decimal")]
    pub min_value: U256,
    #[serde(with = "decimal")]
    pub max_value: U256,
}

impl OracleRegisteredArgs {
    /// Decode the raw oracle type.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::UnknownOracleType`] for values other than 0, 1, 2.
    pub fn oracle_type(&self) -> Result<OracleType, SchemaError> {
        OracleType::try_from(self.oracle_type)
    }
}

impl Validate for OracleRegisteredArgs {
    const KIND: &'static str = "OracleRegistered";

    fn validate(&self) -> Result<(), SchemaError> {
        self.oracle_type()?;
        if self.min_value > self.max_value {
            return Err(SchemaError::InvalidOracleBounds {
                min: self.min_value,
                max: self.max_value,
            });
        }
        Ok(())
    }

    fn address_fields(&self) -> Vec<(&'static str, &str)> {
        vec![("dataSource", self.data_source.as_str())]
    }
}

/// Emitted when oracle data is updated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OracleDataUpdatedArgs {
    pub oracle_id: String,
    #[serde(with = "decimal")]
    pub value: U256,
    #[serde(with = "decimal")]
    pub percentage: U256,
}

/// Emitted when an oracle updater's authorization changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdaterAuthorizedArgs {
    pub updater: Address,
    pub authorized: bool,
}
