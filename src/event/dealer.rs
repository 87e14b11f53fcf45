//! DealerNFT contract events.

use alloy_primitives::U256;
use serde::{Deserialize, Serialize};

use crate::common::uint::{decimal, decimal_vec};
use crate::common::Address;
use crate::error::SchemaError;
use crate::validate::Validate;

/// Emitted when a new dealer license NFT is minted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LicenseIssuedArgs {
    #[serde(with = "decimal")]
    pub token_id: U256,
    pub dealer: Address,
}

/// Emitted when permissions are set for a dealer license.
///
/// One event grants the license every listed subcategory of `category`;
/// `sub_categories` keeps the on-chain order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PermissionsSetArgs {
    #[serde(with = "decimal")]
    pub token_id: U256,
    #[serde(with = "decimal")]
    pub category: U256,
    #[serde(with = "decimal_vec")]
    pub sub_categories: Vec<U256>,
}

impl Validate for PermissionsSetArgs {
    const KIND: &'static str = "PermissionsSet";

    fn validate(&self) -> Result<(), SchemaError> {
        if self.sub_categories.is_empty() {
            return Err(SchemaError::EmptySubCategories);
        }
        Ok(())
    }
}

/// Emitted when a dealer license is transferred.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LicenseTransferredArgs {
    #[serde(with = "decimal")]
    pub token_id: U256,
    pub from: Address,
    pub to: Address,
}
