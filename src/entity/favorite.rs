//! Wallet favorite entity.

use alloy_primitives::U256;
use serde::{Deserialize, Serialize};

use crate::common::uint::decimal;
use crate::error::SchemaError;
use crate::validate::Validate;

/// Database representation of a user's saved item.
///
/// `id` is assigned by the database. The item is addressed by `category`,
/// `subcategory`, `item_type` (serialized as `type`) and `item_id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WalletFavoriteEntity {
    pub id: i64,
    pub wallet_address: String,
    pub category: String,
    pub subcategory: String,
    #[serde(rename = "type")]
    pub item_type: String,
    pub item_id: String,
    #[serde(with = "decimal")]
    pub created_at: U256,
}

impl Validate for WalletFavoriteEntity {
    const KIND: &'static str = "WalletFavoriteEntity";

    fn validate(&self) -> Result<(), SchemaError> {
        Ok(())
    }

    fn address_fields(&self) -> Vec<(&'static str, &str)> {
        vec![("walletAddress", self.wallet_address.as_str())]
    }
}
