use alloy_primitives::U256;
use serde::{Deserialize, Serialize};

use crate::entity::WalletFavoriteEntity;

/// A saved item as served by the API; the same shape as the entity.
pub type WalletFavoriteData = WalletFavoriteEntity;

/// Request body for saving an item.
///
/// The wallet comes from the authenticated session and the row id from the
/// database, so neither is part of the body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateFavoriteRequest {
    pub category: String,
    pub subcategory: String,
    #[serde(rename = "type")]
    pub item_type: String,
    /// Id of the saved item.
    pub id: String,
}

impl CreateFavoriteRequest {
    /// Build the entity once the caller has the wallet and a row id.
    #[must_use]
    pub fn into_entity(
        self,
        id: i64,
        wallet_address: impl Into<String>,
        created_at: U256,
    ) -> WalletFavoriteEntity {
        WalletFavoriteEntity {
            id,
            wallet_address: wallet_address.into(),
            category: self.category,
            subcategory: self.subcategory,
            item_type: self.item_type,
            item_id: self.id,
            created_at,
        }
    }
}
