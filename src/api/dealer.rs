use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{decimal_opt, unix_to_datetime, unix_to_datetime_opt};
use crate::entity::{DealerNftEntity, DealerPermissionEntity};
use crate::error::SchemaError;

/// A dealer license NFT as served by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DealerNftData {
    pub id: String,
    pub chain_id: u64,
    pub token_id: String,
    pub owner_address: String,
    pub minted_at: DateTime<Utc>,
    pub mint_block_number: String,
    pub mint_transaction_hash: String,
    pub last_transfer_at: Option<DateTime<Utc>>,
    pub last_transfer_block_number: Option<String>,
    pub last_transfer_transaction_hash: Option<String>,
}

impl TryFrom<&DealerNftEntity> for DealerNftData {
    type Error = SchemaError;

    fn try_from(entity: &DealerNftEntity) -> Result<Self, Self::Error> {
        Ok(Self {
            id: entity.id.to_string(),
            chain_id: entity.chain_id,
            token_id: entity.token_id.to_string(),
            owner_address: entity.owner_address.clone(),
            minted_at: unix_to_datetime(entity.minted_at)?,
            mint_block_number: entity.mint_block_number.to_string(),
            mint_transaction_hash: entity.mint_transaction_hash.clone(),
            last_transfer_at: unix_to_datetime_opt(entity.last_transfer_at)?,
            last_transfer_block_number: decimal_opt(entity.last_transfer_block_number),
            last_transfer_transaction_hash: entity.last_transfer_transaction_hash.clone(),
        })
    }
}

/// A license permission as served by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DealerPermissionData {
    pub id: String,
    pub chain_id: u64,
    pub token_id: String,
    pub category: u32,
    pub sub_category: u32,
    pub granted_at: DateTime<Utc>,
    pub block_number: String,
    pub transaction_hash: String,
}

impl TryFrom<&DealerPermissionEntity> for DealerPermissionData {
    type Error = SchemaError;

    fn try_from(entity: &DealerPermissionEntity) -> Result<Self, Self::Error> {
        Ok(Self {
            id: entity.id.to_string(),
            chain_id: entity.chain_id,
            token_id: entity.token_id.to_string(),
            category: entity.category,
            sub_category: entity.sub_category,
            granted_at: unix_to_datetime(entity.granted_at)?,
            block_number: entity.block_number.to_string(),
            transaction_hash: entity.transaction_hash.clone(),
        })
    }
}
