//! Dealer license NFT and permission entities.

use alloy_primitives::U256;
use serde::{Deserialize, Serialize};

use crate::common::uint::{decimal, decimal_opt};
use crate::common::ChainPrefixedId;
use crate::error::SchemaError;
use crate::validate::{same_id, Validate};

/// Provenance of a license transfer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferRecord {
    pub at: U256,
    pub block_number: U256,
    pub transaction_hash: String,
}

/// Database representation of a dealer license NFT.
///
/// Mint fields never change. A transfer overwrites the owner and all three
/// `last_transfer_*` fields at once; see [`DealerNftEntity::record_transfer`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DealerNftEntity {
    pub id: ChainPrefixedId,
    pub chain_id: u64,
    #[serde(with = "decimal")]
    pub token_id: U256,
    pub owner_address: String,
    #[serde(with = "decimal")]
    pub minted_at: U256,
    #[serde(with = "decimal")]
    pub mint_block_number: U256,
    pub mint_transaction_hash: String,
    #[serde(default, with = "decimal_opt")]
    pub last_transfer_at: Option<U256>,
    #[serde(default, with = "decimal_opt")]
    pub last_transfer_block_number: Option<U256>,
    pub last_transfer_transaction_hash: Option<String>,
}

impl DealerNftEntity {
    /// Id of the NFT entity for `token_id` on `chain_id`.
    #[must_use]
    pub fn id_for(chain_id: u64, token_id: U256) -> ChainPrefixedId {
        ChainPrefixedId::from_parts(chain_id, token_id)
    }

    /// Read the last-transfer fields as one value.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::PartialTransfer`] when only some are set.
    pub fn last_transfer(&self) -> Result<Option<TransferRecord>, SchemaError> {
        match (
            self.last_transfer_at,
            self.last_transfer_block_number,
            &self.last_transfer_transaction_hash,
        ) {
            (None, None, None) => Ok(None),
            (Some(at), Some(block_number), Some(hash)) => Ok(Some(TransferRecord {
                at,
                block_number,
                transaction_hash: hash.clone(),
            })),
            _ => Err(SchemaError::PartialTransfer),
        }
    }

    /// Apply a transfer: new owner plus all three transfer fields.
    pub fn record_transfer(&mut self, owner: impl Into<String>, transfer: TransferRecord) {
        self.owner_address = owner.into();
        self.last_transfer_at = Some(transfer.at);
        self.last_transfer_block_number = Some(transfer.block_number);
        self.last_transfer_transaction_hash = Some(transfer.transaction_hash);
    }
}

impl Validate for DealerNftEntity {
    const KIND: &'static str = "DealerNftEntity";

    fn validate(&self) -> Result<(), SchemaError> {
        same_id(Self::id_for(self.chain_id, self.token_id).to_string(), &self.id)?;
        self.last_transfer().map(|_| ())
    }

    fn chain(&self) -> Option<u64> {
        Some(self.chain_id)
    }

    fn hex_fields(&self) -> Vec<(&'static str, &str)> {
        let mut fields = vec![("mintTransactionHash", self.mint_transaction_hash.as_str())];
        if let Some(hash) = &self.last_transfer_transaction_hash {
            fields.push(("lastTransferTransactionHash", hash.as_str()));
        }
        fields
    }

    fn address_fields(&self) -> Vec<(&'static str, &str)> {
        vec![("ownerAddress", self.owner_address.as_str())]
    }
}

/// Database representation of a license's permission for one
/// category/subcategory pair. Immutable once granted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DealerPermissionEntity {
    pub id: ChainPrefixedId,
    pub chain_id: u64,
    #[serde(with = "decimal")]
    pub token_id: U256,
    pub category: u32,
    pub sub_category: u32,
    #[serde(with = "decimal")]
    pub granted_at: U256,
    #[serde(with = "decimal")]
    pub block_number: U256,
    pub transaction_hash: String,
}

impl DealerPermissionEntity {
    /// Id of the permission: `{chainId}-{tokenId}-{category}-{subCategory}`.
    #[must_use]
    pub fn id_for(chain_id: u64, token_id: U256, category: u32, sub_category: u32) -> ChainPrefixedId {
        ChainPrefixedId::from_parts(chain_id, format_args!("{token_id}-{category}-{sub_category}"))
    }
}

impl Validate for DealerPermissionEntity {
    const KIND: &'static str = "DealerPermissionEntity";

    fn validate(&self) -> Result<(), SchemaError> {
        same_id(
            Self::id_for(self.chain_id, self.token_id, self.category, self.sub_category).to_string(),
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
