use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::unix_to_datetime;
use crate::entity::{FeeWithdrawalEntity, WithdrawalType};
use crate::error::SchemaError;

/// A fee withdrawal as served by the API. `market_id` is `None` for system
/// withdrawals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeeWithdrawalData {
    pub id: String,
    pub chain_id: u64,
    pub market_id: Option<String>,
    pub withdrawer_address: String,
    pub withdrawal_type: WithdrawalType,
    pub amount: String,
    pub withdrawn_at: DateTime<Utc>,
    pub block_number: String,
    pub transaction_hash: String,
}

impl TryFrom<&FeeWithdrawalEntity> for FeeWithdrawalData {
    type Error = SchemaError;

    fn try_from(entity: &FeeWithdrawalEntity) -> Result<Self, Self::Error> {
        Ok(Self {
            id: entity.id.to_string(),
            chain_id: entity.chain_id,
            market_id: entity.market_id.as_ref().map(ToString::to_string),
            withdrawer_address: entity.withdrawer_address.clone(),
            withdrawal_type: entity.withdrawal_type,
            amount: entity.amount.to_string(),
            withdrawn_at: unix_to_datetime(entity.withdrawn_at)?,
            block_number: entity.block_number.to_string(),
            transaction_hash: entity.transaction_hash.clone(),
        })
    }
}
