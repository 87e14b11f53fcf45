use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{decimal_opt, unix_to_datetime, unix_to_datetime_opt};
use crate::entity::OracleRequestEntity;
use crate::error::SchemaError;

/// An oracle request as served by the API.
///
/// The response fields are null until the oracle answers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OracleRequestData {
    pub id: String,
    pub chain_id: u64,
    pub market_id: String,
    pub request_id: String,
    pub requested_at: DateTime<Utc>,
    pub request_block_number: String,
    pub request_transaction_hash: String,
    pub responded_at: Option<DateTime<Utc>>,
    pub response_block_number: Option<String>,
    pub response_transaction_hash: Option<String>,
    pub result: Option<bool>,
    pub timed_out: bool,
}

impl TryFrom<&OracleRequestEntity> for OracleRequestData {
    type Error = SchemaError;

    fn try_from(entity: &OracleRequestEntity) -> Result<Self, Self::Error> {
        Ok(Self {
            id: entity.id.to_string(),
            chain_id: entity.chain_id,
            market_id: entity.market_id.to_string(),
            request_id: entity.request_id.clone(),
            requested_at: unix_to_datetime(entity.requested_at)?,
            request_block_number: entity.request_block_number.to_string(),
            request_transaction_hash: entity.request_transaction_hash.clone(),
            responded_at: unix_to_datetime_opt(entity.responded_at)?,
            response_block_number: decimal_opt(entity.response_block_number),
            response_transaction_hash: entity.response_transaction_hash.clone(),
            result: entity.result,
            timed_out: entity.timed_out,
        })
    }
}
