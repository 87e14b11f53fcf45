//! Oracle and oracle request entities.

use alloy_primitives::U256;
use serde::{Deserialize, Serialize};

use crate::common::uint::{decimal, decimal_opt};
use crate::common::ChainPrefixedId;
use crate::error::SchemaError;
use crate::event::OracleType;
use crate::validate::{same_chain, same_id, Validate};

/// Database representation of a registered oracle.
///
/// `data_source` is `None` for manual oracles and set for every other type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OracleEntity {
    pub id: ChainPrefixedId,
    pub oracle_id: String,
    pub oracle_type: OracleType,
    pub data_source: Option<String>,
    #[serde(with = "decimal")]
    pub min_value: U256,
    #[serde(with = "decimal")]
    pub max_value: U256,
    pub chain_id: u64,
    #[serde(with = "decimal")]
    pub block_number: U256,
    pub tx_hash: String,
    #[serde(with = "decimal")]
    pub timestamp: U256,
}

impl Validate for OracleEntity {
    const KIND: &'static str = "OracleEntity";

    fn validate(&self) -> Result<(), SchemaError> {
        same_id(
            format!("{}-{}", self.chain_id, self.oracle_id),
            &self.id,
        )?;
        if self.oracle_type.has_data_source() != self.data_source.is_some() {
            return Err(SchemaError::OracleSourceMismatch {
                oracle_type: self.oracle_type.to_string(),
            });
        }
        if self.min_value > self.max_value {
            return Err(SchemaError::InvalidOracleBounds {
                min: self.min_value,
                max: self.max_value,
            });
        }
        Ok(())
    }

    fn chain(&self) -> Option<u64> {
        Some(self.chain_id)
    }

    fn hex_fields(&self) -> Vec<(&'static str, &str)> {
        vec![("txHash", self.tx_hash.as_str())]
    }

    fn address_fields(&self) -> Vec<(&'static str, &str)> {
        self.data_source
            .as_deref()
            .map(|source| vec![("dataSource", source)])
            .unwrap_or_default()
    }
}

/// The response half of an oracle request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OracleResponse {
    pub responded_at: U256,
    pub block_number: U256,
    pub transaction_hash: String,
    pub result: bool,
}

/// Typed view of an oracle request's lifecycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OracleRequestState {
    /// Waiting for a response.
    Pending,
    /// Answered.
    Responded(OracleResponse),
    /// Gave up without an answer.
    TimedOut,
}

/// Database representation of an oracle request.
///
/// The request half is always set. The four response fields are null until
/// the response arrives and then set together; a request that times out keeps
/// them null. Use [`OracleRequestEntity::state`] to read them as one value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OracleRequestEntity {
    pub id: ChainPrefixedId,
    pub chain_id: u64,
    pub market_id: ChainPrefixedId,
    pub request_id: String,
    #[serde(with = "decimal")]
    pub requested_at: U256,
    #[serde(with = "decimal")]
    pub request_block_number: U256,
    pub request_transaction_hash: String,
    #[serde(default, with = "decimal_opt")]
    pub responded_at: Option<U256>,
    #[serde(default, with = "decimal_opt")]
    pub response_block_number: Option<U256>,
    pub response_transaction_hash: Option<String>,
    pub result: Option<bool>,
    pub timed_out: bool,
}

impl OracleRequestEntity {
    /// Read the response fields as one value.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::PartialResponse`] when only some response fields
    /// are set, and [`SchemaError::TimedOutWithResponse`] when a timed out
    /// request also has a response.
    pub fn state(&self) -> Result<OracleRequestState, SchemaError> {
        let response = match (
            self.responded_at,
            self.response_block_number,
            &self.response_transaction_hash,
            self.result,
        ) {
            (None, None, None, None) => None,
            (Some(responded_at), Some(block_number), Some(hash), Some(result)) => {
                Some(OracleResponse {
                    responded_at,
                    block_number,
                    transaction_hash: hash.clone(),
                    result,
                })
            }
            _ => return Err(SchemaError::PartialResponse),
        };

        match (response, self.timed_out) {
            (Some(_), true) => Err(SchemaError::TimedOutWithResponse),
            (Some(response), false) => Ok(OracleRequestState::Responded(response)),
            (None, true) => Ok(OracleRequestState::TimedOut),
            (None, false) => Ok(OracleRequestState::Pending),
        }
    }

    /// Record the response, setting all four response fields together.
    pub fn respond(&mut self, response: OracleResponse) {
        self.responded_at = Some(response.responded_at);
        self.response_block_number = Some(response.block_number);
        self.response_transaction_hash = Some(response.transaction_hash);
        self.result = Some(response.result);
        self.timed_out = false;
    }

    /// Mark the request as timed out, clearing any response fields.
    pub fn time_out(&mut self) {
        self.responded_at = None;
        self.response_block_number = None;
        self.response_transaction_hash = None;
        self.result = None;
        self.timed_out = true;
    }
}

impl Validate for OracleRequestEntity {
    const KIND: &'static str = "OracleRequestEntity";

    fn validate(&self) -> Result<(), SchemaError> {
        same_chain(&self.market_id, self.market_id.chain_id(), self.chain_id)?;
        same_id(
            format!("{}-{}", self.chain_id, self.request_id),
            &self.id,
        )?;
        self.state().map(|_| ())
    }

    fn chain(&self) -> Option<u64> {
        Some(self.chain_id)
    }

    fn hex_fields(&self) -> Vec<(&'static str, &str)> {
        let mut fields = vec![("requestTransactionHash", self.request_transaction_hash.as_str())];
        if let Some(hash) = &self.response_transaction_hash {
            fields.push(("responseTransactionHash", hash.as_str()));
        }
        fields
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pending() -> OracleRequestEntity {
        OracleRequestEntity {
            id: "1-request123".parse().unwrap(),
            chain_id: 1,
            market_id: "1-market123".parse().unwrap(),
            request_id: "request123".into(),
            requested_at: U256::from(1_699_000_000u64),
            request_block_number: U256::from(12_345u64),
            request_transaction_hash: "0xrequesthash".into(),
            responded_at: None,
            response_block_number: None,
            response_transaction_hash: None,
            result: None,
            timed_out: false,
        }
    }

    fn response() -> OracleResponse {
        OracleResponse {
            responded_at: U256::from(1_699_500_000u64),
            block_number: U256::from(12_400u64),
            transaction_hash: "0xresponsehash".into(),
            result: true,
        }
    }

    #[test]
    fn pending_request_reads_as_pending() {
        assert_eq!(pending().state(), Ok(OracleRequestState::Pending));
    }

    #[test]
    fn respond_sets_all_four_fields() {
        let mut request = pending();
        request.respond(response());
        assert_eq!(request.result, Some(true));
        assert_eq!(request.state(), Ok(OracleRequestState::Responded(response())));
        assert!(request.validate().is_ok());
    }

    #[test]
    fn time_out_reads_as_timed_out() {
        let mut request = pending();
        request.time_out();
        assert_eq!(request.state(), Ok(OracleRequestState::TimedOut));
    }

    #[test]
    fn partial_response_is_rejected() {
        let request = OracleRequestEntity {
            result: Some(true),
            ..pending()
        };
        assert_eq!(request.state(), Err(SchemaError::PartialResponse));
    }

    #[test]
    fn timed_out_with_response_is_rejected() {
        let mut request = pending();
        request.respond(response());
        request.timed_out = true;
        assert_eq!(request.validate(), Err(SchemaError::TimedOutWithResponse));
    }

    #[test]
    fn request_id_must_match_key() {
        let request = OracleRequestEntity {
            request_id: "request999".into(),
            ..pending()
        };
        assert!(matches!(request.validate(), Err(SchemaError::IdMismatch { .. })));
    }

    fn manual_oracle() -> OracleEntity {
        OracleEntity {
            id: "1-oracle123".parse().unwrap(),
            oracle_id: "oracle123".into(),
            oracle_type: OracleType::Manual,
            data_source: None,
            min_value: U256::ZERO,
            max_value: U256::from(10_000u64),
            chain_id: 1,
            block_number: U256::from(12_345u64),
            tx_hash: "0xtxhash".into(),
            timestamp: U256::from(1_699_000_000u64),
        }
    }

    #[test]
    fn manual_oracle_has_no_address_to_check() {
        let oracle = manual_oracle();
        assert!(oracle.validate().is_ok());
        assert!(oracle.address_fields().is_empty());
    }

    #[test]
    fn manual_oracle_with_source_is_rejected() {
        let oracle = OracleEntity {
            data_source: Some("0xdatasource".into()),
            ..manual_oracle()
        };
        assert_eq!(
            oracle.validate(),
            Err(SchemaError::OracleSourceMismatch {
                oracle_type: "Manual".into(),
            })
        );
    }

    #[test]
    fn feed_oracles_need_a_source() {
        for oracle_type in [OracleType::PriceFeed, OracleType::CustomData] {
            let without = OracleEntity {
                oracle_type,
                ..manual_oracle()
            };
            assert!(matches!(
                without.validate(),
                Err(SchemaError::OracleSourceMismatch { .. })
            ));

            let with = OracleEntity {
                data_source: Some("0xdatasource".into()),
                ..without
            };
            assert!(with.validate().is_ok());
        }
    }
}
