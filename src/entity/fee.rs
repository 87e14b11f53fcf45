//! Fee withdrawal entity.

use std::fmt;

use alloy_primitives::U256;
use serde::{Deserialize, Serialize};

use crate::common::uint::decimal;
use crate::common::{ChainPrefixedId, TxLogId};
use crate::error::SchemaError;
use crate::validate::{same_chain, same_id, Validate};

/// Who withdrew the fees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WithdrawalType {
    /// A dealer withdrawing fees earned on one market.
    Dealer,
    /// System fees withdrawn to the treasury.
    System,
}

impl WithdrawalType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Dealer => "dealer",
            Self::System => "system",
        }
    }
}

impl fmt::Display for WithdrawalType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Typed view of where a withdrawal came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WithdrawalSource {
    Dealer { market_id: ChainPrefixedId },
    System,
}

/// Database representation of a fee withdrawal, keyed `{txHash}-{logIndex}`.
///
/// `market_id` is set for dealer withdrawals and `None` for system ones. The
/// [`dealer`](FeeWithdrawalEntity::dealer) and
/// [`system`](FeeWithdrawalEntity::system) constructors keep the two in step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeeWithdrawalEntity {
    pub id: TxLogId,
    pub chain_id: u64,
    pub market_id: Option<ChainPrefixedId>,
    pub withdrawer_address: String,
    pub withdrawal_type: WithdrawalType,
    #[serde(with = "decimal")]
    pub amount: U256,
    #[serde(with = "decimal")]
    pub withdrawn_at: U256,
    #[serde(with = "decimal")]
    pub block_number: U256,
    pub transaction_hash: String,
}

/// Fields shared by both withdrawal kinds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Withdrawal {
    pub id: TxLogId,
    pub chain_id: u64,
    pub withdrawer_address: String,
    pub amount: U256,
    pub withdrawn_at: U256,
    pub block_number: U256,
    pub transaction_hash: String,
}

impl FeeWithdrawalEntity {
    /// A dealer withdrawal of fees earned on `market_id`.
    #[must_use]
    pub fn dealer(withdrawal: Withdrawal, market_id: ChainPrefixedId) -> Self {
        Self::build(withdrawal, WithdrawalType::Dealer, Some(market_id))
    }

    /// A system withdrawal to the treasury.
    #[must_use]
    pub fn system(withdrawal: Withdrawal) -> Self {
        Self::build(withdrawal, WithdrawalType::System, None)
    }

    fn build(
        withdrawal: Withdrawal,
        withdrawal_type: WithdrawalType,
        market_id: Option<ChainPrefixedId>,
    ) -> Self {
        Self {
            id: withdrawal.id,
            chain_id: withdrawal.chain_id,
            market_id,
            withdrawer_address: withdrawal.withdrawer_address,
            withdrawal_type,
            amount: withdrawal.amount,
            withdrawn_at: withdrawal.withdrawn_at,
            block_number: withdrawal.block_number,
            transaction_hash: withdrawal.transaction_hash,
        }
    }

    /// Read `withdrawal_type` and `market_id` as one value.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::WithdrawalMarketMismatch`] when a dealer
    /// withdrawal has no market or a system withdrawal has one.
    pub fn source(&self) -> Result<WithdrawalSource, SchemaError> {
        match (self.withdrawal_type, &self.market_id) {
            (WithdrawalType::Dealer, Some(market_id)) => Ok(WithdrawalSource::Dealer {
                market_id: market_id.clone(),
            }),
            (WithdrawalType::System, None) => Ok(WithdrawalSource::System),
            (withdrawal_type, _) => Err(SchemaError::WithdrawalMarketMismatch {
                withdrawal_type: withdrawal_type.to_string(),
            }),
        }
    }
}

impl Validate for FeeWithdrawalEntity {
    const KIND: &'static str = "FeeWithdrawalEntity";

    fn validate(&self) -> Result<(), SchemaError> {
        same_id(self.transaction_hash.clone(), &self.id.transaction_hash())?;
        if let WithdrawalSource::Dealer { market_id } = self.source()? {
            same_chain(&market_id, market_id.chain_id(), self.chain_id)?;
        }
        Ok(())
    }

    fn chain(&self) -> Option<u64> {
        Some(self.chain_id)
    }

    fn hex_fields(&self) -> Vec<(&'static str, &str)> {
        vec![("transactionHash", self.transaction_hash.as_str())]
    }

    fn address_fields(&self) -> Vec<(&'static str, &str)> {
        vec![("withdrawerAddress", self.withdrawer_address.as_str())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn withdrawal() -> Withdrawal {
        Withdrawal {
            id: "0xtxhash-5".parse().unwrap(),
            chain_id: 1,
            withdrawer_address: "0xdealer".into(),
            amount: U256::from(50_000u64),
            withdrawn_at: U256::from(1_699_000_000u64),
            block_number: U256::from(12_345u64),
            transaction_hash: "0xtxhash".into(),
        }
    }

    #[test]
    fn dealer_constructor_sets_market() {
        let market_id: ChainPrefixedId = "1-market123".parse().unwrap();
        let entity = FeeWithdrawalEntity::dealer(withdrawal(), market_id.clone());
        assert_eq!(entity.withdrawal_type, WithdrawalType::Dealer);
        assert_eq!(entity.source(), Ok(WithdrawalSource::Dealer { market_id }));
    }

    #[test]
    fn system_constructor_clears_market() {
        let entity = FeeWithdrawalEntity::system(withdrawal());
        assert_eq!(entity.market_id, None);
        assert_eq!(entity.source(), Ok(WithdrawalSource::System));
    }

    #[test]
    fn dealer_without_market_is_rejected() {
        let entity = FeeWithdrawalEntity {
            withdrawal_type: WithdrawalType::Dealer,
            ..FeeWithdrawalEntity::system(withdrawal())
        };
        assert_eq!(
            entity.validate(),
            Err(SchemaError::WithdrawalMarketMismatch {
                withdrawal_type: "dealer".into(),
            })
        );
    }

    #[test]
    fn system_with_market_is_rejected() {
        let entity = FeeWithdrawalEntity {
            withdrawal_type: WithdrawalType::System,
            ..FeeWithdrawalEntity::dealer(withdrawal(), "1-market123".parse().unwrap())
        };
        assert!(entity.validate().is_err());
    }

    #[test]
    fn id_must_carry_the_transaction_hash() {
        let entity = FeeWithdrawalEntity {
            id: "0xother-5".parse().unwrap(),
            ..FeeWithdrawalEntity::system(withdrawal())
        };
        assert_eq!(
            entity.validate(),
            Err(SchemaError::IdMismatch {
                expected: "0xtxhash".into(),
                actual: "0xother".into(),
            })
        );
    }

    #[test]
    fn withdrawal_type_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&WithdrawalType::System).unwrap(), "\"system\"");
    }
}
