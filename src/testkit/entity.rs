//! Entity fixtures.

use alloy_primitives::U256;

use super::{BLOCK, CHAIN_ID, TIMESTAMP, TX_HASH};
use crate::common::{ChainPrefixedId, PredictionId, TxLogId};
use crate::entity::{
    ClaimEntity, ClaimType, DealerNftEntity, DealerPermissionEntity, FeeWithdrawalEntity,
    MarketEntity, MarketStateHistoryEntity, MarketStatus, OracleEntity, OracleRequestEntity,
    OracleResponse, PredictionEntity, WalletFavoriteEntity, Withdrawal,
};
use crate::event::OracleType;

fn uint(value: u64) -> U256 {
    U256::from(value)
}

/// `1-market123`.
pub fn market_id() -> ChainPrefixedId {
    ChainPrefixedId::new(CHAIN_ID, "market123").expect("valid market id")
}

/// Active market with no resolution and no oracle.
pub fn market() -> MarketEntity {
    MarketEntity {
        id: market_id(),
        dealer: "0xdealer".into(),
        token_id: uint(1),
        category: uint(1),
        sub_category: uint(2),
        deadline: uint(TIMESTAMP + 86_400),
        description: "Test market".into(),
        created_at: uint(TIMESTAMP),
        dealer_fee_bps: uint(250),
        status: MarketStatus::Active,
        resolution: None,
        equilibrium: None,
        oracle_id: None,
        chain_id: CHAIN_ID,
        block_number: uint(BLOCK),
        tx_hash: TX_HASH.into(),
        timestamp: uint(TIMESTAMP),
    }
}

/// Market resolved at 7500 bps with equilibrium 5000, backed by `oracle-1`.
pub fn resolved_market() -> MarketEntity {
    let mut market = MarketEntity {
        oracle_id: Some("oracle-1".into()),
        ..market()
    };
    market.resolve(uint(7_500), uint(5_000));
    market
}

/// Prediction by `0xpredictor` on [`market`].
pub fn prediction() -> PredictionEntity {
    PredictionEntity {
        id: PredictionId::new(CHAIN_ID, "market123", "0xpredictor").expect("valid prediction id"),
        market_id: market_id(),
        predictor: "0xpredictor".into(),
        amount: uint(1_000_000),
        percentage: uint(5_000),
        placed_at: uint(TIMESTAMP),
        claimed: false,
        chain_id: CHAIN_ID,
        block_number: uint(BLOCK),
        tx_hash: TX_HASH.into(),
        timestamp: uint(TIMESTAMP),
    }
}

/// Winnings claim at log index 5.
pub fn claim() -> ClaimEntity {
    ClaimEntity {
        id: TxLogId::new(TX_HASH, uint(5)).expect("valid tx-log id"),
        market_id: market_id(),
        claimer: "0xpredictor".into(),
        amount: uint(1_500_000),
        claim_type: ClaimType::Winnings,
        chain_id: CHAIN_ID,
        block_number: uint(BLOCK),
        tx_hash: TX_HASH.into(),
        timestamp: uint(TIMESTAMP),
    }
}

/// Price feed oracle `oracle123` with bounds 0..=10000.
pub fn oracle() -> OracleEntity {
    OracleEntity {
        id: ChainPrefixedId::new(CHAIN_ID, "oracle123").expect("valid oracle id"),
        oracle_id: "oracle123".into(),
        oracle_type: OracleType::PriceFeed,
        data_source: Some("0xdatasource".into()),
        min_value: U256::ZERO,
        max_value: uint(10_000),
        chain_id: CHAIN_ID,
        block_number: uint(BLOCK),
        tx_hash: TX_HASH.into(),
        timestamp: uint(TIMESTAMP),
    }
}

/// License NFT #1, never transferred.
pub fn dealer_nft() -> DealerNftEntity {
    DealerNftEntity {
        id: DealerNftEntity::id_for(CHAIN_ID, uint(1)),
        chain_id: CHAIN_ID,
        token_id: uint(1),
        owner_address: "0xowner".into(),
        minted_at: uint(TIMESTAMP),
        mint_block_number: uint(BLOCK),
        mint_transaction_hash: "0xminthash".into(),
        last_transfer_at: None,
        last_transfer_block_number: None,
        last_transfer_transaction_hash: None,
    }
}

/// Permission for category 1, subcategory 2 on license #1.
pub fn dealer_permission() -> DealerPermissionEntity {
    DealerPermissionEntity {
        id: DealerPermissionEntity::id_for(CHAIN_ID, uint(1), 1, 2),
        chain_id: CHAIN_ID,
        token_id: uint(1),
        category: 1,
        sub_category: 2,
        granted_at: uint(TIMESTAMP),
        block_number: uint(BLOCK),
        transaction_hash: TX_HASH.into(),
    }
}

fn withdrawal(withdrawer: &str, amount: u64) -> Withdrawal {
    Withdrawal {
        id: TxLogId::new(TX_HASH, uint(5)).expect("valid tx-log id"),
        chain_id: CHAIN_ID,
        withdrawer_address: withdrawer.into(),
        amount: uint(amount),
        withdrawn_at: uint(TIMESTAMP),
        block_number: uint(BLOCK),
        transaction_hash: TX_HASH.into(),
    }
}

/// Dealer withdrawal of fees earned on [`market`].
pub fn dealer_withdrawal() -> FeeWithdrawalEntity {
    FeeWithdrawalEntity::dealer(withdrawal("0xdealer", 50_000), market_id())
}

/// System withdrawal to the treasury.
pub fn system_withdrawal() -> FeeWithdrawalEntity {
    FeeWithdrawalEntity::system(withdrawal("0xtreasury", 100_000))
}

/// Oracle request `request123` for [`market`], not yet answered.
pub fn pending_request() -> OracleRequestEntity {
    OracleRequestEntity {
        id: ChainPrefixedId::new(CHAIN_ID, "request123").expect("valid request id"),
        chain_id: CHAIN_ID,
        market_id: market_id(),
        request_id: "request123".into(),
        requested_at: uint(TIMESTAMP),
        request_block_number: uint(BLOCK),
        request_transaction_hash: "0xrequesthash".into(),
        responded_at: None,
        response_block_number: None,
        response_transaction_hash: None,
        result: None,
        timed_out: false,
    }
}

/// [`pending_request`] answered `true` one day later.
pub fn responded_request() -> OracleRequestEntity {
    let mut request = pending_request();
    request.respond(OracleResponse {
        responded_at: uint(TIMESTAMP + 86_400),
        block_number: uint(BLOCK + 55),
        transaction_hash: "0xresponsehash".into(),
        result: true,
    });
    request
}

/// History row recording the creation of [`market`].
pub fn creation_history() -> MarketStateHistoryEntity {
    MarketStateHistoryEntity {
        id: MarketStateHistoryEntity::id_for(&market_id(), uint(BLOCK)),
        chain_id: CHAIN_ID,
        market_id: market_id(),
        from_state: None,
        to_state: MarketStatus::Active.to_string(),
        changed_at: uint(TIMESTAMP),
        block_number: uint(BLOCK),
        transaction_hash: TX_HASH.into(),
        reason: None,
    }
}

/// History row for `Active -> Resolved`.
pub fn resolution_history() -> MarketStateHistoryEntity {
    MarketStateHistoryEntity {
        from_state: Some(MarketStatus::Active.to_string()),
        to_state: MarketStatus::Resolved.to_string(),
        ..creation_history()
    }
}

/// `0xwallet` saving [`market`].
pub fn favorite() -> WalletFavoriteEntity {
    WalletFavoriteEntity {
        id: 1,
        wallet_address: "0xwallet".into(),
        category: "sports".into(),
        subcategory: "football".into(),
        item_type: "market".into(),
        item_id: market_id().to_string(),
        created_at: uint(TIMESTAMP),
    }
}
