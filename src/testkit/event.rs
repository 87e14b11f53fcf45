//! Event fixtures.

use alloy_primitives::U256;

use super::{BLOCK, CHAIN_ID, TIMESTAMP, TX_HASH};
use crate::common::{Address, Hex};
use crate::event::{
    BaseEventContext, ContractEvent, DecodedEvent, MarketCreatedArgs, PermissionsSetArgs,
    PredictionPlacedArgs,
};

fn address(value: &str) -> Address {
    value.parse().expect("fixture address has a 0x prefix")
}

/// Log context at log index 5 of the shared transaction.
pub fn context() -> BaseEventContext {
    BaseEventContext {
        block_number: U256::from(BLOCK),
        block_timestamp: U256::from(TIMESTAMP),
        transaction_hash: TX_HASH.parse::<Hex>().expect("fixture hash has a 0x prefix"),
        log_index: U256::from(5u64),
        chain_id: CHAIN_ID,
    }
}

/// `MarketCreated` for `market123`.
pub fn market_created() -> DecodedEvent {
    DecodedEvent::new(
        context(),
        ContractEvent::MarketCreated(MarketCreatedArgs {
            market_id: "market123".into(),
            dealer: address("0xdealer"),
            token_id: U256::from(1u64),
            category: U256::from(1u64),
            sub_category: U256::from(2u64),
            deadline: U256::from(TIMESTAMP + 86_400),
            description: "Test market".into(),
        }),
    )
}

/// `PredictionPlaced` by `0xpredictor` at `percentage` bps.
pub fn prediction_placed(percentage: u64) -> DecodedEvent {
    DecodedEvent::new(
        context(),
        ContractEvent::PredictionPlaced(PredictionPlacedArgs {
            market_id: "market123".into(),
            predictor: address("0xpredictor"),
            amount: U256::from(1_000_000u64),
            percentage: U256::from(percentage),
        }),
    )
}

/// `PermissionsSet` on license #1, category 1.
pub fn permissions_set(sub_categories: &[u64]) -> DecodedEvent {
    DecodedEvent::new(
        context(),
        ContractEvent::PermissionsSet(PermissionsSetArgs {
            token_id: U256::from(1u64),
            category: U256::from(1u64),
            sub_categories: sub_categories.iter().copied().map(U256::from).collect(),
        }),
    )
}
