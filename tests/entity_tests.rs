mod support;

use alloy_primitives::U256;
use heavymath_types::entity::{
    DealerNftEntity, FeeWithdrawalEntity, MarketEntity, MarketOutcome, MarketStateHistoryEntity,
    MarketStatus, OracleEntity, OracleRequestEntity, OracleRequestState, TransferRecord,
    WithdrawalSource, WithdrawalType,
};
use heavymath_types::error::SchemaError;
use heavymath_types::event::OracleType;
use heavymath_types::testkit;
use heavymath_types::validate::{Validate, Validator};

use support::json::{assert_keys, round_trip, to_object};

fn market_json(status: &str, optional: &str) -> String {
    format!(
        r#"{{
            "id": "1-market123",
            "dealer": "0xdealer",
            "tokenId": "1",
            "category": "1",
            "subCategory": "2",
            "deadline": "1700000000",
            "description": "Test market",
            "createdAt": "1699000000",
            "dealerFeeBps": "250",
            "status": "{status}",
            {optional}
            "chainId": 1,
            "blockNumber": "12345",
            "txHash": "0xtxhash",
            "timestamp": "1699000000"
        }}"#
    )
}

#[test]
fn resolved_market_with_oracle_is_accepted() {
    let json = market_json(
        "Resolved",
        r#""resolution": "7500", "equilibrium": "5000", "oracleId": "oracle-1","#,
    );
    let market: MarketEntity = serde_json::from_str(&json).unwrap();

    assert!(Validator::default().check(&market).is_ok());
    assert_eq!(
        market.outcome(),
        Ok(MarketOutcome::Resolved {
            resolution: U256::from(7_500u64),
            equilibrium: U256::from(5_000u64),
        })
    );
    assert_eq!(market.oracle_id.as_deref(), Some("oracle-1"));
}

#[test]
fn active_market_without_optionals_is_accepted() {
    let omitted: MarketEntity = serde_json::from_str(&market_json("Active", "")).unwrap();
    let explicit: MarketEntity = serde_json::from_str(&market_json(
        "Active",
        r#""resolution": null, "equilibrium": null, "oracleId": null,"#,
    ))
    .unwrap();

    assert_eq!(omitted, explicit);
    assert_eq!(omitted.outcome(), Ok(MarketOutcome::Open(MarketStatus::Active)));
    assert!(omitted.validate().is_ok());
}

#[test]
fn absent_values_serialize_as_null() {
    let object = to_object(&testkit::market());
    assert_eq!(object["resolution"], serde_json::Value::Null);
    assert_eq!(object["oracleId"], serde_json::Value::Null);
    assert_eq!(object["dealerFeeBps"], "250");
    assert_eq!(object["chainId"], 1);
}

#[test]
fn market_uses_source_field_names() {
    assert_keys(
        &to_object(&testkit::market()),
        &[
            "id",
            "dealer",
            "tokenId",
            "category",
            "subCategory",
            "deadline",
            "description",
            "createdAt",
            "dealerFeeBps",
            "status",
            "resolution",
            "equilibrium",
            "oracleId",
            "chainId",
            "blockNumber",
            "txHash",
            "timestamp",
        ],
    );
}

#[test]
fn prediction_and_claim_use_source_field_names() {
    assert_keys(
        &to_object(&testkit::prediction()),
        &[
            "id",
            "marketId",
            "predictor",
            "amount",
            "percentage",
            "placedAt",
            "claimed",
            "chainId",
            "blockNumber",
            "txHash",
            "timestamp",
        ],
    );

    let claim = to_object(&testkit::claim());
    assert_keys(
        &claim,
        &[
            "id",
            "marketId",
            "claimer",
            "amount",
            "claimType",
            "chainId",
            "blockNumber",
            "txHash",
            "timestamp",
        ],
    );
    assert_eq!(claim["claimType"], "winnings");
}

#[test]
fn oracle_entities_use_source_field_names() {
    let oracle = to_object(&testkit::oracle());
    assert_keys(
        &oracle,
        &[
            "id",
            "oracleId",
            "oracleType",
            "dataSource",
            "minValue",
            "maxValue",
            "chainId",
            "blockNumber",
            "txHash",
            "timestamp",
        ],
    );
    assert_eq!(oracle["oracleType"], "PriceFeed");

    assert_keys(
        &to_object(&testkit::pending_request()),
        &[
            "id",
            "chainId",
            "marketId",
            "requestId",
            "requestedAt",
            "requestBlockNumber",
            "requestTransactionHash",
            "respondedAt",
            "responseBlockNumber",
            "responseTransactionHash",
            "result",
            "timedOut",
        ],
    );
}

#[test]
fn manual_oracle_with_source_is_rejected() {
    let oracle = OracleEntity {
        oracle_type: OracleType::Manual,
        ..testkit::oracle()
    };
    assert_eq!(
        Validator::default().check(&oracle),
        Err(SchemaError::OracleSourceMismatch {
            oracle_type: "Manual".into(),
        })
    );
    assert!(Validator::default()
        .check(&OracleEntity {
            data_source: None,
            ..oracle
        })
        .is_ok());
}

#[test]
fn price_feed_without_source_is_rejected() {
    let oracle = OracleEntity {
        data_source: None,
        ..testkit::oracle()
    };
    assert!(matches!(
        Validator::default().check(&oracle),
        Err(SchemaError::OracleSourceMismatch { .. })
    ));
}

#[test]
fn withdrawal_id_must_match_transaction_hash() {
    let withdrawal = FeeWithdrawalEntity {
        id: "0xother-5".parse().unwrap(),
        ..testkit::dealer_withdrawal()
    };
    assert_eq!(
        Validator::default().check(&withdrawal),
        Err(SchemaError::IdMismatch {
            expected: "0xtxhash".into(),
            actual: "0xother".into(),
        })
    );
}

#[test]
fn withdrawal_amount_with_separators_is_rejected() {
    let json = r#"{
        "id": "0xtxhash-5",
        "chainId": 1,
        "marketId": null,
        "withdrawerAddress": "0xtreasury",
        "withdrawalType": "system",
        "amount": "1_000",
        "withdrawnAt": "1704067200",
        "blockNumber": "12345",
        "transactionHash": "0xtxhash"
    }"#;
    assert!(serde_json::from_str::<FeeWithdrawalEntity>(json).is_err());
    assert!(serde_json::from_str::<FeeWithdrawalEntity>(&json.replace("1_000", "1000")).is_ok());
}

#[test]
fn resolved_status_without_resolution_is_rejected() {
    let market: MarketEntity = serde_json::from_str(&market_json("Resolved", "")).unwrap();
    assert_eq!(
        market.validate(),
        Err(SchemaError::ResolutionMismatch {
            status: "Resolved".into(),
        })
    );
}

#[test]
fn both_withdrawal_kinds_are_accepted() {
    let system: FeeWithdrawalEntity = serde_json::from_str(
        r#"{
            "id": "0xtxhash-5",
            "chainId": 1,
            "marketId": null,
            "withdrawerAddress": "0xtreasury",
            "withdrawalType": "system",
            "amount": "100000",
            "withdrawnAt": "1699000000",
            "blockNumber": "12345",
            "transactionHash": "0xtxhash"
        }"#,
    )
    .unwrap();
    let dealer: FeeWithdrawalEntity = serde_json::from_str(
        r#"{
            "id": "0xtxhash-5",
            "chainId": 1,
            "marketId": "1-market123",
            "withdrawerAddress": "0xdealer",
            "withdrawalType": "dealer",
            "amount": "50000",
            "withdrawnAt": "1704067200",
            "blockNumber": "12345",
            "transactionHash": "0xtxhash"
        }"#,
    )
    .unwrap();

    assert_eq!(system.source(), Ok(WithdrawalSource::System));
    assert_eq!(dealer.withdrawal_type, WithdrawalType::Dealer);
    assert_eq!(dealer, testkit::dealer_withdrawal());
    assert!(system.validate().is_ok());
    assert!(dealer.validate().is_ok());
}

#[test]
fn withdrawal_market_on_another_chain_is_rejected() {
    let entity = FeeWithdrawalEntity::dealer(
        heavymath_types::entity::Withdrawal {
            id: "0xtxhash-5".parse().unwrap(),
            chain_id: 1,
            withdrawer_address: "0xdealer".into(),
            amount: U256::from(50_000u64),
            withdrawn_at: U256::from(1_699_000_000u64),
            block_number: U256::from(12_345u64),
            transaction_hash: "0xtxhash".into(),
        },
        "137-market123".parse().unwrap(),
    );
    assert!(matches!(
        entity.validate(),
        Err(SchemaError::ChainIdMismatch { chain_id: 1, .. })
    ));
}

#[test]
fn pending_and_responded_requests_are_accepted() {
    let pending: OracleRequestEntity = serde_json::from_str(
        r#"{
            "id": "1-request123",
            "chainId": 1,
            "marketId": "1-market123",
            "requestId": "request123",
            "requestedAt": "1699000000",
            "requestBlockNumber": "12345",
            "requestTransactionHash": "0xrequesthash",
            "respondedAt": null,
            "responseBlockNumber": null,
            "responseTransactionHash": null,
            "result": null,
            "timedOut": false
        }"#,
    )
    .unwrap();
    assert_eq!(pending.state(), Ok(OracleRequestState::Pending));
    assert!(pending.validate().is_ok());

    let responded = testkit::responded_request();
    assert!(matches!(
        responded.state(),
        Ok(OracleRequestState::Responded(ref response)) if response.result
    ));
    assert_eq!(round_trip(&responded), responded);
    assert!(responded.validate().is_ok());
}

#[test]
fn history_rows_with_and_without_from_state_are_accepted() {
    let transition = testkit::resolution_history();
    let creation = testkit::creation_history();

    assert_eq!(transition.id.as_str(), "1-market123-12345");
    assert!(!transition.is_creation());
    assert!(creation.is_creation());
    assert!(transition.validate().is_ok());
    assert!(creation.validate().is_ok());

    let parsed: MarketStateHistoryEntity = serde_json::from_str(
        r#"{
            "id": "1-market123-12345",
            "chainId": 1,
            "marketId": "1-market123",
            "fromState": null,
            "toState": "Active",
            "changedAt": "1699000000",
            "blockNumber": "12345",
            "transactionHash": "0xtxhash",
            "reason": null
        }"#,
    )
    .unwrap();
    assert!(parsed.is_creation());
}

#[test]
fn transfer_updates_owner_and_keeps_mint() {
    let mut nft = testkit::dealer_nft();
    let transfer = TransferRecord {
        at: U256::from(testkit::TIMESTAMP + 60),
        block_number: U256::from(12_400u64),
        transaction_hash: "0xtransferhash".into(),
    };
    nft.record_transfer("0xnewowner", transfer.clone());

    assert_eq!(nft.last_transfer(), Ok(Some(transfer)));
    assert_eq!(nft.mint_transaction_hash, "0xminthash");
    assert!(nft.validate().is_ok());

    let json = to_object(&nft);
    assert_eq!(json["lastTransferBlockNumber"], "12400");
    assert_eq!(json["ownerAddress"], "0xnewowner");
}

#[test]
fn every_fixture_passes_default_validation() {
    let validator = Validator::default();
    assert!(validator.check(&testkit::market()).is_ok());
    assert!(validator.check(&testkit::resolved_market()).is_ok());
    assert!(validator.check(&testkit::prediction()).is_ok());
    assert!(validator.check(&testkit::claim()).is_ok());
    assert!(validator.check(&testkit::oracle()).is_ok());
    assert!(validator.check(&testkit::dealer_nft()).is_ok());
    assert!(validator.check(&testkit::dealer_permission()).is_ok());
    assert!(validator.check(&testkit::system_withdrawal()).is_ok());
    assert!(validator.check(&testkit::pending_request()).is_ok());
    assert!(validator.check(&testkit::favorite()).is_ok());
}

#[test]
fn nft_entity_reads_integer_forms() {
    let nft: DealerNftEntity = serde_json::from_str(
        r#"{
            "id": "1-1",
            "chainId": 1,
            "tokenId": 1,
            "ownerAddress": "0xowner",
            "mintedAt": "0x6552f1c0",
            "mintBlockNumber": "12345",
            "mintTransactionHash": "0xminthash",
            "lastTransferAt": null,
            "lastTransferBlockNumber": null,
            "lastTransferTransactionHash": null
        }"#,
    )
    .unwrap();
    assert_eq!(nft.token_id, U256::from(1u64));
    assert_eq!(nft.minted_at, U256::from(1_699_934_656u64));
}
