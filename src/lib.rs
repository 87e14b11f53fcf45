//! Heavymath types - shared schema for the prediction market indexer.
//!
//! The indexer decodes contract logs, writes entities to its database and
//! serves them over HTTP and server-sent events. This crate declares the data
//! shape at each of those boundaries so the decoder, the store and the API
//! agree on field names, nullability and number encoding.
//!
//! # Layers
//!
//! - **Events**: arguments of the PredictionMarket, DealerNFT and
//!   OracleResolver contract events, plus the log context they came from.
//! - **Entities**: database records. On-chain integers are
//!   [`U256`](alloy_primitives::U256) and travel as decimal strings.
//! - **API payloads**: what the query service returns. Integers are decimal
//!   strings and timestamps are RFC 3339.
//!
//! # Modules
//!
//! - [`common`] - Composite ids, hex strings, integer and basis-point helpers
//! - [`event`] - Contract event argument shapes
//! - [`entity`] - Database entity shapes and their typed views
//! - [`api`] - API payloads and entity projections
//! - [`validate`] - Invariant checks and configurable validation policy
//! - [`config`] - Settings loaded from TOML and logging setup
//! - [`error`] - Error types for the crate
//!
//! # Features
//!
//! - `testkit` - Fixture builders for downstream tests
//!
//! # Example
//!
//! ```
//! use heavymath_types::entity::{MarketEntity, MarketOutcome};
//! use heavymath_types::validate::Validator;
//!
//! let json = r#"{
//!     "id": "1-market123",
//!     "dealer": "0xdealer",
//!     "tokenId": "1",
//!     "category": "1",
//!     "subCategory": "2",
//!     "deadline": "1700000000",
//!     "description": "Test market",
//!     "createdAt": "1699000000",
//!     "dealerFeeBps": "250",
//!     "status": "Resolved",
//!     "resolution": "7500",
//!     "equilibrium": "5000",
//!     "oracleId": "oracle-1",
//!     "chainId": 1,
//!     "blockNumber": "12345",
//!     "txHash": "0xtxhash",
//!     "timestamp": "1699000000"
//! }"#;
//!
//! let market: MarketEntity = serde_json::from_str(json)?;
//! Validator::default().check(&market)?;
//! assert!(matches!(market.outcome()?, MarketOutcome::Resolved { .. }));
//! # Ok::<(), heavymath_types::error::Error>(())
//! ```

pub mod api;
pub mod common;
pub mod config;
pub mod entity;
pub mod error;
pub mod event;
pub mod validate;

#[cfg(any(test, feature = "testkit"))]
pub mod testkit;
