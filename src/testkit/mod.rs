//! Shared test utilities available to both unit and integration tests.
//!
//! Enabled via `#[cfg(test)]` (unit tests) or the `testkit` feature
//! (integration tests).
//!
//! Every fixture is a consistent record on chain [`CHAIN_ID`] around market
//! `1-market123`, so fixtures pass [`Validate`](crate::validate::Validate)
//! unchanged. Tests break one field with struct update syntax:
//!
//! ```ignore
//! let broken = MarketEntity { resolution: Some(U256::from(7_500u64)), ..testkit::market() };
//! ```
//!
//! # Modules
//!
//! - [`entity`]: one builder per entity, plus resolved/responded variants.
//! - [`event`]: a log context and decoded events.

pub mod entity;
pub mod event;

pub use entity::*;
pub use event::*;

/// Chain every fixture belongs to.
pub const CHAIN_ID: u64 = 1;

/// Block number shared by the fixtures.
pub const BLOCK: u64 = 12_345;

/// 2024-01-01T00:00:00Z in unix seconds.
pub const TIMESTAMP: u64 = 1_704_067_200;

/// Transaction hash shared by the fixtures.
pub const TX_HASH: &str = "0xtxhash";
