//! Primitive shapes shared by events, entities and API payloads.
//!
//! - [`Optional`] - a value that may be absent
//! - [`ChainPrefixedId`], [`PredictionId`], [`TxLogId`] - composite identifiers
//! - [`Hex`], [`Address`] - `0x`-prefixed hex strings
//! - [`uint`] - serde helpers for on-chain integers
//! - [`bps`] - basis-point scale

pub mod bps;
mod hex;
mod id;
pub mod uint;

pub use hex::{is_strict_address, is_strict_hex, Address, Hex};
pub use id::{ChainPrefixedId, PredictionId, TxLogId};

/// A value that may be absent.
///
/// Absence by omission and absence by explicit `null` are the same thing here:
/// both deserialize to `None`, and `None` always serializes as `null`.
pub type Optional<T> = Option<T>;
