//! Runtime validation of schema values.
//!
//! The schema types accept any value with the right field types, including
//! combinations the indexer never writes (a resolved market without a
//! resolution, half a transfer record). This module adds the checks:
//!
//! - [`Validate::validate`] enforces the structural invariants of a single
//!   record: joint-nullability, id/key agreement, bounds.
//! - [`Validator`] layers deployment policy on top, from a
//!   [`ValidationConfig`]: strict hex, basis-point ceiling and allowed chains.
//!
//! # Example
//!
//! ```
//! use alloy_primitives::U256;
//! use heavymath_types::event::BaseEventContext;
//! use heavymath_types::validate::{ValidationConfig, Validator};
//!
//! let context = BaseEventContext {
//!     block_number: U256::from(12_345u64),
//!     block_timestamp: U256::from(1_699_000_000u64),
//!     transaction_hash: "0xtxhash".parse().unwrap(),
//!     log_index: U256::from(5u64),
//!     chain_id: 1,
//! };
//!
//! assert!(Validator::default().check(&context).is_ok());
//!
//! let strict = Validator::new(ValidationConfig {
//!     strict_hex: true,
//!     ..ValidationConfig::default()
//! });
//! assert!(strict.check(&context).is_err());
//! ```

mod validator;

use alloy_primitives::U256;

use crate::error::SchemaError;

pub use validator::{ValidationConfig, Validator};

/// A schema value with checkable invariants.
///
/// Only [`validate`](Validate::validate) is required. The field accessors feed
/// the policy checks of [`Validator`] and default to "nothing to check".
pub trait Validate {
    /// Name used in log output.
    const KIND: &'static str;

    /// Check the invariants that hold regardless of configuration.
    ///
    /// # Errors
    ///
    /// Returns the first violated invariant.
    fn validate(&self) -> Result<(), SchemaError>;

    /// Chain the value belongs to.
    fn chain(&self) -> Option<u64> {
        None
    }

    /// Transaction hashes and other hex fields, by wire name.
    fn hex_fields(&self) -> Vec<(&'static str, &str)> {
        Vec::new()
    }

    /// Address fields, by wire name.
    fn address_fields(&self) -> Vec<(&'static str, &str)> {
        Vec::new()
    }

    /// Basis-point fields, by wire name.
    fn bps_fields(&self) -> Vec<(&'static str, U256)> {
        Vec::new()
    }
}

/// Fail with [`SchemaError::ChainIdMismatch`] unless `id_chain == chain_id`.
pub(crate) fn same_chain(id: &impl AsRef<str>, id_chain: u64, chain_id: u64) -> Result<(), SchemaError> {
    if id_chain == chain_id {
        Ok(())
    } else {
        Err(SchemaError::ChainIdMismatch {
            id: id.as_ref().to_string(),
            chain_id,
        })
    }
}

/// Fail with [`SchemaError::IdMismatch`] unless `actual` spells `expected`.
pub(crate) fn same_id(expected: String, actual: &impl AsRef<str>) -> Result<(), SchemaError> {
    if actual.as_ref() == expected {
        Ok(())
    } else {
        Err(SchemaError::IdMismatch {
            expected,
            actual: actual.as_ref().to_string(),
        })
    }
}
