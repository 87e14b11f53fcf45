//! Policy-driven validation.

use serde::Deserialize;
use tracing::debug;

use super::Validate;
use crate::common::bps::{self, BPS_SCALE};
use crate::common::{is_strict_address, is_strict_hex};
use crate::error::SchemaError;

/// Validation policy.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ValidationConfig {
    /// Require hex fields to be real hex and addresses to be 20 bytes.
    ///
    /// Off by default: fixtures and some collaborators use placeholder
    /// strings such as `0xdealer`.
    #[serde(default)]
    pub strict_hex: bool,
    /// Ceiling for fees and percentages, in basis points.
    #[serde(default = "default_max_basis_points")]
    pub max_basis_points: u32,
    /// Chains records may belong to. Empty allows every chain.
    #[serde(default)]
    pub chain_ids: Vec<u64>,
}

const fn default_max_basis_points() -> u32 {
    BPS_SCALE
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            strict_hex: false,
            max_basis_points: default_max_basis_points(),
            chain_ids: Vec::new(),
        }
    }
}

/// Applies a [`ValidationConfig`] on top of [`Validate`].
#[derive(Debug, Clone, Default)]
pub struct Validator {
    config: ValidationConfig,
}

impl Validator {
    #[must_use]
    pub fn new(config: ValidationConfig) -> Self {
        Self { config }
    }

    /// The policy in effect.
    #[must_use]
    pub fn config(&self) -> &ValidationConfig {
        &self.config
    }

    /// Check `value` against its invariants and the configured policy.
    ///
    /// # Errors
    ///
    /// Returns the first violation found. Rejections are logged at debug level.
    pub fn check<T: Validate>(&self, value: &T) -> Result<(), SchemaError> {
        let result = self.run(value);
        if let Err(err) = &result {
            debug!(kind = T::KIND, error = %err, "schema value rejected");
        }
        result
    }

    /// Check every value, stopping at the first rejection.
    ///
    /// # Errors
    ///
    /// Returns the index of the rejected value with its error.
    pub fn check_all<'a, T, I>(&self, values: I) -> Result<(), (usize, SchemaError)>
    where
        T: Validate + 'a,
        I: IntoIterator<Item = &'a T>,
    {
        for (index, value) in values.into_iter().enumerate() {
            self.check(value).map_err(|err| (index, err))?;
        }
        Ok(())
    }

    fn run<T: Validate>(&self, value: &T) -> Result<(), SchemaError> {
        value.validate()?;

        if let Some(chain_id) = value.chain() {
            if !self.config.chain_ids.is_empty() && !self.config.chain_ids.contains(&chain_id) {
                return Err(SchemaError::ChainNotAllowed { chain_id });
            }
        }

        for (field, bps) in value.bps_fields() {
            if !bps::within(bps, self.config.max_basis_points) {
                return Err(SchemaError::BasisPointsOutOfRange {
                    field,
                    value: bps,
                    max: self.config.max_basis_points,
                });
            }
        }

        if self.config.strict_hex {
            for (field, hex) in value.hex_fields() {
                if !is_strict_hex(hex) {
                    return Err(SchemaError::InvalidHex {
                        field,
                        value: hex.to_string(),
                    });
                }
            }
            for (field, address) in value.address_fields() {
                if !is_strict_address(address) {
                    return Err(SchemaError::InvalidHex {
                        field,
                        value: address.to_string(),
                    });
                }
            }
        }

        Ok(())
    }
}
