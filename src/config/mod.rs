//! Configuration loading and validation.
//!
//! [`Settings`] is read from a TOML file. Every section and field has a
//! default, so an empty file is a valid configuration.
//!
//! ```toml
//! [logging]
//! level = "debug"
//! format = "json"
//!
//! [validation]
//! strict_hex = true
//! max_basis_points = 10000
//! chain_ids = [1, 11155111]
//! ```
//!
//! # Example
//!
//! ```no_run
//! use heavymath_types::config::Settings;
//! use heavymath_types::validate::Validator;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let settings = Settings::load("config.toml")?;
//!     settings.logging.init()?;
//!     let _validator = Validator::new(settings.validation);
//!     Ok(())
//! }
//! ```

mod logging;

use std::path::Path;

use serde::Deserialize;

use crate::common::bps::BPS_SCALE;
use crate::error::{ConfigError, Result};
use crate::validate::ValidationConfig;

pub use logging::{LoggingConfig, LOG_FORMATS};

/// Top-level settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub validation: ValidationConfig,
}

impl Settings {
    /// Parse settings from TOML content.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is malformed or a value is out of range.
    pub fn parse_toml(content: &str) -> Result<Self> {
        let settings: Self = toml::from_str(content).map_err(ConfigError::Parse)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, or on any error
    /// [`parse_toml`](Self::parse_toml) reports.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::parse_toml(&content)
    }

    fn validate(&self) -> Result<()> {
        if self.logging.level.trim().is_empty() {
            return Err(ConfigError::MissingField {
                field: "logging.level",
            }
            .into());
        }
        if !LOG_FORMATS.contains(&self.logging.format.as_str()) {
            return Err(ConfigError::InvalidValue {
                field: "logging.format",
                reason: format!("must be one of {LOG_FORMATS:?}"),
            }
            .into());
        }
        let max = self.validation.max_basis_points;
        if max == 0 || max > BPS_SCALE {
            return Err(ConfigError::InvalidValue {
                field: "validation.max_basis_points",
                reason: format!("must be between 1 and {BPS_SCALE}"),
            }
            .into());
        }
        Ok(())
    }
}
