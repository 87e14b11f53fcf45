//! Logging configuration and initialization.

use serde::Deserialize;
use tracing_subscriber::{fmt, EnvFilter};

use crate::error::ConfigError;

/// Output formats accepted by [`LoggingConfig::format`].
pub const LOG_FORMATS: [&str; 2] = ["pretty", "json"];

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoggingConfig {
    /// Filter directive used when `RUST_LOG` is unset, e.g. `info` or
    /// `heavymath_types=debug`.
    #[serde(default = "default_level")]
    pub level: String,
    /// `pretty` or `json`.
    #[serde(default = "default_format")]
    pub format: String,
}

fn default_level() -> String {
    "info".into()
}

fn default_format() -> String {
    "pretty".into()
}

impl LoggingConfig {
    /// True when output should be JSON lines.
    #[must_use]
    pub fn is_json(&self) -> bool {
        self.format == "json"
    }

    /// Initialize the tracing subscriber with this logging configuration.
    ///
    /// `RUST_LOG` takes precedence over [`level`](Self::level).
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::LoggingInit`] when the process already has a
    /// global subscriber, e.g. one installed by the host application.
    pub fn init(&self) -> Result<(), ConfigError> {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&self.level));

        let result = if self.is_json() {
            fmt().json().with_env_filter(filter).try_init()
        } else {
            fmt().with_env_filter(filter).try_init()
        };
        result.map_err(ConfigError::LoggingInit)
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            format: default_format(),
        }
    }
}
