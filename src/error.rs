use alloy_primitives::U256;
use thiserror::Error;

/// Errors raised when a value does not satisfy a schema shape or invariant.
///
/// The schema types themselves never fail to construct; these errors come
/// from the parsing constructors of the identifier and hex newtypes, from the
/// typed invariant views on entities, and from the [`Validate`] layer.
///
/// [`Validate`]: crate::validate::Validate
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SchemaError {
    /// A composite identifier did not match its documented format.
    #[error("malformed {kind} '{value}': {reason}")]
    MalformedId {
        /// Identifier shape that was expected.
        kind: &'static str,
        /// The rejected input.
        value: String,
        /// What was wrong with it.
        reason: &'static str,
    },

    /// A hex string was missing its `0x` prefix.
    #[error("malformed hex '{value}': missing 0x prefix")]
    MalformedHex {
        /// The rejected input.
        value: String,
    },

    /// A hex field failed strict checking (non-hex digits or wrong length).
    #[error("invalid hex in {field}: '{value}'")]
    InvalidHex {
        /// Field the value was read from.
        field: &'static str,
        /// The rejected value.
        value: String,
    },

    /// A raw oracle type outside the on-chain enumeration.
    #[error("unknown oracle type {value}")]
    UnknownOracleType {
        /// The raw discriminant.
        value: u8,
    },

    /// A string did not name any variant of an enumeration.
    #[error("unknown {kind} '{value}'")]
    UnknownVariant {
        /// Enumeration being parsed.
        kind: &'static str,
        /// The rejected input.
        value: String,
    },

    /// `resolution`/`equilibrium` presence disagrees with the market status.
    #[error("market status {status} does not agree with resolution fields")]
    ResolutionMismatch {
        /// Status carried by the record.
        status: String,
    },

    /// Only some of the last-transfer fields are set.
    #[error("last transfer fields must be all set or all null")]
    PartialTransfer,

    /// Only some of the oracle response fields are set.
    #[error("oracle response fields must be all set or all null")]
    PartialResponse,

    /// A timed out oracle request also carries a response.
    #[error("timed out oracle request cannot carry a response")]
    TimedOutWithResponse,

    /// `marketId` presence disagrees with the withdrawal type.
    #[error("{withdrawal_type} withdrawal does not agree with marketId")]
    WithdrawalMarketMismatch {
        /// Withdrawal type carried by the record.
        withdrawal_type: String,
    },

    /// A basis-point value above the configured ceiling.
    #[error("{field} is {value} bps, above the {max} bps ceiling")]
    BasisPointsOutOfRange {
        /// Field the value was read from.
        field: &'static str,
        /// The rejected value.
        value: U256,
        /// Ceiling in effect.
        max: u32,
    },

    /// A composite id names a different chain than the record's `chainId`.
    #[error("id '{id}' does not belong to chain {chain_id}")]
    ChainIdMismatch {
        /// The composite id.
        id: String,
        /// The record's chain.
        chain_id: u64,
    },

    /// A composite id differs from the one implied by the record's key fields.
    #[error("id '{actual}' does not match expected '{expected}'")]
    IdMismatch {
        /// Id derived from the key fields.
        expected: String,
        /// Id carried by the record.
        actual: String,
    },

    /// The chain is not in the configured allow list.
    #[error("chain {chain_id} is not allowed")]
    ChainNotAllowed {
        /// The rejected chain.
        chain_id: u64,
    },

    /// Oracle bounds are inverted.
    #[error("oracle bounds inverted: min {min} > max {max}")]
    InvalidOracleBounds {
        /// Declared minimum.
        min: U256,
        /// Declared maximum.
        max: U256,
    },

    /// `dataSource` presence disagrees with the oracle type.
    #[error("{oracle_type} oracle does not agree with dataSource")]
    OracleSourceMismatch {
        /// Oracle type carried by the record.
        oracle_type: String,
    },

    /// A permission assignment without any subcategory.
    #[error("permission assignment has no subcategories")]
    EmptySubCategories,

    /// A unix timestamp that cannot be represented as a calendar date.
    #[error("timestamp {value} is out of range")]
    TimestampOutOfRange {
        /// The raw seconds value.
        value: U256,
    },
}

/// Configuration-related errors with structured variants.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),

    #[error("failed to initialize logging: {0}")]
    LoggingInit(#[source] Box<dyn std::error::Error + Send + Sync>),
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Schema(#[from] SchemaError),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
