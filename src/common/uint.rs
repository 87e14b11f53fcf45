//! Serde helpers for on-chain integers.
//!
//! On-chain integers are carried as [`U256`]. On the wire they are written as
//! decimal strings so no consumer loses precision, and read back from decimal
//! strings, `0x` hex strings or plain JSON integers.
//!
//! ```
//! use alloy_primitives::U256;
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Serialize, Deserialize)]
//! struct Row {
//!     #[serde(with = "heavymath_types::common::uint::decimal")]
//!     amount: U256,
//! }
//!
//! let row: Row = serde_json::from_str(r#"{"amount": 1000000}"#).unwrap();
//! assert_eq!(serde_json::to_string(&row).unwrap(), r#"{"amount":"1000000"}"#);
//! ```

use std::fmt;

use alloy_primitives::U256;
use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serializer};

/// Parse a decimal or `0x`-prefixed hex string into a [`U256`].
pub fn parse_u256(value: &str) -> Result<U256, String> {
    let (digits, radix) = match value.strip_prefix("0x") {
        Some(hex) => (hex, 16),
        None => (value, 10),
    };
    if digits.is_empty() {
        return Err(format!("empty integer '{value}'"));
    }
    let valid = match radix {
        16 => digits.bytes().all(|b| b.is_ascii_hexdigit()),
        _ => digits.bytes().all(|b| b.is_ascii_digit()),
    };
    if !valid {
        return Err(format!("invalid integer '{value}'"));
    }
    U256::from_str_radix(digits, radix).map_err(|e| format!("invalid integer '{value}': {e}"))
}

struct U256Visitor;

impl<'de> Visitor<'de> for U256Visitor {
    type Value = U256;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a non-negative integer or an integer string")
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<U256, E> {
        Ok(U256::from(v))
    }

    fn visit_u128<E: de::Error>(self, v: u128) -> Result<U256, E> {
        Ok(U256::from(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<U256, E> {
        u64::try_from(v)
            .map(U256::from)
            .map_err(|_| E::custom(format!("negative integer {v}")))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<U256, E> {
        parse_u256(v).map_err(E::custom)
    }
}

struct Decimal(U256);

impl<'de> Deserialize<'de> for Decimal {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(U256Visitor).map(Decimal)
    }
}

/// `#[serde(with = "...")]` module for `U256` fields.
pub mod decimal {
    use super::*;

    pub fn serialize<S: Serializer>(value: &U256, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(value)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<U256, D::Error> {
        Decimal::deserialize(deserializer).map(|d| d.0)
    }
}

/// `#[serde(with = "...")]` module for `Option<U256>` fields.
///
/// Pair it with `#[serde(default)]` so an omitted field reads as `None`.
pub mod decimal_opt {
    use super::*;

    pub fn serialize<S: Serializer>(value: &Option<U256>, serializer: S) -> Result<S::Ok, S::Error> {
        match value {
            Some(v) => serializer.collect_str(v),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<U256>, D::Error> {
        Option::<Decimal>::deserialize(deserializer).map(|o| o.map(|d| d.0))
    }
}

/// `#[serde(with = "...")]` module for `Vec<U256>` fields.
pub mod decimal_vec {
    use super::*;

    pub fn serialize<S: Serializer>(values: &[U256], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(values.iter().map(ToString::to_string))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<U256>, D::Error> {
        Vec::<Decimal>::deserialize(deserializer).map(|v| v.into_iter().map(|d| d.0).collect())
    }
}
