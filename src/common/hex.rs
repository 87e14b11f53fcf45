//! `0x`-prefixed hex strings.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SchemaError;

/// Hex string: `"0x{...}"`.
///
/// Only the prefix is checked on construction; use [`Hex::is_strict`] to also
/// require a non-empty run of hex digits.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Hex(String);

impl Hex {
    /// Get the hex string as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True when the body after `0x` is non-empty and entirely hex digits.
    #[must_use]
    pub fn is_strict(&self) -> bool {
        is_strict_hex(&self.0)
    }
}

/// Account or contract address: `"0x{...}"`, mixed case allowed.
///
/// Like [`Hex`], only the prefix is checked on construction;
/// [`Address::is_strict`] additionally requires exactly 20 bytes of hex.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Address(String);

impl Address {
    /// Get the address as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True when the value is a well-formed 20-byte address.
    #[must_use]
    pub fn is_strict(&self) -> bool {
        is_strict_address(&self.0)
    }

    /// Case-insensitive comparison, as addresses are compared on chain.
    #[must_use]
    pub fn eq_ignore_case(&self, other: &Self) -> bool {
        self.0.eq_ignore_ascii_case(&other.0)
    }
}

impl From<alloy_primitives::Address> for Address {
    fn from(address: alloy_primitives::Address) -> Self {
        Self(address.to_checksum(None))
    }
}

impl From<alloy_primitives::B256> for Hex {
    fn from(hash: alloy_primitives::B256) -> Self {
        Self(hash.to_string())
    }
}

/// True when `value` is `0x` followed by at least one hex digit and nothing else.
#[must_use]
pub fn is_strict_hex(value: &str) -> bool {
    value
        .strip_prefix("0x")
        .is_some_and(|body| !body.is_empty() && body.bytes().all(|b| b.is_ascii_hexdigit()))
}

/// True when `value` is a `0x`-prefixed 20-byte address.
#[must_use]
pub fn is_strict_address(value: &str) -> bool {
    value.starts_with("0x") && alloy_primitives::Address::from_str(value).is_ok()
}

fn require_prefix(value: &str) -> Result<(), SchemaError> {
    if value.starts_with("0x") {
        Ok(())
    } else {
        Err(SchemaError::MalformedHex {
            value: value.to_string(),
        })
    }
}

macro_rules! hex_string_impls {
    ($($ty:ident),*) => {$(
        impl FromStr for $ty {
            type Err = SchemaError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                require_prefix(s)?;
                Ok(Self(s.to_string()))
            }
        }

        impl TryFrom<String> for $ty {
            type Error = SchemaError;

            fn try_from(s: String) -> Result<Self, Self::Error> {
                require_prefix(&s)?;
                Ok(Self(s))
            }
        }

        impl TryFrom<&str> for $ty {
            type Error = SchemaError;

            fn try_from(s: &str) -> Result<Self, Self::Error> {
                s.parse()
            }
        }

        impl From<$ty> for String {
            fn from(value: $ty) -> Self {
                value.0
            }
        }

        impl AsRef<str> for $ty {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    )*};
}

hex_string_impls!(Hex, Address);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_accepts_prefixed_values() {
        let hex: Hex = "0x1234abcd".parse().unwrap();
        assert_eq!(hex.as_str(), "0x1234abcd");
        assert!(hex.is_strict());
    }

    #[test]
    fn hex_accepts_loose_body_but_is_not_strict() {
        let hex: Hex = "0xtxhash".parse().unwrap();
        assert!(!hex.is_strict());
        assert!(!Hex::try_from("0x").unwrap().is_strict());
    }

    #[test]
    fn hex_rejects_missing_prefix() {
        let result = "1234".parse::<Hex>();
        assert!(matches!(result, Err(SchemaError::MalformedHex { .. })));
    }

    #[test]
    fn address_accepts_mixed_case() {
        let address: Address = "0x742d35Cc6634C0532925a3b844Bc9e7595f72bDE".parse().unwrap();
        assert!(address.is_strict());
    }

    #[test]
    fn address_strictness_requires_twenty_bytes() {
        let short: Address = "0xdealer".parse().unwrap();
        assert!(!short.is_strict());
        assert!(!is_strict_address("0x742d35"));
    }

    #[test]
    fn address_compares_ignoring_case() {
        let a: Address = "0xABCDEF".parse().unwrap();
        let b: Address = "0xabcdef".parse().unwrap();
        assert_ne!(a, b);
        assert!(a.eq_ignore_case(&b));
    }

    #[test]
    fn address_from_alloy_is_checksummed() {
        let raw = alloy_primitives::Address::repeat_byte(0xab);
        let address = Address::from(raw);
        assert!(address.is_strict());
        assert!(address.eq_ignore_case(&"0xabababababababababababababababababababab".parse().unwrap()));
    }

    #[test]
    fn hex_from_b256_keeps_full_width() {
        let hex = Hex::from(alloy_primitives::B256::repeat_byte(0x01));
        assert_eq!(hex.as_str().len(), 66);
        assert!(hex.is_strict());
    }

    #[test]
    fn hex_serde_validates_prefix() {
        assert!(serde_json::from_str::<Address>("\"0xdealer\"").is_ok());
        assert!(serde_json::from_str::<Address>("\"dealer\"").is_err());
    }
}
