//! Composite string identifiers.
//!
//! Identifiers join a chain id and entity keys with `-`. Each shape is a
//! newtype so differently shaped ids cannot be mixed up, and parsing checks the
//! shape eagerly. The inner string is private and every constructor checks
//! it, so an id that serializes always reads back as an equal id. Equality,
//! hashing and ordering use the string alone.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use alloy_primitives::U256;
use serde::{Deserialize, Serialize};

use crate::error::SchemaError;

/// Chain-prefixed identifier: `"{chainId}-{key}"`.
///
/// The chain id is the decimal prefix before the first `-`; the key is the
/// non-empty remainder and may contain further hyphens.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ChainPrefixedId {
    value: String,
    chain_id: u64,
    split: usize,
}

impl ChainPrefixedId {
    const KIND: &'static str = "chain-prefixed id";

    /// Create an id from a chain id and a key.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::MalformedId`] when the key is empty.
    pub fn new(chain_id: u64, key: impl fmt::Display) -> Result<Self, SchemaError> {
        format!("{chain_id}-{key}").parse()
    }

    /// Build from a key known to be non-empty, such as a decimal number.
    pub(crate) fn from_parts(chain_id: u64, key: impl fmt::Display) -> Self {
        let prefix = chain_id.to_string();
        let value = format!("{prefix}-{key}");
        debug_assert!(value.len() > prefix.len() + 1, "empty key");
        Self {
            split: prefix.len(),
            value,
            chain_id,
        }
    }

    /// Get the chain id.
    #[must_use]
    pub const fn chain_id(&self) -> u64 {
        self.chain_id
    }

    /// Get the part after the chain prefix.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.value[self.split + 1..]
    }

    /// Get the id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.value
    }
}

impl FromStr for ChainPrefixedId {
    type Err = SchemaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = |reason| SchemaError::MalformedId {
            kind: Self::KIND,
            value: s.to_string(),
            reason,
        };

        let (prefix, key) = s.split_once('-').ok_or_else(|| malformed("missing '-'"))?;
        let chain_id = parse_chain(prefix).ok_or_else(|| malformed("chain id is not a number"))?;
        if key.is_empty() {
            return Err(malformed("empty key"));
        }

        Ok(Self {
            value: s.to_string(),
            chain_id,
            split: prefix.len(),
        })
    }
}

/// Prediction identifier: `"{chainId}-{marketId}-{predictorAddress}"`.
///
/// The chain id is before the first `-` and the predictor after the last one;
/// the market key is everything in between.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PredictionId {
    value: String,
    chain_id: u64,
    first: usize,
    last: usize,
}

impl PredictionId {
    const KIND: &'static str = "prediction id";

    /// Create an id from its three parts.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::MalformedId`] when the market key or predictor
    /// is empty, or the predictor contains `-`.
    pub fn new(
        chain_id: u64,
        market_key: impl fmt::Display,
        predictor: impl fmt::Display,
    ) -> Result<Self, SchemaError> {
        let predictor = predictor.to_string();
        let value = format!("{chain_id}-{market_key}-{predictor}");
        if predictor.contains('-') {
            return Err(SchemaError::MalformedId {
                kind: Self::KIND,
                value,
                reason: "predictor contains '-'",
            });
        }
        value.parse()
    }

    /// Get the chain id.
    #[must_use]
    pub const fn chain_id(&self) -> u64 {
        self.chain_id
    }

    /// Get the market key (the on-chain market id, without chain prefix).
    #[must_use]
    pub fn market_key(&self) -> &str {
        &self.value[self.first + 1..self.last]
    }

    /// Get the composite id of the market this prediction belongs to.
    #[must_use]
    pub fn market_id(&self) -> ChainPrefixedId {
        ChainPrefixedId {
            value: self.value[..self.last].to_string(),
            chain_id: self.chain_id,
            split: self.first,
        }
    }

    /// Get the predictor address part.
    #[must_use]
    pub fn predictor(&self) -> &str {
        &self.value[self.last + 1..]
    }

    /// Get the id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.value
    }
}

impl FromStr for PredictionId {
    type Err = SchemaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = |reason| SchemaError::MalformedId {
            kind: Self::KIND,
            value: s.to_string(),
            reason,
        };

        let first = s.find('-').ok_or_else(|| malformed("missing '-'"))?;
        let last = s.rfind('-').unwrap_or(first);
        if last == first {
            return Err(malformed("expected three '-' separated parts"));
        }
        let chain_id =
            parse_chain(&s[..first]).ok_or_else(|| malformed("chain id is not a number"))?;
        if last == first + 1 {
            return Err(malformed("empty market id"));
        }
        if last + 1 == s.len() {
            return Err(malformed("empty predictor"));
        }

        Ok(Self {
            value: s.to_string(),
            chain_id,
            first,
            last,
        })
    }
}

/// Transaction-log identifier: `"{transactionHash}-{logIndex}"`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TxLogId {
    value: String,
    log_index: U256,
    split: usize,
}

impl TxLogId {
    const KIND: &'static str = "tx-log id";

    /// Create an id from a transaction hash and a log index.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::MalformedId`] when the hash is empty.
    pub fn new(transaction_hash: impl fmt::Display, log_index: U256) -> Result<Self, SchemaError> {
        format!("{transaction_hash}-{log_index}").parse()
    }

    /// Build from a hash known to be non-empty.
    pub(crate) fn from_parts(transaction_hash: &str, log_index: U256) -> Self {
        debug_assert!(!transaction_hash.is_empty(), "empty transaction hash");
        Self {
            split: transaction_hash.len(),
            value: format!("{transaction_hash}-{log_index}"),
            log_index,
        }
    }

    /// Get the transaction hash part.
    #[must_use]
    pub fn transaction_hash(&self) -> &str {
        &self.value[..self.split]
    }

    /// Get the log index.
    #[must_use]
    pub const fn log_index(&self) -> U256 {
        self.log_index
    }

    /// Get the id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.value
    }
}

impl FromStr for TxLogId {
    type Err = SchemaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = |reason| SchemaError::MalformedId {
            kind: Self::KIND,
            value: s.to_string(),
            reason,
        };

        let (hash, index) = s.rsplit_once('-').ok_or_else(|| malformed("missing '-'"))?;
        if hash.is_empty() {
            return Err(malformed("empty transaction hash"));
        }
        if index.is_empty() || !index.bytes().all(|b| b.is_ascii_digit()) {
            return Err(malformed("log index is not a number"));
        }
        let log_index =
            U256::from_str_radix(index, 10).map_err(|_| malformed("log index overflows"))?;

        Ok(Self {
            value: s.to_string(),
            log_index,
            split: hash.len(),
        })
    }
}

fn parse_chain(prefix: &str) -> Option<u64> {
    if prefix.is_empty() || !prefix.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    prefix.parse().ok()
}

macro_rules! string_id_impls {
    ($($ty:ident),*) => {$(
        impl PartialEq for $ty {
            fn eq(&self, other: &Self) -> bool {
                self.value == other.value
            }
        }

        impl Eq for $ty {}

        impl Hash for $ty {
            fn hash<H: Hasher>(&self, state: &mut H) {
                self.value.hash(state);
            }
        }

        impl PartialOrd for $ty {
            fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
                Some(self.cmp(other))
            }
        }

        impl Ord for $ty {
            fn cmp(&self, other: &Self) -> Ordering {
                self.value.cmp(&other.value)
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.value)
            }
        }

        impl TryFrom<String> for $ty {
            type Error = SchemaError;

            fn try_from(s: String) -> Result<Self, Self::Error> {
                s.parse()
            }
        }

        impl TryFrom<&str> for $ty {
            type Error = SchemaError;

            fn try_from(s: &str) -> Result<Self, Self::Error> {
                s.parse()
            }
        }

        impl From<$ty> for String {
            fn from(id: $ty) -> Self {
                id.value
            }
        }

        impl AsRef<str> for $ty {
            fn as_ref(&self) -> &str {
                &self.value
            }
        }
    )*};
}

string_id_impls!(ChainPrefixedId, PredictionId, TxLogId);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chain_prefixed_id_parses_documented_form() {
        let id: ChainPrefixedId = "1-market123".parse().unwrap();
        assert_eq!(id.chain_id(), 1);
        assert_eq!(id.key(), "market123");
        assert_eq!(id.as_str(), "1-market123");
    }

    #[test]
    fn chain_prefixed_id_accepts_other_chains() {
        for (raw, chain) in [("137-market456", 137), ("42161-market789", 42161)] {
            let id: ChainPrefixedId = raw.parse().unwrap();
            assert_eq!(id.chain_id(), chain);
        }
    }

    #[test]
    fn chain_prefixed_id_key_keeps_inner_hyphens() {
        let id: ChainPrefixedId = "1-1-1-2".parse().unwrap();
        assert_eq!(id.key(), "1-1-2");
    }

    #[test]
    fn chain_prefixed_id_new_matches_parse() {
        let built = ChainPrefixedId::new(1, "0xabc123").unwrap();
        let parsed: ChainPrefixedId = "1-0xabc123".parse().unwrap();
        assert_eq!(built, parsed);
        assert_eq!(built.key(), "0xabc123");
    }

    #[test]
    fn chain_prefixed_id_rejects_malformed() {
        for raw in ["market123", "-market", "abc-market", "1-", ""] {
            let result = raw.parse::<ChainPrefixedId>();
            assert!(
                matches!(result, Err(SchemaError::MalformedId { .. })),
                "accepted {raw:?}"
            );
        }
    }

    #[test]
    fn prediction_id_parses_documented_form() {
        let id: PredictionId = "1-market123-0xpredictor".parse().unwrap();
        assert_eq!(id.chain_id(), 1);
        assert_eq!(id.market_key(), "market123");
        assert_eq!(id.predictor(), "0xpredictor");
        assert_eq!(id.market_id().as_str(), "1-market123");
    }

    #[test]
    fn prediction_id_market_key_may_contain_hyphens() {
        let id: PredictionId = "1-market-1-0xuser".parse().unwrap();
        assert_eq!(id.market_key(), "market-1");
        assert_eq!(id.predictor(), "0xuser");
    }

    #[test]
    fn prediction_id_new_matches_parse() {
        let built = PredictionId::new(1, "market123", "0xuser").unwrap();
        assert_eq!(built.as_str(), "1-market123-0xuser");
        assert_eq!(built, "1-market123-0xuser".parse::<PredictionId>().unwrap());
    }

    #[test]
    fn prediction_id_rejects_malformed() {
        for raw in ["1-market123", "1--0xuser", "1-market-", "x-market-0xuser"] {
            assert!(raw.parse::<PredictionId>().is_err(), "accepted {raw:?}");
        }
    }

    #[test]
    fn tx_log_id_parses_documented_form() {
        let id: TxLogId = "0xabc-5".parse().unwrap();
        assert_eq!(id.transaction_hash(), "0xabc");
        assert_eq!(id.log_index(), U256::from(5u64));
    }

    #[test]
    fn tx_log_id_new_matches_parse() {
        let built = TxLogId::new("0xtxhash", U256::from(5u64)).unwrap();
        assert_eq!(built.as_str(), "0xtxhash-5");
        assert_eq!(built, "0xtxhash-5".parse::<TxLogId>().unwrap());
    }

    #[test]
    fn tx_log_id_rejects_malformed() {
        for raw in ["0xabc", "-5", "0xabc-", "0xabc-x1"] {
            assert!(raw.parse::<TxLogId>().is_err(), "accepted {raw:?}");
        }
    }

    #[test]
    fn ids_serialize_as_plain_strings() {
        let id = ChainPrefixedId::new(1, "market123").unwrap();
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"1-market123\"");

        let back: ChainPrefixedId = serde_json::from_str("\"1-market123\"").unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn ids_reject_malformed_on_deserialize() {
        assert!(serde_json::from_str::<TxLogId>("\"nolog\"").is_err());
    }

    #[test]
    fn display_is_the_raw_string() {
        let id = TxLogId::new("0xabc", U256::from(12u64)).unwrap();
        assert_eq!(format!("{id}"), "0xabc-12");
    }

    #[test]
    fn new_rejects_what_parse_rejects() {
        assert!(ChainPrefixedId::new(1, "").is_err());
        assert!(PredictionId::new(1, "", "0xuser").is_err());
        assert!(PredictionId::new(1, "market", "").is_err());
        assert!(TxLogId::new("", U256::from(5u64)).is_err());
    }

    #[test]
    fn predictor_with_hyphen_is_rejected() {
        assert!(matches!(
            PredictionId::new(1, "m", "a-b"),
            Err(SchemaError::MalformedId {
                reason: "predictor contains '-'",
                ..
            })
        ));
    }

    #[test]
    fn built_ids_read_back_equal() {
        let chain = ChainPrefixedId::new(1, "market-1").unwrap();
        let prediction = PredictionId::new(1, "market-1", "0xuser").unwrap();
        let log = TxLogId::new("0xabc", U256::from(7u64)).unwrap();

        let json = serde_json::to_string(&(&chain, &prediction, &log)).unwrap();
        let back: (ChainPrefixedId, PredictionId, TxLogId) = serde_json::from_str(&json).unwrap();

        assert_eq!(back, (chain, prediction, log));
        assert_eq!(back.1.market_key(), "market-1");
    }

    #[test]
    fn crate_built_ids_equal_parsed_ones() {
        let built = ChainPrefixedId::from_parts(1, U256::from(42u64));
        assert_eq!(built, "1-42".parse::<ChainPrefixedId>().unwrap());

        let log = TxLogId::from_parts("0xa-b", U256::from(3u64));
        let parsed: TxLogId = "0xa-b-3".parse().unwrap();
        assert_eq!(log, parsed);
        assert_eq!(parsed.transaction_hash(), "0xa-b");
    }

    #[test]
    fn ids_order_by_string() {
        let mut ids: Vec<ChainPrefixedId> = ["137-b", "1-b", "1-a"]
            .into_iter()
            .map(|raw| raw.parse().unwrap())
            .collect();
        ids.sort();
        let sorted: Vec<&str> = ids.iter().map(ChainPrefixedId::as_str).collect();
        assert_eq!(sorted, ["1-a", "1-b", "137-b"]);
    }
}
