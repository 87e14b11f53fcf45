//! Database entity shapes.
//!
//! One struct per table the indexer writes. Integers are [`U256`] and travel
//! as decimal strings in JSON; nullable columns are `Option` and serialize as
//! `null`. Several entities have groups of columns that must be set or null
//! together; each exposes a typed view over the group (`outcome`, `state`,
//! `source`, `last_transfer`) that fails with a
//! [`SchemaError`](crate::error::SchemaError) when the group is inconsistent.
//!
//! [`U256`]: alloy_primitives::U256

mod dealer;
mod favorite;
mod fee;
mod market;
mod oracle;
mod prediction;

pub use dealer::{DealerNftEntity, DealerPermissionEntity, TransferRecord};
pub use favorite::WalletFavoriteEntity;
pub use fee::{FeeWithdrawalEntity, Withdrawal, WithdrawalSource, WithdrawalType};
pub use market::{MarketEntity, MarketOutcome, MarketStateHistoryEntity, MarketStatus};
pub use oracle::{OracleEntity, OracleRequestEntity, OracleRequestState, OracleResponse};
pub use prediction::{ClaimEntity, ClaimType, PredictionEntity};
