//! Basis-point scale.

use alloy_primitives::U256;
use rust_decimal::Decimal;

/// Basis points in one whole (100%).
pub const BPS_SCALE: u32 = 10_000;

/// Render a basis-point value as a fraction of one, e.g. 250 bps -> 0.025.
///
/// Returns `None` when the value does not fit in a `u64`.
#[must_use]
pub fn to_fraction(bps: U256) -> Option<Decimal> {
    let raw: u64 = bps.try_into().ok()?;
    Some(Decimal::from(raw) / Decimal::from(BPS_SCALE))
}

/// True when `bps` does not exceed `max`.
#[must_use]
pub fn within(bps: U256, max: u32) -> bool {
    bps <= U256::from(max)
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn converts_fee_to_fraction() {
        assert_eq!(to_fraction(U256::from(250u64)), Some(dec!(0.025)));
        assert_eq!(to_fraction(U256::from(10_000u64)), Some(dec!(1)));
    }

    #[test]
    fn oversized_values_have_no_fraction() {
        assert_eq!(to_fraction(U256::MAX), None);
    }

    #[test]
    fn within_is_inclusive() {
        assert!(within(U256::from(10_000u64), BPS_SCALE));
        assert!(!within(U256::from(10_001u64), BPS_SCALE));
    }
}
