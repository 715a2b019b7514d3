//! Precision-guarded decimal comparisons.
//!
//! Quantities and monetary amounts are never compared with exact equality:
//! two values are considered equal when their difference rounds to zero at a
//! configured number of decimal places. Quantities use the unit-of-measure
//! precision, monetary amounts the accounting precision.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::constants::{DEFAULT_MONETARY_DECIMAL_PRECISION, DEFAULT_UOM_DECIMAL_PRECISION};

/// Caller-supplied decimal precisions for the two value domains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrecisionSettings {
    /// Decimal places for monetary zero checks.
    pub monetary_dp: u32,
    /// Decimal places for quantity comparisons.
    pub uom_dp: u32,
}

impl Default for PrecisionSettings {
    fn default() -> Self {
        PrecisionSettings {
            monetary_dp: DEFAULT_MONETARY_DECIMAL_PRECISION,
            uom_dp: DEFAULT_UOM_DECIMAL_PRECISION,
        }
    }
}

/// Returns true if `value` rounds to zero at `decimal_places`.
pub fn is_zero(value: Decimal, decimal_places: u32) -> bool {
    value.round_dp(decimal_places).is_zero()
}

/// Compares `a` and `b` after rounding their difference to `decimal_places`.
pub fn compare(a: Decimal, b: Decimal, decimal_places: u32) -> Ordering {
    let diff = (a - b).round_dp(decimal_places);
    if diff.is_zero() {
        Ordering::Equal
    } else if diff.is_sign_positive() {
        Ordering::Greater
    } else {
        Ordering::Less
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn zero_check_respects_decimal_places() {
        assert!(is_zero(dec!(0.0004), 3));
        assert!(is_zero(dec!(-0.0004), 3));
        assert!(!is_zero(dec!(0.001), 3));
        assert!(!is_zero(dec!(0.0004), 4));
    }

    #[test]
    fn compare_treats_sub_precision_difference_as_equal() {
        assert_eq!(compare(dec!(1.0004), dec!(1.0), 3), Ordering::Equal);
        assert_eq!(compare(dec!(1.002), dec!(1.0), 3), Ordering::Greater);
        assert_eq!(compare(dec!(0.998), dec!(1.0), 3), Ordering::Less);
    }

    #[test]
    fn default_precision_matches_constants() {
        let precision = PrecisionSettings::default();
        assert_eq!(precision.monetary_dp, 2);
        assert_eq!(precision.uom_dp, 3);
    }
}
