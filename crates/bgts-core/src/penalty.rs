//! # Penalty Calculator
//!
//! Maps a declared gift value and a breach occurrence count to a fine
//! amount via the fixed multiplier table of the gift rules: first breach
//! ×2, second ×5, third and every later breach ×10.
//!
//! The calculator is total over its coerced domain. Non-finite or
//! negative values are coerced to zero; breach counts below one fall back
//! to the first-occurrence multiplier. There is no upper bound on the
//! breach count — repeat offenders stay at ×10.

use serde::{Deserialize, Serialize};

/// Fine multipliers indexed by breach occurrence (1st, 2nd, 3rd-or-later).
const MULTIPLIERS: [u32; 3] = [2, 5, 10];

/// Currency prefix used in formatted fine amounts (Bhutanese ngultrum).
pub const CURRENCY_PREFIX: &str = "Nu.";

/// A computed penalty. Derived value, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PenaltyAssessment {
    /// Declared gift value after coercion to a non-negative amount.
    pub value: f64,
    /// Breach occurrence after coercion to a positive count.
    pub breach_number: u32,
    /// Multiplier drawn from the rule table.
    pub multiplier: u32,
    /// `value × multiplier`.
    pub fine: f64,
    /// Locale-formatted fine, e.g. `"Nu. 14,000"`.
    pub formatted: String,
}

/// Compute the fine for a gift of `value` on the `breach_number`-th breach.
///
/// Coercion rules match the declaration form: a value that is missing,
/// negative, or not a number counts as zero; a breach number below one
/// counts as the first occurrence.
pub fn assess(value: f64, breach_number: i64) -> PenaltyAssessment {
    let value = if value.is_finite() && value >= 0.0 {
        value
    } else {
        0.0
    };
    let breach = breach_number.max(1);

    let multiplier = multiplier_for(breach);
    let fine = value * f64::from(multiplier);

    PenaltyAssessment {
        value,
        breach_number: u32::try_from(breach).unwrap_or(u32::MAX),
        multiplier,
        fine,
        formatted: format_ngultrum(fine),
    }
}

/// Multiplier for the given breach occurrence. Breach counts below one
/// resolve to the first-occurrence multiplier; there is no upper bound.
fn multiplier_for(breach: i64) -> u32 {
    match breach {
        i64::MIN..=1 => MULTIPLIERS[0],
        2 => MULTIPLIERS[1],
        _ => MULTIPLIERS[2],
    }
}

/// Format a non-negative amount as a ngultrum string with thousands
/// separators. Fractional ngultrum are shown to two digits only when the
/// amount is not whole.
pub fn format_ngultrum(amount: f64) -> String {
    let amount = if amount.is_finite() && amount >= 0.0 {
        amount
    } else {
        0.0
    };
    let cents = (amount * 100.0).round() as u128;
    let whole = cents / 100;
    let fraction = (cents % 100) as u32;

    let grouped = group_thousands(whole);
    if fraction == 0 {
        format!("{CURRENCY_PREFIX} {grouped}")
    } else {
        format!("{CURRENCY_PREFIX} {grouped}.{fraction:02}")
    }
}

/// Insert a comma every three digits, counting from the right.
fn group_thousands(n: u128) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn first_breach_doubles() {
        let result = assess(1000.0, 1);
        assert_eq!(result.multiplier, 2);
        assert_eq!(result.fine, 2000.0);
        assert!(result.formatted.contains("2,000"), "{}", result.formatted);
    }

    #[test]
    fn second_breach_is_five_times() {
        let result = assess(1000.0, 2);
        assert_eq!(result.multiplier, 5);
        assert_eq!(result.fine, 5000.0);
    }

    #[test]
    fn third_breach_is_ten_times() {
        let result = assess(1000.0, 3);
        assert_eq!(result.multiplier, 10);
        assert_eq!(result.fine, 10000.0);
    }

    #[test]
    fn multiplier_stays_flat_beyond_third_breach() {
        for breach in [4, 7, 100, i64::MAX] {
            assert_eq!(assess(500.0, breach).multiplier, 10);
        }
    }

    #[test]
    fn breach_below_one_falls_back_to_first_occurrence() {
        for breach in [0, -1, i64::MIN] {
            let result = assess(1000.0, breach);
            assert_eq!(result.multiplier, 2);
            assert_eq!(result.breach_number, 1);
        }
    }

    #[test]
    fn zero_value_fines_zero() {
        for breach in [1, 2, 3, 50] {
            assert_eq!(assess(0.0, breach).fine, 0.0);
        }
    }

    #[test]
    fn negative_and_non_finite_values_coerce_to_zero() {
        assert_eq!(assess(-5000.0, 2).value, 0.0);
        assert_eq!(assess(f64::NAN, 1).fine, 0.0);
        assert_eq!(assess(f64::INFINITY, 3).fine, 0.0);
    }

    #[test]
    fn formatted_fine_groups_thousands() {
        assert_eq!(assess(7000.0, 1).formatted, "Nu. 14,000");
        assert_eq!(assess(500.0, 1).formatted, "Nu. 1,000");
        assert_eq!(assess(50.0, 1).formatted, "Nu. 100");
        assert_eq!(assess(1_000_000.0, 3).formatted, "Nu. 10,000,000");
    }

    #[test]
    fn fractional_fines_show_two_digits() {
        assert_eq!(assess(10.25, 1).formatted, "Nu. 20.50");
        assert_eq!(format_ngultrum(2000.5), "Nu. 2,000.50");
    }

    #[test]
    fn format_zero() {
        assert_eq!(format_ngultrum(0.0), "Nu. 0");
    }

    proptest! {
        #[test]
        fn multiplier_always_from_table(value in -1.0e12f64..1.0e12, breach in proptest::num::i64::ANY) {
            let result = assess(value, breach);
            prop_assert!(MULTIPLIERS.contains(&result.multiplier));
        }

        #[test]
        fn fine_is_value_times_multiplier(value in 0.0f64..1.0e9, breach in 1i64..1000) {
            let result = assess(value, breach);
            prop_assert_eq!(result.fine, result.value * f64::from(result.multiplier));
            prop_assert!(result.fine >= 0.0);
        }
    }
}
