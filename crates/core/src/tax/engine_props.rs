//! Property-based tests for the tax engine.

use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::constants::TAX_BRACKETS;
use crate::employee::PayFrequency;

use super::engine::{calculate_annual_tax, calculate_fortnightly_tax, calculate_period_tax};

/// Strategy to generate a non-negative gross pay up to $20,000.00 per
/// period.
fn period_gross() -> impl Strategy<Value = Decimal> {
    (0i64..2_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy to generate an annual income up to $500,000.00.
fn annual_income() -> impl Strategy<Value = Decimal> {
    (0i64..50_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Periodization round-trip: fortnightly tax times 26 stays within
    /// one cent per period of the annual tax on the annualized income.
    #[test]
    fn prop_fortnightly_round_trip(gross in period_gross()) {
        let per_period = calculate_fortnightly_tax(gross, true);
        let annual = calculate_annual_tax(gross * dec!(26), true);
        let diff = (per_period * dec!(26) - annual).abs();
        prop_assert!(
            diff <= dec!(0.01) * dec!(26),
            "round-trip drift too large: {diff} for gross {gross}"
        );
    }

    /// Tax is monotonic: more income never means less annual tax.
    #[test]
    fn prop_annual_tax_monotonic(
        income in annual_income(),
        bump in 0i64..10_000_00i64,
    ) {
        let higher = income + Decimal::new(bump, 2);
        prop_assert!(
            calculate_annual_tax(higher, true) >= calculate_annual_tax(income, true)
        );
    }

    /// Periodic tax is never negative and never exceeds the gross for
    /// any frequency.
    #[test]
    fn prop_period_tax_bounded(gross in period_gross()) {
        for frequency in [
            PayFrequency::Weekly,
            PayFrequency::Fortnightly,
            PayFrequency::Monthly,
        ] {
            let tax = calculate_period_tax(gross, frequency, true);
            prop_assert!(tax >= Decimal::ZERO);
            prop_assert!(tax <= gross, "tax {tax} exceeds gross {gross}");
        }
    }
}

/// Bracket continuity: evaluating the lower bracket's formula at
/// its upper bound agrees with the upper bracket's base amount to
/// within one marginal dollar step.
#[test]
fn test_bracket_continuity_at_boundaries() {
    for pair in TAX_BRACKETS.windows(2) {
        let (lower, upper) = (&pair[0], &pair[1]);
        let lower_at_max = lower.base + (lower.max - lower.formula_min) * lower.rate;
        let jump = (upper.base - lower_at_max).abs();
        assert!(
            jump <= dec!(0.50),
            "discontinuity of {jump} between brackets at {}",
            lower.max
        );
    }
}
