//! PAYG withholding amounts.

use rust_decimal::Decimal;

use payrun_shared::types::round_currency;

use crate::constants::{MEDICARE_LEVY_RATE, MEDICARE_LEVY_THRESHOLD, NO_TAX_FREE_THRESHOLD_RATE};
use crate::employee::PayFrequency;

use super::brackets::bracket_for;

/// Calculates annual PAYG withholding for an annual income.
///
/// With the tax-free threshold claimed, tax is the marginal bracket
/// amount plus the Medicare levy (2% of the full income once income
/// exceeds the levy threshold). Without the threshold, a flat 47%
/// applies to the entire income - a documented simplification standing
/// in for the real no-threshold schedule, not a progressive
/// computation.
///
/// Zero or negative income yields zero tax. The result is not rounded;
/// period entry points round once at the final step.
#[must_use]
pub fn calculate_annual_tax(annual_income: Decimal, has_tax_free_threshold: bool) -> Decimal {
    if annual_income <= Decimal::ZERO {
        return Decimal::ZERO;
    }

    if !has_tax_free_threshold {
        return annual_income * NO_TAX_FREE_THRESHOLD_RATE;
    }

    let bracket = bracket_for(annual_income);
    let over_min = (annual_income - bracket.formula_min).max(Decimal::ZERO);
    let bracket_tax = bracket.base + over_min * bracket.rate;

    let levy = if annual_income > MEDICARE_LEVY_THRESHOLD {
        annual_income * MEDICARE_LEVY_RATE
    } else {
        Decimal::ZERO
    };

    bracket_tax + levy
}

/// Calculates withholding for one pay period.
///
/// Annualizes the gross by the period count, computes annual tax, and
/// divides back down by the same divisor, rounding to 2 decimal places
/// at this final step only.
#[must_use]
pub fn calculate_period_tax(
    gross_pay: Decimal,
    frequency: PayFrequency,
    has_tax_free_threshold: bool,
) -> Decimal {
    let periods = frequency.periods_per_year();
    let annual_tax = calculate_annual_tax(gross_pay * periods, has_tax_free_threshold);
    round_currency(annual_tax / periods)
}

/// Calculates withholding for a weekly gross pay.
#[must_use]
pub fn calculate_weekly_tax(gross_pay: Decimal, has_tax_free_threshold: bool) -> Decimal {
    calculate_period_tax(gross_pay, PayFrequency::Weekly, has_tax_free_threshold)
}

/// Calculates withholding for a fortnightly gross pay.
#[must_use]
pub fn calculate_fortnightly_tax(gross_pay: Decimal, has_tax_free_threshold: bool) -> Decimal {
    calculate_period_tax(gross_pay, PayFrequency::Fortnightly, has_tax_free_threshold)
}

/// Calculates withholding for a monthly gross pay.
#[must_use]
pub fn calculate_monthly_tax(gross_pay: Decimal, has_tax_free_threshold: bool) -> Decimal {
    calculate_period_tax(gross_pay, PayFrequency::Monthly, has_tax_free_threshold)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_zero_and_negative_income() {
        assert_eq!(calculate_annual_tax(dec!(0), true), dec!(0));
        assert_eq!(calculate_annual_tax(dec!(-5000), true), dec!(0));
        assert_eq!(calculate_annual_tax(dec!(-5000), false), dec!(0));
    }

    #[test]
    fn test_income_below_tax_free_threshold() {
        assert_eq!(calculate_annual_tax(dec!(18000), true), dec!(0));
        assert_eq!(calculate_annual_tax(dec!(18200), true), dec!(0));
    }

    #[test]
    fn test_annual_tax_30000_with_threshold() {
        // (30000 - 18200) * 0.19 = 2242, plus levy 30000 * 0.02 = 600
        assert_eq!(calculate_annual_tax(dec!(30000), true), dec!(2842));
    }

    #[test]
    fn test_levy_applies_only_above_threshold() {
        // At exactly the threshold: bracket tax only
        assert_eq!(calculate_annual_tax(dec!(26000), true), dec!(1482.00));
        // One dollar over: levy on the full income
        assert_eq!(calculate_annual_tax(dec!(26001), true), dec!(2002.21));
    }

    #[test]
    fn test_no_threshold_flat_rate() {
        assert_eq!(calculate_annual_tax(dec!(50000), false), dec!(23500.00));
    }

    #[test]
    fn test_fortnightly_tax_3000() {
        // Annualized 78000: 5092 + (78000 - 45001) * 0.325 = 15816.675,
        // plus levy 1560 => 17376.675 annual => 668.33 per fortnight
        assert_eq!(calculate_fortnightly_tax(dec!(3000), true), dec!(668.33));
    }

    #[test]
    fn test_weekly_and_monthly_entry_points() {
        // 1500/week annualizes to the same 78000
        assert_eq!(calculate_weekly_tax(dec!(1500), true), dec!(334.17));
        // 6500/month annualizes to 78000 => 17376.675 / 12
        assert_eq!(calculate_monthly_tax(dec!(6500), true), dec!(1448.06));
    }

    #[test]
    fn test_top_bracket() {
        // 250000: 51667 + (250000 - 180001) * 0.45 + 5000 levy
        assert_eq!(
            calculate_annual_tax(dec!(250000), true),
            dec!(51667) + dec!(69999) * dec!(0.45) + dec!(5000)
        );
    }
}
