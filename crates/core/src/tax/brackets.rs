//! Marginal bracket lookup.

use rust_decimal::Decimal;

use crate::constants::{TAX_BRACKETS, TaxBracket};

/// Finds the marginal bracket for an annual income.
///
/// Brackets are ordered and the last is unbounded, so every
/// non-negative income maps to exactly one bracket. An income that
/// falls between one bracket's `max` and the next bracket's
/// `formula_min` (the schedule is written with whole-dollar bounds)
/// resolves to the higher bracket.
#[must_use]
pub fn bracket_for(annual_income: Decimal) -> &'static TaxBracket {
    TAX_BRACKETS
        .iter()
        .find(|bracket| annual_income <= bracket.max)
        .unwrap_or(&TAX_BRACKETS[TAX_BRACKETS.len() - 1])
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_bracket_lookup_at_bounds() {
        assert_eq!(bracket_for(dec!(0)).rate, dec!(0));
        assert_eq!(bracket_for(dec!(18200)).rate, dec!(0));
        assert_eq!(bracket_for(dec!(18201)).rate, dec!(0.19));
        assert_eq!(bracket_for(dec!(45000)).rate, dec!(0.19));
        assert_eq!(bracket_for(dec!(45001)).rate, dec!(0.325));
        assert_eq!(bracket_for(dec!(120000)).rate, dec!(0.325));
        assert_eq!(bracket_for(dec!(180001)).rate, dec!(0.45));
        assert_eq!(bracket_for(dec!(1000000)).rate, dec!(0.45));
    }

    #[test]
    fn test_fractional_income_between_whole_dollar_bounds() {
        // 45000.50 sits between the 19% bracket max and the 32.5%
        // formula min; it resolves to the 32.5% bracket.
        assert_eq!(bracket_for(dec!(45000.50)).rate, dec!(0.325));
    }
}
