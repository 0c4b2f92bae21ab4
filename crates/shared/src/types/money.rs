//! Currency and hour rounding helpers.
//!
//! CRITICAL: Never use floating-point for money calculations.
//! All amounts are `rust_decimal::Decimal`; rounding uses banker's
//! rounding (round half to even) to minimize cumulative errors, and is
//! applied at the final step of a computation only.

use rust_decimal::{Decimal, RoundingStrategy};

/// Decimal places used for currency amounts.
pub const CURRENCY_DP: u32 = 2;

/// Decimal places used for leave hour balances.
pub const HOURS_DP: u32 = 2;

/// Rounds a currency amount to 2 decimal places.
#[must_use]
pub fn round_currency(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(CURRENCY_DP, RoundingStrategy::MidpointNearestEven)
}

/// Rounds an hour quantity to 2 decimal places.
#[must_use]
pub fn round_hours(hours: Decimal) -> Decimal {
    hours.round_dp_with_strategy(HOURS_DP, RoundingStrategy::MidpointNearestEven)
}

/// Formats a currency amount with exactly 2 decimal places (no symbol).
#[must_use]
pub fn format_currency(amount: Decimal) -> String {
    format!("{:.2}", round_currency(amount))
}

/// Formats an hour quantity with exactly 1 decimal place, as used in
/// CSV export columns.
#[must_use]
pub fn format_hours_1dp(hours: Decimal) -> String {
    format!(
        "{:.1}",
        hours.round_dp_with_strategy(1, RoundingStrategy::MidpointNearestEven)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_round_currency() {
        assert_eq!(round_currency(dec!(668.3336)), dec!(668.33));
        assert_eq!(round_currency(dec!(2331.665)), dec!(2331.66));
    }

    #[test]
    fn test_bankers_rounding() {
        // Round half to even: 2.5 cents -> 2, 3.5 cents -> 4
        assert_eq!(round_currency(dec!(0.025)), dec!(0.02));
        assert_eq!(round_currency(dec!(0.035)), dec!(0.04));
    }

    #[test]
    fn test_round_hours() {
        // 80 / 26 = 3.0769... -> 3.08
        assert_eq!(round_hours(dec!(80) / dec!(26)), dec!(3.08));
    }

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(dec!(345)), "345.00");
        assert_eq!(format_currency(dec!(668.3336)), "668.33");
    }

    #[test]
    fn test_format_hours_1dp() {
        assert_eq!(format_hours_1dp(dec!(76)), "76.0");
        assert_eq!(format_hours_1dp(dec!(3.08)), "3.1");
    }
}
