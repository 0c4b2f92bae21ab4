//! Superannuation guarantee calculation.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use payrun_shared::types::round_currency;

/// Calculates the employer superannuation contribution on a gross
/// amount.
///
/// `rate_percent` is a percentage (e.g. 11.5). Negative gross produces
/// negative output; callers are responsible for validating inputs
/// upstream.
#[must_use]
pub fn calculate_super(gross_amount: Decimal, rate_percent: Decimal) -> Decimal {
    round_currency(gross_amount * rate_percent / dec!(100))
}
