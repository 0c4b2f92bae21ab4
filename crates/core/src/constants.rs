//! Business constants for payroll, leave, and STP calculations.
//!
//! Single definition point for every default and statutory figure used
//! by the calculation modules. Nothing in this crate may repeat these
//! as ad hoc literals.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Standard full-time working week in hours.
pub const STANDARD_WEEK_HOURS: Decimal = dec!(38);

/// Working days per week, used to derive hours-per-day.
pub const DAYS_PER_WORK_WEEK: Decimal = dec!(5);

/// Default hours per working day when contracted hours are unknown.
pub const DEFAULT_HOURS_PER_DAY: Decimal = dec!(7.6);

/// Annual leave entitlement for a full-time employee: 4 weeks of a
/// 38-hour week.
pub const FULL_TIME_ANNUAL_LEAVE_HOURS: Decimal = dec!(152);

/// Sick/personal leave entitlement for a full-time employee: 10 days
/// of 7.6 hours.
pub const FULL_TIME_SICK_LEAVE_HOURS: Decimal = dec!(76);

/// Years of continuous service before long service leave vests.
pub const LONG_SERVICE_THRESHOLD_YEARS: u32 = 10;

/// Long service leave entitlement in weeks once vested.
pub const LONG_SERVICE_WEEKS: Decimal = dec!(8.67);

/// Default superannuation guarantee rate, as a percentage of gross.
pub const DEFAULT_SUPER_GUARANTEE_PERCENT: Decimal = dec!(11.5);

/// Average weeks per month, used for monthly hourly gross pay.
///
/// This deliberately approximates variable month lengths; it introduces
/// small period-to-period variance versus calendar-accurate month
/// computation.
pub const AVERAGE_WEEKS_PER_MONTH: Decimal = dec!(4.33);

/// Medicare levy rate applied to full annual income.
pub const MEDICARE_LEVY_RATE: Decimal = dec!(0.02);

/// Annual income above which the Medicare levy applies.
pub const MEDICARE_LEVY_THRESHOLD: Decimal = dec!(26000);

/// Flat withholding rate when the tax-free threshold is not claimed.
///
/// This is a simplification standing in for the real "no tax-free
/// threshold" withholding schedule, which is not a progressive
/// computation here.
pub const NO_TAX_FREE_THRESHOLD_RATE: Decimal = dec!(0.47);

/// Tolerance for report total reconciliation checks.
pub const RECONCILIATION_TOLERANCE: Decimal = dec!(0.01);

/// Required TFN length for STP reporting.
pub const TFN_LENGTH: usize = 9;

/// Required ABN length for STP reporting.
pub const ABN_LENGTH: usize = 11;

/// One marginal tax bracket.
///
/// `base` is the cumulative tax owed at `formula_min`; tax within the
/// bracket is `base + (income - formula_min) * rate`.
#[derive(Debug, Clone, Copy)]
pub struct TaxBracket {
    /// Income at which the bracket's marginal rate starts applying.
    pub formula_min: Decimal,
    /// Upper bound of the bracket (inclusive).
    pub max: Decimal,
    /// Cumulative base tax at the bracket's lower bound.
    pub base: Decimal,
    /// Marginal rate within the bracket.
    pub rate: Decimal,
}

/// Resident marginal tax brackets, ordered and range-complete from
/// zero. The final bracket is unbounded.
pub const TAX_BRACKETS: [TaxBracket; 5] = [
    TaxBracket {
        formula_min: dec!(0),
        max: dec!(18200),
        base: dec!(0),
        rate: dec!(0),
    },
    TaxBracket {
        formula_min: dec!(18200),
        max: dec!(45000),
        base: dec!(0),
        rate: dec!(0.19),
    },
    TaxBracket {
        formula_min: dec!(45001),
        max: dec!(120000),
        base: dec!(5092),
        rate: dec!(0.325),
    },
    TaxBracket {
        formula_min: dec!(120001),
        max: dec!(180000),
        base: dec!(29467),
        rate: dec!(0.37),
    },
    TaxBracket {
        formula_min: dec!(180001),
        max: Decimal::MAX,
        base: dec!(51667),
        rate: dec!(0.45),
    },
];
