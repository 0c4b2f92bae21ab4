//! Financial-year-to-date aggregation.

use chrono::{DateTime, NaiveTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use payrun_shared::types::EmployeeId;

use crate::fiscal::fy_start;
use crate::payrun::PayrollItem;

/// Year-to-date totals for one employee.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct YtdTotals {
    /// YTD gross pay.
    pub gross: Decimal,
    /// YTD PAYG withholding.
    pub tax: Decimal,
    /// YTD employer super contributions.
    pub super_contribution: Decimal,
}

impl YtdTotals {
    /// All-zero totals.
    pub const ZERO: Self = Self {
        gross: Decimal::ZERO,
        tax: Decimal::ZERO,
        super_contribution: Decimal::ZERO,
    };
}

/// Sums an employee's payroll items from the start of the Australian
/// financial year containing `as_of` up to `as_of` itself.
///
/// Item history is fetched through `lookup` so the aggregation stays
/// free of store dependencies. A lookup failure degrades to zero
/// totals with a warning rather than aborting the caller's workflow;
/// STP generation tolerates missing history by design.
pub fn calculate_ytd<F, E>(employee_id: EmployeeId, as_of: DateTime<Utc>, lookup: F) -> YtdTotals
where
    F: Fn(EmployeeId) -> Result<Vec<PayrollItem>, E>,
    E: std::fmt::Display,
{
    let items = match lookup(employee_id) {
        Ok(items) => items,
        Err(err) => {
            tracing::warn!(
                employee_id = %employee_id,
                error = %err,
                "payroll item lookup failed; using zero YTD totals"
            );
            return YtdTotals::ZERO;
        }
    };

    let window_start = fy_start(as_of.date_naive())
        .and_time(NaiveTime::MIN)
        .and_utc();

    items
        .iter()
        .filter(|item| item.created_at >= window_start && item.created_at <= as_of)
        .fold(YtdTotals::ZERO, |acc, item| YtdTotals {
            gross: acc.gross + item.gross,
            tax: acc.tax + item.tax,
            super_contribution: acc.super_contribution + item.super_contribution,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rust_decimal_macros::dec;
    use std::convert::Infallible;

    use payrun_shared::types::{PayrollItemId, PayrollRunId};

    fn item_at(ts: DateTime<Utc>, gross: Decimal, tax: Decimal, sup: Decimal) -> PayrollItem {
        PayrollItem {
            id: PayrollItemId::new(),
            payroll_run_id: PayrollRunId::new(),
            employee_id: EmployeeId::new(),
            gross,
            tax,
            super_contribution: sup,
            net: gross - tax,
            created_at: ts,
        }
    }

    #[test]
    fn test_sums_items_within_financial_year() {
        let as_of = Utc.with_ymd_and_hms(2026, 1, 15, 10, 0, 0).unwrap();
        let items = vec![
            // Prior financial year, excluded.
            item_at(
                Utc.with_ymd_and_hms(2025, 6, 20, 0, 0, 0).unwrap(),
                dec!(3000),
                dec!(668.33),
                dec!(345),
            ),
            // In window.
            item_at(
                Utc.with_ymd_and_hms(2025, 7, 14, 0, 0, 0).unwrap(),
                dec!(3000),
                dec!(668.33),
                dec!(345),
            ),
            item_at(
                Utc.with_ymd_and_hms(2025, 12, 1, 0, 0, 0).unwrap(),
                dec!(3000),
                dec!(668.33),
                dec!(345),
            ),
            // After as_of, excluded.
            item_at(
                Utc.with_ymd_and_hms(2026, 2, 1, 0, 0, 0).unwrap(),
                dec!(3000),
                dec!(668.33),
                dec!(345),
            ),
        ];

        let totals = calculate_ytd(EmployeeId::new(), as_of, |_| {
            Ok::<_, Infallible>(items.clone())
        });
        assert_eq!(totals.gross, dec!(6000));
        assert_eq!(totals.tax, dec!(1336.66));
        assert_eq!(totals.super_contribution, dec!(690));
    }

    #[test]
    fn test_july_first_item_included() {
        let as_of = Utc.with_ymd_and_hms(2025, 7, 2, 0, 0, 0).unwrap();
        let items = vec![item_at(
            Utc.with_ymd_and_hms(2025, 7, 1, 0, 0, 0).unwrap(),
            dec!(1500),
            dec!(334.17),
            dec!(172.50),
        )];
        let totals = calculate_ytd(EmployeeId::new(), as_of, |_| {
            Ok::<_, Infallible>(items.clone())
        });
        assert_eq!(totals.gross, dec!(1500));
    }

    #[test]
    fn test_lookup_failure_degrades_to_zero() {
        let as_of = Utc.with_ymd_and_hms(2026, 1, 15, 0, 0, 0).unwrap();
        let totals = calculate_ytd(EmployeeId::new(), as_of, |_| {
            Err::<Vec<PayrollItem>, _>("store unavailable")
        });
        assert_eq!(totals, YtdTotals::ZERO);
    }

    #[test]
    fn test_no_items_is_zero() {
        let as_of = Utc.with_ymd_and_hms(2026, 1, 15, 0, 0, 0).unwrap();
        let totals = calculate_ytd(EmployeeId::new(), as_of, |_| Ok::<_, Infallible>(vec![]));
        assert_eq!(totals, YtdTotals::ZERO);
    }
}
