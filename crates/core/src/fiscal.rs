//! Australian financial year helpers.
//!
//! The financial year runs July 1 to June 30. The window boundary
//! shifts exactly at the July 1 transition: a date in June belongs to
//! the year that started the previous July.

use chrono::{Datelike, NaiveDate};

/// Month number at which a new financial year starts.
const FY_START_MONTH: u32 = 7;

/// Returns the start date (July 1) of the financial year containing
/// the given date.
#[must_use]
pub fn fy_start(date: NaiveDate) -> NaiveDate {
    let year = if date.month() >= FY_START_MONTH {
        date.year()
    } else {
        date.year() - 1
    };
    // July 1 always exists
    NaiveDate::from_ymd_opt(year, FY_START_MONTH, 1).unwrap_or(date)
}

/// Returns the end date (June 30) of the financial year containing the
/// given date.
#[must_use]
pub fn fy_end(date: NaiveDate) -> NaiveDate {
    let start = fy_start(date);
    NaiveDate::from_ymd_opt(start.year() + 1, 6, 30).unwrap_or(date)
}

/// Financial year label for a date, e.g. `2025-26` for any date from
/// 2025-07-01 through 2026-06-30.
#[must_use]
pub fn fy_label(date: NaiveDate) -> String {
    let start_year = fy_start(date).year();
    format!("{}-{:02}", start_year, (start_year + 1) % 100)
}

/// Returns true if `date` falls in the same financial year as `as_of`.
#[must_use]
pub fn same_fy(as_of: NaiveDate, date: NaiveDate) -> bool {
    fy_start(as_of) == fy_start(date)
}
