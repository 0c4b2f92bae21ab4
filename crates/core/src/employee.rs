//! Employee domain types.
//!
//! An employee's compensation is either an annual salary or an hourly
//! rate, never both; the `Compensation` enum enforces this at the type
//! level. Records joined from the store are resolved into a single
//! strict `Employee` value before they reach any calculation.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use payrun_shared::types::{EmployeeId, OrganisationId};

use crate::constants::{DAYS_PER_WORK_WEEK, DEFAULT_HOURS_PER_DAY, STANDARD_WEEK_HOURS};
use crate::leave::LeaveBalances;

/// Employment classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmploymentType {
    /// Permanent full-time employee.
    FullTime,
    /// Permanent part-time employee.
    PartTime,
    /// Casual employee (loaded rate, no leave accrual).
    Casual,
    /// Contractor (self-manages tax and super).
    Contractor,
}

impl EmploymentType {
    /// Returns the string representation of the classification.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FullTime => "full_time",
            Self::PartTime => "part_time",
            Self::Casual => "casual",
            Self::Contractor => "contractor",
        }
    }

    /// Parses a classification from a string.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "full_time" => Some(Self::FullTime),
            "part_time" => Some(Self::PartTime),
            "casual" => Some(Self::Casual),
            "contractor" => Some(Self::Contractor),
            _ => None,
        }
    }

    /// Returns true if this classification accrues paid leave.
    #[must_use]
    pub fn accrues_leave(&self) -> bool {
        matches!(self, Self::FullTime | Self::PartTime)
    }
}

impl std::fmt::Display for EmploymentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Pay cycle frequency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PayFrequency {
    /// Paid every week (52 periods/year).
    Weekly,
    /// Paid every two weeks (26 periods/year).
    Fortnightly,
    /// Paid monthly (12 periods/year).
    Monthly,
}

impl PayFrequency {
    /// Number of pay periods per year for this frequency.
    #[must_use]
    pub const fn periods_per_year(&self) -> Decimal {
        match self {
            Self::Weekly => rust_decimal_macros::dec!(52),
            Self::Fortnightly => rust_decimal_macros::dec!(26),
            Self::Monthly => rust_decimal_macros::dec!(12),
        }
    }

    /// Returns the string representation of the frequency.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Weekly => "WEEKLY",
            Self::Fortnightly => "FORTNIGHTLY",
            Self::Monthly => "MONTHLY",
        }
    }

    /// Parses a frequency from a string.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_uppercase().as_str() {
            "WEEKLY" => Some(Self::Weekly),
            "FORTNIGHTLY" => Some(Self::Fortnightly),
            "MONTHLY" => Some(Self::Monthly),
            _ => None,
        }
    }
}

impl std::fmt::Display for PayFrequency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Withholding scale applied to an employee.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaxScaleType {
    /// Resident on the regular scale.
    Regular,
    /// Foreign resident for tax purposes.
    ForeignResident,
    /// Working holiday maker.
    WorkingHolidayMaker,
}

/// Compensation basis: exactly one of annual salary or hourly rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Compensation {
    /// Annual base salary.
    Salary(Decimal),
    /// Hourly rate.
    Hourly(Decimal),
}

/// An employee record, resolved at the data-fetch boundary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Employee {
    /// Unique identifier.
    pub id: EmployeeId,
    /// Organisation this employee belongs to.
    pub organisation_id: OrganisationId,
    /// Full legal name.
    pub full_name: String,
    /// Employment classification.
    pub employment_type: EmploymentType,
    /// Contracted hours per week, when known.
    pub hours_per_week: Option<Decimal>,
    /// Pay cycle frequency.
    pub pay_frequency: PayFrequency,
    /// Compensation basis (salary XOR hourly rate).
    pub compensation: Compensation,
    /// Tax File Number, when on file.
    pub tfn: Option<String>,
    /// ABN, when the worker invoices under their own ABN.
    pub abn: Option<String>,
    /// Whether the tax-free threshold is claimed.
    pub has_tax_free_threshold: bool,
    /// Whether a HELP/study debt applies.
    pub has_help_debt: bool,
    /// Withholding scale.
    pub tax_scale: TaxScaleType,
    /// ISO 3166 country code for the home country.
    pub country_code: Option<String>,
    /// Superannuation guarantee rate, as a percentage.
    pub super_rate_percent: Decimal,
    /// Current leave balances in hours.
    pub leave_balances: LeaveBalances,
    /// Employment start date.
    pub start_date: NaiveDate,
    /// Employment end date, when terminated.
    pub end_date: Option<NaiveDate>,
    /// Whether the employee is active.
    pub is_active: bool,
}

impl Employee {
    /// Contracted weekly hours, defaulting to the standard week.
    #[must_use]
    pub fn contracted_week_hours(&self) -> Decimal {
        self.hours_per_week.unwrap_or(STANDARD_WEEK_HOURS)
    }

    /// Hours per working day, derived from contracted weekly hours.
    #[must_use]
    pub fn hours_per_day(&self) -> Decimal {
        self.hours_per_week
            .map_or(DEFAULT_HOURS_PER_DAY, |hours| hours / DAYS_PER_WORK_WEEK)
    }

    /// Converts an hour quantity to working days for this employee.
    #[must_use]
    pub fn hours_to_days(&self, hours: Decimal) -> Decimal {
        hours / self.hours_per_day()
    }

    /// Converts a working-day quantity to hours for this employee.
    #[must_use]
    pub fn days_to_hours(&self, days: Decimal) -> Decimal {
        days * self.hours_per_day()
    }

    /// Whole years of service as of the given date.
    #[must_use]
    pub fn years_of_service(&self, as_of: NaiveDate) -> u32 {
        as_of.years_since(self.start_date).unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn make_employee(hours_per_week: Option<Decimal>) -> Employee {
        Employee {
            id: EmployeeId::new(),
            organisation_id: OrganisationId::new(),
            full_name: "Alex Chen".to_string(),
            employment_type: EmploymentType::FullTime,
            hours_per_week,
            pay_frequency: PayFrequency::Fortnightly,
            compensation: Compensation::Salary(dec!(78000)),
            tfn: Some("123456789".to_string()),
            abn: None,
            has_tax_free_threshold: true,
            has_help_debt: false,
            tax_scale: TaxScaleType::Regular,
            country_code: Some("AU".to_string()),
            super_rate_percent: dec!(11.5),
            leave_balances: LeaveBalances::default(),
            start_date: NaiveDate::from_ymd_opt(2020, 3, 2).unwrap(),
            end_date: None,
            is_active: true,
        }
    }

    #[test]
    fn test_employment_type_round_trip() {
        for et in [
            EmploymentType::FullTime,
            EmploymentType::PartTime,
            EmploymentType::Casual,
            EmploymentType::Contractor,
        ] {
            assert_eq!(EmploymentType::parse(et.as_str()), Some(et));
        }
        assert_eq!(EmploymentType::parse("intern"), None);
    }

    #[test]
    fn test_accrues_leave() {
        assert!(EmploymentType::FullTime.accrues_leave());
        assert!(EmploymentType::PartTime.accrues_leave());
        assert!(!EmploymentType::Casual.accrues_leave());
        assert!(!EmploymentType::Contractor.accrues_leave());
    }

    #[test]
    fn test_periods_per_year() {
        assert_eq!(PayFrequency::Weekly.periods_per_year(), dec!(52));
        assert_eq!(PayFrequency::Fortnightly.periods_per_year(), dec!(26));
        assert_eq!(PayFrequency::Monthly.periods_per_year(), dec!(12));
    }

    #[test]
    fn test_pay_frequency_parse() {
        assert_eq!(PayFrequency::parse("weekly"), Some(PayFrequency::Weekly));
        assert_eq!(
            PayFrequency::parse("FORTNIGHTLY"),
            Some(PayFrequency::Fortnightly)
        );
        assert_eq!(PayFrequency::parse("quarterly"), None);
    }

    #[test]
    fn test_hours_per_day_known_hours() {
        let employee = make_employee(Some(dec!(20)));
        assert_eq!(employee.hours_per_day(), dec!(4));
        assert_eq!(employee.hours_to_days(dec!(8)), dec!(2));
        assert_eq!(employee.days_to_hours(dec!(3)), dec!(12));
    }

    #[test]
    fn test_hours_per_day_unknown_hours_defaults() {
        let employee = make_employee(None);
        assert_eq!(employee.hours_per_day(), dec!(7.6));
        assert_eq!(employee.contracted_week_hours(), dec!(38));
    }

    #[test]
    fn test_years_of_service() {
        // Started 2020-03-02; anniversaries count only once reached.
        let employee = make_employee(Some(dec!(38)));
        let day_before_ninth_anniversary = NaiveDate::from_ymd_opt(2029, 3, 1).unwrap();
        let tenth_anniversary = NaiveDate::from_ymd_opt(2030, 3, 2).unwrap();
        assert_eq!(employee.years_of_service(day_before_ninth_anniversary), 8);
        assert_eq!(employee.years_of_service(tenth_anniversary), 10);
    }
}
