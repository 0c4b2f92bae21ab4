//! Per-pay-period leave accrual and eligibility.

use rust_decimal::Decimal;

use payrun_shared::types::round_hours;

use crate::constants::{
    FULL_TIME_ANNUAL_LEAVE_HOURS, FULL_TIME_SICK_LEAVE_HOURS, LONG_SERVICE_THRESHOLD_YEARS,
    LONG_SERVICE_WEEKS, STANDARD_WEEK_HOURS,
};
use crate::employee::{Employee, EmploymentType, PayFrequency};

use super::types::LeaveCategory;

/// Returns true if the employee may be credited with the given leave
/// category.
///
/// Casual and contractor employees never accrue leave; long service
/// leave additionally requires ten years of service. Consult this
/// before crediting any accrual.
#[must_use]
pub fn is_eligible_for_leave(
    employee: &Employee,
    category: LeaveCategory,
    years_of_service: u32,
) -> bool {
    if !employee.employment_type.accrues_leave() {
        return false;
    }
    match category {
        LeaveCategory::LongService => years_of_service >= LONG_SERVICE_THRESHOLD_YEARS,
        LeaveCategory::Annual | LeaveCategory::Sick | LeaveCategory::Personal => true,
    }
}

/// Annual entitlement in hours, pro-rated for part-time employees.
fn pro_rated_entitlement(employee: &Employee, full_time_hours: Decimal) -> Decimal {
    match employee.employment_type {
        EmploymentType::FullTime => full_time_hours,
        EmploymentType::PartTime => {
            full_time_hours * employee.contracted_week_hours() / STANDARD_WEEK_HOURS
        }
        EmploymentType::Casual | EmploymentType::Contractor => Decimal::ZERO,
    }
}

/// Annual leave accrued in one pay period, in hours.
#[must_use]
pub fn annual_leave_accrual(employee: &Employee, frequency: PayFrequency) -> Decimal {
    let entitlement = pro_rated_entitlement(employee, FULL_TIME_ANNUAL_LEAVE_HOURS);
    round_hours(entitlement / frequency.periods_per_year())
}

/// Sick/personal leave accrued in one pay period, in hours.
#[must_use]
pub fn sick_leave_accrual(employee: &Employee, frequency: PayFrequency) -> Decimal {
    let entitlement = pro_rated_entitlement(employee, FULL_TIME_SICK_LEAVE_HOURS);
    round_hours(entitlement / frequency.periods_per_year())
}

/// Long service leave entitlement in hours, zero until the ten-year
/// threshold is reached.
#[must_use]
pub fn long_service_leave_hours(employee: &Employee, years_of_service: u32) -> Decimal {
    if years_of_service < LONG_SERVICE_THRESHOLD_YEARS {
        return Decimal::ZERO;
    }
    round_hours(LONG_SERVICE_WEEKS * employee.contracted_week_hours())
}
