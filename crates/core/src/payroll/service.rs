//! Payroll calculation orchestration.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use payrun_shared::types::round_currency;

use crate::constants::AVERAGE_WEEKS_PER_MONTH;
use crate::employee::{Compensation, Employee, EmploymentType, PayFrequency};
use crate::superann::calculate_super;
use crate::tax::calculate_period_tax;

use super::types::{PayrollBreakdown, PayrollInput};

/// Payroll calculation service.
///
/// Pure business logic with no store dependencies: the caller supplies
/// already-fetched employee data and persists the results.
pub struct PayrollService;

impl PayrollService {
    /// Derives gross pay for one pay period from an employee's
    /// compensation basis.
    ///
    /// Hourly employees are paid for their contracted weekly hours
    /// (doubled for fortnights, multiplied by the average 4.33 weeks
    /// for months). Salaried employees receive the annual salary
    /// divided by the period count.
    #[must_use]
    pub fn gross_for_period(employee: &Employee, frequency: PayFrequency) -> Decimal {
        match employee.compensation {
            Compensation::Hourly(rate) => {
                let period_hours = match frequency {
                    PayFrequency::Weekly => employee.contracted_week_hours(),
                    PayFrequency::Fortnightly => employee.contracted_week_hours() * dec!(2),
                    PayFrequency::Monthly => {
                        employee.contracted_week_hours() * AVERAGE_WEEKS_PER_MONTH
                    }
                };
                round_currency(rate * period_hours)
            }
            Compensation::Salary(annual) => round_currency(annual / frequency.periods_per_year()),
        }
    }

    /// Calculates one employee's pay period result.
    ///
    /// Contractors self-manage tax and super obligations, so the
    /// contractor branch returns tax = super = 0 and net = gross. This
    /// is deliberate business policy, not an oversight.
    ///
    /// There are no error conditions; zero gross yields an all-zero
    /// result, and out-of-domain inputs (negative pay) produce
    /// mathematically derived output the caller must guard against.
    #[must_use]
    pub fn calculate(input: &PayrollInput) -> PayrollBreakdown {
        let gross = input.gross_pay;

        if input.employment_type == EmploymentType::Contractor {
            return PayrollBreakdown {
                gross,
                tax: Decimal::ZERO,
                super_contribution: Decimal::ZERO,
                net: gross,
                total_cost: gross,
            };
        }

        let tax = calculate_period_tax(gross, input.pay_frequency, input.has_tax_free_threshold);
        let super_contribution = calculate_super(gross, input.super_rate_percent);

        PayrollBreakdown {
            gross,
            tax,
            super_contribution,
            net: gross - tax,
            total_cost: gross + super_contribution,
        }
    }
}
