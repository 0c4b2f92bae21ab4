//! STP report generation.

use chrono::Utc;
use rust_decimal::Decimal;

use payrun_shared::types::{EmployeeId, StpReportId};

use crate::employee::{Employee, EmploymentType, TaxScaleType};
use crate::fiscal::fy_label;
use crate::leave::LeaveCategory;
use crate::organisation::Organisation;
use crate::payrun::{PayrollItem, PayrollRun};
use crate::ytd::YtdTotals;

use super::error::StpError;
use super::types::{StpPayee, StpPayer, StpReport, StpTotals};

/// One pay run item joined to its employee record.
///
/// The join is resolved at the data-fetch boundary; the generator
/// never disambiguates store shapes itself.
#[derive(Debug, Clone)]
pub struct RunItem {
    /// The calculated payroll item.
    pub item: PayrollItem,
    /// The employee the item pays.
    pub employee: Employee,
}

/// Splits a full name into (given, family).
///
/// First whitespace token is the given name; remaining tokens joined
/// form the family name. A single-token name is used as both given and
/// family name. This mirrors how names were captured upstream and has
/// a known ambiguity for mononyms; do not change without product
/// confirmation.
fn split_name(full_name: &str) -> (String, String) {
    let mut tokens = full_name.split_whitespace();
    let given = tokens.next().unwrap_or_default().to_string();
    let family: Vec<&str> = tokens.collect();
    if family.is_empty() {
        (given.clone(), given)
    } else {
        (given, family.join(" "))
    }
}

/// Maps employment type to the reporting basis code.
///
/// Contractors are reported as casual (`C`) rather than labour hire
/// (`L`); an intentional simplification.
fn basis_code(employment_type: EmploymentType) -> &'static str {
    match employment_type {
        EmploymentType::FullTime => "F",
        EmploymentType::PartTime => "P",
        EmploymentType::Casual | EmploymentType::Contractor => "C",
    }
}

/// Maps an employee's tax attributes to the treatment code.
fn tax_treatment_code(employee: &Employee) -> &'static str {
    if employee.tfn.as_deref().is_none_or(str::is_empty) {
        return "N";
    }
    match employee.tax_scale {
        TaxScaleType::ForeignResident => "F",
        TaxScaleType::WorkingHolidayMaker => "H",
        TaxScaleType::Regular => "R",
    }
}

/// Returns true if the employee is invoiced rather than STP-reported:
/// a contractor with their own ABN on file.
fn is_excluded(employee: &Employee) -> bool {
    employee.employment_type == EmploymentType::Contractor
        && employee.abn.as_deref().is_some_and(|abn| !abn.is_empty())
}

/// Generates an STP report from a finalized pay run.
///
/// Prior year-to-date figures are fetched per employee through
/// `prior_ytd`; reported YTD figures are those plus the current
/// payment, so the report is inclusive of the payment being reported.
///
/// # Errors
///
/// Returns a precondition error when the organisation lacks an ABN or
/// legal name, when a reportable employee has no TFN, or when every
/// employee in the run is excluded from reporting.
pub fn generate_stp_report<F>(
    run: &PayrollRun,
    items: &[RunItem],
    organisation: &Organisation,
    prior_ytd: F,
) -> Result<StpReport, StpError>
where
    F: Fn(EmployeeId) -> YtdTotals,
{
    if organisation.abn.trim().is_empty() {
        return Err(StpError::MissingAbn);
    }
    if organisation.legal_name.trim().is_empty() {
        return Err(StpError::MissingBusinessName);
    }

    let mut payees = Vec::with_capacity(items.len());
    for RunItem { item, employee } in items {
        if is_excluded(employee) {
            continue;
        }

        let tfn = employee.tfn.clone().unwrap_or_default();
        if tfn.trim().is_empty() {
            return Err(StpError::MissingTfn {
                employee_name: employee.full_name.clone(),
            });
        }

        let (given_name, family_name) = split_name(&employee.full_name);
        let ytd = prior_ytd(employee.id);

        payees.push(StpPayee {
            employee_id: employee.id,
            tfn,
            given_name,
            family_name,
            employment_basis: basis_code(employee.employment_type).to_string(),
            tax_treatment: tax_treatment_code(employee).to_string(),
            start_date: employee.start_date,
            end_date: employee.end_date,
            gross_payment: item.gross,
            payg_withheld: item.tax,
            super_contribution: item.super_contribution,
            ytd_gross: ytd.gross + item.gross,
            ytd_payg: ytd.tax + item.tax,
            ytd_super: ytd.super_contribution + item.super_contribution,
            annual_leave_hours: employee.leave_balances.balance(LeaveCategory::Annual),
            sick_leave_hours: employee.leave_balances.balance(LeaveCategory::Sick),
        });
    }

    if payees.is_empty() {
        return Err(StpError::NoReportablePayees);
    }

    let totals = StpTotals {
        gross: payees.iter().map(|p| p.gross_payment).sum::<Decimal>(),
        payg: payees.iter().map(|p| p.payg_withheld).sum::<Decimal>(),
        super_contribution: payees.iter().map(|p| p.super_contribution).sum::<Decimal>(),
    };

    Ok(StpReport {
        id: StpReportId::new(),
        payroll_run_id: run.id,
        financial_year: fy_label(run.pay_date),
        period_start: run.period_start,
        period_end: run.period_end,
        pay_date: run.pay_date,
        payer: StpPayer {
            abn: organisation.abn.clone(),
            business_name: organisation.legal_name.clone(),
            address: organisation.address.clone(),
            contact_email: organisation.contact_email.clone(),
        },
        payees,
        totals,
        generated_at: Utc::now(),
    })
}
