//! STP report types.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use payrun_shared::types::{EmployeeId, PayrollRunId, StpReportId};

use crate::organisation::Address;

/// Employment basis codes accepted by the reporting schema.
///
/// Contractors are reported under `C` (casual) rather than `L` (labour
/// hire); see [`super::generator`].
pub const VALID_BASIS_CODES: [&str; 5] = ["F", "P", "C", "L", "D"];

/// Payer (employer) details on an STP report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StpPayer {
    /// Australian Business Number.
    pub abn: String,
    /// Legal business name.
    pub business_name: String,
    /// Registered address.
    pub address: Address,
    /// Contact email, when on file.
    pub contact_email: Option<String>,
}

/// One payee (employee) record on an STP report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StpPayee {
    /// Employee this record reports.
    pub employee_id: EmployeeId,
    /// Tax File Number.
    pub tfn: String,
    /// Given name (first token of the full name).
    pub given_name: String,
    /// Family name (remaining tokens, or the single token repeated).
    pub family_name: String,
    /// Employment basis code (F, P, C, L, or D).
    pub employment_basis: String,
    /// Tax treatment code (R, F, H, or N).
    pub tax_treatment: String,
    /// Employment start date.
    pub start_date: NaiveDate,
    /// Employment end date, when terminated.
    pub end_date: Option<NaiveDate>,
    /// Gross payment for this pay period.
    pub gross_payment: Decimal,
    /// PAYG withheld for this pay period.
    pub payg_withheld: Decimal,
    /// Employer super contribution for this pay period.
    pub super_contribution: Decimal,
    /// Financial-year-to-date gross, inclusive of this payment.
    pub ytd_gross: Decimal,
    /// Financial-year-to-date PAYG, inclusive of this payment.
    pub ytd_payg: Decimal,
    /// Financial-year-to-date super, inclusive of this payment.
    pub ytd_super: Decimal,
    /// Annual leave balance in hours at generation time.
    pub annual_leave_hours: Decimal,
    /// Sick leave balance in hours at generation time.
    pub sick_leave_hours: Decimal,
}

/// Report-level totals summed across all payees.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StpTotals {
    /// Total gross payments.
    pub gross: Decimal,
    /// Total PAYG withheld.
    pub payg: Decimal,
    /// Total super contributions.
    pub super_contribution: Decimal,
}

/// A generated STP report for one pay run.
///
/// Reports are never mutated in place; regenerating produces a new
/// report with a fresh id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StpReport {
    /// Unique report identifier.
    pub id: StpReportId,
    /// The pay run this report covers.
    pub payroll_run_id: PayrollRunId,
    /// Financial year label, e.g. `2025-26`.
    pub financial_year: String,
    /// First day of the pay period.
    pub period_start: NaiveDate,
    /// Last day of the pay period.
    pub period_end: NaiveDate,
    /// Date the payment was made.
    pub pay_date: NaiveDate,
    /// Employer details.
    pub payer: StpPayer,
    /// Per-employee records.
    pub payees: Vec<StpPayee>,
    /// Summed totals over the payees.
    pub totals: StpTotals,
    /// When the report was generated.
    pub generated_at: DateTime<Utc>,
}
