//! Pay run lifecycle and item totals.
//!
//! The pay run state machine is driven externally; this module defines
//! the statuses, the valid forward transitions, and the computations
//! invoked at each transition (aggregate totals, finalization
//! validation).

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use payrun_shared::types::{EmployeeId, OrganisationId, PayrollItemId, PayrollRunId};

use crate::employee::PayFrequency;

/// Pay run lifecycle status.
///
/// Runs progress draft → employees-selected → reviewed → finalized →
/// completed. Finalized and completed runs are immutable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PayRunStatus {
    /// Run is being drafted.
    Draft,
    /// Employees have been selected into the run.
    EmployeesSelected,
    /// Calculations have been reviewed.
    Reviewed,
    /// Run is finalized; items and totals are immutable.
    Finalized,
    /// Payments delivered and reporting lodged.
    Completed,
}

impl PayRunStatus {
    /// Returns the string representation of the status.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::EmployeesSelected => "employees_selected",
            Self::Reviewed => "reviewed",
            Self::Finalized => "finalized",
            Self::Completed => "completed",
        }
    }

    /// Parses a status from a string.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "draft" => Some(Self::Draft),
            "employees_selected" => Some(Self::EmployeesSelected),
            "reviewed" => Some(Self::Reviewed),
            "finalized" => Some(Self::Finalized),
            "completed" => Some(Self::Completed),
            _ => None,
        }
    }

    /// Returns true if the run can still be modified.
    #[must_use]
    pub fn is_editable(&self) -> bool {
        matches!(self, Self::Draft | Self::EmployeesSelected | Self::Reviewed)
    }

    /// Returns true if the run is immutable.
    #[must_use]
    pub fn is_immutable(&self) -> bool {
        matches!(self, Self::Finalized | Self::Completed)
    }

    /// Returns true if `next` is a valid forward transition.
    #[must_use]
    pub fn can_transition_to(&self, next: Self) -> bool {
        matches!(
            (self, next),
            (Self::Draft, Self::EmployeesSelected)
                | (Self::EmployeesSelected, Self::Reviewed)
                | (Self::Reviewed, Self::Finalized)
                | (Self::Finalized, Self::Completed)
        )
    }
}

impl std::fmt::Display for PayRunStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Aggregate totals over a run's payroll items.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunTotals {
    /// Sum of gross pay.
    pub gross: Decimal,
    /// Sum of PAYG withholding.
    pub tax: Decimal,
    /// Sum of super contributions.
    pub super_contribution: Decimal,
    /// Sum of net pay.
    pub net: Decimal,
}

/// A payroll run covering one pay period.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayrollRun {
    /// Unique identifier.
    pub id: PayrollRunId,
    /// Organisation this run belongs to.
    pub organisation_id: OrganisationId,
    /// Pay cycle frequency.
    pub frequency: PayFrequency,
    /// First day of the pay period.
    pub period_start: NaiveDate,
    /// Last day of the pay period.
    pub period_end: NaiveDate,
    /// Date the payment is made.
    pub pay_date: NaiveDate,
    /// Lifecycle status.
    pub status: PayRunStatus,
    /// Aggregate totals over the run's items.
    pub totals: RunTotals,
}

impl PayrollRun {
    /// Returns true if the pay date meets the recommendation that
    /// payment falls on or after the period end. Advisory only, not
    /// enforced.
    #[must_use]
    pub fn has_recommended_pay_date(&self) -> bool {
        self.pay_date >= self.period_end
    }
}

/// One employee's calculated result within a payroll run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayrollItem {
    /// Unique identifier.
    pub id: PayrollItemId,
    /// The run this item belongs to.
    pub payroll_run_id: PayrollRunId,
    /// The employee this item pays.
    pub employee_id: EmployeeId,
    /// Gross pay.
    pub gross: Decimal,
    /// PAYG withholding.
    pub tax: Decimal,
    /// Employer super contribution.
    pub super_contribution: Decimal,
    /// Net pay (gross minus tax).
    pub net: Decimal,
    /// When the item was calculated.
    pub created_at: DateTime<Utc>,
}

/// Errors that can occur when finalizing a payroll run.
#[derive(Debug, Error)]
pub enum PayRunError {
    /// A run cannot be finalized without items.
    #[error("Payroll run has no items; select employees before finalizing")]
    EmptyRun,

    /// Period dates are inverted.
    #[error("Invalid pay period: start {start} is after end {end}")]
    InvalidPeriod {
        /// Period start date.
        start: NaiveDate,
        /// Period end date.
        end: NaiveDate,
    },

    /// Run totals disagree with the sum of its items.
    #[error("Run totals do not match item sums (gross {run_gross} vs {item_gross})")]
    TotalsMismatch {
        /// Gross recorded on the run.
        run_gross: Decimal,
        /// Gross summed over the items.
        item_gross: Decimal,
    },

    /// The current status does not permit finalization.
    #[error("Cannot finalize a run in status {0}")]
    NotFinalizable(PayRunStatus),
}

impl PayRunError {
    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::EmptyRun => "EMPTY_RUN",
            Self::InvalidPeriod { .. } => "INVALID_PERIOD",
            Self::TotalsMismatch { .. } => "TOTALS_MISMATCH",
            Self::NotFinalizable(_) => "NOT_FINALIZABLE",
        }
    }
}

impl From<PayRunError> for payrun_shared::AppError {
    fn from(err: PayRunError) -> Self {
        Self::BusinessRule(err.to_string())
    }
}

/// Sums payroll items into run totals.
#[must_use]
pub fn run_totals(items: &[PayrollItem]) -> RunTotals {
    RunTotals {
        gross: items.iter().map(|i| i.gross).sum(),
        tax: items.iter().map(|i| i.tax).sum(),
        super_contribution: items.iter().map(|i| i.super_contribution).sum(),
        net: items.iter().map(|i| i.net).sum(),
    }
}

/// Validates that a run may be finalized with the given items.
///
/// The caller must make the finalization atomic at the persistence
/// boundary: either all items are written and totals updated, or none.
///
/// # Errors
///
/// Returns an error if the run is empty, the period is inverted, the
/// status does not allow finalization, or the recorded totals disagree
/// with the item sums.
pub fn validate_finalize(run: &PayrollRun, items: &[PayrollItem]) -> Result<(), PayRunError> {
    if !run.status.is_editable() {
        return Err(PayRunError::NotFinalizable(run.status));
    }
    if items.is_empty() {
        return Err(PayRunError::EmptyRun);
    }
    if run.period_start > run.period_end {
        return Err(PayRunError::InvalidPeriod {
            start: run.period_start,
            end: run.period_end,
        });
    }

    let computed = run_totals(items);
    if computed.gross != run.totals.gross {
        return Err(PayRunError::TotalsMismatch {
            run_gross: run.totals.gross,
            item_gross: computed.gross,
        });
    }

    Ok(())
}
