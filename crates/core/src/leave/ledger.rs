//! Leave ledger rules.

use chrono::Utc;
use rust_decimal::Decimal;
use thiserror::Error;

use payrun_shared::types::{EmployeeId, LeaveTransactionId, PayrollRunId};

use super::types::{LeaveCategory, LeaveTransaction, LeaveTransactionKind};

/// Errors that can occur when applying leave ledger movements.
#[derive(Debug, Error)]
pub enum LeaveError {
    /// An adjustment would drive the balance negative.
    #[error(
        "Adjustment of {delta}h would leave balance negative (current balance {balance}h)"
    )]
    AdjustmentBelowZero {
        /// Balance before the adjustment.
        balance: Decimal,
        /// Requested hours delta.
        delta: Decimal,
    },
}

impl LeaveError {
    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::AdjustmentBelowZero { .. } => "LEAVE_ADJUSTMENT_BELOW_ZERO",
        }
    }
}

impl From<LeaveError> for payrun_shared::AppError {
    fn from(err: LeaveError) -> Self {
        Self::BusinessRule(err.to_string())
    }
}

/// Applies a signed hours delta to a balance.
///
/// `balance_after = balance + delta` for every kind of movement, but an
/// adjustment may not drive the balance negative. The rule is enforced
/// here at calculation time; nothing is persisted.
///
/// # Errors
///
/// Returns an error if an adjustment would produce a negative balance.
pub fn apply_leave_delta(
    balance: Decimal,
    kind: LeaveTransactionKind,
    delta: Decimal,
) -> Result<Decimal, LeaveError> {
    let balance_after = balance + delta;
    if kind == LeaveTransactionKind::Adjustment && balance_after < Decimal::ZERO {
        return Err(LeaveError::AdjustmentBelowZero { balance, delta });
    }
    Ok(balance_after)
}

/// Builds an immutable ledger entry for a movement, applying the delta
/// rules.
///
/// # Errors
///
/// Returns an error if the movement violates the ledger rules.
pub fn record_transaction(
    employee_id: EmployeeId,
    kind: LeaveTransactionKind,
    category: LeaveCategory,
    balance: Decimal,
    delta: Decimal,
    payroll_run_id: Option<PayrollRunId>,
    reference: Option<String>,
) -> Result<LeaveTransaction, LeaveError> {
    let balance_after = apply_leave_delta(balance, kind, delta)?;
    Ok(LeaveTransaction {
        id: LeaveTransactionId::new(),
        employee_id,
        kind,
        category,
        hours_delta: delta,
        balance_after,
        payroll_run_id,
        reference,
        created_at: Utc::now(),
    })
}
