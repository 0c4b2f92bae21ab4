//! Leave accrual, eligibility, and the leave ledger.
//!
//! This module implements:
//! - Leave categories and balances
//! - Immutable leave ledger transactions
//! - Per-pay-period accrual for annual and sick/personal leave
//! - Eligibility rules (casual/contractor exclusion, long service gate)

pub mod accrual;
pub mod ledger;
pub mod types;

pub use accrual::{
    annual_leave_accrual, is_eligible_for_leave, long_service_leave_hours, sick_leave_accrual,
};
pub use ledger::{LeaveError, apply_leave_delta, record_transaction};
pub use types::{LeaveBalances, LeaveCategory, LeaveTransaction, LeaveTransactionKind};
