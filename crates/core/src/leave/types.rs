//! Leave domain types.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use payrun_shared::types::{EmployeeId, LeaveTransactionId, PayrollRunId};

/// Category of leave being accrued or taken.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeaveCategory {
    /// Annual (recreation) leave.
    Annual,
    /// Sick leave.
    Sick,
    /// Personal/carer's leave.
    Personal,
    /// Long service leave.
    LongService,
}

impl LeaveCategory {
    /// Returns the string representation of the category.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Annual => "annual",
            Self::Sick => "sick",
            Self::Personal => "personal",
            Self::LongService => "long_service",
        }
    }

    /// Parses a category from a string.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "annual" => Some(Self::Annual),
            "sick" => Some(Self::Sick),
            "personal" => Some(Self::Personal),
            "long_service" => Some(Self::LongService),
            _ => None,
        }
    }
}

impl std::fmt::Display for LeaveCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Kind of movement recorded in the leave ledger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeaveTransactionKind {
    /// Periodic accrual credited by a pay run.
    Accrual,
    /// Leave taken by the employee.
    Taken,
    /// Manual balance adjustment.
    Adjustment,
    /// Balance paid out (e.g. on termination).
    Payout,
    /// Balance carried over between years.
    Carryover,
}

/// Current leave balances for an employee, in hours.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct LeaveBalances {
    /// Annual leave hours.
    pub annual_hours: Decimal,
    /// Sick leave hours.
    pub sick_hours: Decimal,
    /// Personal/carer's leave hours.
    pub personal_hours: Decimal,
    /// Long service leave hours.
    pub long_service_hours: Decimal,
}

impl LeaveBalances {
    /// Returns the balance for a category.
    #[must_use]
    pub fn balance(&self, category: LeaveCategory) -> Decimal {
        match category {
            LeaveCategory::Annual => self.annual_hours,
            LeaveCategory::Sick => self.sick_hours,
            LeaveCategory::Personal => self.personal_hours,
            LeaveCategory::LongService => self.long_service_hours,
        }
    }
}

/// An immutable leave ledger entry.
///
/// `balance_after` always equals the previous balance plus
/// `hours_delta`; ledger entries are never mutated once written.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaveTransaction {
    /// Unique identifier.
    pub id: LeaveTransactionId,
    /// Employee this movement belongs to.
    pub employee_id: EmployeeId,
    /// Kind of movement.
    pub kind: LeaveTransactionKind,
    /// Leave category affected.
    pub category: LeaveCategory,
    /// Signed hours delta.
    pub hours_delta: Decimal,
    /// Balance after applying the delta.
    pub balance_after: Decimal,
    /// Pay run that produced this movement, when applicable.
    pub payroll_run_id: Option<PayrollRunId>,
    /// Free-form reference.
    pub reference: Option<String>,
    /// When the movement was recorded.
    pub created_at: DateTime<Utc>,
}
