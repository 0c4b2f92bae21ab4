//! Payroll calculation types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::employee::{EmploymentType, PayFrequency};

/// Input for one employee's pay period calculation.
///
/// Gross pay derivation happens before this input is built; see
/// [`super::service::PayrollService::gross_for_period`].
#[derive(Debug, Clone)]
pub struct PayrollInput {
    /// Gross pay for the period.
    pub gross_pay: Decimal,
    /// Pay cycle frequency.
    pub pay_frequency: PayFrequency,
    /// Employment classification; contractors are treated specially.
    pub employment_type: EmploymentType,
    /// Whether the tax-free threshold is claimed.
    pub has_tax_free_threshold: bool,
    /// Superannuation guarantee rate, as a percentage.
    pub super_rate_percent: Decimal,
}

/// Result of one employee's pay period calculation.
///
/// `net = gross - tax`; super is computed independently and never
/// deducted from net. `total_cost = gross + super` is the employer's
/// cost.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollBreakdown {
    /// Gross pay for the period.
    pub gross: Decimal,
    /// PAYG withholding.
    pub tax: Decimal,
    /// Employer superannuation contribution.
    pub super_contribution: Decimal,
    /// Net (take-home) pay.
    pub net: Decimal,
    /// Total employer cost.
    pub total_cost: Decimal,
}

impl PayrollBreakdown {
    /// An all-zero breakdown.
    #[must_use]
    pub const fn zero() -> Self {
        Self {
            gross: Decimal::ZERO,
            tax: Decimal::ZERO,
            super_contribution: Decimal::ZERO,
            net: Decimal::ZERO,
            total_cost: Decimal::ZERO,
        }
    }
}
