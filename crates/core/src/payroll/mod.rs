//! Per-employee payroll calculation.
//!
//! Combines the tax engine and superannuation calculator into one
//! gross/tax/super/net result for a pay period, with the contractor
//! branch applied before either.

pub mod service;
pub mod types;

#[cfg(test)]
mod service_props;

pub use service::PayrollService;
pub use types::{PayrollBreakdown, PayrollInput};
