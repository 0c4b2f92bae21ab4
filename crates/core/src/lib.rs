//! Core payroll and compliance logic for Payrun.
//!
//! This crate contains pure business logic with ZERO web or database
//! dependencies. All domain types, calculation rules, and report
//! generation live here; record-store lookups are injected by the
//! caller as closures.
//!
//! # Modules
//!
//! - `tax` - PAYG withholding from marginal brackets
//! - `superann` - Superannuation guarantee contributions
//! - `leave` - Leave accrual, eligibility, and the leave ledger
//! - `payroll` - Per-employee pay calculation orchestration
//! - `ytd` - Financial-year-to-date aggregation
//! - `payrun` - Pay run lifecycle and item totals
//! - `stp` - Single Touch Payroll report generation, validation, export

pub mod constants;
pub mod employee;
pub mod fiscal;
pub mod leave;
pub mod organisation;
pub mod payroll;
pub mod payrun;
pub mod stp;
pub mod superann;
pub mod tax;
pub mod ytd;
