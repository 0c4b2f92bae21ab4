//! Single Touch Payroll reporting.
//!
//! This module provides pure business logic for STP compliance
//! reporting on a finalized pay run:
//! - Report generation (payer + payee records + totals)
//! - Structural and business-rule validation
//! - CSV and JSON export transforms

pub mod error;
pub mod export;
pub mod generator;
pub mod types;
pub mod validator;


pub use error::StpError;
pub use generator::{RunItem, generate_stp_report};
pub use types::*;
pub use validator::{StpValidation, validate_stp_report};
