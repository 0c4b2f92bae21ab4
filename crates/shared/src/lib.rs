//! Shared types, errors, and configuration for Payrun.
//!
//! This crate provides common infrastructure used across all other crates:
//! - Currency rounding helpers with decimal precision
//! - Typed IDs for type-safe entity references
//! - Application-wide error types
//! - Configuration management
//! - Payslip email delivery

pub mod config;
pub mod email;
pub mod error;
pub mod types;

pub use config::AppConfig;
pub use error::{AppError, AppResult};
