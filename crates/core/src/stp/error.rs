//! STP generation error types.

use thiserror::Error;

/// Errors that can occur during STP report generation.
///
/// These are precondition failures: the caller must complete the
/// missing data before a report can be produced. Rule violations found
/// after generation are collected by the validator instead and never
/// raised as errors.
#[derive(Debug, Error)]
pub enum StpError {
    /// Organisation has no ABN on file.
    #[error("Organisation ABN is required for STP reporting; complete organisation settings")]
    MissingAbn,

    /// Organisation has no legal name on file.
    #[error("Organisation legal name is required for STP reporting; complete organisation settings")]
    MissingBusinessName,

    /// A reportable employee has no TFN on file.
    #[error("Employee {employee_name} has no TFN on file; add a TFN before reporting")]
    MissingTfn {
        /// Name of the employee missing a TFN.
        employee_name: String,
    },

    /// Every employee in the run was excluded from reporting.
    #[error("No reportable payees remain after exclusions; STP report cannot be produced")]
    NoReportablePayees,
}

impl StpError {
    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::MissingAbn => "STP_MISSING_ABN",
            Self::MissingBusinessName => "STP_MISSING_BUSINESS_NAME",
            Self::MissingTfn { .. } => "STP_MISSING_TFN",
            Self::NoReportablePayees => "STP_NO_REPORTABLE_PAYEES",
        }
    }
}

impl From<StpError> for payrun_shared::AppError {
    fn from(err: StpError) -> Self {
        Self::Precondition(err.to_string())
    }
}
