//! STP report validation.
//!
//! Single-pass rule evaluation accumulating into two buckets: errors
//! block lodgement, warnings are advisory. The validator never raises;
//! every problem is collected and returned.
//!
//! Note the severity asymmetry: a gross-total reconciliation failure
//! is an error while a PAYG-total reconciliation failure only warns.
//! Confirmed behavior; do not align the two without product sign-off.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::constants::{ABN_LENGTH, RECONCILIATION_TOLERANCE, TFN_LENGTH};

use super::types::{StpReport, VALID_BASIS_CODES};

/// Result of validating an STP report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StpValidation {
    /// True iff no errors were found. Warnings never block validity.
    pub valid: bool,
    /// Blocking problems; lodgement must not proceed.
    pub errors: Vec<String>,
    /// Advisory problems; lodgement may proceed.
    pub warnings: Vec<String>,
}

/// Validates a generated STP report against structural and business
/// rules.
#[must_use]
pub fn validate_stp_report(report: &StpReport) -> StpValidation {
    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    if report.payer.abn.len() != ABN_LENGTH {
        errors.push(format!(
            "Payer ABN must be exactly {ABN_LENGTH} characters, got {}",
            report.payer.abn.len()
        ));
    }
    if report.payer.business_name.trim().is_empty() {
        errors.push("Payer business name must not be empty".to_string());
    }
    if !report.payer.address.is_complete() {
        warnings.push("Payer address is incomplete".to_string());
    }

    for payee in &report.payees {
        let who = format!("{} {}", payee.given_name, payee.family_name);

        if payee.tfn.len() != TFN_LENGTH {
            errors.push(format!(
                "Payee {who}: TFN must be exactly {TFN_LENGTH} characters, got {}",
                payee.tfn.len()
            ));
        }
        if payee.given_name.trim().is_empty() || payee.family_name.trim().is_empty() {
            errors.push(format!("Payee {who}: both given and family name are required"));
        }
        if payee.payg_withheld < Decimal::ZERO {
            errors.push(format!("Payee {who}: PAYG withheld must not be negative"));
        }
        if payee.super_contribution < Decimal::ZERO {
            errors.push(format!("Payee {who}: super contribution must not be negative"));
        }
        if payee.ytd_gross < payee.gross_payment {
            errors.push(format!(
                "Payee {who}: YTD gross {} is less than the current payment {}",
                payee.ytd_gross, payee.gross_payment
            ));
        }
        if !VALID_BASIS_CODES.contains(&payee.employment_basis.as_str()) {
            errors.push(format!(
                "Payee {who}: employment basis '{}' is not a recognised code",
                payee.employment_basis
            ));
        }
        if payee.gross_payment <= Decimal::ZERO {
            warnings.push(format!("Payee {who}: gross payment is not positive"));
        }
    }

    let payee_gross: Decimal = report.payees.iter().map(|p| p.gross_payment).sum();
    if (report.totals.gross - payee_gross).abs() > RECONCILIATION_TOLERANCE {
        errors.push(format!(
            "Report total gross {} does not reconcile with payee sum {}",
            report.totals.gross, payee_gross
        ));
    }

    let payee_payg: Decimal = report.payees.iter().map(|p| p.payg_withheld).sum();
    if (report.totals.payg - payee_payg).abs() > RECONCILIATION_TOLERANCE {
        warnings.push(format!(
            "Report total PAYG {} does not reconcile with payee sum {}",
            report.totals.payg, payee_payg
        ));
    }

    StpValidation {
        valid: errors.is_empty(),
        errors,
        warnings,
    }
}
