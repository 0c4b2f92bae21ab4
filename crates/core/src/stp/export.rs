//! STP export transforms.
//!
//! Pure string production; writing to a file or HTTP response is the
//! caller's concern. Validation must have happened upstream, none of
//! these transforms re-check the report.

use serde_json::json;

use payrun_shared::types::{format_currency, format_hours_1dp};

use super::types::StpReport;

/// Quotes a CSV text field, doubling any embedded quotes.
fn csv_quote(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}

/// Serializes a report to the detailed per-payee CSV.
///
/// One row per payee; currency to 2 decimal places, leave hours to 1,
/// text fields quoted.
#[must_use]
pub fn to_detail_csv(report: &StpReport) -> String {
    let mut out = String::from(
        "tfn,given_name,family_name,employment_start_date,employment_end_date,\
         employment_basis,tax_treatment,payment_date,gross_payment,payg_withheld,\
         super_contribution,ytd_gross,ytd_payg,ytd_super,annual_leave_hours,sick_leave_hours\n",
    );

    for payee in &report.payees {
        let end_date = payee
            .end_date
            .map(|d| d.to_string())
            .unwrap_or_default();
        out.push_str(&format!(
            "{},{},{},{},{},{},{},{},{},{},{},{},{},{},{},{}\n",
            csv_quote(&payee.tfn),
            csv_quote(&payee.given_name),
            csv_quote(&payee.family_name),
            payee.start_date,
            end_date,
            csv_quote(&payee.employment_basis),
            csv_quote(&payee.tax_treatment),
            report.pay_date,
            format_currency(payee.gross_payment),
            format_currency(payee.payg_withheld),
            format_currency(payee.super_contribution),
            format_currency(payee.ytd_gross),
            format_currency(payee.ytd_payg),
            format_currency(payee.ytd_super),
            format_hours_1dp(payee.annual_leave_hours),
            format_hours_1dp(payee.sick_leave_hours),
        ));
    }

    out
}

/// Serializes the full report structure to JSON.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn to_json(report: &StpReport) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(report)
}

/// Reshapes the report into the nested, API-oriented payload schema.
///
/// Deterministic transform of the same report data as [`to_json`],
/// shaped as reportHeader/payer/payees/totals with camelCase keys and
/// fixed-precision amount strings.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn to_ato_payload_json(report: &StpReport) -> Result<String, serde_json::Error> {
    let payees: Vec<serde_json::Value> = report
        .payees
        .iter()
        .map(|p| {
            json!({
                "tfn": p.tfn,
                "givenName": p.given_name,
                "familyName": p.family_name,
                "employmentBasis": p.employment_basis,
                "taxTreatment": p.tax_treatment,
                "employmentStartDate": p.start_date.to_string(),
                "employmentEndDate": p.end_date.map(|d| d.to_string()),
                "grossPayment": format_currency(p.gross_payment),
                "paygWithheld": format_currency(p.payg_withheld),
                "superContribution": format_currency(p.super_contribution),
                "ytd": {
                    "gross": format_currency(p.ytd_gross),
                    "payg": format_currency(p.ytd_payg),
                    "super": format_currency(p.ytd_super),
                },
            })
        })
        .collect();

    let payload = json!({
        "reportHeader": {
            "reportId": report.id.to_string(),
            "payrollRunId": report.payroll_run_id.to_string(),
            "financialYear": report.financial_year,
            "periodStart": report.period_start.to_string(),
            "periodEnd": report.period_end.to_string(),
            "paymentDate": report.pay_date.to_string(),
            "generatedAt": report.generated_at.to_rfc3339(),
        },
        "payer": {
            "abn": report.payer.abn,
            "businessName": report.payer.business_name,
            "address": {
                "line1": report.payer.address.line1,
                "suburb": report.payer.address.suburb,
                "state": report.payer.address.state,
                "postcode": report.payer.address.postcode,
            },
            "contactEmail": report.payer.contact_email,
        },
        "payees": payees,
        "totals": {
            "gross": format_currency(report.totals.gross),
            "payg": format_currency(report.totals.payg),
            "super": format_currency(report.totals.super_contribution),
        },
    });

    serde_json::to_string_pretty(&payload)
}

/// Produces the human-readable summary CSV: report metadata, payer
/// details, grand totals, then a flat per-employee table. Not
/// row-for-row reconcilable with the detailed export.
#[must_use]
pub fn to_summary_csv(report: &StpReport) -> String {
    let mut out = String::new();

    out.push_str("STP Report Summary\n");
    out.push_str(&format!("Financial Year,{}\n", report.financial_year));
    out.push_str(&format!("Pay Date,{}\n", report.pay_date));
    out.push_str(&format!(
        "Pay Period,{} to {}\n",
        report.period_start, report.period_end
    ));
    out.push('\n');

    out.push_str("Payer\n");
    out.push_str(&format!(
        "Business Name,{}\n",
        csv_quote(&report.payer.business_name)
    ));
    out.push_str(&format!("ABN,{}\n", report.payer.abn));
    out.push('\n');

    out.push_str("Totals\n");
    out.push_str(&format!(
        "Gross,{}\n",
        format_currency(report.totals.gross)
    ));
    out.push_str(&format!("PAYG,{}\n", format_currency(report.totals.payg)));
    out.push_str(&format!(
        "Super,{}\n",
        format_currency(report.totals.super_contribution)
    ));
    out.push('\n');

    out.push_str("Employee,Basis,Gross,PAYG,Super,Net\n");
    for payee in &report.payees {
        out.push_str(&format!(
            "{},{},{},{},{},{}\n",
            csv_quote(&format!("{} {}", payee.given_name, payee.family_name)),
            payee.employment_basis,
            format_currency(payee.gross_payment),
            format_currency(payee.payg_withheld),
            format_currency(payee.super_contribution),
            format_currency(payee.gross_payment - payee.payg_withheld),
        ));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_csv_quote_doubles_embedded_quotes() {
        assert_eq!(csv_quote("plain"), "\"plain\"");
        assert_eq!(csv_quote("O\"Brien"), "\"O\"\"Brien\"");
    }
}
