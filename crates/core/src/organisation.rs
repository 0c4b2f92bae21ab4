//! Organisation domain types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use payrun_shared::types::OrganisationId;

/// Registered address of an organisation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Address {
    /// Street address line.
    pub line1: String,
    /// Suburb or locality.
    pub suburb: String,
    /// State or territory code.
    pub state: String,
    /// Postcode.
    pub postcode: String,
}

impl Address {
    /// Returns true if every address component is present.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.line1.is_empty()
            && !self.suburb.is_empty()
            && !self.state.is_empty()
            && !self.postcode.is_empty()
    }
}

/// Banking details shown in the payslip footer.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BankDetails {
    /// Account holder name.
    pub account_name: String,
    /// BSB number.
    pub bsb: String,
    /// Account number.
    pub account_number: String,
}

/// An organisation (employer) record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Organisation {
    /// Unique identifier.
    pub id: OrganisationId,
    /// Legal business name.
    pub legal_name: String,
    /// Australian Business Number. Must be exactly 11 digits for STP.
    pub abn: String,
    /// Registered address.
    pub address: Address,
    /// Contact email address.
    pub contact_email: Option<String>,
    /// Contact phone number.
    pub contact_phone: Option<String>,
    /// Banking details for payslips.
    pub bank_details: BankDetails,
    /// Whether the organisation is registered for GST.
    pub gst_registered: bool,
    /// Default superannuation guarantee rate, as a percentage.
    pub default_super_rate_percent: Decimal,
}
