//! Payslip email delivery.
//!
//! Uses `lettre` for SMTP transport. Batch delivery is strictly
//! sequential with a fixed inter-message delay, because the upstream
//! provider rate-limits bursts. Transient failures are retried a bounded
//! number of times with a linearly increasing delay; permanent failures
//! (invalid address, unbuildable message) skip retries for that
//! recipient only and never abort the batch.

use lettre::{
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
    message::{Attachment, MultiPart, header::ContentType},
    transport::smtp::authentication::Credentials,
};
use thiserror::Error;
use tracing::{info, warn};

use crate::config::EmailConfig;

/// Email delivery errors.
#[derive(Debug, Error)]
pub enum EmailError {
    /// Failed to build email message.
    #[error("Failed to build email: {0}")]
    Build(String),
    /// Failed to send email (transient; retried).
    #[error("Failed to send email: {0}")]
    Send(String),
    /// Invalid email address (permanent; never retried).
    #[error("Invalid email address: {0}")]
    InvalidAddress(String),
}

impl EmailError {
    /// Returns true if retrying cannot succeed for this error.
    #[must_use]
    pub const fn is_permanent(&self) -> bool {
        matches!(self, Self::Build(_) | Self::InvalidAddress(_))
    }
}

/// A rendered payslip ready for delivery.
#[derive(Debug, Clone)]
pub struct PayslipEmail {
    /// Recipient address.
    pub to_email: String,
    /// Recipient display name.
    pub to_name: String,
    /// Subject line.
    pub subject: String,
    /// HTML body.
    pub html_body: String,
    /// Plain-text body.
    pub text_body: String,
    /// Optional rendered payslip PDF.
    pub attachment: Option<PayslipAttachment>,
}

/// A PDF attachment for a payslip email.
#[derive(Debug, Clone)]
pub struct PayslipAttachment {
    /// Attachment filename (e.g. `payslip-2026-08-14.pdf`).
    pub filename: String,
    /// Raw PDF bytes.
    pub bytes: Vec<u8>,
}

/// Outcome of one recipient's delivery attempt(s).
#[derive(Debug, Clone)]
pub struct SendOutcome {
    /// Recipient address.
    pub to_email: String,
    /// Whether delivery ultimately succeeded.
    pub success: bool,
    /// Message ID assigned to the delivered email.
    pub message_id: Option<String>,
    /// Final error text when delivery failed.
    pub error: Option<String>,
    /// Number of delivery attempts made.
    pub attempts: u32,
    /// Whether the batch was cancelled before this recipient was tried.
    pub cancelled: bool,
}

/// Email service for payslip delivery.
#[derive(Clone)]
pub struct EmailService {
    config: EmailConfig,
}

impl EmailService {
    /// Creates a new email service.
    #[must_use]
    pub const fn new(config: EmailConfig) -> Self {
        Self { config }
    }

    /// Creates an SMTP transport.
    fn create_transport(&self) -> Result<AsyncSmtpTransport<Tokio1Executor>, EmailError> {
        let creds = Credentials::new(
            self.config.smtp_username.clone(),
            self.config.smtp_password.clone(),
        );

        let transport = AsyncSmtpTransport::<Tokio1Executor>::relay(&self.config.smtp_host)
            .map_err(|e| EmailError::Send(e.to_string()))?
            .port(self.config.smtp_port)
            .credentials(creds)
            .build();
        Ok(transport)
    }

    /// Builds the MIME message for a payslip email.
    fn build_message(&self, payslip: &PayslipEmail) -> Result<(Message, String), EmailError> {
        let from = format!("{} <{}>", self.config.from_name, self.config.from_email);
        let to = format!("{} <{}>", payslip.to_name, payslip.to_email);
        let message_id = format!("<{}@payrun>", uuid::Uuid::now_v7());

        let alternative =
            MultiPart::alternative_plain_html(payslip.text_body.clone(), payslip.html_body.clone());

        let body = match &payslip.attachment {
            Some(attachment) => {
                let content_type = ContentType::parse("application/pdf")
                    .map_err(|e| EmailError::Build(e.to_string()))?;
                MultiPart::mixed().multipart(alternative).singlepart(
                    Attachment::new(attachment.filename.clone())
                        .body(attachment.bytes.clone(), content_type),
                )
            }
            None => alternative,
        };

        let message = Message::builder()
            .from(
                from.parse()
                    .map_err(|e| EmailError::InvalidAddress(format!("{e}")))?,
            )
            .to(to
                .parse()
                .map_err(|e| EmailError::InvalidAddress(format!("{e}")))?)
            .subject(&payslip.subject)
            .message_id(Some(message_id.clone()))
            .multipart(body)
            .map_err(|e| EmailError::Build(e.to_string()))?;

        Ok((message, message_id))
    }

    /// Sends a single payslip email.
    ///
    /// Returns the assigned message ID on success.
    ///
    /// # Errors
    ///
    /// Returns an error if the message cannot be built or sent.
    pub async fn send_payslip(&self, payslip: &PayslipEmail) -> Result<String, EmailError> {
        let (message, message_id) = self.build_message(payslip)?;

        let transport = self.create_transport()?;
        transport
            .send(message)
            .await
            .map_err(|e| EmailError::Send(e.to_string()))?;

        Ok(message_id)
    }

    /// Sends a payslip with bounded retry on transient failure.
    ///
    /// Attempt N waits `N * retry_backoff_ms` before retrying. A
    /// permanent error short-circuits immediately.
    async fn send_with_retry(&self, payslip: &PayslipEmail) -> SendOutcome {
        let mut attempts = 0;
        loop {
            attempts += 1;
            match self.send_payslip(payslip).await {
                Ok(message_id) => {
                    info!(to = %payslip.to_email, %message_id, attempts, "payslip sent");
                    return SendOutcome {
                        to_email: payslip.to_email.clone(),
                        success: true,
                        message_id: Some(message_id),
                        error: None,
                        attempts,
                        cancelled: false,
                    };
                }
                Err(err) if err.is_permanent() || attempts >= self.config.max_attempts => {
                    warn!(to = %payslip.to_email, %err, attempts, "payslip delivery failed");
                    return SendOutcome {
                        to_email: payslip.to_email.clone(),
                        success: false,
                        message_id: None,
                        error: Some(err.to_string()),
                        attempts,
                        cancelled: false,
                    };
                }
                Err(err) => {
                    warn!(to = %payslip.to_email, %err, attempts, "transient failure, retrying");
                    let backoff = self.config.retry_backoff_ms * u64::from(attempts);
                    tokio::time::sleep(std::time::Duration::from_millis(backoff)).await;
                }
            }
        }
    }

    /// Delivers a batch of payslips sequentially.
    ///
    /// Recipients are processed one at a time with a fixed delay between
    /// sends. `on_progress` is invoked after each recipient resolves;
    /// `is_cancelled` is checked between recipients, and remaining
    /// recipients are reported as cancelled without being attempted.
    pub async fn send_payslip_batch<P, C>(
        &self,
        payslips: &[PayslipEmail],
        mut on_progress: P,
        is_cancelled: C,
    ) -> Vec<SendOutcome>
    where
        P: FnMut(&SendOutcome),
        C: Fn() -> bool,
    {
        let mut outcomes = Vec::with_capacity(payslips.len());

        for (index, payslip) in payslips.iter().enumerate() {
            if is_cancelled() {
                info!(remaining = payslips.len() - index, "payslip batch cancelled");
                for skipped in &payslips[index..] {
                    let outcome = SendOutcome {
                        to_email: skipped.to_email.clone(),
                        success: false,
                        message_id: None,
                        error: None,
                        attempts: 0,
                        cancelled: true,
                    };
                    on_progress(&outcome);
                    outcomes.push(outcome);
                }
                break;
            }

            if index > 0 {
                tokio::time::sleep(std::time::Duration::from_millis(self.config.send_delay_ms))
                    .await;
            }

            let outcome = self.send_with_retry(payslip).await;
            on_progress(&outcome);
            outcomes.push(outcome);
        }

        outcomes
    }
}
