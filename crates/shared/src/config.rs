//! Application configuration management.

use rust_decimal::Decimal;
use serde::Deserialize;

/// Application configuration.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    /// Email delivery configuration.
    #[serde(default)]
    pub email: EmailConfig,
    /// Payroll defaults.
    #[serde(default)]
    pub payroll: PayrollConfig,
}

/// Email delivery configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct EmailConfig {
    /// SMTP relay host.
    #[serde(default = "default_smtp_host")]
    pub smtp_host: String,
    /// SMTP relay port.
    #[serde(default = "default_smtp_port")]
    pub smtp_port: u16,
    /// SMTP username.
    #[serde(default)]
    pub smtp_username: String,
    /// SMTP password.
    #[serde(default)]
    pub smtp_password: String,
    /// Display name for the From header.
    #[serde(default = "default_from_name")]
    pub from_name: String,
    /// Address for the From header.
    #[serde(default = "default_from_email")]
    pub from_email: String,
    /// Fixed delay inserted between batch sends, to respect the
    /// provider's rate limit.
    #[serde(default = "default_send_delay_ms")]
    pub send_delay_ms: u64,
    /// Maximum delivery attempts per recipient for transient failures.
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,
    /// Base retry delay; attempt N waits N times this long.
    #[serde(default = "default_retry_backoff_ms")]
    pub retry_backoff_ms: u64,
}

fn default_smtp_host() -> String {
    "localhost".to_string()
}

fn default_smtp_port() -> u16 {
    1025
}

fn default_from_name() -> String {
    "Payrun".to_string()
}

fn default_from_email() -> String {
    "payroll@payrun.local".to_string()
}

fn default_send_delay_ms() -> u64 {
    500
}

fn default_max_attempts() -> u32 {
    3
}

fn default_retry_backoff_ms() -> u64 {
    1000
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            smtp_host: default_smtp_host(),
            smtp_port: default_smtp_port(),
            smtp_username: String::new(),
            smtp_password: String::new(),
            from_name: default_from_name(),
            from_email: default_from_email(),
            send_delay_ms: default_send_delay_ms(),
            max_attempts: default_max_attempts(),
            retry_backoff_ms: default_retry_backoff_ms(),
        }
    }
}

/// Payroll defaults applied when an employee record does not override
/// them.
#[derive(Debug, Clone, Deserialize)]
pub struct PayrollConfig {
    /// Default superannuation guarantee rate, as a percentage.
    #[serde(default = "default_super_rate_percent")]
    pub default_super_rate_percent: Decimal,
}

fn default_super_rate_percent() -> Decimal {
    Decimal::new(115, 1) // 11.5%
}

impl Default for PayrollConfig {
    fn default() -> Self {
        Self {
            default_super_rate_percent: default_super_rate_percent(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        dotenvy::dotenv().ok();
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("PAYRUN").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    #[test]
    fn test_email_config_default() {
        let config = EmailConfig::default();
        assert_eq!(config.smtp_host, "localhost");
        assert_eq!(config.smtp_port, 1025);
        assert_eq!(config.max_attempts, 3);
    }

    #[test]
    fn test_payroll_config_default_super_rate() {
        let config = PayrollConfig::default();
        assert_eq!(config.default_super_rate_percent, dec!(11.5));
    }

    #[rstest]
    #[case(default_send_delay_ms(), 500)]
    #[case(default_retry_backoff_ms(), 1000)]
    fn test_batch_timing_defaults(#[case] actual: u64, #[case] expected: u64) {
        assert_eq!(actual, expected);
    }
}
