//! Outbound email (SMTP) configuration module
//!
//! Credentials are read from `EMAIL_USER` / `EMAIL_PASSWORD` with the SMTP
//! endpoint configurable separately. Values are carried here unvalidated;
//! the mail transport validates completeness once at construction so a
//! misconfigured deployment fails at startup, not mid-request.

use serde::{Deserialize, Serialize};
use std::env;

/// SMTP mail transport configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EmailConfig {
    /// SMTP server host
    pub smtp_host: String,

    /// SMTP server port
    pub smtp_port: u16,

    /// SMTP account username; also used as the envelope sender address
    pub username: Option<String>,

    /// SMTP account password (app password for providers with 2FA)
    pub password: Option<String>,

    /// Display name used in the From header
    #[serde(default = "default_from_name")]
    pub from_name: String,

    /// Whether to negotiate TLS with the relay
    #[serde(default = "default_use_tls")]
    pub use_tls: bool,
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            smtp_host: String::from("smtp.gmail.com"),
            smtp_port: 587,
            username: None,
            password: None,
            from_name: default_from_name(),
            use_tls: default_use_tls(),
        }
    }
}

impl EmailConfig {
    /// Load email configuration from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            smtp_host: env::var("SMTP_HOST").unwrap_or(defaults.smtp_host),
            smtp_port: env::var("SMTP_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.smtp_port),
            username: env::var("EMAIL_USER").ok(),
            password: env::var("EMAIL_PASSWORD").ok(),
            from_name: env::var("EMAIL_FROM_NAME").unwrap_or(defaults.from_name),
            use_tls: env::var("SMTP_USE_TLS")
                .map(|v| v == "true" || v == "1")
                .unwrap_or(defaults.use_tls),
        }
    }

    /// Check that sending credentials are present
    pub fn has_credentials(&self) -> bool {
        matches!((&self.username, &self.password), (Some(u), Some(p)) if !u.is_empty() && !p.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_credentials_detected() {
        let config = EmailConfig::default();
        assert!(!config.has_credentials());
    }

    #[test]
    fn test_present_credentials_detected() {
        let config = EmailConfig {
            username: Some("referrals@example.com".into()),
            password: Some("app-password".into()),
            ..EmailConfig::default()
        };
        assert!(config.has_credentials());
    }
}

fn default_from_name() -> String {
    String::from("ReferEase")
}

fn default_use_tls() -> bool {
    true
}
