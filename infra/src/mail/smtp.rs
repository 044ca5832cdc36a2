//! SMTP mail transport implementation using lettre.
//!
//! Credentials are checked once when the mailer is constructed so that a
//! deployment with missing `EMAIL_USER` / `EMAIL_PASSWORD` fails at
//! startup instead of on the first submission. The built transport is
//! long-lived and reused for every send.

use async_trait::async_trait;
use lettre::{
    message::{header::ContentType, Mailbox},
    transport::smtp::authentication::Credentials,
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};

use rf_core::services::MailTransport;
use rf_shared::config::EmailConfig;

use crate::InfrastructureError;

/// SMTP implementation of the mail transport
pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
}

impl SmtpMailer {
    /// Create a new SMTP mailer from configuration
    ///
    /// # Returns
    /// * `Ok(SmtpMailer)` - Ready-to-use transport
    /// * `Err(InfrastructureError::Config)` - Credentials are missing or
    ///   the sender address is unusable
    pub fn new(config: &EmailConfig) -> Result<Self, InfrastructureError> {
        if !config.has_credentials() {
            return Err(InfrastructureError::Config(
                "SMTP credentials not configured: set EMAIL_USER and EMAIL_PASSWORD".to_string(),
            ));
        }

        // has_credentials guarantees both are present and non-empty
        let username = config.username.clone().unwrap_or_default();
        let password = config.password.clone().unwrap_or_default();

        let from: Mailbox = format!("{} <{}>", config.from_name, username)
            .parse()
            .map_err(|e| {
                InfrastructureError::Config(format!("Invalid sender address: {}", e))
            })?;

        let transport = Self::build_transport(config, username, password)?;

        tracing::info!(
            host = %config.smtp_host,
            port = config.smtp_port,
            use_tls = config.use_tls,
            event = "smtp_transport_ready",
            "SMTP transport configured"
        );

        Ok(Self { transport, from })
    }

    fn build_transport(
        config: &EmailConfig,
        username: String,
        password: String,
    ) -> Result<AsyncSmtpTransport<Tokio1Executor>, InfrastructureError> {
        let credentials = Credentials::new(username, password);

        let builder = if config.use_tls {
            AsyncSmtpTransport::<Tokio1Executor>::relay(&config.smtp_host).map_err(|e| {
                InfrastructureError::Config(format!("Failed to create SMTP relay: {}", e))
            })?
        } else {
            // Plaintext transport for local relays (Mailpit and friends)
            AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(&config.smtp_host)
        };

        Ok(builder
            .port(config.smtp_port)
            .credentials(credentials)
            .build())
    }

    /// Verify connectivity to the SMTP relay
    pub async fn health_check(&self) -> Result<bool, InfrastructureError> {
        self.transport
            .test_connection()
            .await
            .map_err(|e| InfrastructureError::Mail(format!("SMTP connection test failed: {}", e)))
    }
}

#[async_trait]
impl MailTransport for SmtpMailer {
    async fn send_mail(&self, to: &str, subject: &str, body: &str) -> Result<String, String> {
        let recipient: Mailbox = to
            .parse()
            .map_err(|e| format!("Invalid recipient address: {}", e))?;

        let message = Message::builder()
            .from(self.from.clone())
            .to(recipient)
            .subject(subject)
            .header(ContentType::TEXT_PLAIN)
            .body(body.to_string())
            .map_err(|e| format!("Failed to build message: {}", e))?;

        let response = self
            .transport
            .send(message)
            .await
            .map_err(|e| format!("SMTP send failed: {}", e))?;

        let message_id = response
            .message()
            .next()
            .map(|s| s.to_string())
            .unwrap_or_default();

        Ok(message_id)
    }

    fn provider_name(&self) -> &str {
        "SMTP"
    }
}
