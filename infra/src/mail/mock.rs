//! Mock mail transport for development and testing.
//!
//! Logs messages instead of delivering them, generates mock message IDs,
//! and can be told to simulate failures.

use async_trait::async_trait;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use uuid::Uuid;

use rf_core::services::notification::mask_email;
use rf_core::services::MailTransport;

/// Mock mail transport
#[derive(Clone)]
pub struct MockMailer {
    /// Counter for messages accepted
    message_count: Arc<AtomicU64>,
    /// Whether to simulate failures
    simulate_failure: bool,
}

impl MockMailer {
    /// Create a new mock mailer that accepts every message
    pub fn new() -> Self {
        Self {
            message_count: Arc::new(AtomicU64::new(0)),
            simulate_failure: false,
        }
    }

    /// Create a mock mailer that fails every send
    pub fn failing() -> Self {
        Self {
            message_count: Arc::new(AtomicU64::new(0)),
            simulate_failure: true,
        }
    }

    /// Get the total number of messages accepted
    pub fn message_count(&self) -> u64 {
        self.message_count.load(Ordering::SeqCst)
    }
}

impl Default for MockMailer {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MailTransport for MockMailer {
    async fn send_mail(&self, to: &str, subject: &str, body: &str) -> Result<String, String> {
        if self.simulate_failure {
            tracing::warn!(
                to = %mask_email(to),
                provider = "mock",
                "Mock mailer simulating send failure"
            );
            return Err("Simulated mail delivery failure".to_string());
        }

        let message_id = format!("mock_{}", Uuid::new_v4());
        let count = self.message_count.fetch_add(1, Ordering::SeqCst) + 1;

        tracing::info!(
            to = %mask_email(to),
            subject = %subject,
            message_id = %message_id,
            message_length = body.len(),
            message_number = count,
            provider = "mock",
            "Mail accepted (mock)"
        );

        Ok(message_id)
    }

    fn provider_name(&self) -> &str {
        "Mock"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_send_success() {
        let mailer = MockMailer::new();
        let result = mailer
            .send_mail("sam@example.com", "Hello", "Body")
            .await;

        let message_id = result.unwrap();
        assert!(message_id.starts_with("mock_"));
        assert_eq!(mailer.message_count(), 1);
    }

    #[tokio::test]
    async fn test_mock_simulated_failure() {
        let mailer = MockMailer::failing();
        let result = mailer
            .send_mail("sam@example.com", "Hello", "Body")
            .await;

        assert!(result.is_err());
        assert_eq!(mailer.message_count(), 0);
    }

    #[test]
    fn test_provider_name() {
        assert_eq!(MockMailer::new().provider_name(), "Mock");
    }
}
