//! Trait for mail transport integration

use async_trait::async_trait;

/// Trait for the outbound mail capability
///
/// Implementations wrap a concrete delivery channel (SMTP relay, provider
/// API, test double). Sender credentials are validated when the transport
/// is constructed, so a send failure here is always a delivery failure,
/// not a configuration failure.
#[async_trait]
pub trait MailTransport: Send + Sync {
    /// Send a single message
    ///
    /// # Returns
    /// * `Ok(message_id)` - Transport identifier for the accepted message
    /// * `Err(reason)` - The send was rejected or the transport failed
    async fn send_mail(&self, to: &str, subject: &str, body: &str) -> Result<String, String>;

    /// Get the transport provider name (e.g. "SMTP", "Mock")
    fn provider_name(&self) -> &str;
}
