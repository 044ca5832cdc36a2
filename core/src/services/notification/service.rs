//! Notification service implementation

use std::sync::Arc;

use crate::domain::value_objects::NotificationOutcome;

use super::mask_email;
use super::traits::MailTransport;

/// Subject line used for every referral notification
pub const REFERRAL_SUBJECT: &str = "You Have Been Referred!";

/// Service that notifies a referred friend by email
///
/// Holds one long-lived transport for the process lifetime; transport
/// configuration is validated once at construction time by the transport
/// itself, not per send.
pub struct NotificationService<T: MailTransport> {
    transport: Arc<T>,
}

impl<T: MailTransport> NotificationService<T> {
    /// Create a new notification service around a configured transport
    pub fn new(transport: Arc<T>) -> Self {
        Self { transport }
    }

    /// Send the referral notification to a friend
    ///
    /// Builds the fixed message template (a greeting to the friend naming
    /// the referrer) and attempts exactly one send. Every transport
    /// failure is caught and reported through the returned
    /// [`NotificationOutcome`]; this method never returns an error.
    pub async fn notify_referred_friend(
        &self,
        friend_email: &str,
        friend_name: &str,
        referrer_name: &str,
    ) -> NotificationOutcome {
        let body = Self::build_body(friend_name, referrer_name);

        match self
            .transport
            .send_mail(friend_email, REFERRAL_SUBJECT, &body)
            .await
        {
            Ok(message_id) => {
                tracing::info!(
                    to = %mask_email(friend_email),
                    message_id = %message_id,
                    provider = self.transport.provider_name(),
                    event = "referral_email_sent",
                    "Referral email sent"
                );
                NotificationOutcome::delivered(message_id)
            }
            Err(reason) => {
                tracing::error!(
                    to = %mask_email(friend_email),
                    provider = self.transport.provider_name(),
                    error = %reason,
                    event = "referral_email_failed",
                    "Failed to send referral email"
                );
                NotificationOutcome::failed(reason)
            }
        }
    }

    fn build_body(friend_name: &str, referrer_name: &str) -> String {
        format!(
            "Hello {friend_name},\n\n{referrer_name} has referred you for an opportunity. \
             We look forward to connecting with you!\n\nBest Regards,\nYour Team"
        )
    }
}
