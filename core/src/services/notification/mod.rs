//! Friend notification service
//!
//! Composes the fixed referral email and dispatches it through an
//! injected [`MailTransport`]. Send failures are captured into a
//! [`NotificationOutcome`] and never propagate; a failed email must not
//! mask an already-persisted referral.
//!
//! [`NotificationOutcome`]: crate::domain::value_objects::NotificationOutcome

pub mod service;
pub mod traits;

pub use service::NotificationService;
pub use traits::MailTransport;

/// Mask an email address for logging
///
/// Keeps the first character of the local part and the full domain:
/// `jane.doe@example.com` becomes `j*******@example.com`.
pub fn mask_email(email: &str) -> String {
    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() => {
            let masked: String = local
                .chars()
                .enumerate()
                .map(|(i, c)| if i == 0 { c } else { '*' })
                .collect();
            format!("{}@{}", masked, domain)
        }
        _ => "*".repeat(email.len()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_email() {
        assert_eq!(mask_email("jane.doe@example.com"), "j*******@example.com");
        assert_eq!(mask_email("a@b.co"), "a@b.co");
        assert_eq!(mask_email("not-an-email"), "************");
        assert_eq!(mask_email("@example.com"), "************");
    }
}
