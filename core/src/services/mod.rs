//! Domain services

pub mod notification;
pub mod referral;

pub use notification::{MailTransport, NotificationService};
pub use referral::ReferralService;
