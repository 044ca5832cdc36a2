//! Mail transport implementations of the core [`MailTransport`] trait.
//!
//! [`MailTransport`]: rf_core::services::MailTransport

pub mod mock;
pub mod smtp;
