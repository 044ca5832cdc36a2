//! Shared handler utilities.

pub mod error_handler;

pub use error_handler::{domain_error_response, notification_failure_response, status_for};
