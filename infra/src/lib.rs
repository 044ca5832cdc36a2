//! # Infrastructure Layer
//!
//! Concrete implementations of the contracts defined in `rf_core`:
//! MySQL-backed repositories over SQLx and an SMTP mail transport over
//! lettre. Nothing in this crate contains business rules; it adapts
//! external systems to the domain traits.

pub mod database;
pub mod mail;

pub use database::connection::DatabasePool;
pub use database::mysql::{MySqlReferralRepository, MySqlReferrerRepository};
pub use mail::mock::MockMailer;
pub use mail::smtp::SmtpMailer;

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Database connection or query error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Mail transport error
    #[error("Mail transport error: {0}")]
    Mail(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// General infrastructure error
    #[error("Infrastructure error: {0}")]
    General(String),
}
