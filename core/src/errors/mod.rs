//! Domain-specific error types and error handling.

mod types;

pub use types::{error_response_for, ErrorKind};

use rf_shared::ValidationErrors;
use thiserror::Error;

/// Core domain errors
///
/// Every collaborator failure reaches the service as one of these tagged
/// variants; classification into the outward taxonomy is structural (see
/// [`ErrorKind`]), never based on matching error-message text.
#[derive(Error, Debug)]
pub enum DomainError {
    /// Input validation failed; carries the complete field-error set
    #[error("Validation failed for {} field(s)", errors.len())]
    Validation { errors: ValidationErrors },

    /// A uniqueness constraint rejected a write
    #[error("Duplicate value for unique field: {field}")]
    UniqueViolation { field: String },

    /// The persistence layer failed
    #[error("Database error: {message}")]
    Database { message: String },

    /// A referenced resource does not exist
    #[error("Resource not found: {resource}")]
    NotFound { resource: String },

    /// A required capability is not configured (e.g. mail credentials)
    #[error("Service misconfigured: {message}")]
    Configuration { message: String },

    /// The notification send attempt failed; the submission itself may
    /// still have succeeded
    #[error("Notification failure: {message}")]
    Notification { message: String },

    /// Any other unexpected fault
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl From<ValidationErrors> for DomainError {
    fn from(errors: ValidationErrors) -> Self {
        DomainError::Validation { errors }
    }
}

pub type DomainResult<T> = Result<T, DomainError>;
