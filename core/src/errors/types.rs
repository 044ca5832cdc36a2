//! Stable outward error taxonomy and response classification.
//!
//! Internal failure causes are mapped to a small, fixed set of response
//! kinds. The kind decides the error code, whether the underlying detail
//! is safe to expose to callers, and the generic message used when it is
//! not. HTTP status mapping is a presentation concern and lives at the
//! API boundary.

use rf_shared::ErrorResponse;

use super::DomainError;

/// Outward classification of a failed submission
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Missing or malformed request fields
    ValidationFailed,
    /// A required capability is not configured
    ServiceMisconfigured,
    /// Identity uniqueness conflict that survived the re-fetch recovery
    ConflictingIdentity,
    /// The referral persisted but the notification send failed
    NotificationFailed,
    /// Any other unexpected fault
    InternalFailure,
}

impl ErrorKind {
    /// Classify an internal failure cause into its outward kind
    pub fn classify(error: &DomainError) -> Self {
        match error {
            DomainError::Validation { .. } => ErrorKind::ValidationFailed,
            DomainError::UniqueViolation { .. } => ErrorKind::ConflictingIdentity,
            DomainError::Configuration { .. } => ErrorKind::ServiceMisconfigured,
            DomainError::Notification { .. } => ErrorKind::NotificationFailed,
            DomainError::Database { .. }
            | DomainError::NotFound { .. }
            | DomainError::Internal { .. } => ErrorKind::InternalFailure,
        }
    }

    /// Stable error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            ErrorKind::ValidationFailed => "VALIDATION_FAILED",
            ErrorKind::ServiceMisconfigured => "SERVICE_MISCONFIGURED",
            ErrorKind::ConflictingIdentity => "CONFLICTING_IDENTITY",
            ErrorKind::NotificationFailed => "NOTIFICATION_FAILED",
            ErrorKind::InternalFailure => "INTERNAL_FAILURE",
        }
    }

    /// Whether the underlying error detail is safe to show to callers
    ///
    /// Misconfiguration detail can leak credential layout and internal
    /// faults can leak implementation detail; both are hidden unless the
    /// environment explicitly opts in (development).
    pub fn safe_to_expose(&self) -> bool {
        match self {
            ErrorKind::ValidationFailed
            | ErrorKind::ConflictingIdentity
            | ErrorKind::NotificationFailed => true,
            ErrorKind::ServiceMisconfigured | ErrorKind::InternalFailure => false,
        }
    }

    /// Generic caller-facing message used when detail is withheld
    pub fn generic_message(&self) -> &'static str {
        match self {
            ErrorKind::ValidationFailed => "Invalid request data",
            ErrorKind::ServiceMisconfigured => "Server misconfiguration",
            ErrorKind::ConflictingIdentity => "Referrer identity conflict",
            ErrorKind::NotificationFailed => "Failed to send referral email",
            ErrorKind::InternalFailure => "Internal server error",
        }
    }
}

/// Build the outward error response for an internal failure
///
/// `expose_details` reflects the environment policy (development only);
/// kinds whose detail is always safe ignore it. Validation failures carry
/// the complete field-error map so callers can report every problem at
/// once.
pub fn error_response_for(error: &DomainError, expose_details: bool) -> ErrorResponse {
    let kind = ErrorKind::classify(error);

    let message = if kind.safe_to_expose() || expose_details {
        error.to_string()
    } else {
        kind.generic_message().to_string()
    };

    let mut response = ErrorResponse::new(kind.error_code(), message);

    if let DomainError::Validation { errors } = error {
        response = response.with_detail(
            "fields",
            serde_json::to_value(errors.to_field_errors()).unwrap_or_default(),
        );
    }

    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use rf_shared::ValidationErrors;

    #[test]
    fn test_classification_is_structural() {
        let unique = DomainError::UniqueViolation { field: "email".into() };
        assert_eq!(ErrorKind::classify(&unique), ErrorKind::ConflictingIdentity);

        let config = DomainError::Configuration { message: "EMAIL_USER not set".into() };
        assert_eq!(ErrorKind::classify(&config), ErrorKind::ServiceMisconfigured);

        let notify = DomainError::Notification { message: "relay refused".into() };
        assert_eq!(ErrorKind::classify(&notify), ErrorKind::NotificationFailed);

        let db = DomainError::Database { message: "pool timeout".into() };
        assert_eq!(ErrorKind::classify(&db), ErrorKind::InternalFailure);

        // A referral pointing at a missing referrer is an internal fault,
        // not something the caller can correct
        let missing = DomainError::NotFound { resource: "referrer".into() };
        assert_eq!(ErrorKind::classify(&missing), ErrorKind::InternalFailure);
        assert!(!ErrorKind::classify(&missing).safe_to_expose());
    }

    #[test]
    fn test_validation_response_carries_field_map() {
        let mut errors = ValidationErrors::new();
        errors.add_error("userEmail", "Invalid email format", "INVALID_FORMAT");
        errors.add_error("friendPhone", "Phone number must be exactly 10 digits", "INVALID_FORMAT");

        let response = error_response_for(&DomainError::Validation { errors }, false);
        assert_eq!(response.error, "VALIDATION_FAILED");

        let fields = &response.details.unwrap()["fields"];
        assert!(fields["userEmail"][0].as_str().unwrap().contains("Invalid email"));
        assert!(fields["friendPhone"][0].as_str().unwrap().contains("10 digits"));
    }

    #[test]
    fn test_unsafe_kinds_hide_detail_outside_development() {
        let error = DomainError::Configuration {
            message: "EMAIL_USER and EMAIL_PASSWORD are missing".into(),
        };

        let hidden = error_response_for(&error, false);
        assert_eq!(hidden.message, "Server misconfiguration");

        let exposed = error_response_for(&error, true);
        assert!(exposed.message.contains("EMAIL_USER"));
    }

    #[test]
    fn test_notification_detail_is_safe() {
        let error = DomainError::Notification { message: "relay refused".into() };
        let response = error_response_for(&error, false);
        assert_eq!(response.error, "NOTIFICATION_FAILED");
        assert!(response.message.contains("relay refused"));
    }
}
