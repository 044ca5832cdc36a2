//! Mapping from domain failures to HTTP responses
//!
//! Status codes are a presentation concern and are decided here, from the
//! structural [`ErrorKind`] classification. Detail exposure for unsafe
//! kinds is gated on the environment.

use actix_web::{http::StatusCode, HttpResponse};
use serde_json::json;

use rf_core::domain::value_objects::Submission;
use rf_core::errors::{error_response_for, DomainError, ErrorKind};
use rf_shared::config::Environment;
use rf_shared::ErrorResponse;

use crate::dto::ReferralDto;

/// HTTP status for an outward error kind
pub fn status_for(kind: ErrorKind) -> StatusCode {
    match kind {
        ErrorKind::ValidationFailed => StatusCode::BAD_REQUEST,
        ErrorKind::ConflictingIdentity => StatusCode::CONFLICT,
        ErrorKind::ServiceMisconfigured
        | ErrorKind::NotificationFailed
        | ErrorKind::InternalFailure => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Build the HTTP response for a failed submission
pub fn domain_error_response(error: &DomainError, environment: &Environment) -> HttpResponse {
    let kind = ErrorKind::classify(error);

    match kind {
        ErrorKind::ValidationFailed => {
            tracing::warn!(error = %error, event = "submission_rejected", "Submission rejected");
        }
        _ => {
            tracing::error!(
                error = %error,
                code = kind.error_code(),
                event = "submission_failed",
                "Submission failed"
            );
        }
    }

    let body = error_response_for(error, environment.expose_error_details());
    HttpResponse::build(status_for(kind)).json(body)
}

/// Build the HTTP response for a submission whose referral persisted but
/// whose notification send failed
///
/// The referral is a valid terminal state and is returned alongside the
/// failure so callers do not retry the whole submission.
pub fn notification_failure_response(submission: &Submission) -> HttpResponse {
    let reason = submission
        .notification
        .error
        .clone()
        .unwrap_or_else(|| "unknown delivery failure".to_string());

    let kind = ErrorKind::NotificationFailed;
    let body = ErrorResponse::new(
        kind.error_code(),
        format!("Referral was recorded but the email could not be sent: {}", reason),
    )
    .with_detail("referral", json!(ReferralDto::from(&submission.referral)));

    HttpResponse::build(status_for(kind)).json(body)
}
