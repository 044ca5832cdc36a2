//! Handler for POST /api/v1/referrals

use actix_web::{web, HttpResponse};

use rf_core::domain::value_objects::ReferralPayload;
use rf_core::repositories::{ReferralRepository, ReferrerRepository};
use rf_core::services::MailTransport;
use rf_shared::ApiResponse;

use crate::dto::{ReferralDto, SubmitReferralRequest, SubmitReferralResponse};
use crate::handlers::{domain_error_response, notification_failure_response};
use crate::routes::AppState;

/// Submit a referral
///
/// # Request Body
///
/// ```json
/// {
///     "userName": "Jane Doe",
///     "userEmail": "jane@example.com",
///     "userPhone": "0412345678",
///     "friendName": "Sam Lee",
///     "friendEmail": "sam@example.com",
///     "friendPhone": "0498765432",
///     "vertical": "Data Science"
/// }
/// ```
///
/// # Responses
/// * `201 Created` - Referral persisted and notification sent
/// * `400 Bad Request` - Validation failed; body carries the complete
///   field-error map
/// * `409 Conflict` - Referrer identity conflict that could not be
///   recovered
/// * `500 Internal Server Error` - Persistence failure, or the referral
///   persisted but the notification failed (the persisted referral is
///   included in the error details)
pub async fn submit_referral<R, L, T>(
    state: web::Data<AppState<R, L, T>>,
    request: web::Json<SubmitReferralRequest>,
) -> HttpResponse
where
    R: ReferrerRepository + 'static,
    L: ReferralRepository + 'static,
    T: MailTransport + 'static,
{
    let payload = ReferralPayload::from(request.into_inner());

    match state.referral_service.submit(&payload).await {
        Ok(submission) => {
            if !submission.notification.delivered {
                return notification_failure_response(&submission);
            }

            let response = SubmitReferralResponse {
                message: "Referral submitted successfully".to_string(),
                referral: ReferralDto::from(&submission.referral),
                notification: submission.notification,
            };
            HttpResponse::Created().json(ApiResponse::success(response))
        }
        Err(error) => domain_error_response(&error, &state.environment),
    }
}
