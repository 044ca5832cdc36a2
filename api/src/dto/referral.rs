//! Referral submission DTOs
//!
//! Wire field names are camelCase; the request DTO carries raw strings so
//! that validation and its complete field-error report happen in the
//! domain layer, not in serde.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use rf_core::domain::entities::Referral;
use rf_core::domain::value_objects::{NotificationOutcome, ReferralPayload};

/// Request body for POST /api/v1/referrals
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitReferralRequest {
    #[serde(default)]
    pub user_name: String,
    #[serde(default)]
    pub user_email: String,
    #[serde(default)]
    pub user_phone: String,
    #[serde(default)]
    pub friend_name: String,
    #[serde(default)]
    pub friend_email: String,
    #[serde(default)]
    pub friend_phone: String,
    #[serde(default)]
    pub vertical: String,
}

impl From<SubmitReferralRequest> for ReferralPayload {
    fn from(request: SubmitReferralRequest) -> Self {
        ReferralPayload {
            user_name: request.user_name,
            user_email: request.user_email,
            user_phone: request.user_phone,
            friend_name: request.friend_name,
            friend_email: request.friend_email,
            friend_phone: request.friend_phone,
            vertical: request.vertical,
        }
    }
}

/// Persisted referral as exposed to callers
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReferralDto {
    pub id: Uuid,
    pub referrer_id: Uuid,
    pub friend_name: String,
    pub friend_email: String,
    pub friend_phone: String,
    pub vertical: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl From<&Referral> for ReferralDto {
    fn from(referral: &Referral) -> Self {
        Self {
            id: referral.id,
            referrer_id: referral.referrer_id,
            friend_name: referral.friend_name.clone(),
            friend_email: referral.friend_email.clone(),
            friend_phone: referral.friend_phone.clone(),
            vertical: referral.vertical.as_str().to_string(),
            created_at: referral.created_at,
        }
    }
}

/// Response body for a successful submission
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitReferralResponse {
    pub message: String,
    pub referral: ReferralDto,
    pub notification: NotificationOutcome,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_deserializes_camel_case() {
        let json = serde_json::json!({
            "userName": "Jane Doe",
            "userEmail": "jane@example.com",
            "userPhone": "0412345678",
            "friendName": "Sam Lee",
            "friendEmail": "sam@example.com",
            "friendPhone": "0498765432",
            "vertical": "Data Science"
        });

        let request: SubmitReferralRequest = serde_json::from_value(json).unwrap();
        assert_eq!(request.user_name, "Jane Doe");
        assert_eq!(request.friend_email, "sam@example.com");
    }

    #[test]
    fn test_missing_fields_default_to_empty() {
        let request: SubmitReferralRequest =
            serde_json::from_value(serde_json::json!({})).unwrap();
        assert!(request.user_name.is_empty());
        assert!(request.vertical.is_empty());
    }

    #[test]
    fn test_referral_dto_serializes_camel_case() {
        use rf_core::domain::entities::Vertical;

        let referral = Referral::new(
            Uuid::new_v4(),
            "Sam Lee",
            "sam@example.com",
            "0498765432",
            Vertical::DataScience,
        );
        let dto = ReferralDto::from(&referral);
        let json = serde_json::to_value(&dto).unwrap();

        assert_eq!(json["friendName"], "Sam Lee");
        assert_eq!(json["vertical"], "Data Science");
        assert!(json.get("referrerId").is_some());
    }
}
