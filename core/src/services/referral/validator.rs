//! Referral payload validation
//!
//! Pure function over the raw payload. All rules are checked and every
//! failing field is reported in one pass; nothing short-circuits, so the
//! caller can surface the complete problem set at once. Field keys match
//! the request body's wire names.

use rf_shared::utils::validation::{validators, ValidationErrors};

use crate::domain::entities::{normalize_email, Vertical};
use crate::domain::value_objects::{ReferralPayload, ValidatedReferral};

/// Maximum accepted length for name fields
pub const MAX_NAME_LENGTH: usize = 100;

/// Validate a raw referral payload
///
/// # Returns
/// * `Ok(ValidatedReferral)` - Normalized fields (trimmed names, lowercased
///   emails, typed vertical)
/// * `Err(ValidationErrors)` - The complete set of field-level errors
pub fn validate(payload: &ReferralPayload) -> Result<ValidatedReferral, ValidationErrors> {
    let mut errors = ValidationErrors::new();

    check_name(&mut errors, "userName", &payload.user_name, "User name");
    check_email(&mut errors, "userEmail", &payload.user_email, "user email");
    check_phone(&mut errors, "userPhone", &payload.user_phone, "User phone");
    check_name(&mut errors, "friendName", &payload.friend_name, "Friend name");
    check_email(&mut errors, "friendEmail", &payload.friend_email, "friend email");
    check_phone(&mut errors, "friendPhone", &payload.friend_phone, "Friend phone");

    // A missing or unknown vertical leaves errors non-empty, so the
    // success arm only ever sees a parsed value
    match check_vertical(&mut errors, &payload.vertical) {
        Some(vertical) if errors.is_empty() => Ok(ValidatedReferral {
            user_name: payload.user_name.trim().to_string(),
            user_email: normalize_email(&payload.user_email),
            user_phone: payload.user_phone.trim().to_string(),
            friend_name: payload.friend_name.trim().to_string(),
            friend_email: normalize_email(&payload.friend_email),
            friend_phone: payload.friend_phone.trim().to_string(),
            vertical,
        }),
        _ => Err(errors),
    }
}

fn check_name(errors: &mut ValidationErrors, field: &str, value: &str, label: &str) {
    if !validators::not_empty(value) {
        errors.add_error(
            field,
            format!("{label} is required and must be a non-empty string"),
            "REQUIRED",
        );
    } else if !validators::length_between(value, 1, MAX_NAME_LENGTH) {
        errors.add_error(
            field,
            format!("{label} must not exceed {MAX_NAME_LENGTH} characters"),
            "TOO_LONG",
        );
    }
}

fn check_email(errors: &mut ValidationErrors, field: &str, value: &str, label: &str) {
    if !validators::not_empty(value) {
        errors.add_error(field, format!("Valid {label} is required"), "REQUIRED");
    } else if !validators::is_valid_email(value) {
        errors.add_error(field, "Invalid email format", "INVALID_FORMAT");
    }
}

fn check_phone(errors: &mut ValidationErrors, field: &str, value: &str, label: &str) {
    if !validators::not_empty(value) {
        errors.add_error(field, format!("{label} number is required"), "REQUIRED");
    } else if !validators::is_valid_phone(value) {
        errors.add_error(
            field,
            format!("{label} number must be exactly 10 digits"),
            "INVALID_FORMAT",
        );
    }
}

fn check_vertical(errors: &mut ValidationErrors, value: &str) -> Option<Vertical> {
    if !validators::not_empty(value) {
        errors.add_error("vertical", "Vertical is required", "REQUIRED");
        return None;
    }
    match value.parse::<Vertical>() {
        Ok(vertical) => Some(vertical),
        Err(_) => {
            errors.add_error("vertical", "Invalid vertical selection", "INVALID_VALUE");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_payload() -> ReferralPayload {
        ReferralPayload {
            user_name: "Jane Doe".to_string(),
            user_email: "jane@example.com".to_string(),
            user_phone: "0412345678".to_string(),
            friend_name: "Sam Lee".to_string(),
            friend_email: "sam@example.com".to_string(),
            friend_phone: "0498765432".to_string(),
            vertical: "Data Science".to_string(),
        }
    }

    #[test]
    fn test_valid_payload_normalizes_fields() {
        let mut payload = valid_payload();
        payload.user_email = "  Jane@Example.COM ".to_string();
        payload.friend_name = "  Sam Lee ".to_string();

        let validated = validate(&payload).unwrap();
        assert_eq!(validated.user_email, "jane@example.com");
        assert_eq!(validated.friend_name, "Sam Lee");
        assert_eq!(validated.vertical, Vertical::DataScience);
    }

    #[test]
    fn test_empty_payload_reports_every_field() {
        let errors = validate(&ReferralPayload::default()).unwrap_err();
        let fields = errors.to_field_errors();

        for field in [
            "userName",
            "userEmail",
            "userPhone",
            "friendName",
            "friendEmail",
            "friendPhone",
            "vertical",
        ] {
            assert!(fields.contains_key(field), "missing error for {field}");
        }
    }

    #[test]
    fn test_bad_email_is_the_only_error() {
        let mut payload = valid_payload();
        payload.friend_email = "not-an-email".to_string();

        let errors = validate(&payload).unwrap_err();
        let fields = errors.to_field_errors();
        assert_eq!(fields.len(), 1);
        assert_eq!(fields["friendEmail"], vec!["Invalid email format"]);
    }

    #[test]
    fn test_short_phone_rejected_ten_digits_accepted() {
        let mut payload = valid_payload();
        payload.user_phone = "12345".to_string();

        let errors = validate(&payload).unwrap_err();
        assert!(errors.to_field_errors()["userPhone"][0].contains("exactly 10 digits"));

        payload.user_phone = "1234567890".to_string();
        assert!(validate(&payload).is_ok());
    }

    #[test]
    fn test_unknown_vertical_rejected() {
        let mut payload = valid_payload();
        payload.vertical = "Underwater Basket Weaving".to_string();

        let errors = validate(&payload).unwrap_err();
        assert_eq!(
            errors.to_field_errors()["vertical"],
            vec!["Invalid vertical selection"]
        );
    }

    #[test]
    fn test_overlong_name_rejected() {
        let mut payload = valid_payload();
        payload.user_name = "x".repeat(MAX_NAME_LENGTH + 1);

        let errors = validate(&payload).unwrap_err();
        assert!(errors.to_field_errors()["userName"][0].contains("100 characters"));
    }

    #[test]
    fn test_parsed_vertical_does_not_mask_other_errors() {
        let mut payload = valid_payload();
        payload.user_email = "not-an-email".to_string();

        let errors = validate(&payload).unwrap_err();
        let fields = errors.to_field_errors();
        assert_eq!(fields.len(), 1);
        assert!(fields.contains_key("userEmail"));
    }

    #[test]
    fn test_whitespace_only_name_is_required_error() {
        let mut payload = valid_payload();
        payload.friend_name = "   ".to_string();

        let errors = validate(&payload).unwrap_err();
        assert!(errors.to_field_errors()["friendName"][0].contains("required"));
    }
}
