//! Common validation utilities
//!
//! Field-level error collection used by request validators. Validators
//! accumulate every failing field into a [`ValidationErrors`] so callers
//! can report the complete problem set in one response instead of
//! stopping at the first failure.

use serde::Serialize;
use std::collections::HashMap;

/// Validation error with field-level details
#[derive(Debug, Clone, Serialize)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
    pub code: String,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, message: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            code: code.into(),
        }
    }
}

/// Collection of validation errors
#[derive(Debug, Clone, Default)]
pub struct ValidationErrors {
    errors: Vec<ValidationError>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    pub fn add_error(&mut self, field: impl Into<String>, message: impl Into<String>, code: impl Into<String>) {
        self.add(ValidationError::new(field, message, code));
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    /// Group error messages by field name
    pub fn to_field_errors(&self) -> HashMap<String, Vec<String>> {
        let mut field_errors: HashMap<String, Vec<String>> = HashMap::new();
        for error in &self.errors {
            field_errors
                .entry(error.field.clone())
                .or_default()
                .push(error.message.clone());
        }
        field_errors
    }
}

impl std::fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let fields: Vec<&str> = self.errors.iter().map(|e| e.field.as_str()).collect();
        write!(f, "invalid fields: {}", fields.join(", "))
    }
}

/// Common validation functions
pub mod validators {
    use once_cell::sync::Lazy;
    use regex::Regex;

    /// Simple `local@domain.tld` shape: no internal whitespace, an `@`,
    /// and a dot in the domain portion. No deliverability check.
    static EMAIL_PATTERN: Lazy<Regex> =
        Lazy::new(|| Regex::new(r"^\S+@\S+\.\S+$").expect("valid email pattern"));

    /// Exactly ten decimal digits
    static PHONE_PATTERN: Lazy<Regex> =
        Lazy::new(|| Regex::new(r"^\d{10}$").expect("valid phone pattern"));

    /// Check if a string is not empty after trimming whitespace
    pub fn not_empty(value: &str) -> bool {
        !value.trim().is_empty()
    }

    /// Check if a string length is within bounds
    pub fn length_between(value: &str, min: usize, max: usize) -> bool {
        let len = value.len();
        len >= min && len <= max
    }

    /// Check if an email address has a plausible shape
    pub fn is_valid_email(email: &str) -> bool {
        EMAIL_PATTERN.is_match(email.trim())
    }

    /// Check if a phone number is exactly ten decimal digits
    pub fn is_valid_phone(phone: &str) -> bool {
        PHONE_PATTERN.is_match(phone.trim())
    }
}

#[cfg(test)]
mod tests {
    use super::validators::*;
    use super::*;

    #[test]
    fn test_collects_multiple_errors() {
        let mut errors = ValidationErrors::new();
        errors.add_error("userName", "User name is required", "REQUIRED");
        errors.add_error("userEmail", "Invalid email format", "INVALID_FORMAT");

        assert_eq!(errors.len(), 2);
        let by_field = errors.to_field_errors();
        assert_eq!(by_field["userName"], vec!["User name is required"]);
        assert_eq!(by_field["userEmail"], vec!["Invalid email format"]);
    }

    #[test]
    fn test_email_validator() {
        assert!(is_valid_email("friend@example.com"));
        assert!(is_valid_email("  friend@example.com  ")); // trimmed
        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email("missing@dot"));
        assert!(!is_valid_email("has space@example.com"));
    }

    #[test]
    fn test_phone_validator() {
        assert!(is_valid_phone("1234567890"));
        assert!(is_valid_phone(" 1234567890 ")); // trimmed
        assert!(!is_valid_phone("12345"));
        assert!(!is_valid_phone("12345678901"));
        assert!(!is_valid_phone("12345abcde"));
    }

    #[test]
    fn test_not_empty() {
        assert!(not_empty("a"));
        assert!(!not_empty("   "));
    }
}
