//! Referrer entity representing a unique person who has made at least one referral.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Normalize an email address for use as an identity key
///
/// Trims surrounding whitespace and lowercases the address so that repeat
/// submissions from the same person resolve to one identity regardless of
/// casing.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_ascii_lowercase()
}

/// A durable referrer identity, keyed by normalized email
///
/// Created lazily the first time an email submits a referral and read on
/// every subsequent submission from that email. Name and phone keep their
/// first-submitted values; repeat referrals never update them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Referrer {
    /// Unique identifier for the referrer
    pub id: Uuid,

    /// Display name, as first submitted
    pub name: String,

    /// Identity key; unique and case-normalized
    pub email: String,

    /// Contact phone, as first submitted
    pub phone: String,

    /// Timestamp when the identity was created
    pub created_at: DateTime<Utc>,
}

impl Referrer {
    /// Creates a new Referrer instance with a normalized email key
    pub fn new(name: impl Into<String>, email: &str, phone: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            email: normalize_email(email),
            phone: phone.into(),
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_referrer_normalizes_email() {
        let referrer = Referrer::new("Jane Doe", "  Jane.Doe@Example.COM ", "0412345678");

        assert_eq!(referrer.email, "jane.doe@example.com");
        assert_eq!(referrer.name, "Jane Doe");
        assert_eq!(referrer.phone, "0412345678");
    }

    #[test]
    fn test_normalize_email() {
        assert_eq!(normalize_email("A@B.Com"), "a@b.com");
        assert_eq!(normalize_email(" a@b.com "), "a@b.com");
    }

    #[test]
    fn test_referrers_get_distinct_ids() {
        let a = Referrer::new("A", "a@example.com", "1111111111");
        let b = Referrer::new("B", "b@example.com", "2222222222");
        assert_ne!(a.id, b.id);
    }
}
