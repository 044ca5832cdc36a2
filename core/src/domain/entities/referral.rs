//! Referral entity representing one referral event.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::vertical::Vertical;

/// A single referral of a friend by an existing referrer
///
/// Immutable once created: the workflow defines no update or delete
/// operations for referrals. Always linked to exactly one [`Referrer`]
/// through `referrer_id`.
///
/// [`Referrer`]: super::referrer::Referrer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Referral {
    /// Unique identifier for the referral
    pub id: Uuid,

    /// Owning referrer identity
    pub referrer_id: Uuid,

    /// Referred friend's name
    pub friend_name: String,

    /// Referred friend's email
    pub friend_email: String,

    /// Referred friend's phone
    pub friend_phone: String,

    /// Program vertical the friend is referred into
    pub vertical: Vertical,

    /// Timestamp when the referral was created
    pub created_at: DateTime<Utc>,
}

impl Referral {
    /// Creates a new Referral linked to the given referrer, timestamped now
    pub fn new(
        referrer_id: Uuid,
        friend_name: impl Into<String>,
        friend_email: impl Into<String>,
        friend_phone: impl Into<String>,
        vertical: Vertical,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            referrer_id,
            friend_name: friend_name.into(),
            friend_email: friend_email.into(),
            friend_phone: friend_phone.into(),
            vertical,
            created_at: Utc::now(),
        }
    }
}
