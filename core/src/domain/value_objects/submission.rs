//! Transient values flowing through the referral submission workflow.
//!
//! None of these types are persisted. `ReferralPayload` is the raw wire
//! input, `ValidatedReferral` the normalized output of validation, and
//! `Submission` the terminal result pairing the persisted referral with
//! the independently reported notification outcome.

use serde::{Deserialize, Serialize};

use crate::domain::entities::{Referral, Vertical};

/// Raw referral submission fields, exactly as received from the caller
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReferralPayload {
    /// Referrer's display name
    pub user_name: String,
    /// Referrer's email (identity key before normalization)
    pub user_email: String,
    /// Referrer's contact phone
    pub user_phone: String,
    /// Friend's display name
    pub friend_name: String,
    /// Friend's email (notification recipient)
    pub friend_email: String,
    /// Friend's contact phone
    pub friend_phone: String,
    /// Requested program vertical
    pub vertical: String,
}

/// Normalized fields produced by a successful validation pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedReferral {
    pub user_name: String,
    /// Normalized (trimmed, lowercased) referrer email
    pub user_email: String,
    pub user_phone: String,
    pub friend_name: String,
    /// Normalized friend email
    pub friend_email: String,
    pub friend_phone: String,
    pub vertical: Vertical,
}

/// Result of a single notification send attempt
///
/// Notification failures never unwind the persisted referral; they are
/// captured here and surfaced alongside it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationOutcome {
    /// Whether the message was handed to the transport successfully
    pub delivered: bool,

    /// Transport message identifier, when delivered
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_id: Option<String>,

    /// Failure cause, when not delivered
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl NotificationOutcome {
    /// A successful send with the transport's message identifier
    pub fn delivered(message_id: impl Into<String>) -> Self {
        Self {
            delivered: true,
            message_id: Some(message_id.into()),
            error: None,
        }
    }

    /// A failed send with the captured cause
    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            delivered: false,
            message_id: None,
            error: Some(error.into()),
        }
    }
}

/// Terminal state of a referral submission
///
/// Persistence and notification are not one atomic unit: `referral` is
/// committed before the send attempt, so a `Submission` with a failed
/// `notification` still represents a recorded referral.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Submission {
    /// The persisted referral record
    pub referral: Referral,

    /// Outcome of the single notification attempt
    pub notification: NotificationOutcome,
}
