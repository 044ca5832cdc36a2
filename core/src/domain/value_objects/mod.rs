//! Value objects: transient request and result types

pub mod submission;

pub use submission::{NotificationOutcome, ReferralPayload, Submission, ValidatedReferral};
