//! Request and response data transfer objects.

pub mod referral;

pub use referral::{ReferralDto, SubmitReferralRequest, SubmitReferralResponse};
