//! Domain entities

pub mod referral;
pub mod referrer;
pub mod vertical;

pub use referral::Referral;
pub use referrer::{normalize_email, Referrer};
pub use vertical::Vertical;
