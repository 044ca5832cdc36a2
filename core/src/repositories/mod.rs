//! Repository traits defining persistence contracts for the domain layer
//!
//! Concrete implementations live in the infrastructure crate; in-memory
//! mocks live alongside each trait for tests.

pub mod referral;
pub mod referrer;

pub use referral::{MockReferralRepository, ReferralRepository};
pub use referrer::{MockReferrerRepository, ReferrerRepository};
