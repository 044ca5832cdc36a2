//! Referral submission service
//!
//! Orchestrates the full submission workflow: payload validation,
//! idempotent referrer identity resolution, referral persistence, and
//! decoupled friend notification.

pub mod service;
pub mod validator;

#[cfg(test)]
mod tests;

pub use service::ReferralService;
pub use validator::validate;
