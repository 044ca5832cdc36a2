//! Referral submission routes.

pub mod submit;
