//! # Core Domain Layer
//!
//! Business logic for the ReferEase referral workflow: domain entities,
//! repository contracts, the referral submission service, the friend
//! notification service, and the error taxonomy. This crate is free of
//! HTTP, database, and mail-transport dependencies; those capabilities
//! are injected through the traits defined here.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

pub use errors::{DomainError, DomainResult, ErrorKind};
