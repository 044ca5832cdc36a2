//! # Shared Module
//!
//! Cross-cutting types used by every layer of the ReferEase backend:
//! configuration, API response envelopes, and validation utilities.
//! This crate has no domain knowledge and no infrastructure dependencies.

pub mod config;
pub mod types;
pub mod utils;

pub use config::AppConfig;
pub use types::response::{ApiResponse, ErrorResponse};
pub use utils::validation::{ValidationError, ValidationErrors};
