//! # HTTP API Layer
//!
//! actix-web boundary for the referral workflow: request/response DTOs,
//! route handlers, error-to-status mapping, and middleware. Exposed as a
//! library so integration tests can assemble the app with test doubles.

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;

pub use routes::AppState;
