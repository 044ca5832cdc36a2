//! Configuration module with business-specific sub-modules
//!
//! This module organizes configuration into logical areas:
//! - `database` - Database connection and pool configuration
//! - `email` - Outbound mail (SMTP) configuration
//! - `environment` - Environment detection and error-exposure policy
//! - `server` - HTTP server configuration

pub mod database;
pub mod email;
pub mod environment;
pub mod server;

use serde::{Deserialize, Serialize};

// Re-export commonly used types
pub use database::DatabaseConfig;
pub use email::EmailConfig;
pub use environment::Environment;
pub use server::ServerConfig;

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    /// Environment configuration
    pub environment: Environment,

    /// Server configuration
    pub server: ServerConfig,

    /// Database configuration
    pub database: DatabaseConfig,

    /// Outbound email configuration
    pub email: EmailConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            environment: Environment::default(),
            server: ServerConfig::default(),
            database: DatabaseConfig::default(),
            email: EmailConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// Each sub-configuration reads its own variables and falls back to
    /// development defaults where a value is absent. Credential validation
    /// is deferred to the services that consume them (fail fast at
    /// construction, not at load).
    pub fn from_env() -> Self {
        Self {
            environment: Environment::from_env(),
            server: ServerConfig::from_env(),
            database: DatabaseConfig::from_env(),
            email: EmailConfig::from_env(),
        }
    }
}
