//! CORS middleware configuration for cross-origin requests.
//!
//! Development allows any origin so local frontends can hit the API
//! directly; production restricts origins to the configured list.

use actix_cors::Cors;
use actix_web::http::{header, Method};
use std::env;

use rf_shared::config::Environment;

/// Creates a CORS middleware instance configured for the given environment.
///
/// # Environment Variables
/// * `ALLOWED_ORIGINS` - Comma-separated list of allowed origins
///   (production only)
/// * `CORS_MAX_AGE` - Preflight cache lifetime in seconds (default: 3600)
pub fn create_cors(environment: &Environment) -> Cors {
    let max_age = env::var("CORS_MAX_AGE")
        .unwrap_or_else(|_| "3600".to_string())
        .parse::<usize>()
        .unwrap_or(3600);

    match environment {
        Environment::Production => create_production_cors(max_age),
        _ => create_development_cors(max_age),
    }
}

fn create_development_cors(max_age: usize) -> Cors {
    tracing::info!("Configuring CORS for development environment");

    Cors::default()
        .allow_any_origin()
        .allowed_methods(vec![Method::GET, Method::POST, Method::OPTIONS])
        .allowed_headers(vec![
            header::ACCEPT,
            header::CONTENT_TYPE,
            header::ORIGIN,
            header::USER_AGENT,
            header::HeaderName::from_static("x-requested-with"),
        ])
        .max_age(max_age)
}

fn create_production_cors(max_age: usize) -> Cors {
    tracing::info!("Configuring CORS for production environment");

    let mut cors = Cors::default()
        .allowed_methods(vec![Method::GET, Method::POST, Method::OPTIONS])
        .allowed_headers(vec![header::ACCEPT, header::CONTENT_TYPE])
        .max_age(max_age);

    if let Ok(allowed_origins) = env::var("ALLOWED_ORIGINS") {
        for origin in allowed_origins.split(',').map(|s| s.trim()) {
            if !origin.is_empty() {
                tracing::info!(origin = %origin, "Adding allowed CORS origin");
                cors = cors.allowed_origin(origin);
            }
        }
    }

    cors
}
