//! Route handlers and application state.

pub mod health;
pub mod referral;

use std::sync::Arc;

use actix_web::web;

use rf_core::repositories::{ReferralRepository, ReferrerRepository};
use rf_core::services::{MailTransport, ReferralService};
use rf_shared::config::Environment;

/// Application state shared across handlers
pub struct AppState<R, L, T>
where
    R: ReferrerRepository,
    L: ReferralRepository,
    T: MailTransport,
{
    pub referral_service: Arc<ReferralService<R, L, T>>,
    pub environment: Environment,
}

/// Register the versioned API routes for concrete state types
pub fn configure<R, L, T>(cfg: &mut web::ServiceConfig)
where
    R: ReferrerRepository + 'static,
    L: ReferralRepository + 'static,
    T: MailTransport + 'static,
{
    cfg.route("/health", web::get().to(health::health_check))
        .service(
            web::scope("/api/v1")
                .route("/referrals", web::post().to(referral::submit::submit_referral::<R, L, T>)),
        );
}
