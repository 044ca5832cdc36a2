use std::sync::Arc;

use actix_web::{middleware::Logger, web, App, HttpResponse, HttpServer};
use tracing_subscriber::EnvFilter;

use rf_api::{middleware, routes, AppState};
use rf_core::services::{NotificationService, ReferralService};
use rf_infra::{DatabasePool, MySqlReferralRepository, MySqlReferrerRepository, SmtpMailer};
use rf_shared::config::AppConfig;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = AppConfig::from_env();
    tracing::info!(environment = %config.environment, "Starting ReferEase API server");

    let pool = DatabasePool::new(&config.database).await?;

    let referrer_repository = Arc::new(MySqlReferrerRepository::new(pool.get_pool().clone()));
    let referral_repository = Arc::new(MySqlReferralRepository::new(pool.get_pool().clone()));

    // Missing SMTP credentials abort startup here instead of surfacing on
    // the first submission
    let mailer = Arc::new(SmtpMailer::new(&config.email)?);

    let referral_service = Arc::new(ReferralService::new(
        referrer_repository,
        referral_repository,
        NotificationService::new(mailer),
    ));

    let bind_address = config.server.bind_address();
    let workers = config.server.workers;
    let environment = config.environment;

    tracing::info!(address = %bind_address, "Binding HTTP server");

    let mut server = HttpServer::new(move || {
        let cors = middleware::cors::create_cors(&environment);

        App::new()
            .wrap(Logger::default())
            .wrap(cors)
            .app_data(web::Data::new(AppState {
                referral_service: Arc::clone(&referral_service),
                environment,
            }))
            .configure(
                routes::configure::<MySqlReferrerRepository, MySqlReferralRepository, SmtpMailer>,
            )
            .default_service(web::route().to(not_found))
    });

    if workers > 0 {
        server = server.workers(workers);
    }

    server.bind(&bind_address)?.run().await?;

    pool.close().await;
    Ok(())
}

async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(serde_json::json!({
        "error": "NOT_FOUND",
        "message": "The requested resource was not found"
    }))
}
