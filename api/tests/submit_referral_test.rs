//! Integration tests for the referral submission endpoint.

use std::sync::Arc;

use actix_web::{test, web, App};

use rf_api::{routes, AppState};
use rf_core::repositories::{MockReferralRepository, MockReferrerRepository};
use rf_core::services::{NotificationService, ReferralService};
use rf_infra::MockMailer;
use rf_shared::config::Environment;

type TestState = AppState<MockReferrerRepository, MockReferralRepository, MockMailer>;

struct TestContext {
    referrers: Arc<MockReferrerRepository>,
    referrals: Arc<MockReferralRepository>,
    state: web::Data<TestState>,
}

fn build_context(mailer: MockMailer) -> TestContext {
    let referrers = Arc::new(MockReferrerRepository::new());
    let referrals = Arc::new(MockReferralRepository::new());

    let service = ReferralService::new(
        Arc::clone(&referrers),
        Arc::clone(&referrals),
        NotificationService::new(Arc::new(mailer)),
    );

    TestContext {
        referrers,
        referrals,
        state: web::Data::new(AppState {
            referral_service: Arc::new(service),
            environment: Environment::Development,
        }),
    }
}

fn valid_body() -> serde_json::Value {
    serde_json::json!({
        "userName": "Jane Doe",
        "userEmail": "jane@example.com",
        "userPhone": "0412345678",
        "friendName": "Sam Lee",
        "friendEmail": "sam@example.com",
        "friendPhone": "0498765432",
        "vertical": "Data Science"
    })
}

macro_rules! test_app {
    ($ctx:expr) => {
        test::init_service(
            App::new().app_data($ctx.state.clone()).configure(
                routes::configure::<MockReferrerRepository, MockReferralRepository, MockMailer>,
            ),
        )
        .await
    };
}

#[actix_rt::test]
async fn test_submit_referral_created() {
    let ctx = build_context(MockMailer::new());
    let app = test_app!(ctx);

    let req = test::TestRequest::post()
        .uri("/api/v1/referrals")
        .set_json(valid_body())
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 201);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["referral"]["friendName"], "Sam Lee");
    assert_eq!(body["data"]["referral"]["vertical"], "Data Science");
    assert_eq!(body["data"]["notification"]["delivered"], true);

    assert_eq!(ctx.referrers.count().await, 1);
    assert_eq!(ctx.referrals.count().await, 1);
}

#[actix_rt::test]
async fn test_submit_referral_validation_failure_lists_every_field() {
    let ctx = build_context(MockMailer::new());
    let app = test_app!(ctx);

    let req = test::TestRequest::post()
        .uri("/api/v1/referrals")
        .set_json(serde_json::json!({}))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 400);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "VALIDATION_FAILED");

    let fields = body["details"]["fields"].as_object().unwrap();
    for field in [
        "userName",
        "userEmail",
        "userPhone",
        "friendName",
        "friendEmail",
        "friendPhone",
        "vertical",
    ] {
        assert!(fields.contains_key(field), "missing error for {field}");
    }

    assert_eq!(ctx.referrers.count().await, 0);
    assert_eq!(ctx.referrals.count().await, 0);
}

#[actix_rt::test]
async fn test_submit_referral_invalid_email_rejected() {
    let ctx = build_context(MockMailer::new());
    let app = test_app!(ctx);

    let mut body = valid_body();
    body["friendEmail"] = serde_json::json!("not-an-email");

    let req = test::TestRequest::post()
        .uri("/api/v1/referrals")
        .set_json(body)
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 400);

    let body: serde_json::Value = test::read_body_json(resp).await;
    let fields = body["details"]["fields"].as_object().unwrap();
    assert_eq!(fields.len(), 1);
    assert_eq!(fields["friendEmail"][0], "Invalid email format");
}

#[actix_rt::test]
async fn test_repeat_submission_reuses_referrer_identity() {
    let ctx = build_context(MockMailer::new());
    let app = test_app!(ctx);

    let req = test::TestRequest::post()
        .uri("/api/v1/referrals")
        .set_json(valid_body())
        .to_request();
    let first: serde_json::Value = test::call_and_read_body_json(&app, req).await;

    let mut second_body = valid_body();
    second_body["userEmail"] = serde_json::json!("  JANE@Example.com ");
    second_body["friendEmail"] = serde_json::json!("alex@example.com");
    second_body["friendName"] = serde_json::json!("Alex Kim");

    let req = test::TestRequest::post()
        .uri("/api/v1/referrals")
        .set_json(second_body)
        .to_request();
    let second: serde_json::Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(
        first["data"]["referral"]["referrerId"],
        second["data"]["referral"]["referrerId"]
    );
    assert_eq!(ctx.referrers.count().await, 1);
    assert_eq!(ctx.referrals.count().await, 2);
}

#[actix_rt::test]
async fn test_notification_failure_returns_error_with_persisted_referral() {
    let ctx = build_context(MockMailer::failing());
    let app = test_app!(ctx);

    let req = test::TestRequest::post()
        .uri("/api/v1/referrals")
        .set_json(valid_body())
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 500);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "NOTIFICATION_FAILED");
    assert_eq!(body["details"]["referral"]["friendName"], "Sam Lee");

    // The referral is recorded even though the email failed
    assert_eq!(ctx.referrals.count().await, 1);
}

#[actix_rt::test]
async fn test_health_check() {
    let ctx = build_context(MockMailer::new());
    let app = test_app!(ctx);

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 200);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["service"], "refer-ease-api");
}
