//! HTTP-level tests for the authentication routes against in-memory infrastructure

use actix_web::{http::StatusCode, test, web};
use std::sync::Arc;

use wl_api::app::create_app;
use wl_api::routes::auth::AppState;
use wl_core::repositories::{
    InMemoryCredentialRepository, InMemoryOneTimeSecretRepository, InMemorySessionRepository,
    InMemoryUserRepository,
};
use wl_core::services::auth::{AuthService, AuthServiceConfig};
use wl_core::services::credential::CredentialService;
use wl_core::services::otp::{MemoryCacheService, OtpService, OtpServiceConfig};
use wl_core::services::token::{TokenService, TokenServiceConfig};

type TestAppState = AppState<
    InMemoryUserRepository,
    InMemoryCredentialRepository,
    InMemorySessionRepository,
    InMemoryOneTimeSecretRepository,
    MemoryCacheService,
>;

fn test_state() -> (web::Data<TestAppState>, web::Data<TokenService>) {
    let users = Arc::new(InMemoryUserRepository::new());
    let cache = Arc::new(MemoryCacheService::new());
    let token_service = Arc::new(TokenService::new(TokenServiceConfig::default()).unwrap());

    let auth_service = Arc::new(AuthService::new(
        users.clone(),
        Arc::new(CredentialService::new(Arc::new(
            InMemoryCredentialRepository::new(),
        ))),
        Arc::new(OtpService::new(
            users,
            Arc::new(InMemoryOneTimeSecretRepository::new()),
            cache.clone(),
            OtpServiceConfig::default(),
        )),
        token_service.clone(),
        Arc::new(InMemorySessionRepository::new()),
        cache,
        AuthServiceConfig::default(),
    ));

    (
        web::Data::new(AppState { auth_service }),
        web::Data::from(token_service),
    )
}

fn register_body() -> serde_json::Value {
    serde_json::json!({
        "email": "alice@example.com",
        "password": "Secret123!",
        "account_type": "WORKER",
        "first_name": "Alice"
    })
}

#[actix_rt::test]
async fn test_register_login_refresh_logout_flow() {
    let (state, tokens) = test_state();
    let app = test::init_service(create_app(state, tokens)).await;

    // Register
    let req = test::TestRequest::post()
        .uri("/api/v1/auth/register")
        .set_json(register_body())
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["expires_in"], 900);
    assert_eq!(body["user"]["email"], "alice@example.com");
    let refresh_token = body["refresh_token"].as_str().unwrap().to_string();
    assert!(!refresh_token.is_empty());

    // Duplicate registration conflicts
    let req = test::TestRequest::post()
        .uri("/api/v1/auth/register")
        .set_json(register_body())
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    // Login with the wrong password is a generic 401
    let req = test::TestRequest::post()
        .uri("/api/v1/auth/login")
        .set_json(serde_json::json!({
            "email": "alice@example.com",
            "password": "WrongPass!"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Invalid email or password");

    // Refresh rotates the token
    let req = test::TestRequest::post()
        .uri("/api/v1/auth/refresh")
        .set_json(serde_json::json!({ "refresh_token": refresh_token }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = test::read_body_json(resp).await;
    let rotated = body["refresh_token"].as_str().unwrap().to_string();
    assert_ne!(rotated, refresh_token);

    // Replaying the stale token fails with the generic message
    let req = test::TestRequest::post()
        .uri("/api/v1/auth/refresh")
        .set_json(serde_json::json!({ "refresh_token": refresh_token }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Invalid or expired refresh token");

    // Logout is idempotent
    for _ in 0..2 {
        let req = test::TestRequest::post()
            .uri("/api/v1/auth/logout")
            .set_json(serde_json::json!({ "refresh_token": rotated }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], true);
    }
}

#[actix_rt::test]
async fn test_register_validation_failure() {
    let (state, tokens) = test_state();
    let app = test::init_service(create_app(state, tokens)).await;

    let req = test::TestRequest::post()
        .uri("/api/v1/auth/register")
        .set_json(serde_json::json!({
            "email": "not-an-email",
            "password": "short",
            "account_type": "WORKER"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "validation_failed");
}

#[actix_rt::test]
async fn test_me_requires_valid_bearer_token() {
    let (state, tokens) = test_state();
    let app = test::init_service(create_app(state, tokens)).await;

    // No Authorization header
    let req = test::TestRequest::get().uri("/api/v1/auth/me").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    // Register to obtain an access token
    let req = test::TestRequest::post()
        .uri("/api/v1/auth/register")
        .set_json(register_body())
        .to_request();
    let resp = test::call_service(&app, req).await;
    let body: serde_json::Value = test::read_body_json(resp).await;
    let access_token = body["access_token"].as_str().unwrap().to_string();

    let req = test::TestRequest::get()
        .uri("/api/v1/auth/me")
        .insert_header(("Authorization", format!("Bearer {}", access_token)))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["email"], "alice@example.com");
    assert_eq!(body["account_type"], "WORKER");

    // Garbage token is rejected
    let req = test::TestRequest::get()
        .uri("/api/v1/auth/me")
        .insert_header(("Authorization", "Bearer garbage"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[actix_rt::test]
async fn test_send_otp_requires_matching_identifier() {
    let (state, tokens) = test_state();
    let app = test::init_service(create_app(state, tokens)).await;

    // MOBILE channel without a phone number
    let req = test::TestRequest::post()
        .uri("/api/v1/auth/send-otp")
        .set_json(serde_json::json!({ "channel": "MOBILE" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    // EMAIL channel with an email succeeds and never echoes the code
    let req = test::TestRequest::post()
        .uri("/api/v1/auth/send-otp")
        .set_json(serde_json::json!({
            "channel": "EMAIL",
            "email": "otp@example.com"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], true);
    assert!(!body["message"]
        .as_str()
        .unwrap()
        .chars()
        .any(|c| c.is_ascii_digit()));
}
