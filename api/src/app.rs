//! Application factory
//!
//! Builds the Actix-web application with all routes and middleware wired.

use actix_web::{
    body::MessageBody,
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    web, App, Error, HttpResponse,
};
use tracing_actix_web::TracingLogger;

use crate::middleware::cors::create_cors;
use crate::routes::auth::{
    login::login, logout::logout, me::me, refresh::refresh, register::register,
    send_otp::send_otp, verify_otp::verify_otp, AppState,
};

use wl_core::repositories::{
    CredentialRepository, OneTimeSecretRepository, SessionRepository, UserRepository,
};
use wl_core::services::otp::CacheServiceTrait;
use wl_core::services::token::TokenService;

/// Create and configure the application with all dependencies
pub fn create_app<U, C, S, O, K>(
    app_state: web::Data<AppState<U, C, S, O, K>>,
    token_service: web::Data<TokenService>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = Error,
        InitError = (),
    >,
>
where
    U: UserRepository + 'static,
    C: CredentialRepository + 'static,
    S: SessionRepository + 'static,
    O: OneTimeSecretRepository + 'static,
    K: CacheServiceTrait + 'static,
{
    let cors = create_cors();

    App::new()
        // Shared state: the auth service and the token service the
        // AuthContext extractor verifies against
        .app_data(app_state)
        .app_data(token_service)
        .wrap(TracingLogger::default())
        .wrap(cors)
        // Health check endpoint
        .route("/health", web::get().to(health_check))
        // API v1 routes
        .service(
            web::scope("/api/v1").service(
                web::scope("/auth")
                    .route("/register", web::post().to(register::<U, C, S, O, K>))
                    .route("/login", web::post().to(login::<U, C, S, O, K>))
                    .route("/send-otp", web::post().to(send_otp::<U, C, S, O, K>))
                    .route("/verify-otp", web::post().to(verify_otp::<U, C, S, O, K>))
                    .route("/refresh", web::post().to(refresh::<U, C, S, O, K>))
                    .route("/logout", web::post().to(logout::<U, C, S, O, K>))
                    .route("/me", web::get().to(me)),
            ),
        )
        // Default 404 handler
        .default_service(web::route().to(not_found))
}

/// Health check endpoint handler
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "workline-api",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// Default 404 handler
async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(serde_json::json!({
        "error": "not_found",
        "message": "The requested resource was not found"
    }))
}
