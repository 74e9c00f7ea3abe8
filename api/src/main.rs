use actix_web::{web, HttpServer};
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use wl_api::app::create_app;
use wl_api::routes::auth::AppState;
use wl_core::services::auth::{AuthService, AuthServiceConfig};
use wl_core::services::credential::CredentialService;
use wl_core::services::otp::{OtpService, OtpServiceConfig};
use wl_core::services::token::{TokenService, TokenServiceConfig};
use wl_infra::cache::{RedisCacheService, RedisClient};
use wl_infra::database::mysql::{
    MySqlCredentialRepository, MySqlOneTimeSecretRepository, MySqlSessionRepository,
    MySqlUserRepository,
};
use wl_infra::database::DatabasePool;
use wl_shared::config::AppConfig;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize structured logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    info!("Starting WorkLine API server");

    let config = AppConfig::from_env();
    if config.environment.is_production() && config.jwt.is_using_default_secret() {
        warn!("JWT secrets are development defaults; set JWT_ACCESS_SECRET and JWT_REFRESH_SECRET");
    }

    // Infrastructure
    let database = DatabasePool::new(&config.database).await?;
    database.health_check().await?;
    let redis_client = RedisClient::new(&config.cache).await?;
    let cache_service = Arc::new(RedisCacheService::new(redis_client));

    // Repositories
    let user_repository = Arc::new(MySqlUserRepository::new(database.pool().clone()));
    let credential_repository = Arc::new(MySqlCredentialRepository::new(database.pool().clone()));
    let session_repository = Arc::new(MySqlSessionRepository::new(database.pool().clone()));
    let secret_repository = Arc::new(MySqlOneTimeSecretRepository::new(database.pool().clone()));

    // Services
    let token_service = Arc::new(
        TokenService::new(TokenServiceConfig::from(&config.jwt))
            .map_err(|e| anyhow::anyhow!("Invalid token configuration: {}", e))?,
    );
    let credential_service = Arc::new(CredentialService::new(credential_repository));
    let otp_service = Arc::new(OtpService::new(
        user_repository.clone(),
        secret_repository,
        cache_service.clone(),
        OtpServiceConfig::default(),
    ));
    let auth_service = Arc::new(AuthService::new(
        user_repository,
        credential_service,
        otp_service,
        token_service.clone(),
        session_repository,
        cache_service,
        AuthServiceConfig::default(),
    ));

    let app_state = web::Data::new(AppState { auth_service });
    let token_data = web::Data::from(token_service);

    let bind_address = config.server.bind_address();
    info!(address = %bind_address, "Binding HTTP server");

    HttpServer::new(move || create_app(app_state.clone(), token_data.clone()))
        .bind(&bind_address)?
        .run()
        .await?;

    Ok(())
}
