//! Configuration for the token service

use wl_shared::config::JwtConfig;

use crate::domain::entities::token::DEFAULT_ACCESS_TOKEN_EXPIRY_SECONDS;

/// Configuration for the token service
///
/// Access and refresh tokens use independent secrets. The refresh lifetime
/// is a compiled constant (`REFRESH_TOKEN_EXPIRY_DAYS`), so only the access
/// lifetime appears here.
#[derive(Debug, Clone)]
pub struct TokenServiceConfig {
    /// Secret for signing access tokens
    pub access_secret: String,
    /// Secret for signing refresh tokens
    pub refresh_secret: String,
    /// Access token expiry in seconds
    pub access_token_expiry_seconds: i64,
}

impl Default for TokenServiceConfig {
    fn default() -> Self {
        Self {
            access_secret: "dev-access-secret-change-in-production".to_string(),
            refresh_secret: "dev-refresh-secret-change-in-production".to_string(),
            access_token_expiry_seconds: DEFAULT_ACCESS_TOKEN_EXPIRY_SECONDS,
        }
    }
}

impl From<&JwtConfig> for TokenServiceConfig {
    fn from(config: &JwtConfig) -> Self {
        Self {
            access_secret: config.access_secret.clone(),
            refresh_secret: config.refresh_secret.clone(),
            access_token_expiry_seconds: config.access_token_expiry,
        }
    }
}
