//! Authentication configuration

use serde::{Deserialize, Serialize};

/// JWT authentication configuration
///
/// Access and refresh tokens are signed with independent secrets so that a
/// leaked access secret cannot be used to mint refresh tokens. The refresh
/// token lifetime is a compiled constant in the core crate; only the access
/// token lifetime is environment-driven.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct JwtConfig {
    /// Secret key for signing access tokens
    pub access_secret: String,

    /// Secret key for signing refresh tokens
    pub refresh_secret: String,

    /// Access token expiry time in seconds
    pub access_token_expiry: i64,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            access_secret: String::from("dev-access-secret-change-in-production"),
            refresh_secret: String::from("dev-refresh-secret-change-in-production"),
            access_token_expiry: 900, // 15 minutes
        }
    }
}

impl JwtConfig {
    /// Create a new JWT configuration with explicit secrets
    pub fn new(access_secret: impl Into<String>, refresh_secret: impl Into<String>) -> Self {
        Self {
            access_secret: access_secret.into(),
            refresh_secret: refresh_secret.into(),
            ..Default::default()
        }
    }

    /// Set access token expiry in minutes
    pub fn with_access_expiry_minutes(mut self, minutes: i64) -> Self {
        self.access_token_expiry = minutes * 60;
        self
    }

    /// Create from environment variables
    ///
    /// Reads `JWT_ACCESS_SECRET`, `JWT_REFRESH_SECRET` and
    /// `JWT_ACCESS_TOKEN_EXPIRY` (seconds), falling back to development
    /// defaults when unset.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let access_secret =
            std::env::var("JWT_ACCESS_SECRET").unwrap_or(defaults.access_secret);
        let refresh_secret =
            std::env::var("JWT_REFRESH_SECRET").unwrap_or(defaults.refresh_secret);
        let access_token_expiry = std::env::var("JWT_ACCESS_TOKEN_EXPIRY")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.access_token_expiry);

        Self {
            access_secret,
            refresh_secret,
            access_token_expiry,
        }
    }

    /// Check if either secret is still a development default (security warning)
    pub fn is_using_default_secret(&self) -> bool {
        let defaults = Self::default();
        self.access_secret == defaults.access_secret
            || self.refresh_secret == defaults.refresh_secret
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_jwt_config_default() {
        let config = JwtConfig::default();
        assert_eq!(config.access_token_expiry, 900);
        assert!(config.is_using_default_secret());
        assert_ne!(config.access_secret, config.refresh_secret);
    }

    #[test]
    fn test_jwt_config_builder() {
        let config = JwtConfig::new("access", "refresh").with_access_expiry_minutes(30);

        assert_eq!(config.access_token_expiry, 1800);
        assert!(!config.is_using_default_secret());
    }
}
