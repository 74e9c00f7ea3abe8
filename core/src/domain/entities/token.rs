//! Token claims for JWT-based authentication.

use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::user::User;

/// Default access token expiration time (15 minutes)
pub const DEFAULT_ACCESS_TOKEN_EXPIRY_SECONDS: i64 = 900;

/// Refresh token expiration time (30 days)
///
/// Deliberately a compiled constant rather than configuration: it must stay
/// strictly longer than any configured access-token lifetime, which the
/// token service enforces at construction.
pub const REFRESH_TOKEN_EXPIRY_DAYS: i64 = 30;

/// JWT issuer
pub const JWT_ISSUER: &str = "workline";

/// JWT audience
pub const JWT_AUDIENCE: &str = "workline-api";

/// Claims carried by an access token
///
/// Access tokens are short-lived and validated statelessly: nothing here is
/// cross-checked against the session store at verification time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessClaims {
    /// Subject (user ID)
    pub sub: String,

    /// Primary email contact, if known
    pub email: Option<String>,

    /// Account type ("WORKER" or "EMPLOYER"), if chosen
    pub account_type: Option<String>,

    /// Session the token was issued under
    pub session_id: String,

    /// Issued at timestamp
    pub iat: i64,

    /// Not before timestamp
    pub nbf: i64,

    /// Expiration timestamp
    pub exp: i64,

    /// Issuer
    pub iss: String,

    /// Audience
    pub aud: String,

    /// JWT ID (unique identifier for the token)
    pub jti: String,
}

impl AccessClaims {
    /// Creates access-token claims for a user and session
    pub fn new(user: &User, session_id: &str, expiry_seconds: i64) -> Self {
        let now = Utc::now();
        let expiry = now + Duration::seconds(expiry_seconds);

        Self {
            sub: user.id.to_string(),
            email: user.email.clone(),
            account_type: user.account_type.map(|t| t.as_str().to_string()),
            session_id: session_id.to_string(),
            iat: now.timestamp(),
            nbf: now.timestamp(),
            exp: expiry.timestamp(),
            iss: JWT_ISSUER.to_string(),
            aud: JWT_AUDIENCE.to_string(),
            jti: Uuid::new_v4().to_string(),
        }
    }

    /// Checks if the claims have expired
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() >= self.exp
    }

    /// Gets the user ID from the claims
    pub fn user_id(&self) -> Result<Uuid, uuid::Error> {
        Uuid::parse_str(&self.sub)
    }
}

/// Claims carried by a refresh token
///
/// A refresh token is only ever exchanged for a new session; its claims are
/// the minimum needed to locate the session row it belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefreshClaims {
    /// Subject (user ID)
    pub sub: String,

    /// Session the token belongs to
    pub session_id: String,

    /// Issued at timestamp
    pub iat: i64,

    /// Not before timestamp
    pub nbf: i64,

    /// Expiration timestamp
    pub exp: i64,

    /// Issuer
    pub iss: String,

    /// Audience
    pub aud: String,

    /// JWT ID (unique identifier for the token)
    pub jti: String,
}

impl RefreshClaims {
    /// Creates refresh-token claims for a user and session
    pub fn new(user_id: Uuid, session_id: &str) -> Self {
        let now = Utc::now();
        let expiry = now + Duration::days(REFRESH_TOKEN_EXPIRY_DAYS);

        Self {
            sub: user_id.to_string(),
            session_id: session_id.to_string(),
            iat: now.timestamp(),
            nbf: now.timestamp(),
            exp: expiry.timestamp(),
            iss: JWT_ISSUER.to_string(),
            aud: JWT_AUDIENCE.to_string(),
            jti: Uuid::new_v4().to_string(),
        }
    }

    /// Gets the user ID from the claims
    pub fn user_id(&self) -> Result<Uuid, uuid::Error> {
        Uuid::parse_str(&self.sub)
    }
}

/// A freshly signed refresh token together with its storage hash
///
/// Callers persist the hash and hand the token string to the client; the
/// raw token must never be stored.
#[derive(Debug, Clone)]
pub struct SignedRefreshToken {
    /// The signed refresh token
    pub token: String,

    /// SHA-256 hash (hex) of the token string
    pub token_hash: String,
}
