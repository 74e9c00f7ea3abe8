//! Main token service implementation

use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use rand::rngs::OsRng;
use rand::Rng;
use sha2::{Digest, Sha256};
use uuid::Uuid;

use crate::domain::entities::session::SESSION_ID_LENGTH;
use crate::domain::entities::token::{
    AccessClaims, RefreshClaims, SignedRefreshToken, JWT_AUDIENCE, JWT_ISSUER,
    REFRESH_TOKEN_EXPIRY_DAYS,
};
use crate::domain::entities::user::User;
use crate::errors::{DomainError, DomainResult};

use super::config::TokenServiceConfig;

/// Stateless service for signing and verifying JWT tokens
///
/// Access and refresh tokens are signed with independent HS256 secrets and
/// independent lifetimes. The service keeps no state of its own: refresh
/// tokens are cross-checked against the session store by the caller, access
/// tokens are not cross-checked at all.
pub struct TokenService {
    config: TokenServiceConfig,
    access_encoding_key: EncodingKey,
    access_decoding_key: DecodingKey,
    refresh_encoding_key: EncodingKey,
    refresh_decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenService {
    /// Creates a new token service instance
    ///
    /// # Errors
    ///
    /// Fails when the configured access lifetime is not strictly shorter
    /// than the fixed refresh lifetime.
    pub fn new(config: TokenServiceConfig) -> Result<Self, DomainError> {
        let refresh_expiry_seconds = REFRESH_TOKEN_EXPIRY_DAYS * 24 * 60 * 60;
        if config.access_token_expiry_seconds <= 0
            || config.access_token_expiry_seconds >= refresh_expiry_seconds
        {
            return Err(DomainError::internal(format!(
                "Access token expiry ({}s) must be positive and shorter than the refresh lifetime ({}s)",
                config.access_token_expiry_seconds, refresh_expiry_seconds
            )));
        }

        let access_encoding_key = EncodingKey::from_secret(config.access_secret.as_bytes());
        let access_decoding_key = DecodingKey::from_secret(config.access_secret.as_bytes());
        let refresh_encoding_key = EncodingKey::from_secret(config.refresh_secret.as_bytes());
        let refresh_decoding_key = DecodingKey::from_secret(config.refresh_secret.as_bytes());

        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[JWT_ISSUER]);
        validation.set_audience(&[JWT_AUDIENCE]);
        validation.validate_exp = true;
        validation.validate_nbf = true;

        Ok(Self {
            config,
            access_encoding_key,
            access_decoding_key,
            refresh_encoding_key,
            refresh_decoding_key,
            validation,
        })
    }

    /// Access token lifetime in seconds
    pub fn access_token_expiry_seconds(&self) -> i64 {
        self.config.access_token_expiry_seconds
    }

    /// Signs an access token for a user and session
    pub fn sign_access(&self, user: &User, session_id: &str) -> DomainResult<String> {
        let claims = AccessClaims::new(user, session_id, self.config.access_token_expiry_seconds);
        let header = Header::new(Algorithm::HS256);

        encode(&header, &claims, &self.access_encoding_key)
            .map_err(|e| DomainError::internal(format!("Failed to sign access token: {}", e)))
    }

    /// Verifies an access token and returns the claims
    ///
    /// # Returns
    ///
    /// * `Ok(AccessClaims)` - The decoded claims if valid
    /// * `Err(DomainError::Unauthorized)` - Bad signature, expired, or malformed
    pub fn verify_access(&self, token: &str) -> DomainResult<AccessClaims> {
        decode::<AccessClaims>(token, &self.access_decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|_| DomainError::unauthorized("Invalid or expired access token"))
    }

    /// Signs a refresh token for a user and session
    ///
    /// Also computes the SHA-256 hash of the token string. Callers persist
    /// the hash; the raw token goes to the client and nowhere else.
    pub fn sign_refresh(&self, user_id: Uuid, session_id: &str) -> DomainResult<SignedRefreshToken> {
        let claims = RefreshClaims::new(user_id, session_id);
        let header = Header::new(Algorithm::HS256);

        let token = encode(&header, &claims, &self.refresh_encoding_key)
            .map_err(|e| DomainError::internal(format!("Failed to sign refresh token: {}", e)))?;
        let token_hash = Self::hash_token(&token);

        Ok(SignedRefreshToken { token, token_hash })
    }

    /// Verifies a refresh token and returns the claims
    ///
    /// # Returns
    ///
    /// * `Ok(RefreshClaims)` - The decoded claims if valid
    /// * `Err(DomainError::Unauthorized)` - Bad signature, expired, or malformed
    pub fn verify_refresh(&self, token: &str) -> DomainResult<RefreshClaims> {
        decode::<RefreshClaims>(token, &self.refresh_decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|_| DomainError::unauthorized("Invalid or expired refresh token"))
    }

    /// Generates an opaque random session identifier
    ///
    /// 32 alphanumeric characters from the OS CSPRNG, comfortably above the
    /// 16 bytes of entropy a session key needs.
    pub fn generate_session_id(&self) -> String {
        let mut rng = OsRng;
        (0..SESSION_ID_LENGTH)
            .map(|_| {
                let idx = rng.gen_range(0..62);
                match idx {
                    0..10 => (b'0' + idx) as char,
                    10..36 => (b'a' + idx - 10) as char,
                    36..62 => (b'A' + idx - 36) as char,
                    _ => unreachable!(),
                }
            })
            .collect()
    }

    /// Hashes a token for secure storage
    pub fn hash_token(token: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(token.as_bytes());
        hex::encode(hasher.finalize())
    }
}
