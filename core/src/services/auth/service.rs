//! Main authentication service implementation

use std::sync::Arc;

use crate::domain::entities::one_time_secret::OtpChannel;
use crate::domain::entities::session::Session;
use crate::domain::entities::user::{AccountType, User};
use crate::domain::value_objects::{AccessTokenIntrospection, AuthPayload, LogoutResult};
use crate::errors::{DomainError, DomainResult};
use crate::repositories::{
    CredentialRepository, OneTimeSecretRepository, SessionRepository, UserRepository,
};
use crate::services::credential::CredentialService;
use crate::services::otp::{CacheServiceTrait, OtpService, SendCodeResult};
use crate::services::token::TokenService;

use super::config::AuthServiceConfig;

/// Uniform message for every password-login failure; deliberately does not
/// distinguish "no such user" from "no credential" or "wrong password"
const INVALID_LOGIN_MESSAGE: &str = "Invalid email or password";

/// Uniform message for every refresh failure
const INVALID_REFRESH_MESSAGE: &str = "Invalid or expired refresh token";

/// Authentication service managing the complete session lifecycle
///
/// Every identity-establishing path (registration, password login, OTP
/// login, refresh) funnels through the single `issue_session` primitive so
/// that session creation semantics and auditability (user agent, IP) stay
/// uniform.
pub struct AuthService<U, C, S, O, K>
where
    U: UserRepository,
    C: CredentialRepository,
    S: SessionRepository,
    O: OneTimeSecretRepository,
    K: CacheServiceTrait,
{
    /// User repository for contact lookup and login bookkeeping
    user_repository: Arc<U>,
    /// Credential service for password hashing and verification
    credential_service: Arc<CredentialService<C>>,
    /// One-time-code issuer for passwordless login
    otp_service: Arc<OtpService<U, O, K>>,
    /// Token service for signing and verifying JWTs
    token_service: Arc<TokenService>,
    /// Session repository, one row per live refresh token
    session_repository: Arc<S>,
    /// External cache for optional access-token mirroring
    cache_service: Arc<K>,
    /// Service configuration
    config: AuthServiceConfig,
}

impl<U, C, S, O, K> AuthService<U, C, S, O, K>
where
    U: UserRepository,
    C: CredentialRepository,
    S: SessionRepository,
    O: OneTimeSecretRepository,
    K: CacheServiceTrait,
{
    /// Create a new authentication service
    pub fn new(
        user_repository: Arc<U>,
        credential_service: Arc<CredentialService<C>>,
        otp_service: Arc<OtpService<U, O, K>>,
        token_service: Arc<TokenService>,
        session_repository: Arc<S>,
        cache_service: Arc<K>,
        config: AuthServiceConfig,
    ) -> Self {
        Self {
            user_repository,
            credential_service,
            otp_service,
            token_service,
            session_repository,
            cache_service,
            config,
        }
    }

    /// Register a new user with an email address and password
    ///
    /// # Returns
    ///
    /// * `Ok(AuthPayload)` - The created user plus a fresh session
    /// * `Err(DomainError::Conflict)` - A user with that email already exists
    pub async fn register_with_email(
        &self,
        email: &str,
        password: &str,
        account_type: AccountType,
        first_name: Option<String>,
        last_name: Option<String>,
        user_agent: Option<String>,
        ip_address: Option<String>,
    ) -> DomainResult<AuthPayload> {
        if self.user_repository.find_by_email(email).await?.is_some() {
            return Err(DomainError::conflict(
                "An account with this email already exists",
            ));
        }

        let user = self
            .user_repository
            .create(User::new_with_email(
                email.to_string(),
                account_type,
                first_name,
                last_name,
            ))
            .await?;

        self.credential_service
            .create_password_credential(user.id, password)
            .await?;

        tracing::info!(
            user_id = %user.id,
            account_type = %account_type,
            event = "user_registered",
            "Registered new user"
        );

        self.issue_session(user, user_agent, ip_address).await
    }

    /// Authenticate a user with email and password
    ///
    /// Fails with the same generic message whether the user is missing, has
    /// no password credential, or the password mismatches.
    pub async fn login_with_email(
        &self,
        email: &str,
        password: &str,
        user_agent: Option<String>,
        ip_address: Option<String>,
    ) -> DomainResult<AuthPayload> {
        let mut user = self
            .user_repository
            .find_by_email(email)
            .await?
            .ok_or_else(|| DomainError::unauthorized(INVALID_LOGIN_MESSAGE))?;

        let password_matches = self
            .credential_service
            .verify_password(user.id, password)
            .await?;
        if !password_matches {
            tracing::warn!(
                user_id = %user.id,
                event = "login_failed",
                "Password login failed"
            );
            return Err(DomainError::unauthorized(INVALID_LOGIN_MESSAGE));
        }

        user.update_last_login();
        let user = self.user_repository.update(user).await?;

        self.issue_session(user, user_agent, ip_address).await
    }

    /// Issue a one-time login code for a contact identifier
    pub async fn send_otp(
        &self,
        channel: OtpChannel,
        email: Option<&str>,
        phone: Option<&str>,
    ) -> DomainResult<SendCodeResult> {
        self.otp_service.send_code(channel, email, phone).await
    }

    /// Verify a one-time code and establish a session for its user
    pub async fn verify_otp_and_login(
        &self,
        channel: OtpChannel,
        email: Option<&str>,
        phone: Option<&str>,
        code: &str,
        user_agent: Option<String>,
        ip_address: Option<String>,
    ) -> DomainResult<AuthPayload> {
        let user_id = self
            .otp_service
            .verify_code(channel, email, phone, code)
            .await?;

        let mut user = self
            .user_repository
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| DomainError::internal("Verified user no longer exists"))?;

        user.update_last_login();
        let user = self.user_repository.update(user).await?;

        self.issue_session(user, user_agent, ip_address).await
    }

    /// Exchange a refresh token for a brand-new session
    ///
    /// The presented token is single use. The conditional delete is what
    /// decides the winner of two concurrent refreshes of the same token:
    /// only the call that actually removed the old row proceeds to issue a
    /// replacement, the loser observes the row gone and fails like any other
    /// invalid token.
    pub async fn refresh(&self, refresh_token: &str) -> DomainResult<AuthPayload> {
        let claims = self
            .token_service
            .verify_refresh(refresh_token)
            .map_err(|_| DomainError::unauthorized(INVALID_REFRESH_MESSAGE))?;

        let token_hash = TokenService::hash_token(refresh_token);

        let session = self
            .session_repository
            .find_by_id_and_hash(&claims.session_id, &token_hash)
            .await?
            .ok_or_else(|| DomainError::unauthorized(INVALID_REFRESH_MESSAGE))?;

        if session.is_expired() {
            tracing::info!(
                session_id = %session.id,
                event = "session_expired",
                "Refresh presented for an expired session"
            );
            return Err(DomainError::unauthorized(INVALID_REFRESH_MESSAGE));
        }

        let removed = self
            .session_repository
            .delete_by_id_and_hash(&session.id, &token_hash)
            .await?;
        if !removed {
            // Lost the race against a concurrent refresh of the same token
            return Err(DomainError::unauthorized(INVALID_REFRESH_MESSAGE));
        }

        let user = self
            .user_repository
            .find_by_id(session.user_id)
            .await?
            .ok_or_else(|| DomainError::unauthorized(INVALID_REFRESH_MESSAGE))?;

        tracing::info!(
            user_id = %user.id,
            session_id = %session.id,
            event = "session_rotated",
            "Rotated refresh token"
        );

        // Carry the original client metadata into the replacement session
        self.issue_session(user, session.user_agent, session.ip_address)
            .await
    }

    /// Revoke the session behind a refresh token
    ///
    /// Idempotent: succeeds whether or not the token maps to a live session,
    /// and never reveals which it was.
    pub async fn logout(&self, refresh_token: &str) -> DomainResult<LogoutResult> {
        if let Ok(claims) = self.token_service.verify_refresh(refresh_token) {
            let token_hash = TokenService::hash_token(refresh_token);
            let removed = self
                .session_repository
                .delete_by_id_and_hash(&claims.session_id, &token_hash)
                .await
                .unwrap_or(false);

            if removed {
                tracing::info!(
                    session_id = %claims.session_id,
                    event = "session_revoked",
                    "Revoked session on logout"
                );
            }
        }

        Ok(LogoutResult::ok())
    }

    /// Statelessly introspect an access token
    ///
    /// Pure signature and expiry check, no session store lookup: a revoked
    /// session does not invalidate access tokens already in flight, whose
    /// exposure is bounded only by their own TTL. Returns `None` rather
    /// than an error on any verification failure so guards decide how to
    /// react.
    pub fn introspect_access_token(&self, token: &str) -> Option<AccessTokenIntrospection> {
        let claims = self.token_service.verify_access(token).ok()?;
        let user_id = claims.user_id().ok()?;

        Some(AccessTokenIntrospection {
            user_id,
            email: claims.email,
            account_type: claims.account_type,
            session_id: claims.session_id,
        })
    }

    /// Issue a fresh session for an authenticated user
    ///
    /// The one primitive behind every identity-establishing path:
    /// generate the session id, sign the refresh token, persist the session
    /// row (hash only), sign the access token, optionally mirror it into the
    /// cache, and assemble the payload.
    async fn issue_session(
        &self,
        user: User,
        user_agent: Option<String>,
        ip_address: Option<String>,
    ) -> DomainResult<AuthPayload> {
        let session_id = self.token_service.generate_session_id();
        let signed_refresh = self.token_service.sign_refresh(user.id, &session_id)?;

        let session = Session::new(
            session_id.clone(),
            user.id,
            signed_refresh.token_hash,
            user_agent,
            ip_address,
        );
        self.session_repository.create(session).await?;

        let access_token = self.token_service.sign_access(&user, &session_id)?;
        let expires_in = self.token_service.access_token_expiry_seconds();

        if self.config.cache_access_tokens {
            // Best effort: the cache is never the authority on token validity
            let _ = self
                .cache_service
                .set(
                    &format!("access_token:{}", session_id),
                    &access_token,
                    expires_in as u64,
                )
                .await;
        }

        tracing::info!(
            user_id = %user.id,
            session_id = %session_id,
            event = "session_issued",
            "Issued new session"
        );

        Ok(AuthPayload {
            user,
            access_token,
            refresh_token: signed_refresh.token,
            expires_in,
        })
    }
}
