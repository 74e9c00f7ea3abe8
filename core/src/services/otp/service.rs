//! Main one-time-code issuer implementation

use chrono::Utc;
use constant_time_eq::constant_time_eq;
use rand::rngs::OsRng;
use rand::RngCore;
use sha2::{Digest, Sha256};
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::entities::one_time_secret::{OneTimeSecret, OtpChannel};
use crate::domain::entities::user::User;
use crate::errors::{DomainError, DomainResult};
use crate::repositories::{OneTimeSecretRepository, UserRepository};

use wl_shared::utils::validation::{is_valid_email, is_valid_phone, mask_identifier};

use super::config::OtpServiceConfig;
use super::traits::CacheServiceTrait;
use super::types::{PendingOtp, SendCodeResult, CODE_LENGTH};

/// One-time-code issuer
///
/// Generates a pending login code for a contact identifier and verifies it
/// exactly once. Unknown identifiers get a minimal placeholder user so that
/// OTP login doubles as passwordless sign-up.
pub struct OtpService<U, O, C>
where
    U: UserRepository,
    O: OneTimeSecretRepository,
    C: CacheServiceTrait,
{
    /// User repository for contact resolution and placeholder creation
    user_repository: Arc<U>,
    /// Secret repository seeding code derivation
    secret_repository: Arc<O>,
    /// Cache holding pending codes
    cache_service: Arc<C>,
    /// Service configuration
    config: OtpServiceConfig,
}

impl<U, O, C> OtpService<U, O, C>
where
    U: UserRepository,
    O: OneTimeSecretRepository,
    C: CacheServiceTrait,
{
    /// Create a new one-time-code issuer
    pub fn new(
        user_repository: Arc<U>,
        secret_repository: Arc<O>,
        cache_service: Arc<C>,
        config: OtpServiceConfig,
    ) -> Self {
        Self {
            user_repository,
            secret_repository,
            cache_service,
            config,
        }
    }

    /// Issue a one-time code for a contact identifier
    ///
    /// This method:
    /// 1. Picks the identifier matching the channel (email or phone)
    /// 2. Resolves the target user, creating a placeholder on first contact
    /// 3. Lazily creates the per-(user, channel) secret
    /// 4. Derives the 6-digit code and caches it under a fixed TTL
    ///
    /// The code is never returned to the caller; delivering it to the user
    /// is an external concern.
    ///
    /// # Returns
    ///
    /// * `Ok(SendCodeResult)` - The code was issued
    /// * `Err(DomainError::BadRequest)` - Missing or malformed identifier
    ///   for the channel
    pub async fn send_code(
        &self,
        channel: OtpChannel,
        email: Option<&str>,
        phone: Option<&str>,
    ) -> DomainResult<SendCodeResult> {
        let identifier = Self::identifier_for(channel, email, phone)?;

        let user = self.resolve_or_create_user(channel, identifier).await?;
        let secret = self.resolve_or_create_secret(&user, channel).await?;

        let time_step = Utc::now().timestamp() / self.config.code_ttl_seconds as i64;
        let code = Self::derive_code(&secret.secret, time_step);

        let pending = PendingOtp {
            code,
            user_id: user.id,
        };
        let payload = serde_json::to_string(&pending)
            .map_err(|e| DomainError::internal(format!("Failed to serialize pending code: {}", e)))?;

        self.cache_service
            .set(
                &Self::cache_key(channel, identifier),
                &payload,
                self.config.code_ttl_seconds,
            )
            .await
            .map_err(|e| DomainError::internal(format!("Failed to store pending code: {}", e)))?;

        tracing::info!(
            identifier = %mask_identifier(identifier),
            channel = %channel,
            event = "otp_issued",
            "Issued one-time code"
        );

        Ok(SendCodeResult {
            success: true,
            message: "Verification code sent".to_string(),
        })
    }

    /// Verify a one-time code for a contact identifier
    ///
    /// The cached entry is consumed by this attempt whatever the outcome: a
    /// mistyped code forces the user to request a fresh one.
    ///
    /// # Returns
    ///
    /// * `Ok(Uuid)` - The authenticated user's id; the channel's
    ///   verification flag on the user record has been set
    /// * `Err(DomainError::Unauthorized)` - Missing/expired entry or wrong code
    /// * `Err(DomainError::BadRequest)` - Missing or malformed identifier
    ///   for the channel
    pub async fn verify_code(
        &self,
        channel: OtpChannel,
        email: Option<&str>,
        phone: Option<&str>,
        supplied_code: &str,
    ) -> DomainResult<Uuid> {
        let identifier = Self::identifier_for(channel, email, phone)?;
        let key = Self::cache_key(channel, identifier);

        let payload = self
            .cache_service
            .get(&key)
            .await
            .map_err(|e| DomainError::internal(format!("Failed to read pending code: {}", e)))?
            .ok_or_else(|| DomainError::unauthorized("OTP expired or invalid"))?;

        // Single use: consume the entry before looking at the supplied code
        if let Err(e) = self.cache_service.del(&key).await {
            tracing::warn!(
                identifier = %mask_identifier(identifier),
                error = %e,
                event = "otp_consume_failed",
                "Failed to delete pending code"
            );
        }

        let pending: PendingOtp = serde_json::from_str(&payload)
            .map_err(|e| DomainError::internal(format!("Corrupt pending code entry: {}", e)))?;

        if !constant_time_eq(pending.code.as_bytes(), supplied_code.as_bytes()) {
            tracing::warn!(
                identifier = %mask_identifier(identifier),
                channel = %channel,
                event = "otp_mismatch",
                "One-time code mismatch"
            );
            return Err(DomainError::unauthorized("Invalid OTP"));
        }

        let mut user = self
            .user_repository
            .find_by_id(pending.user_id)
            .await?
            .ok_or_else(|| DomainError::internal("User for pending code no longer exists"))?;

        user.verify_channel(channel);
        let user = self.user_repository.update(user).await?;

        tracing::info!(
            user_id = %user.id,
            channel = %channel,
            event = "otp_verified",
            "One-time code verified"
        );

        Ok(user.id)
    }

    /// Cache key for a pending code
    fn cache_key(channel: OtpChannel, identifier: &str) -> String {
        format!("otp:{}:{}", channel.as_str(), identifier)
    }

    /// Pick and validate the identifier matching the channel
    fn identifier_for<'a>(
        channel: OtpChannel,
        email: Option<&'a str>,
        phone: Option<&'a str>,
    ) -> DomainResult<&'a str> {
        match channel {
            OtpChannel::Email => {
                let email = email.ok_or_else(|| {
                    DomainError::bad_request("An email address is required for the EMAIL channel")
                })?;
                if !is_valid_email(email) {
                    return Err(DomainError::bad_request("Invalid email address format"));
                }
                Ok(email)
            }
            OtpChannel::Mobile => {
                let phone = phone.ok_or_else(|| {
                    DomainError::bad_request("A phone number is required for the MOBILE channel")
                })?;
                if !is_valid_phone(phone) {
                    return Err(DomainError::bad_request("Invalid phone number format"));
                }
                Ok(phone)
            }
        }
    }

    /// Resolve the user owning the identifier, creating a placeholder when unknown
    async fn resolve_or_create_user(
        &self,
        channel: OtpChannel,
        identifier: &str,
    ) -> DomainResult<User> {
        let existing = match channel {
            OtpChannel::Email => self.user_repository.find_by_email(identifier).await?,
            OtpChannel::Mobile => self.user_repository.find_by_phone(identifier).await?,
        };

        match existing {
            Some(user) => Ok(user),
            None => {
                let user = User::placeholder(channel, identifier.to_string());
                tracing::info!(
                    user_id = %user.id,
                    channel = %channel,
                    event = "placeholder_user_created",
                    "Created placeholder user for first-time contact"
                );
                self.user_repository.create(user).await
            }
        }
    }

    /// Fetch the per-(user, channel) secret, creating it on first use
    async fn resolve_or_create_secret(
        &self,
        user: &User,
        channel: OtpChannel,
    ) -> DomainResult<OneTimeSecret> {
        if let Some(secret) = self
            .secret_repository
            .find_by_user_and_channel(user.id, channel)
            .await?
        {
            return Ok(secret);
        }

        let secret = OneTimeSecret::new(user.id, channel, Self::generate_secret());
        self.secret_repository.create(secret).await
    }

    /// Generate random secret material from the OS CSPRNG
    fn generate_secret() -> String {
        let mut bytes = [0u8; 20];
        OsRng.fill_bytes(&mut bytes);
        hex::encode(bytes)
    }

    /// Derive a 6-digit code from secret material and a time step
    ///
    /// `{:06}` keeps leading zeros: the code space is the full
    /// 000000-999999 range.
    pub(crate) fn derive_code(secret: &str, time_step: i64) -> String {
        let mut hasher = Sha256::new();
        hasher.update(secret.as_bytes());
        hasher.update(time_step.to_be_bytes());
        let digest = hasher.finalize();

        let num = u32::from_be_bytes([digest[0], digest[1], digest[2], digest[3]]);
        let code = format!("{:06}", num % 1_000_000);
        debug_assert_eq!(code.len(), CODE_LENGTH);
        code
    }
}
