//! One-time-secret repository trait.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::one_time_secret::{OneTimeSecret, OtpChannel};
use crate::errors::DomainError;

/// Repository trait for OneTimeSecret entity persistence operations
///
/// Secrets are created lazily on the first OTP send for a (user, channel)
/// pair and only read afterwards.
#[async_trait]
pub trait OneTimeSecretRepository: Send + Sync {
    /// Create a new one-time secret
    async fn create(&self, secret: OneTimeSecret) -> Result<OneTimeSecret, DomainError>;

    /// Find the secret for a user and channel
    async fn find_by_user_and_channel(
        &self,
        user_id: Uuid,
        channel: OtpChannel,
    ) -> Result<Option<OneTimeSecret>, DomainError>;
}
