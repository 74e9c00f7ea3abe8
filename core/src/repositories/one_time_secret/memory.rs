//! In-memory implementation of OneTimeSecretRepository for tests and local development

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::one_time_secret::{OneTimeSecret, OtpChannel};
use crate::errors::DomainError;

use super::r#trait::OneTimeSecretRepository;

/// In-memory one-time-secret repository keyed by (user, channel)
#[derive(Clone, Default)]
pub struct InMemoryOneTimeSecretRepository {
    secrets: Arc<RwLock<HashMap<(Uuid, OtpChannel), OneTimeSecret>>>,
}

impl InMemoryOneTimeSecretRepository {
    /// Create a new empty repository
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl OneTimeSecretRepository for InMemoryOneTimeSecretRepository {
    async fn create(&self, secret: OneTimeSecret) -> Result<OneTimeSecret, DomainError> {
        let mut secrets = self.secrets.write().await;
        let key = (secret.user_id, secret.channel);

        if secrets.contains_key(&key) {
            return Err(DomainError::conflict(
                "A secret already exists for this user and channel",
            ));
        }

        secrets.insert(key, secret.clone());
        Ok(secret)
    }

    async fn find_by_user_and_channel(
        &self,
        user_id: Uuid,
        channel: OtpChannel,
    ) -> Result<Option<OneTimeSecret>, DomainError> {
        let secrets = self.secrets.read().await;
        Ok(secrets.get(&(user_id, channel)).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_secret_per_user_and_channel() {
        let repo = InMemoryOneTimeSecretRepository::new();
        let user_id = Uuid::new_v4();

        repo.create(OneTimeSecret::new(user_id, OtpChannel::Email, "s1".to_string()))
            .await
            .unwrap();
        // Same user, different channel is a separate row
        repo.create(OneTimeSecret::new(user_id, OtpChannel::Mobile, "s2".to_string()))
            .await
            .unwrap();

        // Same (user, channel) is rejected
        let duplicate = repo
            .create(OneTimeSecret::new(user_id, OtpChannel::Email, "s3".to_string()))
            .await;
        assert!(duplicate.is_err());

        let email_secret = repo
            .find_by_user_and_channel(user_id, OtpChannel::Email)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(email_secret.secret, "s1");
    }
}
