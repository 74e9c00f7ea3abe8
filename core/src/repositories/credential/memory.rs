//! In-memory implementation of CredentialRepository for tests and local development

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::credential::{Credential, CredentialProvider};
use crate::errors::DomainError;

use super::r#trait::CredentialRepository;

/// In-memory credential repository keyed by (user, provider)
#[derive(Clone, Default)]
pub struct InMemoryCredentialRepository {
    credentials: Arc<RwLock<HashMap<(Uuid, CredentialProvider), Credential>>>,
}

impl InMemoryCredentialRepository {
    /// Create a new empty repository
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CredentialRepository for InMemoryCredentialRepository {
    async fn create(&self, credential: Credential) -> Result<Credential, DomainError> {
        let mut credentials = self.credentials.write().await;
        let key = (credential.user_id, credential.provider);

        if credentials.contains_key(&key) {
            return Err(DomainError::conflict(
                "A credential already exists for this user and provider",
            ));
        }

        credentials.insert(key, credential.clone());
        Ok(credential)
    }

    async fn find_by_user_and_provider(
        &self,
        user_id: Uuid,
        provider: CredentialProvider,
    ) -> Result<Option<Credential>, DomainError> {
        let credentials = self.credentials.read().await;
        Ok(credentials.get(&(user_id, provider)).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_duplicate_credential_rejected() {
        let repo = InMemoryCredentialRepository::new();
        let user_id = Uuid::new_v4();

        repo.create(Credential::new_password(user_id, "hash-1".to_string()))
            .await
            .unwrap();

        let duplicate = repo
            .create(Credential::new_password(user_id, "hash-2".to_string()))
            .await;
        assert!(duplicate.is_err());
    }

    #[tokio::test]
    async fn test_find_by_user_and_provider() {
        let repo = InMemoryCredentialRepository::new();
        let user_id = Uuid::new_v4();

        repo.create(Credential::new_password(user_id, "hash".to_string()))
            .await
            .unwrap();

        let found = repo
            .find_by_user_and_provider(user_id, CredentialProvider::Password)
            .await
            .unwrap();
        assert!(found.is_some());

        let other = repo
            .find_by_user_and_provider(Uuid::new_v4(), CredentialProvider::Password)
            .await
            .unwrap();
        assert!(other.is_none());
    }
}
