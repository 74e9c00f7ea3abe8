//! Credential service implementation

use std::sync::Arc;
use uuid::Uuid;

use crate::domain::entities::credential::{Credential, CredentialProvider};
use crate::errors::{DomainError, DomainResult};
use crate::repositories::CredentialRepository;

/// Service for managing password credentials
pub struct CredentialService<C: CredentialRepository> {
    repository: Arc<C>,
}

impl<C: CredentialRepository> CredentialService<C> {
    /// Create a new credential service
    pub fn new(repository: Arc<C>) -> Self {
        Self { repository }
    }

    /// Create a password credential for a user
    ///
    /// Computes a salted bcrypt hash of the plaintext and stores it.
    ///
    /// # Returns
    ///
    /// * `Ok(Credential)` - The stored credential
    /// * `Err(DomainError::Conflict)` - A password credential already exists
    ///   for this user
    pub async fn create_password_credential(
        &self,
        user_id: Uuid,
        password: &str,
    ) -> DomainResult<Credential> {
        let existing = self
            .repository
            .find_by_user_and_provider(user_id, CredentialProvider::Password)
            .await?;

        if existing.is_some() {
            return Err(DomainError::conflict(
                "A password credential already exists for this user",
            ));
        }

        let password_hash = bcrypt::hash(password, bcrypt::DEFAULT_COST)
            .map_err(|e| DomainError::internal(format!("Failed to hash password: {}", e)))?;

        tracing::info!(
            user_id = %user_id,
            event = "credential_created",
            "Created password credential"
        );

        self.repository
            .create(Credential::new_password(user_id, password_hash))
            .await
    }

    /// Verify a plaintext password against the stored hash
    ///
    /// Returns `false` rather than an error when the user has no password
    /// credential or the password does not match, so callers get uniform
    /// "invalid credential" handling with no oracle between the cases.
    pub async fn verify_password(&self, user_id: Uuid, password: &str) -> DomainResult<bool> {
        let credential = match self
            .repository
            .find_by_user_and_provider(user_id, CredentialProvider::Password)
            .await?
        {
            Some(credential) => credential,
            None => return Ok(false),
        };

        let password_hash = match credential.password_hash {
            Some(hash) => hash,
            None => return Ok(false),
        };

        bcrypt::verify(password, &password_hash)
            .map_err(|e| DomainError::internal(format!("Failed to verify password: {}", e)))
    }
}
