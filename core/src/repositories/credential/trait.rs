//! Credential repository trait defining the interface for credential persistence.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::credential::{Credential, CredentialProvider};
use crate::errors::DomainError;

/// Repository trait for Credential entity persistence operations
///
/// Credentials are written once at registration and read on every password
/// login; there is no update path in this core.
#[async_trait]
pub trait CredentialRepository: Send + Sync {
    /// Create a new credential
    ///
    /// # Returns
    /// * `Ok(Credential)` - The created credential
    /// * `Err(DomainError)` - Creation failed (e.g. duplicate (user, provider))
    async fn create(&self, credential: Credential) -> Result<Credential, DomainError>;

    /// Find the credential for a user and provider
    async fn find_by_user_and_provider(
        &self,
        user_id: Uuid,
        provider: CredentialProvider,
    ) -> Result<Option<Credential>, DomainError>;
}
