//! User repository trait defining the interface for user data persistence.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::user::User;
use crate::errors::DomainError;

/// Repository trait for User entity persistence operations
///
/// This trait defines the contract for data access operations related to
/// users. Implementations handle the actual database operations while
/// maintaining the abstraction boundary between domain and infrastructure
/// layers.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user by their unique identifier
    ///
    /// # Returns
    /// * `Ok(Some(User))` - User found
    /// * `Ok(None)` - No user found with given ID
    /// * `Err(DomainError)` - Database or other error occurred
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DomainError>;

    /// Find a user by their email address
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError>;

    /// Find a user by their phone number (E.164 format)
    async fn find_by_phone(&self, phone: &str) -> Result<Option<User>, DomainError>;

    /// Create a new user in the repository
    ///
    /// # Returns
    /// * `Ok(User)` - The created user
    /// * `Err(DomainError)` - Creation failed (e.g. duplicate contact)
    async fn create(&self, user: User) -> Result<User, DomainError>;

    /// Update an existing user in the repository
    async fn update(&self, user: User) -> Result<User, DomainError>;
}
