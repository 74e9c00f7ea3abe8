//! In-memory implementation of UserRepository for tests and local development

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::user::User;
use crate::errors::DomainError;

use super::r#trait::UserRepository;

/// In-memory user repository backed by a `HashMap`
#[derive(Clone, Default)]
pub struct InMemoryUserRepository {
    users: Arc<RwLock<HashMap<Uuid, User>>>,
}

impl InMemoryUserRepository {
    /// Create a new empty repository
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DomainError> {
        let users = self.users.read().await;
        Ok(users.get(&id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        let users = self.users.read().await;
        Ok(users
            .values()
            .find(|u| u.email.as_deref() == Some(email))
            .cloned())
    }

    async fn find_by_phone(&self, phone: &str) -> Result<Option<User>, DomainError> {
        let users = self.users.read().await;
        Ok(users
            .values()
            .find(|u| u.phone.as_deref() == Some(phone))
            .cloned())
    }

    async fn create(&self, user: User) -> Result<User, DomainError> {
        let mut users = self.users.write().await;

        if users.contains_key(&user.id) {
            return Err(DomainError::conflict("User already exists"));
        }

        users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn update(&self, user: User) -> Result<User, DomainError> {
        let mut users = self.users.write().await;

        if !users.contains_key(&user.id) {
            return Err(DomainError::internal("Cannot update a user that does not exist"));
        }

        users.insert(user.id, user.clone());
        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::user::AccountType;

    #[tokio::test]
    async fn test_create_and_find_by_email() {
        let repo = InMemoryUserRepository::new();
        let user = User::new_with_email(
            "alice@example.com".to_string(),
            AccountType::Worker,
            None,
            None,
        );

        repo.create(user.clone()).await.unwrap();

        let found = repo.find_by_email("alice@example.com").await.unwrap();
        assert_eq!(found.map(|u| u.id), Some(user.id));

        let missing = repo.find_by_email("bob@example.com").await.unwrap();
        assert!(missing.is_none());
    }

    #[tokio::test]
    async fn test_update_requires_existing_user() {
        let repo = InMemoryUserRepository::new();
        let user = User::new_with_email(
            "carol@example.com".to_string(),
            AccountType::Employer,
            None,
            None,
        );

        assert!(repo.update(user).await.is_err());
    }
}
