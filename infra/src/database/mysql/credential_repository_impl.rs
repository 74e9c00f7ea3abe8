//! MySQL implementation of the CredentialRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use wl_core::domain::entities::credential::{Credential, CredentialProvider};
use wl_core::errors::DomainError;
use wl_core::repositories::CredentialRepository;

/// MySQL implementation of CredentialRepository
///
/// A unique index on (user_id, provider) backs the one-credential-per-
/// provider invariant at the storage layer.
pub struct MySqlCredentialRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlCredentialRepository {
    /// Create a new MySQL credential repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Convert database row to Credential entity
    fn row_to_credential(row: &sqlx::mysql::MySqlRow) -> Result<Credential, DomainError> {
        let id: String = row
            .try_get("id")
            .map_err(|e| DomainError::internal(format!("Failed to get id: {}", e)))?;
        let user_id: String = row
            .try_get("user_id")
            .map_err(|e| DomainError::internal(format!("Failed to get user_id: {}", e)))?;
        let provider: String = row
            .try_get("provider")
            .map_err(|e| DomainError::internal(format!("Failed to get provider: {}", e)))?;

        let provider = match provider.as_str() {
            "password" => CredentialProvider::Password,
            other => {
                return Err(DomainError::internal(format!(
                    "Unknown credential provider: {}",
                    other
                )))
            }
        };

        Ok(Credential {
            id: Uuid::parse_str(&id)
                .map_err(|e| DomainError::internal(format!("Invalid credential UUID: {}", e)))?,
            user_id: Uuid::parse_str(&user_id)
                .map_err(|e| DomainError::internal(format!("Invalid user UUID: {}", e)))?,
            provider,
            password_hash: row
                .try_get("password_hash")
                .map_err(|e| DomainError::internal(format!("Failed to get password_hash: {}", e)))?,
            external_id: row
                .try_get("external_id")
                .map_err(|e| DomainError::internal(format!("Failed to get external_id: {}", e)))?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| DomainError::internal(format!("Failed to get created_at: {}", e)))?,
            updated_at: row
                .try_get::<DateTime<Utc>, _>("updated_at")
                .map_err(|e| DomainError::internal(format!("Failed to get updated_at: {}", e)))?,
        })
    }
}

#[async_trait]
impl CredentialRepository for MySqlCredentialRepository {
    async fn create(&self, credential: Credential) -> Result<Credential, DomainError> {
        let query = r#"
            INSERT INTO credentials (
                id, user_id, provider, password_hash, external_id, created_at, updated_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(credential.id.to_string())
            .bind(credential.user_id.to_string())
            .bind(credential.provider.as_str())
            .bind(&credential.password_hash)
            .bind(&credential.external_id)
            .bind(credential.created_at)
            .bind(credential.updated_at)
            .execute(&self.pool)
            .await
            .map_err(|e| match e {
                sqlx::Error::Database(ref db_err) if db_err.is_unique_violation() => {
                    DomainError::conflict("A credential already exists for this user and provider")
                }
                other => DomainError::internal(format!("Failed to create credential: {}", other)),
            })?;

        Ok(credential)
    }

    async fn find_by_user_and_provider(
        &self,
        user_id: Uuid,
        provider: CredentialProvider,
    ) -> Result<Option<Credential>, DomainError> {
        let query = r#"
            SELECT id, user_id, provider, password_hash, external_id, created_at, updated_at
            FROM credentials
            WHERE user_id = ? AND provider = ?
            LIMIT 1
        "#;

        let result = sqlx::query(query)
            .bind(user_id.to_string())
            .bind(provider.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::internal(format!("Failed to query credential: {}", e)))?;

        match result {
            Some(row) => Ok(Some(Self::row_to_credential(&row)?)),
            None => Ok(None),
        }
    }
}
