//! MySQL implementation of the OneTimeSecretRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use wl_core::domain::entities::one_time_secret::{OneTimeSecret, OtpChannel};
use wl_core::errors::DomainError;
use wl_core::repositories::OneTimeSecretRepository;

/// MySQL implementation of OneTimeSecretRepository
pub struct MySqlOneTimeSecretRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlOneTimeSecretRepository {
    /// Create a new MySQL one-time-secret repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Convert database row to OneTimeSecret entity
    fn row_to_secret(row: &sqlx::mysql::MySqlRow) -> Result<OneTimeSecret, DomainError> {
        let id: String = row
            .try_get("id")
            .map_err(|e| DomainError::internal(format!("Failed to get id: {}", e)))?;
        let user_id: String = row
            .try_get("user_id")
            .map_err(|e| DomainError::internal(format!("Failed to get user_id: {}", e)))?;
        let channel: String = row
            .try_get("channel")
            .map_err(|e| DomainError::internal(format!("Failed to get channel: {}", e)))?;

        let channel = match channel.as_str() {
            "email" => OtpChannel::Email,
            "mobile" => OtpChannel::Mobile,
            other => {
                return Err(DomainError::internal(format!(
                    "Unknown OTP channel: {}",
                    other
                )))
            }
        };

        Ok(OneTimeSecret {
            id: Uuid::parse_str(&id)
                .map_err(|e| DomainError::internal(format!("Invalid secret UUID: {}", e)))?,
            user_id: Uuid::parse_str(&user_id)
                .map_err(|e| DomainError::internal(format!("Invalid user UUID: {}", e)))?,
            channel,
            secret: row
                .try_get("secret")
                .map_err(|e| DomainError::internal(format!("Failed to get secret: {}", e)))?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| DomainError::internal(format!("Failed to get created_at: {}", e)))?,
        })
    }
}

#[async_trait]
impl OneTimeSecretRepository for MySqlOneTimeSecretRepository {
    async fn create(&self, secret: OneTimeSecret) -> Result<OneTimeSecret, DomainError> {
        let query = r#"
            INSERT INTO one_time_secrets (id, user_id, channel, secret, created_at)
            VALUES (?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(secret.id.to_string())
            .bind(secret.user_id.to_string())
            .bind(secret.channel.as_str())
            .bind(&secret.secret)
            .bind(secret.created_at)
            .execute(&self.pool)
            .await
            .map_err(|e| match e {
                sqlx::Error::Database(ref db_err) if db_err.is_unique_violation() => {
                    DomainError::conflict("A secret already exists for this user and channel")
                }
                other => DomainError::internal(format!("Failed to create secret: {}", other)),
            })?;

        Ok(secret)
    }

    async fn find_by_user_and_channel(
        &self,
        user_id: Uuid,
        channel: OtpChannel,
    ) -> Result<Option<OneTimeSecret>, DomainError> {
        let query = r#"
            SELECT id, user_id, channel, secret, created_at
            FROM one_time_secrets
            WHERE user_id = ? AND channel = ?
            LIMIT 1
        "#;

        let result = sqlx::query(query)
            .bind(user_id.to_string())
            .bind(channel.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::internal(format!("Failed to query secret: {}", e)))?;

        match result {
            Some(row) => Ok(Some(Self::row_to_secret(&row)?)),
            None => Ok(None),
        }
    }
}
