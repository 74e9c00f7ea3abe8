//! MySQL implementation of the SessionRepository trait.
//!
//! The conditional delete used for refresh-token rotation is a single
//! `DELETE ... WHERE id = ? AND refresh_token_hash = ?`: the database
//! guarantees at most one of two racing statements removes the row, and
//! `rows_affected` tells each caller whether it was the one.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use wl_core::domain::entities::session::Session;
use wl_core::errors::DomainError;
use wl_core::repositories::SessionRepository;

/// MySQL implementation of SessionRepository
pub struct MySqlSessionRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlSessionRepository {
    /// Create a new MySQL session repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Convert database row to Session entity
    fn row_to_session(row: &sqlx::mysql::MySqlRow) -> Result<Session, DomainError> {
        let user_id: String = row
            .try_get("user_id")
            .map_err(|e| DomainError::internal(format!("Failed to get user_id: {}", e)))?;

        Ok(Session {
            id: row
                .try_get("id")
                .map_err(|e| DomainError::internal(format!("Failed to get id: {}", e)))?,
            user_id: Uuid::parse_str(&user_id)
                .map_err(|e| DomainError::internal(format!("Invalid user UUID: {}", e)))?,
            refresh_token_hash: row
                .try_get("refresh_token_hash")
                .map_err(|e| {
                    DomainError::internal(format!("Failed to get refresh_token_hash: {}", e))
                })?,
            user_agent: row
                .try_get("user_agent")
                .map_err(|e| DomainError::internal(format!("Failed to get user_agent: {}", e)))?,
            ip_address: row
                .try_get("ip_address")
                .map_err(|e| DomainError::internal(format!("Failed to get ip_address: {}", e)))?,
            expires_at: row
                .try_get::<DateTime<Utc>, _>("expires_at")
                .map_err(|e| DomainError::internal(format!("Failed to get expires_at: {}", e)))?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| DomainError::internal(format!("Failed to get created_at: {}", e)))?,
        })
    }
}

#[async_trait]
impl SessionRepository for MySqlSessionRepository {
    async fn create(&self, session: Session) -> Result<Session, DomainError> {
        let query = r#"
            INSERT INTO sessions (
                id, user_id, refresh_token_hash, user_agent, ip_address,
                expires_at, created_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(&session.id)
            .bind(session.user_id.to_string())
            .bind(&session.refresh_token_hash)
            .bind(&session.user_agent)
            .bind(&session.ip_address)
            .bind(session.expires_at)
            .bind(session.created_at)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::internal(format!("Failed to create session: {}", e)))?;

        Ok(session)
    }

    async fn find_by_id_and_hash(
        &self,
        session_id: &str,
        refresh_token_hash: &str,
    ) -> Result<Option<Session>, DomainError> {
        let query = r#"
            SELECT id, user_id, refresh_token_hash, user_agent, ip_address,
                   expires_at, created_at
            FROM sessions
            WHERE id = ? AND refresh_token_hash = ?
            LIMIT 1
        "#;

        let result = sqlx::query(query)
            .bind(session_id)
            .bind(refresh_token_hash)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::internal(format!("Failed to find session: {}", e)))?;

        match result {
            Some(row) => Ok(Some(Self::row_to_session(&row)?)),
            None => Ok(None),
        }
    }

    async fn delete_by_id_and_hash(
        &self,
        session_id: &str,
        refresh_token_hash: &str,
    ) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM sessions WHERE id = ? AND refresh_token_hash = ?")
            .bind(session_id)
            .bind(refresh_token_hash)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::internal(format!("Failed to delete session: {}", e)))?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete_by_id(&self, session_id: &str) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM sessions WHERE id = ?")
            .bind(session_id)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::internal(format!("Failed to delete session: {}", e)))?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete_expired(&self) -> Result<usize, DomainError> {
        let result = sqlx::query("DELETE FROM sessions WHERE expires_at < ?")
            .bind(Utc::now())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::internal(format!("Failed to delete expired sessions: {}", e)))?;

        let removed = result.rows_affected() as usize;
        if removed > 0 {
            tracing::info!(removed, event = "session_sweep", "Deleted expired sessions");
        }

        Ok(removed)
    }
}
