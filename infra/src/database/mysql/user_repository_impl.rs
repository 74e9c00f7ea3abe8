//! MySQL implementation of the UserRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use wl_core::domain::entities::user::{AccountType, User};
use wl_core::errors::DomainError;
use wl_core::repositories::UserRepository;

/// MySQL implementation of UserRepository
pub struct MySqlUserRepository {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlUserRepository {
    /// Create a new MySQL user repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Convert database row to User entity
    fn row_to_user(row: &sqlx::mysql::MySqlRow) -> Result<User, DomainError> {
        let id: String = row
            .try_get("id")
            .map_err(|e| DomainError::internal(format!("Failed to get id: {}", e)))?;
        let account_type: Option<String> = row
            .try_get("account_type")
            .map_err(|e| DomainError::internal(format!("Failed to get account_type: {}", e)))?;

        let account_type = account_type
            .map(|value| match value.as_str() {
                "WORKER" => Ok(AccountType::Worker),
                "EMPLOYER" => Ok(AccountType::Employer),
                other => Err(DomainError::internal(format!(
                    "Unknown account type: {}",
                    other
                ))),
            })
            .transpose()?;

        Ok(User {
            id: Uuid::parse_str(&id)
                .map_err(|e| DomainError::internal(format!("Invalid user UUID: {}", e)))?,
            email: row
                .try_get("email")
                .map_err(|e| DomainError::internal(format!("Failed to get email: {}", e)))?,
            phone: row
                .try_get("phone")
                .map_err(|e| DomainError::internal(format!("Failed to get phone: {}", e)))?,
            first_name: row
                .try_get("first_name")
                .map_err(|e| DomainError::internal(format!("Failed to get first_name: {}", e)))?,
            last_name: row
                .try_get("last_name")
                .map_err(|e| DomainError::internal(format!("Failed to get last_name: {}", e)))?,
            account_type,
            email_verified: row
                .try_get("email_verified")
                .map_err(|e| DomainError::internal(format!("Failed to get email_verified: {}", e)))?,
            phone_verified: row
                .try_get("phone_verified")
                .map_err(|e| DomainError::internal(format!("Failed to get phone_verified: {}", e)))?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| DomainError::internal(format!("Failed to get created_at: {}", e)))?,
            updated_at: row
                .try_get::<DateTime<Utc>, _>("updated_at")
                .map_err(|e| DomainError::internal(format!("Failed to get updated_at: {}", e)))?,
            last_login_at: row
                .try_get::<Option<DateTime<Utc>>, _>("last_login_at")
                .map_err(|e| DomainError::internal(format!("Failed to get last_login_at: {}", e)))?,
        })
    }

    async fn find_one(
        &self,
        query: &str,
        bind: &str,
    ) -> Result<Option<User>, DomainError> {
        let result = sqlx::query(query)
            .bind(bind)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::internal(format!("Failed to query user: {}", e)))?;

        match result {
            Some(row) => Ok(Some(Self::row_to_user(&row)?)),
            None => Ok(None),
        }
    }
}

const SELECT_COLUMNS: &str = "id, email, phone, first_name, last_name, account_type, \
     email_verified, phone_verified, created_at, updated_at, last_login_at";

#[async_trait]
impl UserRepository for MySqlUserRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DomainError> {
        let query = format!("SELECT {} FROM users WHERE id = ? LIMIT 1", SELECT_COLUMNS);
        self.find_one(&query, &id.to_string()).await
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        let query = format!("SELECT {} FROM users WHERE email = ? LIMIT 1", SELECT_COLUMNS);
        self.find_one(&query, email).await
    }

    async fn find_by_phone(&self, phone: &str) -> Result<Option<User>, DomainError> {
        let query = format!("SELECT {} FROM users WHERE phone = ? LIMIT 1", SELECT_COLUMNS);
        self.find_one(&query, phone).await
    }

    async fn create(&self, user: User) -> Result<User, DomainError> {
        let query = r#"
            INSERT INTO users (
                id, email, phone, first_name, last_name, account_type,
                email_verified, phone_verified, created_at, updated_at, last_login_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(user.id.to_string())
            .bind(&user.email)
            .bind(&user.phone)
            .bind(&user.first_name)
            .bind(&user.last_name)
            .bind(user.account_type.map(|t| t.as_str()))
            .bind(user.email_verified)
            .bind(user.phone_verified)
            .bind(user.created_at)
            .bind(user.updated_at)
            .bind(user.last_login_at)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::internal(format!("Failed to create user: {}", e)))?;

        Ok(user)
    }

    async fn update(&self, user: User) -> Result<User, DomainError> {
        let query = r#"
            UPDATE users SET
                email = ?, phone = ?, first_name = ?, last_name = ?,
                account_type = ?, email_verified = ?, phone_verified = ?,
                updated_at = ?, last_login_at = ?
            WHERE id = ?
        "#;

        let result = sqlx::query(query)
            .bind(&user.email)
            .bind(&user.phone)
            .bind(&user.first_name)
            .bind(&user.last_name)
            .bind(user.account_type.map(|t| t.as_str()))
            .bind(user.email_verified)
            .bind(user.phone_verified)
            .bind(user.updated_at)
            .bind(user.last_login_at)
            .bind(user.id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::internal(format!("Failed to update user: {}", e)))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::internal("Cannot update a user that does not exist"));
        }

        Ok(user)
    }
}
