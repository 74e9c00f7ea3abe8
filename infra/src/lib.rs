//! # Infrastructure Layer
//!
//! This crate implements the infrastructure layer for the WorkLine
//! authentication service. It provides concrete implementations for the
//! repository and cache traits the core crate defines:
//!
//! - **Database**: MySQL repositories using SQLx
//! - **Cache**: Redis client backing OTP codes and access-token mirroring

/// Database module - MySQL implementations using SQLx
pub mod database;

/// Cache module - Redis client and cache service
pub mod cache;

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Database connection error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Redis cache error
    #[error("Cache error: {0}")]
    Cache(#[from] redis::RedisError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
