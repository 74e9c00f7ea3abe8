//! Shared utilities and common types for the WorkLine server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types
//! - Utility functions (contact validation, etc.)

pub mod config;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{
    AppConfig, CacheConfig, DatabaseConfig, Environment, JwtConfig, ServerConfig,
};
pub use utils::validation;
