//! Trait for external key-value cache integration

use async_trait::async_trait;

/// Trait for a key-value cache with per-key TTL
///
/// Backed by Redis in production; an in-memory implementation exists for
/// tests and local development. Errors are plain strings so the cache
/// backend does not leak its error types into the domain.
#[async_trait]
pub trait CacheServiceTrait: Send + Sync {
    /// Store a value under a key with a time-to-live
    async fn set(&self, key: &str, value: &str, ttl_seconds: u64) -> Result<(), String>;
    /// Fetch the value for a key, if present and unexpired
    async fn get(&self, key: &str) -> Result<Option<String>, String>;
    /// Remove a key
    async fn del(&self, key: &str) -> Result<(), String>;
}
