//! In-memory cache implementation for tests and local development

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use super::traits::CacheServiceTrait;

/// In-memory key-value cache with per-key expiry
///
/// Expired entries are dropped lazily on read.
#[derive(Clone, Default)]
pub struct MemoryCacheService {
    entries: Arc<RwLock<HashMap<String, (String, DateTime<Utc>)>>>,
}

impl MemoryCacheService {
    /// Create a new empty cache
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CacheServiceTrait for MemoryCacheService {
    async fn set(&self, key: &str, value: &str, ttl_seconds: u64) -> Result<(), String> {
        let expires_at = Utc::now() + Duration::seconds(ttl_seconds as i64);
        let mut entries = self.entries.write().await;
        entries.insert(key.to_string(), (value.to_string(), expires_at));
        Ok(())
    }

    async fn get(&self, key: &str) -> Result<Option<String>, String> {
        let entries = self.entries.read().await;
        match entries.get(key) {
            Some((value, expires_at)) if *expires_at > Utc::now() => Ok(Some(value.clone())),
            _ => Ok(None),
        }
    }

    async fn del(&self, key: &str) -> Result<(), String> {
        let mut entries = self.entries.write().await;
        entries.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_set_get_del() {
        let cache = MemoryCacheService::new();

        cache.set("k", "v", 60).await.unwrap();
        assert_eq!(cache.get("k").await.unwrap().as_deref(), Some("v"));

        cache.del("k").await.unwrap();
        assert_eq!(cache.get("k").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_expired_entry_is_gone() {
        let cache = MemoryCacheService::new();

        cache.set("k", "v", 0).await.unwrap();
        assert_eq!(cache.get("k").await.unwrap(), None);
    }
}
