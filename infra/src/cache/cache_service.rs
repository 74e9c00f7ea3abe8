//! Redis-backed implementation of the core cache trait

use async_trait::async_trait;

use wl_core::services::otp::CacheServiceTrait;

use super::redis_client::RedisClient;

/// Redis-backed cache service
///
/// Adapts [`RedisClient`] to the string-keyed cache trait the core services
/// consume for pending OTP codes and access-token mirroring.
#[derive(Clone)]
pub struct RedisCacheService {
    client: RedisClient,
}

impl RedisCacheService {
    /// Create a new Redis cache service
    pub fn new(client: RedisClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl CacheServiceTrait for RedisCacheService {
    async fn set(&self, key: &str, value: &str, ttl_seconds: u64) -> Result<(), String> {
        self.client
            .set_with_expiry(key, value, ttl_seconds)
            .await
            .map_err(|e| e.to_string())
    }

    async fn get(&self, key: &str) -> Result<Option<String>, String> {
        self.client.get(key).await.map_err(|e| e.to_string())
    }

    async fn del(&self, key: &str) -> Result<(), String> {
        self.client.delete(key).await.map_err(|e| e.to_string())
    }
}
