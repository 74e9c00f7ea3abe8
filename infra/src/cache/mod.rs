//! Cache module - Redis client and cache service

mod cache_service;
mod redis_client;

pub use cache_service::RedisCacheService;
pub use redis_client::RedisClient;
