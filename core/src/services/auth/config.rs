//! Configuration for the authentication service

/// Configuration for the authentication service
#[derive(Debug, Clone)]
pub struct AuthServiceConfig {
    /// Mirror freshly issued access tokens into the external cache so
    /// sibling services can introspect without parsing JWTs themselves.
    /// The cache is an optimization only; writes that fail are ignored.
    pub cache_access_tokens: bool,
}

impl Default for AuthServiceConfig {
    fn default() -> Self {
        Self {
            cache_access_tokens: true,
        }
    }
}
