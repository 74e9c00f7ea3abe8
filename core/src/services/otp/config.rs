//! Configuration for the one-time-code issuer

/// Configuration for the one-time-code issuer
#[derive(Debug, Clone)]
pub struct OtpServiceConfig {
    /// Pending-code time-to-live in seconds
    pub code_ttl_seconds: u64,
}

impl Default for OtpServiceConfig {
    fn default() -> Self {
        Self {
            code_ttl_seconds: 600, // 10 minutes
        }
    }
}
