//! Business services containing domain logic and use cases.

pub mod auth;
pub mod credential;
pub mod otp;
pub mod token;

// Re-export commonly used types
pub use auth::{AuthService, AuthServiceConfig};
pub use credential::CredentialService;
pub use otp::{CacheServiceTrait, OtpService, OtpServiceConfig, SendCodeResult};
pub use token::{TokenService, TokenServiceConfig};
