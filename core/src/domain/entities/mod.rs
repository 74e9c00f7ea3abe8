//! Domain entities representing core business objects.

pub mod credential;
pub mod one_time_secret;
pub mod session;
pub mod token;
pub mod user;

// Re-export commonly used types
pub use credential::{Credential, CredentialProvider};
pub use one_time_secret::{OneTimeSecret, OtpChannel};
pub use session::{Session, SESSION_ID_LENGTH};
pub use token::{
    AccessClaims, RefreshClaims, SignedRefreshToken,
    DEFAULT_ACCESS_TOKEN_EXPIRY_SECONDS, JWT_AUDIENCE, JWT_ISSUER,
    REFRESH_TOKEN_EXPIRY_DAYS,
};
pub use user::{AccountType, User};
