//! Authentication result value objects.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entities::user::User;

/// Payload returned after successful authentication
///
/// Returned by every identity-establishing operation (registration, password
/// login, OTP login, refresh) so session creation semantics stay uniform.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AuthPayload {
    /// The authenticated user
    pub user: User,

    /// JWT access token for API authentication
    pub access_token: String,

    /// JWT refresh token for obtaining a new session
    pub refresh_token: String,

    /// Access token expiration time in seconds
    pub expires_in: i64,
}

/// Result of a logout request
///
/// Logout is idempotent and never reveals whether the presented token was
/// valid, so this is always `{success: true}`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct LogoutResult {
    pub success: bool,
}

impl LogoutResult {
    pub fn ok() -> Self {
        Self { success: true }
    }
}

/// Claims surfaced by stateless access-token introspection
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AccessTokenIntrospection {
    /// The authenticated user's id
    pub user_id: Uuid,

    /// Email contact carried in the token, if any
    pub email: Option<String>,

    /// Account type carried in the token, if any
    pub account_type: Option<String>,

    /// Session the token was issued under
    pub session_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logout_result() {
        assert!(LogoutResult::ok().success);
    }
}
