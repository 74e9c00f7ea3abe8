//! Session entity binding a refresh-token hash to a user.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::token::REFRESH_TOKEN_EXPIRY_DAYS;

/// Length of a session identifier in characters
pub const SESSION_ID_LENGTH: usize = 32;

/// Server-side session record
///
/// One row per issued refresh token. The raw refresh token is never
/// persisted; only its SHA-256 hash is stored, and both the session id and
/// the hash must match on lookup. A row represents exactly one still-valid,
/// not-yet-rotated refresh token: rotation deletes the row and creates a new
/// one, revocation deletes it outright. Expiry is checked lazily at refresh
/// time, so callers must test both existence and `expires_at`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Opaque random session identifier
    pub id: String,

    /// User this session belongs to
    pub user_id: Uuid,

    /// SHA-256 hash of the refresh token issued for this session
    pub refresh_token_hash: String,

    /// User agent the session was established from
    pub user_agent: Option<String>,

    /// Client IP address the session was established from
    pub ip_address: Option<String>,

    /// Timestamp when the session expires
    pub expires_at: DateTime<Utc>,

    /// Timestamp when the session was created
    pub created_at: DateTime<Utc>,
}

impl Session {
    /// Creates a new session expiring after the refresh-token lifetime
    pub fn new(
        id: String,
        user_id: Uuid,
        refresh_token_hash: String,
        user_agent: Option<String>,
        ip_address: Option<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id,
            user_id,
            refresh_token_hash,
            user_agent,
            ip_address,
            expires_at: now + Duration::days(REFRESH_TOKEN_EXPIRY_DAYS),
            created_at: now,
        }
    }

    /// Checks if the session has expired
    pub fn is_expired(&self) -> bool {
        Utc::now() > self.expires_at
    }

    /// Gets the time remaining until expiration, or zero if expired
    pub fn time_until_expiration(&self) -> Duration {
        let now = Utc::now();
        if self.expires_at > now {
            self.expires_at - now
        } else {
            Duration::zero()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_session() -> Session {
        Session::new(
            "a".repeat(SESSION_ID_LENGTH),
            Uuid::new_v4(),
            "token_hash".to_string(),
            Some("test-agent/1.0".to_string()),
            Some("203.0.113.7".to_string()),
        )
    }

    #[test]
    fn test_session_creation() {
        let session = sample_session();

        assert_eq!(session.id.len(), SESSION_ID_LENGTH);
        assert_eq!(session.refresh_token_hash, "token_hash");
        assert!(!session.is_expired());
    }

    #[test]
    fn test_session_expiration() {
        let mut session = sample_session();
        session.expires_at = Utc::now() - Duration::days(1);

        assert!(session.is_expired());
        assert_eq!(session.time_until_expiration(), Duration::zero());
    }

    #[test]
    fn test_session_time_until_expiration() {
        let session = sample_session();

        let remaining = session.time_until_expiration();
        assert!(remaining <= Duration::days(REFRESH_TOKEN_EXPIRY_DAYS));
        assert!(remaining > Duration::days(REFRESH_TOKEN_EXPIRY_DAYS - 1));
    }

    #[test]
    fn test_session_serialization() {
        let session = sample_session();
        let json = serde_json::to_string(&session).unwrap();
        let deserialized: Session = serde_json::from_str(&json).unwrap();
        assert_eq!(session, deserialized);
    }
}
