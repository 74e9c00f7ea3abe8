//! Credential entity binding a user to an authentication provider.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Authentication provider for a credential
///
/// Only password credentials are issued today; the variant set and the
/// `external_id` column on [`Credential`] leave room for federated providers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CredentialProvider {
    /// Local password credential
    Password,
}

impl CredentialProvider {
    /// String form used as the storage key
    pub fn as_str(&self) -> &'static str {
        match self {
            CredentialProvider::Password => "password",
        }
    }
}

impl std::fmt::Display for CredentialProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Credential entity, one row per (user, provider)
///
/// The password hash is a bcrypt digest; the plaintext password never leaves
/// the credential service. There is no password-change flow: a credential is
/// written once at registration and only read afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credential {
    /// Unique identifier for the credential
    pub id: Uuid,

    /// User this credential belongs to
    pub user_id: Uuid,

    /// Authentication provider
    pub provider: CredentialProvider,

    /// bcrypt hash of the password (password provider only)
    pub password_hash: Option<String>,

    /// Provider-side subject identifier (federated providers only)
    pub external_id: Option<String>,

    /// Timestamp when the credential was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the credential was last updated
    pub updated_at: DateTime<Utc>,
}

impl Credential {
    /// Creates a new password credential from an already-computed hash
    pub fn new_password(user_id: Uuid, password_hash: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            user_id,
            provider: CredentialProvider::Password,
            password_hash: Some(password_hash),
            external_id: None,
            created_at: now,
            updated_at: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_password_credential() {
        let user_id = Uuid::new_v4();
        let credential = Credential::new_password(user_id, "$2b$12$hash".to_string());

        assert_eq!(credential.user_id, user_id);
        assert_eq!(credential.provider, CredentialProvider::Password);
        assert_eq!(credential.password_hash.as_deref(), Some("$2b$12$hash"));
        assert!(credential.external_id.is_none());
    }

    #[test]
    fn test_provider_as_str() {
        assert_eq!(CredentialProvider::Password.as_str(), "password");
        assert_eq!(CredentialProvider::Password.to_string(), "password");
    }
}
