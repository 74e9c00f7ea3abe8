//! Session repository trait defining the interface for session persistence.

use async_trait::async_trait;

use crate::domain::entities::session::Session;
use crate::errors::DomainError;

/// Repository trait for Session entity persistence operations
///
/// # Security Considerations
/// - Only the refresh-token hash is ever stored, never the raw token
/// - Lookups require both the session id and the hash, so a leaked session
///   id alone cannot be used to hijack or revoke a session
/// - `delete_by_id_and_hash` must be conditional: it reports whether a row
///   was actually removed, and only the remover may proceed to issue a
///   replacement session. This is what makes refresh-token rotation behave
///   atomically under concurrent refreshes of the same token.
#[async_trait]
pub trait SessionRepository: Send + Sync {
    /// Persist a new session
    async fn create(&self, session: Session) -> Result<Session, DomainError>;

    /// Find a session by id and refresh-token hash
    ///
    /// Both must match; this is the sole lookup used for refresh and logout.
    ///
    /// # Returns
    /// * `Ok(Some(Session))` - Session found
    /// * `Ok(None)` - No session with that id, or the hash does not match
    /// * `Err(DomainError)` - Database error occurred
    async fn find_by_id_and_hash(
        &self,
        session_id: &str,
        refresh_token_hash: &str,
    ) -> Result<Option<Session>, DomainError>;

    /// Conditionally delete a session by id and refresh-token hash
    ///
    /// # Returns
    /// * `Ok(true)` - The row existed and this call removed it
    /// * `Ok(false)` - No matching row (already rotated, revoked, or never existed)
    /// * `Err(DomainError)` - Deletion failed
    async fn delete_by_id_and_hash(
        &self,
        session_id: &str,
        refresh_token_hash: &str,
    ) -> Result<bool, DomainError>;

    /// Delete a session by id alone
    ///
    /// # Returns
    /// * `Ok(true)` - The row existed and was removed
    /// * `Ok(false)` - No row with that id
    async fn delete_by_id(&self, session_id: &str) -> Result<bool, DomainError>;

    /// Delete sessions whose `expires_at` has passed
    ///
    /// Maintenance sweep; expiry is otherwise only checked lazily at refresh
    /// time, so rows for abandoned sessions accumulate until this runs.
    ///
    /// # Returns
    /// * `Ok(usize)` - Number of sessions removed
    async fn delete_expired(&self) -> Result<usize, DomainError>;
}
