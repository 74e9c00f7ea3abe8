//! In-memory implementation of SessionRepository for tests and local development

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::session::Session;
use crate::errors::DomainError;

use super::r#trait::SessionRepository;

/// In-memory session repository backed by a `HashMap` keyed by session id
///
/// The write lock around the map makes `delete_by_id_and_hash` naturally
/// conditional: of two concurrent calls for the same session, exactly one
/// observes the row and removes it.
#[derive(Clone, Default)]
pub struct InMemorySessionRepository {
    sessions: Arc<RwLock<HashMap<String, Session>>>,
}

impl InMemorySessionRepository {
    /// Create a new empty repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored sessions (test helper)
    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    /// Whether the repository holds no sessions
    pub async fn is_empty(&self) -> bool {
        self.sessions.read().await.is_empty()
    }
}

#[async_trait]
impl SessionRepository for InMemorySessionRepository {
    async fn create(&self, session: Session) -> Result<Session, DomainError> {
        let mut sessions = self.sessions.write().await;

        if sessions.contains_key(&session.id) {
            return Err(DomainError::conflict("Session id already exists"));
        }

        sessions.insert(session.id.clone(), session.clone());
        Ok(session)
    }

    async fn find_by_id_and_hash(
        &self,
        session_id: &str,
        refresh_token_hash: &str,
    ) -> Result<Option<Session>, DomainError> {
        let sessions = self.sessions.read().await;
        Ok(sessions
            .get(session_id)
            .filter(|s| s.refresh_token_hash == refresh_token_hash)
            .cloned())
    }

    async fn delete_by_id_and_hash(
        &self,
        session_id: &str,
        refresh_token_hash: &str,
    ) -> Result<bool, DomainError> {
        let mut sessions = self.sessions.write().await;

        let matches = sessions
            .get(session_id)
            .map(|s| s.refresh_token_hash == refresh_token_hash)
            .unwrap_or(false);

        if matches {
            sessions.remove(session_id);
            Ok(true)
        } else {
            Ok(false)
        }
    }

    async fn delete_by_id(&self, session_id: &str) -> Result<bool, DomainError> {
        let mut sessions = self.sessions.write().await;
        Ok(sessions.remove(session_id).is_some())
    }

    async fn delete_expired(&self) -> Result<usize, DomainError> {
        let mut sessions = self.sessions.write().await;
        let initial_count = sessions.len();

        sessions.retain(|_, session| !session.is_expired());

        Ok(initial_count - sessions.len())
    }
}
