use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::editor::entities::EditorSession;
use crate::domain::editor::errors::EditorError;
use crate::domain::editor::ports::SessionRepository;

/// Process-local session store. Sessions live for the lifetime of the
/// server and are never written to disk.
pub struct InMemorySessionRepository {
  sessions: RwLock<HashMap<Uuid, EditorSession>>,
}

impl InMemorySessionRepository {
  pub fn new() -> Self {
    Self {
      sessions: RwLock::new(HashMap::new()),
    }
  }
}

impl Default for InMemorySessionRepository {
  fn default() -> Self {
    Self::new()
  }
}

#[async_trait]
impl SessionRepository for InMemorySessionRepository {
  async fn create(&self, session: EditorSession) -> Result<EditorSession, EditorError> {
    let mut sessions = self.sessions.write().await;
    sessions.insert(session.id, session.clone());
    Ok(session)
  }

  async fn find_by_id(&self, id: Uuid) -> Result<Option<EditorSession>, EditorError> {
    let sessions = self.sessions.read().await;
    Ok(sessions.get(&id).cloned())
  }

  async fn save(&self, session: EditorSession) -> Result<EditorSession, EditorError> {
    let mut sessions = self.sessions.write().await;
    if !sessions.contains_key(&session.id) {
      return Err(EditorError::SessionNotFound(session.id));
    }
    sessions.insert(session.id, session.clone());
    Ok(session)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[tokio::test]
  async fn test_create_and_find() {
    let repo = InMemorySessionRepository::new();
    let session = repo.create(EditorSession::new()).await.unwrap();

    let found = repo.find_by_id(session.id).await.unwrap();
    assert_eq!(found, Some(session));

    let missing = repo.find_by_id(Uuid::new_v4()).await.unwrap();
    assert!(missing.is_none());
  }

  #[tokio::test]
  async fn test_save_requires_existing_session() {
    let repo = InMemorySessionRepository::new();

    let unknown = EditorSession::new();
    assert!(matches!(
      repo.save(unknown).await,
      Err(EditorError::SessionNotFound(_))
    ));

    let mut session = repo.create(EditorSession::new()).await.unwrap();
    session.document.invoice_number = "042".to_string();
    repo.save(session.clone()).await.unwrap();

    let found = repo.find_by_id(session.id).await.unwrap().unwrap();
    assert_eq!(found.document.invoice_number, "042");
  }
}
