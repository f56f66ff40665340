use async_trait::async_trait;
use uuid::Uuid;

use super::entities::EditorSession;
use super::errors::EditorError;

#[async_trait]
pub trait SessionRepository: Send + Sync {
  async fn create(&self, session: EditorSession) -> Result<EditorSession, EditorError>;
  async fn find_by_id(&self, id: Uuid) -> Result<Option<EditorSession>, EditorError>;
  async fn save(&self, session: EditorSession) -> Result<EditorSession, EditorError>;
}

/// Rendering seam for the export pipeline. Implementations capture the
/// session's preview surface and package it as an A4 PDF.
#[async_trait]
pub trait PdfExporter: Send + Sync {
  async fn render_invoice(&self, session_id: Uuid) -> Result<Vec<u8>, EditorError>;
}
