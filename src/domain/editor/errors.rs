use thiserror::Error;
use uuid::Uuid;

use crate::domain::invoice::ValueObjectError;

#[derive(Debug, Error)]
pub enum EditorError {
  #[error("Validation error: {0}")]
  Validation(#[from] ValueObjectError),

  #[error("Session not found: {0}")]
  SessionNotFound(Uuid),

  #[error("An export is already in progress")]
  ExportInFlight,

  #[error("PDF export failed: {0}")]
  ExportFailed(String),

  #[error("Repository error: {0}")]
  Repository(String),
}
