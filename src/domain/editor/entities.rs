use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use uuid::Uuid;

use super::errors::EditorError;
use crate::domain::invoice::{Currency, InvoiceDocument, ValueObjectError};

// Which editor tab is active. Only meaningful on narrow layouts where the
// form and the preview cannot sit side by side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
  Edit,
  Preview,
}

impl ViewMode {
  pub fn as_str(&self) -> &'static str {
    match self {
      ViewMode::Edit => "edit",
      ViewMode::Preview => "preview",
    }
  }
}

impl FromStr for ViewMode {
  type Err = ValueObjectError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.to_lowercase().as_str() {
      "edit" => Ok(ViewMode::Edit),
      "preview" => Ok(ViewMode::Preview),
      _ => Err(ValueObjectError::UnknownView(s.to_string())),
    }
  }
}

// Export lifecycle. At most one export may be in flight per session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportStatus {
  Idle,
  InProgress,
  Failed,
  Succeeded,
}

// Editor session - one per browser, addressed by cookie.
//
// Owns the document and the active currency; destroyed with the process.
#[derive(Debug, Clone, PartialEq)]
pub struct EditorSession {
  pub id: Uuid,
  pub document: InvoiceDocument,
  pub currency: Currency,
  pub view: ViewMode,
  pub export_status: ExportStatus,
  pub created_at: DateTime<Utc>,
  pub updated_at: DateTime<Utc>,
}

impl EditorSession {
  pub fn new() -> Self {
    let now = Utc::now();
    Self {
      id: Uuid::new_v4(),
      document: InvoiceDocument::new(),
      currency: Currency::USD,
      view: ViewMode::Edit,
      export_status: ExportStatus::Idle,
      created_at: now,
      updated_at: now,
    }
  }

  pub fn touch(&mut self) {
    self.updated_at = Utc::now();
  }

  pub fn set_currency(&mut self, currency: Currency) {
    self.currency = currency;
    self.touch();
  }

  pub fn set_view(&mut self, view: ViewMode) {
    self.view = view;
    self.touch();
  }

  /// Marks an export as started. Fails when one is already in flight so
  /// overlapping triggers cannot corrupt a running export.
  pub fn begin_export(&mut self) -> Result<(), EditorError> {
    if self.export_status == ExportStatus::InProgress {
      return Err(EditorError::ExportInFlight);
    }
    self.export_status = ExportStatus::InProgress;
    self.touch();
    Ok(())
  }

  /// Records the outcome of the export that was in flight.
  pub fn finish_export(&mut self, success: bool) {
    self.export_status = if success {
      ExportStatus::Succeeded
    } else {
      ExportStatus::Failed
    };
    self.touch();
  }
}

impl Default for EditorSession {
  fn default() -> Self {
    Self::new()
  }
}
