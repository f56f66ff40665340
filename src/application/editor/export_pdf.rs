use serde::Serialize;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::editor::ports::PdfExporter;
use crate::domain::editor::{EditorError, EditorService};

#[derive(Debug)]
pub struct ExportPdfCommand {
  pub session_id: Uuid,
}

#[derive(Debug, Serialize)]
pub struct ExportPdfResponse {
  pub filename: String,
  #[serde(skip)]
  pub bytes: Vec<u8>,
}

pub struct ExportPdfUseCase {
  editor_service: Arc<EditorService>,
  pdf_exporter: Arc<dyn PdfExporter>,
}

impl ExportPdfUseCase {
  pub fn new(editor_service: Arc<EditorService>, pdf_exporter: Arc<dyn PdfExporter>) -> Self {
    Self {
      editor_service,
      pdf_exporter,
    }
  }

  /// Runs the capture-and-encode pipeline for one session.
  ///
  /// Exports are serialized per session: a trigger that lands while one is
  /// in flight fails with `ExportInFlight` before touching the renderer.
  /// Pipeline failures are recorded on the session and returned; the
  /// document stays editable either way.
  pub async fn execute(&self, command: ExportPdfCommand) -> Result<ExportPdfResponse, EditorError> {
    let session = self.editor_service.begin_export(command.session_id).await?;
    let filename = format!("Invoice-{}.pdf", session.document.invoice_number);

    match self.pdf_exporter.render_invoice(session.id).await {
      Ok(bytes) => {
        self.editor_service.finish_export(session.id, true).await?;
        tracing::info!("Exported {} ({} bytes)", filename, bytes.len());
        Ok(ExportPdfResponse { filename, bytes })
      }
      Err(err) => {
        tracing::warn!("PDF export failed: {}", err);
        self.editor_service.finish_export(session.id, false).await?;
        Err(err)
      }
    }
  }
}
