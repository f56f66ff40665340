use async_trait::async_trait;
use std::time::Duration;
use tokio::process::Command;
use uuid::Uuid;

use crate::domain::editor::errors::EditorError;
use crate::domain::editor::ports::PdfExporter;

/// Export pipeline backed by the wkhtmltopdf binary.
///
/// The preview surface is fetched over HTTP from the server's own print
/// view and rendered onto a single A4 page: full page width, no margins,
/// content anchored at the page top. Output lands in a scratch file that is
/// read back and deleted.
pub struct WkHtmlToPdfExporter {
  wkhtmltopdf_path: String,
  server_base_url: String,
  timeout: Duration,
}

impl WkHtmlToPdfExporter {
  pub fn new(
    wkhtmltopdf_path: Option<String>,
    server_base_url: String,
    timeout_seconds: u64,
  ) -> Self {
    Self {
      wkhtmltopdf_path: wkhtmltopdf_path.unwrap_or_else(|| "wkhtmltopdf".to_string()),
      server_base_url,
      timeout: Duration::from_secs(timeout_seconds),
    }
  }

  async fn verify_installed(&self) -> Result<(), EditorError> {
    let output = Command::new(&self.wkhtmltopdf_path)
      .arg("--version")
      .output()
      .await
      .map_err(|e| {
        EditorError::ExportFailed(format!(
          "wkhtmltopdf not found: {}. Please install wkhtmltopdf.",
          e
        ))
      })?;

    if !output.status.success() {
      return Err(EditorError::ExportFailed(
        "wkhtmltopdf is not working correctly".to_string(),
      ));
    }

    Ok(())
  }
}

#[async_trait]
impl PdfExporter for WkHtmlToPdfExporter {
  async fn render_invoice(&self, session_id: Uuid) -> Result<Vec<u8>, EditorError> {
    self.verify_installed().await?;

    let print_url = format!("{}/print/{}", self.server_base_url, session_id);
    let output_path = std::env::temp_dir().join(format!("billforge-{}.pdf", Uuid::new_v4()));
    let output_arg = output_path.to_string_lossy().to_string();
    tracing::info!("Rendering PDF from {}", print_url);

    let run = Command::new(&self.wkhtmltopdf_path)
      .args([
        "--page-size",
        "A4",
        "--orientation",
        "Portrait",
        "--margin-top",
        "0mm",
        "--margin-bottom",
        "0mm",
        "--margin-left",
        "0mm",
        "--margin-right",
        "0mm",
        "--quiet",
        &print_url,
        &output_arg,
      ])
      .output();

    let output = tokio::time::timeout(self.timeout, run)
      .await
      .map_err(|_| {
        EditorError::ExportFailed(format!(
          "wkhtmltopdf timed out after {} seconds",
          self.timeout.as_secs()
        ))
      })?
      .map_err(|e| EditorError::ExportFailed(format!("wkhtmltopdf execution failed: {}", e)))?;

    if !output.status.success() {
      let stderr = String::from_utf8_lossy(&output.stderr);
      return Err(EditorError::ExportFailed(format!(
        "wkhtmltopdf failed: {}",
        stderr
      )));
    }

    let bytes = tokio::fs::read(&output_path)
      .await
      .map_err(|e| EditorError::ExportFailed(format!("PDF file was not created: {}", e)))?;

    // Scratch file is no longer needed once the bytes are in memory
    tokio::fs::remove_file(&output_path).await.ok();

    Ok(bytes)
  }
}
