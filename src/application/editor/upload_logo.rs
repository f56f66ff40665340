use serde::Serialize;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::editor::{EditorError, EditorService};
use crate::domain::invoice::LogoImage;

#[derive(Debug)]
pub struct UploadLogoCommand {
  pub session_id: Uuid,
  pub mime_type: String,
  pub data: Vec<u8>,
}

#[derive(Debug, Serialize)]
pub struct UploadLogoResponse {
  pub data_uri: String,
}

pub struct UploadLogoUseCase {
  editor_service: Arc<EditorService>,
}

impl UploadLogoUseCase {
  pub fn new(editor_service: Arc<EditorService>) -> Self {
    Self { editor_service }
  }

  pub async fn execute(
    &self,
    command: UploadLogoCommand,
  ) -> Result<UploadLogoResponse, EditorError> {
    let logo = LogoImage::new(command.mime_type, command.data);
    let session = self
      .editor_service
      .set_logo(command.session_id, logo)
      .await?;

    let data_uri = session
      .document
      .company_logo
      .as_ref()
      .map(LogoImage::to_data_uri)
      .unwrap_or_default();

    Ok(UploadLogoResponse { data_uri })
  }
}
