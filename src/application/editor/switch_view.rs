use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::editor::{EditorError, EditorService, ViewMode};

#[derive(Debug, Deserialize)]
pub struct SwitchViewCommand {
  pub session_id: Uuid,
  pub view: String,
}

#[derive(Debug, Serialize)]
pub struct SwitchViewResponse {
  pub view: ViewMode,
}

pub struct SwitchViewUseCase {
  editor_service: Arc<EditorService>,
}

impl SwitchViewUseCase {
  pub fn new(editor_service: Arc<EditorService>) -> Self {
    Self { editor_service }
  }

  pub async fn execute(
    &self,
    command: SwitchViewCommand,
  ) -> Result<SwitchViewResponse, EditorError> {
    let view = ViewMode::from_str(&command.view)?;
    let session = self
      .editor_service
      .switch_view(command.session_id, view)
      .await?;

    Ok(SwitchViewResponse { view: session.view })
  }
}
