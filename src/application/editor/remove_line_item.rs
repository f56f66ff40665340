use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::editor::{EditorError, EditorService};

#[derive(Debug, Deserialize)]
pub struct RemoveLineItemCommand {
  pub session_id: Uuid,
  pub item_id: Uuid,
}

#[derive(Debug, Serialize)]
pub struct RemoveLineItemResponse {
  pub item_count: usize,
}

pub struct RemoveLineItemUseCase {
  editor_service: Arc<EditorService>,
}

impl RemoveLineItemUseCase {
  pub fn new(editor_service: Arc<EditorService>) -> Self {
    Self { editor_service }
  }

  pub async fn execute(
    &self,
    command: RemoveLineItemCommand,
  ) -> Result<RemoveLineItemResponse, EditorError> {
    let session = self
      .editor_service
      .remove_line_item(command.session_id, command.item_id)
      .await?;

    Ok(RemoveLineItemResponse {
      item_count: session.document.items.len(),
    })
  }
}
