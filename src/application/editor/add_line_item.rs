use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::editor::{EditorError, EditorService};

#[derive(Debug, Deserialize)]
pub struct AddLineItemCommand {
  pub session_id: Uuid,
}

#[derive(Debug, Serialize)]
pub struct AddLineItemResponse {
  pub item_id: Uuid,
  pub item_count: usize,
}

pub struct AddLineItemUseCase {
  editor_service: Arc<EditorService>,
}

impl AddLineItemUseCase {
  pub fn new(editor_service: Arc<EditorService>) -> Self {
    Self { editor_service }
  }

  pub async fn execute(
    &self,
    command: AddLineItemCommand,
  ) -> Result<AddLineItemResponse, EditorError> {
    let (session, item_id) = self.editor_service.add_line_item(command.session_id).await?;

    Ok(AddLineItemResponse {
      item_id,
      item_count: session.document.items.len(),
    })
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::infrastructure::persistence::memory::InMemorySessionRepository;

  #[tokio::test]
  async fn test_add_increments_count_with_fresh_id() {
    let service = Arc::new(EditorService::new(Arc::new(
      InMemorySessionRepository::new(),
    )));
    let use_case = AddLineItemUseCase::new(service.clone());
    let session = service.get_or_create_session(None).await.unwrap();
    let existing = session.document.items[0].id;

    let response = use_case
      .execute(AddLineItemCommand {
        session_id: session.id,
      })
      .await
      .unwrap();

    assert_eq!(response.item_count, 2);
    assert_ne!(response.item_id, existing);
  }
}
