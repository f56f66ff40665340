use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::editor::{EditorError, EditorService};

#[derive(Debug, Deserialize)]
pub struct SetCurrencyCommand {
  pub session_id: Uuid,
  pub code: String,
}

#[derive(Debug, Serialize)]
pub struct SetCurrencyResponse {
  pub currency_code: String,
}

pub struct SetCurrencyUseCase {
  editor_service: Arc<EditorService>,
}

impl SetCurrencyUseCase {
  pub fn new(editor_service: Arc<EditorService>) -> Self {
    Self { editor_service }
  }

  /// Catalog lookup; unknown codes leave the active currency unchanged.
  pub async fn execute(
    &self,
    command: SetCurrencyCommand,
  ) -> Result<SetCurrencyResponse, EditorError> {
    let session = self
      .editor_service
      .set_currency(command.session_id, &command.code)
      .await?;

    Ok(SetCurrencyResponse {
      currency_code: session.currency.code.to_string(),
    })
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::infrastructure::persistence::memory::InMemorySessionRepository;

  #[tokio::test]
  async fn test_unknown_code_is_ignored() {
    let service = Arc::new(EditorService::new(Arc::new(
      InMemorySessionRepository::new(),
    )));
    let use_case = SetCurrencyUseCase::new(service.clone());
    let session = service.get_or_create_session(None).await.unwrap();

    let response = use_case
      .execute(SetCurrencyCommand {
        session_id: session.id,
        code: "GBP".to_string(),
      })
      .await
      .unwrap();
    assert_eq!(response.currency_code, "GBP");

    let response = use_case
      .execute(SetCurrencyCommand {
        session_id: session.id,
        code: "BTC".to_string(),
      })
      .await
      .unwrap();
    assert_eq!(response.currency_code, "GBP");
  }
}
