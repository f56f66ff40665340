use std::str::FromStr;
use std::sync::Arc;
use uuid::Uuid;

use super::entities::{EditorSession, ViewMode};
use super::errors::EditorError;
use super::ports::SessionRepository;
use crate::domain::invoice::{Currency, DocumentUpdate, LogoImage};

pub struct EditorService {
  session_repo: Arc<dyn SessionRepository>,
}

impl EditorService {
  pub fn new(session_repo: Arc<dyn SessionRepository>) -> Self {
    Self { session_repo }
  }

  /// Loads the session behind the browser cookie, or starts a fresh one
  /// when the cookie is absent or stale.
  pub async fn get_or_create_session(
    &self,
    id: Option<Uuid>,
  ) -> Result<EditorSession, EditorError> {
    if let Some(id) = id {
      if let Some(session) = self.session_repo.find_by_id(id).await? {
        return Ok(session);
      }
    }
    self.session_repo.create(EditorSession::new()).await
  }

  pub async fn get_session(&self, id: Uuid) -> Result<EditorSession, EditorError> {
    self
      .session_repo
      .find_by_id(id)
      .await?
      .ok_or(EditorError::SessionNotFound(id))
  }

  /// Shallow-merges a partial update into the session's document.
  pub async fn update_document(
    &self,
    id: Uuid,
    update: DocumentUpdate,
  ) -> Result<EditorSession, EditorError> {
    let mut session = self.get_session(id).await?;
    session.document.apply(update);
    session.touch();
    self.session_repo.save(session).await
  }

  /// Appends a fresh line item; returns the saved session and the new id.
  pub async fn add_line_item(&self, id: Uuid) -> Result<(EditorSession, Uuid), EditorError> {
    let mut session = self.get_session(id).await?;
    let item_id = session.document.add_item();
    session.touch();
    let session = self.session_repo.save(session).await?;
    Ok((session, item_id))
  }

  /// Removes a line item. Removing the last remaining item is a no-op.
  pub async fn remove_line_item(
    &self,
    id: Uuid,
    item_id: Uuid,
  ) -> Result<EditorSession, EditorError> {
    let mut session = self.get_session(id).await?;
    if session.document.remove_item(item_id) {
      session.touch();
      return self.session_repo.save(session).await;
    }
    Ok(session)
  }

  /// Switches the active currency. Codes outside the catalog are ignored
  /// and the current selection stays in place.
  pub async fn set_currency(&self, id: Uuid, code: &str) -> Result<EditorSession, EditorError> {
    let mut session = self.get_session(id).await?;
    if let Ok(currency) = Currency::from_str(code) {
      session.set_currency(currency);
      return self.session_repo.save(session).await;
    }
    Ok(session)
  }

  pub async fn switch_view(&self, id: Uuid, view: ViewMode) -> Result<EditorSession, EditorError> {
    let mut session = self.get_session(id).await?;
    session.set_view(view);
    self.session_repo.save(session).await
  }

  pub async fn set_logo(&self, id: Uuid, logo: LogoImage) -> Result<EditorSession, EditorError> {
    let mut session = self.get_session(id).await?;
    session.document.set_logo(logo);
    session.touch();
    self.session_repo.save(session).await
  }

  /// Export bookkeeping: flips the session into the in-progress state, or
  /// fails when an export is already running.
  pub async fn begin_export(&self, id: Uuid) -> Result<EditorSession, EditorError> {
    let mut session = self.get_session(id).await?;
    session.begin_export()?;
    self.session_repo.save(session).await
  }

  pub async fn finish_export(&self, id: Uuid, success: bool) -> Result<(), EditorError> {
    let mut session = self.get_session(id).await?;
    session.finish_export(success);
    self.session_repo.save(session).await?;
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::domain::editor::entities::ExportStatus;
  use crate::infrastructure::persistence::memory::InMemorySessionRepository;
  use rust_decimal_macros::dec;

  fn service() -> EditorService {
    EditorService::new(Arc::new(InMemorySessionRepository::new()))
  }

  #[tokio::test]
  async fn test_get_or_create_reuses_existing_session() {
    let service = service();

    let first = service.get_or_create_session(None).await.unwrap();
    let second = service.get_or_create_session(Some(first.id)).await.unwrap();
    assert_eq!(first.id, second.id);

    // Stale cookie id falls back to a fresh session
    let third = service
      .get_or_create_session(Some(Uuid::new_v4()))
      .await
      .unwrap();
    assert_ne!(first.id, third.id);
  }

  #[tokio::test]
  async fn test_update_document_merges_fields() {
    let service = service();
    let session = service.get_or_create_session(None).await.unwrap();

    let updated = service
      .update_document(
        session.id,
        DocumentUpdate {
          invoice_number: Some("INV-042".to_string()),
          ..Default::default()
        },
      )
      .await
      .unwrap();

    assert_eq!(updated.document.invoice_number, "INV-042");
    assert_eq!(updated.document.company_name, "Your Company");
  }

  #[tokio::test]
  async fn test_add_and_remove_line_items() {
    let service = service();
    let session = service.get_or_create_session(None).await.unwrap();
    let original_id = session.document.items[0].id;

    let (session, new_id) = service.add_line_item(session.id).await.unwrap();
    assert_eq!(session.document.items.len(), 2);
    assert_ne!(new_id, original_id);

    let session = service.remove_line_item(session.id, original_id).await.unwrap();
    assert_eq!(session.document.items.len(), 1);

    // Sole remaining item survives removal attempts
    let session = service.remove_line_item(session.id, new_id).await.unwrap();
    assert_eq!(session.document.items.len(), 1);
    assert_eq!(session.document.items[0].id, new_id);
  }

  #[tokio::test]
  async fn test_set_currency_ignores_unknown_codes() {
    let service = service();
    let session = service.get_or_create_session(None).await.unwrap();

    let session = service.set_currency(session.id, "EUR").await.unwrap();
    assert_eq!(session.currency, Currency::EUR);

    let session = service.set_currency(session.id, "XXX").await.unwrap();
    assert_eq!(session.currency, Currency::EUR);
  }

  #[tokio::test]
  async fn test_export_serialization() {
    let service = service();
    let session = service.get_or_create_session(None).await.unwrap();

    service.begin_export(session.id).await.unwrap();
    let second = service.begin_export(session.id).await;
    assert!(matches!(second, Err(EditorError::ExportInFlight)));

    service.finish_export(session.id, false).await.unwrap();
    let session = service.get_session(session.id).await.unwrap();
    assert_eq!(session.export_status, ExportStatus::Failed);

    // Session stays editable after a failed export
    let session = service
      .update_document(
        session.id,
        DocumentUpdate {
          notes: Some("still editable".to_string()),
          ..Default::default()
        },
      )
      .await
      .unwrap();
    assert_eq!(session.document.notes, "still editable");
  }

  #[tokio::test]
  async fn test_missing_session_errors() {
    let service = service();
    let missing = Uuid::new_v4();

    assert!(matches!(
      service.get_session(missing).await,
      Err(EditorError::SessionNotFound(_))
    ));
    assert!(
      service
        .update_document(
          missing,
          DocumentUpdate {
            notes: Some("x".to_string()),
            ..Default::default()
          }
        )
        .await
        .is_err()
    );
  }

  #[tokio::test]
  async fn test_totals_follow_document_edits() {
    use crate::domain::invoice::{DocumentTotals, LineItem};

    let service = service();
    let session = service.get_or_create_session(None).await.unwrap();

    let items = vec![LineItem {
      quantity: dec!(2),
      unit_price: dec!(50),
      tax_percent: dec!(10),
      discount_percent: dec!(5),
      ..LineItem::new()
    }];
    let session = service
      .update_document(
        session.id,
        DocumentUpdate {
          items: Some(items),
          ..Default::default()
        },
      )
      .await
      .unwrap();

    let totals = DocumentTotals::calculate(&session.document, session.currency);
    assert_eq!(totals.grand_total, dec!(105));
  }
}
