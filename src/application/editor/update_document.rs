use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::editor::{EditorError, EditorService};
use crate::domain::invoice::{ColorTheme, DocumentUpdate, LineItem, parse_or_zero};

/// One item row as posted by the editor form. Numeric fields are free-form
/// text and coerced to zero when unparsable.
#[derive(Debug, Clone, Deserialize)]
pub struct LineItemDto {
  pub id: Uuid,
  pub description: String,
  pub quantity: String,
  pub unit_price: String,
  pub tax_percent: String,
  pub discount_percent: String,
}

impl LineItemDto {
  fn into_line_item(self) -> LineItem {
    LineItem {
      id: self.id,
      description: self.description,
      quantity: parse_or_zero(&self.quantity),
      unit_price: parse_or_zero(&self.unit_price),
      tax_percent: parse_or_zero(&self.tax_percent),
      discount_percent: parse_or_zero(&self.discount_percent),
    }
  }
}

#[derive(Debug, Deserialize)]
pub struct UpdateDocumentCommand {
  pub session_id: Uuid,
  pub company_name: Option<String>,
  pub company_address: Option<String>,
  pub client_name: Option<String>,
  pub client_address: Option<String>,
  pub invoice_number: Option<String>,
  pub invoice_date: Option<String>,
  pub due_date: Option<String>,
  pub color_theme: Option<String>,
  pub items: Option<Vec<LineItemDto>>,
  pub notes: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct UpdateDocumentResponse {
  pub session_id: Uuid,
  pub item_count: usize,
}

pub struct UpdateDocumentUseCase {
  editor_service: Arc<EditorService>,
}

impl UpdateDocumentUseCase {
  pub fn new(editor_service: Arc<EditorService>) -> Self {
    Self { editor_service }
  }

  pub async fn execute(
    &self,
    command: UpdateDocumentCommand,
  ) -> Result<UpdateDocumentResponse, EditorError> {
    // Dates arrive as browser date-input strings; malformed or cleared
    // values leave the stored date untouched. Theme codes outside the
    // palette are likewise ignored.
    let update = DocumentUpdate {
      company_name: command.company_name,
      company_address: command.company_address,
      client_name: command.client_name,
      client_address: command.client_address,
      invoice_number: command.invoice_number,
      invoice_date: command
        .invoice_date
        .and_then(|s| NaiveDate::from_str(s.trim()).ok()),
      due_date: command
        .due_date
        .and_then(|s| NaiveDate::from_str(s.trim()).ok()),
      color_theme: command
        .color_theme
        .and_then(|s| ColorTheme::from_str(&s).ok()),
      items: command
        .items
        .map(|items| items.into_iter().map(LineItemDto::into_line_item).collect()),
      notes: command.notes,
    };

    let session = self
      .editor_service
      .update_document(command.session_id, update)
      .await?;

    Ok(UpdateDocumentResponse {
      session_id: session.id,
      item_count: session.document.items.len(),
    })
  }
}
