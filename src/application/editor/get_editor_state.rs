use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::editor::{EditorError, EditorService, EditorSession, ExportStatus, ViewMode};
use crate::domain::invoice::{ColorTheme, Currency, DocumentTotals, LogoImage};

#[derive(Debug, Deserialize)]
pub struct GetEditorStateCommand {
  pub session_id: Uuid,
}

/// Currency catalog entry for the selector dropdown.
#[derive(Debug, Serialize)]
pub struct CurrencyDto {
  pub code: String,
  pub symbol: String,
  pub selected: bool,
}

/// Palette entry for the theme picker.
#[derive(Debug, Serialize)]
pub struct ThemeDto {
  pub id: String,
  pub hex: String,
  pub selected: bool,
}

/// Raw document values as the form inputs show them (unformatted).
#[derive(Debug, Serialize)]
pub struct ItemFormDto {
  pub id: Uuid,
  pub description: String,
  pub quantity: String,
  pub unit_price: String,
  pub tax_percent: String,
  pub discount_percent: String,
}

#[derive(Debug, Serialize)]
pub struct DocumentFormDto {
  pub company_name: String,
  pub company_address: String,
  pub client_name: String,
  pub client_address: String,
  pub invoice_number: String,
  pub invoice_date: String,
  pub due_date: String,
  pub notes: String,
  pub items: Vec<ItemFormDto>,
}

/// One rendered row of the preview table. Monetary columns are already
/// converted and formatted in the display currency.
#[derive(Debug, Serialize)]
pub struct PreviewLineDto {
  pub id: Uuid,
  pub description: String,
  pub quantity: String,
  pub unit_price: String,
  pub tax_percent: String,
  pub discount_percent: String,
  pub total: String,
}

/// Read-only projection of the document plus derived figures.
#[derive(Debug, Serialize)]
pub struct PreviewDto {
  pub company_name: String,
  pub company_address: String,
  pub logo_data_uri: Option<String>,
  pub show_bill_to: bool,
  pub client_name: String,
  pub client_address: String,
  pub invoice_number: String,
  pub invoice_date: String,
  pub due_date: String,
  pub theme_hex: String,
  pub notes: String,
  pub items: Vec<PreviewLineDto>,
  pub subtotal: String,
  pub tax: String,
  pub discount: String,
  pub grand_total: String,
  pub currency_code: String,
}

#[derive(Debug, Serialize)]
pub struct EditorStateResponse {
  pub session_id: Uuid,
  pub view: ViewMode,
  pub export_status: ExportStatus,
  pub currency_code: String,
  pub currencies: Vec<CurrencyDto>,
  pub themes: Vec<ThemeDto>,
  pub form: DocumentFormDto,
  pub preview: PreviewDto,
}

pub struct GetEditorStateUseCase {
  editor_service: Arc<EditorService>,
}

impl GetEditorStateUseCase {
  pub fn new(editor_service: Arc<EditorService>) -> Self {
    Self { editor_service }
  }

  pub async fn execute(
    &self,
    command: GetEditorStateCommand,
  ) -> Result<EditorStateResponse, EditorError> {
    let session = self.editor_service.get_session(command.session_id).await?;
    Ok(build_state(&session))
  }
}

fn format_date(date: chrono::NaiveDate) -> String {
  date.format("%b %-d, %Y").to_string()
}

pub(crate) fn build_state(session: &EditorSession) -> EditorStateResponse {
  let document = &session.document;
  let currency = session.currency;
  let totals = DocumentTotals::calculate(document, currency);

  let currencies = Currency::ALL
    .into_iter()
    .map(|c| CurrencyDto {
      code: c.code.to_string(),
      symbol: c.symbol.to_string(),
      selected: c == currency,
    })
    .collect();

  let themes = ColorTheme::ALL
    .into_iter()
    .map(|t| ThemeDto {
      id: t.as_str().to_string(),
      hex: t.hex().to_string(),
      selected: t == document.color_theme,
    })
    .collect();

  let form = DocumentFormDto {
    company_name: document.company_name.clone(),
    company_address: document.company_address.clone(),
    client_name: document.client_name.clone(),
    client_address: document.client_address.clone(),
    invoice_number: document.invoice_number.clone(),
    invoice_date: document.invoice_date.format("%Y-%m-%d").to_string(),
    due_date: document.due_date.format("%Y-%m-%d").to_string(),
    notes: document.notes.clone(),
    items: document
      .items
      .iter()
      .map(|item| ItemFormDto {
        id: item.id,
        description: item.description.clone(),
        quantity: item.quantity.to_string(),
        unit_price: item.unit_price.to_string(),
        tax_percent: item.tax_percent.to_string(),
        discount_percent: item.discount_percent.to_string(),
      })
      .collect(),
  };

  let preview = PreviewDto {
    company_name: document.company_name.clone(),
    company_address: document.company_address.clone(),
    logo_data_uri: document.company_logo.as_ref().map(LogoImage::to_data_uri),
    show_bill_to: document.has_client_details(),
    client_name: document.client_name.clone(),
    client_address: document.client_address.clone(),
    invoice_number: document.invoice_number.clone(),
    invoice_date: format_date(document.invoice_date),
    due_date: format_date(document.due_date),
    theme_hex: document.color_theme.hex().to_string(),
    notes: document.notes.clone(),
    items: document
      .items
      .iter()
      .map(|item| PreviewLineDto {
        id: item.id,
        description: item.description.clone(),
        quantity: item.quantity.to_string(),
        unit_price: currency.format(item.unit_price * currency.rate),
        tax_percent: item.tax_percent.to_string(),
        discount_percent: item.discount_percent.to_string(),
        total: currency.format(item.total_in(currency)),
      })
      .collect(),
    subtotal: currency.format(totals.subtotal),
    tax: currency.format(totals.tax),
    discount: currency.format(totals.discount),
    grand_total: currency.format(totals.grand_total),
    currency_code: currency.code.to_string(),
  };

  EditorStateResponse {
    session_id: session.id,
    view: session.view,
    export_status: session.export_status,
    currency_code: currency.code.to_string(),
    currencies,
    themes,
    form,
    preview,
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::domain::invoice::{DocumentUpdate, LineItem};
  use crate::infrastructure::persistence::memory::InMemorySessionRepository;
  use rust_decimal_macros::dec;

  fn use_case() -> (Arc<EditorService>, GetEditorStateUseCase) {
    let service = Arc::new(EditorService::new(Arc::new(
      InMemorySessionRepository::new(),
    )));
    (service.clone(), GetEditorStateUseCase::new(service))
  }

  #[tokio::test]
  async fn test_preview_totals_for_sample_scenario() {
    let (service, use_case) = use_case();
    let session = service.get_or_create_session(None).await.unwrap();

    let items = vec![LineItem {
      quantity: dec!(2),
      unit_price: dec!(50),
      tax_percent: dec!(10),
      discount_percent: dec!(5),
      ..LineItem::new()
    }];
    service
      .update_document(
        session.id,
        DocumentUpdate {
          items: Some(items),
          ..Default::default()
        },
      )
      .await
      .unwrap();

    let state = use_case
      .execute(GetEditorStateCommand {
        session_id: session.id,
      })
      .await
      .unwrap();

    assert_eq!(state.preview.subtotal, "$100.00");
    assert_eq!(state.preview.tax, "$10.00");
    assert_eq!(state.preview.discount, "$5.00");
    assert_eq!(state.preview.grand_total, "$105.00");
    assert_eq!(state.preview.items[0].total, "$105.00");
    assert_eq!(state.preview.items[0].quantity, "2");
  }

  #[tokio::test]
  async fn test_bill_to_suppressed_when_client_blank() {
    let (service, use_case) = use_case();
    let session = service.get_or_create_session(None).await.unwrap();

    service
      .update_document(
        session.id,
        DocumentUpdate {
          client_name: Some("   ".to_string()),
          client_address: Some(String::new()),
          ..Default::default()
        },
      )
      .await
      .unwrap();

    let state = use_case
      .execute(GetEditorStateCommand {
        session_id: session.id,
      })
      .await
      .unwrap();
    assert!(!state.preview.show_bill_to);
  }

  #[tokio::test]
  async fn test_catalog_marks_active_currency() {
    let (service, use_case) = use_case();
    let session = service.get_or_create_session(None).await.unwrap();
    service.set_currency(session.id, "CAD").await.unwrap();

    let state = use_case
      .execute(GetEditorStateCommand {
        session_id: session.id,
      })
      .await
      .unwrap();

    assert_eq!(state.currency_code, "CAD");
    let selected: Vec<_> = state.currencies.iter().filter(|c| c.selected).collect();
    assert_eq!(selected.len(), 1);
    assert_eq!(selected[0].code, "CAD");
    assert_eq!(selected[0].symbol, "C$");
  }
}
