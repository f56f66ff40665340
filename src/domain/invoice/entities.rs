use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use chrono::{Duration, Local, NaiveDate};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::value_objects::{ColorTheme, Currency};

// Line item - one billable row.
//
// Quantity, price and percentages are intentionally unvalidated: the editor
// coerces unparsable input to zero and the computations are total functions
// over whatever values are present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
  pub id: Uuid,
  pub description: String,
  pub quantity: Decimal,
  pub unit_price: Decimal,
  pub tax_percent: Decimal,
  pub discount_percent: Decimal,
}

impl LineItem {
  /// Fresh empty row as appended by the editor's "add item" action.
  pub fn new() -> Self {
    Self {
      id: Uuid::new_v4(),
      description: String::new(),
      quantity: Decimal::ONE,
      unit_price: Decimal::ZERO,
      tax_percent: Decimal::ZERO,
      discount_percent: Decimal::ZERO,
    }
  }

  /// quantity * unit_price, in base currency.
  pub fn subtotal(&self) -> Decimal {
    self.quantity * self.unit_price
  }

  pub fn tax_amount(&self) -> Decimal {
    self.subtotal() * self.tax_percent / dec!(100)
  }

  pub fn discount_amount(&self) -> Decimal {
    self.subtotal() * self.discount_percent / dec!(100)
  }

  /// Line total after tax and discount, converted into the display currency.
  pub fn total_in(&self, currency: Currency) -> Decimal {
    (self.subtotal() + self.tax_amount() - self.discount_amount()) * currency.rate
  }
}

impl Default for LineItem {
  fn default() -> Self {
    Self::new()
  }
}

// Company logo, kept as an opaque blob and rendered as a data URI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogoImage {
  pub mime_type: String,
  pub data: Vec<u8>,
}

impl LogoImage {
  pub fn new(mime_type: String, data: Vec<u8>) -> Self {
    Self { mime_type, data }
  }

  pub fn to_data_uri(&self) -> String {
    format!("data:{};base64,{}", self.mime_type, BASE64.encode(&self.data))
  }
}

// Invoice document - the full editable invoice state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceDocument {
  pub company_name: String,
  pub company_address: String,
  pub company_logo: Option<LogoImage>,
  pub client_name: String,
  pub client_address: String,
  pub invoice_number: String,
  pub invoice_date: NaiveDate,
  pub due_date: NaiveDate,
  pub color_theme: ColorTheme,
  pub items: Vec<LineItem>,
  pub notes: String,
}

/// Partial update from the editor surface. Present fields are merged into
/// the document; `items` replaces the whole list when item edits occur.
#[derive(Debug, Clone, Default)]
pub struct DocumentUpdate {
  pub company_name: Option<String>,
  pub company_address: Option<String>,
  pub client_name: Option<String>,
  pub client_address: Option<String>,
  pub invoice_number: Option<String>,
  pub invoice_date: Option<NaiveDate>,
  pub due_date: Option<NaiveDate>,
  pub color_theme: Option<ColorTheme>,
  pub items: Option<Vec<LineItem>>,
  pub notes: Option<String>,
}

impl InvoiceDocument {
  /// Placeholder document every session starts from: sample company and
  /// client text, one sample item, issued today and due in 30 days.
  pub fn new() -> Self {
    let today = Local::now().date_naive();

    Self {
      company_name: "Your Company".to_string(),
      company_address: "123 Business St, City, Country".to_string(),
      company_logo: None,
      client_name: "Client Name".to_string(),
      client_address: "Client Address, City, Country".to_string(),
      invoice_number: "001".to_string(),
      invoice_date: today,
      due_date: today + Duration::days(30),
      color_theme: ColorTheme::Blue,
      items: vec![LineItem {
        id: Uuid::new_v4(),
        description: "Service or Product".to_string(),
        quantity: Decimal::ONE,
        unit_price: dec!(100),
        tax_percent: dec!(10),
        discount_percent: Decimal::ZERO,
      }],
      notes: "Thank you for your business!".to_string(),
    }
  }

  /// Shallow-merge a partial update into the document.
  pub fn apply(&mut self, update: DocumentUpdate) {
    if let Some(v) = update.company_name {
      self.company_name = v;
    }
    if let Some(v) = update.company_address {
      self.company_address = v;
    }
    if let Some(v) = update.client_name {
      self.client_name = v;
    }
    if let Some(v) = update.client_address {
      self.client_address = v;
    }
    if let Some(v) = update.invoice_number {
      self.invoice_number = v;
    }
    if let Some(v) = update.invoice_date {
      self.invoice_date = v;
    }
    if let Some(v) = update.due_date {
      self.due_date = v;
    }
    if let Some(v) = update.color_theme {
      self.color_theme = v;
    }
    if let Some(v) = update.items {
      self.items = v;
    }
    if let Some(v) = update.notes {
      self.notes = v;
    }
  }

  /// Appends a fresh empty line item and returns its id.
  pub fn add_item(&mut self) -> Uuid {
    let item = LineItem::new();
    let id = item.id;
    self.items.push(item);
    id
  }

  /// Removes the item with the given id. Removing the last remaining item
  /// (or an unknown id) is a no-op; returns whether anything was removed.
  pub fn remove_item(&mut self, id: Uuid) -> bool {
    if self.items.len() <= 1 {
      return false;
    }
    let before = self.items.len();
    self.items.retain(|item| item.id != id);
    self.items.len() < before
  }

  pub fn set_logo(&mut self, logo: LogoImage) {
    self.company_logo = Some(logo);
  }

  /// The preview's "Bill To" block is shown only when the client block has
  /// any content left after trimming.
  pub fn has_client_details(&self) -> bool {
    !self.client_name.trim().is_empty() || !self.client_address.trim().is_empty()
  }
}

impl Default for InvoiceDocument {
  fn default() -> Self {
    Self::new()
  }
}

// Document totals - derived, never stored.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DocumentTotals {
  pub subtotal: Decimal,
  pub tax: Decimal,
  pub discount: Decimal,
  pub grand_total: Decimal,
}

impl DocumentTotals {
  /// Aggregates over the document's item order, in the display currency.
  ///
  /// The grand total is the sum of per-line totals with the currency rate
  /// already applied at the line level. It is never recombined from the
  /// aggregate subtotal/tax/discount, so summation order matches the
  /// per-line column exactly.
  pub fn calculate(document: &InvoiceDocument, currency: Currency) -> Self {
    let rate = currency.rate;

    let subtotal: Decimal = document.items.iter().map(|i| i.subtotal()).sum::<Decimal>() * rate;
    let tax: Decimal = document.items.iter().map(|i| i.tax_amount()).sum::<Decimal>() * rate;
    let discount: Decimal =
      document.items.iter().map(|i| i.discount_amount()).sum::<Decimal>() * rate;
    let grand_total: Decimal = document.items.iter().map(|i| i.total_in(currency)).sum();

    Self {
      subtotal,
      tax,
      discount,
      grand_total,
    }
  }
}
