use actix_multipart::form::{MultipartForm, bytes::Bytes as MultipartBytes};
use serde::{Deserialize, Serialize};

use crate::application::editor::LineItemDto;

/// Partial document update posted by the editor form. Absent fields are
/// left untouched; `items` replaces the whole list when present.
#[derive(Debug, Deserialize)]
pub struct UpdateDocumentRequest {
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

/// Currency selector submission
#[derive(Debug, Deserialize)]
pub struct CurrencyForm {
  pub code: String,
}

/// Edit/preview tab submission
#[derive(Debug, Deserialize)]
pub struct ViewForm {
  pub view: String,
}

/// Logo upload form. Any browser-supported image type is accepted; the
/// file-picker filter is the only gate.
#[derive(Debug, MultipartForm)]
pub struct LogoUploadForm {
  #[multipart(limit = "10MB")]
  pub logo: MultipartBytes,
}

/// Standard error response
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
  /// Error type/code
  pub error: String,

  /// Human-readable error message
  pub message: String,
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_update_request_accepts_partial_payloads() {
    let json = r#"{"invoice_number": "INV-7"}"#;
    let request: UpdateDocumentRequest = serde_json::from_str(json).unwrap();

    assert_eq!(request.invoice_number.as_deref(), Some("INV-7"));
    assert!(request.company_name.is_none());
    assert!(request.items.is_none());
  }

  #[test]
  fn test_update_request_items_carry_free_form_numerics() {
    let json = r#"{
      "items": [{
        "id": "7f9c30c4-9da3-4d8e-bc44-7b6ed8755c3f",
        "description": "Design work",
        "quantity": "3",
        "unit_price": "120.50",
        "tax_percent": "oops",
        "discount_percent": ""
      }]
    }"#;
    let request: UpdateDocumentRequest = serde_json::from_str(json).unwrap();

    let items = request.items.unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].quantity, "3");
    assert_eq!(items[0].tax_percent, "oops");
  }
}
