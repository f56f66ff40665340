use actix_multipart::form::MultipartForm;
use actix_web::{HttpRequest, HttpResponse, web};
use std::sync::Arc;
use uuid::Uuid;

use crate::adapters::http::dtos::{CurrencyForm, LogoUploadForm, UpdateDocumentRequest, ViewForm};
use crate::adapters::http::errors::ApiError;
use crate::adapters::http::templates::TemplateEngine;
use crate::application::editor::{
  AddLineItemCommand, AddLineItemUseCase, GetEditorStateCommand, GetEditorStateUseCase,
  RemoveLineItemCommand, RemoveLineItemUseCase, SetCurrencyCommand, SetCurrencyUseCase,
  SwitchViewCommand, SwitchViewUseCase, UpdateDocumentCommand, UpdateDocumentUseCase,
  UploadLogoCommand, UploadLogoUseCase,
};

use super::require_session;

// GET /preview - the preview fragment the editor swaps in after each edit
pub async fn preview_fragment(
  req: HttpRequest,
  templates: web::Data<TemplateEngine>,
  get_state_use_case: web::Data<Arc<GetEditorStateUseCase>>,
) -> Result<HttpResponse, ApiError> {
  let session_id = require_session(&req)?;

  let state = get_state_use_case
    .execute(GetEditorStateCommand { session_id })
    .await?;

  let mut context = tera::Context::new();
  context.insert("preview", &state.preview);

  let html = templates
    .render("partials/preview.html.tera", &context)
    .map_err(|e| ApiError::Internal(format!("Template error: {}", e)))?;

  Ok(HttpResponse::Ok().content_type("text/html").body(html))
}

// POST /document - partial document update
pub async fn update_document_submit(
  req: HttpRequest,
  form: web::Json<UpdateDocumentRequest>,
  update_document_use_case: web::Data<Arc<UpdateDocumentUseCase>>,
) -> Result<HttpResponse, ApiError> {
  let session_id = require_session(&req)?;
  let form = form.into_inner();

  let response = update_document_use_case
    .execute(UpdateDocumentCommand {
      session_id,
      company_name: form.company_name,
      company_address: form.company_address,
      client_name: form.client_name,
      client_address: form.client_address,
      invoice_number: form.invoice_number,
      invoice_date: form.invoice_date,
      due_date: form.due_date,
      color_theme: form.color_theme,
      items: form.items,
      notes: form.notes,
    })
    .await?;

  Ok(HttpResponse::Ok().json(response))
}

// POST /items - append a fresh line item
pub async fn add_item_submit(
  req: HttpRequest,
  add_line_item_use_case: web::Data<Arc<AddLineItemUseCase>>,
) -> Result<HttpResponse, ApiError> {
  let session_id = require_session(&req)?;

  let response = add_line_item_use_case
    .execute(AddLineItemCommand { session_id })
    .await?;

  Ok(HttpResponse::Ok().json(response))
}

// DELETE /items/{item_id} - drop a line item (the last one stays put)
pub async fn remove_item_submit(
  req: HttpRequest,
  path: web::Path<Uuid>,
  remove_line_item_use_case: web::Data<Arc<RemoveLineItemUseCase>>,
) -> Result<HttpResponse, ApiError> {
  let session_id = require_session(&req)?;
  let item_id = path.into_inner();

  let response = remove_line_item_use_case
    .execute(RemoveLineItemCommand {
      session_id,
      item_id,
    })
    .await?;

  Ok(HttpResponse::Ok().json(response))
}

// POST /currency - switch the active currency
pub async fn set_currency_submit(
  req: HttpRequest,
  form: web::Form<CurrencyForm>,
  set_currency_use_case: web::Data<Arc<SetCurrencyUseCase>>,
) -> Result<HttpResponse, ApiError> {
  let session_id = require_session(&req)?;

  let response = set_currency_use_case
    .execute(SetCurrencyCommand {
      session_id,
      code: form.into_inner().code,
    })
    .await?;

  Ok(HttpResponse::Ok().json(response))
}

// POST /view - Edit/Preview tab switch
pub async fn switch_view_submit(
  req: HttpRequest,
  form: web::Form<ViewForm>,
  switch_view_use_case: web::Data<Arc<SwitchViewUseCase>>,
) -> Result<HttpResponse, ApiError> {
  let session_id = require_session(&req)?;

  let response = switch_view_use_case
    .execute(SwitchViewCommand {
      session_id,
      view: form.into_inner().view,
    })
    .await?;

  Ok(HttpResponse::Ok().json(response))
}

// POST /logo - multipart image upload, stored on the document as a blob
pub async fn upload_logo_submit(
  req: HttpRequest,
  MultipartForm(form): MultipartForm<LogoUploadForm>,
  upload_logo_use_case: web::Data<Arc<UploadLogoUseCase>>,
) -> Result<HttpResponse, ApiError> {
  let session_id = require_session(&req)?;

  let data = form.logo.data.to_vec();
  if data.is_empty() {
    return Err(ApiError::Validation("No image uploaded".to_string()));
  }

  let mime_type = form
    .logo
    .content_type
    .map(|mime| mime.to_string())
    .unwrap_or_else(|| "application/octet-stream".to_string());

  let response = upload_logo_use_case
    .execute(UploadLogoCommand {
      session_id,
      mime_type,
      data,
    })
    .await?;

  Ok(HttpResponse::Ok().json(response))
}
