use actix_web::{HttpRequest, HttpResponse, cookie::Cookie, web};
use std::sync::Arc;
use uuid::Uuid;

use crate::adapters::http::errors::ApiError;
use crate::adapters::http::templates::TemplateEngine;
use crate::application::editor::{GetEditorStateCommand, GetEditorStateUseCase};
use crate::domain::editor::EditorService;

use super::{SESSION_COOKIE, session_id_from};

// GET / - the editor: form and live preview, Edit/Preview tabs on narrow
// screens. Starts a session on first visit and pins it to a cookie.
pub async fn editor_page(
  req: HttpRequest,
  templates: web::Data<TemplateEngine>,
  editor_service: web::Data<Arc<EditorService>>,
  get_state_use_case: web::Data<Arc<GetEditorStateUseCase>>,
) -> Result<HttpResponse, ApiError> {
  let session = editor_service
    .get_or_create_session(session_id_from(&req))
    .await?;

  let state = get_state_use_case
    .execute(GetEditorStateCommand {
      session_id: session.id,
    })
    .await?;

  let mut context = tera::Context::new();
  context.insert("title", "Invoice Editor");
  context.insert("state", &state);
  context.insert("preview", &state.preview);

  let html = templates
    .render("pages/editor.html.tera", &context)
    .map_err(|e| ApiError::Internal(format!("Template error: {}", e)))?;

  let cookie = Cookie::build(SESSION_COOKIE, session.id.to_string())
    .path("/")
    .http_only(true)
    .finish();

  Ok(
    HttpResponse::Ok()
      .content_type("text/html")
      .cookie(cookie)
      .body(html),
  )
}

// GET /print/{session_id} - standalone preview document, fetched by the
// PDF renderer instead of the browser (no cookie involved).
pub async fn print_page(
  path: web::Path<Uuid>,
  templates: web::Data<TemplateEngine>,
  get_state_use_case: web::Data<Arc<GetEditorStateUseCase>>,
) -> Result<HttpResponse, ApiError> {
  let session_id = path.into_inner();

  let state = get_state_use_case
    .execute(GetEditorStateCommand { session_id })
    .await?;

  let mut context = tera::Context::new();
  context.insert("preview", &state.preview);

  let html = templates
    .render("pages/print.html.tera", &context)
    .map_err(|e| ApiError::Internal(format!("Template error: {}", e)))?;

  Ok(HttpResponse::Ok().content_type("text/html").body(html))
}
