use actix_web::{
  HttpRequest, HttpResponse,
  http::header::{ContentDisposition, DispositionParam, DispositionType},
  web,
};
use std::sync::Arc;

use crate::adapters::http::dtos::ErrorResponse;
use crate::application::editor::{ExportPdfCommand, ExportPdfUseCase};
use crate::domain::editor::EditorError;

use super::session_id_from;

// POST /export - run the PDF pipeline and stream the file down.
//
// A missing or stale session means there is nothing to capture, so the
// export silently aborts. Pipeline failures and overlapping triggers come
// back as JSON notifications; the session stays editable either way.
pub async fn export_invoice(
  req: HttpRequest,
  export_pdf_use_case: web::Data<Arc<ExportPdfUseCase>>,
) -> HttpResponse {
  let Some(session_id) = session_id_from(&req) else {
    return HttpResponse::NoContent().finish();
  };

  match export_pdf_use_case
    .execute(ExportPdfCommand { session_id })
    .await
  {
    Ok(response) => HttpResponse::Ok()
      .content_type("application/pdf")
      .insert_header(ContentDisposition {
        disposition: DispositionType::Attachment,
        parameters: vec![DispositionParam::Filename(response.filename)],
      })
      .body(response.bytes),
    Err(EditorError::SessionNotFound(_)) => HttpResponse::NoContent().finish(),
    Err(EditorError::ExportInFlight) => HttpResponse::Conflict().json(ErrorResponse {
      error: "export_in_flight".to_string(),
      message: "An export is already in progress. Please wait for it to finish.".to_string(),
    }),
    Err(err) => {
      tracing::error!("PDF export failed: {}", err);
      HttpResponse::InternalServerError().json(ErrorResponse {
        error: "export_failed".to_string(),
        message: "Failed to generate PDF. Please try again.".to_string(),
      })
    }
  }
}
