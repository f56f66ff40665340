use actix_web::web;
use std::sync::Arc;

use crate::application::editor::{
  AddLineItemUseCase, ExportPdfUseCase, GetEditorStateUseCase, RemoveLineItemUseCase,
  SetCurrencyUseCase, SwitchViewUseCase, UpdateDocumentUseCase, UploadLogoUseCase,
};
use crate::domain::editor::EditorService;

use super::handlers::{editor_web, export_web, pages};
use super::templates::TemplateEngine;

/// Everything the web routes need, wired once in main
pub struct WebRouteDependencies {
  pub templates: TemplateEngine,
  pub editor_service: Arc<EditorService>,
  pub get_editor_state_use_case: Arc<GetEditorStateUseCase>,
  pub update_document_use_case: Arc<UpdateDocumentUseCase>,
  pub add_line_item_use_case: Arc<AddLineItemUseCase>,
  pub remove_line_item_use_case: Arc<RemoveLineItemUseCase>,
  pub set_currency_use_case: Arc<SetCurrencyUseCase>,
  pub switch_view_use_case: Arc<SwitchViewUseCase>,
  pub upload_logo_use_case: Arc<UploadLogoUseCase>,
  pub export_pdf_use_case: Arc<ExportPdfUseCase>,
}

/// Configure the editor routes
///
/// # Routes
///
/// - GET  /                    - editor page (form + live preview)
/// - GET  /preview             - preview fragment
/// - POST /document            - partial document update
/// - POST /items               - append a line item
/// - DELETE /items/{item_id}   - remove a line item
/// - POST /currency            - switch the active currency
/// - POST /view                - Edit/Preview tab switch
/// - POST /logo                - logo upload
/// - POST /export              - PDF export/download
/// - GET  /print/{session_id}  - print view fetched by the PDF renderer
pub fn configure_web_routes(cfg: &mut web::ServiceConfig, deps: WebRouteDependencies) {
  cfg
    .app_data(web::Data::new(deps.templates))
    .app_data(web::Data::new(deps.editor_service))
    .app_data(web::Data::new(deps.get_editor_state_use_case))
    .app_data(web::Data::new(deps.update_document_use_case))
    .app_data(web::Data::new(deps.add_line_item_use_case))
    .app_data(web::Data::new(deps.remove_line_item_use_case))
    .app_data(web::Data::new(deps.set_currency_use_case))
    .app_data(web::Data::new(deps.switch_view_use_case))
    .app_data(web::Data::new(deps.upload_logo_use_case))
    .app_data(web::Data::new(deps.export_pdf_use_case))
    .route("/", web::get().to(pages::editor_page))
    .route("/preview", web::get().to(editor_web::preview_fragment))
    .route("/document", web::post().to(editor_web::update_document_submit))
    .route("/items", web::post().to(editor_web::add_item_submit))
    .route(
      "/items/{item_id}",
      web::delete().to(editor_web::remove_item_submit),
    )
    .route("/currency", web::post().to(editor_web::set_currency_submit))
    .route("/view", web::post().to(editor_web::switch_view_submit))
    .route("/logo", web::post().to(editor_web::upload_logo_submit))
    .route("/export", web::post().to(export_web::export_invoice))
    .route("/print/{session_id}", web::get().to(pages::print_page));
}
