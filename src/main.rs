use actix_files as fs;
use actix_web::{App, HttpServer, middleware::Logger, web};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use billforge::{
  adapters::http::{RequestIdMiddleware, TemplateEngine, WebRouteDependencies, configure_web_routes},
  application::editor::{
    AddLineItemUseCase, ExportPdfUseCase, GetEditorStateUseCase, RemoveLineItemUseCase,
    SetCurrencyUseCase, SwitchViewUseCase, UpdateDocumentUseCase, UploadLogoUseCase,
  },
  domain::editor::{EditorService, ports::PdfExporter},
  infrastructure::{
    config::Config, pdf::WkHtmlToPdfExporter, persistence::memory::InMemorySessionRepository,
  },
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
  // Initialize environment variables from .env file
  dotenvy::dotenv().ok();

  // Initialize tracing subscriber for logging
  tracing_subscriber::registry()
    .with(
      tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "billforge=debug,actix_web=info".into()),
    )
    .with(tracing_subscriber::fmt::layer())
    .init();

  tracing::info!("Starting billforge");

  // Load configuration
  let config = Config::load().expect("Failed to load configuration");
  tracing::info!("Configuration loaded successfully");

  // Initialize the session store and domain service
  let session_repo = Arc::new(InMemorySessionRepository::new());
  let editor_service = Arc::new(EditorService::new(session_repo));

  // Initialize the PDF export pipeline
  let pdf_exporter = Arc::new(WkHtmlToPdfExporter::new(
    config.pdf.wkhtmltopdf_path.clone(),
    config.server.base_url.clone(),
    config.pdf.export_timeout_seconds,
  )) as Arc<dyn PdfExporter>;
  tracing::info!("PDF exporter initialized");

  // Initialize use cases
  let get_editor_state_use_case = Arc::new(GetEditorStateUseCase::new(editor_service.clone()));
  let update_document_use_case = Arc::new(UpdateDocumentUseCase::new(editor_service.clone()));
  let add_line_item_use_case = Arc::new(AddLineItemUseCase::new(editor_service.clone()));
  let remove_line_item_use_case = Arc::new(RemoveLineItemUseCase::new(editor_service.clone()));
  let set_currency_use_case = Arc::new(SetCurrencyUseCase::new(editor_service.clone()));
  let switch_view_use_case = Arc::new(SwitchViewUseCase::new(editor_service.clone()));
  let upload_logo_use_case = Arc::new(UploadLogoUseCase::new(editor_service.clone()));
  let export_pdf_use_case = Arc::new(ExportPdfUseCase::new(
    editor_service.clone(),
    pdf_exporter.clone(),
  ));

  // Initialize template engine
  let templates = TemplateEngine::new().expect("Failed to initialize template engine");
  tracing::info!("Template engine initialized");

  let server_host = config.server.host.clone();
  let server_port = config.server.port;

  tracing::info!("Starting HTTP server on {}:{}", server_host, server_port);

  HttpServer::new(move || {
    App::new()
      // Add request ID middleware
      .wrap(RequestIdMiddleware::new())
      // Add logging middleware
      .wrap(Logger::default())
      // Configure web UI routes
      .configure(|cfg| {
        configure_web_routes(
          cfg,
          WebRouteDependencies {
            templates: templates.clone(),
            editor_service: editor_service.clone(),
            get_editor_state_use_case: get_editor_state_use_case.clone(),
            update_document_use_case: update_document_use_case.clone(),
            add_line_item_use_case: add_line_item_use_case.clone(),
            remove_line_item_use_case: remove_line_item_use_case.clone(),
            set_currency_use_case: set_currency_use_case.clone(),
            switch_view_use_case: switch_view_use_case.clone(),
            upload_logo_use_case: upload_logo_use_case.clone(),
            export_pdf_use_case: export_pdf_use_case.clone(),
          },
        )
      })
      // Static files
      .service(fs::Files::new("/static", "./static"))
      // Health check endpoint
      .route("/health", web::get().to(health_check))
  })
  .bind((server_host.as_str(), server_port))?
  .run()
  .await
}

/// Health check endpoint
async fn health_check() -> &'static str {
  "OK"
}
