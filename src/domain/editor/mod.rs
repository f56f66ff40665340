pub mod entities;
pub mod errors;
pub mod ports;
pub mod services;

pub use entities::{EditorSession, ExportStatus, ViewMode};
pub use errors::EditorError;
pub use ports::{PdfExporter, SessionRepository};
pub use services::EditorService;
