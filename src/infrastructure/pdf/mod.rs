pub mod wkhtmltopdf_exporter;

pub use wkhtmltopdf_exporter::WkHtmlToPdfExporter;
