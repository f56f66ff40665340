use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;

fn default_export_timeout() -> u64 {
  30
}

/// Main application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
  pub server: ServerConfig,
  pub pdf: PdfConfig,
}

/// Server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
  pub host: String,
  pub port: u16,
  /// Public base URL the PDF renderer uses to fetch the print view.
  pub base_url: String,
}

/// PDF export configuration
#[derive(Debug, Clone, Deserialize)]
pub struct PdfConfig {
  pub wkhtmltopdf_path: Option<String>,
  #[serde(default = "default_export_timeout")]
  pub export_timeout_seconds: u64,
}

impl Config {
  /// Load configuration from files and environment variables
  ///
  /// Configuration is loaded in the following order (later sources override
  /// earlier ones):
  /// 1. config/default.toml
  /// 2. config/local.toml (if exists)
  /// 3. config/{RUN_MODE}.toml (if exists)
  /// 4. Environment variables with BILLFORGE_ prefix
  ///
  /// Environment variables use double underscores as separators:
  /// - `BILLFORGE_SERVER__HOST=0.0.0.0`
  /// - `BILLFORGE_SERVER__PORT=8080`
  /// - `BILLFORGE_PDF__WKHTMLTOPDF_PATH=/usr/local/bin/wkhtmltopdf`
  pub fn load() -> Result<Self, ConfigError> {
    let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

    let config = ConfigBuilder::builder()
      .add_source(File::with_name("config/default").required(true))
      .add_source(File::with_name("config/local").required(false))
      .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
      .add_source(
        Environment::with_prefix("BILLFORGE")
          .prefix_separator("_")
          .separator("__")
          .try_parsing(true),
      )
      .build()?;

    config.try_deserialize()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_config_structure() {
    let toml = r#"
            [server]
            host = "127.0.0.1"
            port = 8080
            base_url = "http://127.0.0.1:8080"

            [pdf]
            wkhtmltopdf_path = "/usr/bin/wkhtmltopdf"
        "#;

    let config: Config = toml::from_str(toml).expect("Failed to parse config");

    assert_eq!(config.server.host, "127.0.0.1");
    assert_eq!(config.server.port, 8080);
    assert_eq!(config.server.base_url, "http://127.0.0.1:8080");
    assert_eq!(
      config.pdf.wkhtmltopdf_path.as_deref(),
      Some("/usr/bin/wkhtmltopdf")
    );
    assert_eq!(config.pdf.export_timeout_seconds, 30); // default
  }

  #[test]
  fn test_pdf_path_is_optional() {
    let toml = r#"
            [server]
            host = "0.0.0.0"
            port = 3000
            base_url = "http://localhost:3000"

            [pdf]
            export_timeout_seconds = 10
        "#;

    let config: Config = toml::from_str(toml).expect("Failed to parse config");
    assert!(config.pdf.wkhtmltopdf_path.is_none());
    assert_eq!(config.pdf.export_timeout_seconds, 10);
  }
}
