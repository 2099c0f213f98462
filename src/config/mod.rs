#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::CliConfig;
pub use toml_config::TomlConfig;

use crate::adapters::seed::SEED_EXTENSIONS;
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::logger::LogFormat;
use crate::utils::validation::{
    validate_file_extension, validate_non_empty_string, validate_path, validate_range, Validate,
};
use std::time::Duration;

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_MAX_PAGE_SIZE: usize = crate::core::catalog::DEFAULT_MAX_PAGE_SIZE;
pub const DEFAULT_BODY_LIMIT_BYTES: usize = 64 * 1024;

/// Fully resolved server settings: defaults, then TOML file, then CLI flags.
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub seed_path: Option<String>,
    pub request_timeout_secs: u64,
    pub max_page_size: usize,
    pub body_limit_bytes: usize,
    pub log_format: LogFormat,
    pub verbose: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            seed_path: None,
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            max_page_size: DEFAULT_MAX_PAGE_SIZE,
            body_limit_bytes: DEFAULT_BODY_LIMIT_BYTES,
            log_format: LogFormat::Compact,
            verbose: false,
        }
    }
}

impl ServerConfig {
    pub fn apply_toml(&mut self, file: &TomlConfig) -> Result<()> {
        if let Some(server) = &file.server {
            if let Some(host) = &server.host {
                self.host = host.clone();
            }
            if let Some(port) = server.port {
                self.port = port;
            }
            if let Some(timeout) = server.request_timeout_secs {
                self.request_timeout_secs = timeout;
            }
            if let Some(limit) = server.body_limit_bytes {
                self.body_limit_bytes = limit;
            }
        }

        if let Some(catalog) = &file.catalog {
            if let Some(path) = &catalog.seed_path {
                self.seed_path = Some(path.clone());
            }
            if let Some(size) = catalog.max_page_size {
                self.max_page_size = size;
            }
        }

        if let Some(logging) = &file.logging {
            if let Some(format) = &logging.format {
                self.log_format = format.parse::<LogFormat>()?;
            }
            if let Some(verbose) = logging.verbose {
                self.verbose = verbose;
            }
        }

        Ok(())
    }

    #[cfg(feature = "cli")]
    pub fn apply_cli(&mut self, cli: &CliConfig) {
        if let Some(host) = &cli.host {
            self.host = host.clone();
        }
        if let Some(port) = cli.port {
            self.port = port;
        }
        if let Some(path) = &cli.seed_path {
            self.seed_path = Some(path.clone());
        }
        if let Some(timeout) = cli.request_timeout_secs {
            self.request_timeout_secs = timeout;
        }
        if let Some(size) = cli.max_page_size {
            self.max_page_size = size;
        }
        if cli.verbose {
            self.verbose = true;
        }
    }
}

impl ConfigProvider for ServerConfig {
    fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    fn seed_path(&self) -> Option<&str> {
        self.seed_path.as_deref()
    }

    fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    fn max_page_size(&self) -> usize {
        self.max_page_size
    }
}

impl Validate for ServerConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("server.host", &self.host)?;
        validate_range("server.port", self.port, 1, u16::MAX)?;
        validate_range("server.request_timeout_secs", self.request_timeout_secs, 1, 300)?;
        validate_range("catalog.max_page_size", self.max_page_size, 1, 1000)?;
        validate_range("server.body_limit_bytes", self.body_limit_bytes, 1, 16 * 1024 * 1024)?;

        if let Some(path) = &self.seed_path {
            validate_path("catalog.seed_path", path)?;
            validate_file_extension("catalog.seed_path", path, SEED_EXTENSIONS)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = ServerConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.bind_address(), "127.0.0.1:3000");
        assert_eq!(config.request_timeout(), Duration::from_secs(30));
    }

    #[test]
    fn test_invalid_values_rejected() {
        let config = ServerConfig {
            port: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = ServerConfig {
            max_page_size: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = ServerConfig {
            seed_path: Some("products.xml".to_string()),
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = ServerConfig {
            host: " ".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_toml_overrides_defaults() {
        let file = TomlConfig::from_toml_str(
            r#"
[server]
port = 8080

[catalog]
seed_path = "data/products.csv"

[logging]
format = "json"
"#,
        )
        .unwrap();

        let mut config = ServerConfig::default();
        config.apply_toml(&file).unwrap();

        assert_eq!(config.port, 8080);
        assert_eq!(config.host, DEFAULT_HOST);
        assert_eq!(config.seed_path(), Some("data/products.csv"));
        assert_eq!(config.log_format, LogFormat::Json);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_toml_unknown_log_format_rejected() {
        let file = TomlConfig::from_toml_str("[logging]\nformat = \"yaml\"\n").unwrap();
        let mut config = ServerConfig::default();
        let err = config.apply_toml(&file).unwrap_err();
        assert!(err.to_string().contains("logging.format"));
    }
}
