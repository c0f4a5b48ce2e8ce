//! Configuration management for logbox
//!
//! This module provides a layered configuration system that loads settings from:
//! 1. Default values (embedded in structs)
//! 2. TOML configuration file
//! 3. Environment variables (highest priority)
//!
//! # Usage
//!
//! ```no_run
//! use logbox::config::Config;
//!
//! let config = Config::load().expect("Failed to load configuration");
//! println!("Logs stored in: {}", config.store.dir.display());
//! ```
//!
//! # Environment Variables
//!
//! Configuration can be overridden using environment variables with the pattern:
//! `LOGBOX__<section>__<key>`
//!
//! Examples:
//! - `LOGBOX__STORE__DIR=/var/tmp/logs`
//! - `LOGBOX__STORE__PRINT_TO_STDOUT=false`
//! - `LOGBOX__SERVER__BIND_ADDR=127.0.0.1:9000`
//!
//! # Configuration File
//!
//! By default, the configuration is loaded from `config/logbox.toml`.
//! This can be overridden using the `LOGBOX_CONFIG` environment variable.

mod models;
mod sources;
mod validation;

pub use models::{Config, ServerConfig, StoreConfig, TelemetryConfig};
pub use validation::{MAX_LINE_SPACING, ValidationError};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Configuration validation failed: {0}")]
    ValidationError(#[from] ValidationError),
}

impl Config {
    /// Load configuration from all sources (file + environment)
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables (`LOGBOX__*`)
    /// 2. TOML file (default: `config/logbox.toml`)
    /// 3. Default values
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration file is malformed or validation fails.
    pub fn load() -> Result<Self, ConfigError> {
        let config = sources::load()?;
        validation::validate(&config)?;
        Ok(config)
    }

    /// Load configuration from a specific path
    pub fn load_from_path(path: std::path::PathBuf) -> Result<Self, ConfigError> {
        let config = sources::load_from_sources(path)?;
        validation::validate(&config)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_load_full_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("test.toml");

        let toml_content = r#"
[store]
dir = "logs"
print_to_stdout = true
line_spacing = 1

[server]
bind_addr = "0.0.0.0:8080"
public_dir = "../client"
default_limit = 25

[telemetry]
log_filter = "logbox=debug,tower_http=info"
        "#;

        fs::write(&config_path, toml_content).unwrap();

        let config = Config::load_from_path(config_path).unwrap();
        assert_eq!(config.server.default_limit, 25);
        assert_eq!(config.telemetry.log_filter, "logbox=debug,tower_http=info");

        let options = config.store.options();
        assert_eq!(options.dir, std::path::PathBuf::from("logs"));
        assert!(options.print_to_stdout);
        assert_eq!(options.line_spacing, 1);
    }

    #[test]
    fn test_validation_catches_bad_spacing() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("test.toml");

        fs::write(&config_path, "[store]\nline_spacing = 50\n").unwrap();

        let result = Config::load_from_path(config_path);
        assert!(matches!(
            result.unwrap_err(),
            ConfigError::ValidationError(ValidationError::LineSpacingTooLarge { .. })
        ));
    }
}
