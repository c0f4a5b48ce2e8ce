use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::PathBuf;

use crate::store::StoreOptions;

/// Top-level configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub telemetry: TelemetryConfig,
    /// File the configuration was read from, if one existed
    #[serde(skip)]
    pub source: Option<PathBuf>,
}

/// Log store configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StoreConfig {
    #[serde(default = "default_store_dir")]
    pub dir: PathBuf,
    #[serde(default = "default_print_to_stdout")]
    pub print_to_stdout: bool,
    /// Blank lines printed after each entry on stdout
    #[serde(default)]
    pub line_spacing: usize,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            dir: default_store_dir(),
            print_to_stdout: default_print_to_stdout(),
            line_spacing: 0,
        }
    }
}

impl StoreConfig {
    pub fn options(&self) -> StoreOptions {
        StoreOptions::builder()
            .dir(self.dir.clone())
            .print_to_stdout(self.print_to_stdout)
            .line_spacing(self.line_spacing)
            .build()
    }
}

fn default_store_dir() -> PathBuf {
    PathBuf::from("data/logs")
}

fn default_print_to_stdout() -> bool {
    true
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_bind_addr")]
    pub bind_addr: SocketAddr,
    /// Directory served as static files
    #[serde(default = "default_public_dir")]
    pub public_dir: PathBuf,
    /// Limit applied to `GET /logs` when the request gives none
    #[serde(default = "default_query_limit")]
    pub default_limit: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
            public_dir: default_public_dir(),
            default_limit: default_query_limit(),
        }
    }
}

fn default_bind_addr() -> SocketAddr {
    SocketAddr::from(([0, 0, 0, 0], 8080))
}

fn default_public_dir() -> PathBuf {
    PathBuf::from("../client")
}

fn default_query_limit() -> usize {
    100
}

/// Telemetry configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TelemetryConfig {
    /// Default `tracing` filter, overridden by `RUST_LOG`
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            log_filter: default_log_filter(),
        }
    }
}

fn default_log_filter() -> String {
    "logbox=info".to_string()
}
