//! Configuration Module - TOML-based Server Configuration
//!
//! Loads and validates configuration from `config.toml`. Bind address,
//! allowed CORS origin, and persistence backend are all externalized
//! here - nothing is hardcoded in the domain layer.

pub mod loader;

use serde::Deserialize;

/// Top-level server configuration.
///
/// Loaded from `config.toml` at startup. All fields are validated
/// before the server starts listening.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// HTTP server bind address and logging.
    pub server: ServerConfig,
    /// Cross-origin access for the front-end.
    pub cors: CorsConfig,
    /// Store backend selection.
    pub persistence: PersistenceConfig,
}

/// HTTP server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Interface to bind (e.g. "127.0.0.1").
    #[serde(default = "default_host")]
    pub host: String,
    /// TCP port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,
    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

/// Cross-origin configuration.
///
/// The API pairs with a single-page front-end served from one known
/// origin; only that origin is allowed by the CORS layer.
#[derive(Debug, Clone, Deserialize)]
pub struct CorsConfig {
    /// Allowed front-end origin, e.g. "http://localhost:4200".
    pub allowed_origin: String,
}

/// Persistence backend selection.
#[derive(Debug, Clone, Deserialize)]
pub struct PersistenceConfig {
    /// Which store implementation to run.
    #[serde(default)]
    pub backend: StoreBackend,
    /// Data directory for the file backend.
    #[serde(default = "default_data_dir")]
    pub data_dir: String,
}

/// Available store backends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackend {
    /// Records live in process memory and are lost on restart.
    Memory,
    /// Records are snapshotted to JSON files in `data_dir`.
    #[default]
    File,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_data_dir() -> String {
    "data".to_string()
}

impl ServerConfig {
    /// Socket address string for the TCP listener.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
