//! Configuration Loader - File Loading and Validation
//!
//! Handles loading `config.toml`, validating all parameters,
//! and providing clear error messages for misconfiguration.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use super::{AppConfig, StoreBackend};

/// Load and validate configuration from a TOML file.
///
/// # Arguments
/// * `path` - Path to the config.toml file
///
/// # Errors
/// Returns detailed error if:
/// - File doesn't exist or can't be read
/// - TOML parsing fails
/// - Validation rules are violated
pub fn load_config(path: &str) -> Result<AppConfig> {
    let path = Path::new(path);

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    let config: AppConfig =
        toml::from_str(&content).with_context(|| "Failed to parse config.toml")?;

    validate_config(&config)?;

    info!(
        bind = %config.server.bind_address(),
        origin = %config.cors.allowed_origin,
        backend = ?config.persistence.backend,
        "Configuration loaded successfully"
    );

    Ok(config)
}

/// Validate all configuration parameters.
///
/// Checks for:
/// - A usable bind address
/// - A well-formed CORS origin
/// - A data directory when the file backend is selected
fn validate_config(config: &AppConfig) -> Result<()> {
    anyhow::ensure!(
        !config.server.host.is_empty(),
        "server.host must not be empty"
    );
    anyhow::ensure!(config.server.port != 0, "server.port must be nonzero");

    anyhow::ensure!(
        !config.cors.allowed_origin.is_empty(),
        "cors.allowed_origin must not be empty"
    );
    anyhow::ensure!(
        config.cors.allowed_origin.starts_with("http://")
            || config.cors.allowed_origin.starts_with("https://"),
        "cors.allowed_origin must be an http(s) origin, got {}",
        config.cors.allowed_origin
    );

    if config.persistence.backend == StoreBackend::File {
        anyhow::ensure!(
            !config.persistence.data_dir.is_empty(),
            "persistence.data_dir must not be empty for the file backend"
        );
    }

    Ok(())
}
