//! Configuration file loading.
//!
//! The config file is optional. A broken file never stops an export: it is
//! reported and the defaults are used instead.

use std::fs;
use std::path::Path;

use crate::domain::{AppConfig, AppError, Result};

/// Load configuration from `path`, or from the default location.
///
/// A missing default file yields defaults. An explicitly named file that
/// cannot be read or parsed is an error.
///
/// # Errors
/// Returns error if the file exists (or was named) but cannot be read or parsed.
pub fn load_config(path: Option<&Path>) -> Result<AppConfig> {
    match path {
        Some(path) => load_config_from_file(path),
        None => {
            let default_path = AppConfig::default_config_path();
            if default_path.exists() {
                load_config_from_file(&default_path)
            } else {
                Ok(AppConfig::default())
            }
        }
    }
}

/// Load configuration, falling back to defaults on any error.
#[must_use]
pub fn load_config_or_default(path: Option<&Path>) -> AppConfig {
    load_config(path).unwrap_or_else(|e| {
        tracing::warn!("Using default configuration: {}", e);
        AppConfig::default()
    })
}

/// Load configuration from a specific file.
///
/// # Errors
/// Returns error if file cannot be read or parsed.
pub fn load_config_from_file(path: &Path) -> Result<AppConfig> {
    let content = fs::read_to_string(path)
        .map_err(|e| AppError::io(format!("Failed to read config file: {}", path.display()), e))?;

    let config: AppConfig = toml::from_str(&content).map_err(|e| AppError::Config {
        message: format!("Failed to parse config file {}: {e}", path.display()),
    })?;

    tracing::debug!(path = %path.display(), "Configuration loaded");

    Ok(config)
}
