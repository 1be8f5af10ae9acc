//! Configuration model.
//!
//! Every field is optional in the TOML file; anything missing falls back
//! to the built-in defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::models::AppVariant;

/// Output directory used when neither the CLI nor the config names one.
pub const DEFAULT_OUTPUT_DIR: &str = "chat_exports";

/// Export configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Directory receiving the Markdown files.
    #[serde(default)]
    pub output_dir: Option<PathBuf>,
}

/// Extra workspace-storage roots, scanned after the built-in ones.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RootsConfig {
    #[serde(default)]
    pub cursor: Vec<PathBuf>,

    #[serde(default)]
    pub windsurf: Vec<PathBuf>,
}

impl RootsConfig {
    /// Extra roots configured for a variant.
    #[must_use]
    pub fn for_variant(&self, variant: AppVariant) -> &[PathBuf] {
        match variant {
            AppVariant::Cursor => &self.cursor,
            AppVariant::Windsurf => &self.windsurf,
        }
    }
}

/// Complete application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub export: ExportConfig,

    #[serde(default)]
    pub roots: RootsConfig,
}

impl AppConfig {
    /// Get the default data directory path.
    #[must_use]
    pub fn default_data_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".cursor-chat-exporter")
    }

    /// Get the default config file path.
    #[must_use]
    pub fn default_config_path() -> PathBuf {
        Self::default_data_dir().join("config.toml")
    }

    /// Output directory, preferring an explicit override.
    #[must_use]
    pub fn output_dir(&self, cli_override: Option<&Path>) -> PathBuf {
        cli_override
            .map(Path::to_path_buf)
            .or_else(|| self.export.output_dir.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR))
    }
}
