//! Workspace storage discovery for Cursor and Windsurf.
//!
//! Each variant keeps one directory per workspace under `workspaceStorage`,
//! with a `state.vscdb` file inside. The storage root differs between the
//! Windows and XDG config conventions, so both candidates are checked.

use std::path::{Path, PathBuf};

use crate::domain::{AppConfig, AppError, AppVariant, Result};

/// Config-directory conventions, relative to the home directory.
const CONFIG_BASES: &[&str] = &[
    // Windows
    "AppData/Roaming",
    // Linux
    ".config",
];

const WORKSPACE_STORAGE_PATH: &str = "User/workspaceStorage";
pub const STATE_DB_NAME: &str = "state.vscdb";

/// Built-in workspace storage roots for a variant under `home`.
#[must_use]
pub fn default_roots(variant: AppVariant, home: &Path) -> Vec<PathBuf> {
    CONFIG_BASES
        .iter()
        .map(|base| {
            home.join(base)
                .join(variant.app_dir_name())
                .join(WORKSPACE_STORAGE_PATH)
        })
        .collect()
}

/// Built-in roots under `home`, then the extras configured for the variant.
#[must_use]
pub fn configured_roots(variant: AppVariant, config: &AppConfig, home: &Path) -> Vec<PathBuf> {
    let mut roots = default_roots(variant, home);
    roots.extend(config.roots.for_variant(variant).iter().cloned());
    roots
}

/// The user's home directory.
///
/// # Errors
/// Returns error if the home directory cannot be determined.
pub fn home_dir() -> Result<PathBuf> {
    dirs::home_dir().ok_or_else(|| AppError::Config {
        message: "Could not determine home directory".into(),
    })
}

/// Roots to scan for a variant under the user's home directory.
///
/// # Errors
/// Returns error if the home directory cannot be determined.
pub fn workspace_roots(variant: AppVariant, config: &AppConfig) -> Result<Vec<PathBuf>> {
    Ok(configured_roots(variant, config, &home_dir()?))
}

/// Outcome of scanning a set of roots.
#[derive(Debug, Default)]
pub struct ScanResult {
    /// Roots that exist on disk.
    pub roots_found: Vec<PathBuf>,
    /// Store files, grouped by root in scan order.
    pub store_files: Vec<PathBuf>,
}

/// Finds the store file of every workspace under the given roots.
///
/// Missing roots are skipped. An unreadable root is logged and skipped.
#[must_use]
pub fn find_store_files(roots: &[PathBuf]) -> ScanResult {
    let mut result = ScanResult::default();

    for root in roots {
        if !root.is_dir() {
            tracing::debug!("Root not present: {}", root.display());
            continue;
        }

        result.roots_found.push(root.clone());
        result.store_files.extend(store_files_in(root));
    }

    result
}

/// Store files of the immediate workspace subdirectories of `root`, sorted.
#[must_use]
pub fn store_files_in(root: &Path) -> Vec<PathBuf> {
    let entries = match std::fs::read_dir(root) {
        Ok(entries) => entries,
        Err(e) => {
            tracing::warn!("Failed to read workspace directory {}: {}", root.display(), e);
            return Vec::new();
        }
    };

    let mut files: Vec<PathBuf> = entries
        .filter_map(std::result::Result::ok)
        .map(|entry| entry.path())
        .filter(|workspace| workspace.is_dir())
        .map(|workspace| workspace.join(STATE_DB_NAME))
        .filter(|db_path| db_path.is_file())
        .collect();

    files.sort();
    files
}
