//! Markdown export of a chat collection.
//!
//! One file per conversation. A failed write is reported and the batch
//! continues. Two conversations that map to the same file name overwrite
//! each other; the later one wins.

use std::fs;
use std::path::{Path, PathBuf};

use colored::Colorize;

use crate::domain::{AppError, ChatCollection, Result};

use super::formatter::{conversation_filename, format_conversation_markdown};

/// Outcome of an export batch.
#[derive(Debug, Default)]
pub struct ExportReport {
    /// Files written, in write order. May repeat on name collisions.
    pub written: Vec<PathBuf>,
    /// Conversations whose file could not be written.
    pub failed: usize,
}

/// Writes every conversation in `collection` to `output_dir`.
///
/// # Errors
/// Returns error only if the output directory cannot be created.
pub fn export_to_markdown(collection: &ChatCollection, output_dir: &Path) -> Result<ExportReport> {
    fs::create_dir_all(output_dir).map_err(|e| {
        AppError::io(
            format!("Failed to create directory {}", output_dir.display()),
            e,
        )
    })?;

    let mut report = ExportReport::default();

    if collection.is_empty() {
        println!("{}", "No chat data found".yellow());
        return Ok(report);
    }

    for conv in collection {
        let filename = conversation_filename(conv);
        let path = output_dir.join(&filename);
        let content = format_conversation_markdown(conv);

        match fs::write(&path, content) {
            Ok(()) => {
                println!("{} {}", "✓ Exported:".green(), filename);
                report.written.push(path);
            }
            Err(e) => {
                let err = AppError::io(format!("Failed to write {}", path.display()), e);
                println!("{} {}", "✗".red(), err);
                tracing::debug!("{:?}", err);
                report.failed += 1;
            }
        }
    }

    Ok(report)
}
