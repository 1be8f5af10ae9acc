//! Application layer - use cases and orchestration.
//!
//! This layer contains the extraction, normalization and export logic.

pub mod exporter;
pub mod extractor;
pub mod formatter;
pub mod parser;

pub use exporter::export_to_markdown;
pub use extractor::extract_all_conversations;
pub use formatter::{format_roots_table, format_stats, RootStatus};
