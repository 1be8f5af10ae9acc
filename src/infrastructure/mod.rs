//! Infrastructure layer - external adapters (database, filesystem).
//!
//! This layer handles all I/O operations and external dependencies.

pub mod config;
pub mod editor_paths;
pub mod sqlite_reader;

pub use config::load_config_or_default;
pub use editor_paths::{
    configured_roots, find_store_files, home_dir, store_files_in, workspace_roots,
};
pub use sqlite_reader::read_chat_data;
