//! Domain layer - core types.
//!
//! This layer contains pure domain models, configuration and error types
//! without any I/O.

pub mod config;
pub mod error;
pub mod models;

pub use config::AppConfig;
pub use error::{AppError, Result};
pub use models::{
    AppVariant, ChatCollection, Conversation, ExtractionStats, Message, UNKNOWN_ID, UNKNOWN_TIME,
    UNKNOWN_TYPE, UNTITLED_TITLE,
};
