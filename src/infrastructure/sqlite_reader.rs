//! `SQLite` reader for workspace state.vscdb files.
//!
//! The editors keep chat history as one JSON document under a single key of
//! the `ItemTable` table.

use std::path::Path;

use rusqlite::types::ValueRef;
use rusqlite::{Connection, OpenFlags, OptionalExtension};

use crate::domain::{AppError, Result};

/// Key holding the chat payload.
pub const CHAT_DATA_KEY: &str = "workbench.panel.aichat.view.aichat.chatdata";

/// `SQLite` reader for workspace state databases.
pub struct StateDbReader {
    conn: Connection,
}

impl StateDbReader {
    /// Opens a state database in read-only mode.
    ///
    /// # Errors
    /// Returns error if database cannot be opened.
    pub fn open(path: &Path) -> Result<Self> {
        let flags = OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX;

        let conn = Connection::open_with_flags(path, flags).map_err(AppError::database)?;

        conn.execute_batch(
            "PRAGMA query_only = ON;
             PRAGMA temp_store = MEMORY;",
        )
        .map_err(AppError::database)?;

        Ok(Self { conn })
    }

    /// Looks up the raw value stored under `key`.
    ///
    /// Returns `Ok(None)` when the key is missing or its value is NULL.
    ///
    /// # Errors
    /// Returns error if the query fails or the value is not valid UTF-8.
    pub fn fetch_value(&self, key: &str) -> Result<Option<String>> {
        let bytes = self
            .conn
            .query_row(
                "SELECT value FROM ItemTable WHERE key = ?1",
                [key],
                |row| {
                    // Handle both TEXT and BLOB value types
                    Ok(match row.get_ref(0)? {
                        ValueRef::Blob(b) | ValueRef::Text(b) => Some(b.to_vec()),
                        _ => None,
                    })
                },
            )
            .optional()
            .map_err(AppError::database)?
            .flatten();

        bytes
            .map(|b| {
                String::from_utf8(b).map_err(|e| AppError::InvalidData {
                    message: format!("Value under '{key}' is not UTF-8: {e}"),
                })
            })
            .transpose()
    }

    /// Fetches the chat payload.
    ///
    /// # Errors
    /// Returns error if the query fails or the value cannot be decoded.
    pub fn fetch_chat_data(&self) -> Result<Option<String>> {
        self.fetch_value(CHAT_DATA_KEY)
    }
}

/// Reads the chat payload from a store file.
///
/// The connection lives only for this call and is closed on every return path.
///
/// # Errors
/// Returns error if the file cannot be opened as a database or queried.
pub fn read_chat_data(path: &Path) -> Result<Option<String>> {
    let reader = StateDbReader::open(path)?;
    reader.fetch_chat_data()
}
