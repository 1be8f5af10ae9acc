//! Chat extraction service.
//!
//! Orchestrates reading store files and assembling conversations into a
//! [`ChatCollection`]. Nothing here fails the run: an unreadable file or a
//! malformed payload contributes zero conversations and the scan moves on.

use std::path::{Path, PathBuf};

use colored::Colorize;

use crate::domain::{ChatCollection, Conversation, ExtractionStats, UNKNOWN_ID, UNTITLED_TITLE};
use crate::infrastructure::{find_store_files, read_chat_data};

use super::parser::{parse_bubble, parse_chat_data, stringify, RawTab};

/// Extracts all conversations from the store files under `roots`.
///
/// Returns the collection together with statistics. When no root exists the
/// collection is empty.
#[must_use]
pub fn extract_all_conversations(roots: &[PathBuf]) -> (ChatCollection, ExtractionStats) {
    let mut collection = ChatCollection::new();
    let mut stats = ExtractionStats::default();

    let scan = find_store_files(roots);
    stats.roots_found = scan.roots_found.len();
    for root in &scan.roots_found {
        println!("{} {}", "Scanning:".bold(), root.display());
    }

    if scan.roots_found.is_empty() {
        tracing::info!("None of {} workspace storage roots exist", roots.len());
        return (collection, stats);
    }

    for db_path in &scan.store_files {
        println!("{} {}", "Found database:".dimmed(), db_path.display());
        extract_from_database(db_path, &mut collection, &mut stats);
    }

    (collection, stats)
}

/// Extracts conversations from a single store file into `collection`.
pub fn extract_from_database(
    path: &Path,
    collection: &mut ChatCollection,
    stats: &mut ExtractionStats,
) {
    stats.databases_scanned += 1;

    let raw = match read_chat_data(path) {
        Ok(Some(raw)) => raw,
        Ok(None) => {
            tracing::debug!("No chat data in {}", path.display());
            return;
        }
        Err(e) => {
            tracing::debug!("Skipping {}: {}", path.display(), e);
            return;
        }
    };

    stats.databases_with_chat += 1;
    let before = collection.len();
    extract_from_payload(&raw, collection, stats);

    tracing::info!(
        "Extracted {} conversations from {}",
        collection.len() - before,
        path.display()
    );
}

/// Extracts conversations from a raw chat payload into `collection`.
///
/// Invalid JSON contributes nothing.
pub fn extract_from_payload(
    raw: &str,
    collection: &mut ChatCollection,
    stats: &mut ExtractionStats,
) {
    let tabs = match parse_chat_data(raw) {
        Ok(tabs) => tabs,
        Err(e) => {
            tracing::debug!("Ignoring unparsable chat payload: {}", e);
            return;
        }
    };

    for tab in tabs {
        stats.tabs_seen += 1;
        let bubble_count = tab.bubbles.as_ref().map_or(0, Vec::len);

        match assemble_conversation(tab) {
            Some(conversation) => {
                stats.bubbles_dropped += bubble_count - conversation.message_count();
                stats.conversation_count += 1;
                stats.message_count += conversation.message_count();
                collection.push(conversation);
            }
            None => {
                stats.bubbles_dropped += bubble_count;
                stats.conversations_discarded += 1;
            }
        }
    }
}

/// Builds a conversation from a tab, or `None` if no bubble has content.
#[must_use]
pub fn assemble_conversation(tab: RawTab) -> Option<Conversation> {
    let title = tab
        .chat_title
        .as_ref()
        .and_then(stringify)
        .unwrap_or_else(|| UNTITLED_TITLE.to_string());
    let id = tab
        .tab_id
        .as_ref()
        .and_then(stringify)
        .unwrap_or_else(|| UNKNOWN_ID.to_string());

    let messages = tab
        .bubbles
        .unwrap_or_default()
        .iter()
        .filter_map(parse_bubble)
        .collect();

    let conversation = Conversation::new(title, id, messages);
    if conversation.is_none() {
        tracing::debug!("Discarding tab without messages");
    }
    conversation
}
