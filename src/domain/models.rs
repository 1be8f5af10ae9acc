//! Domain models for exported chat data.
//!
//! These models are the normalized shapes produced from the loosely structured
//! JSON that Cursor and Windsurf keep in their workspace `state.vscdb` files.

use std::fmt;

/// Title used when a tab carries no `chatTitle`.
pub const UNTITLED_TITLE: &str = "Untitled";
/// Id used when a tab carries no `tabId`.
pub const UNKNOWN_ID: &str = "Unknown";
/// Timestamp used when a bubble carries no `timestamp`.
pub const UNKNOWN_TIME: &str = "Unknown time";
/// Message type used when a bubble carries no `type`.
pub const UNKNOWN_TYPE: &str = "Unknown type";

/// Supported editor products.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum AppVariant {
    /// Cursor IDE.
    #[default]
    Cursor,
    /// Windsurf IDE.
    Windsurf,
}

impl AppVariant {
    /// All known variants, in display order.
    pub const ALL: [Self; 2] = [Self::Cursor, Self::Windsurf];

    /// Name of the application's data directory.
    #[must_use]
    pub const fn app_dir_name(self) -> &'static str {
        match self {
            Self::Cursor => "Cursor",
            Self::Windsurf => "Windsurf",
        }
    }
}

impl fmt::Display for AppVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cursor => write!(f, "cursor"),
            Self::Windsurf => write!(f, "windsurf"),
        }
    }
}

/// A single normalized chat message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    /// Raw timestamp as stored, or [`UNKNOWN_TIME`].
    pub timestamp: String,
    /// Speaker type as stored (e.g. `user`, `ai`), or [`UNKNOWN_TYPE`].
    pub message_type: String,
    /// Resolved message text. Never blank.
    pub content: String,
}

/// A chat tab with at least one message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversation {
    /// Raw tab title, or [`UNTITLED_TITLE`].
    pub title: String,
    /// Tab id, or [`UNKNOWN_ID`].
    pub id: String,
    messages: Vec<Message>,
}

impl Conversation {
    /// Builds a conversation, refusing one without messages.
    #[must_use]
    pub fn new(title: String, id: String, messages: Vec<Message>) -> Option<Self> {
        if messages.is_empty() {
            return None;
        }
        Some(Self {
            title,
            id,
            messages,
        })
    }

    /// Messages in stored order.
    #[must_use]
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Get total message count.
    #[must_use]
    pub fn message_count(&self) -> usize {
        self.messages.len()
    }
}

/// Conversations accumulated over one run, in discovery order.
#[derive(Debug, Clone, Default)]
pub struct ChatCollection {
    conversations: Vec<Conversation>,
}

impl ChatCollection {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, conversation: Conversation) {
        self.conversations.push(conversation);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.conversations.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.conversations.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Conversation> {
        self.conversations.iter()
    }

    /// Total messages across all conversations.
    #[must_use]
    pub fn message_count(&self) -> usize {
        self.conversations.iter().map(Conversation::message_count).sum()
    }
}

impl<'a> IntoIterator for &'a ChatCollection {
    type Item = &'a Conversation;
    type IntoIter = std::slice::Iter<'a, Conversation>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Summary statistics for one extraction run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractionStats {
    /// Storage roots present on disk.
    pub roots_found: usize,
    /// Store files opened.
    pub databases_scanned: usize,
    /// Store files that held the chat key.
    pub databases_with_chat: usize,
    /// Tabs encountered in payloads.
    pub tabs_seen: usize,
    /// Conversations kept.
    pub conversation_count: usize,
    /// Tabs dropped because no bubble had content.
    pub conversations_discarded: usize,
    /// Messages kept.
    pub message_count: usize,
    /// Bubbles with no resolvable content.
    pub bubbles_dropped: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message(content: &str) -> Message {
        Message {
            timestamp: UNKNOWN_TIME.to_string(),
            message_type: "user".to_string(),
            content: content.to_string(),
        }
    }

    #[test]
    fn test_conversation_requires_messages() {
        assert!(Conversation::new("t".into(), "id".into(), Vec::new()).is_none());

        let conv = Conversation::new("t".into(), "id".into(), vec![message("hi")]).unwrap();
        assert_eq!(conv.message_count(), 1);
    }

    #[test]
    fn test_collection_keeps_insertion_order() {
        let mut collection = ChatCollection::new();
        for title in ["first", "second"] {
            let conv =
                Conversation::new(title.into(), "id".into(), vec![message("a"), message("b")])
                    .unwrap();
            collection.push(conv);
        }

        let titles: Vec<_> = collection.iter().map(|c| c.title.as_str()).collect();
        assert_eq!(titles, ["first", "second"]);
        assert_eq!(collection.message_count(), 4);
    }

    #[test]
    fn test_variant_dir_names() {
        assert_eq!(AppVariant::Cursor.app_dir_name(), "Cursor");
        assert_eq!(AppVariant::Windsurf.app_dir_name(), "Windsurf");
        assert_eq!(AppVariant::default(), AppVariant::Cursor);
        assert_eq!(AppVariant::Windsurf.to_string(), "windsurf");
    }
}
