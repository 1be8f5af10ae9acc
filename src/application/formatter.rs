//! Output formatting for extracted chat data.
//!
//! Markdown documents, their file names, and the console summaries.

use std::path::PathBuf;

use colored::Colorize;
use comfy_table::{presets::UTF8_FULL, Table};

use crate::domain::{AppVariant, Conversation, ExtractionStats};

/// File name stem used when nothing survives title sanitization.
pub const FALLBACK_FILE_STEM: &str = "untitled_chat";
/// Extension of exported documents.
pub const MARKDOWN_EXTENSION: &str = "md";

const ID_PREFIX_LEN: usize = 8;

/// Keeps alphanumerics, spaces, hyphens and underscores, then trims.
#[must_use]
pub fn sanitize_title(title: &str) -> String {
    title
        .chars()
        .filter(|c| c.is_alphanumeric() || matches!(c, ' ' | '-' | '_'))
        .collect::<String>()
        .trim()
        .to_string()
}

/// Builds the export file name: `<safe title>_<id prefix>.md`.
#[must_use]
pub fn conversation_filename(conv: &Conversation) -> String {
    let mut stem = sanitize_title(&conv.title);
    if stem.is_empty() {
        stem = FALLBACK_FILE_STEM.to_string();
    }

    let short_id: String = conv
        .id
        .chars()
        .take(ID_PREFIX_LEN)
        .map(|c| if matches!(c, '/' | '\\') { '_' } else { c })
        .collect();

    format!("{stem}_{short_id}.{MARKDOWN_EXTENSION}")
}

/// Formats a single conversation as Markdown.
///
/// Messages whose trimmed content is empty are skipped.
#[must_use]
pub fn format_conversation_markdown(conv: &Conversation) -> String {
    let mut out = format!("# {}\n\n", conv.title);

    for msg in conv.messages() {
        let content = msg.content.trim();
        if content.is_empty() {
            continue;
        }

        out.push_str(&format!("## {}\n\n", msg.message_type));
        out.push_str(content);
        out.push_str("\n\n---\n\n");
    }

    out
}

/// Formats extraction statistics for display.
#[must_use]
pub fn format_stats(stats: &ExtractionStats) -> String {
    format!(
        "{}\n  Databases scanned: {}\n  Databases with chat data: {}\n  Tabs: {}\n  Conversations: {} ({} discarded as empty)\n  Messages: {}\n  Bubbles without content: {}",
        "📊 Statistics".bold(),
        stats.databases_scanned.to_string().yellow(),
        stats.databases_with_chat.to_string().yellow(),
        stats.tabs_seen,
        stats.conversation_count.to_string().cyan(),
        stats.conversations_discarded,
        stats.message_count.to_string().green(),
        stats.bubbles_dropped
    )
}

/// One candidate storage root and what was found there.
#[derive(Debug, Clone)]
pub struct RootStatus {
    pub variant: AppVariant,
    pub path: PathBuf,
    pub exists: bool,
    pub store_files: usize,
}

/// Formats a table of candidate storage roots.
#[must_use]
pub fn format_roots_table(roots: &[RootStatus]) -> String {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["App", "Status", "Workspaces", "Path"]);

    for root in roots {
        let status = if root.exists { "found" } else { "missing" };
        let workspaces = if root.exists {
            root.store_files.to_string()
        } else {
            "-".to_string()
        };

        table.add_row(vec![
            root.variant.to_string(),
            status.to_string(),
            workspaces,
            root.path.display().to_string(),
        ]);
    }

    table.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Message;

    fn conversation(title: &str, id: &str, messages: &[(&str, &str)]) -> Conversation {
        let messages = messages
            .iter()
            .map(|(kind, content)| Message {
                timestamp: "1".to_string(),
                message_type: (*kind).to_string(),
                content: (*content).to_string(),
            })
            .collect();
        Conversation::new(title.to_string(), id.to_string(), messages).unwrap()
    }

    #[test]
    fn test_sanitize_title() {
        assert_eq!(sanitize_title("Bug fix!"), "Bug fix");
        assert_eq!(sanitize_title("  a/b:c  "), "abc");
        assert_eq!(sanitize_title("修复 bug_1-2"), "修复 bug_1-2");
        assert_eq!(sanitize_title("?!*"), "");
    }

    #[test]
    fn test_sanitize_is_idempotent() {
        for title in ["Bug fix!", "  spaced out  ", "a / b / c", "x\ty\nz", "émoji 🚀 ok", ""] {
            let once = sanitize_title(title);
            assert_eq!(sanitize_title(&once), once);
        }
    }

    #[test]
    fn test_filename_round_trip_case() {
        let conv = conversation("Bug fix!", "abcdef1234", &[("user", "hello")]);
        assert_eq!(conversation_filename(&conv), "Bug fix_abcdef12.md");
    }

    #[test]
    fn test_filename_fallbacks() {
        let conv = conversation("!!!", "Unknown", &[("user", "hello")]);
        assert_eq!(conversation_filename(&conv), "untitled_chat_Unknown.md");

        let conv = conversation("t", "ab/../cd", &[("user", "hello")]);
        assert_eq!(conversation_filename(&conv), "t_ab_.._cd.md");
    }

    #[test]
    fn test_markdown_layout() {
        let conv = conversation(
            "Bug fix!",
            "abcdef1234",
            &[("user", "  hello \n"), ("assistant", "part1\npart2")],
        );
        assert_eq!(
            format_conversation_markdown(&conv),
            "# Bug fix!\n\n## user\n\nhello\n\n---\n\n## assistant\n\npart1\npart2\n\n---\n\n"
        );
    }

    #[test]
    fn test_markdown_skips_blank_messages() {
        let conv = conversation("t", "id", &[("user", "   "), ("ai", "kept")]);
        let md = format_conversation_markdown(&conv);
        assert!(!md.contains("## user"));
        assert!(md.contains("## ai\n\nkept"));
    }

    #[test]
    fn test_roots_table_lists_every_root() {
        let table = format_roots_table(&[
            RootStatus {
                variant: AppVariant::Cursor,
                path: PathBuf::from("/a"),
                exists: true,
                store_files: 3,
            },
            RootStatus {
                variant: AppVariant::Windsurf,
                path: PathBuf::from("/b"),
                exists: false,
                store_files: 0,
            },
        ]);
        assert!(table.contains("cursor"));
        assert!(table.contains("missing"));
        assert!(table.contains("/b"));
    }
}
