//! CLI interface using clap.
//!
//! A single command with flags; there are no subcommands.

use std::path::PathBuf;

use clap::Parser;

use crate::domain::AppVariant;

/// Cursor Chat Exporter - Export Cursor/Windsurf workspace chat history to Markdown.
#[derive(Parser, Debug)]
#[command(name = "cursor-chat-exporter")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose logging (use multiple times for more verbosity).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Application whose chat history to export.
    #[arg(long, value_enum, default_value_t = AppVariant::Cursor)]
    pub app: AppVariant,

    /// Output directory for exported files [default: chat_exports].
    #[arg(short, long, value_name = "DIR")]
    pub output: Option<PathBuf>,

    /// Workspace storage root to scan instead of the built-in locations (repeatable).
    #[arg(long = "root", value_name = "DIR")]
    pub roots: Vec<PathBuf>,

    /// Configuration file [default: ~/.cursor-chat-exporter/config.toml].
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// List candidate storage locations for every app instead of exporting.
    #[arg(long)]
    pub check_paths: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["cursor-chat-exporter"]).unwrap();
        assert_eq!(cli.app, AppVariant::Cursor);
        assert!(cli.output.is_none());
        assert!(cli.roots.is_empty());
        assert!(!cli.check_paths);
    }

    #[test]
    fn test_app_and_roots() {
        let cli = Cli::try_parse_from([
            "cursor-chat-exporter",
            "--app",
            "windsurf",
            "-o",
            "out",
            "--root",
            "/a",
            "--root",
            "/b",
        ])
        .unwrap();
        assert_eq!(cli.app, AppVariant::Windsurf);
        assert_eq!(cli.output, Some(PathBuf::from("out")));
        assert_eq!(cli.roots, vec![PathBuf::from("/a"), PathBuf::from("/b")]);
    }

    #[test]
    fn test_rejects_unknown_app() {
        assert!(Cli::try_parse_from(["cursor-chat-exporter", "--app", "vim"]).is_err());
    }

    #[test]
    fn test_rejects_subcommand() {
        assert!(Cli::try_parse_from(["cursor-chat-exporter", "list"]).is_err());
    }
}
