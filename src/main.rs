//! Cursor Chat Exporter - Export workspace chat history from Cursor and Windsurf.
//!
//! Scans the editor's `workspaceStorage` directories, reads the chat payload
//! from every workspace `state.vscdb`, and writes one Markdown file per
//! conversation.
//!
//!   cursor-chat-exporter                          # Export Cursor chats to ./chat_exports
//!   cursor-chat-exporter --app windsurf -o out    # Export Windsurf chats to ./out
//!   cursor-chat-exporter --check-paths            # Show where chat data is looked for
//!
//! The tool always exits with status 0; problems are reported on stdout.

mod application;
mod cli;
mod domain;
mod infrastructure;

use clap::Parser;
use colored::Colorize;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use application::{
    export_to_markdown, extract_all_conversations, format_roots_table, format_stats, RootStatus,
};
use cli::Cli;
use domain::{AppConfig, AppVariant};
use infrastructure::{
    configured_roots, home_dir, load_config_or_default, store_files_in, workspace_roots,
};

fn main() {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose);

    if let Err(e) = run(&cli) {
        println!("{} {}", "Error:".red().bold(), e);
    }
}

/// Main application logic.
fn run(cli: &Cli) -> domain::Result<()> {
    let config = load_config_or_default(cli.config.as_deref());

    if cli.check_paths {
        return cmd_check_paths(&config);
    }

    cmd_export(cli, &config)
}

/// Export command: scan, extract, write.
fn cmd_export(cli: &Cli, config: &AppConfig) -> domain::Result<()> {
    let roots = if cli.roots.is_empty() {
        workspace_roots(cli.app, config)?
    } else {
        cli.roots.clone()
    };

    println!("Exporting {} chat data...", cli.app.to_string().cyan());

    let (collection, stats) = extract_all_conversations(&roots);
    if stats.roots_found == 0 {
        println!("No {} workspace storage directory found", cli.app);
    }

    let output_dir = config.output_dir(cli.output.as_deref());
    match export_to_markdown(&collection, &output_dir) {
        Ok(report) => {
            println!();
            println!("{}", format_stats(&stats));
            println!(
                "\n{} Exported {} conversations ({} messages) to {}/ ({} failed)",
                "📁".bold(),
                report.written.len(),
                collection.message_count(),
                output_dir.display(),
                report.failed
            );
        }
        Err(e) => {
            println!("{} {}", "Export failed:".red().bold(), e);
        }
    }

    Ok(())
}

/// Show candidate storage roots for every app.
fn cmd_check_paths(config: &AppConfig) -> domain::Result<()> {
    let home = home_dir()?;

    let statuses: Vec<RootStatus> = AppVariant::ALL
        .iter()
        .flat_map(|&variant| {
            configured_roots(variant, config, &home)
                .into_iter()
                .map(move |path| (variant, path))
        })
        .map(|(variant, path)| {
            let exists = path.is_dir();
            let store_files = if exists {
                store_files_in(&path).len()
            } else {
                0
            };
            RootStatus {
                variant,
                path,
                exists,
                store_files,
            }
        })
        .collect();

    println!("{}", "📂 Chat Storage Locations".bold());
    println!();
    println!("{}", format_roots_table(&statuses));

    Ok(())
}

/// Setup tracing/logging based on verbosity level.
fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stdout),
        )
        .with(filter)
        .init();
}
