// b64play - Base64 playground for the terminal
//
// Converts text to and from Base64, keeps a bounded history of past
// conversions in a per-user JSON file, and renders that history as an
// interactive list.
//
// Architecture:
// - Codec: stateless encode/decode with typed decode errors
// - History store: bounded, newest-first log persisted after every mutation
// - TUI (ratatui): input/result panels plus the interactive history list
// - CLI (clap): headless one-shot subcommands sharing the same history

mod cli;
mod codec;
mod config;
mod history;
mod logging;
mod theme;
mod tui;
mod util;

use anyhow::Result;
use clap::Parser;
use config::Config;
use history::HistoryStore;
use logging::{LogBuffer, TuiLogLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    // Parse args first so --help/--version never touch the filesystem
    let cli = cli::Cli::parse();

    // Ensure config template exists (helps users discover options)
    Config::ensure_config_exists();

    let config = Config::from_env();

    // Precedence: RUST_LOG env var > config file > default "info"
    let default_filter = format!("b64play={}", config.logging.level);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into());

    // One-shot subcommands run headless: results to stdout, logs to stderr
    if let Some(command) = cli.command {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();

        cli::run(command, &config);
        return Ok(());
    }

    // TUI mode: capture logs to an in-memory buffer (printing to stdout
    // would garble the alternate screen), optionally also to a JSON file.
    // The guard must stay alive for the duration of the program so file
    // logs flush.
    let log_buffer = LogBuffer::new();

    let _file_guard: Option<tracing_appender::non_blocking::WorkerGuard> =
        if config.logging.file_enabled {
            if let Err(e) = std::fs::create_dir_all(&config.logging.file_dir) {
                eprintln!(
                    "Warning: Could not create log directory {:?}: {}",
                    config.logging.file_dir, e
                );
                // Fall back to buffer-only logging
                tracing_subscriber::registry()
                    .with(filter)
                    .with(TuiLogLayer::new(log_buffer.clone()))
                    .init();
                None
            } else {
                let file_appender =
                    tracing_appender::rolling::never(&config.logging.file_dir, "b64play.log");
                let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

                tracing_subscriber::registry()
                    .with(filter)
                    .with(TuiLogLayer::new(log_buffer.clone()))
                    .with(
                        tracing_subscriber::fmt::layer()
                            .json()
                            .with_writer(non_blocking)
                            .with_ansi(false),
                    )
                    .init();

                Some(guard)
            }
        } else {
            tracing_subscriber::registry()
                .with(filter)
                .with(TuiLogLayer::new(log_buffer.clone()))
                .init();
            None
        };

    tracing::debug!("History file: {:?}", config.history_file);

    // The store is built once here and owned by the controller from then on
    let store = HistoryStore::load(config.history_file.clone(), config.max_entries);

    tui::run_tui(store, &config, log_buffer).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
