// CLI module - command-line argument parsing and one-shot handlers
//
// Without a subcommand the binary runs the TUI. Subcommands run headless:
// - encode/decode: convert once, print the result, record it in history
// - history: print or clear the shared history file
// - config --show / --path / --reset: configuration management

use crate::codec;
use crate::config::{Config, VERSION};
use crate::history::{HistoryEntry, HistoryStore, Mode};
use crate::tui::components::formatters::relative_time;
use crate::util::display_excerpt;
use clap::{Parser, Subcommand};
use std::io::Write;

/// Base64 playground for the terminal
#[derive(Parser)]
#[command(name = "b64play")]
#[command(version = VERSION)]
#[command(about = "Encode/decode Base64 with a persisted conversion history", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Encode text and print the Base64 result
    Encode {
        /// Text to encode
        text: String,
    },

    /// Decode Base64 and print the plain text
    Decode {
        /// Base64 text to decode
        text: String,
    },

    /// Show the conversion history
    History {
        /// Clear the history instead of showing it
        #[arg(long)]
        clear: bool,
    },

    /// Manage configuration
    Config {
        /// Show effective configuration
        #[arg(long)]
        show: bool,

        /// Reset config file to defaults
        #[arg(long)]
        reset: bool,

        /// Show config file path
        #[arg(long)]
        path: bool,
    },
}

/// Run a one-shot subcommand
pub fn run(command: Commands, config: &Config) {
    match command {
        Commands::Encode { text } => handle_convert(config, Mode::Encode, &text),
        Commands::Decode { text } => handle_convert(config, Mode::Decode, &text),
        Commands::History { clear } => {
            if clear {
                handle_history_clear(config);
            } else {
                handle_history_show(config);
            }
        }
        Commands::Config { show, reset, path } => {
            if path {
                handle_config_path();
            } else if show {
                handle_config_show(config);
            } else if reset {
                handle_config_reset();
            } else {
                println!("Usage: b64play config [--show|--reset|--path]");
                println!();
                println!("Options:");
                println!("  --show    Display effective configuration");
                println!("  --reset   Reset config file to defaults");
                println!("  --path    Show config file path");
            }
        }
    }
}

/// One-shot conversion: same semantics as the TUI submit - empty input is a
/// validation error, success prints and records, failure records nothing.
fn handle_convert(config: &Config, mode: Mode, text: &str) {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        eprintln!("Error: input is empty");
        std::process::exit(1);
    }

    let output = match mode {
        Mode::Encode => codec::encode(trimmed),
        Mode::Decode => match codec::decode(trimmed) {
            Ok(output) => output,
            Err(e) => {
                eprintln!("Error: decoding failed: {}", e);
                std::process::exit(1);
            }
        },
    };

    println!("{}", output);

    let mut store = HistoryStore::load(config.history_file.clone(), config.max_entries);
    store.append(HistoryEntry::new(mode, trimmed, output));
}

fn handle_history_show(config: &Config) {
    let store = HistoryStore::load(config.history_file.clone(), config.max_entries);

    if store.is_empty() {
        println!("No history yet.");
        return;
    }

    for entry in store.entries() {
        println!(
            "{:<6} {:<16} {}  ->  {}",
            entry.mode.badge(),
            relative_time(entry.timestamp),
            display_excerpt(&entry.input, config.truncate_len),
            display_excerpt(&entry.output, config.truncate_len),
        );
    }
}

fn handle_history_clear(config: &Config) {
    let mut store = HistoryStore::load(config.history_file.clone(), config.max_entries);

    if store.is_empty() {
        println!("History is already empty.");
        return;
    }

    // Destructive: confirm before touching the file
    eprint!("Clear all {} history entries? [y/N] ", store.len());
    std::io::stderr().flush().unwrap();

    let mut input = String::new();
    std::io::stdin().read_line(&mut input).unwrap();

    if !input.trim().eq_ignore_ascii_case("y") {
        println!("Aborted.");
        return;
    }

    store.clear();
    println!("History cleared.");
}

fn handle_config_path() {
    match Config::config_path() {
        Some(path) => println!("{}", path.display()),
        None => {
            eprintln!("Error: Could not determine config path");
            std::process::exit(1);
        }
    }
}

fn handle_config_show(config: &Config) {
    println!("# Effective configuration (env > file > defaults)");
    println!();
    println!("theme = {:?}", config.theme);
    println!();
    println!("[history]");
    println!("file = {:?}", config.history_file.display().to_string());
    println!("max_entries = {}", config.max_entries);
    println!();
    println!("[ui]");
    println!("truncate_len = {}", config.truncate_len);
    println!();
    println!("[logging]");
    println!("level = {:?}", config.logging.level);
    println!("file_enabled = {}", config.logging.file_enabled);
    println!("file_dir = {:?}", config.logging.file_dir.display().to_string());

    println!();
    if let Some(path) = Config::config_path() {
        if path.exists() {
            println!("# Source: {}", path.display());
        } else {
            println!("# Source: defaults (no config file)");
        }
    }
}

fn handle_config_reset() {
    let Some(path) = Config::config_path() else {
        eprintln!("Error: Could not determine config path");
        std::process::exit(1);
    };

    // Confirm if file exists
    if path.exists() {
        eprint!(
            "Config file exists at {}. Overwrite? [y/N] ",
            path.display()
        );
        std::io::stderr().flush().unwrap();

        let mut input = String::new();
        std::io::stdin().read_line(&mut input).unwrap();

        if !input.trim().eq_ignore_ascii_case("y") {
            println!("Aborted.");
            return;
        }
    }

    if let Some(parent) = path.parent() {
        if let Err(e) = std::fs::create_dir_all(parent) {
            eprintln!("Error creating directory: {}", e);
            std::process::exit(1);
        }
    }

    if let Err(e) = std::fs::write(&path, Config::default().to_toml()) {
        eprintln!("Error writing config: {}", e);
        std::process::exit(1);
    }

    println!("Config reset to defaults: {}", path.display());
}
