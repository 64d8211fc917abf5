//! Configuration
//!
//! Loaded in order of precedence:
//! 1. Environment variables (highest priority)
//! 2. Config file (~/.config/b64play/config.toml)
//! 3. Built-in defaults (lowest priority)

use serde::Deserialize;
use std::path::PathBuf;

/// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Theme name: "dark" or "light"
    pub theme: String,

    /// Path of the history file (the single persisted storage slot)
    pub history_file: PathBuf,

    /// Maximum number of history entries kept
    pub max_entries: usize,

    /// Display cells before history text is truncated with an ellipsis
    pub truncate_len: usize,

    /// Logging configuration
    pub logging: LoggingConfig,
}

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Default level filter when RUST_LOG is unset: trace/debug/info/warn/error
    pub level: String,

    /// Also write JSON logs to a file
    pub file_enabled: bool,

    /// Directory for log files
    pub file_dir: PathBuf,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file_enabled: false,
            file_dir: data_dir().join("logs"),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: "dark".to_string(),
            history_file: data_dir().join("history.json"),
            max_entries: crate::history::DEFAULT_CAPACITY,
            truncate_len: 80,
            logging: LoggingConfig::default(),
        }
    }
}

/// Per-user data directory for the history file and logs
fn data_dir() -> PathBuf {
    dirs::data_dir()
        .map(|p| p.join("b64play"))
        .unwrap_or_else(|| PathBuf::from("."))
}

// ─────────────────────────────────────────────────────────────────────────────
// File Configuration (deserialization layer)
// ─────────────────────────────────────────────────────────────────────────────

/// Config file structure (subset of Config that makes sense to persist)
#[derive(Debug, Deserialize, Default)]
pub(crate) struct FileConfig {
    pub theme: Option<String>,

    /// Optional [history] section
    pub history: Option<FileHistory>,

    /// Optional [ui] section
    pub ui: Option<FileUi>,

    /// Optional [logging] section
    pub logging: Option<FileLogging>,
}

#[derive(Debug, Deserialize, Default)]
pub(crate) struct FileHistory {
    pub file: Option<String>,
    pub max_entries: Option<usize>,
}

#[derive(Debug, Deserialize, Default)]
pub(crate) struct FileUi {
    pub truncate_len: Option<usize>,
}

#[derive(Debug, Deserialize, Default)]
pub(crate) struct FileLogging {
    pub level: Option<String>,
    pub file_enabled: Option<bool>,
    pub file_dir: Option<String>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Configuration Loading
// ─────────────────────────────────────────────────────────────────────────────

impl Config {
    /// Get the config file path: ~/.config/b64play/config.toml
    /// Uses Unix-style ~/.config on all platforms for consistency
    pub fn config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|p| p.join(".config").join("b64play").join("config.toml"))
    }

    /// Create the config file with defaults if it doesn't exist.
    /// Called during startup to help users discover configuration options.
    pub fn ensure_config_exists() {
        let Some(path) = Self::config_path() else {
            return;
        };

        // Don't overwrite existing config
        if path.exists() {
            return;
        }

        if let Some(parent) = path.parent() {
            if std::fs::create_dir_all(parent).is_err() {
                return; // Silently fail - config is optional
            }
        }

        // Write config (ignore errors - config is optional)
        let _ = std::fs::write(&path, Self::default().to_toml());
    }

    /// Load file config if it exists
    ///
    /// A config file that exists but cannot be parsed fails fast with a
    /// clear error instead of silently falling back to defaults.
    fn load_file_config() -> FileConfig {
        let Some(path) = Self::config_path() else {
            return FileConfig::default();
        };

        match std::fs::read_to_string(&path) {
            Ok(contents) => match toml::from_str(&contents) {
                Ok(config) => config,
                Err(e) => {
                    eprintln!("Error: failed to parse config file {}", path.display());
                    eprintln!("  {}", e);
                    eprintln!("  To reset, delete the file and restart b64play.");
                    std::process::exit(1);
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => FileConfig::default(),
            Err(e) => {
                eprintln!("Error: cannot read config file {}: {}", path.display(), e);
                std::process::exit(1);
            }
        }
    }

    /// Load configuration: env vars -> file -> defaults
    pub fn from_env() -> Self {
        let file = Self::load_file_config();
        let defaults = Config::default();

        // Theme: env > file > default
        let theme = std::env::var("B64PLAY_THEME")
            .ok()
            .or(file.theme)
            .unwrap_or(defaults.theme);

        let file_history = file.history.unwrap_or_default();

        // History file: env > file > default
        let history_file = std::env::var("B64PLAY_HISTORY_FILE")
            .ok()
            .or(file_history.file)
            .map(PathBuf::from)
            .unwrap_or(defaults.history_file);

        // Capacity: file > default (guard against a zero that would make
        // every append a no-op)
        let max_entries = file_history
            .max_entries
            .filter(|&n| n > 0)
            .unwrap_or(defaults.max_entries);

        let truncate_len = file
            .ui
            .unwrap_or_default()
            .truncate_len
            .filter(|&n| n >= 8)
            .unwrap_or(defaults.truncate_len);

        let file_logging = file.logging.unwrap_or_default();
        let logging = LoggingConfig {
            level: file_logging.level.unwrap_or(defaults.logging.level),
            file_enabled: file_logging
                .file_enabled
                .unwrap_or(defaults.logging.file_enabled),
            file_dir: file_logging
                .file_dir
                .map(PathBuf::from)
                .unwrap_or(defaults.logging.file_dir),
        };

        Self {
            theme,
            history_file,
            max_entries,
            truncate_len,
            logging,
        }
    }

    /// Serialize to a commented TOML template. Single source of truth for
    /// the file written by `ensure_config_exists` and `config --reset`.
    pub fn to_toml(&self) -> String {
        format!(
            r#"# b64play configuration
# Values here are overridden by B64PLAY_* environment variables.

# Theme: "dark" or "light"
theme = "{theme}"

[history]
# Where past conversions are stored (JSON array, newest first)
file = "{history_file}"
# How many entries to keep before the oldest is evicted
max_entries = {max_entries}

[ui]
# Display width of input/output excerpts in the history list
truncate_len = {truncate_len}

[logging]
# Log level when RUST_LOG is unset: trace, debug, info, warn, error
level = "{level}"
# Also write JSON logs to a file (useful since the TUI owns the screen)
file_enabled = {file_enabled}
file_dir = "{file_dir}"
"#,
            theme = self.theme,
            history_file = self.history_file.display(),
            max_entries = self.max_entries,
            truncate_len = self.truncate_len,
            level = self.logging.level,
            file_enabled = self.logging.file_enabled,
            file_dir = self.logging.file_dir.display(),
        )
    }
}
