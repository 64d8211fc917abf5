// History module - bounded, persisted log of past conversions
//
// The store owns the in-memory log and the single JSON file that backs it.
// Ring-buffer semantics: newest-first, capacity-bounded, oldest evicted on
// overflow. Every mutation persists; a failed write degrades to
// in-session-only behavior (logged, never raised to the caller).
//
// Wire format: a JSON array of at most `capacity` objects, newest first:
//   [{"mode":"encode","input":"hi","output":"aGk=","date":"<ISO-8601>"}, ...]
// Absent, empty, or non-JSON file contents are all treated as "no history".

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Default maximum number of entries kept in the log
pub const DEFAULT_CAPACITY: usize = 10;

/// The two conversion directions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Encode,
    Decode,
}

impl Mode {
    /// The other mode (explicit user toggle)
    pub fn toggled(self) -> Self {
        match self {
            Mode::Encode => Mode::Decode,
            Mode::Decode => Mode::Encode,
        }
    }

    /// Uppercase badge text for list rows and the title bar
    pub fn badge(&self) -> &'static str {
        match self {
            Mode::Encode => "ENCODE",
            Mode::Decode => "DECODE",
        }
    }
}

/// A single successful conversion. Immutable once created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub mode: Mode,
    pub input: String,
    pub output: String,
    /// Named `date` on the wire, serialized as an ISO-8601 string
    #[serde(rename = "date")]
    pub timestamp: DateTime<Utc>,
}

impl HistoryEntry {
    /// Build an entry stamped with the current wall-clock time.
    /// Callers only construct entries from a successful codec call, so
    /// `input` and `output` are non-empty by construction.
    pub fn new(mode: Mode, input: impl Into<String>, output: impl Into<String>) -> Self {
        Self {
            mode,
            input: input.into(),
            output: output.into(),
            timestamp: Utc::now(),
        }
    }
}

/// Bounded, ordered persistence of past conversions
pub struct HistoryStore {
    entries: Vec<HistoryEntry>,
    path: PathBuf,
    capacity: usize,
}

impl HistoryStore {
    /// Load the persisted log from `path`.
    ///
    /// Never fails: an absent, unreadable, or malformed file yields an empty
    /// log. Entries with empty input/output are dropped and an over-long
    /// file is trimmed to capacity, so the in-memory invariants hold no
    /// matter what is on disk.
    pub fn load(path: PathBuf, capacity: usize) -> Self {
        let entries = match fs::read_to_string(&path) {
            Ok(raw) => Self::parse_entries(&raw, capacity),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Vec::new(),
            Err(e) => {
                tracing::warn!("Could not read history file {:?}: {}", path, e);
                Vec::new()
            }
        };

        Self {
            entries,
            path,
            capacity,
        }
    }

    fn parse_entries(raw: &str, capacity: usize) -> Vec<HistoryEntry> {
        if raw.trim().is_empty() {
            return Vec::new();
        }

        match serde_json::from_str::<Vec<HistoryEntry>>(raw) {
            Ok(mut entries) => {
                entries.retain(|e| !e.input.is_empty() && !e.output.is_empty());
                entries.truncate(capacity);
                entries
            }
            Err(e) => {
                tracing::warn!("Malformed history file, starting empty: {}", e);
                Vec::new()
            }
        }
    }

    /// All entries, newest first. The presenter re-reads this every render.
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Prepend an entry, evict past capacity, persist.
    ///
    /// A failed write keeps the in-memory log intact (in-session-only
    /// degradation) and logs the failure.
    pub fn append(&mut self, entry: HistoryEntry) {
        self.entries.insert(0, entry);
        self.entries.truncate(self.capacity);

        if let Err(e) = self.persist() {
            tracing::warn!(
                "History not persisted (continuing in-session only): {:?}",
                e
            );
        }
    }

    /// Drop all entries and remove the file. A missing file is fine; any
    /// other removal failure is logged, not fatal.
    pub fn clear(&mut self) {
        self.entries.clear();

        match fs::remove_file(&self.path) {
            Ok(()) => {}
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => tracing::warn!("Could not remove history file {:?}: {}", self.path, e),
        }
    }

    fn persist(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).context("Failed to create history directory")?;
        }

        let json = serde_json::to_string(&self.entries).context("Failed to serialize history")?;
        fs::write(&self.path, json).context("Failed to write history file")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn entry(n: usize) -> HistoryEntry {
        HistoryEntry::new(Mode::Encode, format!("input-{}", n), format!("output-{}", n))
    }

    #[test]
    fn test_load_absent_file_is_empty() {
        let dir = tempdir().unwrap();
        let store = HistoryStore::load(dir.path().join("history.json"), DEFAULT_CAPACITY);
        assert!(store.is_empty());
    }

    #[test]
    fn test_load_non_json_is_empty() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("history.json");
        fs::write(&path, "definitely not json {").unwrap();

        let store = HistoryStore::load(path, DEFAULT_CAPACITY);
        assert!(store.is_empty());
    }

    #[test]
    fn test_load_empty_string_is_empty() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("history.json");
        fs::write(&path, "").unwrap();

        let store = HistoryStore::load(path, DEFAULT_CAPACITY);
        assert!(store.is_empty());
    }

    #[test]
    fn test_append_prepends_newest_first() {
        let dir = tempdir().unwrap();
        let mut store = HistoryStore::load(dir.path().join("history.json"), DEFAULT_CAPACITY);

        store.append(entry(1));
        store.append(entry(2));

        assert_eq!(store.len(), 2);
        assert_eq!(store.entries()[0].input, "input-2");
        assert_eq!(store.entries()[1].input, "input-1");
    }

    #[test]
    fn test_append_evicts_oldest_beyond_capacity() {
        let dir = tempdir().unwrap();
        let mut store = HistoryStore::load(dir.path().join("history.json"), DEFAULT_CAPACITY);

        for n in 1..=11 {
            store.append(entry(n));
        }

        // 11 appends leave exactly 10 entries, the 10 most recent, newest first
        assert_eq!(store.len(), 10);
        assert_eq!(store.entries()[0].input, "input-11");
        assert_eq!(store.entries()[9].input, "input-2");
        assert!(!store.entries().iter().any(|e| e.input == "input-1"));
    }

    #[test]
    fn test_persistence_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("history.json");

        let mut store = HistoryStore::load(path.clone(), DEFAULT_CAPACITY);
        store.append(HistoryEntry::new(Mode::Decode, "aGk=", "hi"));
        store.append(HistoryEntry::new(Mode::Encode, "hi", "aGk="));
        drop(store);

        let reloaded = HistoryStore::load(path, DEFAULT_CAPACITY);
        assert_eq!(reloaded.len(), 2);
        assert_eq!(reloaded.entries()[0].mode, Mode::Encode);
        assert_eq!(reloaded.entries()[1].mode, Mode::Decode);
        assert_eq!(reloaded.entries()[1].output, "hi");
    }

    #[test]
    fn test_wire_format() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("history.json");

        let mut store = HistoryStore::load(path.clone(), DEFAULT_CAPACITY);
        store.append(HistoryEntry::new(Mode::Encode, "hello", "aGVsbG8="));

        let raw = fs::read_to_string(&path).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&raw).unwrap();
        let first = &parsed.as_array().unwrap()[0];

        assert_eq!(first["mode"], "encode");
        assert_eq!(first["input"], "hello");
        assert_eq!(first["output"], "aGVsbG8=");
        // ISO-8601 timestamp under the `date` key
        let date = first["date"].as_str().unwrap();
        assert!(DateTime::parse_from_rfc3339(date).is_ok());
    }

    #[test]
    fn test_clear_then_reload_is_empty() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("history.json");

        let mut store = HistoryStore::load(path.clone(), DEFAULT_CAPACITY);
        store.append(entry(1));
        store.clear();

        assert!(store.is_empty());
        assert!(!path.exists());

        let reloaded = HistoryStore::load(path, DEFAULT_CAPACITY);
        assert!(reloaded.is_empty());
    }

    #[test]
    fn test_clear_on_empty_store_is_harmless() {
        let dir = tempdir().unwrap();
        let mut store = HistoryStore::load(dir.path().join("history.json"), DEFAULT_CAPACITY);
        store.clear();
        assert!(store.is_empty());
    }

    #[test]
    fn test_load_drops_entries_with_empty_fields() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("history.json");
        let raw = r#"[
            {"mode":"encode","input":"","output":"x","date":"2026-08-06T10:00:00Z"},
            {"mode":"decode","input":"aGk=","output":"hi","date":"2026-08-06T10:00:00Z"}
        ]"#;
        fs::write(&path, raw).unwrap();

        let store = HistoryStore::load(path, DEFAULT_CAPACITY);
        assert_eq!(store.len(), 1);
        assert_eq!(store.entries()[0].input, "aGk=");
    }

    #[test]
    fn test_load_trims_overlong_file_to_capacity() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("history.json");

        let entries: Vec<HistoryEntry> = (1..=15).map(entry).collect();
        fs::write(&path, serde_json::to_string(&entries).unwrap()).unwrap();

        let store = HistoryStore::load(path, DEFAULT_CAPACITY);
        assert_eq!(store.len(), 10);
        assert_eq!(store.entries()[0].input, "input-1");
    }

    #[test]
    fn test_append_survives_unwritable_path() {
        // /dev/null is a file, so the parent dir can never be created
        let mut store = HistoryStore::load(
            PathBuf::from("/dev/null/nope/history.json"),
            DEFAULT_CAPACITY,
        );

        store.append(entry(1));

        // In-memory log keeps the entry; the failure was only logged
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_mode_toggle() {
        assert_eq!(Mode::Encode.toggled(), Mode::Decode);
        assert_eq!(Mode::Decode.toggled(), Mode::Encode);
    }
}
