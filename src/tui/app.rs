// TUI application state
//
// The App is the controller: it owns the history store, the input buffer,
// the current mode, and the displayed result, and mediates every user
// action across the codec, the store, and the presenter. All state lives
// here - no module-level globals.

use super::components::toast::Toast;
use super::input::InputHandler;
use super::modal::Modal;
use crate::codec;
use crate::config::Config;
use crate::history::{HistoryEntry, HistoryStore, Mode};
use crate::logging::LogBuffer;
use crate::theme::{Theme, ThemeKind};

/// Which panel receives navigation/editing keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Input,
    History,
}

/// The displayed result, as an explicit state rather than sniffed text.
/// Whether there is something to copy is answered by the variant, never by
/// inspecting the displayed string.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Outcome {
    /// Initial/placeholder state
    #[default]
    Empty,
    /// A successful conversion, holding the exact output text
    Success(String),
    /// A failed conversion, holding the user-facing message
    Error(String),
}

impl Outcome {
    /// The text a copy action should place on the clipboard, if any
    pub fn copy_text(&self) -> Option<&str> {
        match self {
            Outcome::Success(text) if !text.is_empty() => Some(text),
            _ => None,
        }
    }
}

/// Main application state for the TUI
pub struct App {
    /// Current conversion direction (default Encode)
    pub mode: Mode,

    /// Input buffer being edited
    pub input: String,

    /// Cursor position in the input buffer, as a char index
    pub cursor: usize,

    /// The displayed result
    pub outcome: Outcome,

    /// Which panel has focus
    pub focus: Focus,

    /// Selected history entry, if any
    pub selected: Option<usize>,

    /// The history store (owned here; the presenter re-reads it each frame)
    pub store: HistoryStore,

    /// Active modal overlay, if any
    pub modal: Option<Modal>,

    /// Active toast notification, if any
    pub toast: Option<Toast>,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Resolved color theme
    pub theme: Theme,

    /// Display cells before history excerpts are truncated
    pub truncate_len: usize,

    /// Captured logs, surfaced passively in the status bar
    pub log_buffer: LogBuffer,

    /// Input handler for navigation/action key behavior
    input_handler: InputHandler,
}

impl App {
    pub fn new(store: HistoryStore, config: &Config, log_buffer: LogBuffer) -> Self {
        Self {
            mode: Mode::Encode,
            input: String::new(),
            cursor: 0,
            outcome: Outcome::Empty,
            focus: Focus::Input,
            selected: None,
            store,
            modal: None,
            toast: None,
            should_quit: false,
            theme: ThemeKind::from_name(&config.theme).theme(),
            truncate_len: config.truncate_len,
            log_buffer,
            input_handler: InputHandler::default(),
        }
    }

    // ── Controller operations ────────────────────────────────────────────

    /// Toggle encode/decode. The displayed result resets to empty, never to
    /// a stale value or error.
    pub fn toggle_mode(&mut self) {
        self.mode = self.mode.toggled();
        self.outcome = Outcome::Empty;
    }

    /// Run the codec on the trimmed input.
    ///
    /// Empty input is a validation notice and never reaches the codec.
    /// Success updates the result and appends to history; failure shows a
    /// mode-specific error and leaves history untouched.
    pub fn submit(&mut self) {
        let trimmed = self.input.trim().to_string();
        if trimmed.is_empty() {
            self.show_toast("Enter some text first");
            return;
        }

        match self.mode {
            Mode::Encode => {
                let output = codec::encode(&trimmed);
                self.store
                    .append(HistoryEntry::new(Mode::Encode, trimmed, output.clone()));
                self.outcome = Outcome::Success(output);
            }
            Mode::Decode => match codec::decode(&trimmed) {
                Ok(output) => {
                    self.store
                        .append(HistoryEntry::new(Mode::Decode, trimmed, output.clone()));
                    self.outcome = Outcome::Success(output);
                }
                Err(e) => {
                    self.outcome = Outcome::Error(format!("Decoding failed: {}", e));
                }
            },
        }
    }

    /// Text for the copy-result action, or None when there is nothing
    /// copyable (empty or error result). The caller performs the actual
    /// clipboard write and feedback.
    pub fn copy_result(&self) -> Option<String> {
        self.outcome.copy_text().map(str::to_string)
    }

    /// Reset input and result to their initial placeholder state.
    /// History is untouched.
    pub fn clear_input(&mut self) {
        self.input.clear();
        self.cursor = 0;
        self.outcome = Outcome::Empty;
    }

    /// Open the confirmation gate in front of the destructive clear
    pub fn request_clear_history(&mut self) {
        self.modal = Some(Modal::ConfirmClear);
    }

    /// Actually clear history; only called after the modal confirmed
    pub fn confirm_clear_history(&mut self) {
        self.store.clear();
        self.selected = None;
        self.show_toast("History cleared");
    }

    /// Load the selected entry's input and mode back into the input panel
    /// for re-use. Does not resubmit.
    pub fn replay_selected(&mut self) {
        let Some(entry) = self.selected.and_then(|i| self.store.entries().get(i)) else {
            return;
        };

        self.input = entry.input.clone();
        self.cursor = self.input.chars().count();
        self.mode = entry.mode;
        self.outcome = Outcome::Empty;
        self.focus = Focus::Input;
    }

    /// Output of the selected history entry, for the per-entry copy action
    pub fn selected_output(&self) -> Option<String> {
        self.selected
            .and_then(|i| self.store.entries().get(i))
            .map(|e| e.output.clone())
    }

    /// Show a toast, replacing (and re-timing) any existing one
    pub fn show_toast(&mut self, message: impl Into<String>) {
        self.toast = Some(Toast::new(message));
    }

    /// Periodic tick: drop expired toasts
    pub fn tick(&mut self) {
        if self.toast.as_ref().is_some_and(Toast::is_expired) {
            self.toast = None;
        }
    }

    // ── Input editing ────────────────────────────────────────────────────

    fn byte_cursor(&self) -> usize {
        self.input
            .char_indices()
            .nth(self.cursor)
            .map(|(i, _)| i)
            .unwrap_or(self.input.len())
    }

    pub fn insert_char(&mut self, c: char) {
        let at = self.byte_cursor();
        self.input.insert(at, c);
        self.cursor += 1;
    }

    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        self.cursor -= 1;
        let at = self.byte_cursor();
        self.input.remove(at);
    }

    pub fn delete_char(&mut self) {
        if self.cursor < self.input.chars().count() {
            let at = self.byte_cursor();
            self.input.remove(at);
        }
    }

    pub fn cursor_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn cursor_right(&mut self) {
        if self.cursor < self.input.chars().count() {
            self.cursor += 1;
        }
    }

    pub fn cursor_home(&mut self) {
        self.cursor = 0;
    }

    pub fn cursor_end(&mut self) {
        self.cursor = self.input.chars().count();
    }

    // ── Focus and selection ──────────────────────────────────────────────

    /// Cycle focus between the input and history panels
    pub fn focus_next(&mut self) {
        self.focus = match self.focus {
            Focus::Input => Focus::History,
            Focus::History => Focus::Input,
        };
    }

    /// Move history selection down (toward older entries)
    pub fn select_next(&mut self) {
        if self.store.is_empty() {
            return;
        }
        let last = self.store.len() - 1;
        self.selected = Some(match self.selected {
            None => 0,
            Some(i) => (i + 1).min(last),
        });
    }

    /// Move history selection up (toward newer entries)
    pub fn select_prev(&mut self) {
        if self.store.is_empty() {
            return;
        }
        self.selected = Some(match self.selected {
            None => 0,
            Some(i) => i.saturating_sub(1),
        });
    }

    /// Drop the history selection
    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    // ── Key press plumbing ───────────────────────────────────────────────

    /// Handle a key press - returns true if the action should trigger
    pub fn handle_key_press(&mut self, key: crossterm::event::KeyCode) -> bool {
        self.input_handler.handle_key_press(key)
    }

    /// Handle a key release
    pub fn handle_key_release(&mut self, key: crossterm::event::KeyCode) {
        self.input_handler.handle_key_release(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::DEFAULT_CAPACITY;
    use tempfile::{tempdir, TempDir};

    fn test_app() -> (App, TempDir) {
        let dir = tempdir().unwrap();
        let store = HistoryStore::load(dir.path().join("history.json"), DEFAULT_CAPACITY);
        let app = App::new(store, &Config::default(), LogBuffer::new());
        (app, dir)
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            app.insert_char(c);
        }
    }

    #[test]
    fn test_submit_encode_appends_history() {
        let (mut app, _dir) = test_app();
        type_text(&mut app, "hello");
        app.submit();

        assert_eq!(app.outcome, Outcome::Success("aGVsbG8=".to_string()));
        assert_eq!(app.store.len(), 1);
        assert_eq!(app.store.entries()[0].mode, Mode::Encode);
        assert_eq!(app.store.entries()[0].output, "aGVsbG8=");
    }

    #[test]
    fn test_submit_decode_round_trip() {
        let (mut app, _dir) = test_app();
        app.mode = Mode::Decode;
        type_text(&mut app, "aGVsbG8=");
        app.submit();

        assert_eq!(app.outcome, Outcome::Success("hello".to_string()));
    }

    #[test]
    fn test_submit_empty_is_validation_only() {
        let (mut app, _dir) = test_app();
        type_text(&mut app, "   ");
        app.submit();

        // No codec call result, no history mutation, but a notice
        assert_eq!(app.outcome, Outcome::Empty);
        assert!(app.store.is_empty());
        assert!(app.toast.is_some());
    }

    #[test]
    fn test_submit_trims_input() {
        let (mut app, _dir) = test_app();
        type_text(&mut app, "  hello  ");
        app.submit();

        assert_eq!(app.store.entries()[0].input, "hello");
        assert_eq!(app.outcome, Outcome::Success("aGVsbG8=".to_string()));
    }

    #[test]
    fn test_decode_failure_keeps_history_unchanged() {
        let (mut app, _dir) = test_app();
        app.mode = Mode::Decode;
        type_text(&mut app, "not-valid-base64!!");
        app.submit();

        assert!(matches!(app.outcome, Outcome::Error(_)));
        assert!(app.store.is_empty());
    }

    #[test]
    fn test_eleven_submissions_keep_ten_newest() {
        let (mut app, _dir) = test_app();
        for n in 1..=11 {
            app.clear_input();
            type_text(&mut app, &format!("text-{}", n));
            app.submit();
        }

        assert_eq!(app.store.len(), 10);
        assert_eq!(app.store.entries()[0].input, "text-11");
        assert_eq!(app.store.entries()[9].input, "text-2");
    }

    #[test]
    fn test_mode_toggle_resets_outcome() {
        let (mut app, _dir) = test_app();
        type_text(&mut app, "hello");
        app.submit();
        assert!(matches!(app.outcome, Outcome::Success(_)));

        app.toggle_mode();
        assert_eq!(app.mode, Mode::Decode);
        assert_eq!(app.outcome, Outcome::Empty);
    }

    #[test]
    fn test_copy_result_only_on_success() {
        let (mut app, _dir) = test_app();
        assert_eq!(app.copy_result(), None);

        type_text(&mut app, "hello");
        app.submit();
        assert_eq!(app.copy_result(), Some("aGVsbG8=".to_string()));

        // An error result is never copyable, even though text is displayed
        app.outcome = Outcome::Error("Decoding failed".to_string());
        assert_eq!(app.copy_result(), None);
    }

    #[test]
    fn test_copy_result_ignores_error_wording_in_output() {
        // A legitimate decode whose plaintext contains the word "error"
        // must still be copyable (explicit state, not string sniffing)
        let (mut app, _dir) = test_app();
        app.outcome = Outcome::Success("an error walks into a bar".to_string());
        assert!(app.copy_result().is_some());
    }

    #[test]
    fn test_clear_input_keeps_history() {
        let (mut app, _dir) = test_app();
        type_text(&mut app, "hello");
        app.submit();
        app.clear_input();

        assert!(app.input.is_empty());
        assert_eq!(app.outcome, Outcome::Empty);
        assert_eq!(app.store.len(), 1);
    }

    #[test]
    fn test_clear_history_requires_confirmation() {
        let (mut app, _dir) = test_app();
        type_text(&mut app, "hello");
        app.submit();

        app.request_clear_history();
        assert_eq!(app.modal, Some(Modal::ConfirmClear));
        // Nothing cleared until the modal confirms
        assert_eq!(app.store.len(), 1);

        app.confirm_clear_history();
        assert!(app.store.is_empty());
    }

    #[test]
    fn test_replay_loads_input_and_mode() {
        let (mut app, _dir) = test_app();
        app.mode = Mode::Decode;
        type_text(&mut app, "aGVsbG8=");
        app.submit();

        app.mode = Mode::Encode;
        app.clear_input();
        app.focus = Focus::History;
        app.selected = Some(0);
        app.replay_selected();

        assert_eq!(app.input, "aGVsbG8=");
        assert_eq!(app.mode, Mode::Decode);
        assert_eq!(app.outcome, Outcome::Empty);
        assert_eq!(app.focus, Focus::Input);
    }

    #[test]
    fn test_selection_clamps_to_bounds() {
        let (mut app, _dir) = test_app();
        type_text(&mut app, "hello");
        app.submit();

        app.select_next();
        assert_eq!(app.selected, Some(0));
        app.select_next();
        assert_eq!(app.selected, Some(0));
        app.select_prev();
        assert_eq!(app.selected, Some(0));
    }

    #[test]
    fn test_cursor_editing_is_char_based() {
        let (mut app, _dir) = test_app();
        type_text(&mut app, "日本語");
        assert_eq!(app.cursor, 3);

        app.cursor_left();
        app.backspace();
        assert_eq!(app.input, "日語");

        app.cursor_end();
        app.insert_char('!');
        assert_eq!(app.input, "日語!");
    }
}
