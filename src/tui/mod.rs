// TUI module - Terminal User Interface
//
// Manages the terminal using ratatui:
// - Terminal initialization and cleanup
// - Event loop (keyboard input, timer ticks)
// - Layered key dispatch: modal -> global -> focused panel

pub mod app;
pub mod clipboard;
pub mod components;
pub mod input;
pub mod modal;
pub mod ui;

use crate::config::Config;
use crate::history::HistoryStore;
use crate::logging::LogBuffer;
use anyhow::{Context, Result};
use app::{App, Focus};
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use modal::ModalAction;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;

/// Run the TUI
///
/// Sets up the terminal, runs the event loop, and restores the terminal on
/// exit. Blocks until the user quits.
pub async fn run_tui(store: HistoryStore, config: &Config, log_buffer: LogBuffer) -> Result<()> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("Failed to setup terminal")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    let mut app = App::new(store, config, log_buffer);

    let result = run_event_loop(&mut terminal, &mut app).await;

    // Restore terminal
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .context("Failed to restore terminal")?;
    terminal.show_cursor().context("Failed to show cursor")?;

    result
}

/// Main event loop
///
/// tokio::select! waits on keyboard/mouse input and the periodic tick at
/// the same time, responding to whichever happens first. The tick expires
/// toasts and keeps relative timestamps fresh.
async fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<()> {
    let mut tick_interval = tokio::time::interval(Duration::from_millis(200));

    loop {
        terminal
            .draw(|f| ui::draw(f, app))
            .context("Failed to draw terminal")?;

        tokio::select! {
            // Keyboard or mouse input
            _ = async {
                if event::poll(Duration::from_millis(10)).unwrap_or(false) {
                    match event::read() {
                        Ok(Event::Key(key_event)) => handle_key_event(app, key_event),
                        Ok(Event::Mouse(mouse_event)) => handle_mouse_event(app, mouse_event),
                        _ => {}
                    }
                }
            } => {}

            // Periodic tick
            _ = tick_interval.tick() => {
                app.tick();
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

/// Handle keyboard input.
/// Layered dispatch: Modal -> Global -> Focused panel.
fn handle_key_event(app: &mut App, key_event: KeyEvent) {
    if handle_modal_input(app, &key_event) {
        return;
    }

    if handle_global_keys(app, &key_event) {
        return;
    }

    match key_event.kind {
        KeyEventKind::Press => match app.focus {
            Focus::Input => handle_input_keys(app, &key_event),
            Focus::History => handle_history_keys(app, &key_event),
        },
        KeyEventKind::Release => {
            app.handle_key_release(key_event.code);
        }
        _ => {}
    }
}

/// Handle mouse input: wheel scrolling moves the history selection
fn handle_mouse_event(app: &mut App, mouse_event: MouseEvent) {
    if app.modal.is_some() {
        return;
    }
    match mouse_event.kind {
        MouseEventKind::ScrollUp => {
            app.focus = Focus::History;
            app.select_prev();
        }
        MouseEventKind::ScrollDown => {
            app.focus = Focus::History;
            app.select_next();
        }
        _ => {}
    }
}

/// Modal input - returns true if the modal absorbed the event
fn handle_modal_input(app: &mut App, key_event: &KeyEvent) -> bool {
    let Some(ref mut modal) = app.modal else {
        return false;
    };

    // Always process Release events so key state never sticks after the
    // modal closes
    if key_event.kind == KeyEventKind::Release {
        app.handle_key_release(key_event.code);
        return true;
    }

    if key_event.kind != KeyEventKind::Press {
        return true;
    }

    match modal.handle_input(key_event.code) {
        ModalAction::None => {}
        ModalAction::Close => app.modal = None,
        ModalAction::Confirm => {
            app.modal = None;
            app.confirm_clear_history();
        }
    }

    true
}

/// Global keys - work the same regardless of focus.
/// Uses Ctrl-combos so they never collide with text being typed.
fn handle_global_keys(app: &mut App, key_event: &KeyEvent) -> bool {
    if key_event.kind != KeyEventKind::Press {
        return false;
    }

    let key = key_event.code;
    let ctrl = key_event.modifiers.contains(KeyModifiers::CONTROL);

    match (key, ctrl) {
        // Quit
        (KeyCode::Char('q'), true) | (KeyCode::Char('c'), true) => {
            if app.handle_key_press(key) {
                app.should_quit = true;
            }
            true
        }
        // Mode toggle (resets the displayed result)
        (KeyCode::Char('e'), true) => {
            if app.handle_key_press(key) {
                app.toggle_mode();
            }
            true
        }
        // Copy the current result
        (KeyCode::Char('y'), true) => {
            if app.handle_key_press(key) {
                let text = app.copy_result();
                copy_with_feedback(app, text);
            }
            true
        }
        // Clear input + result
        (KeyCode::Char('k'), true) => {
            if app.handle_key_press(key) {
                app.clear_input();
            }
            true
        }
        // Clear history, behind the confirmation gate
        (KeyCode::Char('x'), true) => {
            if app.handle_key_press(key) {
                app.request_clear_history();
            }
            true
        }
        // Help
        (KeyCode::F(1), _) => {
            if app.handle_key_press(key) {
                app.modal = Some(modal::Modal::Help);
            }
            true
        }
        // Focus cycling
        (KeyCode::Tab, _) => {
            if app.handle_key_press(key) {
                app.focus_next();
            }
            true
        }
        _ => false,
    }
}

/// Keys while the input panel has focus: plain text editing.
/// Editing keystrokes bypass the InputHandler - typing is never debounced.
fn handle_input_keys(app: &mut App, key_event: &KeyEvent) {
    match key_event.code {
        KeyCode::Enter => {
            if app.handle_key_press(KeyCode::Enter) {
                app.submit();
            }
        }
        // Unbound Ctrl/Alt chords must not end up in the text
        KeyCode::Char(c)
            if !key_event
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            app.insert_char(c)
        }
        KeyCode::Backspace => app.backspace(),
        KeyCode::Delete => app.delete_char(),
        KeyCode::Left => app.cursor_left(),
        KeyCode::Right => app.cursor_right(),
        KeyCode::Home => app.cursor_home(),
        KeyCode::End => app.cursor_end(),
        _ => {}
    }
}

/// Keys while the history panel has focus: selection and per-entry actions
fn handle_history_keys(app: &mut App, key_event: &KeyEvent) {
    let key = key_event.code;
    match key {
        KeyCode::Up | KeyCode::Char('k') => {
            if app.handle_key_press(key) {
                app.select_prev();
            }
        }
        KeyCode::Down | KeyCode::Char('j') => {
            if app.handle_key_press(key) {
                app.select_next();
            }
        }
        // Re-use the selected entry (loads input + mode, focuses input)
        KeyCode::Enter => {
            if app.handle_key_press(key) {
                app.replay_selected();
            }
        }
        // Copy the selected entry's output - deliberately a different key
        // than re-use, so one can never trigger the other
        KeyCode::Char('y') | KeyCode::Char('c') => {
            if app.handle_key_press(key) {
                if app.selected.is_some() {
                    let text = app.selected_output();
                    copy_with_feedback(app, text);
                } else {
                    app.show_toast("Select an entry first");
                }
            }
        }
        KeyCode::Esc => {
            if app.handle_key_press(key) {
                if app.selected.is_some() {
                    app.clear_selection();
                } else {
                    app.focus = Focus::Input;
                }
            }
        }
        _ => {}
    }
}

/// Write to the clipboard and toast the result. Clipboard failure is a
/// transient notice, never a crash.
fn copy_with_feedback(app: &mut App, text: Option<String>) {
    match text {
        Some(text) => match clipboard::copy_to_clipboard(&text) {
            Ok(()) => app.show_toast("✓ Copied to clipboard"),
            Err(e) => {
                tracing::warn!("Clipboard copy failed: {:?}", e);
                app.show_toast("✗ Copy failed");
            }
        },
        None => app.show_toast("Nothing to copy"),
    }
}
