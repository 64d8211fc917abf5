// UI rendering logic
//
// Single draw function called on every frame: title bar, input panel,
// result panel, history list, status bar, then any modal and toast on top.
// Rendering reads App state only - all mutation happens in key handling.

use super::app::{App, Focus, Outcome};
use super::components::{history_panel, status_bar, title_bar};
use super::modal::Modal;
use crate::history::Mode;
use crate::util::sanitize_display;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};
use unicode_width::UnicodeWidthChar;

/// Main UI render function - called on every frame
pub fn draw(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title bar
            Constraint::Length(3), // Input panel
            Constraint::Length(5), // Result panel
            Constraint::Min(8),    // History list - takes remaining space
            Constraint::Length(2), // Status bar
        ])
        .split(f.area());

    title_bar::render(f, chunks[0], app);
    render_input_panel(f, chunks[1], app);
    render_result_panel(f, chunks[2], app);
    history_panel::render(f, chunks[3], app);
    status_bar::render(f, chunks[4], app);

    if let Some(modal) = &app.modal {
        render_modal(f, modal, app);
    }

    if let Some(toast) = &app.toast {
        toast.render(f, f.area(), &app.theme);
    }
}

/// Render the editable input line, with the hardware cursor when focused
fn render_input_panel(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let focused = app.focus == Focus::Input;

    let border_style = if focused {
        Style::default().fg(theme.border_focused)
    } else {
        Style::default().fg(theme.border)
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(" Input ");

    let inner_width = area.width.saturating_sub(2) as usize;

    // Horizontal scroll keeps the cursor in view for long input
    let prefix_width: usize = app
        .input
        .chars()
        .take(app.cursor)
        .map(|c| c.width().unwrap_or(0))
        .sum();
    let scroll_x = prefix_width.saturating_sub(inner_width.saturating_sub(1));

    let paragraph = if app.input.is_empty() {
        let placeholder = match app.mode {
            Mode::Encode => "Type text to encode…",
            Mode::Decode => "Paste Base64 to decode…",
        };
        Paragraph::new(placeholder)
            .style(Style::default().fg(theme.muted))
            .block(block)
    } else {
        Paragraph::new(app.input.as_str())
            .style(Style::default().fg(theme.fg))
            .scroll((0, scroll_x as u16))
            .block(block)
    };

    f.render_widget(paragraph, area);

    if focused {
        f.set_cursor_position((
            area.x + 1 + (prefix_width - scroll_x) as u16,
            area.y + 1,
        ));
    }
}

/// Render the result panel from the explicit outcome state
fn render_result_panel(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;

    let (text, style) = match &app.outcome {
        Outcome::Empty => (
            "The result will appear here…".to_string(),
            Style::default().fg(theme.muted),
        ),
        // Decoded output is untrusted text - sanitize before display
        Outcome::Success(output) => (
            sanitize_display(output),
            Style::default().fg(theme.success),
        ),
        Outcome::Error(message) => (message.clone(), Style::default().fg(theme.error)),
    };

    let paragraph = Paragraph::new(text)
        .style(style)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.border))
                .title(" Result "),
        );

    f.render_widget(paragraph, area);
}

/// Render the active modal overlay
fn render_modal(f: &mut Frame, modal: &Modal, app: &App) {
    match modal {
        Modal::ConfirmClear => render_confirm_clear(f, app),
        Modal::Help => render_help(f, app),
    }
}

fn render_confirm_clear(f: &mut Frame, app: &App) {
    let theme = &app.theme;
    let area = centered_rect(44, 5, f.area());

    let lines = vec![
        Line::from("Clear all history?"),
        Line::from(Span::styled(
            "This cannot be undone.",
            Style::default().fg(theme.muted),
        )),
        Line::from(vec![
            Span::styled("[y]", Style::default().fg(theme.error)),
            Span::raw(" clear   "),
            Span::styled("[n]", Style::default().fg(theme.success)),
            Span::raw(" keep"),
        ]),
    ];

    let dialog = Paragraph::new(lines)
        .alignment(ratatui::layout::Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.error))
                .title(" Confirm "),
        );

    f.render_widget(Clear, area);
    f.render_widget(dialog, area);
}

fn render_help(f: &mut Frame, app: &App) {
    let theme = &app.theme;
    let area = centered_rect(52, 14, f.area());

    let key_style = Style::default()
        .fg(theme.highlight)
        .add_modifier(Modifier::BOLD);
    let row = |key: &'static str, desc: &'static str| {
        Line::from(vec![
            Span::styled(format!("  {:<10}", key), key_style),
            Span::raw(desc),
        ])
    };

    let lines = vec![
        row("Enter", "submit input / re-use selected entry"),
        row("Tab", "switch focus (input ↔ history)"),
        row("Ctrl+E", "toggle encode/decode mode"),
        row("Ctrl+Y", "copy result to clipboard"),
        row("Ctrl+K", "clear input and result"),
        row("Ctrl+X", "clear history (asks first)"),
        row("↑/↓ j/k", "select history entry"),
        row("y", "copy selected entry's output"),
        row("Esc", "dismiss / clear selection"),
        row("Ctrl+Q", "quit"),
    ];

    let dialog = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border_focused))
            .title(" Keys "),
    );

    f.render_widget(Clear, area);
    f.render_widget(dialog, area);
}

/// A centered rect of fixed size, clamped to the frame
fn centered_rect(width: u16, height: u16, frame: Rect) -> Rect {
    let width = width.min(frame.width);
    let height = height.min(frame.height);
    Rect::new(
        frame.x + (frame.width - width) / 2,
        frame.y + (frame.height - height) / 2,
        width,
        height,
    )
}
