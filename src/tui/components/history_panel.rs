// History panel component
//
// The presenter for the conversion log: one item per entry, newest first,
// showing the mode badge, a relative timestamp, and truncated input/output
// excerpts. Reads the store through the App on every render - it keeps no
// copy of the log.

use super::formatters::relative_time;
use crate::history::{HistoryEntry, Mode};
use crate::tui::app::{App, Focus};
use crate::util::display_excerpt;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

/// Render the history list, or a placeholder when the log is empty
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let focused = app.focus == Focus::History;

    let border_style = if focused {
        Style::default().fg(theme.border_focused)
    } else {
        Style::default().fg(theme.border)
    };

    let title = if app.store.is_empty() {
        " History ".to_string()
    } else {
        format!(" History ({}) ", app.store.len())
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(title);

    if app.store.is_empty() {
        let placeholder = Paragraph::new("No history yet - successful conversions land here.")
            .style(Style::default().fg(theme.muted))
            .block(block);
        f.render_widget(placeholder, area);
        return;
    }

    let items: Vec<ListItem> = app
        .store
        .entries()
        .iter()
        .map(|entry| entry_item(entry, app))
        .collect();

    let list = List::new(items).block(block).highlight_style(
        Style::default()
            .bg(theme.selected_bg)
            .fg(theme.selected_fg)
            .add_modifier(Modifier::BOLD),
    );

    let mut state = ListState::default();
    state.select(app.selected);
    f.render_stateful_widget(list, area, &mut state);
}

/// Build the three-line list item for one entry
fn entry_item<'a>(entry: &'a HistoryEntry, app: &App) -> ListItem<'a> {
    let theme = &app.theme;
    let badge_color = match entry.mode {
        Mode::Encode => theme.encode,
        Mode::Decode => theme.decode,
    };

    let header = Line::from(vec![
        Span::styled(
            entry.mode.badge(),
            Style::default().fg(badge_color).add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(
            relative_time(entry.timestamp),
            Style::default().fg(theme.muted),
        ),
    ]);

    // Untrusted text: sanitized and truncated before it reaches the terminal
    let input = Line::from(vec![
        Span::styled("  in:  ", Style::default().fg(theme.muted)),
        Span::raw(display_excerpt(&entry.input, app.truncate_len)),
    ]);
    let output = Line::from(vec![
        Span::styled("  out: ", Style::default().fg(theme.muted)),
        Span::raw(display_excerpt(&entry.output, app.truncate_len)),
    ]);

    ListItem::new(vec![header, input, output])
}
