// Title bar component
//
// Renders the app name and the active mode badge.

use crate::history::Mode;
use crate::tui::app::App;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the title bar at the top of the screen
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let mode_color = match app.mode {
        Mode::Encode => app.theme.encode,
        Mode::Decode => app.theme.decode,
    };

    let title_text = format!(" Base64 Playground ── {} ", app.mode.badge());

    let title = Paragraph::new(title_text)
        .style(
            Style::default()
                .fg(app.theme.title)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(mode_color))
                .title_top(Line::from(" F1 help ").right_aligned()),
        );

    f.render_widget(title, area);
}
