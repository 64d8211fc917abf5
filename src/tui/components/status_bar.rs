// Status bar component
//
// Renders key hints at the bottom, plus the most recent warning from the
// log buffer. Warnings (a history file that would not write, for example)
// surface here passively and fade after a short window.

use crate::tui::app::{App, Focus};
use crate::util::display_excerpt;
use chrono::Utc;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// How long a warning stays visible in the status bar
const WARNING_WINDOW_SECS: i64 = 10;

/// Render the status bar with key hints and passive warnings
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let hints = match app.focus {
        Focus::Input => {
            " Enter submit │ Tab history │ ^E mode │ ^Y copy │ ^K clear │ ^X clear history │ ^Q quit"
        }
        Focus::History => {
            " ↑/↓ select │ Enter re-use │ y copy output │ Esc back │ ^X clear history │ ^Q quit"
        }
    };

    let mut line = vec![Span::styled(
        hints,
        Style::default().fg(app.theme.status_bar),
    )];

    // Passive warning display, width-limited so hints stay readable
    if let Some(warning) = app.log_buffer.latest_warning() {
        let age = Utc::now().signed_duration_since(warning.timestamp);
        if age.num_seconds() < WARNING_WINDOW_SECS {
            line.push(Span::styled(
                format!("  ⚠ {}", display_excerpt(&warning.message, 60)),
                Style::default().fg(app.theme.error),
            ));
        }
    }

    let status = Paragraph::new(Line::from(line)).block(Block::default().borders(Borders::TOP));

    f.render_widget(status, area);
}
