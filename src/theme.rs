// Theme system for the TUI
//
// Each theme defines colors for all UI elements. Selected by the `theme`
// config key; unknown names fall back to dark.

use ratatui::style::Color;

/// Available themes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeKind {
    #[default]
    Dark,
    Light,
}

impl ThemeKind {
    /// Parse a config value, falling back to the default theme
    pub fn from_name(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "light" => ThemeKind::Light,
            _ => ThemeKind::Dark,
        }
    }

    /// Get the theme configuration
    pub fn theme(&self) -> Theme {
        match self {
            ThemeKind::Dark => Theme::dark(),
            ThemeKind::Light => Theme::light(),
        }
    }
}

/// Complete theme definition with all UI colors
#[derive(Debug, Clone)]
pub struct Theme {
    // Base colors
    pub fg: Color,
    pub border: Color,
    pub border_focused: Color,

    // Title and status
    pub title: Color,
    pub status_bar: Color,

    // Selection
    pub selected_bg: Color,
    pub selected_fg: Color,

    // Mode badges and result states
    pub encode: Color,
    pub decode: Color,
    pub success: Color,
    pub error: Color,

    // Secondary/muted text (placeholders, timestamps)
    pub muted: Color,

    // Toast border / focus accents
    pub highlight: Color,
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            fg: Color::White,
            border: Color::DarkGray,
            border_focused: Color::Cyan,
            title: Color::Cyan,
            status_bar: Color::Gray,
            selected_bg: Color::DarkGray,
            selected_fg: Color::White,
            encode: Color::Green,
            decode: Color::Magenta,
            success: Color::Green,
            error: Color::Red,
            muted: Color::DarkGray,
            highlight: Color::Yellow,
        }
    }

    pub fn light() -> Self {
        Self {
            fg: Color::Black,
            border: Color::Gray,
            border_focused: Color::Blue,
            title: Color::Blue,
            status_bar: Color::DarkGray,
            selected_bg: Color::Gray,
            selected_fg: Color::Black,
            encode: Color::Green,
            decode: Color::Magenta,
            success: Color::Green,
            error: Color::Red,
            muted: Color::Gray,
            highlight: Color::Blue,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_name_falls_back_to_dark() {
        assert_eq!(ThemeKind::from_name("dark"), ThemeKind::Dark);
        assert_eq!(ThemeKind::from_name("Light"), ThemeKind::Light);
        assert_eq!(ThemeKind::from_name("solarized"), ThemeKind::Dark);
    }
}
