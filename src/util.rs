//! Shared text helpers for rendering untrusted input
//!
//! History entries contain arbitrary user text. Before it reaches the
//! terminal it must be sanitized (control characters, including ESC, would
//! otherwise garble the display) and truncated to a fixed display width.

use unicode_width::UnicodeWidthChar;

/// Replace control characters with spaces so user text can never move the
/// cursor, clear the screen, or smuggle escape sequences into the terminal.
pub fn sanitize_display(s: &str) -> String {
    s.chars()
        .map(|c| if c.is_control() { ' ' } else { c })
        .collect()
}

/// Truncate a string to at most `max_cells` terminal cells, appending `…`
/// when anything was cut.
///
/// Width is measured in display cells (CJK and emoji count as 2), not bytes
/// or chars, so truncated rows line up in the history list.
pub fn truncate_display(s: &str, max_cells: usize) -> String {
    let total: usize = s.chars().map(|c| c.width().unwrap_or(0)).sum();
    if total <= max_cells {
        return s.to_string();
    }

    // Reserve one cell for the ellipsis marker
    let budget = max_cells.saturating_sub(1);
    let mut used = 0;
    let mut out = String::new();
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(c);
    }
    out.push('…');
    out
}

/// Sanitize then truncate, the order every display site wants.
pub fn display_excerpt(s: &str, max_cells: usize) -> String {
    truncate_display(&sanitize_display(s), max_cells)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_passes_plain_text() {
        assert_eq!(sanitize_display("hello world"), "hello world");
    }

    #[test]
    fn test_sanitize_replaces_newlines_and_tabs() {
        assert_eq!(sanitize_display("a\nb\tc\r"), "a b c ");
    }

    #[test]
    fn test_sanitize_neutralizes_escape_sequences() {
        let out = sanitize_display("\x1b[2Jboom");
        assert!(!out.contains('\x1b'));
        assert!(out.ends_with("boom"));
    }

    #[test]
    fn test_truncate_short_string_unchanged() {
        assert_eq!(truncate_display("hello", 10), "hello");
    }

    #[test]
    fn test_truncate_exact_fit_unchanged() {
        assert_eq!(truncate_display("hello", 5), "hello");
    }

    #[test]
    fn test_truncate_adds_ellipsis() {
        assert_eq!(truncate_display("hello world", 6), "hello…");
    }

    #[test]
    fn test_truncate_counts_wide_chars_as_two_cells() {
        // Each CJK char is 2 cells; budget 5 leaves room for two of them
        // plus the 1-cell ellipsis
        assert_eq!(truncate_display("日本語", 5), "日本…");
        assert_eq!(truncate_display("日本語", 6), "日本語");
    }

    #[test]
    fn test_truncate_empty_string() {
        assert_eq!(truncate_display("", 5), "");
    }
}
