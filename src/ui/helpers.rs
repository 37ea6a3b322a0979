//! Shared rendering utilities and helpers.
//!
//! Low-level utilities used across the UI components: cursor positioning and
//! width-aware text truncation. Everything here writes raw ANSI sequences to
//! stdout; the components own colors and layout.

/// Positions the cursor at a specific row and column.
///
/// Uses ANSI escape sequence `\u{1b}[{row};{col}H` to move the cursor.
/// Coordinates are 1-indexed (row 1 = first row, col 1 = first column).
pub fn position_cursor(row: usize, col: usize) {
    print!("\u{1b}[{row};{col}H");
}

/// Truncates `text` to at most `max` characters, appending an ellipsis when
/// anything was cut.
///
/// Operates on character counts, not bytes, so multibyte input cannot be
/// split mid-codepoint.
#[must_use]
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    if max == 0 {
        return String::new();
    }
    let kept: String = text.chars().take(max.saturating_sub(1)).collect();
    format!("{kept}\u{2026}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_text_passes_through() {
        assert_eq!(truncate("octocat", 10), "octocat");
        assert_eq!(truncate("octocat", 7), "octocat");
    }

    #[test]
    fn long_text_gets_an_ellipsis_within_budget() {
        let out = truncate("a very long repository description", 10);
        assert_eq!(out.chars().count(), 10);
        assert!(out.ends_with('\u{2026}'));
    }

    #[test]
    fn truncation_is_character_safe() {
        let out = truncate("héllo wörld", 6);
        assert_eq!(out.chars().count(), 6);
    }
}
