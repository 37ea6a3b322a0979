//! Centered status message renderer.
//!
//! Renders the single-line message body used for the prompt, loading, and
//! error states of the result area.

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{MessageInfo, MessageKind};

/// Renders a centered status message in the body area.
///
/// The message is placed two rows below `row` so it sits visually inside the
/// empty body rather than hugging the search box. Color is chosen by message
/// kind: prompt and zero-result notices use the empty state color, loading
/// uses the accent color, errors use the error color.
pub fn render_message(row: usize, message: &MessageInfo, theme: &Theme, cols: usize) {
    let color = match message.kind {
        MessageKind::Prompt => &theme.colors.empty_state_fg,
        MessageKind::Loading => &theme.colors.accent_fg,
        MessageKind::Error => &theme.colors.error_fg,
    };

    let text_len = message.text.chars().count().min(cols);
    let padding = (cols.saturating_sub(text_len)) / 2;

    position_cursor(row + 2, 1);
    print!("{}", Theme::fg(color));
    print!("{}", " ".repeat(padding));
    print!("{}", message.text);
    print!("{}", " ".repeat(cols.saturating_sub(padding + text_len)));
    print!("{}", Theme::reset());
}
