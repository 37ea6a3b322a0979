//! Composable UI component renderers.
//!
//! This module provides specialized rendering components for different UI
//! elements, following a component-based architecture. Each component is
//! responsible for rendering a specific part of the interface.
//!
//! # Components
//!
//! - [`header`]: Title bar with result count
//! - [`search`]: Search input box (border, query text, focus state)
//! - [`message`]: Centered status message (prompt, loading, error)
//! - [`results`]: User table with the inline repository panel
//! - [`footer`]: Help text and keybinding hints
//!
//! # Layout
//!
//! [`render_layout`] composes the fixed frame:
//!
//! ```text
//! [blank line]
//! [Header]
//! [Border]
//! [Search Bar - 3 lines]
//! [Body: message or results]
//! [Border]
//! [Footer]
//! ```

mod footer;
mod header;
mod message;
mod results;
mod search;

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{BodyView, UIViewModel};

use footer::render_footer;
use header::render_header;
use message::render_message;
use results::render_results;
use search::render_search_bar;

/// Renders a horizontal border line at the specified row.
///
/// Used to separate UI sections (header/search, body/footer).
///
/// # Returns
///
/// The next available row position (row + 1)
fn render_border(row: usize, color: &str, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::fg(color));
    print!("{}", "─".repeat(cols));
    print!("{}", Theme::reset());
    row + 1
}

/// Renders the full frame from a view model.
///
/// # Line Accounting
///
/// Reserves 10 lines for chrome (blank, header, border, search bar
/// [3 lines], summary, bottom border, footer, trailing blank row). The body
/// fills the remaining space; the view model's result window has already
/// been sized so the rows plus the repository panel fit above the bottom
/// border.
pub fn render_layout(vm: &UIViewModel, theme: &Theme, cols: usize, rows: usize) {
    let mut current_row = 2;

    current_row = render_header(current_row, &vm.header, theme, cols);
    current_row = render_border(current_row, &theme.colors.border, cols);
    current_row = render_search_bar(current_row, &vm.search_bar, theme, cols);

    match &vm.body {
        BodyView::Message(info) => render_message(current_row, info, theme, cols),
        BodyView::Results(info) => {
            let _ = render_results(current_row, info, theme, cols);
        }
    }

    let footer_start = rows.saturating_sub(1);
    let border_row = footer_start.saturating_sub(1);

    render_border(border_row, &theme.colors.border, cols);
    render_footer(footer_start, &vm.footer, theme, cols);
}
