//! Result table component renderer.
//!
//! This module renders the user list as rows of login, display name, and
//! counts, with cursor highlighting and the inline repository panel under the
//! expanded row.

use crate::ui::helpers::{position_cursor, truncate};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{RepoPanel, ResultsInfo, UserRow};

/// Fixed width of the login column.
const LOGIN_WIDTH: usize = 24;

/// Indentation for repository panel lines.
const PANEL_INDENT: usize = 4;

/// Renders the summary line and all visible user rows.
///
/// # Returns
///
/// The next available row position.
pub fn render_results(row: usize, results: &ResultsInfo, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print!("{}", truncate(&results.summary, cols));
    print!("{}", Theme::reset());

    let mut current_row = row + 1;
    for user in &results.rows {
        current_row = render_user_row(current_row, user, theme, cols);
        if let Some(panel) = &user.panel {
            current_row = render_repo_panel(current_row, panel, theme, cols);
        }
    }
    current_row
}

/// Renders a single user row.
///
/// # Layout
///
/// ```text
/// ▸ login [padded to 24]  name [truncated]  followers/repos counts
/// ```
///
/// The expansion marker is `▾` for the expanded row and `▸` otherwise. The
/// cursor row is painted with the selection colors across the full width.
fn render_user_row(row: usize, user: &UserRow, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);

    if user.is_cursor {
        print!("{}", Theme::fg(&theme.colors.selection_fg));
        print!("{}", Theme::bg(&theme.colors.selection_bg));
    } else {
        print!("{}", Theme::fg(&theme.colors.text_normal));
    }

    let marker = if user.is_expanded { "▾" } else { "▸" };
    let login = truncate(&user.login, LOGIN_WIDTH);
    let counts = format!("{} followers  {} repos", user.followers, user.public_repos);

    let name_budget = cols
        .saturating_sub(2 + LOGIN_WIDTH + 2)
        .saturating_sub(counts.len() + 2);
    let name = user
        .name
        .as_deref()
        .map_or_else(String::new, |n| truncate(n, name_budget));

    let line = format!("{marker} {login:<LOGIN_WIDTH$}  {name:<name_budget$}  {counts}");
    let line_len = line.chars().count();
    print!("{line}");
    print!("{}", " ".repeat(cols.saturating_sub(line_len)));

    print!("{}", Theme::reset());
    row + 1
}

/// Renders the repository panel lines under the expanded row.
///
/// Title, repository lines, and notice are each indented under the owning
/// user row. Error notices use the error color, other notices are dimmed.
fn render_repo_panel(row: usize, panel: &RepoPanel, theme: &Theme, cols: usize) -> usize {
    let mut current_row = row;
    let indent = " ".repeat(PANEL_INDENT);
    let budget = cols.saturating_sub(PANEL_INDENT);

    if let Some(title) = &panel.title {
        position_cursor(current_row, 1);
        print!("{indent}");
        print!("{}", Theme::bold());
        print!("{}", Theme::fg(&theme.colors.accent_fg));
        print!("{}", truncate(title, budget));
        print!("{}", Theme::reset());
        current_row += 1;
    }

    for repo in &panel.repos {
        position_cursor(current_row, 1);
        print!("{indent}");
        print!("{}", Theme::fg(&theme.colors.text_normal));
        let line = repo.description.as_deref().map_or_else(
            || repo.name.clone(),
            |description| format!("{}: {description}", repo.name),
        );
        print!("{}", truncate(&line, budget));
        print!("{}", Theme::reset());
        current_row += 1;
    }

    if let Some(notice) = &panel.notice {
        position_cursor(current_row, 1);
        print!("{indent}");
        if panel.is_error {
            print!("{}", Theme::fg(&theme.colors.error_fg));
        } else {
            print!("{}", Theme::dim());
            print!("{}", Theme::fg(&theme.colors.text_dim));
        }
        print!("{}", truncate(notice, budget));
        print!("{}", Theme::reset());
        current_row += 1;
    }

    current_row
}
