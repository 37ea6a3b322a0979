//! View model types representing renderable UI state.
//!
//! This module defines immutable view models computed from application state,
//! following the MVVM pattern. View models are optimized for rendering and
//! contain pre-computed display information like window position, cursor
//! state, and the expanded repository panel.
//!
//! # Architecture
//!
//! View models are created via `AppState::compute_viewmodel()` and consumed
//! by the renderer. They contain no business logic, only display-ready data:
//! the result area is already collapsed to a single [`BodyView`] variant, so
//! the renderer never re-derives priorities.

/// Complete UI view model for rendering.
///
/// Contains all display information needed to render one frame. The layout
/// is fixed: header, search bar, body, footer.
#[derive(Debug, Clone, PartialEq)]
pub struct UIViewModel {
    /// Header information (title, result count).
    pub header: HeaderInfo,

    /// Search bar information (always shown).
    pub search_bar: SearchBarInfo,

    /// The result area: a centered message or a user table.
    pub body: BodyView,

    /// Footer information (keybindings for the focused pane).
    pub footer: FooterInfo,
}

/// Header display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderInfo {
    /// Title text to display in the header.
    pub title: String,
}

/// Search bar display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchBarInfo {
    /// Current live query text.
    pub query: String,

    /// Whether the search input has keyboard focus.
    pub focused: bool,
}

/// Footer display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterInfo {
    /// Keybinding help text (e.g., "Enter: search  Tab: results").
    pub keybindings: String,
}

/// What fills the space between the search bar and the footer.
///
/// Exactly one variant per frame; the state layer has already applied the
/// display priority (loading over error over prompt over empty over rows).
#[derive(Debug, Clone, PartialEq)]
pub enum BodyView {
    /// A centered status message (prompt, loading, or error).
    Message(MessageInfo),

    /// The result table with its summary line.
    Results(ResultsInfo),
}

/// Centered status message display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageInfo {
    /// Message text.
    pub text: String,

    /// Visual category controlling the message color.
    pub kind: MessageKind,
}

/// Visual category of a centered status message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    /// Informational prompt (no term entered, zero results).
    Prompt,

    /// A request is in flight.
    Loading,

    /// The last request failed.
    Error,
}

/// Result table display information.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultsInfo {
    /// Summary line above the table
    /// (`Showing 5 of 120 results for: "octo"`).
    pub summary: String,

    /// Visible window of user rows, already centered on the cursor.
    pub rows: Vec<UserRow>,
}

/// Display information for a single user row.
#[derive(Debug, Clone, PartialEq)]
pub struct UserRow {
    /// GitHub login.
    pub login: String,

    /// Display name, when the API provided one.
    pub name: Option<String>,

    /// Follower count.
    pub followers: u32,

    /// Public repository count.
    pub public_repos: u32,

    /// Whether the cursor is on this row.
    pub is_cursor: bool,

    /// Whether this row is expanded.
    pub is_expanded: bool,

    /// Repository panel, present only on the expanded row.
    pub panel: Option<RepoPanel>,
}

/// Repository panel shown under the expanded user row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoPanel {
    /// Panel title with the repository count, absent while loading or on
    /// error.
    pub title: Option<String>,

    /// Repository rows to display.
    pub repos: Vec<RepoRow>,

    /// Status line (loading, empty list, or error message).
    pub notice: Option<String>,

    /// Whether the notice is an error and should use the error color.
    pub is_error: bool,
}

impl RepoPanel {
    /// Number of terminal lines this panel occupies.
    #[must_use]
    pub fn line_count(&self) -> usize {
        usize::from(self.title.is_some()) + self.repos.len() + usize::from(self.notice.is_some())
    }
}

/// Display information for a single repository line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoRow {
    /// Repository name.
    pub name: String,

    /// Repository description, when present.
    pub description: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn panel_line_count_covers_title_rows_and_notice() {
        let loading = RepoPanel {
            title: None,
            repos: vec![],
            notice: Some("Loading repositories...".to_string()),
            is_error: false,
        };
        assert_eq!(loading.line_count(), 1);

        let loaded = RepoPanel {
            title: Some("Repositories (2)".to_string()),
            repos: vec![
                RepoRow {
                    name: "Hello-World".to_string(),
                    description: None,
                },
                RepoRow {
                    name: "Spoon-Knife".to_string(),
                    description: Some("test repo".to_string()),
                },
            ],
            notice: None,
            is_error: false,
        };
        assert_eq!(loaded.line_count(), 3);
    }
}
