//! Application state management and view model computation.
//!
//! This module defines [`AppState`], the central state container for the
//! application, along with the state transition methods the event handler
//! drives and the derived render-state function the UI consumes. It is the
//! single source of truth for all transient UI state.
//!
//! # State Slices
//!
//! State is partitioned into two independently managed slices plus UI
//! bookkeeping:
//!
//! - **Search slice**: the live query, the query that produced the current
//!   results, the result list, the server-reported total, and the search
//!   in-flight/error flags.
//! - **Selection slice**: the expanded user, that user's repositories, and
//!   the repository in-flight/error flags.
//! - **UI**: input focus, cursor position, theme.
//!
//! A failure on one slice never corrupts the other: each slice owns its own
//! error field and in-flight flag.
//!
//! # Request Sequencing
//!
//! Each slice carries a monotonically increasing sequence number bumped when
//! a fetch is issued. Completions are committed through `commit_*` methods
//! that compare the completion's sequence against the latest issued one and
//! discard stale responses, so a late response can never overwrite a newer
//! result (last writer wins by completion order).

use crate::app::modes::InputFocus;
use crate::domain::{RepositorySummary, SearchResultSet, UserSummary};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    BodyView, FooterInfo, HeaderInfo, MessageInfo, MessageKind, RepoPanel, RepoRow, ResultsInfo,
    SearchBarInfo, UIViewModel, UserRow,
};

/// Maximum repository lines shown in the expanded panel.
const REPO_PANEL_LIMIT: usize = 8;

/// What the result area should render, derived from store flags.
///
/// Exactly one of these is active at any time, chosen by fixed priority:
/// loading beats error beats "no term entered" beats "zero results" beats
/// "results present".
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchView {
    /// No search term entered; prompt the user for input.
    Prompt,

    /// A search is in flight.
    Loading,

    /// The last search failed with this message.
    Error(String),

    /// A term is entered but the completed search returned zero results.
    NoMatches,

    /// Results are present.
    Results,
}

/// Central application state container.
///
/// Mutated exclusively by the event handler in response to user input and
/// fetch completions; read by the view model computation. Every field has a
/// single write path so the request-ordering guarantee stays auditable.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The raw text the user has typed. Updated on every keystroke.
    pub search_term: String,

    /// The query that produced the current results.
    ///
    /// Updated only when a search completes (successfully or not), never
    /// mid-keystroke, so the result label cannot drift from what was
    /// actually searched.
    pub searched_term: String,

    /// Users delivered by the last completed search, in server order.
    pub results: Vec<UserSummary>,

    /// Total match count reported by the server (may exceed `results.len()`).
    pub results_count: u64,

    /// Whether a search request is in flight.
    pub is_searching: bool,

    /// Error message from the last failed search.
    pub error: Option<String>,

    /// The user whose repositories are expanded, if any. At most one.
    pub selected_user: Option<UserSummary>,

    /// Repositories of the selected user, or empty if nothing is selected.
    pub repositories: Vec<RepositorySummary>,

    /// Whether a repository listing is in flight.
    pub is_loading_repositories: bool,

    /// Error message from the last failed repository listing.
    pub repositories_error: Option<String>,

    /// Which part of the UI receives keyboard input.
    pub focus: InputFocus,

    /// Zero-based cursor index within `results`.
    pub cursor: usize,

    /// Color scheme for UI rendering.
    pub theme: Theme,

    /// Sequence number of the latest issued search request.
    search_seq: u64,

    /// Sequence number of the latest issued repository request.
    repos_seq: u64,
}

impl AppState {
    /// Creates a fresh application state with the given theme.
    #[must_use]
    pub fn new(theme: Theme) -> Self {
        Self {
            search_term: String::new(),
            searched_term: String::new(),
            results: vec![],
            results_count: 0,
            is_searching: false,
            error: None,
            selected_user: None,
            repositories: vec![],
            is_loading_repositories: false,
            repositories_error: None,
            focus: InputFocus::Query,
            cursor: 0,
            theme,
            search_seq: 0,
            repos_seq: 0,
        }
    }

    /// Derives the single render state for the result area.
    ///
    /// Pure function of store flags; the priority order is fixed and must
    /// not be reordered: loading, then error, then missing term, then zero
    /// results, then results.
    #[must_use]
    pub fn search_view(&self) -> SearchView {
        if self.is_searching {
            return SearchView::Loading;
        }
        if let Some(message) = &self.error {
            return SearchView::Error(message.clone());
        }
        if self.search_term.trim().is_empty() {
            return SearchView::Prompt;
        }
        if self.results.is_empty() {
            return SearchView::NoMatches;
        }
        SearchView::Results
    }

    /// Resets the search track to its idle state.
    ///
    /// Called when the live term becomes empty or is cleared explicitly:
    /// results and error disappear without any network call. Advances the
    /// search sequence so an in-flight response from before the reset is
    /// discarded on arrival. The selection goes with the results it belonged
    /// to.
    pub fn reset_search_track(&mut self) {
        self.search_seq += 1;
        self.results.clear();
        self.results_count = 0;
        self.error = None;
        self.is_searching = false;
        self.cursor = 0;
        self.clear_selection();
    }

    /// Marks a new search as in flight and returns its sequence number.
    ///
    /// Clears prior results, error, and selection before the fetch starts so
    /// no stale rows flash while the request is pending.
    pub fn begin_search(&mut self) -> u64 {
        self.search_seq += 1;
        self.is_searching = true;
        self.error = None;
        self.results.clear();
        self.results_count = 0;
        self.cursor = 0;
        self.clear_selection();
        self.search_seq
    }

    /// Commits a successful search completion.
    ///
    /// Returns `false` without touching state when `seq` is not the latest
    /// issued search request (a stale response that lost the race).
    pub fn commit_search_success(&mut self, seq: u64, result: SearchResultSet) -> bool {
        if seq != self.search_seq {
            tracing::debug!(seq, current = self.search_seq, "discarding stale search response");
            return false;
        }
        self.results = result.items;
        self.results_count = result.total_count;
        self.searched_term = result.query;
        self.is_searching = false;
        self.error = None;
        self.cursor = 0;
        true
    }

    /// Commits a failed search completion.
    ///
    /// Stores the message, clears results, and records the submitted query
    /// as the searched term. Returns `false` for stale responses.
    pub fn commit_search_failure(&mut self, seq: u64, query: String, message: String) -> bool {
        if seq != self.search_seq {
            tracing::debug!(seq, current = self.search_seq, "discarding stale search failure");
            return false;
        }
        self.error = Some(message);
        self.results.clear();
        self.results_count = 0;
        self.searched_term = query;
        self.is_searching = false;
        self.cursor = 0;
        true
    }

    /// Clears the selection and everything that hangs off it.
    pub fn clear_selection(&mut self) {
        self.repos_seq += 1;
        self.selected_user = None;
        self.repositories.clear();
        self.repositories_error = None;
        self.is_loading_repositories = false;
    }

    /// Selects a user and marks its repository listing as in flight.
    ///
    /// The previous repository list is cleared before the new fetch starts,
    /// so switching selection never flashes the old user's repositories.
    /// Returns the sequence number of the new request.
    pub fn begin_repositories(&mut self, user: UserSummary) -> u64 {
        self.repos_seq += 1;
        self.selected_user = Some(user);
        self.repositories.clear();
        self.repositories_error = None;
        self.is_loading_repositories = true;
        self.repos_seq
    }

    /// Commits a successful repository listing. Returns `false` for stale
    /// responses.
    pub fn commit_repositories_success(
        &mut self,
        seq: u64,
        repositories: Vec<RepositorySummary>,
    ) -> bool {
        if seq != self.repos_seq {
            tracing::debug!(seq, current = self.repos_seq, "discarding stale repository response");
            return false;
        }
        self.repositories = repositories;
        self.repositories_error = None;
        self.is_loading_repositories = false;
        true
    }

    /// Commits a failed repository listing. Returns `false` for stale
    /// responses.
    pub fn commit_repositories_failure(&mut self, seq: u64, message: String) -> bool {
        if seq != self.repos_seq {
            tracing::debug!(seq, current = self.repos_seq, "discarding stale repository failure");
            return false;
        }
        self.repositories_error = Some(message);
        self.repositories.clear();
        self.is_loading_repositories = false;
        true
    }

    /// Moves the cursor down by one position, wrapping to the top.
    pub fn move_cursor_down(&mut self) {
        if self.results.is_empty() {
            return;
        }
        self.cursor = (self.cursor + 1) % self.results.len();
    }

    /// Moves the cursor up by one position, wrapping to the bottom.
    pub fn move_cursor_up(&mut self) {
        if self.results.is_empty() {
            return;
        }
        if self.cursor == 0 {
            self.cursor = self.results.len() - 1;
        } else {
            self.cursor -= 1;
        }
    }

    /// Returns the user under the cursor, if any.
    #[must_use]
    pub fn cursor_user(&self) -> Option<&UserSummary> {
        self.results.get(self.cursor)
    }

    /// Returns whether `user` is the currently expanded selection.
    #[must_use]
    pub fn is_selected(&self, user: &UserSummary) -> bool {
        self.selected_user.as_ref().is_some_and(|s| s.id == user.id)
    }

    /// Computes a renderable view model from current state and terminal
    /// dimensions.
    ///
    /// Handles windowing (showing a subset of result rows centered on the
    /// cursor) and attaches the repository panel to the expanded row.
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, cols: usize) -> UIViewModel {
        let _ = cols;
        let body = match self.search_view() {
            SearchView::Prompt => BodyView::Message(MessageInfo {
                text: "Enter a username to search GitHub users".to_string(),
                kind: MessageKind::Prompt,
            }),
            SearchView::Loading => BodyView::Message(MessageInfo {
                text: "Searching users...".to_string(),
                kind: MessageKind::Loading,
            }),
            SearchView::Error(message) => BodyView::Message(MessageInfo {
                text: message,
                kind: MessageKind::Error,
            }),
            SearchView::NoMatches => BodyView::Message(MessageInfo {
                text: format!("No users found for \"{}\"", self.search_term.trim()),
                kind: MessageKind::Prompt,
            }),
            SearchView::Results => BodyView::Results(self.compute_results(rows)),
        };

        UIViewModel {
            header: self.compute_header(),
            search_bar: SearchBarInfo {
                query: self.search_term.clone(),
                focused: self.focus == InputFocus::Query,
            },
            body,
            footer: self.compute_footer(),
        }
    }

    /// Computes the result-table portion of the view model.
    ///
    /// # Windowing
    ///
    /// 1. Subtract UI chrome and the repository panel height from the
    ///    terminal height to get the available row budget.
    /// 2. Center the window around the cursor, shifting it back when near
    ///    the end of the list so the window stays full.
    fn compute_results(&self, rows: usize) -> ResultsInfo {
        let panel = self.compute_repo_panel();
        let panel_lines = panel.as_ref().map_or(0, RepoPanel::line_count);

        // Chrome: blank, header, border, search box (3), summary line,
        // bottom border, footer, trailing blank row.
        let available = rows.saturating_sub(10).saturating_sub(panel_lines).max(1);

        let mut visible_start = self.cursor.saturating_sub(available / 2);
        let visible_end = (visible_start + available).min(self.results.len());
        if visible_end - visible_start < available && self.results.len() >= available {
            visible_start = visible_end.saturating_sub(available);
        }

        let user_rows: Vec<UserRow> = self.results[visible_start..visible_end]
            .iter()
            .enumerate()
            .map(|(relative_idx, user)| {
                let absolute_idx = visible_start + relative_idx;
                let is_expanded = self.is_selected(user);
                UserRow {
                    login: user.login.clone(),
                    name: user.name.clone(),
                    followers: user.followers,
                    public_repos: user.public_repos,
                    is_cursor: absolute_idx == self.cursor,
                    is_expanded,
                    panel: if is_expanded { panel.clone() } else { None },
                }
            })
            .collect();

        ResultsInfo {
            summary: format!(
                "Showing {} of {} results for: \"{}\"",
                self.results.len(),
                self.results_count,
                self.searched_term
            ),
            rows: user_rows,
        }
    }

    /// Computes the repository panel for the expanded user, if any.
    fn compute_repo_panel(&self) -> Option<RepoPanel> {
        self.selected_user.as_ref()?;

        if self.is_loading_repositories {
            return Some(RepoPanel {
                title: None,
                repos: vec![],
                notice: Some("Loading repositories...".to_string()),
                is_error: false,
            });
        }

        if let Some(message) = &self.repositories_error {
            return Some(RepoPanel {
                title: None,
                repos: vec![],
                notice: Some(message.clone()),
                is_error: true,
            });
        }

        let repos: Vec<RepoRow> = self
            .repositories
            .iter()
            .take(REPO_PANEL_LIMIT)
            .map(|repo| RepoRow {
                name: repo.name.clone(),
                description: repo.description.clone(),
            })
            .collect();

        let notice = if repos.is_empty() {
            Some("No repositories found".to_string())
        } else {
            None
        };

        Some(RepoPanel {
            title: Some(format!("Repositories ({})", self.repositories.len())),
            repos,
            notice,
            is_error: false,
        })
    }

    fn compute_header(&self) -> HeaderInfo {
        let title = if self.results.is_empty() {
            " octoseek ".to_string()
        } else {
            format!(" octoseek ({}) ", self.results.len())
        };
        HeaderInfo { title }
    }

    fn compute_footer(&self) -> FooterInfo {
        let keybindings = match self.focus {
            InputFocus::Query => {
                "Enter: search  Tab: results  Esc: clear  Ctrl+c: quit".to_string()
            }
            InputFocus::Results => {
                "j/k: move  Enter: expand/collapse  o: open profile  /: search  q: quit"
                    .to_string()
            }
        };
        FooterInfo { keybindings }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(id: u64, login: &str) -> UserSummary {
        UserSummary {
            id,
            login: login.to_string(),
            avatar_url: format!("https://avatars.githubusercontent.com/u/{id}"),
            html_url: format!("https://github.com/{login}"),
            name: None,
            followers: 42,
            public_repos: 7,
            created_at: None,
            updated_at: None,
        }
    }

    fn repo(id: u64, name: &str) -> RepositorySummary {
        RepositorySummary {
            id,
            name: name.to_string(),
            html_url: format!("https://github.com/octocat/{name}"),
            description: None,
            created_at: None,
            updated_at: None,
        }
    }

    fn state() -> AppState {
        AppState::new(Theme::default())
    }

    #[test]
    fn loading_beats_every_other_view() {
        let mut s = state();
        s.is_searching = true;
        s.error = Some("boom".to_string());
        s.search_term = "octo".to_string();
        assert_eq!(s.search_view(), SearchView::Loading);
    }

    #[test]
    fn error_beats_prompt_and_empty_results() {
        let mut s = state();
        s.error = Some("boom".to_string());
        assert_eq!(s.search_view(), SearchView::Error("boom".to_string()));
    }

    #[test]
    fn blank_term_prompts_even_with_stale_results() {
        let mut s = state();
        s.search_term = "   ".to_string();
        s.results = vec![user(1, "octocat")];
        assert_eq!(s.search_view(), SearchView::Prompt);
    }

    #[test]
    fn term_with_no_results_shows_no_matches() {
        let mut s = state();
        s.search_term = "nobody".to_string();
        assert_eq!(s.search_view(), SearchView::NoMatches);
    }

    #[test]
    fn results_shown_when_no_flag_takes_priority() {
        let mut s = state();
        s.search_term = "octo".to_string();
        s.results = vec![user(1, "octocat")];
        assert_eq!(s.search_view(), SearchView::Results);
    }

    #[test]
    fn stale_search_success_is_discarded() {
        let mut s = state();
        let old_seq = s.begin_search();
        let new_seq = s.begin_search();

        let stale = SearchResultSet {
            query: "abc".to_string(),
            total_count: 1,
            incomplete_results: false,
            items: vec![user(1, "abc-user")],
        };
        assert!(!s.commit_search_success(old_seq, stale));
        assert!(s.results.is_empty());
        assert!(s.is_searching);

        let fresh = SearchResultSet {
            query: "abcd".to_string(),
            total_count: 1,
            incomplete_results: false,
            items: vec![user(2, "abcd-user")],
        };
        assert!(s.commit_search_success(new_seq, fresh));
        assert_eq!(s.results[0].login, "abcd-user");
        assert_eq!(s.searched_term, "abcd");
        assert!(!s.is_searching);
    }

    #[test]
    fn search_failure_records_message_and_searched_term() {
        let mut s = state();
        let seq = s.begin_search();
        assert!(s.commit_search_failure(
            seq,
            "octocat".to_string(),
            "GET search failed: Not Found".to_string()
        ));
        assert_eq!(s.error.as_deref(), Some("GET search failed: Not Found"));
        assert_eq!(s.searched_term, "octocat");
        assert!(s.results.is_empty());
        assert!(!s.is_searching);
    }

    #[test]
    fn begin_search_clears_selection_and_prior_results() {
        let mut s = state();
        s.results = vec![user(1, "octocat")];
        s.selected_user = Some(user(1, "octocat"));
        s.repositories = vec![repo(1, "Hello-World")];

        s.begin_search();
        assert!(s.results.is_empty());
        assert!(s.selected_user.is_none());
        assert!(s.repositories.is_empty());
    }

    #[test]
    fn switching_selection_clears_previous_repositories() {
        let mut s = state();
        let seq = s.begin_repositories(user(1, "octocat"));
        assert!(s.commit_repositories_success(seq, vec![repo(1, "Hello-World"), repo(2, "Spoon-Knife")]));
        assert_eq!(s.repositories.len(), 2);

        let seq2 = s.begin_repositories(user(2, "octocat2"));
        assert!(s.repositories.is_empty());
        assert!(s.is_loading_repositories);

        assert!(s.commit_repositories_success(seq2, vec![repo(3, "other")]));
        assert_eq!(s.repositories[0].name, "other");
    }

    #[test]
    fn stale_repository_response_is_discarded_after_reselect() {
        let mut s = state();
        let old_seq = s.begin_repositories(user(1, "octocat"));
        let _ = s.begin_repositories(user(2, "octocat2"));

        assert!(!s.commit_repositories_success(old_seq, vec![repo(1, "Hello-World")]));
        assert!(s.repositories.is_empty());
        assert!(s.is_loading_repositories);
    }

    #[test]
    fn repository_failure_clears_list_and_records_error() {
        let mut s = state();
        let seq = s.begin_repositories(user(1, "octocat"));
        assert!(s.commit_repositories_failure(seq, "GET repositories failed: Not Found".to_string()));
        assert!(s.repositories.is_empty());
        assert!(!s.is_loading_repositories);
        assert_eq!(
            s.repositories_error.as_deref(),
            Some("GET repositories failed: Not Found")
        );
    }

    #[test]
    fn cursor_wraps_both_directions() {
        let mut s = state();
        s.results = vec![user(1, "a"), user(2, "b"), user(3, "c")];
        s.move_cursor_up();
        assert_eq!(s.cursor, 2);
        s.move_cursor_down();
        assert_eq!(s.cursor, 0);
    }

    #[test]
    fn viewmodel_summary_uses_searched_term_and_server_total() {
        let mut s = state();
        s.search_term = "octocat, edited".to_string();
        s.searched_term = "octocat".to_string();
        s.results = vec![user(1, "octocat"), user(2, "octocat2")];
        s.results_count = 2;

        let vm = s.compute_viewmodel(24, 80);
        let BodyView::Results(results) = vm.body else {
            panic!("expected results body");
        };
        assert_eq!(results.summary, "Showing 2 of 2 results for: \"octocat\"");
        assert_eq!(results.rows.len(), 2);
        assert_eq!(results.rows[0].followers, 42);
        assert_eq!(results.rows[0].public_repos, 7);
    }

    #[test]
    fn repo_panel_attaches_to_expanded_row_with_count_title() {
        let mut s = state();
        s.search_term = "octocat".to_string();
        s.results = vec![user(1, "octocat"), user(2, "octocat2")];
        s.results_count = 2;
        let seq = s.begin_repositories(s.results[0].clone());
        assert!(s.commit_repositories_success(
            seq,
            vec![repo(1, "Hello-World"), repo(2, "Spoon-Knife")]
        ));

        let vm = s.compute_viewmodel(24, 80);
        let BodyView::Results(results) = vm.body else {
            panic!("expected results body");
        };
        let panel = results.rows[0].panel.as_ref().expect("panel on expanded row");
        assert_eq!(panel.title.as_deref(), Some("Repositories (2)"));
        let names: Vec<&str> = panel.repos.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Hello-World", "Spoon-Knife"]);
        assert!(results.rows[1].panel.is_none());
    }

    #[test]
    fn repo_panel_shows_loading_notice_without_title() {
        let mut s = state();
        s.search_term = "octocat".to_string();
        s.results = vec![user(1, "octocat")];
        let _ = s.begin_repositories(s.results[0].clone());

        let vm = s.compute_viewmodel(24, 80);
        let BodyView::Results(results) = vm.body else {
            panic!("expected results body");
        };
        let panel = results.rows[0].panel.as_ref().expect("panel while loading");
        assert!(panel.title.is_none());
        assert_eq!(panel.notice.as_deref(), Some("Loading repositories..."));
    }

    #[test]
    fn result_window_fits_between_summary_and_bottom_border() {
        let mut s = state();
        s.search_term = "octo".to_string();
        s.searched_term = "octo".to_string();
        s.results = (1..=40).map(|i| user(i, &format!("user-{i}"))).collect();
        s.results_count = 40;

        // Body rows start under the summary (row 8 of the frame) and must
        // end above the bottom border at rows - 2; with the trailing blank
        // row that leaves rows - 10 lines.
        let rows = 24;
        let vm = s.compute_viewmodel(rows, 80);
        let BodyView::Results(results) = vm.body else {
            panic!("expected results body");
        };
        assert_eq!(results.rows.len(), rows - 10);

        // The cursor row stays inside the window even at the end of the list.
        s.cursor = 39;
        let vm = s.compute_viewmodel(rows, 80);
        let BodyView::Results(results) = vm.body else {
            panic!("expected results body");
        };
        assert!(results.rows.iter().any(|r| r.is_cursor));
        assert_eq!(results.rows.len(), rows - 10);
    }

    #[test]
    fn expanded_panel_shrinks_the_result_window() {
        let mut s = state();
        s.search_term = "octo".to_string();
        s.results = (1..=40).map(|i| user(i, &format!("user-{i}"))).collect();
        s.results_count = 40;
        let seq = s.begin_repositories(s.results[0].clone());
        assert!(s.commit_repositories_success(seq, vec![repo(1, "a"), repo(2, "b")]));

        // Panel occupies title + 2 repo lines; the window gives those up.
        let vm = s.compute_viewmodel(24, 80);
        let BodyView::Results(results) = vm.body else {
            panic!("expected results body");
        };
        assert_eq!(results.rows.len(), 24 - 10 - 3);
    }

    #[test]
    fn empty_repo_list_shows_empty_notice() {
        let mut s = state();
        s.search_term = "octocat".to_string();
        s.results = vec![user(1, "octocat")];
        let seq = s.begin_repositories(s.results[0].clone());
        assert!(s.commit_repositories_success(seq, vec![]));

        let vm = s.compute_viewmodel(24, 80);
        let BodyView::Results(results) = vm.body else {
            panic!("expected results body");
        };
        let panel = results.rows[0].panel.as_ref().expect("panel after empty load");
        assert_eq!(panel.title.as_deref(), Some("Repositories (0)"));
        assert_eq!(panel.notice.as_deref(), Some("No repositories found"));
    }
}
