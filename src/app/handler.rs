//! Event handling and state transition logic.
//!
//! This module implements the core event handler that processes user input
//! and fetch completions, translating them into state changes and action
//! sequences. It is the single writer of the application state and the only
//! place where sequencing rules (debounce, submission, stale-response
//! discarding, selection toggling) live.
//!
//! # Architecture
//!
//! The handler follows a unidirectional data flow pattern:
//! 1. Events arrive from the terminal shim, the debounce timer, or the fetch
//!    worker.
//! 2. [`handle_event`] pattern-matches the event type.
//! 3. State mutations occur via `AppState` methods.
//! 4. Actions are collected and returned for execution.
//!
//! # Event Tracks
//!
//! Two independent tracks run through the handler:
//! - **Search**: keystrokes edit the live term and arm the debounce timer;
//!   submission (explicit or debounce-elapsed) issues a fetch; the
//!   completion event commits or is discarded by sequence number.
//! - **Selection**: expanding a user issues a repository fetch; expanding
//!   the already-expanded user collapses it without a fetch.

use crate::app::modes::InputFocus;
use crate::app::{Action, AppState};
use crate::domain::error::Result;
use crate::domain::{RepositorySummary, SearchResultSet};
use crate::gateway::ApiError;

/// Events triggered by user input, timers, or fetch completions.
///
/// Each event represents a discrete occurrence that may cause state changes
/// and action emissions. The event handler processes these sequentially,
/// ensuring deterministic state transitions.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// Appends a character to the live search term.
    Char(char),

    /// Removes the last character from the live search term.
    Backspace,

    /// Clears the live search term and resets the search track.
    ClearQuery,

    /// Explicitly submits the current search term.
    Submit,

    /// The debounce interval elapsed for a text-driven search.
    ///
    /// Carries the query captured when the timer was armed; the handler
    /// ignores the firing if the live term has changed since.
    DebounceElapsed {
        /// Query captured at scheduling time.
        query: String,
    },

    /// Moves the result cursor down by one position (wraps to top).
    CursorDown,

    /// Moves the result cursor up by one position (wraps to bottom).
    CursorUp,

    /// Moves keyboard focus to the search input.
    FocusQuery,

    /// Moves keyboard focus to the result list.
    FocusResults,

    /// Expands the user under the cursor, or collapses it if already
    /// expanded.
    ToggleExpand,

    /// Opens the profile page of the user under the cursor.
    OpenProfile,

    /// Terminates the application.
    Quit,

    /// A search fetch finished.
    SearchCompleted {
        /// Sequence number assigned when the request was issued.
        seq: u64,
        /// The submitted query the request was issued for.
        query: String,
        /// The classified outcome.
        outcome: std::result::Result<SearchResultSet, ApiError>,
    },

    /// A repository fetch finished.
    RepositoriesCompleted {
        /// Sequence number assigned when the request was issued.
        seq: u64,
        /// Login the request was issued for.
        login: String,
        /// The classified outcome.
        outcome: std::result::Result<Vec<RepositorySummary>, ApiError>,
    },
}

/// Processes an event, mutates application state, and returns actions to
/// execute.
///
/// # Returns
///
/// A `(should_render, actions)` pair: whether the UI must be redrawn, and
/// the side effects to run in sequence. The vector may be empty when the
/// event requires no side effects.
///
/// # Errors
///
/// Reserved for state mutation failures; current transitions are total.
#[allow(clippy::too_many_lines)]
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?std::mem::discriminant(event)).entered();

    match event {
        Event::Char(c) => {
            if state.focus != InputFocus::Query {
                return Ok((false, vec![]));
            }
            state.search_term.push(*c);
            tracing::trace!(term = %state.search_term, "search term updated");
            Ok((true, schedule_for_term(state)))
        }
        Event::Backspace => {
            if state.focus != InputFocus::Query {
                return Ok((false, vec![]));
            }
            state.search_term.pop();
            Ok((true, schedule_for_term(state)))
        }
        Event::ClearQuery => {
            state.search_term.clear();
            state.reset_search_track();
            Ok((true, vec![Action::CancelScheduledSearch]))
        }
        Event::Submit => {
            let query = state.search_term.trim().to_string();
            if query.is_empty() {
                state.reset_search_track();
                return Ok((true, vec![Action::CancelScheduledSearch]));
            }
            let seq = state.begin_search();
            tracing::debug!(query = %query, seq, "search submitted");
            Ok((
                true,
                vec![
                    Action::CancelScheduledSearch,
                    Action::FetchSearch { seq, query },
                ],
            ))
        }
        Event::DebounceElapsed { query } => {
            if *query != state.search_term {
                tracing::debug!(scheduled = %query, live = %state.search_term, "ignoring stale debounce firing");
                return Ok((false, vec![]));
            }
            let trimmed = query.trim().to_string();
            if trimmed.is_empty() {
                return Ok((false, vec![]));
            }
            let seq = state.begin_search();
            tracing::debug!(query = %trimmed, seq, "debounced search issued");
            Ok((true, vec![Action::FetchSearch { seq, query: trimmed }]))
        }
        Event::CursorDown => {
            state.move_cursor_down();
            Ok((true, vec![]))
        }
        Event::CursorUp => {
            state.move_cursor_up();
            Ok((true, vec![]))
        }
        Event::FocusQuery => {
            state.focus = InputFocus::Query;
            Ok((true, vec![]))
        }
        Event::FocusResults => {
            if state.results.is_empty() {
                return Ok((false, vec![]));
            }
            state.focus = InputFocus::Results;
            Ok((true, vec![]))
        }
        Event::ToggleExpand => {
            let Some(user) = state.cursor_user().cloned() else {
                tracing::debug!("no user under cursor");
                return Ok((false, vec![]));
            };

            if state.is_selected(&user) {
                tracing::debug!(login = %user.login, "collapsing selection");
                state.clear_selection();
                return Ok((true, vec![]));
            }

            let login = user.login.clone();
            let seq = state.begin_repositories(user);
            tracing::debug!(login = %login, seq, "expanding selection");
            Ok((true, vec![Action::FetchRepositories { seq, login }]))
        }
        Event::OpenProfile => state.cursor_user().map_or(Ok((false, vec![])), |user| {
            tracing::debug!(login = %user.login, "opening profile");
            Ok((false, vec![Action::OpenUrl(user.html_url.clone())]))
        }),
        Event::Quit => Ok((false, vec![Action::Exit])),
        Event::SearchCompleted { seq, query, outcome } => {
            let committed = match outcome {
                Ok(result) => state.commit_search_success(*seq, result.clone()),
                Err(error) => {
                    if error.fatal {
                        tracing::error!(query = %query, message = %error.message, "search failed");
                    } else {
                        tracing::warn!(query = %query, message = %error.message, "search failed");
                    }
                    state.commit_search_failure(*seq, query.clone(), error.message.clone())
                }
            };
            Ok((committed, vec![]))
        }
        Event::RepositoriesCompleted { seq, login, outcome } => {
            let committed = match outcome {
                Ok(repositories) => {
                    state.commit_repositories_success(*seq, repositories.clone())
                }
                Err(error) => {
                    if error.fatal {
                        tracing::error!(login = %login, message = %error.message, "repository fetch failed");
                    } else {
                        tracing::warn!(login = %login, message = %error.message, "repository fetch failed");
                    }
                    state.commit_repositories_failure(*seq, error.message.clone())
                }
            };
            Ok((committed, vec![]))
        }
    }
}

/// Actions for a keystroke: arm the debounce timer while a term is present,
/// reset the track the moment it becomes blank.
fn schedule_for_term(state: &mut AppState) -> Vec<Action> {
    if state.search_term.trim().is_empty() {
        state.reset_search_track();
        vec![Action::CancelScheduledSearch]
    } else {
        vec![Action::ScheduleSearch {
            query: state.search_term.clone(),
        }]
    }
}
