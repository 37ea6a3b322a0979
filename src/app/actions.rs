//! Actions representing side effects to be executed by the runtime.
//!
//! This module defines the [`Action`] type, the imperative commands produced
//! by the event handler after processing user input or fetch completions.
//! Actions bridge pure state transformations and effectful operations like
//! network fetches, debounce timers, and opening URLs.
//!
//! # Architecture
//!
//! The event handler returns a `Vec<Action>` after processing each event; the
//! event loop in `main.rs` executes them in sequence. Fetch actions carry the
//! sequence number assigned when the request was issued, so the completion
//! event they eventually produce can be checked against the latest issued
//! request before being committed to the store.

/// Commands representing side effects to be executed by the event loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Terminates the application and restores the terminal.
    Exit,

    /// Starts a user search on the fetch worker.
    FetchSearch {
        /// Sequence number assigned to this request.
        seq: u64,
        /// The submitted query, as it will appear in the result label.
        query: String,
    },

    /// Starts a repository listing on the fetch worker.
    FetchRepositories {
        /// Sequence number assigned to this request.
        seq: u64,
        /// Login of the selected user.
        login: String,
    },

    /// Arms the debounce timer for a text-driven search.
    ///
    /// Replaces any previously scheduled firing; only the query that is still
    /// current when the timer elapses results in a fetch.
    ScheduleSearch {
        /// The live query at the time of the keystroke.
        query: String,
    },

    /// Cancels a pending debounced search, if any.
    CancelScheduledSearch,

    /// Opens a URL in the system browser.
    OpenUrl(String),
}
