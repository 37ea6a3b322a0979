//! Message types exchanged with the fetch worker.
//!
//! Requests flow from the event loop to the worker; responses come back over
//! an mpsc channel and are converted into events for the handler. Both
//! directions carry the sequence number assigned when the request was
//! issued, which is what lets the store discard responses that completed
//! after a newer request was already issued.

use crate::app::Event;
use crate::domain::{RepositorySummary, SearchResultSet};
use crate::gateway::ApiError;

/// A unit of work for the fetch worker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchRequest {
    /// Search GitHub accounts matching `query`.
    Search {
        /// Sequence number assigned to this request.
        seq: u64,
        /// Trimmed, non-empty query.
        query: String,
    },

    /// List public repositories of `login`.
    Repositories {
        /// Sequence number assigned to this request.
        seq: u64,
        /// Login of the selected user.
        login: String,
    },
}

/// Completion notification from the fetch worker.
///
/// Carries the classified outcome verbatim; interpretation (commit or
/// discard, message display) happens in the event handler.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchResponse {
    /// A search request finished.
    SearchFinished {
        /// Sequence number of the originating request.
        seq: u64,
        /// The query the request was issued for.
        query: String,
        /// The classified outcome.
        outcome: Result<SearchResultSet, ApiError>,
    },

    /// A repository request finished.
    RepositoriesFinished {
        /// Sequence number of the originating request.
        seq: u64,
        /// Login the request was issued for.
        login: String,
        /// The classified outcome.
        outcome: Result<Vec<RepositorySummary>, ApiError>,
    },
}

impl From<FetchResponse> for Event {
    fn from(response: FetchResponse) -> Self {
        match response {
            FetchResponse::SearchFinished { seq, query, outcome } => {
                Event::SearchCompleted { seq, query, outcome }
            }
            FetchResponse::RepositoriesFinished { seq, login, outcome } => {
                Event::RepositoriesCompleted { seq, login, outcome }
            }
        }
    }
}
