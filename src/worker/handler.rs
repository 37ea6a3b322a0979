//! Asynchronous fetch worker.
//!
//! The worker turns [`FetchRequest`]s into gateway calls without blocking the
//! event loop. Each request is spawned as its own tokio task; completions are
//! delivered back over an unbounded mpsc channel in whatever order the
//! network produces them. Ordering correctness lives entirely in the
//! sequence numbers the requests carry, so the worker never needs to cancel
//! or serialize anything.

use std::sync::Arc;

use tokio::sync::mpsc::UnboundedSender;

use crate::gateway::UserDirectory;
use crate::worker::messages::{FetchRequest, FetchResponse};

/// Dispatches fetch requests onto background tasks.
///
/// Cloneable handle; all clones share the gateway and the response channel.
#[derive(Clone)]
pub struct FetchWorker {
    gateway: Arc<dyn UserDirectory>,
    responses: UnboundedSender<FetchResponse>,
}

impl FetchWorker {
    /// Creates a worker that calls `gateway` and reports on `responses`.
    pub fn new(gateway: Arc<dyn UserDirectory>, responses: UnboundedSender<FetchResponse>) -> Self {
        Self { gateway, responses }
    }

    /// Spawns a background task for `request` and returns immediately.
    ///
    /// A send failure means the event loop has already shut down, so the
    /// completion is silently dropped.
    pub fn dispatch(&self, request: FetchRequest) {
        let gateway = Arc::clone(&self.gateway);
        let responses = self.responses.clone();

        match request {
            FetchRequest::Search { seq, query } => {
                tracing::debug!(seq, query = %query, "dispatching search");
                tokio::spawn(async move {
                    let outcome = gateway.search_users(&query).await;
                    let _ = responses.send(FetchResponse::SearchFinished { seq, query, outcome });
                });
            }
            FetchRequest::Repositories { seq, login } => {
                tracing::debug!(seq, login = %login, "dispatching repository listing");
                tokio::spawn(async move {
                    let outcome = gateway.list_repositories(&login).await;
                    let _ =
                        responses.send(FetchResponse::RepositoriesFinished { seq, login, outcome });
                });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{RepositorySummary, SearchResultSet};
    use crate::gateway::ApiError;
    use async_trait::async_trait;
    use tokio::sync::mpsc;

    struct StaticDirectory {
        total_count: u64,
    }

    #[async_trait]
    impl UserDirectory for StaticDirectory {
        async fn search_users(&self, query: &str) -> Result<SearchResultSet, ApiError> {
            Ok(SearchResultSet {
                query: query.to_string(),
                total_count: self.total_count,
                incomplete_results: false,
                items: vec![],
            })
        }

        async fn list_repositories(
            &self,
            _login: &str,
        ) -> Result<Vec<RepositorySummary>, ApiError> {
            Err(ApiError {
                message: "GET repositories failed: Not Found".to_string(),
                fatal: false,
            })
        }
    }

    #[tokio::test]
    async fn search_dispatch_delivers_outcome_with_request_seq() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let worker = FetchWorker::new(Arc::new(StaticDirectory { total_count: 9 }), tx);

        worker.dispatch(FetchRequest::Search {
            seq: 7,
            query: "octo".to_string(),
        });

        let FetchResponse::SearchFinished { seq, query, outcome } =
            rx.recv().await.expect("response")
        else {
            panic!("expected search completion");
        };
        assert_eq!(seq, 7);
        assert_eq!(query, "octo");
        assert_eq!(outcome.unwrap().total_count, 9);
    }

    #[tokio::test]
    async fn repository_dispatch_delivers_classified_error() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let worker = FetchWorker::new(Arc::new(StaticDirectory { total_count: 0 }), tx);

        worker.dispatch(FetchRequest::Repositories {
            seq: 3,
            login: "ghost".to_string(),
        });

        let FetchResponse::RepositoriesFinished { seq, login, outcome } =
            rx.recv().await.expect("response")
        else {
            panic!("expected repository completion");
        };
        assert_eq!(seq, 3);
        assert_eq!(login, "ghost");
        let err = outcome.unwrap_err();
        assert!(!err.fatal);
        assert!(err.message.contains("Not Found"));
    }
}
