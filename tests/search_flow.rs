//! End-to-end flow tests driving the event handler through the fetch worker
//! with a scripted in-memory gateway.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::mpsc;

use octoseek::app::{handle_event, Action, AppState, Event, SearchView};
use octoseek::domain::{RepositorySummary, SearchResultSet, UserSummary};
use octoseek::gateway::{ApiError, UserDirectory};
use octoseek::ui::Theme;
use octoseek::worker::{FetchRequest, FetchResponse, FetchWorker};

/// Scripted gateway: per-query results, per-query artificial latency, and an
/// optional error script.
struct ScriptedDirectory {
    latency: fn(&str) -> Duration,
    search: fn(&str) -> Result<Vec<UserSummary>, ApiError>,
    repositories: fn(&str) -> Result<Vec<RepositorySummary>, ApiError>,
}

#[async_trait]
impl UserDirectory for ScriptedDirectory {
    async fn search_users(&self, query: &str) -> Result<SearchResultSet, ApiError> {
        tokio::time::sleep((self.latency)(query)).await;
        let items = (self.search)(query)?;
        Ok(SearchResultSet {
            query: query.to_string(),
            total_count: items.len() as u64,
            incomplete_results: false,
            items,
        })
    }

    async fn list_repositories(&self, login: &str) -> Result<Vec<RepositorySummary>, ApiError> {
        tokio::time::sleep((self.latency)(login)).await;
        (self.repositories)(login)
    }
}

fn user(id: u64, login: &str) -> UserSummary {
    UserSummary {
        id,
        login: login.to_string(),
        avatar_url: String::new(),
        html_url: format!("https://github.com/{login}"),
        name: None,
        followers: 0,
        public_repos: 0,
        created_at: None,
        updated_at: None,
    }
}

fn repo(id: u64, name: &str) -> RepositorySummary {
    RepositorySummary {
        id,
        name: name.to_string(),
        html_url: String::new(),
        description: None,
        created_at: None,
        updated_at: None,
    }
}

/// Runs the handler for `event` and forwards fetch actions to the worker.
fn step(state: &mut AppState, worker: &FetchWorker, event: &Event) {
    let (_, actions) = handle_event(state, event).expect("handler");
    for action in actions {
        match action {
            Action::FetchSearch { seq, query } => {
                worker.dispatch(FetchRequest::Search { seq, query });
            }
            Action::FetchRepositories { seq, login } => {
                worker.dispatch(FetchRequest::Repositories { seq, login });
            }
            _ => {}
        }
    }
}

fn type_term(state: &mut AppState, worker: &FetchWorker, term: &str) {
    for c in term.chars() {
        step(state, worker, &Event::Char(c));
    }
}

#[tokio::test(start_paused = true)]
async fn submitted_search_round_trips_through_the_worker() {
    let directory = ScriptedDirectory {
        latency: |_| Duration::from_millis(10),
        search: |query| {
            assert_eq!(query, "octocat");
            Ok(vec![user(1, "octocat"), user(2, "octocat2")])
        },
        repositories: |_| Ok(vec![]),
    };

    let (tx, mut rx) = mpsc::unbounded_channel();
    let worker = FetchWorker::new(Arc::new(directory), tx);
    let mut state = AppState::new(Theme::default());

    type_term(&mut state, &worker, "octocat");
    step(&mut state, &worker, &Event::Submit);
    assert_eq!(state.search_view(), SearchView::Loading);

    let response = rx.recv().await.expect("completion");
    step(&mut state, &worker, &Event::from(response));

    assert_eq!(state.search_view(), SearchView::Results);
    assert_eq!(state.results.len(), 2);
    assert_eq!(state.searched_term, "octocat");
}

#[tokio::test(start_paused = true)]
async fn slower_superseded_search_cannot_overwrite_the_newer_one() {
    // "abc" is slow, "abcd" is fast, so completions arrive reversed.
    let directory = ScriptedDirectory {
        latency: |query| {
            if query == "abc" {
                Duration::from_millis(200)
            } else {
                Duration::from_millis(10)
            }
        },
        search: |query| {
            if query == "abc" {
                Ok(vec![user(1, "abc-user")])
            } else {
                Ok(vec![user(2, "abcd-user")])
            }
        },
        repositories: |_| Ok(vec![]),
    };

    let (tx, mut rx) = mpsc::unbounded_channel();
    let worker = FetchWorker::new(Arc::new(directory), tx);
    let mut state = AppState::new(Theme::default());

    type_term(&mut state, &worker, "abc");
    step(&mut state, &worker, &Event::Submit);
    type_term(&mut state, &worker, "d");
    step(&mut state, &worker, &Event::Submit);

    let first = rx.recv().await.expect("first completion");
    let FetchResponse::SearchFinished { query, .. } = &first else {
        panic!("expected search completion");
    };
    assert_eq!(query, "abcd");
    step(&mut state, &worker, &Event::from(first));
    assert_eq!(state.results[0].login, "abcd-user");

    // The stale "abc" completion arrives afterwards and must be dropped.
    let second = rx.recv().await.expect("second completion");
    step(&mut state, &worker, &Event::from(second));

    assert_eq!(state.results[0].login, "abcd-user");
    assert_eq!(state.searched_term, "abcd");
}

#[tokio::test(start_paused = true)]
async fn rate_limited_search_surfaces_the_fixed_message() {
    let directory = ScriptedDirectory {
        latency: |_| Duration::from_millis(10),
        search: |_| {
            Err(ApiError {
                message:
                    "GET search failed: GitHub API rate limit exceeded. Please try again later."
                        .to_string(),
                fatal: true,
            })
        },
        repositories: |_| Ok(vec![]),
    };

    let (tx, mut rx) = mpsc::unbounded_channel();
    let worker = FetchWorker::new(Arc::new(directory), tx);
    let mut state = AppState::new(Theme::default());

    type_term(&mut state, &worker, "octocat");
    step(&mut state, &worker, &Event::Submit);

    let response = rx.recv().await.expect("completion");
    step(&mut state, &worker, &Event::from(response));

    let SearchView::Error(message) = state.search_view() else {
        panic!("expected error view, got {:?}", state.search_view());
    };
    assert!(message.contains("GitHub API rate limit exceeded"));
    assert!(state.results.is_empty());
}

#[tokio::test(start_paused = true)]
async fn expanding_a_user_loads_repositories_and_toggle_collapses() {
    let directory = ScriptedDirectory {
        latency: |_| Duration::from_millis(10),
        search: |_| Ok(vec![user(1, "octocat")]),
        repositories: |login| {
            assert_eq!(login, "octocat");
            Ok(vec![repo(1, "Hello-World"), repo(2, "Spoon-Knife")])
        },
    };

    let (tx, mut rx) = mpsc::unbounded_channel();
    let worker = FetchWorker::new(Arc::new(directory), tx);
    let mut state = AppState::new(Theme::default());

    type_term(&mut state, &worker, "octocat");
    step(&mut state, &worker, &Event::Submit);
    let response = rx.recv().await.expect("search completion");
    step(&mut state, &worker, &Event::from(response));

    step(&mut state, &worker, &Event::ToggleExpand);
    assert!(state.is_loading_repositories);

    let response = rx.recv().await.expect("repository completion");
    step(&mut state, &worker, &Event::from(response));

    assert_eq!(state.repositories.len(), 2);
    assert_eq!(state.repositories[0].name, "Hello-World");

    step(&mut state, &worker, &Event::ToggleExpand);
    assert!(state.selected_user.is_none());
    assert!(state.repositories.is_empty());
}

#[tokio::test(start_paused = true)]
async fn repository_failure_keeps_search_results_intact() {
    let directory = ScriptedDirectory {
        latency: |_| Duration::from_millis(10),
        search: |_| Ok(vec![user(1, "octocat")]),
        repositories: |_| {
            Err(ApiError {
                message: "GET repositories failed: Not Found".to_string(),
                fatal: false,
            })
        },
    };

    let (tx, mut rx) = mpsc::unbounded_channel();
    let worker = FetchWorker::new(Arc::new(directory), tx);
    let mut state = AppState::new(Theme::default());

    type_term(&mut state, &worker, "octocat");
    step(&mut state, &worker, &Event::Submit);
    let response = rx.recv().await.expect("search completion");
    step(&mut state, &worker, &Event::from(response));

    step(&mut state, &worker, &Event::ToggleExpand);
    let response = rx.recv().await.expect("repository completion");
    step(&mut state, &worker, &Event::from(response));

    // The failure stays on the selection slice, results are untouched.
    assert_eq!(state.search_view(), SearchView::Results);
    assert_eq!(state.results.len(), 1);
    assert_eq!(
        state.repositories_error.as_deref(),
        Some("GET repositories failed: Not Found")
    );
}
