//! Octoseek: a terminal UI for searching GitHub users.
//!
//! Octoseek is an interactive TUI that provides:
//! - Debounced live search over GitHub accounts, with explicit submission
//! - Expandable result rows showing a user's public repositories
//! - Classified API error reporting (rate limit, server error, transport)
//! - Theme support via built-in palettes or custom TOML files

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! The crate follows a layered architecture pattern:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Terminal Shim (main.rs)                            │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Event handling                                   │  ← Business logic
//! │  - Action dispatching                               │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Gateway Layer │   │ Worker Layer  │
//! │ (ui/)         │   │ (gateway/)    │   │ (worker/)     │
//! │ - Rendering   │   │ - GitHub API  │   │ - Async fetch │
//! │ - Theming     │   │ - Error class │   │ - Debouncing  │
//! │ - Components  │   │ - Wire DTOs   │   │ - mpsc bridge │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!         │                    │                    │
//! ┌─────────────────────────────────────────────────────┐
//! │  Infrastructure & Domain Layers                     │
//! │  - Platform paths (infrastructure/)                 │
//! │  - Error types (domain/error)                       │
//! │  - User/repository model (domain/github)            │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │  ← Optional
//! │  - tracing subscriber setup                         │
//! │  - File-based log output                            │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: Application state machine with event/action model
//! - [`domain`]: Core domain types (users, repositories, errors)
//! - [`gateway`]: GitHub REST API client and error classification
//! - [`infrastructure`]: Platform-specific utilities (paths)
//! - [`worker`]: Background fetch worker and debounce timer
//! - [`ui`]: Terminal rendering with theme support
//! - `observability`: tracing subscriber setup (internal)
//!
//! # Event Flow
//!
//! 1. **Startup** (`main.rs`):
//!    - Load configuration (file, then environment overrides)
//!    - Initialize tracing (optional)
//!    - Create `AppState` with theme
//!    - Enter raw mode and the alternate screen
//!
//! 2. **Input**:
//!    - Terminal events map to application [`Event`]s per input focus
//!    - `handle_event` mutates state and returns actions
//!    - Fetch actions go to the worker, schedule actions to the debouncer
//!
//! 3. **Completion**:
//!    - Worker responses convert back into events
//!    - Stale responses are discarded by sequence number
//!
//! 4. **Rendering**:
//!    - Compute view model from state
//!    - Render components (header, search bar, body, footer)
//!
//! # Key Design Decisions
//!
//! ## Last Writer Wins by Completion
//!
//! Each fetch carries a sequence number assigned at issue time. A completion
//! is committed only if its sequence matches the latest issued request, so
//! overlapping searches can finish in any order without the display ever
//! showing results for a query the user has already superseded.
//!
//! ## Immutable View Models
//!
//! UI rendering uses computed view models:
//! - Clear separation between state and display
//! - The display priority (loading over error over prompt over empty over
//!   rows) is resolved once, in one place
//! - Enables testing the full display logic without a terminal

pub mod app;
pub mod domain;
pub mod gateway;
pub mod infrastructure;
pub mod worker;

pub mod ui;

pub mod observability;

pub use app::{handle_event, Action, AppState, Event, InputFocus, SearchView};
pub use domain::{OctoseekError, RepositorySummary, Result, SearchResultSet, UserSummary};
pub use ui::Theme;

use serde::Deserialize;
use std::path::Path;

/// Application configuration.
///
/// Values come from three layers, each overriding the previous:
/// built-in defaults, the TOML config file, then environment variables.
///
/// # Example
///
/// ```toml
/// # ~/.config/octoseek/config.toml
/// api_base = "https://api.github.com"
/// per_page = 30
/// debounce_ms = 500
/// theme = "octoseek-dark"
/// trace_level = "debug"
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the GitHub REST API.
    ///
    /// Override for GitHub Enterprise or test servers.
    /// Default: `https://api.github.com`
    pub api_base: String,

    /// Result page size for user search. Default: 30
    pub per_page: u32,

    /// Quiet period after the last keystroke before a search fires, in
    /// milliseconds. Default: 500
    pub debounce_ms: u64,

    /// Personal access token sent as a bearer token when set.
    ///
    /// Raises the rate limit and grants access to private-visible data.
    pub token: Option<String>,

    /// Built-in theme name to use.
    ///
    /// Options: `octoseek-dark`, `octoseek-light`. Ignored if `theme_file`
    /// is set.
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme file.
    ///
    /// Takes precedence over `theme_name`. See [`ui::theme`] for format.
    pub theme_file: Option<String>,

    /// Tracing level for log output.
    ///
    /// Options: `trace`, `debug`, `info`, `warn`, `error`. Default: `"info"`
    pub trace_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base: "https://api.github.com".to_string(),
            per_page: 30,
            debounce_ms: 500,
            token: None,
            theme_name: None,
            theme_file: None,
            trace_level: None,
        }
    }
}

/// Wire shape of the config file; every field optional so partial files
/// overlay cleanly on the defaults.
#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    api_base: Option<String>,
    per_page: Option<u32>,
    debounce_ms: Option<u64>,
    token: Option<String>,
    theme: Option<String>,
    theme_file: Option<String>,
    trace_level: Option<String>,
}

impl Config {
    /// Loads configuration from the default file location and applies
    /// environment overrides.
    ///
    /// A missing config file is not an error; defaults are used.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be read or
    /// parsed.
    pub fn load() -> Result<Self> {
        let path = infrastructure::config_file_path();
        let mut config = if path.exists() {
            Self::from_file(&path)?
        } else {
            Self::default()
        };
        config.apply_env_overrides();
        Ok(config)
    }

    /// Loads configuration from a TOML file, overlaying it on the defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or contains invalid TOML.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = std::fs::read_to_string(&path)?;
        let file: ConfigFile = toml::from_str(&contents)
            .map_err(|e| OctoseekError::Config(format!("invalid config file: {e}")))?;

        let defaults = Self::default();
        Ok(Self {
            api_base: file.api_base.unwrap_or(defaults.api_base),
            per_page: file.per_page.unwrap_or(defaults.per_page),
            debounce_ms: file.debounce_ms.unwrap_or(defaults.debounce_ms),
            token: file.token,
            theme_name: file.theme,
            theme_file: file.theme_file,
            trace_level: file.trace_level,
        })
    }

    /// Applies environment variable overrides.
    ///
    /// - `GITHUB_API_BASE`: API base URL
    /// - `GITHUB_TOKEN`: bearer token
    /// - `OCTOSEEK_TRACE_LEVEL`: tracing level
    fn apply_env_overrides(&mut self) {
        if let Ok(api_base) = std::env::var("GITHUB_API_BASE") {
            if !api_base.is_empty() {
                self.api_base = api_base;
            }
        }
        if let Ok(token) = std::env::var("GITHUB_TOKEN") {
            if !token.is_empty() {
                self.token = Some(token);
            }
        }
        if let Ok(level) = std::env::var("OCTOSEEK_TRACE_LEVEL") {
            if !level.is_empty() {
                self.trace_level = Some(level);
            }
        }
    }
}

/// Creates the initial application state from configuration.
///
/// Loads the theme (from file, name, or default) and returns a fresh
/// `AppState` ready for event processing.
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!("initializing octoseek");

    let theme = config.theme_file.as_ref().map_or_else(
        || {
            config.theme_name.as_ref().map_or_else(
                Theme::default,
                |theme_name| {
                    Theme::from_name(theme_name).unwrap_or_else(|| {
                        tracing::debug!(theme_name = %theme_name, "failed to load theme, using default");
                        Theme::default()
                    })
                },
            )
        },
        |theme_file| {
            Theme::from_file(theme_file.clone()).unwrap_or_else(|e| {
                tracing::debug!(theme_file = %theme_file, error = %e, "failed to load theme from file, using default");
                Theme::default()
            })
        },
    );

    AppState::new(theme)
}
