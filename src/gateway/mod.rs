//! Remote data gateway for the GitHub API.
//!
//! This module owns the two outbound calls the application makes (user search
//! and per-user repository listing) and the classification of their failures
//! into user-facing messages. The gateway performs network I/O only; it never
//! touches shared application state. Callers receive a value or an
//! [`ApiError`] and decide themselves what to write into the store.
//!
//! # Modules
//!
//! - [`classify`]: Pure status-code/exception classification
//! - [`http`]: The reqwest-backed [`UserDirectory`] implementation

pub mod classify;
pub mod http;

pub use classify::{classify, ApiContext, ApiError};
pub use http::{GithubGateway, UserDirectory};
