//! Domain layer for octoseek.
//!
//! This module contains the core domain types for the application, independent
//! of HTTP transport or terminal rendering concerns. It holds the value types
//! consumed from the GitHub API and the crate-wide error type.
//!
//! # Modules
//!
//! - [`error`]: Centralized error type and `Result` alias
//! - [`github`]: GitHub value types (users, repositories, search results)

pub mod error;
pub mod github;

pub use error::{OctoseekError, Result};
pub use github::{RepositorySummary, SearchResultSet, UserSummary};
