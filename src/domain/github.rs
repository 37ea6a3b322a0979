//! GitHub value types.
//!
//! This module defines the immutable values consumed from the GitHub API:
//! user accounts as returned by user search, repositories as returned by the
//! per-user repository listing, and the result set wrapper that keeps a
//! completed search tied to the exact query that produced it.
//!
//! All types are plain values. They carry no identity or lifecycle beyond the
//! response that produced them, and extra fields present in the remote JSON
//! are ignored during deserialization.

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// One GitHub account as returned by the user search endpoint.
///
/// The search endpoint guarantees only the identity fields (`id`, `login`,
/// `avatar_url`, `html_url`); profile details such as the display name,
/// follower count, and timestamps are optional and default when the remote
/// object omits them.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct UserSummary {
    /// Stable numeric account identifier.
    pub id: u64,

    /// Account handle (the `{login}` path segment of the repositories
    /// endpoint).
    pub login: String,

    /// Avatar image URL. Carried in the model; the terminal renderer ignores
    /// it.
    pub avatar_url: String,

    /// Link to the account's profile page.
    pub html_url: String,

    /// Optional display name.
    #[serde(default)]
    pub name: Option<String>,

    /// Follower count, zero when the remote object omits it.
    #[serde(default)]
    pub followers: u32,

    /// Public repository count, zero when the remote object omits it.
    #[serde(default)]
    pub public_repos: u32,

    /// Account creation timestamp.
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,

    /// Last profile update timestamp.
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// One repository as returned by the per-user repository listing.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RepositorySummary {
    /// Stable numeric repository identifier.
    pub id: u64,

    /// Repository name (without the owner prefix).
    pub name: String,

    /// Link to the repository page.
    pub html_url: String,

    /// Optional free-form description.
    #[serde(default)]
    pub description: Option<String>,

    /// Repository creation timestamp.
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,

    /// Last push/update timestamp.
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// A completed user search: the delivered items plus the server-reported
/// total and the exact query string that produced them.
///
/// `query` is captured at submission time and travels with the result set so
/// the "Showing N of M results for ..." label can never drift out of sync
/// with what was actually searched, even if the live input has been edited
/// since.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResultSet {
    /// The query string this result set was produced for.
    pub query: String,

    /// Total match count reported by the server. May exceed `items.len()`
    /// because only the first page is fetched.
    pub total_count: u64,

    /// Whether the server reported the result list as incomplete.
    pub incomplete_results: bool,

    /// The delivered user summaries, in server order.
    pub items: Vec<UserSummary>,
}
