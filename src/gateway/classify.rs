//! Failure classification for GitHub API calls.
//!
//! This module maps an HTTP status code and/or a transport exception to a
//! single human-readable message of the fixed shape
//! `"<METHOD> <context> failed: <detail>"`, together with a flag that says
//! whether the failure is fatal for the call that produced it.
//!
//! Classification is a pure function with no side effects, so it is tested
//! directly without any network involvement.

use std::fmt;

use thiserror::Error;

/// The literal detail used for HTTP 403 responses.
pub const RATE_LIMIT_DETAIL: &str = "GitHub API rate limit exceeded. Please try again later.";

/// Fallback detail when neither a status reason nor an exception message is
/// available.
pub const UNEXPECTED_DETAIL: &str = "An unexpected error occurred";

/// Which outbound call a failure belongs to.
///
/// The context appears verbatim in the classified message, e.g.
/// `"GET search failed: ..."`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiContext {
    /// The user search endpoint (`/search/users`).
    Search,

    /// The per-user repository listing endpoint (`/users/{login}/repos`).
    Repositories,
}

impl fmt::Display for ApiContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Search => f.write_str("search"),
            Self::Repositories => f.write_str("repositories"),
        }
    }
}

/// A classified API failure.
///
/// Carries the display message shown to the user and whether the failure is
/// fatal for the call. Fatal failures (rate limit, server error) must replace
/// the current view with an error state; non-fatal ones are recorded for
/// display next to an empty result list.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ApiError {
    /// Human-readable message of the shape `"<METHOD> <context> failed: ..."`.
    pub message: String,

    /// Whether the failure must halt the current view (HTTP 403 or 500).
    pub fatal: bool,
}

/// Classifies an API failure into a display message and a fatality flag.
///
/// # Parameters
///
/// * `method` - HTTP method of the failed call (always `"GET"` here)
/// * `context` - Which endpoint failed
/// * `status` - HTTP status code, if a response was received
/// * `detail` - Status text or exception message, if any
///
/// # Classification Rules
///
/// - Status 403 always yields the rate-limit message and is fatal.
/// - Status 500 is fatal; the detail (status text) is passed through.
/// - Any other status or a transport exception is non-fatal; the detail is
///   passed through, falling back to [`UNEXPECTED_DETAIL`] when absent.
///
/// # Example
///
/// ```
/// use octoseek::gateway::{classify, ApiContext};
///
/// let err = classify("GET", ApiContext::Search, Some(404), Some("Not Found"));
/// assert_eq!(err.message, "GET search failed: Not Found");
/// assert!(!err.fatal);
/// ```
#[must_use]
pub fn classify(
    method: &str,
    context: ApiContext,
    status: Option<u16>,
    detail: Option<&str>,
) -> ApiError {
    let fatal = matches!(status, Some(403 | 500));

    let detail = if status == Some(403) {
        RATE_LIMIT_DETAIL
    } else {
        detail.unwrap_or(UNEXPECTED_DETAIL)
    };

    ApiError {
        message: format!("{method} {context} failed: {detail}"),
        fatal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rate_limit_status_yields_literal_message_and_is_fatal() {
        let err = classify("GET", ApiContext::Search, Some(403), Some("Forbidden"));
        assert_eq!(
            err.message,
            "GET search failed: GitHub API rate limit exceeded. Please try again later."
        );
        assert!(err.fatal);
    }

    #[test]
    fn rate_limit_applies_to_repositories_context_too() {
        let err = classify("GET", ApiContext::Repositories, Some(403), None);
        assert_eq!(
            err.message,
            "GET repositories failed: GitHub API rate limit exceeded. Please try again later."
        );
        assert!(err.fatal);
    }

    #[test]
    fn server_failure_is_fatal() {
        let err = classify(
            "GET",
            ApiContext::Search,
            Some(500),
            Some("Internal Server Error"),
        );
        assert_eq!(err.message, "GET search failed: Internal Server Error");
        assert!(err.fatal);
    }

    #[test]
    fn not_found_is_not_fatal() {
        let err = classify("GET", ApiContext::Repositories, Some(404), Some("Not Found"));
        assert_eq!(err.message, "GET repositories failed: Not Found");
        assert!(!err.fatal);
    }

    #[test]
    fn transport_exception_without_status_uses_exception_message() {
        let err = classify(
            "GET",
            ApiContext::Search,
            None,
            Some("connection refused"),
        );
        assert_eq!(err.message, "GET search failed: connection refused");
        assert!(!err.fatal);
    }

    #[test]
    fn missing_detail_falls_back_to_unexpected() {
        let err = classify("GET", ApiContext::Search, None, None);
        assert_eq!(err.message, "GET search failed: An unexpected error occurred");
        assert!(!err.fatal);
    }
}
