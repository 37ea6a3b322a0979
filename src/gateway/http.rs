//! Reqwest-backed GitHub API gateway.
//!
//! This adapter owns transport details only: request construction, HTTP error
//! mapping via [`classify`], and JSON decoding into domain values. It exposes
//! the [`UserDirectory`] trait so the fetch worker and tests can swap the
//! network for a scripted fake.

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, USER_AGENT};
use reqwest::{Client, Response};
use serde::Deserialize;

use crate::domain::error::{OctoseekError, Result};
use crate::domain::{RepositorySummary, SearchResultSet, UserSummary};
use crate::gateway::classify::{classify, ApiContext, ApiError};
use crate::Config;

const GITHUB_ACCEPT: &str = "application/vnd.github.v3+json";
const OCTOSEEK_USER_AGENT: &str = concat!("octoseek/", env!("CARGO_PKG_VERSION"));

/// Wire shape of the search endpoint response.
#[derive(Debug, Deserialize)]
struct SearchResponseDto {
    total_count: u64,
    #[serde(default)]
    incomplete_results: bool,
    items: Vec<UserSummary>,
}

/// Abstraction over the two read-only GitHub endpoints the application uses.
///
/// The trait is minimal and maps directly to the two use cases driven by the
/// event handler. Implementations must be shareable across tokio tasks.
///
/// # Implementations
///
/// - [`GithubGateway`]: reqwest-backed HTTP client (default)
/// - Scripted in-memory fakes in tests
#[async_trait]
pub trait UserDirectory: Send + Sync {
    /// Searches GitHub accounts matching `query`.
    ///
    /// Callers must pass a trimmed, non-empty query; the empty-query no-op
    /// lives in the event handler, not here.
    ///
    /// # Errors
    ///
    /// Returns a classified [`ApiError`] on any transport or HTTP failure.
    async fn search_users(&self, query: &str) -> std::result::Result<SearchResultSet, ApiError>;

    /// Lists the first page of public repositories for `login`.
    ///
    /// # Errors
    ///
    /// Returns a classified [`ApiError`] on any transport or HTTP failure.
    async fn list_repositories(
        &self,
        login: &str,
    ) -> std::result::Result<Vec<RepositorySummary>, ApiError>;
}

/// HTTP gateway to the GitHub REST API.
///
/// Holds a preconfigured [`reqwest::Client`] (User-Agent, GitHub Accept
/// header, optional bearer token) plus the API base URL and the fixed search
/// page size. The gateway has no access to application state; it returns
/// values or classified errors and nothing else.
pub struct GithubGateway {
    client: Client,
    api_base: String,
    per_page: u32,
}

impl GithubGateway {
    /// Creates a gateway from application configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured token is not a valid header value
    /// or the HTTP client cannot be constructed.
    pub fn new(config: &Config) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_static(OCTOSEEK_USER_AGENT));
        headers.insert(ACCEPT, HeaderValue::from_static(GITHUB_ACCEPT));

        if let Some(token) = config.token.as_deref().filter(|t| !t.is_empty()) {
            let value = HeaderValue::from_str(&format!("Bearer {token}"))
                .map_err(|e| OctoseekError::Gateway(format!("invalid token value: {e}")))?;
            headers.insert(AUTHORIZATION, value);
        }

        let client = Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|e| OctoseekError::Gateway(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            api_base: config.api_base.trim_end_matches('/').to_string(),
            per_page: config.per_page,
        })
    }

    /// Maps a non-success response to a classified error.
    fn status_error(response: &Response, context: ApiContext) -> ApiError {
        let status = response.status();
        classify(
            "GET",
            context,
            Some(status.as_u16()),
            status.canonical_reason(),
        )
    }

    /// Maps a transport or decode exception to a classified error.
    fn transport_error(error: &reqwest::Error, context: ApiContext) -> ApiError {
        classify("GET", context, None, Some(&error.to_string()))
    }
}

#[async_trait]
impl UserDirectory for GithubGateway {
    async fn search_users(&self, query: &str) -> std::result::Result<SearchResultSet, ApiError> {
        let url = format!("{}/search/users", self.api_base);

        tracing::debug!(query = %query, per_page = self.per_page, "searching users");

        let response = self
            .client
            .get(&url)
            .query(&[("q", query), ("per_page", &self.per_page.to_string())])
            .send()
            .await
            .map_err(|e| Self::transport_error(&e, ApiContext::Search))?;

        if !response.status().is_success() {
            let err = Self::status_error(&response, ApiContext::Search);
            tracing::warn!(status = response.status().as_u16(), fatal = err.fatal, "search request failed");
            return Err(err);
        }

        let dto: SearchResponseDto = response
            .json()
            .await
            .map_err(|e| Self::transport_error(&e, ApiContext::Search))?;

        tracing::debug!(
            delivered = dto.items.len(),
            total_count = dto.total_count,
            "search completed"
        );

        Ok(SearchResultSet {
            query: query.to_string(),
            total_count: dto.total_count,
            incomplete_results: dto.incomplete_results,
            items: dto.items,
        })
    }

    async fn list_repositories(
        &self,
        login: &str,
    ) -> std::result::Result<Vec<RepositorySummary>, ApiError> {
        let url = format!("{}/users/{login}/repos", self.api_base);

        tracing::debug!(login = %login, "listing repositories");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| Self::transport_error(&e, ApiContext::Repositories))?;

        if !response.status().is_success() {
            let err = Self::status_error(&response, ApiContext::Repositories);
            tracing::warn!(status = response.status().as_u16(), fatal = err.fatal, "repository request failed");
            return Err(err);
        }

        let repositories: Vec<RepositorySummary> = response
            .json()
            .await
            .map_err(|e| Self::transport_error(&e, ApiContext::Repositories))?;

        tracing::debug!(count = repositories.len(), "repositories listed");

        Ok(repositories)
    }
}
