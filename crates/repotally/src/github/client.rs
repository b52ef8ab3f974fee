//! GitHub API client creation and request plumbing.

use std::sync::Arc;
use std::time::Duration;

use crate::http::reqwest_transport::ReqwestTransport;
use crate::http::{HttpRequest, HttpResponse, HttpTransport};

use super::error::GitHubError;
use super::pagination::PageStream;

/// Default GitHub API base URL.
pub const GITHUB_API: &str = "https://api.github.com";

/// Default page size for API requests.
pub const DEFAULT_PAGE_SIZE: u32 = 100;

/// Default request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// GitHub API client.
///
/// An immutable configuration value: base URL, optional bearer token, page
/// size, and the transport carrying the request timeout. Construct one per
/// invocation; there is no process-wide client state.
#[derive(Clone)]
pub struct GitHubClient {
    transport: Arc<dyn HttpTransport>,
    base_url: String,
    token: Option<String>,
    per_page: u32,
}

impl GitHubClient {
    /// Create a client backed by a real reqwest transport.
    ///
    /// Requests are unauthenticated when `token` is `None` and subject to the
    /// API's public rate limits.
    pub fn new(
        token: Option<String>,
        timeout: Duration,
        per_page: u32,
    ) -> Result<Self, GitHubError> {
        let transport = ReqwestTransport::with_timeout(timeout)?;
        Ok(Self::with_transport(token, per_page, Arc::new(transport)))
    }

    /// Create a client over an injected transport.
    pub fn with_transport(
        token: Option<String>,
        per_page: u32,
        transport: Arc<dyn HttpTransport>,
    ) -> Self {
        Self {
            transport,
            base_url: GITHUB_API.to_string(),
            token,
            per_page,
        }
    }

    /// Override the API base URL. Used by tests against a local server.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Get the configured page size.
    pub fn per_page(&self) -> u32 {
        self.per_page
    }

    /// Issue one GET with the client's default headers.
    pub(super) async fn get_raw(&self, url: &str) -> Result<HttpResponse, GitHubError> {
        let mut headers = vec![
            (
                "Accept".to_string(),
                "application/vnd.github+json".to_string(),
            ),
            ("User-Agent".to_string(), "repotally/0.1".to_string()),
        ];
        if let Some(token) = &self.token {
            headers.push(("Authorization".to_string(), format!("Bearer {token}")));
        }

        let request = HttpRequest {
            url: url.to_string(),
            headers,
        };

        Ok(self.transport.get(request).await?)
    }

    /// Page through the "repositories owned by user" resource.
    ///
    /// Restricted to owned repositories and sorted by full qualified name so
    /// discovery order is deterministic.
    pub fn user_repo_pages(&self, username: &str) -> PageStream<'_> {
        let url = format!(
            "{}/users/{}/repos?type=owner&sort=full_name&per_page={}",
            self.base_url, username, self.per_page
        );
        PageStream::new(self, url)
    }

    /// Page through the "list commits" resource for `full_name` (owner/name).
    pub fn repo_commit_pages(&self, full_name: &str) -> PageStream<'_> {
        let url = format!(
            "{}/repos/{}/commits?per_page={}",
            self.base_url, full_name, self.per_page
        );
        PageStream::new(self, url)
    }
}
