//! GitHub API error types.

use thiserror::Error;

use crate::http::HttpError;

/// Errors that can occur when listing repositories and counting commits.
///
/// There is no local recovery anywhere in this crate: every variant is fatal
/// to the current invocation and propagates unchanged to the caller.
#[derive(Debug, Error)]
pub enum GitHubError {
    #[error("username must be a non-empty string")]
    InvalidUsername,

    #[error("Resource not found (404). Check username/repository.")]
    NotFound,

    #[error("GitHub API error 403: {message}")]
    Forbidden { message: String },

    #[error("GitHub API error {status}: {body}")]
    UnexpectedStatus { status: u16, body: String },

    #[error("Unexpected response shape: expected a list.")]
    MalformedResponse,

    #[error(transparent)]
    Transport(#[from] HttpError),
}

impl GitHubError {
    /// Classify a non-2xx HTTP status code and response body into a typed
    /// error.
    ///
    /// A 403 body is expected to carry a JSON object with a `message` field
    /// (GitHub uses it for rate-limit notices); when that field is missing or
    /// the body is not JSON, a generic forbidden message is used instead.
    pub fn from_status(status: u16, body: &[u8]) -> Self {
        match status {
            404 => Self::NotFound,
            403 => {
                let message = serde_json::from_slice::<serde_json::Value>(body)
                    .ok()
                    .and_then(|v| v.get("message").and_then(|m| m.as_str()).map(String::from))
                    .unwrap_or_else(|| "Forbidden or rate limited".to_string());
                Self::Forbidden { message }
            }
            _ => Self::UnexpectedStatus {
                status,
                body: String::from_utf8_lossy(body).to_string(),
            },
        }
    }
}
