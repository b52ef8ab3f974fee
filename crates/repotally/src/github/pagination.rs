//! Link-header-driven pagination.
//!
//! GitHub paginates list endpoints through a `Link` response header rather
//! than offsets. [`PageStream`] follows the `rel="next"` chain one page per
//! advancement, yielding each decoded page to the caller.

use serde_json::Value;

use crate::http::HttpHeaders;

use super::GitHubClient;
use super::error::GitHubError;

/// One page of results: a decoded JSON array of opaque records.
pub type Page = Vec<Value>;

/// Extract the `rel="next"` URL from a `Link` header value.
///
/// The header is a comma-separated list of `<url>; rel="relation"` entries.
/// The first entry whose relation is `next` supplies the URL verbatim with
/// the angle brackets stripped; other relations (`last`, `prev`, ...) are
/// ignored.
#[must_use]
pub fn next_link(link_header: &str) -> Option<String> {
    for part in link_header.split(',') {
        let part = part.trim();

        let mut url = None;
        let mut rel = None;

        for segment in part.split(';') {
            let segment = segment.trim();
            if segment.starts_with('<') && segment.ends_with('>') {
                url = Some(&segment[1..segment.len() - 1]);
            } else if let Some(rel_value) = segment.strip_prefix("rel=") {
                rel = Some(rel_value.trim_matches('"'));
            }
        }

        if let (Some(url), Some("next")) = (url, rel) {
            return Some(url.to_string());
        }
    }

    None
}

/// Extract the next-page cursor from response headers, if any.
fn next_link_from_headers(headers: &HttpHeaders) -> Option<String> {
    crate::http::header_get(headers, "link").and_then(next_link)
}

/// A lazy, single-pass sequence of pages.
///
/// Each call to [`try_next`](Self::try_next) issues at most one GET. The
/// stream is not restartable and is safe to abandon early: unfetched pages
/// are simply never requested. Any error ends the stream immediately.
///
/// The server decides when pagination stops; an adversarial server returning
/// an unbounded chain of `next` links causes unbounded iteration. No page cap
/// is applied.
pub struct PageStream<'a> {
    client: &'a GitHubClient,
    next_url: Option<String>,
}

impl<'a> PageStream<'a> {
    pub(super) fn new(client: &'a GitHubClient, start_url: String) -> Self {
        Self {
            client,
            next_url: Some(start_url),
        }
    }

    /// Fetch the next page, or `Ok(None)` once the `next` chain is exhausted.
    ///
    /// Status handling: 404 is [`GitHubError::NotFound`], 403 is
    /// [`GitHubError::Forbidden`] with the server-supplied message when
    /// present, any other non-2xx is [`GitHubError::UnexpectedStatus`]. A
    /// success body that is not a JSON array is
    /// [`GitHubError::MalformedResponse`].
    pub async fn try_next(&mut self) -> Result<Option<Page>, GitHubError> {
        let Some(url) = self.next_url.take() else {
            return Ok(None);
        };

        let response = self.client.get_raw(&url).await?;

        if !(200..300).contains(&response.status) {
            return Err(GitHubError::from_status(response.status, &response.body));
        }

        let value: Value = serde_json::from_slice(&response.body)
            .map_err(|_| GitHubError::MalformedResponse)?;
        let Value::Array(records) = value else {
            return Err(GitHubError::MalformedResponse);
        };

        self.next_url = next_link_from_headers(&response.headers);
        tracing::debug!(
            url = %url,
            records = records.len(),
            has_next = self.next_url.is_some(),
            "fetched page"
        );

        Ok(Some(records))
    }
}
