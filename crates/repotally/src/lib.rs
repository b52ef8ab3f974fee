//! Repotally - commit counts across a GitHub user's repositories.
//!
//! This library enumerates the repositories a user owns, pages through each
//! repository's commit history via `Link` headers, and renders a fixed-format
//! report. Fetching is strictly sequential with no retries and no caching;
//! any failure aborts the whole run.
//!
//! # Example
//!
//! ```ignore
//! use repotally::github::{GitHubClient, DEFAULT_PAGE_SIZE, DEFAULT_TIMEOUT};
//! use repotally::{list_repo_commit_summaries, format_report};
//!
//! let client = GitHubClient::new(None, DEFAULT_TIMEOUT, DEFAULT_PAGE_SIZE)?;
//! let summaries = list_repo_commit_summaries(&client, "octocat").await?;
//! println!("{}", format_report(&summaries));
//! ```

pub mod github;
pub mod http;
pub mod report;

pub use github::{GitHubClient, GitHubError, RepoCommitSummary, list_repo_commit_summaries};
pub use report::format_report;
