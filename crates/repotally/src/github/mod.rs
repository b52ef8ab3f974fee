//! GitHub API client for repository enumeration and commit counting.
//!
//! # Module Structure
//!
//! - [`error`] - Error types for GitHub API operations
//! - [`client`] - Client configuration and request plumbing
//! - [`pagination`] - Link-header-driven page streaming
//! - [`summary`] - Commit-count aggregation per repository

mod client;
mod error;
mod pagination;
mod summary;

pub use client::{DEFAULT_PAGE_SIZE, DEFAULT_TIMEOUT, GITHUB_API, GitHubClient};
pub use error::GitHubError;
pub use pagination::{Page, PageStream, next_link};
pub use summary::{RepoCommitSummary, list_repo_commit_summaries};
