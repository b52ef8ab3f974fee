//! Commit-count aggregation across a user's repositories.

use super::GitHubClient;
use super::error::GitHubError;

/// Commit count for one repository.
///
/// Built once after all commit pages for the repository have been consumed,
/// never mutated afterward.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoCommitSummary {
    /// Repository short name.
    pub name: String,
    /// Total commits across all pages of the commits endpoint.
    pub commit_count: u64,
}

/// List a user's owned repositories and count the commits in each.
///
/// Repositories are discovered in the server's full-qualified-name sort
/// order and summarized in that order. Repository records with a non-string
/// `name` or `full_name` are skipped rather than failing the whole run.
/// Commit counting is strictly sequential, one repository at a time; total
/// latency is linear in repositories times pages per repository.
///
/// All-or-nothing: any fetch error aborts the operation and partial results
/// are discarded.
pub async fn list_repo_commit_summaries(
    client: &GitHubClient,
    username: &str,
) -> Result<Vec<RepoCommitSummary>, GitHubError> {
    if username.trim().is_empty() {
        return Err(GitHubError::InvalidUsername);
    }

    // 1) Discover owned repositories: (name, full_name) pairs.
    let mut repos: Vec<(String, String)> = Vec::new();
    let mut pages = client.user_repo_pages(username);
    while let Some(page) = pages.try_next().await? {
        for record in &page {
            let name = record.get("name").and_then(|v| v.as_str());
            let full_name = record.get("full_name").and_then(|v| v.as_str());
            if let (Some(name), Some(full_name)) = (name, full_name) {
                repos.push((name.to_string(), full_name.to_string()));
            }
        }
    }
    tracing::debug!(username, repos = repos.len(), "discovered repositories");

    // 2) Count commits per repository, preserving discovery order.
    let mut summaries = Vec::with_capacity(repos.len());
    for (name, full_name) in repos {
        let mut count: u64 = 0;
        let mut pages = client.repo_commit_pages(&full_name);
        while let Some(page) = pages.try_next().await? {
            count += page.len() as u64;
        }
        summaries.push(RepoCommitSummary {
            name,
            commit_count: count,
        });
    }

    Ok(summaries)
}
