//! Fixed-format report rendering.

use crate::github::RepoCommitSummary;

/// Render one line per summary in input order, joined by newlines.
///
/// The line shape is fixed: `Repo: <name> Number of commits: <count>`. No
/// trailing newline; empty input renders an empty string.
#[must_use]
pub fn format_report(summaries: &[RepoCommitSummary]) -> String {
    summaries
        .iter()
        .map(|s| format!("Repo: {} Number of commits: {}", s.name, s.commit_count))
        .collect::<Vec<_>>()
        .join("\n")
}
