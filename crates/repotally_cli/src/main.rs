//! Repotally CLI - commit counts for a GitHub user's repositories.

use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use console::Term;
use tracing_subscriber::EnvFilter;

use repotally::github::{DEFAULT_PAGE_SIZE, GitHubClient};
use repotally::{GitHubError, format_report, list_repo_commit_summaries};

#[derive(Parser)]
#[command(name = "repotally")]
#[command(version)]
#[command(about = "List repositories and commit counts for a GitHub user")]
#[command(
    long_about = "Repotally enumerates the repositories a GitHub user owns and pages through \
each repository's commit history to count commits, then prints one line per \
repository. Without a token, requests are subject to GitHub's public rate \
limits."
)]
struct Cli {
    /// GitHub username (e.g., octocat)
    username: String,

    /// GitHub token to raise rate limits
    #[arg(short, long, env = "GITHUB_TOKEN", hide_env_values = true)]
    token: Option<String>,

    /// Request timeout in seconds
    #[arg(long, default_value_t = 10)]
    timeout: u64,

    /// Page size for API requests
    #[arg(long, default_value_t = DEFAULT_PAGE_SIZE)]
    per_page: u32,
}

async fn run(cli: Cli) -> Result<String, GitHubError> {
    let client = GitHubClient::new(cli.token, Duration::from_secs(cli.timeout), cli.per_page)?;
    let summaries = list_repo_commit_summaries(&client, &cli.username).await?;
    Ok(format_report(&summaries))
}

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize tracing for non-TTY mode (structured logging)
    if !Term::stdout().is_term() {
        let env_filter = match EnvFilter::try_from_default_env() {
            Ok(filter) => filter,
            Err(_) => EnvFilter::new("repotally=info,repotally_cli=info"),
        };

        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_target(false)
            .init();
    }

    let cli = Cli::parse();

    match run(cli).await {
        Ok(report) => {
            println!("{report}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            println!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
