//! GitHub adapter.

use crate::Result;
use crate::models::Activity;
use crate::providers::ActivityResolver;
use chrono::{DateTime, Utc};
use serde::Deserialize;

/// One branch from a GitHub repository listing.
#[derive(Debug, Clone, Deserialize)]
pub struct GithubBranch {
    /// Branch name.
    pub name: String,
    /// Head commit of the branch.
    pub commit: GithubBranchCommit,
}

/// Head-commit summary carried by a branch listing entry.
#[derive(Debug, Clone, Deserialize)]
pub struct GithubBranchCommit {
    /// Commit SHA.
    pub sha: String,
    /// Committed date of the head commit, when the listing includes it.
    pub committed_date: Option<DateTime<Utc>>,
}

/// One pull request from a GitHub repository listing.
#[derive(Debug, Clone, Deserialize)]
pub struct GithubPullRequest {
    /// Pull request number; displayed to the scan as `PR-<number>`.
    pub number: u64,
    /// Last update time of the pull request.
    pub updated_at: Option<DateTime<Utc>>,
}

/// Per-scan GitHub listing data, fetched by the scanning host.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GithubListing {
    /// All branches of the repository.
    #[serde(default)]
    pub branches: Vec<GithubBranch>,
    /// All open pull requests of the repository.
    #[serde(default)]
    pub pulls: Vec<GithubPullRequest>,
}

/// Activity resolver for GitHub listings.
///
/// Pull requests are matched by their `PR-<number>` display name.
#[derive(Debug, Clone, Copy, Default)]
pub struct GithubResolver;

impl ActivityResolver for GithubResolver {
    type Listing = GithubListing;

    fn last_branch_activity(&self, listing: &GithubListing, branch: &str) -> Result<Activity> {
        Ok(listing
            .branches
            .iter()
            .find(|b| b.name == branch)
            .and_then(|b| b.commit.committed_date)
            .into())
    }

    fn last_pull_request_activity(&self, listing: &GithubListing, name: &str) -> Result<Activity> {
        Ok(listing
            .pulls
            .iter()
            .find(|p| format!("PR-{}", p.number) == name)
            .and_then(|p| p.updated_at)
            .into())
    }
}
