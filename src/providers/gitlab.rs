//! GitLab adapter.
//!
//! GitLab's merge-request listing carries no usable last-activity time,
//! only the head SHA and the source project id. Resolving a merge
//! request's age therefore takes one secondary commit lookup through a
//! [`CommitLookup`] collaborator. That lookup's failure is downgraded to a
//! fail-open `NotFound` rather than propagated: the listing itself already
//! succeeded, and blocking a whole scan on one reference's extra round
//! trip is worse than re-evaluating it next scan.

use crate::Result;
use crate::models::Activity;
use crate::providers::{ActivityResolver, CommitLookup};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use tracing::warn;

/// One branch from a GitLab repository listing.
#[derive(Debug, Clone, Deserialize)]
pub struct GitlabBranch {
    /// Branch name.
    pub name: String,
    /// Head commit of the branch.
    pub commit: GitlabBranchCommit,
}

/// Head-commit summary carried by a branch listing entry.
#[derive(Debug, Clone, Deserialize)]
pub struct GitlabBranchCommit {
    /// Committed date of the head commit.
    pub committed_date: Option<DateTime<Utc>>,
}

/// One merge request from a GitLab project listing.
#[derive(Debug, Clone, Deserialize)]
pub struct GitlabMergeRequest {
    /// Merge request id; the scan displays it as the raw number string.
    pub id: u64,
    /// Project the merge request's source branch lives in.
    pub source_project_id: u64,
    /// Head SHA of the source branch.
    pub sha: String,
}

/// Per-scan GitLab listing data, fetched by the scanning host.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GitlabListing {
    /// All branches of the project.
    #[serde(default)]
    pub branches: Vec<GitlabBranch>,
    /// All open merge requests of the project.
    #[serde(default)]
    pub merge_requests: Vec<GitlabMergeRequest>,
}

/// Activity resolver for GitLab listings.
///
/// Merge requests are matched by their raw numeric id string. When no
/// commit-lookup handle is configured, merge requests resolve `NotFound`
/// (fail-open), mirroring a scan whose API client is unavailable.
#[derive(Debug, Clone, Default)]
pub struct GitlabResolver<L> {
    lookup: Option<L>,
}

impl<L: CommitLookup> GitlabResolver<L> {
    /// Creates a resolver with a commit-lookup collaborator.
    #[must_use]
    pub const fn new(lookup: L) -> Self {
        Self {
            lookup: Some(lookup),
        }
    }

    /// Creates a resolver without a commit lookup; merge requests will
    /// resolve `NotFound`.
    #[must_use]
    pub const fn without_lookup() -> Self {
        Self { lookup: None }
    }
}

impl<L: CommitLookup> ActivityResolver for GitlabResolver<L> {
    type Listing = GitlabListing;

    fn last_branch_activity(&self, listing: &GitlabListing, branch: &str) -> Result<Activity> {
        Ok(listing
            .branches
            .iter()
            .find(|b| b.name == branch)
            .and_then(|b| b.commit.committed_date)
            .into())
    }

    fn last_pull_request_activity(&self, listing: &GitlabListing, name: &str) -> Result<Activity> {
        let Some(mr) = listing
            .merge_requests
            .iter()
            .find(|mr| mr.id.to_string() == name)
        else {
            return Ok(Activity::NotFound);
        };
        let Some(lookup) = self.lookup.as_ref() else {
            return Ok(Activity::NotFound);
        };

        // Failure here is downgraded, not propagated: the listing already
        // succeeded and the reference gets re-evaluated next scan.
        match lookup.commit_timestamp(mr.source_project_id, &mr.sha) {
            Ok(ts) => Ok(Activity::At(ts)),
            Err(e) => {
                warn!(
                    merge_request = name,
                    sha = mr.sha,
                    error = %e,
                    "Commit lookup failed; keeping merge request"
                );
                Ok(Activity::NotFound)
            }
        }
    }
}
