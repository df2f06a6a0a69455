//! Provider adapters.
//!
//! Each supported host exposes last-activity timestamps differently:
//! nested commit fields for branches, update times or head SHAs for
//! pull/merge requests, embedded times for tags. One [`ActivityResolver`]
//! implementation per host maps the host's native listing objects onto the
//! three lookups the retention filter needs; the threshold and pattern
//! logic lives in the filter and is never duplicated per host.
//!
//! Listing data is fetched by the scanning host before evaluation starts;
//! resolvers only read it. The single exception is GitLab's merge-request
//! resolution, which needs a secondary commit lookup through a
//! [`CommitLookup`] collaborator.

pub mod bitbucket;
pub mod gitea;
pub mod github;
pub mod gitlab;

pub use bitbucket::{BitbucketListing, BitbucketResolver};
pub use gitea::{GiteaListing, GiteaResolver};
pub use github::{GithubListing, GithubResolver};
pub use gitlab::{GitlabListing, GitlabResolver};

use crate::Result;
use crate::models::{Activity, RefHead};
use chrono::{DateTime, Utc};

/// Maps one host's listing objects onto the lookups the retention filter
/// performs.
///
/// `Listing` is the per-scan, provider-supplied data the scanning host
/// already fetched; the resolver never fetches listings itself. Branch and
/// pull-request lookups may fail for transport reasons and return
/// `Result`; a reference that is simply absent from the listing is the
/// defined [`Activity::NotFound`] outcome, not an error.
pub trait ActivityResolver {
    /// Per-scan listing data for this provider.
    type Listing;

    /// Resolves the last-commit time of the named branch.
    fn last_branch_activity(&self, listing: &Self::Listing, branch: &str) -> Result<Activity>;

    /// Resolves the last-update time of the named pull/merge request.
    ///
    /// `name` is the provider-facing display identifier; each resolver
    /// owns its matching convention (`PR-<n>` vs a raw numeric id).
    fn last_pull_request_activity(&self, listing: &Self::Listing, name: &str) -> Result<Activity>;

    /// Resolves a tag's timestamp.
    ///
    /// Tags self-describe their timestamp on every supported host, so the
    /// default implementation reads it straight off the head with no
    /// round trip. Non-tag heads resolve `NotFound`.
    fn tag_timestamp(&self, head: &RefHead) -> Activity {
        match head {
            RefHead::Tag { timestamp, .. } => Activity::At(*timestamp),
            _ => Activity::NotFound,
        }
    }
}

/// Secondary commit lookup used by the GitLab adapter.
///
/// Given a project identifier and a commit SHA, returns that commit's
/// committed date. Implementations talk to the host API and may block for
/// one remote request; timeout and retry policy belong to the
/// implementation, not to the filter.
pub trait CommitLookup {
    /// Returns the committed date of the given commit.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Provider`] when the host cannot serve the
    /// commit; the GitLab adapter downgrades that to a fail-open
    /// [`Activity::NotFound`].
    fn commit_timestamp(&self, project_id: u64, sha: &str) -> Result<DateTime<Utc>>;
}
