//! Bitbucket adapter.

use crate::Result;
use crate::models::Activity;
use crate::providers::ActivityResolver;
use chrono::{DateTime, Utc};
use serde::Deserialize;

/// One branch from a Bitbucket repository listing.
#[derive(Debug, Clone, Deserialize)]
pub struct BitbucketBranch {
    /// Branch name.
    pub name: String,
    /// Commit the branch points at.
    pub target: BitbucketTarget,
}

/// Target-commit summary carried by a branch listing entry.
#[derive(Debug, Clone, Deserialize)]
pub struct BitbucketTarget {
    /// Commit date of the target.
    pub date: Option<DateTime<Utc>>,
}

/// One pull request from a Bitbucket repository listing.
#[derive(Debug, Clone, Deserialize)]
pub struct BitbucketPullRequest {
    /// Pull request id; displayed to the scan as `PR-<id>`.
    pub id: u64,
    /// Last update time of the pull request.
    pub updated_on: Option<DateTime<Utc>>,
}

/// Per-scan Bitbucket listing data, fetched by the scanning host.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BitbucketListing {
    /// All branches of the repository.
    #[serde(default)]
    pub branches: Vec<BitbucketBranch>,
    /// All open pull requests of the repository.
    #[serde(default)]
    pub pull_requests: Vec<BitbucketPullRequest>,
}

/// Activity resolver for Bitbucket listings.
///
/// Pull requests are matched by their `PR-<id>` display name.
#[derive(Debug, Clone, Copy, Default)]
pub struct BitbucketResolver;

impl ActivityResolver for BitbucketResolver {
    type Listing = BitbucketListing;

    fn last_branch_activity(&self, listing: &BitbucketListing, branch: &str) -> Result<Activity> {
        Ok(listing
            .branches
            .iter()
            .find(|b| b.name == branch)
            .and_then(|b| b.target.date)
            .into())
    }

    fn last_pull_request_activity(
        &self,
        listing: &BitbucketListing,
        name: &str,
    ) -> Result<Activity> {
        Ok(listing
            .pull_requests
            .iter()
            .find(|p| format!("PR-{}", p.id) == name)
            .and_then(|p| p.updated_on)
            .into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn ts(day: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, day, 22, 15, 0)
            .single()
            .expect("valid test date")
    }

    fn listing() -> BitbucketListing {
        BitbucketListing {
            branches: vec![BitbucketBranch {
                name: "staging".to_string(),
                target: BitbucketTarget { date: Some(ts(4)) },
            }],
            pull_requests: vec![BitbucketPullRequest {
                id: 9,
                updated_on: Some(ts(6)),
            }],
        }
    }

    #[test]
    fn test_branch_lookup() {
        let resolver = BitbucketResolver;
        assert_eq!(
            resolver
                .last_branch_activity(&listing(), "staging")
                .expect("in-memory listing"),
            Activity::At(ts(4))
        );
        assert_eq!(
            resolver
                .last_branch_activity(&listing(), "missing")
                .expect("in-memory listing"),
            Activity::NotFound
        );
    }

    #[test]
    fn test_pull_request_lookup() {
        let resolver = BitbucketResolver;
        assert_eq!(
            resolver
                .last_pull_request_activity(&listing(), "PR-9")
                .expect("in-memory listing"),
            Activity::At(ts(6))
        );
        assert_eq!(
            resolver
                .last_pull_request_activity(&listing(), "PR-10")
                .expect("in-memory listing"),
            Activity::NotFound
        );
    }

    #[test]
    fn test_listing_deserializes_from_payload() {
        let json = r#"{
            "branches": [
                {"name": "staging", "target": {"date": "2024-05-04T22:15:00Z"}}
            ],
            "pull_requests": [
                {"id": 9, "updated_on": "2024-05-06T22:15:00Z"}
            ]
        }"#;
        let listing: BitbucketListing = serde_json::from_str(json).expect("valid payload");
        assert_eq!(listing.pull_requests[0].id, 9);
    }
}
