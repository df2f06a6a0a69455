//! Gitea adapter.

use crate::Result;
use crate::models::Activity;
use crate::providers::ActivityResolver;
use chrono::{DateTime, Utc};
use serde::Deserialize;

/// One branch from a Gitea repository listing.
#[derive(Debug, Clone, Deserialize)]
pub struct GiteaBranch {
    /// Branch name.
    pub name: String,
    /// Head commit of the branch.
    pub commit: GiteaBranchCommit,
}

/// Head-commit summary carried by a branch listing entry.
#[derive(Debug, Clone, Deserialize)]
pub struct GiteaBranchCommit {
    /// Commit timestamp.
    pub timestamp: Option<DateTime<Utc>>,
}

/// One pull request from a Gitea repository listing.
#[derive(Debug, Clone, Deserialize)]
pub struct GiteaPullRequest {
    /// Pull request number; displayed to the scan as `PR-<number>`.
    pub number: u64,
    /// Last update time. Gitea omits this on never-updated pulls, and
    /// some versions report an epoch-zero placeholder instead; both
    /// resolve fail-open.
    pub updated_at: Option<DateTime<Utc>>,
}

/// Per-scan Gitea listing data, fetched by the scanning host.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GiteaListing {
    /// All branches of the repository.
    #[serde(default)]
    pub branches: Vec<GiteaBranch>,
    /// All open pull requests of the repository.
    #[serde(default)]
    pub pulls: Vec<GiteaPullRequest>,
}

/// Activity resolver for Gitea listings.
///
/// Pull requests are matched by their `PR-<number>` display name.
#[derive(Debug, Clone, Copy, Default)]
pub struct GiteaResolver;

impl ActivityResolver for GiteaResolver {
    type Listing = GiteaListing;

    fn last_branch_activity(&self, listing: &GiteaListing, branch: &str) -> Result<Activity> {
        Ok(listing
            .branches
            .iter()
            .find(|b| b.name == branch)
            .and_then(|b| b.commit.timestamp)
            .into())
    }

    fn last_pull_request_activity(&self, listing: &GiteaListing, name: &str) -> Result<Activity> {
        Ok(listing
            .pulls
            .iter()
            .find(|p| format!("PR-{}", p.number) == name)
            .and_then(|p| p.updated_at)
            // Epoch-zero is a placeholder for "never updated", not a real
            // update time.
            .filter(|ts| ts.timestamp_millis() > 0)
            .into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn ts(day: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, day, 16, 45, 0)
            .single()
            .expect("valid test date")
    }

    #[test]
    fn test_branch_lookup() {
        let resolver = GiteaResolver;
        let listing = GiteaListing {
            branches: vec![GiteaBranch {
                name: "develop".to_string(),
                commit: GiteaBranchCommit {
                    timestamp: Some(ts(3)),
                },
            }],
            pulls: vec![],
        };

        assert_eq!(
            resolver
                .last_branch_activity(&listing, "develop")
                .expect("in-memory listing"),
            Activity::At(ts(3))
        );
        assert_eq!(
            resolver
                .last_branch_activity(&listing, "missing")
                .expect("in-memory listing"),
            Activity::NotFound
        );
    }

    #[test]
    fn test_pull_request_lookup() {
        let resolver = GiteaResolver;
        let listing = GiteaListing {
            branches: vec![],
            pulls: vec![
                GiteaPullRequest {
                    number: 5,
                    updated_at: Some(ts(8)),
                },
                GiteaPullRequest {
                    number: 6,
                    updated_at: None,
                },
            ],
        };

        assert_eq!(
            resolver
                .last_pull_request_activity(&listing, "PR-5")
                .expect("in-memory listing"),
            Activity::At(ts(8))
        );
        // Never-updated pull: fail-open.
        assert_eq!(
            resolver
                .last_pull_request_activity(&listing, "PR-6")
                .expect("in-memory listing"),
            Activity::NotFound
        );
        assert_eq!(
            resolver
                .last_pull_request_activity(&listing, "PR-7")
                .expect("in-memory listing"),
            Activity::NotFound
        );
    }

    #[test]
    fn test_epoch_zero_update_resolves_not_found() {
        let resolver = GiteaResolver;
        let epoch = Utc
            .timestamp_opt(0, 0)
            .single()
            .expect("epoch is representable");
        let listing = GiteaListing {
            branches: vec![],
            pulls: vec![GiteaPullRequest {
                number: 9,
                updated_at: Some(epoch),
            }],
        };

        // An epoch-zero placeholder must read as "never updated", not as
        // a 1970 update that any cutoff would exclude.
        assert_eq!(
            resolver
                .last_pull_request_activity(&listing, "PR-9")
                .expect("in-memory listing"),
            Activity::NotFound
        );
    }

    #[test]
    fn test_listing_deserializes_from_payload() {
        let json = r#"{
            "branches": [
                {"name": "develop", "commit": {"timestamp": "2024-05-03T16:45:00Z"}}
            ],
            "pulls": [
                {"number": 5, "updated_at": null}
            ]
        }"#;
        let listing: GiteaListing = serde_json::from_str(json).expect("valid payload");
        assert_eq!(listing.branches[0].name, "develop");
        assert!(listing.pulls[0].updated_at.is_none());
    }
}
