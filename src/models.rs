//! Reference model types.
//!
//! A scan hands the filter one [`RefHead`] per discovered reference. The
//! head carries the reference's kind and its provider-facing name; tag
//! heads additionally embed their own timestamp, because every supported
//! host reports tag times directly in the listing object.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The kind of a source-control reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RefKind {
    /// A branch head.
    Branch,
    /// A pull or merge request head.
    PullRequest,
    /// A tag.
    Tag,
}

impl RefKind {
    /// Returns the canonical lowercase name of this kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Branch => "branch",
            Self::PullRequest => "pull-request",
            Self::Tag => "tag",
        }
    }
}

impl std::fmt::Display for RefKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A candidate reference handed to the filter by the scanning host.
///
/// Pull-request names are provider-facing display identifiers: `PR-<n>`
/// for GitHub, Gitea, and Bitbucket, the raw merge-request id string for
/// GitLab. Resolvers own the matching convention.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum RefHead {
    /// A branch, identified by name.
    Branch {
        /// Branch name, e.g. `feature/widgets`.
        name: String,
    },
    /// A pull or merge request, identified by display name.
    PullRequest {
        /// Display identifier, e.g. `PR-42` or `131`.
        name: String,
    },
    /// A tag; the listing object self-describes its timestamp.
    Tag {
        /// Tag name, e.g. `v1.4.0`.
        name: String,
        /// Tag creation or tagged-commit time, as reported by the host.
        timestamp: DateTime<Utc>,
    },
}

impl RefHead {
    /// Creates a branch head.
    pub fn branch(name: impl Into<String>) -> Self {
        Self::Branch { name: name.into() }
    }

    /// Creates a pull-request head.
    pub fn pull_request(name: impl Into<String>) -> Self {
        Self::PullRequest { name: name.into() }
    }

    /// Creates a tag head with its embedded timestamp.
    pub fn tag(name: impl Into<String>, timestamp: DateTime<Utc>) -> Self {
        Self::Tag {
            name: name.into(),
            timestamp,
        }
    }

    /// Returns the kind of this reference.
    #[must_use]
    pub const fn kind(&self) -> RefKind {
        match self {
            Self::Branch { .. } => RefKind::Branch,
            Self::PullRequest { .. } => RefKind::PullRequest,
            Self::Tag { .. } => RefKind::Tag,
        }
    }

    /// Returns the reference's display name.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Branch { name } | Self::PullRequest { name } | Self::Tag { name, .. } => name,
        }
    }
}

/// Resolution outcome for a reference's most recent activity.
///
/// Absence is explicit: a reference that vanished between listing and
/// evaluation, or whose secondary lookup came back empty, resolves to
/// [`Activity::NotFound`], never to an epoch-zero timestamp. The filter
/// treats `NotFound` as "keep" for every kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activity {
    /// The most recent relevant activity happened at this instant.
    At(DateTime<Utc>),
    /// No activity data could be resolved for the reference.
    NotFound,
}

impl Activity {
    /// Returns `true` if no activity data was resolved.
    #[must_use]
    pub const fn is_not_found(self) -> bool {
        matches!(self, Self::NotFound)
    }

    /// Returns the resolved instant, if any.
    #[must_use]
    pub const fn instant(self) -> Option<DateTime<Utc>> {
        match self {
            Self::At(ts) => Some(ts),
            Self::NotFound => None,
        }
    }
}

impl From<Option<DateTime<Utc>>> for Activity {
    fn from(value: Option<DateTime<Utc>>) -> Self {
        value.map_or(Self::NotFound, Self::At)
    }
}
