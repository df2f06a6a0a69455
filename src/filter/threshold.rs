//! Cutoff computation from retention periods.

use crate::models::RefKind;
use crate::policy::RetentionPolicy;
use chrono::{DateTime, Duration, Utc};

/// Absolute cutoff instants for one scan, derived from a
/// [`RetentionPolicy`] and a single `now`.
///
/// `None` means age-based exclusion is disabled for that kind. All three
/// cutoffs derive from the same instant, captured once at filter
/// construction; a long-running scan therefore judges its first and last
/// reference against identical thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThresholdSet {
    /// Cutoff for branch last-commit times.
    pub branch: Option<DateTime<Utc>>,
    /// Cutoff for pull-request last-update times.
    pub pull_request: Option<DateTime<Utc>>,
    /// Cutoff for tag timestamps.
    pub tag: Option<DateTime<Utc>>,
}

impl ThresholdSet {
    /// Computes the cutoffs for a policy at the given instant.
    ///
    /// For each kind independently: 0 days disables the cutoff, otherwise
    /// the cutoff is `now - days * 24h`. References strictly older than
    /// the cutoff become exclusion candidates; a reference exactly at the
    /// cutoff is retained.
    #[must_use]
    pub fn compute(policy: &RetentionPolicy, now: DateTime<Utc>) -> Self {
        Self {
            branch: cutoff(policy.branch_retention_days, now),
            pull_request: cutoff(policy.pr_retention_days, now),
            tag: cutoff(policy.tag_retention_days, now),
        }
    }

    /// Returns the cutoff applicable to the given reference kind.
    #[must_use]
    pub const fn cutoff_for(&self, kind: RefKind) -> Option<DateTime<Utc>> {
        match kind {
            RefKind::Branch => self.branch,
            RefKind::PullRequest => self.pull_request,
            RefKind::Tag => self.tag,
        }
    }
}

/// Converts one retention knob into an absolute cutoff.
fn cutoff(days: u32, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
    if days == 0 {
        return None;
    }
    now.checked_sub_signed(Duration::days(i64::from(days)))
}
