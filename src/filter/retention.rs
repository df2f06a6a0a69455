//! Per-reference exclusion verdicts.

use crate::Result;
use crate::filter::pattern::CompiledExcludePattern;
use crate::filter::threshold::ThresholdSet;
use crate::models::{Activity, RefHead};
use crate::policy::RetentionPolicy;
use crate::providers::ActivityResolver;
use chrono::{DateTime, Utc};
use tracing::debug;

/// The per-scan retention filter.
///
/// Built once per scan from a [`RetentionPolicy`], a `now` instant, and a
/// provider's [`ActivityResolver`]; evaluated once per discovered
/// reference. Evaluation is a pure function of the inputs plus the single
/// resolver call, holds no interior mutability, and is safe to share by
/// reference across threads when the host parallelizes a scan.
///
/// # Thread Safety
///
/// All state is read-only after construction; concurrent `is_excluded`
/// calls need no locking.
pub struct RetentionFilter<R> {
    /// Absolute cutoffs, one per reference kind.
    thresholds: ThresholdSet,

    /// Compiled branch exclude list.
    exclude: CompiledExcludePattern,

    /// Provider adapter resolving last-activity timestamps.
    resolver: R,
}

impl<R: ActivityResolver> RetentionFilter<R> {
    /// Creates a filter for one scan.
    ///
    /// `now` must be captured once by the caller at scan start; threading
    /// it through explicitly keeps every reference in the scan judged
    /// against the same instant.
    #[must_use]
    pub fn new(policy: &RetentionPolicy, now: DateTime<Utc>, resolver: R) -> Self {
        Self {
            thresholds: ThresholdSet::compute(policy, now),
            exclude: CompiledExcludePattern::compile(&policy.branch_exclude_filter),
            resolver,
        }
    }

    /// Returns the cutoffs this filter evaluates against.
    #[must_use]
    pub const fn thresholds(&self) -> &ThresholdSet {
        &self.thresholds
    }

    /// Decides whether a reference should be excluded from the scan.
    ///
    /// Returns `Ok(true)` only when the reference's resolved activity is
    /// strictly older than the cutoff for its kind. A reference exactly at
    /// the cutoff is retained. Unresolvable activity ([`Activity::NotFound`])
    /// always retains the reference, for every kind. Branches matching the
    /// exclude pattern are retained without any age check.
    ///
    /// # Errors
    ///
    /// Propagates [`crate::Error::Provider`] when the resolver fails for
    /// transport reasons. Absence of the reference from the listing is not
    /// an error.
    pub fn is_excluded(&self, listing: &R::Listing, head: &RefHead) -> Result<bool> {
        let kind = head.kind();
        metrics::counter!("aged_refs_evaluations_total", "kind" => kind.as_str()).increment(1);

        let excluded = match head {
            RefHead::Branch { name } => self.branch_excluded(listing, name)?,
            RefHead::PullRequest { name } => self.pull_request_excluded(listing, name)?,
            RefHead::Tag { .. } => self.tag_excluded(head),
        };

        if excluded {
            metrics::counter!("aged_refs_excluded_total", "kind" => kind.as_str()).increment(1);
            debug!(kind = kind.as_str(), name = head.name(), "Reference excluded as aged");
        }

        Ok(excluded)
    }

    fn branch_excluded(&self, listing: &R::Listing, name: &str) -> Result<bool> {
        // Spared branches short-circuit the age check entirely.
        if self.exclude.matches(name) {
            debug!(name, "Branch spared by exclude pattern");
            return Ok(false);
        }
        let Some(cutoff) = self.thresholds.branch else {
            return Ok(false);
        };
        let activity = self.resolver.last_branch_activity(listing, name)?;
        Ok(aged_out(activity, cutoff))
    }

    fn pull_request_excluded(&self, listing: &R::Listing, name: &str) -> Result<bool> {
        let Some(cutoff) = self.thresholds.pull_request else {
            return Ok(false);
        };
        let activity = self.resolver.last_pull_request_activity(listing, name)?;
        Ok(aged_out(activity, cutoff))
    }

    fn tag_excluded(&self, head: &RefHead) -> bool {
        let Some(cutoff) = self.thresholds.tag else {
            return false;
        };
        aged_out(self.resolver.tag_timestamp(head), cutoff)
    }
}

/// Applies the strict-boundary comparison; `NotFound` never ages out.
fn aged_out(activity: Activity, cutoff: DateTime<Utc>) -> bool {
    match activity {
        Activity::At(ts) => ts < cutoff,
        Activity::NotFound => false,
    }
}
