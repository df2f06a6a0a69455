//! Retention policy configuration.
//!
//! One [`RetentionPolicy`] is bound per scan, before any reference is
//! evaluated. The surface form is four string-typed values (three day
//! counts plus a space-separated branch exclude list), parsed and
//! validated at construction; a malformed day count fails the scan setup
//! immediately instead of surfacing mid-scan.

use crate::{Error, Result};
use serde::Deserialize;

/// Immutable retention policy for one scan.
///
/// Each retention knob is a number of days; `0` disables age-based
/// exclusion for that kind. The exclude filter is a space-separated list
/// of branch-name globs (`*` is the only wildcard) sparing matching
/// branches from age checks; it never applies to pull requests or tags.
///
/// # Example
///
/// ```rust
/// use aged_refs::RetentionPolicy;
///
/// let policy = RetentionPolicy::new()
///     .with_branch_retention_days(30)
///     .with_tag_retention_days(365)
///     .with_branch_exclude_filter("release main hotfix-*");
/// assert_eq!(policy.branch_retention_days, 30);
/// assert_eq!(policy.pr_retention_days, 0);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RetentionPolicy {
    /// Retention period in days for branches (0 = no limit).
    pub branch_retention_days: u32,

    /// Retention period in days for pull requests (0 = no limit).
    pub pr_retention_days: u32,

    /// Retention period in days for tags (0 = no limit).
    pub tag_retention_days: u32,

    /// Space-separated branch-name globs to spare from age-based
    /// exclusion. For example: `release main hotfix-*`.
    pub branch_exclude_filter: String,
}

impl RetentionPolicy {
    /// Creates a policy with all filtering disabled.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a policy from the string-typed configuration surface.
    ///
    /// Empty day fields parse as `0` (no limit), matching a form field
    /// the user left blank. Anything else must be a non-negative integer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRetention`] when a day value is not a
    /// non-negative integer.
    pub fn from_form(
        branch_retention_days: &str,
        pr_retention_days: &str,
        tag_retention_days: &str,
        branch_exclude_filter: &str,
    ) -> Result<Self> {
        Ok(Self {
            branch_retention_days: parse_days("branchRetentionDays", branch_retention_days)?,
            pr_retention_days: parse_days("prRetentionDays", pr_retention_days)?,
            tag_retention_days: parse_days("tagRetentionDays", tag_retention_days)?,
            branch_exclude_filter: branch_exclude_filter.to_string(),
        })
    }

    /// Sets the branch retention period.
    #[must_use]
    pub const fn with_branch_retention_days(mut self, days: u32) -> Self {
        self.branch_retention_days = days;
        self
    }

    /// Sets the pull-request retention period.
    #[must_use]
    pub const fn with_pr_retention_days(mut self, days: u32) -> Self {
        self.pr_retention_days = days;
        self
    }

    /// Sets the tag retention period.
    #[must_use]
    pub const fn with_tag_retention_days(mut self, days: u32) -> Self {
        self.tag_retention_days = days;
        self
    }

    /// Sets the branch exclude filter.
    #[must_use]
    pub fn with_branch_exclude_filter(mut self, filter: impl Into<String>) -> Self {
        self.branch_exclude_filter = filter.into();
        self
    }
}

/// Parses one retention day count from its string surface form.
fn parse_days(field: &'static str, value: &str) -> Result<u32> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(0);
    }
    trimmed.parse().map_err(|_| Error::InvalidRetention {
        field,
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test]
    fn test_policy_default_disables_everything() {
        let policy = RetentionPolicy::new();
        assert_eq!(policy.branch_retention_days, 0);
        assert_eq!(policy.pr_retention_days, 0);
        assert_eq!(policy.tag_retention_days, 0);
        assert!(policy.branch_exclude_filter.is_empty());
    }

    #[test]
    fn test_policy_builders() {
        let policy = RetentionPolicy::new()
            .with_branch_retention_days(30)
            .with_pr_retention_days(14)
            .with_tag_retention_days(365)
            .with_branch_exclude_filter("release main");

        assert_eq!(policy.branch_retention_days, 30);
        assert_eq!(policy.pr_retention_days, 14);
        assert_eq!(policy.tag_retention_days, 365);
        assert_eq!(policy.branch_exclude_filter, "release main");
    }

    #[test]
    fn test_from_form_parses_values() {
        let policy = RetentionPolicy::from_form("30", "14", "365", "release main hotfix-*")
            .expect("valid form values");
        assert_eq!(policy.branch_retention_days, 30);
        assert_eq!(policy.pr_retention_days, 14);
        assert_eq!(policy.tag_retention_days, 365);
        assert_eq!(policy.branch_exclude_filter, "release main hotfix-*");
    }

    #[test_case("", "", "" ; "all blank")]
    #[test_case("0", "0", "0" ; "explicit zeros")]
    #[test_case(" 0 ", "0", " " ; "whitespace tolerated")]
    fn test_from_form_blank_and_zero_disable(branch: &str, pr: &str, tag: &str) {
        let policy = RetentionPolicy::from_form(branch, pr, tag, "").expect("valid form values");
        assert_eq!(policy.branch_retention_days, 0);
        assert_eq!(policy.pr_retention_days, 0);
        assert_eq!(policy.tag_retention_days, 0);
    }

    #[test_case("abc" ; "non numeric")]
    #[test_case("-3" ; "negative")]
    #[test_case("3.5" ; "fractional")]
    fn test_from_form_rejects_bad_values(bad: &str) {
        let err = RetentionPolicy::from_form(bad, "0", "0", "").expect_err("must fail");
        assert!(matches!(
            err,
            crate::Error::InvalidRetention {
                field: "branchRetentionDays",
                ..
            }
        ));
    }

    #[test]
    fn test_from_form_names_failing_field() {
        let err = RetentionPolicy::from_form("1", "2", "x", "").expect_err("must fail");
        assert!(matches!(
            err,
            crate::Error::InvalidRetention {
                field: "tagRetentionDays",
                ..
            }
        ));
    }

    #[test]
    fn test_policy_deserialize_with_defaults() {
        let policy: RetentionPolicy =
            serde_json::from_str(r#"{"branch_retention_days": 30}"#).expect("valid json");
        assert_eq!(policy.branch_retention_days, 30);
        assert_eq!(policy.pr_retention_days, 0);
        assert!(policy.branch_exclude_filter.is_empty());
    }
}
