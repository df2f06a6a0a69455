//! # aged-refs
//!
//! Retention filtering for aged source-control references during CI
//! repository scans.
//!
//! Given a retention policy (days per reference kind plus a branch
//! exclude-pattern list), the filter answers "exclude or keep?" for one
//! discovered reference at a time — a branch, a pull/merge request, or a
//! tag — before the scanning host spends money on builds for it. Listing
//! data is supplied by the host; this crate performs no discovery and no
//! network I/O of its own.
//!
//! ## Design
//!
//! - Thresholds are computed once per scan from a single `now`, so every
//!   reference in a scan is judged against the same instant.
//! - A reference whose activity cannot be resolved is always kept
//!   (fail-open): missing data never reads as "infinitely old."
//! - Exclude patterns spare branches only; they never apply to pull
//!   requests or tags.
//!
//! ## Example
//!
//! ```rust
//! use aged_refs::{RefHead, RetentionFilter, RetentionPolicy};
//! use aged_refs::providers::gitea::{GiteaListing, GiteaResolver};
//! use chrono::Utc;
//!
//! # fn main() -> aged_refs::Result<()> {
//! let policy = RetentionPolicy::from_form("30", "14", "0", "release main")?;
//! let filter = RetentionFilter::new(&policy, Utc::now(), GiteaResolver);
//!
//! let listing = GiteaListing::default();
//! let head = RefHead::branch("feature/widgets");
//! // Branch absent from an empty listing: fail-open, kept.
//! assert!(!filter.is_excluded(&listing, &head)?);
//! # Ok(())
//! # }
//! ```

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![warn(missing_docs)]
#![forbid(unsafe_code)]
// multiple_crate_versions is inherently crate-level (detects duplicate transitive dependencies).
#![allow(clippy::multiple_crate_versions)]

use thiserror::Error as ThisError;

// Module declarations
pub mod filter;
pub mod models;
pub mod policy;
pub mod providers;

// Re-exports for convenience
pub use filter::{CompiledExcludePattern, RetentionFilter, ThresholdSet};
pub use models::{Activity, RefHead, RefKind};
pub use policy::RetentionPolicy;
pub use providers::{ActivityResolver, CommitLookup};

/// Error type for aged-refs operations.
///
/// Uses `thiserror` for automatic `Display` and `Error` trait implementations.
///
/// # Error Variant Triggers
///
/// | Variant | Raised When |
/// |---------|-------------|
/// | `InvalidRetention` | A retention form value fails to parse as a non-negative integer |
/// | `Provider` | A resolver's data access fails for transport reasons |
#[derive(Debug, ThisError)]
pub enum Error {
    /// A retention period in the configuration surface is not a
    /// non-negative integer.
    ///
    /// Raised at policy construction, never during evaluation: a
    /// misconfigured policy fails the whole scan setup immediately.
    #[error("invalid retention period '{value}' for {field}: expected a non-negative integer")]
    InvalidRetention {
        /// Which configuration field was malformed.
        field: &'static str,
        /// The rejected raw value.
        value: String,
    },

    /// A provider data access failed for transport reasons.
    ///
    /// Raised when a resolver cannot read the listing data it was handed.
    /// Distinct from a reference that is merely absent from the listing:
    /// absence is the defined [`Activity::NotFound`] outcome and is never
    /// an error.
    #[error("provider '{provider}' failed during {operation}: {cause}")]
    Provider {
        /// The provider adapter reporting the failure.
        provider: &'static str,
        /// The operation that failed.
        operation: &'static str,
        /// The underlying cause.
        cause: String,
    },
}

/// Result type alias for aged-refs operations.
pub type Result<T> = std::result::Result<T, Error>;
