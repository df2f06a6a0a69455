//! The retention filter core.
//!
//! Three pieces compose into the per-reference verdict:
//!
//! - [`CompiledExcludePattern`] turns the space-separated glob list into a
//!   single matching predicate over branch names.
//! - [`ThresholdSet`] turns day-based retention knobs into absolute cutoff
//!   instants, all derived from one `now` captured at scan start.
//! - [`RetentionFilter`] classifies each reference by kind, applies the
//!   pattern short-circuit, resolves the reference's last activity through
//!   the provider adapter, and compares against the applicable cutoff.
//!
//! # Example
//!
//! ```rust,ignore
//! use aged_refs::{RetentionFilter, RetentionPolicy};
//! use chrono::Utc;
//!
//! let policy = RetentionPolicy::from_form("30", "14", "365", "main release")?;
//! let filter = RetentionFilter::new(&policy, Utc::now(), resolver);
//! for head in scan.heads() {
//!     if filter.is_excluded(scan.listing(), &head)? {
//!         continue; // too old, skip downstream work
//!     }
//!     scan.process(head);
//! }
//! ```

mod pattern;
mod retention;
mod threshold;

pub use pattern::CompiledExcludePattern;
pub use retention::RetentionFilter;
pub use threshold::ThresholdSet;
