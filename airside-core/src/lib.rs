//! airside-core
//!
//! The pure computation engine behind the airside workspace.
//!
//! - `timeline`: reconcile the input series into one provenance-tagged
//!   timeline, detect holiday spans, bucket dates into Monday weeks, and
//!   aggregate weekly totals with error bounds.
//! - `types`: consolidated re-exports of the shared DTOs so downstream
//!   crates can depend on `airside-core` only.
//!
//! Every function here is a synchronous, side-effect-free transformation
//! over already-fetched in-memory series; recomputation is safe to invoke
//! repeatedly and concurrently, and callers may simply discard a result.
#![warn(missing_docs)]

/// Timeline utilities for reconciliation, spans, weeks, and aggregation.
pub mod timeline;
pub mod types;

pub use timeline::aggregate::{error_ranges, week_summary};
pub use timeline::merge::reconcile;
pub use timeline::spans::{detect_spans, nearest_holiday};
pub use timeline::stats::accuracy_stats;
pub use timeline::weeks::{candidate_weeks, selectable_weeks};
pub use types::*;
