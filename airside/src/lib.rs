//! Airside reconciles independently-produced airport-throughput series into
//! one consistent timeline and aggregates it into error-bounded weekly
//! totals.
//!
//! Overview
//! - Merges observed history, a baseline forecast, a short-horizon nowcast,
//!   and an optional challenger forecast under a strict precedence rule,
//!   tagging every date with the source that supplied it.
//! - Detects contiguous holiday windows for annotation overlays.
//! - Buckets the timeline into Monday-through-Sunday weeks and keeps only
//!   those the external market-availability feed knows about.
//! - Sums a chosen week day by day, tracking how much of the total is
//!   estimated, and bounds that portion with globally-derived error
//!   statistics.
//!
//! Key behaviors and trade-offs
//! - Precedence: observed data always wins, the nowcast supersedes both
//!   models, and the challenger outranks only the baseline forecast. Null
//!   values never claim a date; they fall through to the next source.
//! - Integrity: a duplicated date inside any single input series aborts
//!   the recomputation with [`AirsideError::DuplicateDate`] rather than
//!   silently picking a side.
//! - Absence is a value: empty span lists, empty week lists, and `None`
//!   weekly totals are ordinary results. Only [`Airside::latest_week`],
//!   which must hand the caller one concrete week, reports
//!   [`AirsideError::NoActiveWeeks`].
//! - Uncertainty: error ranges scale only the estimated share of a weekly
//!   total, so fully-observed weeks collapse to certainty.
//!
//! Building an engine over already-fetched series:
//! ```rust,ignore
//! use airside::Airside;
//!
//! let engine = Airside::builder()
//!     .history(history_rows)
//!     .forecast(forecast_rows)
//!     .nowcast(nowcast_points)
//!     .challenger(challenger_points)
//!     .active_markets(market_keys)
//!     .validation(validation_records)
//!     .build()?;
//!
//! let week = engine.latest_week()?;
//! let summary = engine.week_summary(week);
//! let ranges = engine.error_ranges(&summary);
//! ```
//!
//! See `airside/examples/` for a runnable end-to-end walkthrough.
#![warn(missing_docs)]

pub(crate) mod core;
mod snapshot;

pub use crate::core::{Airside, AirsideBuilder};
pub use snapshot::Headline;

// Re-export core types for convenience
pub use airside_core::{
    AccuracyStats,
    AirsideError,
    AnnotatedValue,
    ChallengerMode,
    DailyValue,
    EngineConfig,
    ErrorRanges,
    HolidayProximity,
    HolidaySpan,
    Provenance,
    ReconciledPoint,
    SourceSet,
    ValidationRecord,
    ValueRange,
    WeekKey,
    WeeklySummary,
    nearest_holiday,
};
