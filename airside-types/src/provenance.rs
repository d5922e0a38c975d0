//! Provenance tagging for reconciled timeline points and holiday spans.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Which source series a reconciled value came from.
///
/// Ordering of the variants mirrors reconciliation precedence: observed
/// data always wins, the nowcast supersedes both models, and the
/// challenger outranks only the baseline forecast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Provenance {
    /// Ground truth reported for the day.
    Observed,
    /// High-precision short-horizon forecast overriding the models.
    Nowcast,
    /// Secondary-model forecast filling dates the baseline would own.
    Challenger,
    /// Primary forecast model.
    Forecast,
    /// No source had a usable value for the day.
    Missing,
}

impl Provenance {
    /// True for ground-truth observations.
    #[must_use]
    pub const fn is_observed(self) -> bool {
        matches!(self, Self::Observed)
    }

    /// True when the value was produced by a model rather than observed.
    #[must_use]
    pub const fn is_estimated(self) -> bool {
        matches!(self, Self::Nowcast | Self::Challenger | Self::Forecast)
    }
}

/// One point of the reconciled timeline.
///
/// Exactly one point exists per distinct date in the union of the input
/// series; `value` is `None` only for `Missing` provenance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReconciledPoint {
    /// Calendar day of the point.
    pub date: NaiveDate,
    /// Resolved throughput value, if any source supplied one.
    pub value: Option<f64>,
    /// Source the value was taken from.
    pub provenance: Provenance,
}

impl ReconciledPoint {
    /// True when the point carries a value usable in aggregation.
    #[must_use]
    pub const fn is_usable(&self) -> bool {
        self.value.is_some()
    }
}

/// A maximal contiguous run of same-label holiday dates, boundaries inclusive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HolidaySpan {
    /// First flagged day of the run.
    pub start: NaiveDate,
    /// Last flagged day of the run; never before `start`.
    pub end: NaiveDate,
    /// Holiday name shared by every day of the run.
    pub label: String,
}

impl HolidaySpan {
    /// True when `date` falls inside the span.
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

/// Distance from a date to its nearest holiday span.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HolidayProximity {
    /// Signed day count to the nearest span day; negative before the span.
    pub offset_days: i64,
    /// Label of the nearest span.
    pub label: String,
}
