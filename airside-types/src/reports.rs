//! Result envelopes produced by the aggregation engine.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::provenance::ReconciledPoint;
use crate::week::WeekKey;

/// One day of recorded ground truth against the forecast made for it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValidationRecord {
    /// Day the comparison refers to.
    pub date: NaiveDate,
    /// Observed throughput.
    pub actual: f64,
    /// Throughput the model had predicted for the day.
    pub predicted: f64,
}

impl ValidationRecord {
    /// Absolute percentage error of the prediction.
    ///
    /// `None` when `actual` is not positive, since the ratio is undefined.
    #[must_use]
    pub fn error_pct(&self) -> Option<f64> {
        (self.actual > 0.0).then(|| ((self.actual - self.predicted).abs() / self.actual) * 100.0)
    }
}

/// Global forecast-error statistics derived from validation records.
///
/// Both figures are percentages; zeroes mean no usable record was available
/// and downstream error ranges degrade to `None`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct AccuracyStats {
    /// Largest absolute percentage error on record.
    pub worst_error_pct: f64,
    /// Mean absolute percentage error.
    pub mean_error_pct: f64,
}

/// An inclusive range of rounded throughput values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValueRange {
    /// Lower bound.
    pub min: i64,
    /// Upper bound.
    pub max: i64,
}

/// Error-bounded ranges around a weekly total.
///
/// `worst` scales the estimated portion by the largest recorded error,
/// `typical` by the mean. A side is `None` when the total is unknown or
/// the corresponding percentage is exactly zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ErrorRanges {
    /// Range under the worst recorded error.
    pub worst: Option<ValueRange>,
    /// Range under the mean recorded error.
    pub typical: Option<ValueRange>,
}

/// Aggregate of one Monday-through-Sunday week of the reconciled timeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklySummary {
    /// The week the aggregate covers.
    pub week: WeekKey,
    /// Sum of the contributing day values; `None` when no day had a usable
    /// value (a normal state for future or partially-loaded weeks).
    pub total: Option<f64>,
    /// The reconciled points that entered the sum, at most seven.
    pub contributions: Vec<ReconciledPoint>,
    /// Portion of `total` contributed by estimated (non-observed) days;
    /// the basis error ranges are scaled against.
    pub estimated_basis: f64,
}
