//! Raw input series shapes consumed by the reconciliation engine.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One dated throughput observation.
///
/// The `date` is the unique join key across all series; `value` is `None`
/// for days whose figure has not been published yet.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DailyValue {
    /// Calendar day the figure belongs to.
    pub date: NaiveDate,
    /// Passenger throughput for the day, if known.
    pub value: Option<f64>,
}

impl DailyValue {
    /// Build a point with a known value.
    #[must_use]
    pub const fn new(date: NaiveDate, value: f64) -> Self {
        Self {
            date,
            value: Some(value),
        }
    }

    /// Build a point whose figure is not available yet.
    #[must_use]
    pub const fn pending(date: NaiveDate) -> Self {
        Self { date, value: None }
    }
}

/// A dated observation carrying its holiday annotation.
///
/// `holiday_name` is meaningful only when `holiday` is true.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnotatedValue {
    /// Calendar day the figure belongs to.
    pub date: NaiveDate,
    /// Passenger throughput for the day, if known.
    pub value: Option<f64>,
    /// True when the day falls inside a recognized holiday window.
    pub holiday: bool,
    /// Name of the holiday anchoring the window.
    pub holiday_name: String,
}

impl AnnotatedValue {
    /// Build an ordinary, non-holiday point.
    #[must_use]
    pub fn plain(date: NaiveDate, value: Option<f64>) -> Self {
        Self {
            date,
            value,
            holiday: false,
            holiday_name: String::new(),
        }
    }

    /// Build a point flagged as part of the named holiday window.
    #[must_use]
    pub fn flagged(date: NaiveDate, value: Option<f64>, name: impl Into<String>) -> Self {
        Self {
            date,
            value,
            holiday: true,
            holiday_name: name.into(),
        }
    }

    /// The point without its annotation.
    #[must_use]
    pub const fn daily(&self) -> DailyValue {
        DailyValue {
            date: self.date,
            value: self.value,
        }
    }
}

/// The input series for one engine recomputation.
///
/// Each member is produced by an external retrieval layer and passed in as
/// already-parsed values; the engine never fetches anything itself.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SourceSet {
    /// Observed throughput, one entry per past calendar day.
    pub history: Vec<AnnotatedValue>,
    /// Baseline model forecast; may overlap the tail of `history`.
    pub forecast: Vec<AnnotatedValue>,
    /// Short-horizon high-confidence nowcast, at most a handful of entries.
    pub nowcast: Vec<DailyValue>,
    /// Secondary-model forecast; absent when no challenger run exists.
    pub challenger: Option<Vec<DailyValue>>,
}
