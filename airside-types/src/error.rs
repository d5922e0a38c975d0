use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unified error type for the airside workspace.
///
/// Integrity violations abort a recomputation and must never be resolved
/// silently; absence of data (empty span lists, `None` totals) is expressed
/// as ordinary values, not through this enum.
#[derive(Debug, Error, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum AirsideError {
    /// A single input series carried the same date twice.
    #[error("duplicate date in {series} series: {date}")]
    DuplicateDate {
        /// Name of the offending input series (e.g. "history").
        series: String,
        /// The repeated calendar date.
        date: NaiveDate,
    },

    /// Availability filtering left no selectable week.
    #[error("no candidate week matches the active market set")]
    NoActiveWeeks,

    /// Invalid input argument.
    #[error("invalid argument: {0}")]
    InvalidArg(String),
}

impl AirsideError {
    /// Helper: build a `DuplicateDate` error for a series name and date.
    pub fn duplicate_date(series: impl Into<String>, date: NaiveDate) -> Self {
        Self::DuplicateDate {
            series: series.into(),
            date,
        }
    }

    /// Helper: build an `InvalidArg` error from any message.
    pub fn invalid_arg(msg: impl Into<String>) -> Self {
        Self::InvalidArg(msg.into())
    }
}
