//! Monday-keyed calendar weeks and their external market tokens.

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::AirsideError;

/// A Monday-through-Sunday calendar week, identified by its Monday.
///
/// The wrapped date is always a Monday; use [`WeekKey::containing`] to snap
/// an arbitrary date back to its week, or `TryFrom<NaiveDate>` when the
/// caller claims to already hold a Monday.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct WeekKey(NaiveDate);

impl WeekKey {
    /// The week containing `date`: the Monday on or before it.
    ///
    /// Idempotent; a Monday maps to itself and a Sunday to the Monday six
    /// days earlier.
    #[must_use]
    pub fn containing(date: NaiveDate) -> Self {
        let back = i64::from(date.weekday().num_days_from_monday());
        Self(date - Duration::days(back))
    }

    /// The Monday opening the week.
    #[must_use]
    pub const fn monday(self) -> NaiveDate {
        self.0
    }

    /// The Sunday closing the week.
    #[must_use]
    pub fn sunday(self) -> NaiveDate {
        self.0 + Duration::days(6)
    }

    /// The seven days of the week in calendar order.
    pub fn days(self) -> impl Iterator<Item = NaiveDate> {
        let monday = self.0;
        (0..7).map(move |i| monday + Duration::days(i))
    }

    /// Token matching the external availability feed's weekly keys.
    ///
    /// Lower-cased full month name and day number for each boundary, e.g.
    /// `january-19-january-25`; a cross-month week keeps the differing
    /// month names on each side (`january-26-february-1`).
    #[must_use]
    pub fn market_key(self) -> String {
        let start = self.monday();
        let end = self.sunday();
        format!(
            "{}-{}-{}-{}",
            month_name(start),
            start.day(),
            month_name(end),
            end.day()
        )
    }
}

impl TryFrom<NaiveDate> for WeekKey {
    type Error = AirsideError;

    fn try_from(date: NaiveDate) -> Result<Self, Self::Error> {
        if date.weekday() == Weekday::Mon {
            Ok(Self(date))
        } else {
            Err(AirsideError::invalid_arg(format!(
                "week key must be a Monday, got {date} ({})",
                date.weekday()
            )))
        }
    }
}

impl fmt::Display for WeekKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

fn month_name(date: NaiveDate) -> String {
    date.format("%B").to_string().to_lowercase()
}
