//! Deterministic fixture inputs for CI-safe airside tests and examples.
//!
//! The dataset models one frozen moment: the Monday opening the 2025
//! Thanksgiving travel week, with three weeks of observed history behind
//! it, a published baseline forecast through the end of the week, a
//! same-day nowcast, and a partial challenger run.
#![warn(missing_docs)]

use std::collections::HashSet;

use airside_core::{SourceSet, ValidationRecord};
use chrono::NaiveDate;

mod fixtures;

/// Frozen upstream feed standing in for the retrieval layer.
pub struct MockFeed;

impl MockFeed {
    /// The fixture's "today": Monday 2025-11-24.
    ///
    /// History runs up to (and including) this date, with the figure for
    /// the day itself not yet published.
    #[must_use]
    pub fn as_of() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 11, 24).expect("fixture date is valid")
    }

    /// The four input series for one recomputation.
    #[must_use]
    pub fn sources() -> SourceSet {
        SourceSet {
            history: fixtures::history::series(),
            forecast: fixtures::forecast::series(),
            nowcast: fixtures::forecast::nowcast(),
            challenger: Some(fixtures::forecast::challenger()),
        }
    }

    /// Weekly market keys the external availability feed currently lists.
    #[must_use]
    pub fn active_market_keys() -> HashSet<String> {
        fixtures::markets::active_keys()
    }

    /// Ground-truth validation records for the week before "today".
    #[must_use]
    pub fn validation_records() -> Vec<ValidationRecord> {
        fixtures::markets::validation()
    }
}
