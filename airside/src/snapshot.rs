use std::collections::{BTreeMap, HashSet};

use airside_core::types::{
    AccuracyStats, AirsideError, AnnotatedValue, EngineConfig, ErrorRanges, HolidaySpan,
    ReconciledPoint, SourceSet, ValidationRecord, WeekKey, WeeklySummary,
};
use chrono::NaiveDate;

use crate::core::Airside;

/// Everything one recomputation derives from its inputs.
#[derive(Debug)]
pub(crate) struct Snapshot {
    timeline: Vec<ReconciledPoint>,
    holiday_spans: Vec<HolidaySpan>,
    weeks: Vec<WeekKey>,
    stats: AccuracyStats,
}

impl Snapshot {
    pub(crate) fn derive(
        sources: &SourceSet,
        active_markets: &HashSet<String>,
        validation: &[ValidationRecord],
        cfg: EngineConfig,
    ) -> Result<Self, AirsideError> {
        let timeline = airside_core::reconcile(sources, cfg.challenger)?;
        let holiday_spans = airside_core::detect_spans(&annotated_union(sources));
        let candidates = airside_core::candidate_weeks(&timeline);
        let weeks = airside_core::selectable_weeks(&candidates, active_markets);
        let stats = airside_core::accuracy_stats(validation, cfg.validation_window);
        Ok(Self {
            timeline,
            holiday_spans,
            weeks,
            stats,
        })
    }
}

/// Flagged sequence the span detector scans: history rows first, forecast
/// rows only for dates the history does not cover yet.
fn annotated_union(sources: &SourceSet) -> Vec<AnnotatedValue> {
    let mut by_date: BTreeMap<NaiveDate, &AnnotatedValue> = BTreeMap::new();
    for row in sources.history.iter().chain(&sources.forecast) {
        by_date.entry(row.date).or_insert(row);
    }
    by_date.into_values().cloned().collect()
}

/// The two most recent observed figures, for at-a-glance display.
#[derive(Debug, Clone, PartialEq)]
pub struct Headline {
    /// Latest point with ground truth.
    pub latest: ReconciledPoint,
    /// The observed point immediately before it, when one exists.
    pub previous: Option<ReconciledPoint>,
}

impl Airside {
    /// The reconciled timeline, ascending by date.
    #[must_use]
    pub fn timeline(&self) -> &[ReconciledPoint] {
        &self.snapshot.timeline
    }

    /// Contiguous holiday windows detected over the input series.
    #[must_use]
    pub fn holiday_spans(&self) -> &[HolidaySpan] {
        &self.snapshot.holiday_spans
    }

    /// Weeks the external market feed currently knows, most recent first.
    ///
    /// Empty is a normal state; see [`Airside::latest_week`] when one
    /// concrete week is required.
    #[must_use]
    pub fn weeks(&self) -> &[WeekKey] {
        &self.snapshot.weeks
    }

    /// The most recent selectable week.
    ///
    /// # Errors
    /// Returns `AirsideError::NoActiveWeeks` when availability filtering
    /// left nothing to select; guessing a week would be worse than
    /// reporting none.
    pub fn latest_week(&self) -> Result<WeekKey, AirsideError> {
        self.snapshot
            .weeks
            .first()
            .copied()
            .ok_or(AirsideError::NoActiveWeeks)
    }

    /// Accuracy statistics derived from the supplied validation records.
    #[must_use]
    pub const fn accuracy_stats(&self) -> AccuracyStats {
        self.snapshot.stats
    }

    /// Aggregate one week of the timeline day by day.
    ///
    /// A week with no usable day yields `total: None`, the expected steady
    /// state for future or partially-loaded weeks.
    #[must_use]
    pub fn week_summary(&self, week: WeekKey) -> WeeklySummary {
        airside_core::week_summary(week, &self.snapshot.timeline)
    }

    /// Error-bounded ranges for a weekly summary, using this
    /// recomputation's accuracy statistics.
    #[must_use]
    pub fn error_ranges(&self, summary: &WeeklySummary) -> ErrorRanges {
        airside_core::error_ranges(summary, &self.snapshot.stats)
    }

    /// The latest and previous observed figures, skipping estimated days.
    ///
    /// `None` until at least one day of ground truth exists.
    #[must_use]
    pub fn headline(&self) -> Option<Headline> {
        let mut observed = self
            .snapshot
            .timeline
            .iter()
            .rev()
            .filter(|p| p.provenance.is_observed() && p.is_usable());
        let latest = *observed.next()?;
        let previous = observed.next().copied();
        Some(Headline { latest, previous })
    }
}
