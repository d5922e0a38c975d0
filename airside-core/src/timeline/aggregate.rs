use std::collections::BTreeMap;

use airside_types::{
    AccuracyStats, ErrorRanges, ReconciledPoint, ValueRange, WeekKey, WeeklySummary,
};

/// Sum one Monday-through-Sunday week of the reconciled timeline.
///
/// Each of the seven days is looked up on the timeline; days that are
/// absent or carry no usable value are excluded from both the sum and the
/// contribution list. `total` is `None` when nothing contributed, which is
/// the expected steady state for future or partially-loaded weeks, not an
/// error. `estimated_basis` collects the non-observed share of the total
/// for error-bound scaling.
#[must_use]
pub fn week_summary(week: WeekKey, timeline: &[ReconciledPoint]) -> WeeklySummary {
    let by_date: BTreeMap<_, _> = timeline.iter().map(|p| (p.date, p)).collect();

    let mut contributions: Vec<ReconciledPoint> = Vec::new();
    let mut total = 0.0_f64;
    let mut estimated = 0.0_f64;
    let mut contributed = false;

    for day in week.days() {
        let Some(point) = by_date.get(&day) else {
            continue;
        };
        let Some(value) = point.value else {
            continue;
        };
        total += value;
        contributed = true;
        if !point.provenance.is_observed() {
            estimated += value;
        }
        contributions.push(**point);
    }

    WeeklySummary {
        week,
        total: contributed.then_some(total),
        contributions,
        estimated_basis: estimated,
    }
}

/// Error-bounded ranges around a weekly total.
///
/// Only the estimated portion of the total is scaled by each percentage;
/// days that are already ground truth contribute no uncertainty. A side is
/// `None` when the total is unknown or its percentage is exactly zero,
/// since neither admits a meaningful bound. Bounds are rounded to the
/// nearest whole passenger count.
#[must_use]
pub fn error_ranges(summary: &WeeklySummary, stats: &AccuracyStats) -> ErrorRanges {
    ErrorRanges {
        worst: bounded(summary, stats.worst_error_pct),
        typical: bounded(summary, stats.mean_error_pct),
    }
}

#[allow(clippy::cast_possible_truncation)]
fn bounded(summary: &WeeklySummary, pct: f64) -> Option<ValueRange> {
    let total = summary.total?;
    if pct == 0.0 {
        return None;
    }
    let delta = summary.estimated_basis * (pct / 100.0);
    Some(ValueRange {
        min: (total - delta).round() as i64,
        max: (total + delta).round() as i64,
    })
}
