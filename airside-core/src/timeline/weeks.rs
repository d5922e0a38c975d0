use std::collections::{BTreeSet, HashSet};

use airside_types::{ReconciledPoint, WeekKey};

/// Collect the week key of every date present on the timeline.
#[must_use]
pub fn candidate_weeks(timeline: &[ReconciledPoint]) -> BTreeSet<WeekKey> {
    timeline
        .iter()
        .map(|p| WeekKey::containing(p.date))
        .collect()
}

/// Keep only candidate weeks whose market key appears in the active set,
/// sorted most recent first.
///
/// An empty active set yields an empty result, never the unfiltered
/// candidates: guessing a week is worse than reporting none. An empty
/// return value is a normal state at this layer; the facade's single-week
/// accessor is what raises `NoActiveWeeks`.
#[must_use]
pub fn selectable_weeks(
    candidates: &BTreeSet<WeekKey>,
    active_keys: &HashSet<String>,
) -> Vec<WeekKey> {
    // BTreeSet iterates ascending; newest-first means reversing after the filter.
    candidates
        .iter()
        .rev()
        .copied()
        .filter(|week| active_keys.contains(&week.market_key()))
        .collect()
}
