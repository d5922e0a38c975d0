use std::collections::{BTreeMap, HashSet, btree_map::Entry};

use airside_types::{
    AirsideError, AnnotatedValue, ChallengerMode, DailyValue, Provenance, ReconciledPoint,
    SourceSet,
};
use chrono::NaiveDate;

/// Merge the input series into one provenance-tagged timeline.
///
/// - Points are keyed by date; precedence per date is observed history,
///   then nowcast, then challenger, then baseline forecast.
/// - A source only claims a date when its value is non-null; null entries
///   fall through to the next source in precedence order.
/// - The challenger never outranks observed or nowcast data, and with
///   [`ChallengerMode::Ignore`] it is left out entirely.
/// - Every distinct date in the union of the inputs yields exactly one
///   output point, ascending by date; dates no source could resolve are
///   kept as [`Provenance::Missing`] with a null value.
///
/// # Errors
/// Returns `Err(AirsideError::DuplicateDate)` if the same date appears
/// twice within any single input series. Duplicates are a contract
/// violation of the retrieval layer and are never resolved by silently
/// picking one side.
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(
        name = "airside_core::timeline::reconcile",
        skip(sources),
        fields(
            history = sources.history.len(),
            forecast = sources.forecast.len(),
            nowcast = sources.nowcast.len(),
            challenger = sources.challenger.as_ref().map_or(0, Vec::len),
        ),
    )
)]
pub fn reconcile(
    sources: &SourceSet,
    challenger_mode: ChallengerMode,
) -> Result<Vec<ReconciledPoint>, AirsideError> {
    ensure_unique_dates("history", sources.history.iter().map(|v| v.date))?;
    ensure_unique_dates("forecast", sources.forecast.iter().map(|v| v.date))?;
    ensure_unique_dates("nowcast", sources.nowcast.iter().map(|v| v.date))?;
    if let Some(challenger) = &sources.challenger {
        ensure_unique_dates("challenger", challenger.iter().map(|v| v.date))?;
    }

    let mut points: BTreeMap<NaiveDate, ReconciledPoint> = BTreeMap::new();

    // Highest precedence first; the first usable value claims its date and
    // later sources can only fill dates still left unresolved.
    apply(
        &mut points,
        sources.history.iter().map(AnnotatedValue::daily),
        Provenance::Observed,
    );
    apply(
        &mut points,
        sources.nowcast.iter().copied(),
        Provenance::Nowcast,
    );
    if matches!(challenger_mode, ChallengerMode::Fallback) {
        if let Some(challenger) = &sources.challenger {
            apply(&mut points, challenger.iter().copied(), Provenance::Challenger);
        }
    }
    apply(
        &mut points,
        sources.forecast.iter().map(AnnotatedValue::daily),
        Provenance::Forecast,
    );

    Ok(points.into_values().collect())
}

fn apply<I>(points: &mut BTreeMap<NaiveDate, ReconciledPoint>, series: I, provenance: Provenance)
where
    I: IntoIterator<Item = DailyValue>,
{
    for dv in series {
        let resolved = match dv.value {
            Some(v) => ReconciledPoint {
                date: dv.date,
                value: Some(v),
                provenance,
            },
            None => ReconciledPoint {
                date: dv.date,
                value: None,
                provenance: Provenance::Missing,
            },
        };
        match points.entry(dv.date) {
            Entry::Vacant(slot) => {
                slot.insert(resolved);
            }
            Entry::Occupied(mut slot) => {
                // Dates held as Missing placeholders stay claimable.
                if !slot.get().is_usable() && resolved.is_usable() {
                    slot.insert(resolved);
                }
            }
        }
    }
}

fn ensure_unique_dates<I>(series: &'static str, dates: I) -> Result<(), AirsideError>
where
    I: IntoIterator<Item = NaiveDate>,
{
    let mut seen: HashSet<NaiveDate> = HashSet::new();
    for date in dates {
        if !seen.insert(date) {
            return Err(AirsideError::duplicate_date(series, date));
        }
    }
    Ok(())
}
