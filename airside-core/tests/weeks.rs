use airside_core::{candidate_weeks, selectable_weeks};
use airside_types::{Provenance, ReconciledPoint};
use chrono::{Duration, NaiveDate};
use std::collections::HashSet;

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

fn timeline_over(start: NaiveDate, days: i64) -> Vec<ReconciledPoint> {
    (0..days)
        .map(|i| ReconciledPoint {
            date: start + Duration::days(i),
            value: Some(2_000_000.0 + i as f64),
            provenance: Provenance::Observed,
        })
        .collect()
}

#[test]
fn candidates_collect_each_distinct_week_once() {
    // 2026-01-05 is a Monday; 16 days touch three Mondays.
    let weeks = candidate_weeks(&timeline_over(d(2026, 1, 5), 16));
    let mondays: Vec<_> = weeks.iter().map(|w| w.monday()).collect();
    assert_eq!(mondays, vec![d(2026, 1, 5), d(2026, 1, 12), d(2026, 1, 19)]);
}

#[test]
fn candidates_of_an_empty_timeline_are_empty() {
    assert!(candidate_weeks(&[]).is_empty());
}

#[test]
fn selection_keeps_only_weeks_the_market_knows_newest_first() {
    let candidates = candidate_weeks(&timeline_over(d(2026, 1, 5), 21));
    let active: HashSet<String> = ["january-5-january-11", "january-19-january-25"]
        .into_iter()
        .map(String::from)
        .collect();

    let picked = selectable_weeks(&candidates, &active);
    let mondays: Vec<_> = picked.iter().map(|w| w.monday()).collect();
    assert_eq!(mondays, vec![d(2026, 1, 19), d(2026, 1, 5)]);
}

#[test]
fn an_empty_active_set_selects_nothing() {
    let candidates = candidate_weeks(&timeline_over(d(2026, 1, 5), 21));
    assert!(!candidates.is_empty());
    assert!(selectable_weeks(&candidates, &HashSet::new()).is_empty());
}

#[test]
fn unknown_keys_never_fall_back_to_the_unfiltered_candidates() {
    let candidates = candidate_weeks(&timeline_over(d(2026, 1, 5), 7));
    let active: HashSet<String> = ["march-2-march-8"].into_iter().map(String::from).collect();
    assert!(selectable_weeks(&candidates, &active).is_empty());
}

#[test]
fn cross_month_weeks_match_their_two_sided_key() {
    // The week of Monday 2026-01-26 ends on Sunday 2026-02-01.
    let candidates = candidate_weeks(&timeline_over(d(2026, 1, 26), 7));
    let active: HashSet<String> = ["january-26-february-1"]
        .into_iter()
        .map(String::from)
        .collect();

    let picked = selectable_weeks(&candidates, &active);
    assert_eq!(picked.len(), 1);
    assert_eq!(picked[0].monday(), d(2026, 1, 26));
}
