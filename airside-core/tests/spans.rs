use airside_core::{detect_spans, nearest_holiday};
use airside_types::{AnnotatedValue, HolidaySpan};
use chrono::{Duration, NaiveDate};

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

fn span(start: NaiveDate, end: NaiveDate, label: &str) -> HolidaySpan {
    HolidaySpan {
        start,
        end,
        label: label.to_string(),
    }
}

#[test]
fn empty_input_yields_no_spans() {
    assert!(detect_spans(&[]).is_empty());
}

#[test]
fn a_single_flagged_day_is_a_one_day_span() {
    let values = vec![AnnotatedValue::flagged(
        d(2025, 7, 4),
        Some(2_900_000.0),
        "Independence Day",
    )];
    assert_eq!(
        detect_spans(&values),
        vec![span(d(2025, 7, 4), d(2025, 7, 4), "Independence Day")]
    );
}

#[test]
fn label_changes_split_adjacent_runs_without_a_gap() {
    // Two "A" days, one "B" day, one plain day, all consecutive.
    let values = vec![
        AnnotatedValue::flagged(d(2025, 11, 27), Some(1.0), "A"),
        AnnotatedValue::flagged(d(2025, 11, 28), Some(2.0), "A"),
        AnnotatedValue::flagged(d(2025, 11, 29), Some(3.0), "B"),
        AnnotatedValue::plain(d(2025, 11, 30), Some(4.0)),
    ];
    assert_eq!(
        detect_spans(&values),
        vec![
            span(d(2025, 11, 27), d(2025, 11, 28), "A"),
            span(d(2025, 11, 29), d(2025, 11, 29), "B"),
        ]
    );
}

#[test]
fn a_run_still_open_at_the_end_closes_on_the_last_day() {
    let values = vec![
        AnnotatedValue::plain(d(2025, 12, 22), Some(1.0)),
        AnnotatedValue::flagged(d(2025, 12, 23), Some(2.0), "Christmas Day"),
        AnnotatedValue::flagged(d(2025, 12, 24), Some(3.0), "Christmas Day"),
        AnnotatedValue::flagged(d(2025, 12, 25), Some(4.0), "Christmas Day"),
    ];
    assert_eq!(
        detect_spans(&values),
        vec![span(d(2025, 12, 23), d(2025, 12, 25), "Christmas Day")]
    );
}

#[test]
fn unflagged_days_inside_a_window_split_it() {
    let values = vec![
        AnnotatedValue::flagged(d(2026, 1, 1), Some(1.0), "New Year's Day"),
        AnnotatedValue::plain(d(2026, 1, 2), Some(2.0)),
        AnnotatedValue::flagged(d(2026, 1, 3), Some(3.0), "New Year's Day"),
    ];
    assert_eq!(
        detect_spans(&values),
        vec![
            span(d(2026, 1, 1), d(2026, 1, 1), "New Year's Day"),
            span(d(2026, 1, 3), d(2026, 1, 3), "New Year's Day"),
        ]
    );
}

#[test]
fn detection_is_stable_under_input_shuffling() {
    let sorted = vec![
        AnnotatedValue::plain(d(2025, 5, 23), Some(1.0)),
        AnnotatedValue::flagged(d(2025, 5, 24), Some(2.0), "Memorial Day"),
        AnnotatedValue::flagged(d(2025, 5, 25), Some(3.0), "Memorial Day"),
        AnnotatedValue::flagged(d(2025, 5, 26), Some(4.0), "Memorial Day"),
        AnnotatedValue::plain(d(2025, 5, 27), Some(5.0)),
    ];
    let mut shuffled = sorted.clone();
    shuffled.swap(0, 3);
    shuffled.swap(1, 4);

    let expected = vec![span(d(2025, 5, 24), d(2025, 5, 26), "Memorial Day")];
    assert_eq!(detect_spans(&sorted), expected);
    assert_eq!(detect_spans(&shuffled), expected);
}

#[test]
fn proximity_reports_signed_offsets_near_a_span() {
    let spans = vec![span(d(2025, 11, 26), d(2025, 11, 28), "Thanksgiving")];

    let before = nearest_holiday(d(2025, 11, 24), &spans).unwrap();
    assert_eq!(before.offset_days, -2);
    assert_eq!(before.label, "Thanksgiving");

    let after = nearest_holiday(d(2025, 12, 1), &spans).unwrap();
    assert_eq!(after.offset_days, 3);
}

#[test]
fn proximity_is_silent_inside_a_span_or_far_from_one() {
    let spans = vec![span(d(2025, 11, 26), d(2025, 11, 28), "Thanksgiving")];

    // Inside the span the exact-day flag already covers the date.
    assert!(nearest_holiday(d(2025, 11, 27), &spans).is_none());
    // Four days out is beyond the travel window.
    assert!(nearest_holiday(d(2025, 11, 22), &spans).is_none());
    // No spans at all.
    assert!(nearest_holiday(d(2025, 11, 27), &[]).is_none());
}

#[test]
fn proximity_picks_the_closest_of_several_spans() {
    let spans = vec![
        span(d(2025, 12, 24), d(2025, 12, 26), "Christmas Day"),
        span(d(2026, 1, 1), d(2026, 1, 1), "New Year's Day"),
    ];
    let hit = nearest_holiday(d(2025, 12, 29), &spans).unwrap();
    // Three days after Christmas, three days before New Year; the scan
    // keeps the first strictly-closer candidate, so Christmas wins the tie.
    assert_eq!(hit.label, "Christmas Day");
    assert_eq!(hit.offset_days, 3);

    let hit = nearest_holiday(d(2025, 12, 30), &spans).unwrap();
    assert_eq!(hit.label, "New Year's Day");
    assert_eq!(hit.offset_days, -2);
}

#[test]
fn long_gap_between_same_label_entries_still_splits_on_sequence_breaks() {
    // Sequence-based run-length: an intervening unflagged entry ends the
    // run even when the calendar dates are far apart.
    let values = vec![
        AnnotatedValue::flagged(d(2025, 7, 4), Some(1.0), "Independence Day"),
        AnnotatedValue::plain(d(2025, 9, 1), Some(2.0)),
        AnnotatedValue::flagged(d(2026, 7, 4), Some(3.0), "Independence Day"),
    ];
    let spans_out = detect_spans(&values);
    assert_eq!(spans_out.len(), 2);
    assert_eq!(spans_out[0].start, d(2025, 7, 4));
    assert_eq!(spans_out[1].start, d(2026, 7, 4));
}

#[test]
fn adjacent_same_label_entries_merge_across_any_distance() {
    // Consecutive flagged entries with one label form a single span even if
    // the detector input skipped days in between.
    let values = vec![
        AnnotatedValue::flagged(d(2025, 12, 24), Some(1.0), "Christmas Day"),
        AnnotatedValue::flagged(d(2025, 12, 26), Some(2.0), "Christmas Day"),
    ];
    assert_eq!(
        detect_spans(&values),
        vec![span(d(2025, 12, 24), d(2025, 12, 26), "Christmas Day")]
    );
}

// Re-exported type sanity: spans are inclusive on both ends.
#[test]
fn spans_contain_their_boundaries() {
    let s = span(d(2025, 11, 26), d(2025, 11, 28), "Thanksgiving");
    assert!(s.contains(d(2025, 11, 26)));
    assert!(s.contains(d(2025, 11, 28)));
    assert!(!s.contains(d(2025, 11, 25)));
    assert!(!s.contains(d(2025, 11, 26) + Duration::days(3)));
}
