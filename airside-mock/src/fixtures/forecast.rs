use airside_core::{AnnotatedValue, DailyValue};

use super::d;

/// Baseline forecast published through the end of the Thanksgiving week.
///
/// Overlaps the history tail on 11-23 and 11-24; the reconciler lets
/// observed data win there. The Thanksgiving window is flagged.
pub fn series() -> Vec<AnnotatedValue> {
    vec![
        AnnotatedValue::plain(d("2025-11-23"), Some(2_550_000.0)),
        AnnotatedValue::plain(d("2025-11-24"), Some(2_850_000.0)),
        AnnotatedValue::plain(d("2025-11-25"), Some(2_750_000.0)),
        AnnotatedValue::flagged(d("2025-11-26"), Some(2_980_000.0), "Thanksgiving Day"),
        AnnotatedValue::flagged(d("2025-11-27"), Some(2_300_000.0), "Thanksgiving Day"),
        AnnotatedValue::flagged(d("2025-11-28"), Some(2_900_000.0), "Thanksgiving Day"),
        AnnotatedValue::plain(d("2025-11-29"), Some(2_650_000.0)),
        AnnotatedValue::plain(d("2025-11-30"), Some(3_050_000.0)),
    ]
}

/// Same-day high-precision nowcast for the still-unpublished 11-24 figure.
pub fn nowcast() -> Vec<DailyValue> {
    vec![DailyValue::new(d("2025-11-24"), 2_950_000.0)]
}

/// Partial challenger run covering the back half of the travel weekend.
pub fn challenger() -> Vec<DailyValue> {
    vec![
        DailyValue::new(d("2025-11-29"), 2_700_000.0),
        DailyValue::new(d("2025-11-30"), 3_100_000.0),
    ]
}
