use airside_core::AnnotatedValue;

use super::d;

/// Observed throughput from 2025-11-03 through "today" (2025-11-24).
///
/// The last row is pending: TSA publishes each day's figure the following
/// morning. 2025-11-11 carries its Veterans Day flag.
pub fn series() -> Vec<AnnotatedValue> {
    build(vec![
        ("2025-11-03", Some(2_310_000.0), None),
        ("2025-11-04", Some(2_280_000.0), None),
        ("2025-11-05", Some(2_330_000.0), None),
        ("2025-11-06", Some(2_420_000.0), None),
        ("2025-11-07", Some(2_560_000.0), None),
        ("2025-11-08", Some(2_240_000.0), None),
        ("2025-11-09", Some(2_510_000.0), None),
        ("2025-11-10", Some(2_340_000.0), None),
        ("2025-11-11", Some(2_470_000.0), Some("Veterans Day")),
        ("2025-11-12", Some(2_300_000.0), None),
        ("2025-11-13", Some(2_440_000.0), None),
        ("2025-11-14", Some(2_580_000.0), None),
        ("2025-11-15", Some(2_260_000.0), None),
        ("2025-11-16", Some(2_530_000.0), None),
        ("2025-11-17", Some(2_400_000.0), None),
        ("2025-11-18", Some(2_350_000.0), None),
        ("2025-11-19", Some(2_450_000.0), None),
        ("2025-11-20", Some(2_500_000.0), None),
        ("2025-11-21", Some(2_650_000.0), None),
        ("2025-11-22", Some(2_300_000.0), None),
        ("2025-11-23", Some(2_600_000.0), None),
        ("2025-11-24", None, None),
    ])
}

fn build(rows: Vec<(&str, Option<f64>, Option<&str>)>) -> Vec<AnnotatedValue> {
    rows.into_iter()
        .map(|(date, value, holiday)| match holiday {
            Some(name) => AnnotatedValue::flagged(d(date), value, name),
            None => AnnotatedValue::plain(d(date), value),
        })
        .collect()
}
