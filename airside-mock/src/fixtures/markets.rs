use std::collections::HashSet;

use airside_core::ValidationRecord;

use super::d;

/// Weekly market keys currently listed by the availability feed.
///
/// The December key has no counterpart on the fixture timeline and should
/// always be filtered out.
pub fn active_keys() -> HashSet<String> {
    [
        "november-17-november-23",
        "november-24-november-30",
        "december-1-december-7",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

/// One week of ground truth against the forecasts made for it.
///
/// Absolute percentage errors: 2, 3, 5, 8, 1, 4, 5 (worst 8%, mean 4%).
pub fn validation() -> Vec<ValidationRecord> {
    build(vec![
        ("2025-11-17", 2_000_000.0, 2_040_000.0),
        ("2025-11-18", 2_000_000.0, 1_940_000.0),
        ("2025-11-19", 2_000_000.0, 2_100_000.0),
        ("2025-11-20", 2_000_000.0, 1_840_000.0),
        ("2025-11-21", 2_000_000.0, 2_020_000.0),
        ("2025-11-22", 2_000_000.0, 1_920_000.0),
        ("2025-11-23", 2_000_000.0, 1_900_000.0),
    ])
}

fn build(rows: Vec<(&str, f64, f64)>) -> Vec<ValidationRecord> {
    rows.into_iter()
        .map(|(date, actual, predicted)| ValidationRecord {
            date: d(date),
            actual,
            predicted,
        })
        .collect()
}
