use airside_types::{AnnotatedValue, HolidayProximity, HolidaySpan};
use chrono::NaiveDate;

/// Days either side of a span still tagged as part of its travel window.
const PROXIMITY_WINDOW_DAYS: i64 = 3;

/// Run-length encode holiday flags into inclusive date spans.
///
/// The input is sorted by date before scanning, so already-sorted input
/// passes through unchanged. A span opens at the first flagged item and
/// closes at the item preceding the first break; a flagged item whose
/// label differs from the current run closes that run and opens a new one
/// at its own date with no gap. Label equality, not just the flag,
/// determines continuity: adjacent runs with different holiday names never
/// merge.
#[must_use]
pub fn detect_spans(values: &[AnnotatedValue]) -> Vec<HolidaySpan> {
    let mut ordered: Vec<&AnnotatedValue> = values.iter().collect();
    ordered.sort_by_key(|v| v.date);

    let mut out: Vec<HolidaySpan> = Vec::new();
    let mut active: Option<(NaiveDate, &str)> = None;
    let mut prev_date: Option<NaiveDate> = None;

    for v in ordered {
        match (active, v.holiday) {
            (None, true) => {
                active = Some((v.date, v.holiday_name.as_str()));
            }
            (Some((start, label)), true) if v.holiday_name != label => {
                out.push(HolidaySpan {
                    start,
                    end: prev_date.unwrap_or(start),
                    label: label.to_string(),
                });
                active = Some((v.date, v.holiday_name.as_str()));
            }
            (Some((start, label)), false) => {
                out.push(HolidaySpan {
                    start,
                    end: prev_date.unwrap_or(start),
                    label: label.to_string(),
                });
                active = None;
            }
            _ => {}
        }
        prev_date = Some(v.date);
    }

    if let Some((start, label)) = active {
        out.push(HolidaySpan {
            start,
            end: prev_date.unwrap_or(start),
            label: label.to_string(),
        });
    }

    out
}

/// Signed distance from `date` to the nearest holiday span.
///
/// Returns `None` when `date` lies inside a span (the exact-day flag
/// already covers it) or when no span is within three days. Offsets are
/// negative before a span and positive after it, matching T-x / T+x
/// travel-window tags.
#[must_use]
pub fn nearest_holiday(date: NaiveDate, spans: &[HolidaySpan]) -> Option<HolidayProximity> {
    let mut best: Option<(i64, &HolidaySpan)> = None;
    for span in spans {
        if span.contains(date) {
            return None;
        }
        let offset = if date < span.start {
            (date - span.start).num_days()
        } else {
            (date - span.end).num_days()
        };
        if best.is_none_or(|(b, _)| offset.abs() < b.abs()) {
            best = Some((offset, span));
        }
    }
    best.and_then(|(offset, span)| {
        (offset.abs() <= PROXIMITY_WINDOW_DAYS).then(|| HolidayProximity {
            offset_days: offset,
            label: span.label.clone(),
        })
    })
}
