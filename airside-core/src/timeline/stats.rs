use airside_types::{AccuracyStats, ValidationRecord};

/// Derive global accuracy statistics from ground-truth validation records.
///
/// Records are ordered by date and `window`, when set, keeps only the most
/// recent ones. Records whose `actual` is not positive are skipped (their
/// percentage error is undefined). With no usable record both figures are
/// zero, which downstream turns into absent error ranges.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn accuracy_stats(records: &[ValidationRecord], window: Option<usize>) -> AccuracyStats {
    let mut ordered: Vec<&ValidationRecord> = records.iter().collect();
    ordered.sort_by_key(|r| r.date);

    let recent = match window {
        Some(n) => &ordered[ordered.len().saturating_sub(n)..],
        None => &ordered[..],
    };

    let errors: Vec<f64> = recent.iter().filter_map(|r| r.error_pct()).collect();
    if errors.is_empty() {
        return AccuracyStats::default();
    }

    AccuracyStats {
        worst_error_pct: errors.iter().copied().fold(0.0_f64, f64::max),
        mean_error_pct: errors.iter().sum::<f64>() / errors.len() as f64,
    }
}
