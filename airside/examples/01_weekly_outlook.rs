use airside::{Airside, nearest_holiday};
use airside_mock::MockFeed;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Optional: see the engine's instrumentation with --features tracing.
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // 1. Gather one recomputation's inputs. In production these come from
    //    the retrieval layer; here the mock feed stands in.
    let sources = MockFeed::sources();

    // 2. Build the engine. Integrity problems (duplicate dates inside one
    //    series) surface here and nowhere else.
    let engine = Airside::builder()
        .history(sources.history)
        .forecast(sources.forecast)
        .nowcast(sources.nowcast)
        .challenger(sources.challenger.expect("mock feed has a challenger run"))
        .active_markets(MockFeed::active_market_keys())
        .validation(MockFeed::validation_records())
        .build()?;

    // 3. The reconciled timeline, tagged with where each figure came from.
    println!("## Timeline ({} days):", engine.timeline().len());
    for point in engine.timeline().iter().rev().take(7).rev() {
        println!(
            " - {} {:>12} [{:?}]",
            point.date,
            point
                .value
                .map_or_else(|| "-".to_string(), |v| format!("{v:.0}")),
            point.provenance,
        );
    }

    // 4. Holiday windows for chart annotation, plus travel-window tags.
    println!("\n## Holiday windows:");
    for span in engine.holiday_spans() {
        println!(" - {} to {}: {}", span.start, span.end, span.label);
    }
    if let Some(near) = nearest_holiday(MockFeed::as_of(), engine.holiday_spans()) {
        println!(
            " - {} is T{:+} from {}",
            MockFeed::as_of(),
            near.offset_days,
            near.label
        );
    }

    // 5. Pick the most recent week the market feed knows about and bound
    //    its total with the recorded forecast error.
    let week = engine.latest_week()?;
    let summary = engine.week_summary(week);
    let ranges = engine.error_ranges(&summary);

    println!("\n## Week of {} ({}):", week.monday(), week.market_key());
    println!(
        " - total: {}",
        summary
            .total
            .map_or_else(|| "no data yet".to_string(), |t| format!("{t:.0}")),
    );
    println!(" - estimated share: {:.0}", summary.estimated_basis);
    if let Some(worst) = ranges.worst {
        println!(" - worst case: {} to {}", worst.min, worst.max);
    }
    if let Some(typical) = ranges.typical {
        println!(" - typical: {} to {}", typical.min, typical.max);
    }

    Ok(())
}
