//! Auto-tuning walkthrough on a synthetic random walk.
//!
//! Demonstrates:
//! - Default tuning with the comparison plot
//! - Explicit bounds and metric selection
//! - One-shot filtering with fixed parameters

use autosmooth::prelude::*;
use autosmooth::testing::{generate_series, generate_series_with_gaps};

fn main() -> Result<(), SmoothError> {
    tracing_subscriber::fmt::init();

    println!("{}", "=".repeat(72));
    println!("autosmooth - Savitzky-Golay auto-tuning examples");
    println!("{}", "=".repeat(72));
    println!();

    example_1_defaults()?;
    example_2_custom_search()?;
    example_3_fixed_parameters()?;

    Ok(())
}

/// Example 1: Defaults
/// Tune a 200-sample random walk and write the comparison SVG.
fn example_1_defaults() -> Result<(), SmoothError> {
    println!("Example 1: Default tuning");
    println!("{}", "-".repeat(72));

    let signal = generate_series(200, 42);

    let result = AutoSmooth::new().build()?.tune(&signal)?;
    println!("{result}");

    /* Expected output shape:
    Summary:
      Data points: 200
      Evaluated:   ...
      Skipped:     ...
      Best:        (window=.., order=..) [rmse=... mae=... r2=...]
    */

    println!();
    Ok(())
}

/// Example 2: Custom search
/// Narrow the order range, pick MAE, and log every candidate.
fn example_2_custom_search() -> Result<(), SmoothError> {
    println!("Example 2: Custom search (MAE, gappy input)");
    println!("{}", "-".repeat(72));

    // Every 9th sample missing; gaps survive into the output
    let signal = generate_series_with_gaps(150, 7, 9);

    let result = AutoSmooth::new()
        .order_min(2)
        .order_max(5)
        .max_samples(20)
        .metric(Metric::Mae)
        .verbosity(Verbosity::All)
        .plot(false)
        .build()?
        .tune(&signal)?;

    println!(
        "best {} with mae={:.6} ({} evaluated, {} skipped)",
        result.best,
        result.best_scores.mae,
        result.evaluated(),
        result.skipped
    );
    println!(
        "gaps in, gaps out: {} -> {}",
        signal.missing_count(),
        result.smoothed.missing_count()
    );

    println!();
    Ok(())
}

/// Example 3: Fixed parameters
/// Skip the search entirely when the parameters are already known.
fn example_3_fixed_parameters() -> Result<(), SmoothError> {
    println!("Example 3: Fixed parameters");
    println!("{}", "-".repeat(72));

    let signal = generate_series(100, 3);
    let smoothed = smooth_with(&signal, 15, 3)?;

    let first: Vec<f64> = smoothed
        .values()
        .iter()
        .take(5)
        .map(|v| v.unwrap())
        .collect();
    println!("first smoothed values: {first:?}");

    println!();
    Ok(())
}
