//! Synthetic signal generation for tests and examples.
//!
//! Deterministic random-walk series in the style of a simulated price
//! path: unit-variance Gaussian steps accumulated onto a base level of
//! 100, keyed by integer positions. The same seed always reproduces the
//! same series.

// External dependencies
use rand::prelude::*;
use rand_distr::Normal;

// Internal dependencies
use crate::primitives::signal::Signal;

/// Generate a seeded random-walk series of `num_periods` samples.
pub fn generate_series(num_periods: usize, seed: u64) -> Signal<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let steps = Normal::new(0.0, 1.0).unwrap();

    let mut level = 100.0;
    let mut values = Vec::with_capacity(num_periods);
    for i in 0..num_periods {
        // The walk starts exactly at the base level
        if i > 0 {
            level += steps.sample(&mut rng);
        }
        values.push(level);
    }

    Signal::from_values(values).expect("random walk values are finite")
}

/// Generate a seeded random walk with every `gap_stride`-th sample missing.
///
/// Useful for exercising the dense/expand alignment path; `gap_stride`
/// must be at least 2 so some samples remain.
pub fn generate_series_with_gaps(num_periods: usize, seed: u64, gap_stride: usize) -> Signal<f64> {
    assert!(gap_stride >= 2, "gap_stride must leave samples in place");

    let walk = generate_series(num_periods, seed);
    let values = walk
        .values()
        .iter()
        .enumerate()
        .map(|(i, v)| if i % gap_stride == 0 { None } else { *v })
        .collect();

    Signal::new(walk.index().to_vec(), values).expect("index is already valid")
}
