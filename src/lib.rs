//! # autosmooth: Automatic Savitzky-Golay parameter tuning for Rust
//!
//! Smoothing a noisy series with a Savitzky-Golay filter means picking two
//! free parameters: a window length and a polynomial order. This crate
//! picks them for you. It sweeps a budgeted grid of (window, order)
//! candidates, rejects pairs where the polynomial would nearly interpolate
//! the window, scores the rest against the original signal, and returns the
//! series smoothed with the best pair under the chosen error metric.
//!
//! ## What is Savitzky-Golay smoothing?
//!
//! A Savitzky-Golay filter fits a low-degree polynomial to the samples
//! inside a sliding window by least squares and replaces each sample with
//! the polynomial's value at the window center. Small windows and high
//! orders track the data closely; large windows and low orders smooth
//! aggressively. The sweet spot depends on the data, which is what the
//! tuning search is for.
//!
//! ## Quick Start
//!
//! ```rust
//! use autosmooth::prelude::*;
//!
//! let signal = Signal::from_values((0..100).map(|i| (i as f64 * 0.2).sin()).collect())?;
//!
//! // Build the tuner
//! let tuner = AutoSmooth::new()
//!     .order_max(6)       // try polynomial orders 2..=6
//!     .max_samples(25)    // budget for the window sweep
//!     .plot(false)        // suppress the comparison plot
//!     .build()?;
//!
//! // Run the search
//! let result = tuner.tune(&signal)?;
//!
//! println!("best: {}", result.best);
//! assert_eq!(result.smoothed.len(), signal.len());
//! # Result::<(), SmoothError>::Ok(())
//! ```
//!
//! ## Missing Values
//!
//! Signals may contain gaps (`None` entries, or NaN via
//! [`Signal::from_nan_values`]). Gaps are excluded from filtering and
//! scoring, and re-appear as gaps in the output at exactly the same
//! positions, never extrapolated.
//!
//! ```rust
//! use autosmooth::prelude::*;
//!
//! let signal = Signal::from_nan_values(
//!     (0..50).map(|i| i as f64).collect(),
//!     (0..50)
//!         .map(|i| if i % 7 == 0 { f64::NAN } else { (i as f64 * 0.3).cos() })
//!         .collect(),
//! )?;
//!
//! let smoothed = smooth_with(&signal, 11, 3)?;
//! assert_eq!(smoothed.missing_count(), signal.missing_count());
//! # Result::<(), SmoothError>::Ok(())
//! ```
//!
//! ## Result and Error Handling
//!
//! `tune` returns `Result<TuneResult<T>, SmoothError>`; the `?` operator is
//! idiomatic. A configuration under which no candidate survives the
//! window/order ratio constraint is an error, not an empty result.
//!
//! ## Feature Flags
//!
//! * `plot` (default): render an SVG comparison of original vs. smoothed
//!   plus residuals for the final result, via `plotters`.
//! * `parallel`: score grid candidates across CPU cores via `rayon`;
//!   selection stays bit-identical to the serial path.
//! * `serde`: `Serialize`/`Deserialize` on candidates and score rows.
//!
//! ## References
//!
//! - Savitzky, A., Golay, M. J. E. (1964). "Smoothing and Differentiation
//!   of Data by Simplified Least Squares Procedures"

// Layer 1: Primitives - data structures and error types.
mod primitives;

// Layer 2: Math - pure mathematical functions.
mod math;

// Layer 3: Algorithms - the smoothing kernel.
mod algorithms;

// Layer 4: Evaluation - candidate grids and scoring metrics.
mod evaluation;

// Layer 5: Engine - orchestration and execution control.
mod engine;

// High-level fluent API for auto-tuned smoothing.
mod api;

// Visualization side channel (feature-gated).
#[cfg(feature = "plot")]
mod viz;

// Synthetic signal generation for tests and examples.
pub mod testing;

// Standard prelude.
pub mod prelude {
    pub use crate::algorithms::savgol::{SavitzkyGolay, SmoothingKernel};
    pub use crate::api::{
        auto_smooth, smooth_with, AutoSmooth, Method, Metric, SavgolTuner, ScoreRow, Scores,
        TuneResult, Verbosity,
    };
    pub use crate::primitives::candidate::Candidate;
    pub use crate::primitives::errors::SmoothError;
    pub use crate::primitives::signal::Signal;
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing
// purposes. It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod math {
        pub use crate::math::*;
    }
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    pub mod evaluation {
        pub use crate::evaluation::*;
    }
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}
