//! Candidate grid generation for the tuning search.
//!
//! ## Purpose
//!
//! This module produces the finite set of (window, order) pairs the tuner
//! evaluates: a budgeted, evenly spaced sweep of integer window lengths
//! crossed with every order in the configured range.
//!
//! ## Design notes
//!
//! * **Budgeted sweep**: `max_samples` evenly spaced points span
//!   `[window_min, window_max]`; each point is truncated to an integer and
//!   consecutive duplicates collapse, so the realized count may be smaller.
//! * **Inverted ranges**: A `window_max` below `window_min` (short signals)
//!   degrades to the single point `window_min` rather than an empty or
//!   descending sweep.
//! * **Fixed order**: Candidates are emitted ascending by window, then
//!   ascending by order. Selection tie-breaking relies on this order.
//!
//! ## Invariants
//!
//! * The window sweep is strictly increasing and contained in
//!   `[window_min, max(window_min, window_max)]`.
//! * At least one window is always produced.
//!
//! ## Non-goals
//!
//! * This module does not apply the ratio constraint (the engine filters).
//! * This module does not inspect signal values, only configured bounds.

// Internal dependencies
use crate::primitives::candidate::Candidate;

// ============================================================================
// Window Sweep
// ============================================================================

/// Generate the strictly increasing, de-duplicated window sweep.
pub fn window_grid(window_min: usize, window_max: usize, max_samples: usize) -> Vec<usize> {
    if window_max <= window_min || max_samples <= 1 {
        return vec![window_min];
    }

    let start = window_min as f64;
    let span = (window_max - window_min) as f64;
    let steps = (max_samples - 1) as f64;

    let mut windows = Vec::with_capacity(max_samples);
    for k in 0..max_samples {
        // Truncation toward zero matches integer casting of the spaced points
        let w = (start + span * k as f64 / steps) as usize;
        if windows.last() != Some(&w) {
            windows.push(w);
        }
    }

    windows
}

// ============================================================================
// Candidate Cross Product
// ============================================================================

/// Cross a window sweep with every order in `[order_min, order_max]`.
///
/// Emission order is ascending window, then ascending order; this is the
/// fixed iteration order the selection step's tie-breaking is defined over.
pub fn candidates(windows: &[usize], order_min: usize, order_max: usize) -> Vec<Candidate> {
    let mut out = Vec::with_capacity(windows.len() * (order_max - order_min + 1));
    for &w in windows {
        for o in order_min..=order_max {
            out.push(Candidate::new(w, o));
        }
    }
    out
}
