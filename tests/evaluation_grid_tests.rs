#![cfg(feature = "dev")]
//! Tests for candidate grid generation.
//!
//! These tests verify the window sweep and the candidate cross product:
//! - Budgeted, evenly spaced, de-duplicated window generation
//! - Containment and monotonicity of the sweep
//! - Degenerate and inverted bound handling
//! - The fixed candidate emission order

use autosmooth::internals::evaluation::grid::{candidates, window_grid};

// ============================================================================
// Window Sweep Tests
// ============================================================================

/// Test the documented sweep property for a typical range.
///
/// For window_min=6, window_max=20, max_samples=50 the sweep must be a
/// strictly increasing, de-duplicated integer sequence contained in [6, 20].
#[test]
fn test_window_grid_strictly_increasing_and_contained() {
    let windows = window_grid(6, 20, 50);

    assert!(!windows.is_empty());
    assert_eq!(windows[0], 6);
    assert_eq!(*windows.last().unwrap(), 20);
    assert!(windows.windows(2).all(|w| w[0] < w[1]));
    assert!(windows.iter().all(|&w| (6..=20).contains(&w)));
}

/// Test that a budget wider than the range collapses duplicates.
///
/// 50 spaced points over [6, 20] can realize at most 15 distinct integers.
#[test]
fn test_window_grid_collapses_duplicates() {
    let windows = window_grid(6, 20, 50);
    assert_eq!(windows.len(), 15);
}

/// Test that a budget narrower than the range subsamples it.
#[test]
fn test_window_grid_respects_budget() {
    let windows = window_grid(10, 1000, 8);
    assert_eq!(windows.len(), 8);
    assert_eq!(windows[0], 10);
    assert_eq!(*windows.last().unwrap(), 1000);
    assert!(windows.windows(2).all(|w| w[0] < w[1]));
}

/// Test the inverted-range edge case.
///
/// Very short signals can derive window_max below window_min; the sweep
/// must still produce the single point window_min.
#[test]
fn test_window_grid_inverted_range() {
    assert_eq!(window_grid(30, 25, 50), vec![30]);
}

/// Test a collapsed range and a single-sample budget.
#[test]
fn test_window_grid_degenerate() {
    assert_eq!(window_grid(5, 5, 50), vec![5]);
    assert_eq!(window_grid(6, 20, 1), vec![6]);
}

// ============================================================================
// Candidate Cross Product Tests
// ============================================================================

/// Test count and emission order of the cross product.
///
/// Candidates must come out ascending by window, then ascending by order;
/// selection tie-breaking is defined over this fixed order.
#[test]
fn test_candidates_order_and_count() {
    let windows = vec![6, 9, 12];
    let cands = candidates(&windows, 2, 4);

    assert_eq!(cands.len(), 9);
    for pair in cands.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        assert!(
            a.window_length < b.window_length
                || (a.window_length == b.window_length
                    && a.polynomial_order < b.polynomial_order)
        );
    }
    assert_eq!(cands[0].window_length, 6);
    assert_eq!(cands[0].polynomial_order, 2);
    assert_eq!(cands[8].window_length, 12);
    assert_eq!(cands[8].polynomial_order, 4);
}

/// Test that a single order produces one candidate per window.
#[test]
fn test_candidates_single_order() {
    let cands = candidates(&[3, 5, 7], 0, 0);
    assert_eq!(cands.len(), 3);
    assert!(cands.iter().all(|c| c.polynomial_order == 0));
}
