//! Tests for the Savitzky-Golay kernel.
//!
//! These tests verify the smoothing primitive:
//! - Classic convolution coefficients
//! - Exact reproduction of polynomial signals up to the fitted order
//! - Moving-average behavior at order zero
//! - Parameter validation

use approx::assert_relative_eq;

use autosmooth::prelude::*;

// ============================================================================
// Coefficient Tests
// ============================================================================

/// Test the classic quadratic window-5 coefficients.
///
/// The textbook values are [-3, 12, 17, 12, -3] / 35.
#[test]
fn test_classic_quadratic_coefficients() {
    let h = SavitzkyGolay::coefficients::<f64>(5, 2).unwrap();
    let expected = [-3.0 / 35.0, 12.0 / 35.0, 17.0 / 35.0, 12.0 / 35.0, -3.0 / 35.0];

    assert_eq!(h.len(), 5);
    for (&got, &want) in h.iter().zip(expected.iter()) {
        assert_relative_eq!(got, want, epsilon = 1e-10);
    }
}

/// Test that convolution coefficients sum to one.
///
/// The local fit reproduces constants, so the weights form a partition of
/// unity for every valid (window, order) pair, even windows included.
#[test]
fn test_coefficients_sum_to_one() {
    for (w, o) in [(3, 0), (5, 2), (6, 2), (7, 3), (11, 4), (20, 6)] {
        let h = SavitzkyGolay::coefficients::<f64>(w, o).unwrap();
        let sum: f64 = h.iter().sum();
        assert_relative_eq!(sum, 1.0, epsilon = 1e-9);
    }
}

// ============================================================================
// Reproduction Tests
// ============================================================================

/// Test that a quadratic signal passes through an order-2 filter unchanged.
///
/// Interior points and edge fits are both exact for polynomials of degree
/// at most the filter order.
#[test]
fn test_quadratic_signal_reproduced_exactly() {
    let y: Vec<f64> = (0..25)
        .map(|i| {
            let x = i as f64;
            0.5 * x * x - 3.0 * x + 2.0
        })
        .collect();

    let smoothed = SavitzkyGolay.smooth(&y, 7, 2).unwrap();

    assert_eq!(smoothed.len(), y.len());
    for (&got, &want) in smoothed.iter().zip(y.iter()) {
        assert_relative_eq!(got, want, epsilon = 1e-7, max_relative = 1e-9);
    }
}

/// Test that a linear trend survives any valid filter.
#[test]
fn test_linear_trend_preserved() {
    let y: Vec<f64> = (0..30).map(|i| 2.0 * i as f64 + 3.0).collect();

    for (w, o) in [(5, 1), (9, 2), (11, 3)] {
        let smoothed = SavitzkyGolay.smooth(&y, w, o).unwrap();
        for (&got, &want) in smoothed.iter().zip(y.iter()) {
            assert_relative_eq!(got, want, epsilon = 1e-7, max_relative = 1e-9);
        }
    }
}

/// Test constant preservation.
#[test]
fn test_constant_preserved() {
    let y = vec![5.0; 12];
    let smoothed = SavitzkyGolay.smooth(&y, 6, 2).unwrap();

    for &got in &smoothed {
        assert_relative_eq!(got, 5.0, epsilon = 1e-10);
    }
}

/// Test order-0 moving-average behavior, including the edge fits.
#[test]
fn test_order_zero_is_moving_average() {
    let y = vec![0.0, 3.0, 6.0, 9.0, 12.0];
    let smoothed = SavitzkyGolay.smooth(&y, 3, 0).unwrap();

    // Interior: centered 3-point means; edges: mean of the nearest window
    let expected = [3.0, 3.0, 6.0, 9.0, 9.0];
    for (&got, &want) in smoothed.iter().zip(expected.iter()) {
        assert_relative_eq!(got, want, epsilon = 1e-12);
    }
}

/// Test that smoothing actually attenuates alternating noise.
#[test]
fn test_noise_is_attenuated() {
    let y: Vec<f64> = (0..40)
        .map(|i| (i as f64 * 0.2).sin() + if i % 2 == 0 { 0.3 } else { -0.3 })
        .collect();
    let clean: Vec<f64> = (0..40).map(|i| (i as f64 * 0.2).sin()).collect();

    let smoothed = SavitzkyGolay.smooth(&y, 9, 2).unwrap();

    let err = |a: &[f64], b: &[f64]| -> f64 {
        a.iter()
            .zip(b.iter())
            .map(|(x, y)| (x - y) * (x - y))
            .sum::<f64>()
    };
    assert!(err(&smoothed, &clean) < err(&y, &clean));
}

// ============================================================================
// Validation Tests
// ============================================================================

/// Test rejection of an order not below the window.
#[test]
fn test_order_must_be_below_window() {
    let y = vec![1.0; 10];
    let err = SavitzkyGolay.smooth(&y, 5, 5).unwrap_err();

    assert_eq!(
        err,
        SmoothError::InvalidPolyOrder {
            order: 5,
            window_length: 5
        }
    );
}

/// Test rejection of inputs shorter than the window.
#[test]
fn test_input_must_cover_window() {
    let y = vec![1.0, 2.0, 3.0];
    let err = SavitzkyGolay.smooth(&y, 7, 2).unwrap_err();

    assert_eq!(err, SmoothError::TooFewPoints { got: 3, min: 7 });
}

/// Test the single-point window identity.
#[test]
fn test_window_one_is_identity() {
    let y = vec![1.0, -2.0, 4.5, 0.0];
    let smoothed = SavitzkyGolay.smooth(&y, 1, 0).unwrap();

    for (&got, &want) in smoothed.iter().zip(y.iter()) {
        assert_relative_eq!(got, want, epsilon = 1e-12);
    }
}
