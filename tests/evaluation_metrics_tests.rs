//! Tests for the scoring metrics.
//!
//! These tests verify the metric evaluator:
//! - Sanity identities for a perfect fit
//! - Known values for a simple discrepancy
//! - The documented non-finite R² for a constant true signal

use approx::assert_relative_eq;

use autosmooth::prelude::*;

// ============================================================================
// Perfect Fit Tests
// ============================================================================

/// Test the perfect-fit identities.
///
/// RMSE(y, y) = 0, MAE(y, y) = 0, R²(y, y) = 1 for non-constant y.
#[test]
fn test_perfect_fit_identities() {
    let y = vec![1.0, 2.5, -0.5, 4.0, 3.0];
    let scores = Scores::compute(&y, &y);

    assert_relative_eq!(scores.mse, 0.0);
    assert_relative_eq!(scores.rmse, 0.0);
    assert_relative_eq!(scores.mae, 0.0);
    assert_relative_eq!(scores.r2, 1.0);
}

// ============================================================================
// Known Value Tests
// ============================================================================

/// Test metric values against a hand-computed example.
#[test]
fn test_known_values() {
    let y_true = vec![1.0, 2.0, 3.0];
    let y_hat = vec![1.0, 2.0, 4.0];
    let scores = Scores::compute(&y_true, &y_hat);

    assert_relative_eq!(scores.mse, 1.0 / 3.0, epsilon = 1e-12);
    assert_relative_eq!(scores.rmse, (1.0f64 / 3.0).sqrt(), epsilon = 1e-12);
    assert_relative_eq!(scores.mae, 1.0 / 3.0, epsilon = 1e-12);
    // ss_res = 1, ss_tot = 2
    assert_relative_eq!(scores.r2, 0.5, epsilon = 1e-12);
}

/// Test that R² goes negative when the fit is worse than the mean baseline.
#[test]
fn test_r2_negative_for_bad_fit() {
    let y_true = vec![1.0, 2.0, 3.0];
    let y_hat = vec![3.0, 1.0, 5.0];
    let scores = Scores::compute(&y_true, &y_hat);

    assert!(scores.r2 < 0.0);
}

// ============================================================================
// Degenerate Input Tests
// ============================================================================

/// Test R² on a constant true signal.
///
/// ss_tot is zero, so the value is non-finite by design: a degenerate
/// value, not an error.
#[test]
fn test_r2_nonfinite_for_constant_signal() {
    let y_true: Vec<f64> = vec![5.0; 6];

    let perfect = Scores::compute(&y_true, &y_true);
    assert!(!perfect.r2.is_finite());

    let imperfect = Scores::compute(&y_true, &[5.0, 5.1, 5.0, 4.9, 5.0, 5.0]);
    assert!(!imperfect.r2.is_finite());

    // The error metrics stay well-defined
    assert_relative_eq!(perfect.rmse, 0.0);
    assert!(imperfect.rmse > 0.0);
}

// ============================================================================
// Metric Selector Tests
// ============================================================================

/// Test that the selector reads the matching field.
#[test]
fn test_metric_selector() {
    let scores = Scores {
        mse: 4.0,
        rmse: 2.0,
        mae: 1.5,
        r2: 0.9,
    };

    assert_relative_eq!(scores.metric(Metric::Rmse), 2.0);
    assert_relative_eq!(scores.metric(Metric::Mae), 1.5);
    assert_relative_eq!(scores.metric(Metric::RSquared), 0.9);

    assert_eq!(Metric::default(), Metric::Rmse);
    assert_eq!(Metric::RSquared.name(), "r2");
}
