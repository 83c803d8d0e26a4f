#![cfg(feature = "dev")]
//! Tests for polynomial least-squares fitting.
//!
//! These tests verify the numerical building blocks of the kernel:
//! - Exact recovery of polynomial coefficients
//! - Singularity detection
//! - Horner evaluation

use approx::assert_relative_eq;

use autosmooth::internals::math::polyfit::{polyfit, polyval, solve_dense};

// ============================================================================
// Fitting Tests
// ============================================================================

/// Test exact recovery of quadratic coefficients from noiseless data.
#[test]
fn test_polyfit_recovers_quadratic() {
    let z: Vec<f64> = (-3..=3).map(|i| i as f64).collect();
    let y: Vec<f64> = z.iter().map(|&x| 2.0 - 1.5 * x + 0.25 * x * x).collect();

    let coeffs = polyfit(&z, &y, 2).unwrap();

    assert_eq!(coeffs.len(), 3);
    assert_relative_eq!(coeffs[0], 2.0, epsilon = 1e-10);
    assert_relative_eq!(coeffs[1], -1.5, epsilon = 1e-10);
    assert_relative_eq!(coeffs[2], 0.25, epsilon = 1e-10);
}

/// Test the least-squares mean for a degree-0 fit.
#[test]
fn test_polyfit_degree_zero_is_mean() {
    let z = vec![0.0, 1.0, 2.0, 3.0];
    let y = vec![1.0, 3.0, 5.0, 7.0];

    let coeffs = polyfit(&z, &y, 0).unwrap();
    assert_relative_eq!(coeffs[0], 4.0, epsilon = 1e-12);
}

/// Test that underdetermined fits are rejected.
#[test]
fn test_polyfit_underdetermined() {
    let z = vec![0.0, 1.0];
    let y = vec![1.0, 2.0];
    assert!(polyfit(&z, &y, 2).is_none());
}

/// Test that coincident abscissae make the system singular.
#[test]
fn test_polyfit_singular_on_coincident_points() {
    let z = vec![1.0, 1.0, 1.0];
    let y = vec![1.0, 2.0, 3.0];
    assert!(polyfit(&z, &y, 1).is_none());
}

// ============================================================================
// Solver Tests
// ============================================================================

/// Test the dense solver on a well-conditioned 2x2 system.
#[test]
fn test_solve_dense_basic() {
    let mut a = vec![vec![2.0, 1.0], vec![1.0, 3.0]];
    let mut b = vec![5.0, 10.0];

    let x = solve_dense(&mut a, &mut b).unwrap();
    assert_relative_eq!(x[0], 1.0, epsilon = 1e-12);
    assert_relative_eq!(x[1], 3.0, epsilon = 1e-12);
}

/// Test that a singular matrix is reported, not solved.
#[test]
fn test_solve_dense_singular() {
    let mut a = vec![vec![1.0, 2.0], vec![2.0, 4.0]];
    let mut b = vec![1.0, 2.0];
    assert!(solve_dense(&mut a, &mut b).is_none());
}

// ============================================================================
// Evaluation Tests
// ============================================================================

/// Test Horner evaluation, constant term first.
#[test]
fn test_polyval() {
    let coeffs = vec![1.0, -2.0, 3.0];

    assert_relative_eq!(polyval(&coeffs, 0.0), 1.0);
    assert_relative_eq!(polyval(&coeffs, 2.0), 9.0);
    assert_relative_eq!(polyval(&coeffs, -1.0), 6.0);
}
