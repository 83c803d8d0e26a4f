//! Polynomial least-squares fitting.
//!
//! ## Purpose
//!
//! This module provides the numerical building blocks for the Savitzky-Golay
//! kernel: fitting a polynomial to a short sequence of points by solving the
//! normal equations, and evaluating the result.
//!
//! ## Design notes
//!
//! * **Normal equations**: Windows are short (tens of samples) and orders are
//!   small, so forming the Gram matrix and solving it directly is both fast
//!   and accurate enough, provided the abscissae are centered and scaled by
//!   the caller.
//! * **Partial pivoting**: The dense solver pivots on the largest remaining
//!   column entry; a vanishing pivot reports a singular system instead of
//!   producing garbage coefficients.
//! * **Generics**: All computations are generic over `Float` types.
//!
//! ## Invariants
//!
//! * `polyfit` requires at least `degree + 1` points.
//! * Returned coefficient vectors have exactly `degree + 1` entries,
//!   constant term first.
//!
//! ## Non-goals
//!
//! * This module does not choose window positions or orders.
//! * This module does not provide orthogonal-basis or QR-based fitting.

// External dependencies
use num_traits::Float;

// ============================================================================
// Linear System Solver
// ============================================================================

/// Solve the dense system `a * x = b` in place via Gaussian elimination
/// with partial pivoting.
///
/// Returns `None` when a pivot vanishes (singular or near-singular system).
pub fn solve_dense<T: Float>(a: &mut [Vec<T>], b: &mut [T]) -> Option<Vec<T>> {
    let n = b.len();
    debug_assert!(a.len() == n && a.iter().all(|row| row.len() == n));

    for col in 0..n {
        // Pivot on the largest remaining entry in this column
        let mut pivot = col;
        for row in (col + 1)..n {
            if a[row][col].abs() > a[pivot][col].abs() {
                pivot = row;
            }
        }
        if a[pivot][col].abs() <= T::epsilon() {
            return None;
        }
        if pivot != col {
            a.swap(pivot, col);
            b.swap(pivot, col);
        }

        // Eliminate below the pivot
        for row in (col + 1)..n {
            let factor = a[row][col] / a[col][col];
            if factor == T::zero() {
                continue;
            }
            for k in col..n {
                let update = a[col][k] * factor;
                a[row][k] = a[row][k] - update;
            }
            b[row] = b[row] - b[col] * factor;
        }
    }

    // Back substitution
    let mut x = vec![T::zero(); n];
    for col in (0..n).rev() {
        let mut acc = b[col];
        for k in (col + 1)..n {
            acc = acc - a[col][k] * x[k];
        }
        x[col] = acc / a[col][col];
    }

    Some(x)
}

// ============================================================================
// Polynomial Fitting
// ============================================================================

/// Fit a polynomial of the given degree to `(z, y)` by least squares.
///
/// Returns the coefficients `c_0..c_degree` (constant term first), or `None`
/// when the normal equations are singular. For well-conditioned results the
/// caller should supply centered, order-unity abscissae.
pub fn polyfit<T: Float>(z: &[T], y: &[T], degree: usize) -> Option<Vec<T>> {
    let n = z.len();
    debug_assert_eq!(n, y.len());
    if n < degree + 1 {
        return None;
    }

    let dim = degree + 1;

    // Power sums S_m = sum z_i^m for m in 0..=2*degree
    let mut power_sums = vec![T::zero(); 2 * degree + 1];
    let mut rhs = vec![T::zero(); dim];
    for (&zi, &yi) in z.iter().zip(y.iter()) {
        let mut p = T::one();
        for (m, sum) in power_sums.iter_mut().enumerate() {
            *sum = *sum + p;
            if m < dim {
                rhs[m] = rhs[m] + p * yi;
            }
            p = p * zi;
        }
    }

    // Gram matrix G[j][k] = S_{j+k}
    let mut gram: Vec<Vec<T>> = (0..dim)
        .map(|j| (0..dim).map(|k| power_sums[j + k]).collect())
        .collect();

    solve_dense(&mut gram, &mut rhs)
}

/// Evaluate a polynomial (constant term first) at `z` via Horner's scheme.
#[inline]
pub fn polyval<T: Float>(coeffs: &[T], z: T) -> T {
    coeffs
        .iter()
        .rev()
        .fold(T::zero(), |acc, &c| acc * z + c)
}
