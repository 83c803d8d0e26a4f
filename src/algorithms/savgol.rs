//! Savitzky-Golay smoothing kernel.
//!
//! ## Purpose
//!
//! This module implements the smoothing primitive itself: local polynomial
//! least-squares smoothing over a sliding window. It also defines the
//! `SmoothingKernel` capability trait through which the tuning engine
//! invokes it, so alternative filter kernels can be substituted without
//! touching the search algorithm.
//!
//! ## Design notes
//!
//! * **Convolution interior**: For interior points the least-squares fit
//!   reduces to a fixed convolution; the coefficients are computed once per
//!   (window, order) pair by solving the normal equations at the window
//!   center.
//! * **Polynomial edges**: The first and last `window / 2` outputs come from
//!   a polynomial fitted to the leading/trailing full window and evaluated
//!   at the edge positions, so the filter neither shortens the sequence nor
//!   pads it with synthetic samples.
//! * **Even windows**: The evaluation point is the exact window center
//!   `(window - 1) / 2`, which is a half-integer for even windows; the fit
//!   is evaluated there rather than rejecting the candidate.
//! * **Conditioning**: Window abscissae are centered on the evaluation
//!   point and scaled to order unity before forming the normal equations.
//!
//! ## Invariants
//!
//! * Output length always equals input length.
//! * `polynomial_order < window_length` and `input length >= window_length`,
//!   both checked here and reported as errors, never panics.
//! * Interior convolution weights sum to 1 (the fit reproduces constants).
//!
//! ## Non-goals
//!
//! * This module does not handle missing values (the applicator strips them).
//! * This module does not select window or order (the engine's job).

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::math::polyfit::{polyfit, polyval, solve_dense};
use crate::primitives::errors::SmoothError;

// ============================================================================
// Capability Trait
// ============================================================================

/// Capability interface for a smoothing primitive.
///
/// Given a dense (gap-free) sequence and a parameter pair, a kernel returns
/// a smoothed sequence of the same length. The tuning engine depends only on
/// this trait, not on any concrete kernel.
pub trait SmoothingKernel<T: Float> {
    /// Smooth `values` with the given window length and polynomial order.
    fn smooth(
        &self,
        values: &[T],
        window_length: usize,
        polynomial_order: usize,
    ) -> Result<Vec<T>, SmoothError>;
}

// ============================================================================
// Savitzky-Golay Kernel
// ============================================================================

/// Savitzky-Golay filter: local polynomial least-squares smoothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct SavitzkyGolay;

impl SavitzkyGolay {
    /// Validate a (window, order) pair against a dense input length.
    fn validate(n: usize, window_length: usize, polynomial_order: usize) -> Result<(), SmoothError> {
        if window_length == 0 {
            return Err(SmoothError::InvalidWindowBounds { min: 0 });
        }
        if polynomial_order >= window_length {
            return Err(SmoothError::InvalidPolyOrder {
                order: polynomial_order,
                window_length,
            });
        }
        if n < window_length {
            return Err(SmoothError::TooFewPoints {
                got: n,
                min: window_length,
            });
        }
        Ok(())
    }

    /// Compute the interior convolution coefficients for one parameter pair.
    ///
    /// Solves `G m = e_0` in the centered, scaled monomial basis and expands
    /// `m` back onto the window samples: `h_k = sum_j m_j z_k^j`. The result
    /// projects a window onto the value of its least-squares polynomial at
    /// the window center.
    pub fn coefficients<T: Float>(
        window_length: usize,
        polynomial_order: usize,
    ) -> Result<Vec<T>, SmoothError> {
        Self::validate(window_length, window_length, polynomial_order)?;

        let w = window_length;
        let dim = polynomial_order + 1;
        let two = T::from(2.0).unwrap();

        // Window abscissae centered on the evaluation point and scaled to
        // order unity: z_k = (k - (w - 1)/2) / scale.
        let center = (T::from(w).unwrap() - T::one()) / two;
        let scale = T::max(center, T::one());
        let z: Vec<T> = (0..w)
            .map(|k| (T::from(k).unwrap() - center) / scale)
            .collect();

        // Gram matrix of power sums
        let mut power_sums = vec![T::zero(); 2 * polynomial_order + 1];
        for &zk in &z {
            let mut p = T::one();
            for sum in power_sums.iter_mut() {
                *sum = *sum + p;
                p = p * zk;
            }
        }
        let mut gram: Vec<Vec<T>> = (0..dim)
            .map(|j| (0..dim).map(|k| power_sums[j + k]).collect())
            .collect();

        // Evaluation at the (centered) origin selects the constant term
        let mut rhs = vec![T::zero(); dim];
        rhs[0] = T::one();

        let m = solve_dense(&mut gram, &mut rhs).ok_or(SmoothError::SingularFit {
            window_length,
            polynomial_order,
        })?;

        Ok(z.iter().map(|&zk| polyval(&m, zk)).collect())
    }

    /// Fit a polynomial to one full edge window and evaluate it at the given
    /// in-window offsets, writing results into `out`.
    fn fit_edge<T: Float>(
        window: &[T],
        offsets: std::ops::Range<usize>,
        polynomial_order: usize,
        out: &mut [T],
        out_start: usize,
    ) -> Result<(), SmoothError> {
        let w = window.len();
        let two = T::from(2.0).unwrap();
        let center = (T::from(w).unwrap() - T::one()) / two;
        let scale = T::max(center, T::one());
        let z: Vec<T> = (0..w)
            .map(|k| (T::from(k).unwrap() - center) / scale)
            .collect();

        let coeffs =
            polyfit(&z, window, polynomial_order).ok_or(SmoothError::SingularFit {
                window_length: w,
                polynomial_order,
            })?;

        for (slot, offset) in offsets.enumerate() {
            let at = (T::from(offset).unwrap() - center) / scale;
            out[out_start + slot] = polyval(&coeffs, at);
        }
        Ok(())
    }
}

impl<T: Float> SmoothingKernel<T> for SavitzkyGolay {
    fn smooth(
        &self,
        values: &[T],
        window_length: usize,
        polynomial_order: usize,
    ) -> Result<Vec<T>, SmoothError> {
        let n = values.len();
        Self::validate(n, window_length, polynomial_order)?;

        let w = window_length;
        let edge = w / 2;
        let half = (w - 1) / 2;
        let mut out = vec![T::zero(); n];

        // Interior: fixed convolution with the central coefficients
        let h = Self::coefficients::<T>(w, polynomial_order)?;
        for i in edge..(n - edge) {
            let start = i - half;
            let mut acc = T::zero();
            for (k, &hk) in h.iter().enumerate() {
                acc = acc + hk * values[start + k];
            }
            out[i] = acc;
        }

        // Edges: polynomial fit over the leading/trailing full window
        if edge > 0 {
            Self::fit_edge(&values[..w], 0..edge, polynomial_order, &mut out, 0)?;
            Self::fit_edge(
                &values[n - w..],
                (w - edge)..w,
                polynomial_order,
                &mut out,
                n - edge,
            )?;
        }

        Ok(out)
    }
}
