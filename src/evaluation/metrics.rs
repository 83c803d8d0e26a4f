//! Scoring metrics for filtering results.
//!
//! ## Purpose
//!
//! This module computes scalar discrepancy measures between an original
//! sequence and its smoothed counterpart: MSE, RMSE, MAE, and the
//! coefficient of determination.
//!
//! ## Design notes
//!
//! * **Pre-aligned inputs**: Callers pass two equal-length dense slices with
//!   missing entries already stripped at identical positions.
//! * **Unconditional**: All four metrics are computed per call; which one
//!   drives candidate selection is the orchestrator's concern.
//! * **No special-casing**: R² uses the plain `1 - ss_res / ss_tot` formula.
//!   A constant true signal makes it non-finite (NaN or -inf), which is a
//!   documented degenerate value, not an error.
//!
//! ## Invariants
//!
//! * MSE, RMSE, and MAE are non-negative for finite inputs.
//! * R² <= 1, and may be negative when the smoother fits worse than the mean.
//!
//! ## Non-goals
//!
//! * This module does not perform the smoothing.
//! * This module does not decide which candidate wins.

// External dependencies
use num_traits::Float;
use std::fmt::{Display, Formatter, Result};

// ============================================================================
// Metric Selector
// ============================================================================

/// Metric used to rank candidates during the search.
///
/// Selection always minimizes the chosen metric's value; ties resolve to the
/// first-encountered candidate in grid order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Metric {
    /// Root mean squared error.
    #[default]
    Rmse,

    /// Mean absolute error.
    Mae,

    /// Coefficient of determination.
    RSquared,
}

impl Metric {
    /// Short lowercase name, as used in configuration and messages.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Rmse => "rmse",
            Self::Mae => "mae",
            Self::RSquared => "r2",
        }
    }
}

impl Display for Metric {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        f.write_str(self.name())
    }
}

// ============================================================================
// Metric Functions
// ============================================================================

/// Mean squared error: `(1/n) * sum (y_i - y_hat_i)^2`.
pub fn mse<T: Float>(y_true: &[T], y_hat: &[T]) -> T {
    debug_assert_eq!(y_true.len(), y_hat.len());
    let n = T::from(y_true.len()).unwrap_or_else(T::one);
    let rss = y_true
        .iter()
        .zip(y_hat.iter())
        .fold(T::zero(), |acc, (&yi, &ys)| {
            let r = yi - ys;
            acc + r * r
        });
    rss / n
}

/// Root mean squared error: `sqrt(MSE)`.
pub fn rmse<T: Float>(y_true: &[T], y_hat: &[T]) -> T {
    mse(y_true, y_hat).sqrt()
}

/// Mean absolute error: `(1/n) * sum |y_i - y_hat_i|`.
pub fn mae<T: Float>(y_true: &[T], y_hat: &[T]) -> T {
    debug_assert_eq!(y_true.len(), y_hat.len());
    let n = T::from(y_true.len()).unwrap_or_else(T::one);
    let sum = y_true
        .iter()
        .zip(y_hat.iter())
        .fold(T::zero(), |acc, (&yi, &ys)| acc + (yi - ys).abs());
    sum / n
}

/// Coefficient of determination: `1 - ss_res / ss_tot`.
///
/// Non-finite for a constant true signal (`ss_tot == 0`); may be negative
/// when the smoothed signal fits worse than the mean baseline.
pub fn r2<T: Float>(y_true: &[T], y_hat: &[T]) -> T {
    debug_assert_eq!(y_true.len(), y_hat.len());
    let n = T::from(y_true.len()).unwrap_or_else(T::one);
    let mean = y_true.iter().fold(T::zero(), |acc, &v| acc + v) / n;

    let (ss_tot, ss_res) = y_true.iter().zip(y_hat.iter()).fold(
        (T::zero(), T::zero()),
        |(tot, res), (&yi, &ys)| {
            let deviation = yi - mean;
            let residual = yi - ys;
            (tot + deviation * deviation, res + residual * residual)
        },
    );

    T::one() - ss_res / ss_tot
}

// ============================================================================
// Score Table Row Values
// ============================================================================

/// All four metrics for one candidate, computed unconditionally.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Scores<T> {
    /// Mean squared error.
    pub mse: T,

    /// Root mean squared error.
    pub rmse: T,

    /// Mean absolute error.
    pub mae: T,

    /// Coefficient of determination.
    pub r2: T,
}

impl<T: Float> Scores<T> {
    /// Compute all metrics for one (original, smoothed) pair of dense slices.
    pub fn compute(y_true: &[T], y_hat: &[T]) -> Self {
        let mse = mse(y_true, y_hat);
        Self {
            mse,
            rmse: mse.sqrt(),
            mae: mae(y_true, y_hat),
            r2: r2(y_true, y_hat),
        }
    }

    /// The value of the selected metric.
    pub fn metric(&self, metric: Metric) -> T {
        match metric {
            Metric::Rmse => self.rmse,
            Metric::Mae => self.mae,
            Metric::RSquared => self.r2,
        }
    }
}

impl<T: Float + Display> Display for Scores<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(
            f,
            "rmse={:.6} mae={:.6} r2={:.6}",
            self.rmse, self.mae, self.r2
        )
    }
}
