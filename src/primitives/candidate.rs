//! Candidate parameter pairs for the tuning search.
//!
//! A candidate is one (window length, polynomial order) pair under
//! evaluation. The search-level overfitting guard lives here as well: a
//! candidate whose window is not sufficiently wider than its order is
//! rejected before any filtering happens.

// External dependencies
use num_traits::Float;
use std::fmt::{Display, Formatter, Result};

// ============================================================================
// Candidate
// ============================================================================

/// A (window length, polynomial order) pair under evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Candidate {
    /// Number of consecutive samples used for each local fit.
    pub window_length: usize,

    /// Degree of the local polynomial fitted within each window.
    pub polynomial_order: usize,
}

impl Candidate {
    /// Create a new candidate pair.
    #[inline]
    pub fn new(window_length: usize, polynomial_order: usize) -> Self {
        Self {
            window_length,
            polynomial_order,
        }
    }

    /// Window-to-order ratio as a float.
    ///
    /// Order 0 yields infinity, so a moving-average candidate always passes
    /// the ratio guard.
    #[inline]
    pub fn ratio<T: Float>(&self) -> T {
        let w = T::from(self.window_length).unwrap_or_else(T::zero);
        let o = T::from(self.polynomial_order).unwrap_or_else(T::zero);
        w / o
    }

    /// Whether the window is at least `threshold` times the order.
    ///
    /// Candidates below the threshold let the polynomial nearly interpolate
    /// the window and are skipped by the search.
    #[inline]
    pub fn satisfies_ratio<T: Float>(&self, threshold: T) -> bool {
        self.ratio::<T>() >= threshold
    }
}

impl Display for Candidate {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(
            f,
            "(window={}, order={})",
            self.window_length, self.polynomial_order
        )
    }
}
