//! Indexed signal type with missing-value support.
//!
//! ## Purpose
//!
//! This module defines the `Signal` container used throughout the crate: an
//! ordered sequence of numeric samples keyed by strictly increasing position
//! keys, where individual samples may be missing.
//!
//! ## Design notes
//!
//! * **Immutability**: A `Signal` is never mutated in place; filtering
//!   produces a fresh signal aligned to the same index.
//! * **Dense/expand pattern**: Missing entries are stripped to a dense view
//!   before filtering and re-inserted (as missing) afterwards, preserving an
//!   O(n) position mapping between the two representations.
//! * **Validation at construction**: Once a `Signal` exists, its index is
//!   known to be finite and strictly increasing and its present samples are
//!   known to be finite.
//!
//! ## Key concepts
//!
//! ### Dense-Process-Expand
//! 1. **Dense**: `to_dense()` drops missing entries, recording their positions.
//! 2. **Process**: the smoothing kernel operates on the dense sequence only.
//! 3. **Expand**: `with_dense()` maps results back to the full index; positions
//!    that were missing stay missing, never extrapolated or interpolated.
//!
//! ## Invariants
//!
//! * `index.len() == values.len()`.
//! * Position keys are finite and strictly increasing (hence unique).
//! * Every present sample is finite.
//!
//! ## Non-goals
//!
//! * This module does not perform smoothing or metric computation.
//! * This module does not support multivariate/tabular data.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::SmoothError;

// ============================================================================
// Data Structures
// ============================================================================

/// An ordered sequence of samples keyed by strictly increasing positions.
///
/// Missing entries are represented as `None` and are excluded from filtering
/// and metric computation, but re-appear (as missing) in any output aligned
/// to this signal's index.
#[derive(Debug, Clone, PartialEq)]
pub struct Signal<T> {
    index: Vec<T>,
    values: Vec<Option<T>>,
}

/// Dense view of a signal: present samples plus their original positions.
#[derive(Debug, Clone)]
pub struct DenseSignal<T> {
    /// Positions of the present samples in the original signal.
    pub positions: Vec<usize>,

    /// The present samples, in index order.
    pub values: Vec<T>,
}

// ============================================================================
// Construction
// ============================================================================

impl<T: Float> Signal<T> {
    /// Create a signal from explicit position keys and optional samples.
    ///
    /// Fails if the lengths differ, a key is non-finite or out of order, or
    /// a present sample is non-finite.
    pub fn new(index: Vec<T>, values: Vec<Option<T>>) -> Result<Self, SmoothError> {
        if index.len() != values.len() {
            return Err(SmoothError::MismatchedInputs {
                index_len: index.len(),
                values_len: values.len(),
            });
        }

        for (i, &key) in index.iter().enumerate() {
            if !key.is_finite() {
                return Err(SmoothError::InvalidNumericValue(format!(
                    "index[{}]={}",
                    i,
                    key.to_f64().unwrap_or(f64::NAN)
                )));
            }
            if i > 0 && key <= index[i - 1] {
                return Err(SmoothError::UnsortedIndex { position: i });
            }
        }

        for (i, v) in values.iter().enumerate() {
            if let Some(v) = v {
                if !v.is_finite() {
                    return Err(SmoothError::InvalidNumericValue(format!(
                        "values[{}]={}",
                        i,
                        v.to_f64().unwrap_or(f64::NAN)
                    )));
                }
            }
        }

        Ok(Self { index, values })
    }

    /// Create a gap-free signal from plain samples, keyed by `0..n`.
    pub fn from_values(values: Vec<T>) -> Result<Self, SmoothError> {
        let index = (0..values.len())
            .map(|i| T::from(i).unwrap_or_else(T::zero))
            .collect();
        Self::new(index, values.into_iter().map(Some).collect())
    }

    /// Create a signal where non-finite samples are treated as missing.
    ///
    /// This mirrors the common convention of encoding gaps as NaN in a plain
    /// numeric array.
    pub fn from_nan_values(index: Vec<T>, values: Vec<T>) -> Result<Self, SmoothError> {
        let values = values
            .into_iter()
            .map(|v| if v.is_finite() { Some(v) } else { None })
            .collect();
        Self::new(index, values)
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Number of entries, including missing ones.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// Whether the signal has no entries at all.
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// The position keys.
    pub fn index(&self) -> &[T] {
        &self.index
    }

    /// The samples, with `None` marking missing entries.
    pub fn values(&self) -> &[Option<T>] {
        &self.values
    }

    /// Number of missing entries.
    pub fn missing_count(&self) -> usize {
        self.values.iter().filter(|v| v.is_none()).count()
    }

    /// Number of present entries.
    pub fn dense_len(&self) -> usize {
        self.len() - self.missing_count()
    }

    // ========================================================================
    // Dense/Expand Mapping
    // ========================================================================

    /// Strip missing entries, keeping the position of each present sample.
    pub fn to_dense(&self) -> DenseSignal<T> {
        let mut positions = Vec::with_capacity(self.values.len());
        let mut values = Vec::with_capacity(self.values.len());

        for (i, v) in self.values.iter().enumerate() {
            if let Some(v) = v {
                positions.push(i);
                values.push(*v);
            }
        }

        DenseSignal { positions, values }
    }

    /// Re-expand dense results onto this signal's index.
    ///
    /// `positions[i]` receives `values[i]`; every other entry is missing.
    /// The two slices must have equal length and positions must lie within
    /// the index, which holds by construction for a `to_dense()` round trip.
    pub fn with_dense(&self, positions: &[usize], values: &[T]) -> Self {
        debug_assert_eq!(positions.len(), values.len());

        let mut out = vec![None; self.index.len()];
        for (&pos, &v) in positions.iter().zip(values.iter()) {
            out[pos] = Some(v);
        }

        Self {
            index: self.index.clone(),
            values: out,
        }
    }
}
