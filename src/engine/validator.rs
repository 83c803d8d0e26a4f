//! Input validation for tuning configuration and data.
//!
//! ## Purpose
//!
//! This module provides validation functions for the tuner's configuration
//! parameters and input signals. It checks requirements such as non-empty
//! input, sufficient dense points, and parameter bounds.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Efficiency**: Checks are ordered from cheap to expensive.
//! * **Generics**: Validation is generic over `Float` types.
//!
//! ## Key concepts
//!
//! * **Parameter Bounds**: Enforces constraints like `order_min <= order_max`.
//! * **Signal Requirements**: A search needs at least 2 non-missing samples.
//!
//! ## Invariants
//!
//! * All validated inputs satisfy their respective constraints.
//! * Validation logic is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not transform or filter input data.
//! * This module does not provide automatic correction of invalid inputs.
//! * This module does not perform the smoothing or the search itself.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::SmoothError;
use crate::primitives::signal::Signal;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for tuning configuration and input signals.
///
/// Provides static methods returning `Result<(), SmoothError>` that fail
/// fast upon identifying the first violation.
pub struct Validator;

impl Validator {
    // ========================================================================
    // Core Input Validation
    // ========================================================================

    /// Validate an input signal for tuning.
    ///
    /// The signal's structural invariants (sorted finite keys, finite
    /// present samples) hold by construction; what remains is that there is
    /// anything to smooth at all.
    pub fn validate_signal<T: Float>(signal: &Signal<T>) -> Result<(), SmoothError> {
        if signal.is_empty() {
            return Err(SmoothError::EmptyInput);
        }

        let dense = signal.dense_len();
        if dense < 2 {
            return Err(SmoothError::TooFewPoints { got: dense, min: 2 });
        }

        Ok(())
    }

    // ========================================================================
    // Parameter Validation
    // ========================================================================

    /// Validate the polynomial order bounds.
    pub fn validate_order_bounds(order_min: usize, order_max: usize) -> Result<(), SmoothError> {
        if order_min > order_max {
            return Err(SmoothError::InvalidOrderBounds {
                min: order_min,
                max: order_max,
            });
        }
        Ok(())
    }

    /// Validate a resolved window minimum.
    pub fn validate_window_min(window_min: usize) -> Result<(), SmoothError> {
        if window_min == 0 {
            return Err(SmoothError::InvalidWindowBounds { min: 0 });
        }
        Ok(())
    }

    /// Validate the sample budget for the window sweep.
    pub fn validate_max_samples(max_samples: usize) -> Result<(), SmoothError> {
        if max_samples == 0 {
            return Err(SmoothError::InvalidMaxSamples(0));
        }
        Ok(())
    }

    /// Validate the window/order ratio threshold.
    pub fn validate_ratio_threshold<T: Float>(threshold: T) -> Result<(), SmoothError> {
        if !threshold.is_finite() || threshold < T::one() {
            return Err(SmoothError::InvalidRatioThreshold(
                threshold.to_f64().unwrap_or(f64::NAN),
            ));
        }
        Ok(())
    }

    /// Validate that no parameters were set multiple times in the builder.
    pub fn validate_no_duplicates(
        duplicate_param: Option<&'static str>,
    ) -> Result<(), SmoothError> {
        if let Some(param) = duplicate_param {
            return Err(SmoothError::DuplicateParameter { parameter: param });
        }
        Ok(())
    }
}
