//! Error types for auto-smoothing operations.
//!
//! ## Purpose
//!
//! This module defines error conditions that can occur during parameter
//! tuning and filtering, including input validation, configuration
//! constraints, and search failures.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors include relevant values (e.g., actual vs. expected lengths).
//! * **Deferred**: Builder misconfiguration is caught and stored until `build()`.
//! * **Trait Implementation**: Implements `Display` and `std::error::Error`.
//!
//! ## Key concepts
//!
//! 1. **Input validation**: Empty signals, mismatched lengths, unsorted keys, non-finite values.
//! 2. **Configuration validation**: Invalid bounds, sample budgets, or ratio thresholds.
//! 3. **Search failures**: An empty viable grid or a degenerate score table.
//! 4. **Delegated validation**: Kernel-level rejections surfaced, never swallowed.
//!
//! ## Invariants
//!
//! * All variants provide sufficient context for diagnosis.
//! * Error messages are consistent in tone and formatting.
//!
//! ## Non-goals
//!
//! * This module does not perform the validation logic itself.
//! * This module does not provide error recovery or fallback strategies.

// External dependencies
use std::error::Error;
use std::fmt::{Display, Formatter, Result};

// ============================================================================
// Error Type
// ============================================================================

/// Error type for auto-smoothing operations.
#[derive(Debug, Clone, PartialEq)]
pub enum SmoothError {
    /// The input signal has no entries.
    EmptyInput,

    /// Index and value arrays must have the same number of elements.
    MismatchedInputs {
        /// Number of position keys.
        index_len: usize,
        /// Number of samples.
        values_len: usize,
    },

    /// Position keys must be strictly increasing (and therefore unique).
    UnsortedIndex {
        /// First position at which ordering is violated.
        position: usize,
    },

    /// Input data contains NaN or infinite values where finite ones are required.
    InvalidNumericValue(String),

    /// Number of non-missing points is below the minimum requirement.
    TooFewPoints {
        /// Number of points available.
        got: usize,
        /// Minimum required points.
        min: usize,
    },

    /// Polynomial order must be strictly less than the window length.
    InvalidPolyOrder {
        /// The polynomial order requested.
        order: usize,
        /// The window length requested.
        window_length: usize,
    },

    /// Window lengths must be at least 1.
    InvalidWindowBounds {
        /// The window minimum that was resolved or requested.
        min: usize,
    },

    /// Order bounds must satisfy `order_min <= order_max`.
    InvalidOrderBounds {
        /// The order minimum requested.
        min: usize,
        /// The order maximum requested.
        max: usize,
    },

    /// The sample budget must be at least 1.
    InvalidMaxSamples(usize),

    /// The window/order ratio threshold must be finite and at least 1.
    InvalidRatioThreshold(f64),

    /// The least-squares system for a local fit could not be solved.
    SingularFit {
        /// The window length of the failed fit.
        window_length: usize,
        /// The polynomial order of the failed fit.
        polynomial_order: usize,
    },

    /// No candidate survived the window/order ratio constraint.
    NoViableCandidates {
        /// Number of raw candidates in the generated grid.
        candidates: usize,
        /// The ratio threshold that rejected them all.
        ratio_threshold: f64,
    },

    /// Every surviving candidate scored non-finite on the chosen metric.
    DegenerateScores {
        /// Name of the metric that produced no finite score.
        metric: &'static str,
    },

    /// A smoothing method outside the supported set was requested.
    UnsupportedMethod(String),

    /// Parameter was set multiple times in the builder.
    DuplicateParameter {
        /// Name of the parameter that was set multiple times.
        parameter: &'static str,
    },

    /// The visualization side channel failed to render.
    #[cfg(feature = "plot")]
    Render(String),
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for SmoothError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::EmptyInput => write!(f, "Input signal is empty"),
            Self::MismatchedInputs {
                index_len,
                values_len,
            } => {
                write!(
                    f,
                    "Length mismatch: index has {index_len} keys, values has {values_len}"
                )
            }
            Self::UnsortedIndex { position } => {
                write!(
                    f,
                    "Index keys must be strictly increasing (violated at position {position})"
                )
            }
            Self::InvalidNumericValue(s) => write!(f, "Invalid numeric value: {s}"),
            Self::TooFewPoints { got, min } => {
                write!(f, "Too few points: got {got}, need at least {min}")
            }
            Self::InvalidPolyOrder {
                order,
                window_length,
            } => {
                write!(
                    f,
                    "Invalid polynomial order: {order} (must be less than window length {window_length})"
                )
            }
            Self::InvalidWindowBounds { min } => {
                write!(
                    f,
                    "Invalid window bounds: window_min {min} (must be at least 1)"
                )
            }
            Self::InvalidOrderBounds { min, max } => {
                write!(
                    f,
                    "Invalid order bounds: order_min {min} exceeds order_max {max}"
                )
            }
            Self::InvalidMaxSamples(n) => {
                write!(f, "Invalid max_samples: {n} (must be at least 1)")
            }
            Self::InvalidRatioThreshold(r) => {
                write!(
                    f,
                    "Invalid ratio threshold: {r} (must be finite and at least 1)"
                )
            }
            Self::SingularFit {
                window_length,
                polynomial_order,
            } => {
                write!(
                    f,
                    "Singular least-squares system for window {window_length}, order {polynomial_order}"
                )
            }
            Self::NoViableCandidates {
                candidates,
                ratio_threshold,
            } => {
                write!(
                    f,
                    "No viable candidates: all {candidates} grid entries violate window/order >= {ratio_threshold}"
                )
            }
            Self::DegenerateScores { metric } => {
                write!(
                    f,
                    "Degenerate search: no candidate produced a finite {metric} score"
                )
            }
            Self::UnsupportedMethod(name) => {
                write!(
                    f,
                    "Unsupported smoothing method: '{name}' (supported: savgol)"
                )
            }
            Self::DuplicateParameter { parameter } => {
                write!(
                    f,
                    "Parameter '{parameter}' was set multiple times. Each parameter can only be configured once."
                )
            }
            #[cfg(feature = "plot")]
            Self::Render(msg) => write!(f, "Failed to render comparison plot: {msg}"),
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

impl Error for SmoothError {}
