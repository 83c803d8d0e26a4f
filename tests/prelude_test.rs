//! Tests for the public API surface.
//!
//! These tests verify the builder, the method dispatch, and the signal
//! constructors, everything reachable through the prelude.

use std::str::FromStr;

use autosmooth::prelude::*;

// ============================================================================
// Builder Tests
// ============================================================================

/// Test that setting a parameter twice is rejected at build time.
#[test]
fn test_duplicate_parameter_rejected() {
    let err = AutoSmooth::<f64>::new()
        .metric(Metric::Mae)
        .metric(Metric::Rmse)
        .build()
        .unwrap_err();

    assert_eq!(err, SmoothError::DuplicateParameter { parameter: "metric" });
}

/// Test order bound validation.
#[test]
fn test_invalid_order_bounds_rejected() {
    let err = AutoSmooth::<f64>::new()
        .order_min(5)
        .order_max(2)
        .build()
        .unwrap_err();

    assert_eq!(err, SmoothError::InvalidOrderBounds { min: 5, max: 2 });
}

/// Test sample budget validation.
#[test]
fn test_zero_max_samples_rejected() {
    let err = AutoSmooth::<f64>::new().max_samples(0).build().unwrap_err();
    assert_eq!(err, SmoothError::InvalidMaxSamples(0));
}

/// Test ratio threshold validation.
#[test]
fn test_invalid_ratio_threshold_rejected() {
    let err = AutoSmooth::<f64>::new()
        .ratio_threshold(0.5)
        .build()
        .unwrap_err();
    assert_eq!(err, SmoothError::InvalidRatioThreshold(0.5));

    let err = AutoSmooth::<f64>::new()
        .ratio_threshold(f64::NAN)
        .build()
        .unwrap_err();
    assert!(matches!(err, SmoothError::InvalidRatioThreshold(_)));
}

/// Test zero window minimum validation.
#[test]
fn test_zero_window_min_rejected() {
    let err = AutoSmooth::<f64>::new().window_min(0).build().unwrap_err();
    assert_eq!(err, SmoothError::InvalidWindowBounds { min: 0 });
}

/// Test that the defaults build cleanly.
#[test]
fn test_defaults_build() {
    assert!(AutoSmooth::<f64>::new().build().is_ok());
    assert!(AutoSmooth::<f32>::new().build().is_ok());
}

// ============================================================================
// Method Dispatch Tests
// ============================================================================

/// Test method parsing for the supported set.
#[test]
fn test_method_parsing() {
    assert_eq!(Method::from_str("savgol").unwrap(), Method::Savgol);
    assert_eq!(Method::from_str("Savitzky-Golay").unwrap(), Method::Savgol);
    assert_eq!(Method::Savgol.to_string(), "savgol");
}

/// Test that an unsupported method is reported before any computation.
#[test]
fn test_unsupported_method_rejected() {
    let err = Method::from_str("lowess").unwrap_err();
    assert_eq!(err, SmoothError::UnsupportedMethod("lowess".to_string()));
}

// ============================================================================
// Signal Constructor Tests
// ============================================================================

/// Test rejection of mismatched index/value lengths.
#[test]
fn test_mismatched_lengths_rejected() {
    let err = Signal::new(vec![0.0, 1.0], vec![Some(1.0)]).unwrap_err();
    assert_eq!(
        err,
        SmoothError::MismatchedInputs {
            index_len: 2,
            values_len: 1
        }
    );
}

/// Test rejection of unsorted or duplicate position keys.
#[test]
fn test_unsorted_index_rejected() {
    let err = Signal::new(vec![0.0, 2.0, 1.0], vec![Some(1.0); 3]).unwrap_err();
    assert_eq!(err, SmoothError::UnsortedIndex { position: 2 });

    let err = Signal::new(vec![0.0, 1.0, 1.0], vec![Some(1.0); 3]).unwrap_err();
    assert_eq!(err, SmoothError::UnsortedIndex { position: 2 });
}

/// Test rejection of non-finite present samples.
#[test]
fn test_nonfinite_sample_rejected() {
    let err = Signal::new(vec![0.0, 1.0], vec![Some(1.0), Some(f64::NAN)]).unwrap_err();
    assert!(matches!(err, SmoothError::InvalidNumericValue(_)));
}

/// Test the NaN-as-missing bridge constructor.
#[test]
fn test_from_nan_values_maps_gaps() {
    let signal = Signal::from_nan_values(
        vec![0.0, 1.0, 2.0, 3.0],
        vec![1.0, f64::NAN, 3.0, f64::INFINITY],
    )
    .unwrap();

    assert_eq!(signal.missing_count(), 2);
    assert_eq!(signal.values()[0], Some(1.0));
    assert_eq!(signal.values()[1], None);
    assert_eq!(signal.values()[3], None);
}

/// Test integer-keyed construction from plain values.
#[test]
fn test_from_values_keys() {
    let signal = Signal::from_values(vec![4.0, 5.0, 6.0]).unwrap();
    assert_eq!(signal.index(), &[0.0, 1.0, 2.0]);
    assert_eq!(signal.dense_len(), 3);
}

// ============================================================================
// Error Display Tests
// ============================================================================

/// Test that errors render with context.
#[test]
fn test_error_display() {
    let msg = SmoothError::NoViableCandidates {
        candidates: 16,
        ratio_threshold: 3.0,
    }
    .to_string();
    assert!(msg.contains("16"));
    assert!(msg.contains('3'));

    let msg = SmoothError::UnsupportedMethod("wavelet".to_string()).to_string();
    assert!(msg.contains("wavelet"));
}
