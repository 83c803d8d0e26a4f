//! High-level API for automatic smoothing.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry points: a fluent
//! builder for configuring the tuning search, the validated tuner it
//! produces, and the one-call dispatch over supported smoothing methods.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with sensible defaults for all parameters.
//! * **Validated**: Parameters are checked when `build()` is called;
//!   duplicate configuration is rejected.
//! * **Type-Safe**: Generic over `Float` types for flexible precision.
//!
//! ### Configuration Flow
//!
//! 1. Create an [`AutoSmooth`] builder via `AutoSmooth::new()`.
//! 2. Chain configuration methods (`.order_max()`, `.metric()`, etc.).
//! 3. Call `.build()` to obtain a validated [`SavgolTuner`].
//! 4. Call `.tune(&signal)` to run the search.

// External dependencies
use num_traits::Float;
use std::fmt::{Debug, Display, Formatter};
#[cfg(feature = "plot")]
use std::path::PathBuf;
use std::str::FromStr;

// Internal dependencies
use crate::algorithms::savgol::{SavitzkyGolay, SmoothingKernel};
use crate::engine::executor::{apply_filter, TuneConfig, TuneExecutor};
use crate::engine::validator::Validator;
use crate::primitives::candidate::Candidate;
use crate::primitives::errors::SmoothError;
use crate::primitives::signal::Signal;

// Publicly re-exported types
pub use crate::engine::executor::Verbosity;
pub use crate::engine::output::{ScoreRow, TuneResult};
pub use crate::evaluation::metrics::{Metric, Scores};

// ============================================================================
// Method Dispatch
// ============================================================================

/// Supported smoothing methods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Method {
    /// Savitzky-Golay local polynomial smoothing.
    #[default]
    Savgol,
}

impl FromStr for Method {
    type Err = SmoothError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "savgol" | "savitzky-golay" => Ok(Self::Savgol),
            other => Err(SmoothError::UnsupportedMethod(other.to_string())),
        }
    }
}

impl Display for Method {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Savgol => f.write_str("savgol"),
        }
    }
}

// ============================================================================
// Builder
// ============================================================================

/// Fluent builder for configuring the auto-tuning search.
#[derive(Debug, Clone)]
pub struct AutoSmooth<T> {
    /// Smallest polynomial order to try.
    pub order_min: Option<usize>,

    /// Largest polynomial order to try.
    pub order_max: Option<usize>,

    /// Smallest window length (derived from `order_min` when unset).
    pub window_min: Option<usize>,

    /// Largest window length (derived from the input length when unset).
    pub window_max: Option<usize>,

    /// Budget for the evenly spaced window sweep.
    pub max_samples: Option<usize>,

    /// Minimum allowed window/order ratio.
    pub ratio_threshold: Option<T>,

    /// Metric minimized to pick the winner.
    pub metric: Option<Metric>,

    /// Reporting level.
    pub verbosity: Option<Verbosity>,

    /// Whether to render the comparison plot for the final result.
    pub plot: Option<bool>,

    /// Where the rendered comparison is written.
    #[cfg(feature = "plot")]
    pub plot_path: Option<PathBuf>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl<T: Float> Default for AutoSmooth<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> AutoSmooth<T> {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            order_min: None,
            order_max: None,
            window_min: None,
            window_max: None,
            max_samples: None,
            ratio_threshold: None,
            metric: None,
            verbosity: None,
            plot: None,
            #[cfg(feature = "plot")]
            plot_path: None,
            duplicate_param: None,
        }
    }

    /// Set the smallest polynomial order to try (default 2).
    pub fn order_min(mut self, order: usize) -> Self {
        if self.order_min.is_some() {
            self.duplicate_param = Some("order_min");
        }
        self.order_min = Some(order);
        self
    }

    /// Set the largest polynomial order to try (default 10).
    pub fn order_max(mut self, order: usize) -> Self {
        if self.order_max.is_some() {
            self.duplicate_param = Some("order_max");
        }
        self.order_max = Some(order);
        self
    }

    /// Set the smallest window length (default: `order_min * ratio_threshold`).
    pub fn window_min(mut self, window: usize) -> Self {
        if self.window_min.is_some() {
            self.duplicate_param = Some("window_min");
        }
        self.window_min = Some(window);
        self
    }

    /// Set the largest window length (default: `2 * sqrt(input length)`).
    pub fn window_max(mut self, window: usize) -> Self {
        if self.window_max.is_some() {
            self.duplicate_param = Some("window_max");
        }
        self.window_max = Some(window);
        self
    }

    /// Set the budget for the evenly spaced window sweep (default 50).
    pub fn max_samples(mut self, samples: usize) -> Self {
        if self.max_samples.is_some() {
            self.duplicate_param = Some("max_samples");
        }
        self.max_samples = Some(samples);
        self
    }

    /// Set the minimum allowed window/order ratio (default 3).
    pub fn ratio_threshold(mut self, threshold: T) -> Self {
        if self.ratio_threshold.is_some() {
            self.duplicate_param = Some("ratio_threshold");
        }
        self.ratio_threshold = Some(threshold);
        self
    }

    /// Set the metric minimized to pick the winner (default RMSE).
    pub fn metric(mut self, metric: Metric) -> Self {
        if self.metric.is_some() {
            self.duplicate_param = Some("metric");
        }
        self.metric = Some(metric);
        self
    }

    /// Set the reporting level (default silent).
    pub fn verbosity(mut self, verbosity: Verbosity) -> Self {
        if self.verbosity.is_some() {
            self.duplicate_param = Some("verbosity");
        }
        self.verbosity = Some(verbosity);
        self
    }

    /// Enable or disable the comparison plot for the final result
    /// (default enabled; without the `plot` feature the flag is inert).
    pub fn plot(mut self, enabled: bool) -> Self {
        if self.plot.is_some() {
            self.duplicate_param = Some("plot");
        }
        self.plot = Some(enabled);
        self
    }

    /// Set where the rendered comparison is written
    /// (default `autosmooth.svg`).
    #[cfg(feature = "plot")]
    pub fn plot_path(mut self, path: impl Into<PathBuf>) -> Self {
        if self.plot_path.is_some() {
            self.duplicate_param = Some("plot_path");
        }
        self.plot_path = Some(path.into());
        self
    }

    // ========================================================================
    // Build Method
    // ========================================================================

    /// Validate the configuration and build the tuner.
    pub fn build(self) -> Result<SavgolTuner<T>, SmoothError> {
        Validator::validate_no_duplicates(self.duplicate_param)?;

        let config = TuneConfig {
            order_min: self.order_min.unwrap_or(2),
            order_max: self.order_max.unwrap_or(10),
            window_min: self.window_min,
            window_max: self.window_max,
            max_samples: self.max_samples.unwrap_or(50),
            ratio_threshold: self.ratio_threshold.unwrap_or_else(|| T::from(3.0).unwrap()),
            metric: self.metric.unwrap_or_default(),
            verbosity: self.verbosity.unwrap_or_default(),
        };

        Validator::validate_order_bounds(config.order_min, config.order_max)?;
        Validator::validate_max_samples(config.max_samples)?;
        Validator::validate_ratio_threshold(config.ratio_threshold)?;
        if let Some(w) = config.window_min {
            Validator::validate_window_min(w)?;
        }

        Ok(SavgolTuner {
            config,
            plot: self.plot.unwrap_or(true),
            #[cfg(feature = "plot")]
            plot_path: self
                .plot_path
                .unwrap_or_else(|| PathBuf::from("autosmooth.svg")),
        })
    }
}

// ============================================================================
// Tuner
// ============================================================================

/// Validated auto-tuning processor.
#[derive(Debug)]
pub struct SavgolTuner<T> {
    config: TuneConfig<T>,
    plot: bool,
    #[cfg(feature = "plot")]
    plot_path: PathBuf,
}

impl<T: Float + Debug + Send + Sync + 'static> SavgolTuner<T> {
    /// Tune the default Savitzky-Golay kernel over `signal`.
    pub fn tune(&self, signal: &Signal<T>) -> Result<TuneResult<T>, SmoothError> {
        self.tune_with(signal, &SavitzkyGolay)
    }

    /// Tune an arbitrary kernel over `signal`.
    ///
    /// Every search-phase application runs with visualization suppressed;
    /// only the final result is handed to the visualization collaborator,
    /// and only when plotting is enabled.
    pub fn tune_with<K>(&self, signal: &Signal<T>, kernel: &K) -> Result<TuneResult<T>, SmoothError>
    where
        K: SmoothingKernel<T> + Sync,
    {
        let result = TuneExecutor::run(signal, kernel, &self.config)?;

        #[cfg(feature = "plot")]
        if self.plot {
            crate::viz::render_comparison(signal, &result.smoothed, &self.plot_path)?;
        }
        #[cfg(not(feature = "plot"))]
        let _ = self.plot;

        Ok(result)
    }
}

// ============================================================================
// Convenience Entry Points
// ============================================================================

/// Auto-tune `signal` with the given method and default configuration.
///
/// The only supported method is [`Method::Savgol`]; requests for anything
/// else fail at [`Method::from_str`] time, before any computation begins.
pub fn auto_smooth<T>(signal: &Signal<T>, method: Method) -> Result<TuneResult<T>, SmoothError>
where
    T: Float + Debug + Send + Sync + 'static,
{
    match method {
        Method::Savgol => AutoSmooth::new().build()?.tune(signal),
    }
}

/// Apply the Savitzky-Golay filter once with explicit parameters.
///
/// No search; missing entries are preserved in the output exactly as they
/// are during tuning.
pub fn smooth_with<T: Float>(
    signal: &Signal<T>,
    window_length: usize,
    polynomial_order: usize,
) -> Result<Signal<T>, SmoothError> {
    apply_filter(
        signal,
        Candidate::new(window_length, polynomial_order),
        &SavitzkyGolay,
    )
}
