//! Execution engine for the parameter tuning search.
//!
//! ## Purpose
//!
//! This module provides the core execution engine that orchestrates a
//! tuning search: resolving defaulted bounds, generating the candidate
//! grid, filtering it by the window/order ratio constraint, scoring every
//! surviving candidate, selecting the winner, and producing the final
//! smoothed signal.
//!
//! ## Design notes
//!
//! * The search is a filter-then-map-then-reduce pipeline: generate
//!   candidates, filter by ratio, map to score rows, reduce to the arg-min.
//! * Scoring runs on the dense (gap-free) view extracted once per search;
//!   re-expansion onto the full index happens only for the final pass.
//! * With the `parallel` feature the map stage fans out across cores via
//!   rayon's ordered iterator, so the score table (and therefore
//!   tie-breaking) is identical to the serial path.
//! * The engine is stateless: every call is an independent search.
//!
//! ## Invariants
//!
//! * Candidates are scored in (or collected back into) the fixed grid
//!   order: ascending window, then ascending order.
//! * A non-finite metric value never wins the minimization.
//! * The final signal is produced by re-applying the kernel with the
//!   winning candidate, not by reusing a search-phase buffer.
//!
//! ## Non-goals
//!
//! * This module does not render plots (the API layer hands the result to
//!   the visualization collaborator).
//! * This module does not validate builder configuration (handled by
//!   `validator` at build time).

// External dependencies
use num_traits::Float;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

// Internal dependencies
use crate::algorithms::savgol::SmoothingKernel;
use crate::engine::output::{ScoreRow, TuneResult};
use crate::engine::validator::Validator;
use crate::evaluation::grid;
use crate::evaluation::metrics::{Metric, Scores};
use crate::primitives::candidate::Candidate;
use crate::primitives::errors::SmoothError;
use crate::primitives::signal::Signal;

// ============================================================================
// Configuration
// ============================================================================

/// How much the search reports through `tracing` while it runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verbosity {
    /// No events.
    #[default]
    Silent,

    /// One event for the winning candidate.
    Best,

    /// One event per evaluated candidate, plus the winner.
    All,
}

/// Resolved configuration for one tuning search.
#[derive(Debug, Clone)]
pub struct TuneConfig<T> {
    /// Smallest polynomial order to try.
    pub order_min: usize,

    /// Largest polynomial order to try.
    pub order_max: usize,

    /// Smallest window length; derived as `order_min * ratio_threshold`
    /// when unset.
    pub window_min: Option<usize>,

    /// Largest window length; derived as `2 * sqrt(signal length)` when
    /// unset. The signal length counts missing entries too.
    pub window_max: Option<usize>,

    /// Budget for the evenly spaced window sweep.
    pub max_samples: usize,

    /// Minimum allowed window/order ratio.
    pub ratio_threshold: T,

    /// Metric whose value is minimized to pick the winner.
    pub metric: Metric,

    /// Reporting level; purely observational.
    pub verbosity: Verbosity,
}

impl<T: Float> Default for TuneConfig<T> {
    fn default() -> Self {
        Self {
            order_min: 2,
            order_max: 10,
            window_min: None,
            window_max: None,
            max_samples: 50,
            ratio_threshold: T::from(3.0).unwrap(),
            metric: Metric::default(),
            verbosity: Verbosity::default(),
        }
    }
}

// ============================================================================
// Filter Application
// ============================================================================

/// Apply a kernel to a signal for one candidate, preserving the index.
///
/// Missing entries are dropped before filtering; the kernel sees only the
/// dense remainder, and its output is re-expanded onto the original index
/// with previously missing positions missing again. Errors from the kernel
/// (dense remainder shorter than the window, order not below the window)
/// propagate unchanged.
pub fn apply_filter<T, K>(
    signal: &Signal<T>,
    candidate: Candidate,
    kernel: &K,
) -> Result<Signal<T>, SmoothError>
where
    T: Float,
    K: SmoothingKernel<T>,
{
    let dense = signal.to_dense();
    let smoothed = kernel.smooth(
        &dense.values,
        candidate.window_length,
        candidate.polynomial_order,
    )?;
    Ok(signal.with_dense(&dense.positions, &smoothed))
}

// ============================================================================
// Tuning Executor
// ============================================================================

/// Stateless executor for the grid search.
pub struct TuneExecutor;

impl TuneExecutor {
    /// Run one tuning search over `signal` with the given kernel.
    pub fn run<T, K>(
        signal: &Signal<T>,
        kernel: &K,
        config: &TuneConfig<T>,
    ) -> Result<TuneResult<T>, SmoothError>
    where
        T: Float + Send + Sync,
        K: SmoothingKernel<T> + Sync,
    {
        Validator::validate_signal(signal)?;

        // Resolve defaulted bounds
        let ratio = config.ratio_threshold;
        let window_min = match config.window_min {
            Some(w) => w,
            None => (T::from(config.order_min).unwrap() * ratio)
                .floor()
                .to_usize()
                .unwrap_or(0),
        };
        Validator::validate_window_min(window_min)?;

        let window_max = match config.window_max {
            Some(w) => w,
            None => (T::from(signal.len()).unwrap().sqrt() * T::from(2.0).unwrap())
                .floor()
                .to_usize()
                .unwrap_or(window_min),
        };

        // Generate and filter the candidate grid
        let windows = grid::window_grid(window_min, window_max, config.max_samples);
        let raw = grid::candidates(&windows, config.order_min, config.order_max);
        let total = raw.len();

        let viable: Vec<Candidate> = raw
            .into_iter()
            .filter(|c| c.satisfies_ratio(ratio))
            .collect();
        let skipped = total - viable.len();

        if viable.is_empty() {
            return Err(SmoothError::NoViableCandidates {
                candidates: total,
                ratio_threshold: ratio.to_f64().unwrap_or(f64::NAN),
            });
        }

        // Score every surviving candidate on the dense view
        let dense = signal.to_dense();
        let rows = Self::score_all(&dense.values, &viable, kernel, config)?;

        // Reduce to the arg-min of the chosen metric
        let best_idx = Self::select_best(&rows, config.metric)
            .ok_or(SmoothError::DegenerateScores {
                metric: config.metric.name(),
            })?;
        let best = rows[best_idx].candidate;
        let best_scores = rows[best_idx].scores;

        if config.verbosity != Verbosity::Silent {
            tracing::info!(
                window = best.window_length,
                order = best.polynomial_order,
                metric = config.metric.name(),
                value = best_scores.metric(config.metric).to_f64().unwrap_or(f64::NAN),
                "selected best candidate"
            );
        }

        // Final pass with the winning parameters
        let smoothed = apply_filter(signal, best, kernel)?;

        Ok(TuneResult {
            best,
            best_scores,
            rows,
            smoothed,
            skipped,
        })
    }

    // ========================================================================
    // Scoring
    // ========================================================================

    /// Score one candidate against the dense original values.
    fn evaluate<T, K>(
        dense_values: &[T],
        candidate: Candidate,
        kernel: &K,
        config: &TuneConfig<T>,
    ) -> Result<ScoreRow<T>, SmoothError>
    where
        T: Float,
        K: SmoothingKernel<T>,
    {
        let smoothed = kernel.smooth(
            dense_values,
            candidate.window_length,
            candidate.polynomial_order,
        )?;
        let scores = Scores::compute(dense_values, &smoothed);

        if config.verbosity == Verbosity::All {
            tracing::info!(
                window = candidate.window_length,
                order = candidate.polynomial_order,
                rmse = scores.rmse.to_f64().unwrap_or(f64::NAN),
                mae = scores.mae.to_f64().unwrap_or(f64::NAN),
                r2 = scores.r2.to_f64().unwrap_or(f64::NAN),
                "candidate scored"
            );
        }

        Ok(ScoreRow { candidate, scores })
    }

    /// Score all viable candidates, preserving grid order.
    #[cfg(not(feature = "parallel"))]
    fn score_all<T, K>(
        dense_values: &[T],
        viable: &[Candidate],
        kernel: &K,
        config: &TuneConfig<T>,
    ) -> Result<Vec<ScoreRow<T>>, SmoothError>
    where
        T: Float + Send + Sync,
        K: SmoothingKernel<T> + Sync,
    {
        viable
            .iter()
            .map(|&c| Self::evaluate(dense_values, c, kernel, config))
            .collect()
    }

    /// Score all viable candidates across cores, collecting back into grid
    /// order so selection stays deterministic.
    #[cfg(feature = "parallel")]
    fn score_all<T, K>(
        dense_values: &[T],
        viable: &[Candidate],
        kernel: &K,
        config: &TuneConfig<T>,
    ) -> Result<Vec<ScoreRow<T>>, SmoothError>
    where
        T: Float + Send + Sync,
        K: SmoothingKernel<T> + Sync,
    {
        viable
            .par_iter()
            .map(|&c| Self::evaluate(dense_values, c, kernel, config))
            .collect()
    }

    // ========================================================================
    // Selection
    // ========================================================================

    /// Index of the row minimizing the chosen metric.
    ///
    /// Ties resolve to the first-encountered row in grid order (strict `<`
    /// comparison), an explicit convention that keeps selection
    /// deterministic without leaning on sort stability. Non-finite values
    /// are excluded; `None` means no finite score exists at all.
    fn select_best<T: Float>(rows: &[ScoreRow<T>], metric: Metric) -> Option<usize> {
        let mut best: Option<(usize, T)> = None;

        for (i, row) in rows.iter().enumerate() {
            let value = row.scores.metric(metric);
            if !value.is_finite() {
                continue;
            }
            let better = match best {
                Some((_, incumbent)) => value < incumbent,
                None => true,
            };
            if better {
                best = Some((i, value));
            }
        }

        best.map(|(i, _)| i)
    }
}
