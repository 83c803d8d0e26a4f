//! Output types and result structures for tuning operations.
//!
//! ## Purpose
//!
//! This module defines the `TuneResult` struct which encapsulates all
//! outputs from one tuning search: the winning candidate, its scores, the
//! full score table, and the final smoothed signal.
//!
//! ## Design notes
//!
//! * **Grid order**: The score table preserves the fixed candidate
//!   generation order (ascending window, then ascending order), which is
//!   also the order tie-breaking is defined over.
//! * **Ergonomics**: Implements `Display` for a human-readable summary.
//!
//! ## Invariants
//!
//! * `rows` contains no duplicate candidates.
//! * `smoothed` has the same index as the tuned input, with exactly the
//!   input's missing positions missing.
//!
//! ## Non-goals
//!
//! * This module does not perform calculations; it only stores results.
//! * This module does not render the visualization side channel.

// External dependencies
use num_traits::Float;
use std::fmt::{Display, Formatter, Result};

// Internal dependencies
use crate::evaluation::metrics::Scores;
use crate::primitives::candidate::Candidate;
use crate::primitives::signal::Signal;

// ============================================================================
// Score Table Row
// ============================================================================

/// One evaluated candidate paired with its scores.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScoreRow<T> {
    /// The candidate that was evaluated.
    pub candidate: Candidate,

    /// All metrics for this candidate.
    pub scores: Scores<T>,
}

// ============================================================================
// Result Structure
// ============================================================================

/// Complete output of one tuning search.
#[derive(Debug, Clone, PartialEq)]
pub struct TuneResult<T> {
    /// The winning candidate (arg-min of the chosen metric).
    pub best: Candidate,

    /// The winning candidate's scores.
    pub best_scores: Scores<T>,

    /// Score table for every evaluated candidate, in grid order.
    pub rows: Vec<ScoreRow<T>>,

    /// The input smoothed with the winning candidate, aligned to the
    /// input's index (missing where the input was missing).
    pub smoothed: Signal<T>,

    /// Number of grid candidates skipped by the ratio constraint.
    pub skipped: usize,
}

impl<T: Float> TuneResult<T> {
    /// Number of candidates that were actually scored.
    pub fn evaluated(&self) -> usize {
        self.rows.len()
    }

    /// Scores for a specific candidate, if it was evaluated.
    pub fn scores_for(&self, candidate: Candidate) -> Option<&Scores<T>> {
        self.rows
            .iter()
            .find(|row| row.candidate == candidate)
            .map(|row| &row.scores)
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

impl<T: Float + Display> Display for TuneResult<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "Summary:")?;
        writeln!(f, "  Data points: {}", self.smoothed.len())?;
        writeln!(f, "  Evaluated:   {}", self.evaluated())?;
        writeln!(f, "  Skipped:     {}", self.skipped)?;
        writeln!(f, "  Best:        {} [{}]", self.best, self.best_scores)?;
        writeln!(f)?;

        writeln!(f, "Score Table:")?;
        writeln!(
            f,
            "{:>8} {:>6} {:>12} {:>12} {:>12}",
            "Window", "Order", "RMSE", "MAE", "R2"
        )?;
        writeln!(f, "{:-<54}", "")?;

        // Show first 10 and last 10 rows if more than 20
        let n = self.rows.len();
        let show_all = n <= 20;
        let rows_to_show: Vec<usize> = if show_all {
            (0..n).collect()
        } else {
            (0..10).chain(n - 10..n).collect()
        };

        let mut prev_idx = 0;
        for (i, &idx) in rows_to_show.iter().enumerate() {
            if i > 0 && idx != prev_idx + 1 {
                writeln!(f, "{:>8}", "...")?;
            }
            prev_idx = idx;

            let row = &self.rows[idx];
            writeln!(
                f,
                "{:>8} {:>6} {:>12.6} {:>12.6} {:>12.6}",
                row.candidate.window_length,
                row.candidate.polynomial_order,
                row.scores.rmse,
                row.scores.mae,
                row.scores.r2
            )?;
        }

        Ok(())
    }
}
