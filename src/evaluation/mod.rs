//! Layer 4: Evaluation
//!
//! # Purpose
//!
//! This layer provides everything the search needs to judge candidates:
//! - Candidate grid generation
//! - Scoring metrics (MSE, RMSE, MAE, R²)
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Engine
//!   ↓
//! Layer 4: Evaluation ← You are here
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Candidate grid generation.
pub mod grid;

/// Scoring metrics for filtering results.
pub mod metrics;
