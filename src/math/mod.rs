//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides pure mathematical functions used by the smoothing
//! kernel: polynomial least-squares fitting and evaluation. These are
//! reusable numerical building blocks with no algorithm-specific logic.
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Engine
//!   ↓
//! Layer 4: Evaluation
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Polynomial least-squares fitting and evaluation.
pub mod polyfit;
