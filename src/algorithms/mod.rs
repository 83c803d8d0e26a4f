//! Layer 3: Algorithms
//!
//! This layer implements the smoothing primitive itself, behind the
//! `SmoothingKernel` capability seam. The tuning engine orchestrates it but
//! never depends on a concrete kernel.

// Savitzky-Golay kernel and the kernel capability trait.
pub mod savgol;
