//! Workload phase detection.
//!
//! The adaptive policy watches how far back in the recency history each access
//! reaches (its stack distance). A shift in the distribution of recent distances marks
//! a change of locality, a phase boundary. This module provides:
//! 1. **Stack-distance tracking:** Full recency history plus a sliding window histogram.
//! 2. **Phase detection:** L1 divergence between the live and the baseline histogram.
//! 3. **Working-set prediction:** The most frequent symbols of a look-ahead window.
//!
//! The predictor reads the reference string ahead of the current position, so it is
//! meant for offline analysis of a known trace and not for an online memory manager.

/// Histogram comparison and boundary detection.
pub mod detector;

/// Working-set prediction from a look-ahead window.
pub mod predictor;

/// Stack-distance computation and windowed histogram.
pub mod stack_distance;

pub use detector::{PhaseDetector, divergence};
pub use predictor::predict_working_set;
pub use stack_distance::{DistanceHistogram, StackDistance, StackDistanceTracker};
