//! # Unit Components
//!
//! Tests grouped by the engine module they exercise.




/// Stack-distance tracking, phase detection and working-set prediction.
pub mod phase;

/// Per-policy replacement behavior.
pub mod policies;

/// Randomized invariants over arbitrary reference strings.
pub mod properties;
