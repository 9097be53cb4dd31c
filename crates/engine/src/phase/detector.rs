//! Phase boundary detection.
//!
//! The detector holds a baseline histogram, snapshotted at the last boundary, and
//! compares it with the live window histogram after every access. A boundary is
//! declared iff the L1 divergence strictly exceeds the threshold; the live histogram
//! then becomes the new baseline.

use super::stack_distance::DistanceHistogram;

/// L1 divergence between two histograms.
///
/// Non-negative and symmetric in its arguments.
pub fn divergence(current: &DistanceHistogram, baseline: &DistanceHistogram) -> f64 {
    current.l1_distance(baseline) as f64
}

/// Baseline histogram and boundary threshold.
#[derive(Debug, Clone)]
pub struct PhaseDetector {
    baseline: DistanceHistogram,
    threshold: f64,
}

impl PhaseDetector {
    /// Creates a detector with an empty baseline.
    pub fn new(threshold: f64) -> Self {
        Self {
            baseline: DistanceHistogram::new(),
            threshold,
        }
    }

    /// Compares `current` with the baseline.
    ///
    /// Returns `Some(divergence)` and snapshots `current` as the new baseline when a
    /// boundary is crossed, `None` otherwise.
    pub fn check(&mut self, current: &DistanceHistogram) -> Option<f64> {
        let d = divergence(current, &self.baseline);
        if d > self.threshold {
            self.baseline.clone_from(current);
            Some(d)
        } else {
            None
        }
    }

    /// Histogram snapshotted at the last boundary.
    pub const fn baseline(&self) -> &DistanceHistogram {
        &self.baseline
    }

    /// Boundary threshold.
    pub const fn threshold(&self) -> f64 {
        self.threshold
    }
}
