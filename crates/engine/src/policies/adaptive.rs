//! Phase-Aware Adaptive Replacement Policy.
//!
//! Replays a known reference string with LRU ordering, and re-provisions the resident
//! set whenever the workload's locality shifts. Each access goes through:
//!
//! 1. **Stack distance:** the access's reuse distance enters the sliding histogram.
//! 2. **Boundary test:** the live histogram is compared with the baseline snapshot.
//! 3. **Prediction:** on a boundary, the `phase_window` symbols following the current
//!    position are ranked by frequency and the top `capacity` form the working set.
//! 4. **Re-provisioning:** residents outside the working set are dropped, then missing
//!    working-set symbols are admitted at the least-recent end.
//! 5. **Resolution:** the access itself is resolved LRU-style against the updated set,
//!    with the most recent symbol at the front.
//!
//! Re-provisioning traffic is reported through [`Provision`] rather than as hits or
//! faults, so `hit + fault` still equals the number of accesses.
//!
//! The look-ahead makes this policy non-causal: it is an analysis tool for recorded
//! traces, not something an operating system could run.

use std::collections::VecDeque;

use tracing::debug;

use super::{Access, Provision, ReplacementPolicy};
use crate::common::Symbol;
use crate::config::AdaptiveConfig;
use crate::ledger::Outcome;
use crate::phase::{PhaseDetector, StackDistanceTracker, predict_working_set};

/// Adaptive policy state.
#[derive(Debug, Clone)]
pub struct AdaptivePolicy<S> {
    /// Resident symbols, most recent first.
    recency: VecDeque<S>,
    tracker: StackDistanceTracker<S>,
    detector: PhaseDetector,
    reference: Vec<S>,
    /// Zero-based position of the next access in `reference`.
    index: usize,
    phase_window: usize,
    capacity: usize,
}

impl<S: Symbol> AdaptivePolicy<S> {
    /// Creates an empty adaptive resident set over a known reference string.
    ///
    /// # Arguments
    ///
    /// * `capacity` - Maximum number of resident symbols.
    /// * `config` - Phase window and divergence threshold.
    /// * `reference` - The full string that will be fed, used for look-ahead. Look-ahead
    ///   past its end yields a shorter (possibly empty) window.
    pub fn new(capacity: usize, config: &AdaptiveConfig, reference: Vec<S>) -> Self {
        Self {
            recency: VecDeque::with_capacity(capacity),
            tracker: StackDistanceTracker::new(config.phase_window),
            detector: PhaseDetector::new(config.threshold),
            reference,
            index: 0,
            phase_window: config.phase_window,
            capacity,
        }
    }

    /// Zero-based position of the next access.
    pub const fn position(&self) -> usize {
        self.index
    }

    /// Stack-distance tracker driving the detector.
    pub const fn tracker(&self) -> &StackDistanceTracker<S> {
        &self.tracker
    }

    /// Phase detector holding the baseline histogram.
    pub const fn detector(&self) -> &PhaseDetector {
        &self.detector
    }

    /// The `phase_window` symbols following the current position.
    fn lookahead(&self) -> &[S] {
        let start = self.index.saturating_add(1).min(self.reference.len());
        let end = start.saturating_add(self.phase_window).min(self.reference.len());
        &self.reference[start..end]
    }

    /// Reconciles the resident set with `predicted`.
    ///
    /// Returns `(purged, prefetched)`.
    fn reprovision(&mut self, predicted: &[S]) -> (usize, usize) {
        let before = self.recency.len();
        self.recency.retain(|s| predicted.contains(s));
        let purged = before - self.recency.len();

        let mut prefetched = 0;
        for symbol in predicted {
            if self.recency.len() >= self.capacity {
                break;
            }
            if !self.recency.contains(symbol) {
                self.recency.push_back(symbol.clone());
                prefetched += 1;
            }
        }
        (purged, prefetched)
    }

    fn resolve(&mut self, symbol: &S) -> Outcome {
        if let Some(pos) = self.recency.iter().position(|s| s == symbol) {
            if let Some(hit) = self.recency.remove(pos) {
                self.recency.push_front(hit);
            }
            return Outcome::Hit;
        }

        let outcome = if self.recency.len() >= self.capacity {
            let _ = self.recency.pop_back();
            Outcome::Eviction
        } else {
            Outcome::Fault
        };
        self.recency.push_front(symbol.clone());
        outcome
    }
}

impl<S: Symbol> ReplacementPolicy<S> for AdaptivePolicy<S> {
    fn access(&mut self, symbol: &S) -> Access {
        let _ = self.tracker.observe(symbol);

        let mut provision = None;
        if let Some(divergence) = self.detector.check(self.tracker.histogram()) {
            let predicted = predict_working_set(self.lookahead(), self.capacity);
            let (purged, prefetched) = self.reprovision(&predicted);
            debug!(
                position = self.index,
                divergence,
                predicted = predicted.len(),
                purged,
                prefetched,
                "phase boundary"
            );
            provision = Some(Provision {
                divergence,
                predicted: predicted.len(),
                purged,
                prefetched,
            });
        }

        let access = if self.capacity == 0 {
            Access::degenerate()
        } else {
            let outcome = self.resolve(symbol);
            Access::new(outcome, 1)
        };
        self.index += 1;

        Access { provision, ..access }
    }

    fn contains(&self, symbol: &S) -> bool {
        self.recency.contains(symbol)
    }

    fn resident(&self) -> Vec<S> {
        self.recency.iter().cloned().collect()
    }

    fn len(&self) -> usize {
        self.recency.len()
    }

    fn capacity(&self) -> usize {
        self.capacity
    }
}
