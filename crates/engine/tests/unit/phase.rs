//! Phase machinery tests.

use pagesim_core::phase::{
    DistanceHistogram, PhaseDetector, StackDistance, StackDistanceTracker, divergence,
    predict_working_set,
};
use pretty_assertions::assert_eq;

use crate::common::harness::chars;

use StackDistance::{Finite, Infinite};

// ══════════════════════════════════════════════════════════
// 1. Stack distance
// ══════════════════════════════════════════════════════════

/// Distance counts the distinct symbols touched since the previous occurrence.
#[test]
fn stack_distance_counts_distinct_intervening_symbols() {
    let mut tracker = StackDistanceTracker::new(16);
    let distances: Vec<StackDistance> = chars("ABCBAA")
        .iter()
        .map(|s| tracker.observe(s))
        .collect();

    assert_eq!(
        distances,
        vec![Infinite, Infinite, Infinite, Finite(1), Finite(2), Finite(0)]
    );
    assert_eq!(tracker.history().copied().collect::<String>(), "ABC");
}

#[test]
fn stack_distance_window_slides() {
    let mut tracker = StackDistanceTracker::new(2);
    for s in chars("ABA") {
        let _ = tracker.observe(&s);
    }

    // Window holds the last two distances: inf (B) and 1 (A).
    assert_eq!(tracker.window().collect::<Vec<_>>(), vec![Infinite, Finite(1)]);
    assert_eq!(tracker.histogram().get(Infinite), 1);
    assert_eq!(tracker.histogram().get(Finite(1)), 1);
    assert_eq!(tracker.histogram().total(), 2);
}

#[test]
fn stack_distance_ordering_puts_infinite_last() {
    assert!(Finite(0) < Finite(7));
    assert!(Finite(usize::MAX) < Infinite);
    assert_eq!(Infinite.to_string(), "inf");
    assert_eq!(Finite(3).to_string(), "3");
}

// ══════════════════════════════════════════════════════════
// 2. Histogram and detector
// ══════════════════════════════════════════════════════════

#[test]
fn histogram_remove_drops_empty_buckets() {
    let mut h = DistanceHistogram::new();
    h.add(Finite(2));
    h.remove(Finite(2));
    h.remove(Finite(9));

    assert!(h.is_empty());
    assert_eq!(h, DistanceHistogram::new());
}

#[test]
fn divergence_over_key_union() {
    let current: DistanceHistogram = [Finite(0), Finite(0), Infinite].into_iter().collect();
    let baseline: DistanceHistogram = [Finite(0), Finite(3)].into_iter().collect();

    // |2-1| + |1-0| + |0-1|
    assert_eq!(divergence(&current, &baseline), 3.0);
    assert_eq!(divergence(&baseline, &current), 3.0);
    assert_eq!(divergence(&current, &current), 0.0);
}

#[test]
fn detector_snapshots_on_boundary() {
    let mut detector = PhaseDetector::new(1.0);
    let one: DistanceHistogram = [Infinite].into_iter().collect();
    let two: DistanceHistogram = [Infinite, Infinite].into_iter().collect();

    assert_eq!(detector.check(&one), None);
    assert!(detector.baseline().is_empty());

    assert_eq!(detector.check(&two), Some(2.0));
    assert_eq!(detector.baseline(), &two);

    // Same histogram again: no divergence left.
    assert_eq!(detector.check(&two), None);
}

// ══════════════════════════════════════════════════════════
// 3. Prediction
// ══════════════════════════════════════════════════════════

#[test]
fn predictor_ranks_by_frequency() {
    let window = chars("DCCBBBA");
    assert_eq!(predict_working_set(&window, 2), vec!['B', 'C']);
    assert_eq!(predict_working_set(&window, 10), vec!['B', 'C', 'D', 'A']);
}
