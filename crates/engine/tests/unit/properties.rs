//! Randomized invariants.
//!
//! Every policy is run over arbitrary reference strings drawn from a small alphabet
//! so that hits, faults and evictions all occur.

use std::collections::HashSet;

use pagesim_core::config::{EngineConfig, FrequencyConfig, ReplacementPolicy, TieBreak};
use pagesim_core::phase::{DistanceHistogram, StackDistance, StackDistanceTracker, divergence};
use pagesim_core::{Outcome, RunReport, simulate};
use proptest::prelude::*;

fn any_policy() -> impl Strategy<Value = ReplacementPolicy> {
    prop::sample::select(ReplacementPolicy::ALL.to_vec())
}

fn any_reference() -> impl Strategy<Value = Vec<char>> {
    prop::collection::vec(prop::sample::select(vec!['A', 'B', 'C', 'D', 'E', 'F']), 0..64)
}

fn config(policy: ReplacementPolicy, capacity: usize, aging: bool, window: usize) -> EngineConfig {
    let frequency = FrequencyConfig {
        aging_interval: aging.then_some(3),
        tie_break: TieBreak::Insertion,
    };
    EngineConfig::new(capacity, policy)
        .with_frequency(frequency)
        .with_adaptive(window, 1.0)
}

fn run(
    policy: ReplacementPolicy,
    capacity: usize,
    aging: bool,
    window: usize,
    reference: &[char],
) -> RunReport<char> {
    simulate(&config(policy, capacity, aging, window), reference).unwrap()
}

fn any_distance() -> impl Strategy<Value = StackDistance> {
    prop_oneof![
        (0usize..6).prop_map(StackDistance::Finite),
        Just(StackDistance::Infinite),
    ]
}

proptest! {
    /// hit + fault == accesses, migration <= fault, one ledger event per access.
    #[test]
    fn conservation(
        policy in any_policy(),
        capacity in 0usize..5,
        aging in any::<bool>(),
        window in 1usize..6,
        reference in any_reference(),
    ) {
        let report = run(policy, capacity, aging, window, &reference);
        let stats = report.stats;

        prop_assert_eq!(stats.hit + stats.fault, reference.len() as u64);
        prop_assert!(stats.migration <= stats.fault);
        prop_assert_eq!(report.ledger.len(), reference.len());
        prop_assert_eq!(report.ledger.frames().len(), reference.len());
        prop_assert_eq!(report.ledger.count(Outcome::Hit) as u64, stats.hit);
        prop_assert_eq!(report.ledger.count(Outcome::Eviction) as u64, stats.migration);
    }

    /// Frames never exceed capacity, never hold duplicates, and always contain the
    /// accessed symbol at its reported slot.
    #[test]
    fn frames_are_well_formed(
        policy in any_policy(),
        capacity in 1usize..5,
        aging in any::<bool>(),
        window in 1usize..6,
        reference in any_reference(),
    ) {
        let report = run(policy, capacity, aging, window, &reference);

        for (event, frame) in report.ledger.iter().zip(report.ledger.frames()) {
            prop_assert!(frame.len() <= capacity);
            let distinct: HashSet<&char> = frame.iter().collect();
            prop_assert_eq!(distinct.len(), frame.len());
            prop_assert!(event.slot >= 1);
            prop_assert_eq!(frame.get(event.slot - 1), Some(&event.symbol));
        }
    }

    /// A hit leaves resident membership unchanged (adaptive boundaries excepted,
    /// since re-provisioning runs before the access is resolved).
    #[test]
    fn hit_preserves_membership(
        policy in any_policy(),
        capacity in 1usize..5,
        window in 1usize..6,
        reference in any_reference(),
    ) {
        let report = run(policy, capacity, false, window, &reference);
        let boundaries: HashSet<u64> = report.phase_boundaries.iter().copied().collect();
        let frames = report.ledger.frames();

        for (i, event) in report.ledger.iter().enumerate().skip(1) {
            if event.outcome != Outcome::Hit || boundaries.contains(&event.sequence_id) {
                continue;
            }
            let before: HashSet<&char> = frames[i - 1].iter().collect();
            let after: HashSet<&char> = frames[i].iter().collect();
            prop_assert_eq!(before, after);
        }
    }

    /// Capacity zero: all faults, nothing resident.
    #[test]
    fn zero_capacity_always_faults(
        policy in any_policy(),
        reference in any_reference(),
    ) {
        let report = run(policy, 0, false, 2, &reference);

        prop_assert!(report.ledger.iter().all(|e| e.outcome == Outcome::Fault));
        prop_assert!(report.ledger.frames().iter().all(Vec::is_empty));
        prop_assert_eq!(report.stats.migration, 0);
    }

    /// LRU never faults on a symbol whose stack distance is below the capacity.
    #[test]
    fn lru_inclusion(
        capacity in 1usize..5,
        reference in any_reference(),
    ) {
        let report = run(ReplacementPolicy::Lru, capacity, false, 1, &reference);
        let mut tracker = StackDistanceTracker::new(1);

        for (symbol, event) in reference.iter().zip(report.ledger.iter()) {
            let hit_expected = matches!(
                tracker.observe(symbol),
                StackDistance::Finite(d) if d < capacity
            );
            prop_assert_eq!(event.outcome == Outcome::Hit, hit_expected);
        }
    }

    /// Divergence is non-negative, symmetric and zero on identical histograms.
    #[test]
    fn divergence_is_a_metric(
        a in prop::collection::vec(any_distance(), 0..16),
        b in prop::collection::vec(any_distance(), 0..16),
    ) {
        let ha: DistanceHistogram = a.into_iter().collect();
        let hb: DistanceHistogram = b.into_iter().collect();

        prop_assert!(divergence(&ha, &hb) >= 0.0);
        prop_assert_eq!(divergence(&ha, &hb), divergence(&hb, &ha));
        prop_assert_eq!(divergence(&ha, &ha), 0.0);
    }
}
