//! LFU and MFU policy tests.
//!
//! Covers the frequency scan, both tie-break rules and the aging switch.

use pagesim_core::Outcome::{Eviction, Fault, Hit};
use pagesim_core::config::{FrequencyConfig, ReplacementPolicy, TieBreak};
use pagesim_core::engine::PolicyState;
use pagesim_core::policies::{LfuPolicy, ReplacementPolicy as _};
use pretty_assertions::assert_eq;
use rstest::rstest;

use crate::common::harness::{TestContext, frames, resident, slots};

fn frequency(aging_interval: Option<u64>, tie_break: TieBreak) -> FrequencyConfig {
    FrequencyConfig {
        aging_interval,
        tie_break,
    }
}

// ══════════════════════════════════════════════════════════
// 1. LFU
// ══════════════════════════════════════════════════════════

/// A=2, B=1 when C arrives, so B goes.
#[test]
fn lfu_evicts_minimum_frequency() {
    let report = TestContext::new(ReplacementPolicy::Lfu, 2, "ABAC").run();

    assert_eq!(report.ledger.outcomes(), vec![Fault, Fault, Hit, Eviction]);
    assert_eq!(resident(&report), "AC");
}

/// A hit bumps the count but never moves the symbol.
#[test]
fn lfu_hit_keeps_slot() {
    let report = TestContext::new(ReplacementPolicy::Lfu, 3, "ABCA").run();

    assert_eq!(slots(&report), vec![1, 2, 3, 1]);
    assert_eq!(frames(&report).last().map(String::as_str), Some("ABC"));
}

/// Equal frequencies: the oldest admission goes under both tie-break rules, because
/// LFU's presentation order is its admission order.
#[rstest]
#[case(TieBreak::Insertion)]
#[case(TieBreak::Position)]
fn lfu_tie_evicts_oldest(#[case] tie_break: TieBreak) {
    let report = TestContext::new(ReplacementPolicy::Lfu, 3, "ABCD")
        .with_frequency(frequency(None, tie_break))
        .run();

    assert_eq!(resident(&report), "BCD");
}

/// The replacement takes the victim's place at the back, and its own count restarts.
#[test]
fn lfu_new_admission_starts_at_one() {
    let ctx = TestContext::new(ReplacementPolicy::Lfu, 2, "AABBBC");
    let mut engine = ctx.engine();
    let _ = engine.run(ctx.reference.iter().copied());

    let PolicyState::Lfu(lfu) = engine.policy_state() else {
        panic!("expected LFU state");
    };
    assert_eq!(engine.resident(), vec!['B', 'C']);
    assert_eq!(lfu.frequency(&'B'), 3);
    assert_eq!(lfu.frequency(&'C'), 1);
    assert_eq!(lfu.frequency(&'A'), 0);
}

/// Without aging A=3 outlives B=2. With halving every 2 accesses both decay to 1
/// and the older admission, A, is evicted instead.
#[test]
fn lfu_aging_changes_victim() {
    let plain = TestContext::new(ReplacementPolicy::Lfu, 2, "AAABBC").run();
    let aged = TestContext::new(ReplacementPolicy::Lfu, 2, "AAABBC")
        .with_frequency(frequency(Some(2), TieBreak::Insertion))
        .run();

    assert_eq!(resident(&plain), "AC");
    assert_eq!(resident(&aged), "BC");
}

/// With aging on, an evicted symbol's count survives and resumes on re-admission.
#[test]
fn lfu_aging_retains_history() {
    let mut lfu = LfuPolicy::new(1, &frequency(Some(100), TieBreak::Insertion));
    let _ = lfu.access(&'A');
    let _ = lfu.access(&'B');
    let again = lfu.access(&'A');

    assert_eq!(again.outcome, Eviction);
    assert_eq!(lfu.frequency(&'A'), 2);
    assert_eq!(lfu.frequency(&'B'), 1);

    let mut plain = LfuPolicy::new(1, &FrequencyConfig::default());
    for symbol in ['A', 'B', 'A'] {
        let _ = plain.access(&symbol);
    }
    assert_eq!(plain.frequency(&'A'), 1);
    assert_eq!(plain.frequency(&'B'), 0);
}

#[test]
fn lfu_reference_aging_interval() {
    assert_eq!(
        FrequencyConfig::with_reference_aging().aging_interval,
        Some(10)
    );
}

// ══════════════════════════════════════════════════════════
// 2. MFU
// ══════════════════════════════════════════════════════════

/// A=2, B=1 when C arrives, so A goes.
#[test]
fn mfu_evicts_maximum_frequency() {
    let report = TestContext::new(ReplacementPolicy::Mfu, 2, "ABAC").run();

    assert_eq!(report.ledger.outcomes(), vec![Fault, Fault, Hit, Eviction]);
    assert_eq!(resident(&report), "BC");
}

/// Equal frequencies: insertion tie-break evicts the newest admission, position
/// tie-break the first slot.
#[rstest]
#[case(TieBreak::Insertion, "AC")]
#[case(TieBreak::Position, "BC")]
fn mfu_tie_break(#[case] tie_break: TieBreak, #[case] expected: &str) {
    let report = TestContext::new(ReplacementPolicy::Mfu, 2, "ABC")
        .with_frequency(frequency(None, tie_break))
        .run();

    assert_eq!(resident(&report), expected);
}

/// The hit on B leaves it in slot 2.
#[test]
fn mfu_hit_is_order_stable() {
    let report = TestContext::new(ReplacementPolicy::Mfu, 3, "ABCB").run();

    assert_eq!(slots(&report), vec![1, 2, 3, 2]);
    assert_eq!(frames(&report), vec!["A", "AB", "ABC", "ABC"]);
}

/// Among several hot symbols the most recently admitted one goes first.
#[test]
fn mfu_max_group_prefers_latest_admission() {
    // A=2, B=2, C=1 when D arrives: tie between A and B, B was admitted later.
    let report = TestContext::new(ReplacementPolicy::Mfu, 3, "ABABCD").run();

    assert_eq!(resident(&report), "ACD");
}
