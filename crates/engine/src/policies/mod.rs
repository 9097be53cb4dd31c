//! Page Replacement Policies.
//!
//! Implements the resident-set algorithms that decide hits, faults and evictions.
//!
//! # Policies
//!
//! - `Fifo`: First-In, First-Out.
//! - `Lru`: Least Recently Used.
//! - `Lfu`: Least Frequently Used, with optional aging.
//! - `Mfu`: Most Frequently Used, with optional aging.
//! - `Adaptive`: LRU ordering plus phase-aware working-set re-provisioning.
//!
//! Every policy presents its resident set as an ordered list. The 1-based position of
//! a symbol in that list is the `slot` recorded in the ledger.

/// Phase-aware adaptive replacement policy.
pub mod adaptive;

/// First-In, First-Out replacement policy.
pub mod fifo;

/// Frequency counts, admission stamps and aging shared by LFU and MFU.
pub mod frequency;

/// Least Frequently Used replacement policy.
pub mod lfu;

/// Least Recently Used replacement policy.
pub mod lru;

/// Most Frequently Used replacement policy.
pub mod mfu;

pub use adaptive::AdaptivePolicy;
pub use fifo::FifoPolicy;
pub use frequency::{FrequencyTable, Victim};
pub use lfu::LfuPolicy;
pub use lru::LruPolicy;
pub use mfu::MfuPolicy;

use crate::common::Symbol;
use crate::ledger::Outcome;

/// Re-provisioning performed by the adaptive policy at a phase boundary.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Provision {
    /// Histogram divergence that triggered the boundary.
    pub divergence: f64,
    /// Size of the predicted working set.
    pub predicted: usize,
    /// Resident symbols dropped because they were not predicted.
    pub purged: usize,
    /// Predicted symbols admitted ahead of their access.
    pub prefetched: usize,
}

/// Result of resolving one access against a resident set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Access {
    /// Hit, fault or eviction.
    pub outcome: Outcome,
    /// 1-based presentation position of the symbol after the access; zero if not resident.
    pub slot: usize,
    /// Set when the access crossed a phase boundary.
    pub provision: Option<Provision>,
}

impl Access {
    /// An access resolved without re-provisioning.
    pub const fn new(outcome: Outcome, slot: usize) -> Self {
        Self {
            outcome,
            slot,
            provision: None,
        }
    }

    /// Outcome for a zero-capacity resident set.
    ///
    /// The symbol is admitted and immediately displaced by itself, so it counts as a
    /// fault and never occupies a slot.
    pub const fn degenerate() -> Self {
        Self::new(Outcome::Fault, 0)
    }
}

/// Trait for page replacement policies.
///
/// Defines the interface for resolving accesses and observing the resident set.
pub trait ReplacementPolicy<S: Symbol> {
    /// Resolves one access, mutating the resident set and any auxiliary indexes.
    ///
    /// # Arguments
    ///
    /// * `symbol` - The accessed symbol.
    ///
    /// # Returns
    ///
    /// The outcome and the symbol's presentation slot after the access.
    fn access(&mut self, symbol: &S) -> Access;

    /// Whether `symbol` is currently resident.
    fn contains(&self, symbol: &S) -> bool;

    /// Resident symbols in presentation order.
    fn resident(&self) -> Vec<S>;

    /// Number of resident symbols.
    fn len(&self) -> usize;

    /// `true` when nothing is resident.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Maximum number of resident symbols.
    fn capacity(&self) -> usize;
}
