//! Least Frequently Used (LFU) Replacement Policy.
//!
//! This policy evicts the resident symbol with the smallest access count. Ties are
//! broken by admission stamp (oldest first) or by scan position, depending on
//! [`TieBreak`]. Hits only bump the count; the resident order never changes on a hit,
//! so frequency alone decides eviction.
//!
//! With aging enabled, counts are periodically halved so that symbols which were hot
//! long ago do not stay pinned forever.
//!
//! # Performance
//!
//! - **Time Complexity:** `access()` is O(C) where C is the capacity (victim scan).
//! - **Space Complexity:** O(C) without aging; O(distinct symbols) with aging.

use super::frequency::{FrequencyTable, Victim};
use super::{Access, ReplacementPolicy};
use crate::common::Symbol;
use crate::config::{FrequencyConfig, TieBreak};
use crate::ledger::Outcome;

/// LFU Policy state.
#[derive(Debug, Clone)]
pub struct LfuPolicy<S> {
    /// Resident symbols in admission order.
    frames: Vec<S>,
    table: FrequencyTable<S>,
    tie_break: TieBreak,
    capacity: usize,
}

impl<S: Symbol> LfuPolicy<S> {
    /// Creates an empty LFU resident set.
    ///
    /// # Arguments
    ///
    /// * `capacity` - Maximum number of resident symbols.
    /// * `config` - Aging interval and tie-break rule.
    pub fn new(capacity: usize, config: &FrequencyConfig) -> Self {
        Self {
            frames: Vec::with_capacity(capacity),
            table: FrequencyTable::new(config),
            tie_break: config.tie_break,
            capacity,
        }
    }

    /// Current access count of `symbol`.
    pub fn frequency(&self, symbol: &S) -> u64 {
        self.table.frequency(symbol)
    }

    fn resolve(&mut self, symbol: &S) -> Access {
        if let Some(pos) = self.frames.iter().position(|s| s == symbol) {
            let _ = self.table.touch(symbol);
            return Access::new(Outcome::Hit, pos + 1);
        }
        if self.capacity == 0 {
            return Access::degenerate();
        }

        let mut outcome = Outcome::Fault;
        if self.frames.len() >= self.capacity {
            if let Some(index) =
                self.table
                    .select_victim(&self.frames, Victim::LeastFrequent, self.tie_break)
            {
                let evicted = self.frames.remove(index);
                self.table.release(&evicted);
                outcome = Outcome::Eviction;
            }
        }
        self.frames.push(symbol.clone());
        let _ = self.table.admit(symbol);
        Access::new(outcome, self.frames.len())
    }
}

impl<S: Symbol> ReplacementPolicy<S> for LfuPolicy<S> {
    fn access(&mut self, symbol: &S) -> Access {
        let access = self.resolve(symbol);
        let _ = self.table.tick();
        access
    }

    fn contains(&self, symbol: &S) -> bool {
        self.frames.contains(symbol)
    }

    fn resident(&self) -> Vec<S> {
        self.frames.clone()
    }

    fn len(&self) -> usize {
        self.frames.len()
    }

    fn capacity(&self) -> usize {
        self.capacity
    }
}
