//! Least Recently Used (LRU) Replacement Policy.
//!
//! This policy evicts the symbol that has not been accessed for the longest time.
//! The resident list is a strict recency ranking: the back is the most recently used
//! symbol and the front is the least recently used one. A hit moves the symbol to the
//! back; an eviction removes the front.
//!
//! # Performance
//!
//! - **Time Complexity:** `access()` is O(C) where C is the capacity.
//! - **Space Complexity:** O(C).
//! - **Best Case:** Accesses with good temporal locality.
//! - **Worst Case:** Cyclic scans larger than the capacity (thrashing).

use std::collections::VecDeque;

use super::{Access, ReplacementPolicy};
use crate::common::Symbol;
use crate::ledger::Outcome;

/// LRU Policy state.
#[derive(Debug, Clone)]
pub struct LruPolicy<S> {
    /// Recency stack. Index 0 is LRU, last index is MRU.
    order: VecDeque<S>,
    capacity: usize,
}

impl<S: Symbol> LruPolicy<S> {
    /// Creates an empty LRU resident set.
    ///
    /// # Arguments
    ///
    /// * `capacity` - Maximum number of resident symbols.
    pub fn new(capacity: usize) -> Self {
        Self {
            order: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// The symbol that would be evicted next, if any.
    pub fn victim(&self) -> Option<&S> {
        self.order.front()
    }
}

impl<S: Symbol> ReplacementPolicy<S> for LruPolicy<S> {
    /// Moves a hit symbol to the MRU end; admits misses at the MRU end, evicting the
    /// LRU symbol first when full.
    fn access(&mut self, symbol: &S) -> Access {
        if let Some(pos) = self.order.iter().position(|s| s == symbol) {
            if let Some(hit) = self.order.remove(pos) {
                self.order.push_back(hit);
            }
            return Access::new(Outcome::Hit, self.order.len());
        }
        if self.capacity == 0 {
            return Access::degenerate();
        }

        let outcome = if self.order.len() >= self.capacity {
            let _ = self.order.pop_front();
            Outcome::Eviction
        } else {
            Outcome::Fault
        };
        self.order.push_back(symbol.clone());
        Access::new(outcome, self.order.len())
    }

    fn contains(&self, symbol: &S) -> bool {
        self.order.contains(symbol)
    }

    fn resident(&self) -> Vec<S> {
        self.order.iter().cloned().collect()
    }

    fn len(&self) -> usize {
        self.order.len()
    }

    fn capacity(&self) -> usize {
        self.capacity
    }
}
