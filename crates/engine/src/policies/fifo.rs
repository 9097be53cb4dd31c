//! First-In, First-Out (FIFO) Replacement Policy.
//!
//! This policy evicts the symbol admitted earliest, regardless of how recently or how
//! often it was accessed. The resident set is a queue: admissions go to the back,
//! evictions come from the front, and hits leave the order untouched.
//!
//! # Performance
//!
//! - **Time Complexity:** `access()` is O(C) where C is the capacity (membership scan).
//! - **Space Complexity:** O(C).
//! - **Best Case:** Streaming accesses where all symbols have equal importance.
//! - **Worst Case:** Workloads with strong temporal locality (may evict hot symbols).

use std::collections::VecDeque;

use super::{Access, ReplacementPolicy};
use crate::common::Symbol;
use crate::ledger::Outcome;

/// FIFO Policy state.
#[derive(Debug, Clone)]
pub struct FifoPolicy<S> {
    /// Resident symbols in admission order. Front is the oldest.
    queue: VecDeque<S>,
    capacity: usize,
}

impl<S: Symbol> FifoPolicy<S> {
    /// Creates an empty FIFO resident set.
    ///
    /// # Arguments
    ///
    /// * `capacity` - Maximum number of resident symbols.
    pub fn new(capacity: usize) -> Self {
        Self {
            queue: VecDeque::with_capacity(capacity),
            capacity,
        }
    }
}

impl<S: Symbol> ReplacementPolicy<S> for FifoPolicy<S> {
    /// Hits keep their queue position. Misses enqueue at the back, dequeuing the
    /// front first when the queue is full.
    fn access(&mut self, symbol: &S) -> Access {
        if let Some(pos) = self.queue.iter().position(|s| s == symbol) {
            return Access::new(Outcome::Hit, pos + 1);
        }
        if self.capacity == 0 {
            return Access::degenerate();
        }

        let outcome = if self.queue.len() >= self.capacity {
            let _ = self.queue.pop_front();
            Outcome::Eviction
        } else {
            Outcome::Fault
        };
        self.queue.push_back(symbol.clone());
        Access::new(outcome, self.queue.len())
    }

    fn contains(&self, symbol: &S) -> bool {
        self.queue.contains(symbol)
    }

    fn resident(&self) -> Vec<S> {
        self.queue.iter().cloned().collect()
    }

    fn len(&self) -> usize {
        self.queue.len()
    }

    fn capacity(&self) -> usize {
        self.capacity
    }
}
