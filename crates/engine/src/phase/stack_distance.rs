//! Stack-distance tracking.
//!
//! The stack distance of an access is the 0-based position of the symbol in the
//! recency history (most recent first) at the moment it is accessed again, i.e. the
//! number of distinct symbols touched since its previous occurrence. First-time
//! accesses have an infinite distance.
//!
//! The tracker keeps the full history and a trailing window of the last `window`
//! distances, mirrored into a histogram so the phase detector can compare
//! distributions in O(distinct distances).

use std::collections::{BTreeMap, VecDeque};
use std::fmt;

use crate::common::Symbol;

/// Reuse distance of one access.
///
/// Orders finite distances before [`StackDistance::Infinite`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StackDistance {
    /// Symbol found at this 0-based depth of the recency history.
    Finite(usize),
    /// Symbol never seen before.
    Infinite,
}

impl fmt::Display for StackDistance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Finite(d) => write!(f, "{d}"),
            Self::Infinite => f.write_str("inf"),
        }
    }
}

/// Distance -> occurrence count. Zero buckets are never stored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DistanceHistogram {
    buckets: BTreeMap<StackDistance, u64>,
}

impl DistanceHistogram {
    /// Creates an empty histogram.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one occurrence of `distance`.
    pub fn add(&mut self, distance: StackDistance) {
        let count = self.buckets.entry(distance).or_insert(0);
        *count = count.saturating_add(1);
    }

    /// Removes one occurrence of `distance`, dropping the bucket when it empties.
    ///
    /// Removing an absent distance is a no-op.
    pub fn remove(&mut self, distance: StackDistance) {
        if let Some(count) = self.buckets.get_mut(&distance) {
            *count = count.saturating_sub(1);
            if *count == 0 {
                let _ = self.buckets.remove(&distance);
            }
        }
    }

    /// Count for `distance`.
    pub fn get(&self, distance: StackDistance) -> u64 {
        self.buckets.get(&distance).copied().unwrap_or(0)
    }

    /// Sum of all buckets.
    pub fn total(&self) -> u64 {
        self.buckets.values().sum()
    }

    /// `true` if no occurrence is recorded.
    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Non-empty buckets in ascending distance order.
    pub fn iter(&self) -> impl Iterator<Item = (StackDistance, u64)> + '_ {
        self.buckets.iter().map(|(&d, &c)| (d, c))
    }

    /// L1 distance `Σ |self[k] - other[k]|` over the union of both key sets.
    pub fn l1_distance(&self, other: &Self) -> u64 {
        let mut sum = 0u64;
        for (&distance, &count) in &self.buckets {
            sum = sum.saturating_add(count.abs_diff(other.get(distance)));
        }
        for (&distance, &count) in &other.buckets {
            if !self.buckets.contains_key(&distance) {
                sum = sum.saturating_add(count);
            }
        }
        sum
    }
}

impl FromIterator<StackDistance> for DistanceHistogram {
    fn from_iter<I: IntoIterator<Item = StackDistance>>(iter: I) -> Self {
        let mut histogram = Self::new();
        for distance in iter {
            histogram.add(distance);
        }
        histogram
    }
}

/// Recency history plus a sliding histogram of recent stack distances.
#[derive(Debug, Clone)]
pub struct StackDistanceTracker<S> {
    /// Distinct symbols, most recent first.
    history: VecDeque<S>,
    /// Last `window` distances, oldest at the front.
    recent: VecDeque<StackDistance>,
    histogram: DistanceHistogram,
    window: usize,
}

impl<S: Symbol> StackDistanceTracker<S> {
    /// Creates a tracker whose histogram covers the last `window` accesses.
    pub fn new(window: usize) -> Self {
        Self {
            history: VecDeque::new(),
            recent: VecDeque::with_capacity(window.saturating_add(1)),
            histogram: DistanceHistogram::new(),
            window,
        }
    }

    /// Records an access and returns its stack distance.
    ///
    /// The distance enters the window (and the histogram); the oldest windowed
    /// distance leaves once the window is over-full. The symbol moves to the front of
    /// the recency history.
    pub fn observe(&mut self, symbol: &S) -> StackDistance {
        let distance = match self.history.iter().position(|s| s == symbol) {
            Some(depth) => {
                if let Some(seen) = self.history.remove(depth) {
                    self.history.push_front(seen);
                }
                StackDistance::Finite(depth)
            }
            None => {
                self.history.push_front(symbol.clone());
                StackDistance::Infinite
            }
        };

        self.recent.push_back(distance);
        self.histogram.add(distance);
        while self.recent.len() > self.window {
            if let Some(expired) = self.recent.pop_front() {
                self.histogram.remove(expired);
            }
        }
        distance
    }

    /// Histogram of the distances currently in the window.
    pub const fn histogram(&self) -> &DistanceHistogram {
        &self.histogram
    }

    /// Distances currently in the window, oldest first.
    pub fn window(&self) -> impl Iterator<Item = StackDistance> + '_ {
        self.recent.iter().copied()
    }

    /// Distinct symbols seen so far, most recent first.
    pub fn history(&self) -> impl Iterator<Item = &S> + '_ {
        self.history.iter()
    }
}
