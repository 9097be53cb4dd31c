//! Auxiliary indexes for frequency-based policies.
//!
//! [`FrequencyTable`] keeps, per symbol, an access count and an admission stamp, and
//! implements the victim scan shared by LFU and MFU.
//!
//! - Counts saturate instead of overflowing.
//! - Stamps come from a per-table counter and only exist for resident symbols.
//! - With aging enabled, every `interval`-th tick halves all counts, and the count of
//!   a departing symbol is kept so a later re-admission resumes from the decayed value.
//!   Without aging, both the count and the stamp are dropped on release.

use std::collections::HashMap;

use crate::common::Symbol;
use crate::config::{FrequencyConfig, TieBreak};

/// Which end of the frequency ordering is evicted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Victim {
    /// Evict the minimum count (LFU).
    LeastFrequent,
    /// Evict the maximum count (MFU).
    MostFrequent,
}

/// Frequency counts and admission stamps keyed by symbol.
#[derive(Debug, Clone)]
pub struct FrequencyTable<S> {
    counts: HashMap<S, u64>,
    stamps: HashMap<S, u64>,
    next_stamp: u64,
    aging_interval: Option<u64>,
    ticks: u64,
}

impl<S: Symbol> FrequencyTable<S> {
    /// Creates an empty table.
    ///
    /// `config.aging_interval` must not be `Some(0)`; [`EngineConfig::validate`]
    /// rejects it, and a zero interval here simply never ages.
    ///
    /// [`EngineConfig::validate`]: crate::config::EngineConfig::validate
    pub fn new(config: &FrequencyConfig) -> Self {
        Self {
            counts: HashMap::new(),
            stamps: HashMap::new(),
            next_stamp: 0,
            aging_interval: config.aging_interval.filter(|&n| n > 0),
            ticks: 0,
        }
    }

    /// Whether decayed history survives eviction.
    pub const fn retains_history(&self) -> bool {
        self.aging_interval.is_some()
    }

    /// Current count for `symbol`, zero if untracked.
    pub fn frequency(&self, symbol: &S) -> u64 {
        self.counts.get(symbol).copied().unwrap_or(0)
    }

    /// Admission stamp for a resident `symbol`.
    pub fn stamp(&self, symbol: &S) -> Option<u64> {
        self.stamps.get(symbol).copied()
    }

    /// Records a hit on a resident symbol.
    pub fn touch(&mut self, symbol: &S) -> u64 {
        let count = self.counts.entry(symbol.clone()).or_insert(0);
        *count = count.saturating_add(1);
        *count
    }

    /// Records an admission: bumps the (possibly retained) count and stamps the symbol.
    pub fn admit(&mut self, symbol: &S) -> u64 {
        let _ = self.stamps.insert(symbol.clone(), self.next_stamp);
        self.next_stamp += 1;
        if !self.retains_history() {
            let _ = self.counts.remove(symbol);
        }
        self.touch(symbol)
    }

    /// Records that `symbol` left the resident set.
    pub fn release(&mut self, symbol: &S) {
        let _ = self.stamps.remove(symbol);
        if !self.retains_history() {
            let _ = self.counts.remove(symbol);
        }
    }

    /// Advances the access clock, halving every count on an aging boundary.
    ///
    /// Returns `true` if the counts were halved.
    pub fn tick(&mut self) -> bool {
        self.ticks += 1;
        let Some(interval) = self.aging_interval else {
            return false;
        };
        if self.ticks % interval != 0 {
            return false;
        }
        for count in self.counts.values_mut() {
            *count /= 2;
        }
        let stamps = &self.stamps;
        self.counts
            .retain(|symbol, count| *count > 0 || stamps.contains_key(symbol));
        true
    }

    /// Picks the index of the symbol to evict from `resident`.
    ///
    /// `resident` must be in presentation order. With [`TieBreak::Insertion`], LFU
    /// prefers the oldest stamp and MFU the newest; with [`TieBreak::Position`] the
    /// first candidate found wins. Returns `None` for an empty set.
    pub fn select_victim<'a, I>(
        &self,
        resident: I,
        victim: Victim,
        tie_break: TieBreak,
    ) -> Option<usize>
    where
        I: IntoIterator<Item = &'a S>,
        S: 'a,
    {
        let mut best: Option<(usize, u64, u64)> = None;
        for (index, symbol) in resident.into_iter().enumerate() {
            let freq = self.frequency(symbol);
            let stamp = self.stamp(symbol).unwrap_or(0);
            let better = match best {
                None => true,
                Some((_, best_freq, best_stamp)) => {
                    let strictly = match victim {
                        Victim::LeastFrequent => freq < best_freq,
                        Victim::MostFrequent => freq > best_freq,
                    };
                    let tie = freq == best_freq
                        && tie_break == TieBreak::Insertion
                        && match victim {
                            Victim::LeastFrequent => stamp < best_stamp,
                            Victim::MostFrequent => stamp > best_stamp,
                        };
                    strictly || tie
                }
            };
            if better {
                best = Some((index, freq, stamp));
            }
        }
        best.map(|(index, _, _)| index)
    }
}
