//! Append-only access ledger.
//!
//! Every call to [`Engine::operate`](crate::engine::Engine::operate) appends exactly one
//! [`AccessEvent`] together with a snapshot of the resident set after the access. The
//! ledger is the single source of truth for anything rendered after a run: a frame grid
//! is a replay of `frames()`, a chart is a fold over `events()`.
//!
//! Sequence ids come from a counter owned by the ledger, so ids are scoped to one engine
//! and two engines running side by side never interfere.

use std::{fmt, slice};

use serde::{Deserialize, Serialize};

/// Result of a single access.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum Outcome {
    /// The symbol was already resident.
    Hit,
    /// The symbol was admitted into free capacity.
    Fault,
    /// The symbol was admitted by displacing a resident symbol (a migration).
    Eviction,
}

impl Outcome {
    /// `true` for `Fault` and `Eviction`, both of which count as faults.
    pub const fn is_fault(self) -> bool {
        !matches!(self, Self::Hit)
    }

    /// `true` only for `Eviction`.
    pub const fn is_eviction(self) -> bool {
        matches!(self, Self::Eviction)
    }

    /// Single-letter code used in text grids (`H`, `F`, `E`).
    pub const fn code(self) -> char {
        match self {
            Self::Hit => 'H',
            Self::Fault => 'F',
            Self::Eviction => 'E',
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            Self::Hit => "Hit",
            Self::Fault => "Fault",
            Self::Eviction => "Eviction",
        })
    }
}

/// One ledger entry. Immutable once recorded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AccessEvent<S> {
    /// Strictly increasing id, starting at zero for each engine.
    pub sequence_id: u64,
    /// The accessed symbol.
    pub symbol: S,
    /// What the access did.
    pub outcome: Outcome,
    /// 1-based position of `symbol` in the resident set's presentation order after
    /// the access. Zero when the symbol is not resident (capacity zero).
    pub slot: usize,
}

/// Ordered log of every access made through an engine.
#[derive(Debug, Clone, Serialize)]
pub struct Ledger<S> {
    events: Vec<AccessEvent<S>>,
    frames: Vec<Vec<S>>,
    #[serde(skip)]
    next_id: u64,
}

impl<S> Default for Ledger<S> {
    fn default() -> Self {
        Self {
            events: Vec::new(),
            frames: Vec::new(),
            next_id: 0,
        }
    }
}

impl<S> Ledger<S> {
    /// Creates an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty ledger with room for `accesses` entries.
    pub fn with_capacity(accesses: usize) -> Self {
        Self {
            events: Vec::with_capacity(accesses),
            frames: Vec::with_capacity(accesses),
            next_id: 0,
        }
    }

    /// Appends an event and the post-access resident snapshot.
    ///
    /// Assigns the next sequence id and returns the stored event.
    pub(crate) fn record(
        &mut self,
        symbol: S,
        outcome: Outcome,
        slot: usize,
        frame: Vec<S>,
    ) -> &AccessEvent<S> {
        let sequence_id = self.next_id;
        self.next_id += 1;
        self.frames.push(frame);
        let index = self.events.len();
        self.events.push(AccessEvent {
            sequence_id,
            symbol,
            outcome,
            slot,
        });
        &self.events[index]
    }

    /// All events in access order.
    pub fn events(&self) -> &[AccessEvent<S>] {
        &self.events
    }

    /// Resident-set snapshots, one per event, in presentation order.
    pub fn frames(&self) -> &[Vec<S>] {
        &self.frames
    }

    /// Snapshot taken after the `index`-th access.
    pub fn frame(&self, index: usize) -> Option<&[S]> {
        self.frames.get(index).map(Vec::as_slice)
    }

    /// Number of recorded accesses.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// `true` before the first access.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Most recent event, if any.
    pub fn last(&self) -> Option<&AccessEvent<S>> {
        self.events.last()
    }

    /// Iterates over events in access order.
    pub fn iter(&self) -> slice::Iter<'_, AccessEvent<S>> {
        self.events.iter()
    }

    /// Events whose outcome equals `outcome`, in access order.
    pub fn events_with(&self, outcome: Outcome) -> impl Iterator<Item = &AccessEvent<S>> + '_ {
        self.events.iter().filter(move |event| event.outcome == outcome)
    }

    /// Number of events with the given outcome.
    pub fn count(&self, outcome: Outcome) -> usize {
        self.events_with(outcome).count()
    }

    /// Outcomes in access order.
    pub fn outcomes(&self) -> Vec<Outcome> {
        self.events.iter().map(|event| event.outcome).collect()
    }
}

impl<'a, S> IntoIterator for &'a Ledger<S> {
    type Item = &'a AccessEvent<S>;
    type IntoIter = slice::Iter<'a, AccessEvent<S>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
