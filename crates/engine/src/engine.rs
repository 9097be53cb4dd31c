//! Replacement engine.
//!
//! The engine owns one resident-set implementation, the ledger and the run counters.
//! It is fed one symbol at a time through [`Engine::operate`], which resolves the
//! access synchronously, and is consumed by [`Engine::finish`] once the run is over.
//! Taking `self` by value there means a finished engine cannot be fed again.
//!
//! Policies are held in [`PolicyState`], a sum type carrying only the state each
//! policy needs; dispatch goes through one `match` in [`PolicyState::as_policy_mut`].

use serde::Serialize;
use tracing::{debug, trace};

use crate::common::{ConfigError, Symbol};
use crate::config::{EngineConfig, ReplacementPolicy as PolicyKind};
use crate::ledger::{Ledger, Outcome};
use crate::policies::{
    AdaptivePolicy, FifoPolicy, LfuPolicy, LruPolicy, MfuPolicy, ReplacementPolicy,
};
use crate::stats::RunStats;

/// Resident-set state for the active policy.
#[derive(Debug, Clone)]
pub enum PolicyState<S> {
    /// First-In, First-Out queue.
    Fifo(FifoPolicy<S>),
    /// Recency-ordered list.
    Lru(LruPolicy<S>),
    /// Frequency counts, evict the minimum.
    Lfu(LfuPolicy<S>),
    /// Frequency counts, evict the maximum.
    Mfu(MfuPolicy<S>),
    /// Recency list with phase-driven re-provisioning.
    Adaptive(AdaptivePolicy<S>),
}

impl<S: Symbol> PolicyState<S> {
    /// Builds the state for `config.policy`.
    ///
    /// `reference` is copied only for the adaptive policy.
    pub fn new(config: &EngineConfig, reference: &[S]) -> Self {
        let capacity = config.capacity;
        match config.policy {
            PolicyKind::Fifo => Self::Fifo(FifoPolicy::new(capacity)),
            PolicyKind::Lru => Self::Lru(LruPolicy::new(capacity)),
            PolicyKind::Lfu => Self::Lfu(LfuPolicy::new(capacity, &config.frequency)),
            PolicyKind::Mfu => Self::Mfu(MfuPolicy::new(capacity, &config.frequency)),
            PolicyKind::Adaptive => Self::Adaptive(AdaptivePolicy::new(
                capacity,
                &config.adaptive,
                reference.to_vec(),
            )),
        }
    }

    /// Tag of the held policy.
    pub const fn kind(&self) -> PolicyKind {
        match self {
            Self::Fifo(_) => PolicyKind::Fifo,
            Self::Lru(_) => PolicyKind::Lru,
            Self::Lfu(_) => PolicyKind::Lfu,
            Self::Mfu(_) => PolicyKind::Mfu,
            Self::Adaptive(_) => PolicyKind::Adaptive,
        }
    }

    /// Shared view through the policy trait.
    pub fn as_policy(&self) -> &dyn ReplacementPolicy<S> {
        match self {
            Self::Fifo(p) => p,
            Self::Lru(p) => p,
            Self::Lfu(p) => p,
            Self::Mfu(p) => p,
            Self::Adaptive(p) => p,
        }
    }

    /// Mutable view through the policy trait.
    pub fn as_policy_mut(&mut self) -> &mut dyn ReplacementPolicy<S> {
        match self {
            Self::Fifo(p) => p,
            Self::Lru(p) => p,
            Self::Lfu(p) => p,
            Self::Mfu(p) => p,
            Self::Adaptive(p) => p,
        }
    }
}

/// Everything a caller needs after a run.
#[derive(Debug, Clone, Serialize)]
pub struct RunReport<S> {
    /// Policy that produced the run.
    pub policy: PolicyKind,
    /// Resident set capacity.
    pub capacity: usize,
    /// Summary counters.
    pub stats: RunStats,
    /// Resident symbols at the end of the run, in presentation order.
    pub resident: Vec<S>,
    /// Sequence ids of the accesses that crossed a phase boundary.
    pub phase_boundaries: Vec<u64>,
    /// Every access, in order.
    pub ledger: Ledger<S>,
}

/// Replacement engine for one simulation run.
#[derive(Debug, Clone)]
pub struct Engine<S> {
    config: EngineConfig,
    policy: PolicyState<S>,
    ledger: Ledger<S>,
    stats: RunStats,
    phase_boundaries: Vec<u64>,
}

impl<S: Symbol> Engine<S> {
    /// Creates an engine for `config`.
    ///
    /// # Arguments
    ///
    /// * `config` - Capacity, policy and policy settings.
    /// * `reference` - The full reference string. Only the adaptive policy reads it
    ///   (for look-ahead); other policies accept an empty slice.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigError`] reported by [`EngineConfig::validate`].
    pub fn new(config: &EngineConfig, reference: &[S]) -> Result<Self, ConfigError> {
        config.validate()?;
        debug!(
            policy = %config.policy,
            capacity = config.capacity,
            reference_len = reference.len(),
            "engine created"
        );
        Ok(Self {
            config: config.clone(),
            policy: PolicyState::new(config, reference),
            ledger: Ledger::with_capacity(reference.len()),
            stats: RunStats::default(),
            phase_boundaries: Vec::new(),
        })
    }

    /// Resolves one access.
    ///
    /// Mutates the resident set, bumps exactly one of `hit`/`fault` (plus `migration`
    /// for an eviction) and appends exactly one ledger event.
    pub fn operate(&mut self, symbol: S) -> Outcome {
        let access = self.policy.as_policy_mut().access(&symbol);

        if let Some(provision) = access.provision {
            self.stats.phase_boundaries += 1;
            self.stats.prefetched += provision.prefetched as u64;
            self.stats.purged += provision.purged as u64;
            self.phase_boundaries.push(self.ledger.len() as u64);
        }
        self.stats.record(access.outcome);

        let frame = self.policy.as_policy().resident();
        let event = self.ledger.record(symbol, access.outcome, access.slot, frame);
        trace!(
            seq = event.sequence_id,
            symbol = ?event.symbol,
            outcome = ?event.outcome,
            slot = event.slot,
            "access"
        );
        access.outcome
    }

    /// Feeds every symbol of `symbols` in order and returns how many were fed.
    pub fn run<I>(&mut self, symbols: I) -> usize
    where
        I: IntoIterator<Item = S>,
    {
        let mut fed = 0;
        for symbol in symbols {
            let _ = self.operate(symbol);
            fed += 1;
        }
        fed
    }

    /// Configuration the engine was built with.
    pub const fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Active policy tag.
    pub const fn policy(&self) -> PolicyKind {
        self.policy.kind()
    }

    /// Policy state, for inspection.
    pub const fn policy_state(&self) -> &PolicyState<S> {
        &self.policy
    }

    /// Ledger so far.
    pub const fn ledger(&self) -> &Ledger<S> {
        &self.ledger
    }

    /// Counters so far.
    pub const fn stats(&self) -> &RunStats {
        &self.stats
    }

    /// Resident symbols in presentation order.
    pub fn resident(&self) -> Vec<S> {
        self.policy.as_policy().resident()
    }

    /// Whether `symbol` is resident.
    pub fn contains(&self, symbol: &S) -> bool {
        self.policy.as_policy().contains(symbol)
    }

    /// Sequence ids of accesses that crossed a phase boundary.
    pub fn phase_boundaries(&self) -> &[u64] {
        &self.phase_boundaries
    }

    /// Ends the run and hands over the ledger, final resident set and counters.
    pub fn finish(self) -> RunReport<S> {
        let resident = self.resident();
        debug!(
            policy = %self.config.policy,
            accesses = self.stats.accesses(),
            hit = self.stats.hit,
            fault = self.stats.fault,
            migration = self.stats.migration,
            "run finished"
        );
        RunReport {
            policy: self.config.policy,
            capacity: self.config.capacity,
            stats: self.stats,
            resident,
            phase_boundaries: self.phase_boundaries,
            ledger: self.ledger,
        }
    }
}

/// Runs `reference` to completion under `config`.
///
/// # Errors
///
/// Returns a [`ConfigError`] if `config` is invalid.
pub fn simulate<S: Symbol>(
    config: &EngineConfig,
    reference: &[S],
) -> Result<RunReport<S>, ConfigError> {
    let mut engine = Engine::new(config, reference)?;
    let _ = engine.run(reference.iter().cloned());
    Ok(engine.finish())
}
