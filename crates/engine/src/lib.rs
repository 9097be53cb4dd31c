//! Page replacement policy simulator library.
//!
//! This crate replays a reference string against a bounded resident set and reports
//! per-access outcomes with the following:
//! 1. **Policies:** FIFO, LRU, LFU, MFU and a phase-aware adaptive policy.
//! 2. **Phase detection:** Stack-distance histograms compared over a sliding window.
//! 3. **Ledger:** An append-only log of every access plus per-step frame snapshots.
//! 4. **Statistics:** Hit, fault and migration counters with derived ratios.
//! 5. **Configuration:** Serde-backed engine configuration with fail-fast validation.
//!
//! ```
//! use pagesim_core::{EngineConfig, Outcome, config::ReplacementPolicy, simulate};
//!
//! let config = EngineConfig::new(3, ReplacementPolicy::Fifo);
//! let reference: Vec<char> = "ABCABC".chars().collect();
//! let report = simulate(&config, &reference).unwrap();
//!
//! assert_eq!(report.stats.hit, 3);
//! assert_eq!(report.ledger.events()[3].outcome, Outcome::Hit);
//! ```

/// Common types (symbols and configuration errors).
pub mod common;
/// Engine configuration (defaults, policy tags, frequency and adaptive settings).
pub mod config;
/// Replacement engine orchestrator and run report.
pub mod engine;
/// Append-only access ledger and outcome types.
pub mod ledger;
/// Stack-distance tracking, phase detection and working-set prediction.
pub mod phase;
/// Replacement policy implementations (FIFO, LRU, LFU, MFU, Adaptive).
pub mod policies;
/// Run statistics collection and reporting.
pub mod stats;

/// Error returned for invalid engine configuration.
pub use crate::common::ConfigError;
/// Trait bound satisfied by every accessible symbol type.
pub use crate::common::Symbol;
/// Root configuration type; use `EngineConfig::default()` or deserialize from JSON.
pub use crate::config::EngineConfig;
/// Main engine type; construct with `Engine::new` and feed symbols with `operate`.
pub use crate::engine::{Engine, RunReport, simulate};
/// Per-access ledger types.
pub use crate::ledger::{AccessEvent, Ledger, Outcome};
/// Summary counters for a run.
pub use crate::stats::RunStats;
