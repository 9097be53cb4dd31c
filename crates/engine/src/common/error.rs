//! Configuration error definitions.
//!
//! The engine performs no I/O, so the only failure it reports is a misused
//! configuration. Every variant is raised at construction time; once an
//! [`Engine`](crate::engine::Engine) exists, every access is a total function
//! of its state.

use thiserror::Error;

/// Errors raised while validating or parsing an engine configuration.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// The adaptive policy was configured with a phase window of zero.
    ///
    /// The window sizes both the stack-distance histogram and the look-ahead
    /// used for working-set prediction, so it must hold at least one access.
    #[error("adaptive policy requires a positive phase window")]
    ZeroPhaseWindow,

    /// The adaptive policy threshold is negative or not a number.
    #[error("phase threshold must be a non-negative number, got {0}")]
    InvalidThreshold(f64),

    /// Frequency aging was enabled with an interval of zero accesses.
    #[error("aging interval must be at least one access")]
    ZeroAgingInterval,

    /// A policy tag did not name any known policy.
    #[error("unknown replacement policy `{0}` (expected FIFO, LRU, LFU, MFU or NEW)")]
    UnknownPolicy(String),

    /// A tie-break tag did not name any known rule.
    #[error("unknown tie-break rule `{0}` (expected insertion or position)")]
    UnknownTieBreak(String),

    /// The configuration document could not be deserialized.
    #[error("invalid configuration: {0}")]
    Parse(String),
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err.to_string())
    }
}
