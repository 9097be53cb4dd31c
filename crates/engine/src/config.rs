//! Configuration system for the replacement simulator.
//!
//! This module defines the configuration structures and enums used to parameterize
//! an engine run. It provides:
//! 1. **Defaults:** Baseline values for capacity, aging and phase detection.
//! 2. **Structures:** Root engine config plus frequency and adaptive sub-configs.
//! 3. **Enums:** Replacement policy tags and frequency tie-break rules.
//! 4. **Validation:** Fail-fast checks returning [`ConfigError`].
//!
//! Configuration is supplied as JSON (see [`EngineConfig::from_json`]) or built in code
//! starting from [`EngineConfig::new`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::common::ConfigError;

/// Default configuration constants for the simulator.
pub mod defaults {
    /// Default resident set capacity (three frames).
    pub const CAPACITY: usize = 3;

    /// Reference aging interval for frequency-based policies.
    ///
    /// Every this many accesses, each tracked frequency is halved.
    pub const AGING_INTERVAL: u64 = 10;

    /// Default phase window for the adaptive policy.
    ///
    /// Sizes both the trailing stack-distance window and the look-ahead window.
    pub const PHASE_WINDOW: usize = 4;

    /// Default histogram divergence threshold for the adaptive policy.
    pub const PHASE_THRESHOLD: f64 = 2.0;
}

/// Replacement policy selector.
///
/// Each variant maps to one resident-set implementation in
/// [`policies`](crate::policies).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ReplacementPolicy {
    /// First In First Out.
    ///
    /// Evicts the symbol admitted earliest; hits never reorder.
    #[serde(alias = "Fifo")]
    Fifo,
    /// Least Recently Used.
    ///
    /// Evicts the symbol whose last access is oldest.
    #[default]
    #[serde(alias = "Lru")]
    Lru,
    /// Least Frequently Used.
    ///
    /// Evicts the resident symbol with the smallest access count.
    #[serde(alias = "Lfu")]
    Lfu,
    /// Most Frequently Used.
    ///
    /// Evicts the resident symbol with the largest access count.
    #[serde(alias = "Mfu")]
    Mfu,
    /// Phase-aware adaptive policy.
    ///
    /// LRU ordering plus working-set re-provisioning at detected phase
    /// boundaries, using a look-ahead over the known reference string.
    #[serde(alias = "Adaptive", alias = "NEW", alias = "New")]
    Adaptive,
}

impl ReplacementPolicy {
    /// Every policy, in presentation order.
    pub const ALL: [Self; 5] = [Self::Fifo, Self::Lru, Self::Lfu, Self::Mfu, Self::Adaptive];

    /// Short upper-case tag used in reports.
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Fifo => "FIFO",
            Self::Lru => "LRU",
            Self::Lfu => "LFU",
            Self::Mfu => "MFU",
            Self::Adaptive => "NEW",
        }
    }

    /// Whether the policy keeps a frequency table.
    pub const fn is_frequency_based(self) -> bool {
        matches!(self, Self::Lfu | Self::Mfu)
    }
}

impl fmt::Display for ReplacementPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for ReplacementPolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "FIFO" => Ok(Self::Fifo),
            "LRU" => Ok(Self::Lru),
            "LFU" => Ok(Self::Lfu),
            "MFU" => Ok(Self::Mfu),
            "NEW" | "ADAPTIVE" => Ok(Self::Adaptive),
            _ => Err(ConfigError::UnknownPolicy(s.to_string())),
        }
    }
}

/// Eviction tie-break rule for frequency-based policies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TieBreak {
    /// Break ties by admission stamp.
    ///
    /// LFU picks the oldest admission among the minimum-frequency group,
    /// MFU picks the newest admission among the maximum-frequency group.
    #[default]
    Insertion,
    /// Pick the first candidate found scanning the resident set front to back.
    Position,
}

impl FromStr for TieBreak {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "insertion" => Ok(Self::Insertion),
            "position" => Ok(Self::Position),
            _ => Err(ConfigError::UnknownTieBreak(s.to_string())),
        }
    }
}

/// Settings shared by the LFU and MFU policies.
///
/// Aging and the tie-break rule are independent switches and compose freely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
pub struct FrequencyConfig {
    /// Halve every tracked frequency after this many accesses.
    ///
    /// `None` disables aging. With aging on, the decayed count of an evicted
    /// symbol is retained and resumed if the symbol is admitted again.
    #[serde(default)]
    pub aging_interval: Option<u64>,

    /// Rule used when several residents share the extreme frequency.
    #[serde(default)]
    pub tie_break: TieBreak,
}

impl FrequencyConfig {
    /// Frequency settings with aging at the reference interval.
    pub const fn with_reference_aging() -> Self {
        Self {
            aging_interval: Some(defaults::AGING_INTERVAL),
            tie_break: TieBreak::Insertion,
        }
    }
}

/// Settings for the phase-aware adaptive policy.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct AdaptiveConfig {
    /// Length of the trailing stack-distance window and of the look-ahead window.
    #[serde(default = "AdaptiveConfig::default_phase_window")]
    pub phase_window: usize,

    /// A phase boundary is declared when histogram divergence strictly exceeds this.
    #[serde(default = "AdaptiveConfig::default_threshold")]
    pub threshold: f64,
}

impl AdaptiveConfig {
    fn default_phase_window() -> usize {
        defaults::PHASE_WINDOW
    }

    fn default_threshold() -> f64 {
        defaults::PHASE_THRESHOLD
    }
}

impl Default for AdaptiveConfig {
    fn default() -> Self {
        Self {
            phase_window: defaults::PHASE_WINDOW,
            threshold: defaults::PHASE_THRESHOLD,
        }
    }
}

/// Root configuration structure for one simulation run.
///
/// # Examples
///
/// ```
/// use pagesim_core::config::{EngineConfig, ReplacementPolicy, TieBreak};
///
/// let json = r#"{
///     "capacity": 4,
///     "policy": "MFU",
///     "frequency": { "aging_interval": 10, "tie_break": "position" }
/// }"#;
///
/// let config = EngineConfig::from_json(json).unwrap();
/// assert_eq!(config.capacity, 4);
/// assert_eq!(config.policy, ReplacementPolicy::Mfu);
/// assert_eq!(config.frequency.tie_break, TieBreak::Position);
/// assert_eq!(config.adaptive.phase_window, 4);
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct EngineConfig {
    /// Maximum number of resident symbols. Zero is valid and degenerate.
    #[serde(default = "EngineConfig::default_capacity")]
    pub capacity: usize,

    /// Active replacement policy.
    #[serde(default)]
    pub policy: ReplacementPolicy,

    /// LFU/MFU settings; ignored by other policies.
    #[serde(default)]
    pub frequency: FrequencyConfig,

    /// Adaptive policy settings; ignored by other policies.
    #[serde(default)]
    pub adaptive: AdaptiveConfig,
}

impl EngineConfig {
    /// Creates a configuration with default frequency and adaptive settings.
    pub fn new(capacity: usize, policy: ReplacementPolicy) -> Self {
        Self {
            capacity,
            policy,
            frequency: FrequencyConfig::default(),
            adaptive: AdaptiveConfig::default(),
        }
    }

    /// Replaces the frequency settings.
    #[must_use]
    pub const fn with_frequency(mut self, frequency: FrequencyConfig) -> Self {
        self.frequency = frequency;
        self
    }

    /// Replaces the adaptive settings.
    #[must_use]
    pub const fn with_adaptive(mut self, phase_window: usize, threshold: f64) -> Self {
        self.adaptive = AdaptiveConfig {
            phase_window,
            threshold,
        };
        self
    }

    /// Parses and validates a JSON configuration document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] if the document is malformed or names an
    /// unknown policy, or any error produced by [`validate`](Self::validate).
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks the settings that matter for the selected policy.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::ZeroAgingInterval`] for LFU/MFU with `aging_interval == Some(0)`.
    /// - [`ConfigError::ZeroPhaseWindow`] for Adaptive with `phase_window == 0`.
    /// - [`ConfigError::InvalidThreshold`] for Adaptive with a negative or NaN threshold.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.policy.is_frequency_based() && self.frequency.aging_interval == Some(0) {
            return Err(ConfigError::ZeroAgingInterval);
        }
        if self.policy == ReplacementPolicy::Adaptive {
            if self.adaptive.phase_window == 0 {
                return Err(ConfigError::ZeroPhaseWindow);
            }
            let threshold = self.adaptive.threshold;
            if threshold.is_nan() || threshold < 0.0 {
                return Err(ConfigError::InvalidThreshold(threshold));
            }
        }
        Ok(())
    }

    fn default_capacity() -> usize {
        defaults::CAPACITY
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::new(defaults::CAPACITY, ReplacementPolicy::default())
    }
}
