use pagesim_core::config::{EngineConfig, FrequencyConfig, ReplacementPolicy};
use pagesim_core::{Engine, Outcome, RunReport};

/// Splits a reference string into one symbol per non-whitespace character.
pub fn chars(reference: &str) -> Vec<char> {
    reference.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Installs a test-friendly tracing subscriber. Safe to call from every test.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

/// Fluent wrapper around an engine fed with `char` symbols.
pub struct TestContext {
    pub config: EngineConfig,
    pub reference: Vec<char>,
}

impl TestContext {
    pub fn new(policy: ReplacementPolicy, capacity: usize, reference: &str) -> Self {
        init_tracing();
        Self {
            config: EngineConfig::new(capacity, policy),
            reference: chars(reference),
        }
    }

    pub fn with_frequency(mut self, frequency: FrequencyConfig) -> Self {
        self.config.frequency = frequency;
        self
    }

    pub fn with_adaptive(mut self, phase_window: usize, threshold: f64) -> Self {
        self.config = self.config.with_adaptive(phase_window, threshold);
        self
    }

    /// Builds a fresh engine without feeding anything.
    pub fn engine(&self) -> Engine<char> {
        Engine::new(&self.config, &self.reference).expect("valid test config")
    }

    /// Feeds the whole reference and returns the report.
    pub fn run(&self) -> RunReport<char> {
        let mut engine = self.engine();
        let _ = engine.run(self.reference.iter().copied());
        engine.finish()
    }
}

/// Outcomes of a full run.
pub fn outcomes(policy: ReplacementPolicy, capacity: usize, reference: &str) -> Vec<Outcome> {
    TestContext::new(policy, capacity, reference)
        .run()
        .ledger
        .outcomes()
}

/// Slots of a full run.
pub fn slots(report: &RunReport<char>) -> Vec<usize> {
    report.ledger.iter().map(|e| e.slot).collect()
}

/// Frames of a full run, each rendered as a string.
pub fn frames(report: &RunReport<char>) -> Vec<String> {
    report
        .ledger
        .frames()
        .iter()
        .map(|f| f.iter().collect())
        .collect()
}

/// Final resident set rendered as a string.
pub fn resident(report: &RunReport<char>) -> String {
    report.resident.iter().collect()
}
