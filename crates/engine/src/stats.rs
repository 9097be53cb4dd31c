//! Run statistics collection and reporting.
//!
//! This module tracks the summary counters of one simulation run. It provides:
//! 1. **Outcome counters:** Hits, faults and migrations (evictions).
//! 2. **Derived ratios:** Fault and hit ratio as pure functions of the counters.
//! 3. **Adaptive counters:** Phase boundaries and re-provisioning traffic.
//! 4. **Reporting:** A sectioned plain-text report.
//!
//! Counters obey `hit + fault == accesses` and `migration <= fault` at every point of a run.

use std::fmt::Write as _;

use serde::{Deserialize, Serialize};

use crate::ledger::Outcome;

/// Summary counters for one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
pub struct RunStats {
    /// Accesses that found their symbol resident.
    pub hit: u64,
    /// Accesses that admitted their symbol (with or without eviction).
    pub fault: u64,
    /// Faulting accesses that displaced a resident symbol.
    pub migration: u64,

    /// Phase boundaries declared by the adaptive policy.
    pub phase_boundaries: u64,
    /// Symbols admitted ahead of time by adaptive re-provisioning.
    pub prefetched: u64,
    /// Symbols dropped by adaptive re-provisioning.
    pub purged: u64,
}

/// Section names for selective stats output.
///
/// Pass an empty slice to [`RunStats::render_sections`] to render all sections.
pub const STATS_SECTIONS: &[&str] = &["summary", "outcomes", "adaptive"];

impl RunStats {
    /// Counts one resolved access.
    pub const fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Hit => self.hit += 1,
            Outcome::Fault => self.fault += 1,
            Outcome::Eviction => {
                self.fault += 1;
                self.migration += 1;
            }
        }
    }

    /// Total accesses counted so far.
    pub const fn accesses(&self) -> u64 {
        self.hit + self.fault
    }

    /// `fault / (hit + fault)`, or `0.0` before the first access.
    pub fn fault_ratio(&self) -> f64 {
        ratio(self.fault, self.accesses())
    }

    /// `hit / (hit + fault)`, or `0.0` before the first access.
    pub fn hit_ratio(&self) -> f64 {
        ratio(self.hit, self.accesses())
    }

    /// `migration / (hit + fault)`, or `0.0` before the first access.
    pub fn migration_ratio(&self) -> f64 {
        ratio(self.migration, self.accesses())
    }

    /// Renders the requested sections as text.
    ///
    /// Each element of `sections` should be one of [`STATS_SECTIONS`]; unknown names
    /// are ignored. An empty slice renders everything.
    pub fn render_sections(&self, sections: &[String]) -> String {
        let want = |s: &str| sections.is_empty() || sections.iter().any(|x| x == s);
        let mut out = String::new();

        let _ = writeln!(out, "==========================================================");
        let _ = writeln!(out, "PAGE REPLACEMENT SIMULATION STATISTICS");
        let _ = writeln!(out, "==========================================================");
        if want("summary") {
            let _ = writeln!(out, "sim_accesses             {}", self.accesses());
            let _ = writeln!(out, "sim_fault_ratio          {:.2}%", self.fault_ratio() * 100.0);
            let _ = writeln!(out, "sim_hit_ratio            {:.2}%", self.hit_ratio() * 100.0);
            let _ = writeln!(out, "----------------------------------------------------------");
        }
        if want("outcomes") {
            let total = self.accesses();
            let _ = writeln!(out, "OUTCOMES");
            let _ = writeln!(
                out,
                "  hit                    {} ({:.2}%)",
                self.hit,
                ratio(self.hit, total) * 100.0
            );
            let _ = writeln!(
                out,
                "  fault                  {} ({:.2}%)",
                self.fault,
                ratio(self.fault, total) * 100.0
            );
            let _ = writeln!(
                out,
                "  migration              {} ({:.2}%)",
                self.migration,
                ratio(self.migration, total) * 100.0
            );
            let _ = writeln!(out, "----------------------------------------------------------");
        }
        if want("adaptive") {
            let _ = writeln!(out, "ADAPTIVE");
            let _ = writeln!(out, "  phase.boundaries       {}", self.phase_boundaries);
            let _ = writeln!(out, "  provision.prefetched   {}", self.prefetched);
            let _ = writeln!(out, "  provision.purged       {}", self.purged);
            let _ = writeln!(out, "----------------------------------------------------------");
        }
        out
    }

    /// Prints only the requested statistics sections to stdout.
    pub fn print_sections(&self, sections: &[String]) {
        print!("{}", self.render_sections(sections));
    }

    /// Prints all statistics sections to stdout.
    ///
    /// Equivalent to `print_sections(&[])`.
    pub fn print(&self) {
        self.print_sections(&[]);
    }
}

fn ratio(part: u64, total: u64) -> f64 {
    if total == 0 {
        0.0
    } else {
        part as f64 / total as f64
    }
}
