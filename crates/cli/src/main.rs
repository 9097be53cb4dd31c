//! Page replacement simulator CLI.
//!
//! This binary drives the `pagesim-core` engine over a reference string given on the
//! command line. It provides:
//! 1. **Single run:** One policy, per-step trace, optional frame grid, and statistics.
//! 2. **Comparison:** Every policy over the same string, summarised as a fault-ratio table.
//!
//! Each non-whitespace character of the reference string is one symbol.

use std::fmt::Display;
use std::{fs, process};

use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use pagesim_core::config::{EngineConfig, ReplacementPolicy, TieBreak, defaults};
use pagesim_core::{RunReport, simulate};

#[derive(Parser, Debug)]
#[command(
    name = "pagesim",
    author,
    version,
    about = "Page replacement policy simulator",
    long_about = "Replay a reference string through FIFO, LRU, LFU, MFU or the phase-aware adaptive policy.\n\nExamples:\n  pagesim run --policy LRU --capacity 3 --reference 70120304230321201701\n  pagesim run --policy NEW --capacity 3 --reference ABCABDABE --window 3 --grid\n  pagesim compare --capacity 4 --reference 123412512345"
)]
struct Cli {
    /// Log engine decisions at debug level (overridden by `RUST_LOG`).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run one policy over a reference string.
    Run(RunArgs),

    /// Run every policy over the same reference string and compare fault ratios.
    Compare {
        /// Resident set capacity.
        #[arg(short, long, default_value_t = defaults::CAPACITY)]
        capacity: usize,

        /// Reference string; each non-whitespace character is a symbol.
        #[arg(short, long)]
        reference: String,
    },
}

#[derive(Args, Debug)]
struct RunArgs {
    /// Replacement policy: FIFO, LRU, LFU, MFU or NEW (adaptive).
    #[arg(short, long)]
    policy: Option<ReplacementPolicy>,

    /// Resident set capacity.
    #[arg(short, long)]
    capacity: Option<usize>,

    /// Reference string; each non-whitespace character is a symbol.
    #[arg(short, long)]
    reference: String,

    /// JSON configuration file. Command-line flags override its values.
    #[arg(long)]
    config: Option<String>,

    /// Adaptive phase window (stack-distance and look-ahead length).
    #[arg(long)]
    window: Option<usize>,

    /// Adaptive divergence threshold.
    #[arg(long)]
    threshold: Option<f64>,

    /// LFU/MFU aging interval in accesses.
    #[arg(long)]
    aging: Option<u64>,

    /// LFU/MFU tie-break rule: insertion or position.
    #[arg(long)]
    tie_break: Option<TieBreak>,

    /// Print the run report as JSON instead of text.
    #[arg(long)]
    json: bool,

    /// Statistics sections to print (summary, outcomes, adaptive). All when omitted.
    #[arg(long, num_args = 1..)]
    stats: Vec<String>,

    /// Print the resident set after every step as a grid.
    #[arg(long)]
    grid: bool,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Run(args) => cmd_run(&args),
        Commands::Compare {
            capacity,
            reference,
        } => cmd_compare(capacity, &reference),
    }
}

/// Installs a stderr subscriber. `RUST_LOG` wins over `--verbose`.
fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn fail(message: impl Display) -> ! {
    eprintln!("Error: {message}");
    process::exit(1);
}

fn symbols(reference: &str) -> Vec<char> {
    reference.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Builds the run configuration: file values first, then flag overrides.
fn build_config(args: &RunArgs) -> EngineConfig {
    let mut config = match &args.config {
        Some(path) => {
            let text = fs::read_to_string(path)
                .unwrap_or_else(|e| fail(format_args!("reading config {path}: {e}")));
            EngineConfig::from_json(&text).unwrap_or_else(|e| fail(format_args!("{path}: {e}")))
        }
        None => EngineConfig::default(),
    };

    if let Some(policy) = args.policy {
        config.policy = policy;
    }
    if let Some(capacity) = args.capacity {
        config.capacity = capacity;
    }
    if let Some(window) = args.window {
        config.adaptive.phase_window = window;
    }
    if let Some(threshold) = args.threshold {
        config.adaptive.threshold = threshold;
    }
    if let Some(aging) = args.aging {
        config.frequency.aging_interval = Some(aging);
    }
    if let Some(tie_break) = args.tie_break {
        config.frequency.tie_break = tie_break;
    }
    config
}

/// Runs one simulation and prints the trace, optional grid, and statistics.
fn cmd_run(args: &RunArgs) {
    let config = build_config(args);
    let reference = symbols(&args.reference);
    let report = simulate(&config, &reference).unwrap_or_else(|e| fail(e));

    if args.json {
        match serde_json::to_string_pretty(&report) {
            Ok(json) => println!("{json}"),
            Err(e) => fail(e),
        }
        return;
    }

    println!(
        "[*] Policy: {}  Capacity: {}  Accesses: {}",
        report.policy,
        report.capacity,
        reference.len()
    );
    println!();
    print_steps(&report);
    if args.grid {
        println!();
        print_grid(&report);
    }
    println!();
    report.stats.print_sections(&args.stats);
}

fn print_steps(report: &RunReport<char>) {
    println!("{:>5}  {:>6}  {:<8}  {:>4}  frames", "step", "symbol", "outcome", "slot");
    let boundaries = &report.phase_boundaries;
    for (event, frame) in report.ledger.iter().zip(report.ledger.frames()) {
        let resident: String = frame.iter().collect();
        let marker = if boundaries.contains(&event.sequence_id) {
            "  <- phase boundary"
        } else {
            ""
        };
        println!(
            "{:>5}  {:>6}  {:<8}  {:>4}  [{resident}]{marker}",
            event.sequence_id,
            event.symbol,
            event.outcome,
            event.slot,
        );
    }
}

/// Replays the ledger frames as a grid: one column per access, one row per slot.
fn print_grid(report: &RunReport<char>) {
    let frames = report.ledger.frames();
    let header: String = report.ledger.iter().map(|e| e.symbol).collect();
    println!("ref   {header}");
    println!("      {}", "-".repeat(frames.len()));
    for slot in 0..report.capacity {
        let row: String = frames
            .iter()
            .map(|frame| frame.get(slot).copied().unwrap_or(' '))
            .collect();
        println!("{:>4}  {row}", slot + 1);
    }
    let codes: String = report.ledger.iter().map(|e| e.outcome.code()).collect();
    println!("      {}", "-".repeat(frames.len()));
    println!("      {codes}");
}

/// Runs every policy with default settings and prints a fault-ratio table.
fn cmd_compare(capacity: usize, reference: &str) {
    let reference = symbols(reference);
    println!("[*] Capacity: {capacity}  Accesses: {}", reference.len());
    println!();
    println!(
        "{:<8}  {:>6}  {:>6}  {:>9}  {:>11}",
        "policy", "hit", "fault", "migration", "fault_ratio"
    );
    for policy in ReplacementPolicy::ALL {
        let config = EngineConfig::new(capacity, policy);
        let report = simulate(&config, &reference).unwrap_or_else(|e| fail(e));
        let stats = report.stats;
        println!(
            "{:<8}  {:>6}  {:>6}  {:>9}  {:>10.2}%",
            policy.tag(),
            stats.hit,
            stats.fault,
            stats.migration,
            stats.fault_ratio() * 100.0
        );
    }
}
