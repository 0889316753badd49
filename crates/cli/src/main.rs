//! Virtual memory simulator CLI.
//!
//! This binary runs an address trace through the simulated MMU. It performs:
//! 1. **Setup:** Loads an optional JSON config, opens the trace and the backing store.
//! 2. **Run:** Prints one line per translation and the summary to stdout.
//! 3. **Diagnostics:** Logs go to stderr, filtered by `RUST_LOG` (default `warn`).

use clap::Parser;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process;

use tracing_subscriber::EnvFilter;
use vmsim_core::Simulator;
use vmsim_core::common::Result;
use vmsim_core::config::Config;
use vmsim_core::sim::{AddressTrace, DiskImage, RunReport};

#[derive(Parser, Debug)]
#[command(
    name = "vmsim",
    author,
    version,
    about = "Demand-paged virtual memory simulator",
    long_about = "Translate a trace of 16-bit virtual addresses through a 16-entry LRU TLB and a \
                  256-entry page table backed by 128 LRU-managed frames.\n\nExamples:\n  \
                  vmsim addresses.txt\n  vmsim addresses.txt --backing-store BACKING_STORE.bin --quiet\n  \
                  vmsim addresses.txt --config vmsim.json --json"
)]
struct Cli {
    /// File with one decimal virtual address per line.
    #[arg(default_value = "addresses.txt")]
    addresses: PathBuf,

    /// Backing store image (at least 65536 bytes).
    #[arg(short, long, default_value = "BACKING_STORE.bin")]
    backing_store: PathBuf,

    /// JSON configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Do not print per-translation lines.
    #[arg(short, long)]
    quiet: bool,

    /// Print statistics as JSON instead of the text summary.
    #[arg(long)]
    json: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(e) = cmd_run(&cli) {
        eprintln!("[!] FATAL: {e}");
        process::exit(1);
    }
}

/// Loads the config, applies flag overrides and runs the trace.
fn cmd_run(cli: &Cli) -> Result<()> {
    let mut config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    if cli.quiet {
        config.output.translations = false;
    }
    if cli.json {
        config.output.summary = false;
    }

    let store = DiskImage::open(&cli.backing_store)?;
    let trace = AddressTrace::open(&cli.addresses)?;
    tracing::debug!(
        addresses = %cli.addresses.display(),
        backing_store = %cli.backing_store.display(),
        "inputs opened"
    );

    let mut sim = Simulator::new(config, store);
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let report = sim.run(trace, &mut out)?;

    for rejected in &report.rejected {
        eprintln!("[!] line {}: {}", rejected.line, rejected.error);
    }
    if cli.json {
        print_json(&mut out, &report)?;
    }
    Ok(())
}

/// Writes the counters, the summary and the rejected records as one JSON object.
fn print_json(out: &mut impl Write, report: &RunReport) -> Result<()> {
    let rejected: Vec<_> = report
        .rejected
        .iter()
        .map(|r| serde_json::json!({ "line": r.line, "error": r.error.to_string() }))
        .collect();
    let doc = serde_json::json!({
        "stats": report.stats,
        "tlb_misses": report.stats.tlb_misses(),
        "summary": report.stats.summary(),
        "rejected": rejected,
    });
    serde_json::to_writer_pretty(&mut *out, &doc).map_err(io::Error::from)?;
    writeln!(out)?;
    Ok(())
}
