//! Trace-driven simulation loop.
//!
//! Feeds every address of a trace through the MMU, one at a time. It performs:
//! 1. **Translation:** Each accepted record is translated and, if enabled, reported as a line.
//! 2. **Record Rejection:** Malformed and out-of-range records are logged, collected and skipped.
//! 3. **Failure:** A backing-store or I/O error ends the run and is returned to the caller.
//! 4. **Summary:** The rates (or an explicit "no translations" note) are written at the end.

use std::io::{BufRead, Write};

use crate::common::error::{RecordError, Result, SimError};
use crate::common::VirtAddr;
use crate::config::Config;
use crate::core::{Mmu, Translation};
use crate::sim::backing_store::BackingStore;
use crate::sim::trace::AddressTrace;
use crate::stats::TranslationStats;

/// A trace record that was skipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedRecord {
    /// 1-based line number in the trace.
    pub line: usize,
    /// Why it was rejected.
    pub error: RecordError,
}

/// Outcome of [`Simulator::run`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    /// Counters at the end of the run.
    pub stats: TranslationStats,
    /// Records that were skipped, in trace order.
    pub rejected: Vec<RejectedRecord>,
}

/// Drives an [`Mmu`] over an address trace against one backing store.
#[derive(Debug)]
pub struct Simulator<S> {
    mmu: Mmu,
    store: S,
    config: Config,
}

impl<S: BackingStore> Simulator<S> {
    /// Creates a simulator with a cold MMU.
    pub fn new(config: Config, store: S) -> Self {
        Self {
            mmu: Mmu::new(),
            store,
            config,
        }
    }

    /// Translates a single address with the configured access type.
    ///
    /// # Errors
    ///
    /// Propagates backing-store failures from the page-fault path.
    pub fn translate(&mut self, vaddr: VirtAddr) -> Result<Translation> {
        self.mmu
            .translate(vaddr, self.config.general.access, &mut self.store)
    }

    /// Runs every record of `trace`, writing the report to `out`.
    ///
    /// # Errors
    ///
    /// Returns the first backing-store or I/O error. Record errors are not
    /// returned; they are listed in the [`RunReport`].
    pub fn run<R: BufRead, W: Write>(
        &mut self,
        trace: AddressTrace<R>,
        out: &mut W,
    ) -> Result<RunReport> {
        tracing::info!(access = ?self.config.general.access, "simulation started");

        let mut rejected = Vec::new();
        for record in trace {
            match record {
                Ok(vaddr) => {
                    let translation = self.translate(vaddr)?;
                    if self.config.output.translations {
                        writeln!(out, "{translation}")?;
                    }
                }
                Err(SimError::Record { line, source }) => {
                    tracing::warn!(line, error = %source, "skipping address record");
                    rejected.push(RejectedRecord {
                        line,
                        error: source,
                    });
                }
                Err(e) => return Err(e),
            }
        }

        let stats = *self.mmu.stats();
        if self.config.output.summary {
            writeln!(out)?;
            writeln!(out, "{}", stats.summary())?;
        }
        out.flush()?;

        tracing::info!(
            translated = stats.translated,
            page_faults = stats.page_faults,
            tlb_hits = stats.tlb_hits,
            rejected = rejected.len(),
            "simulation finished"
        );

        Ok(RunReport { stats, rejected })
    }

    /// The MMU, for inspecting tables and counters.
    pub const fn mmu(&self) -> &Mmu {
        &self.mmu
    }

    /// The active configuration.
    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// Discards all translation state and counters.
    pub fn reset(&mut self) {
        self.mmu.reset();
    }

    /// Releases the backing store.
    pub fn into_store(self) -> S {
        self.store
    }
}
