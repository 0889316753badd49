//! Translation statistics collection and reporting.
//!
//! This module tracks the counters of one simulation run. It provides:
//! 1. **Counters:** Translations performed, page faults taken and TLB hits.
//! 2. **Derived metrics:** Page-fault rate and TLB hit rate, undefined for an empty run.
//! 3. **Summary:** A printable report that states explicitly when nothing was translated.
//!
//! Counters live in an explicit value owned by the MMU, so independent runs never share state.

use std::fmt;

use serde::Serialize;

/// Counters for one simulation run. All three only ever increase.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct TranslationStats {
    /// Addresses translated successfully.
    pub translated: u64,
    /// Translations that had to load a page from the backing store.
    pub page_faults: u64,
    /// Translations answered by the TLB.
    pub tlb_hits: u64,
}

impl TranslationStats {
    /// Translations that missed the TLB.
    #[inline]
    pub const fn tlb_misses(&self) -> u64 {
        self.translated - self.tlb_hits
    }

    /// Page faults as a percentage of translations, `None` if nothing was translated.
    pub fn page_fault_rate(&self) -> Option<f64> {
        (self.translated > 0).then(|| self.page_faults as f64 / self.translated as f64 * 100.0)
    }

    /// TLB hits as a fraction of translations, `None` if nothing was translated.
    pub fn tlb_hit_rate(&self) -> Option<f64> {
        (self.translated > 0).then(|| self.tlb_hits as f64 / self.translated as f64)
    }

    /// Builds the end-of-run summary.
    pub fn summary(&self) -> Summary {
        match (self.page_fault_rate(), self.tlb_hit_rate()) {
            (Some(page_fault_rate), Some(tlb_hit_rate)) => Summary::Rates {
                page_fault_rate,
                tlb_hit_rate,
            },
            _ => Summary::Empty,
        }
    }
}

/// End-of-run report.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Summary {
    /// No address was translated; the rates are undefined.
    Empty,
    /// Rates over a non-empty run.
    Rates {
        /// Page faults per 100 translations.
        page_fault_rate: f64,
        /// TLB hits per translation.
        tlb_hit_rate: f64,
    },
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "No translations performed"),
            Self::Rates {
                page_fault_rate,
                tlb_hit_rate,
            } => {
                writeln!(f, "Percentage of Page Faults = {page_fault_rate:.6}")?;
                write!(f, "TLB Hit Rate = {tlb_hit_rate:.6}")
            }
        }
    }
}
