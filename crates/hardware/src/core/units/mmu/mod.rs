//! Memory Management Unit (MMU).
//!
//! This module implements the translation engine, responsible for turning 16-bit
//! virtual addresses into physical addresses and reading the byte stored there.
//! Each translation:
//! 1. Splits the address into page and offset.
//! 2. Checks the TLB; on a miss resolves the page through the page table, faulting it
//!    in from the backing store if needed, and installs it into the TLB's LRU slot.
//! 3. Reads the byte from the frame.
//! 4. Promotes the TLB slot and the frame exactly once each, then counts the translation.

/// Frame pool and page-fault path.
pub mod frame_table;

/// Direct-mapped page table.
pub mod page_table;

/// Translation Lookaside Buffer (TLB) for caching page-to-frame translations.
pub mod tlb;

use std::fmt;

use crate::common::{AccessType, PhysAddr, Result, VirtAddr};
use crate::sim::backing_store::BackingStore;
use crate::stats::TranslationStats;

use self::frame_table::FrameTable;
use self::page_table::PageTable;
use self::tlb::Tlb;

/// Result of one successful translation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Translation {
    /// Address that was translated.
    pub vaddr: VirtAddr,
    /// Physical address it maps to.
    pub paddr: PhysAddr,
    /// Signed byte stored at `paddr`.
    pub value: i8,
    /// Access type the request was made with.
    pub access: AccessType,
    /// `true` if the TLB answered the lookup.
    pub tlb_hit: bool,
    /// `true` if the page was loaded from the backing store.
    pub page_fault: bool,
    /// Page evicted to service the fault, if any.
    pub evicted: Option<u8>,
}

impl fmt::Display for Translation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Virtual address: {} Physical address: {} Value: {}",
            self.vaddr, self.paddr, self.value
        )
    }
}

/// Memory Management Unit for virtual-to-physical address translation.
///
/// Owns the TLB, page table, frame pool and the run's statistics. The backing
/// store is borrowed per call.
///
/// TLB entries never need invalidating on eviction: a frame is only reclaimed
/// after 127 other frames were used since its last access, and that many TLB
/// misses recycle every slot first.
#[derive(Clone, Debug, Default)]
pub struct Mmu {
    tlb: Tlb,
    page_table: PageTable,
    frames: FrameTable,
    stats: TranslationStats,
}

impl Mmu {
    /// Creates a cold MMU: empty TLB, no resident pages, zeroed counters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Translates a virtual address and reads the byte it maps to.
    ///
    /// # Arguments
    ///
    /// * `vaddr` - Virtual address to translate.
    /// * `access` - Read or write; recorded on the result only.
    /// * `store` - Source of page contents for faults.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::BackingStore`](crate::common::SimError::BackingStore) when a
    /// page fault cannot be serviced. No counter changes in that case.
    pub fn translate<S: BackingStore + ?Sized>(
        &mut self,
        vaddr: VirtAddr,
        access: AccessType,
        store: &mut S,
    ) -> Result<Translation> {
        let (page, offset) = vaddr.decompose();

        let hit = self
            .tlb
            .lookup(page)
            .and_then(|slot| self.tlb.frame_at(slot).map(|frame| (slot, frame)));

        let (slot, frame, page_fault, evicted) = if let Some((slot, frame)) = hit {
            self.stats.tlb_hits += 1;
            (slot, frame, false, None)
        } else {
            let res =
                self.frames
                    .ensure_resident(&mut self.page_table, page, store, &mut self.stats)?;
            let slot = self.tlb.evict_candidate();
            self.tlb.install(slot, page, res.frame);
            (slot, res.frame, res.faulted, res.evicted)
        };

        let paddr = PhysAddr::compose(frame, offset);
        let value = self.frames.read_byte(frame, offset);

        self.tlb.promote(slot);
        self.frames.promote(frame);
        self.stats.translated += 1;

        tracing::trace!(
            vaddr = vaddr.val(),
            paddr = paddr.val(),
            value,
            write = access.is_write(),
            tlb_hit = hit.is_some(),
            page_fault,
            "translate"
        );

        Ok(Translation {
            vaddr,
            paddr,
            value,
            access,
            tlb_hit: hit.is_some(),
            page_fault,
            evicted,
        })
    }

    /// Counters accumulated since creation or the last [`Mmu::reset`].
    #[inline]
    pub const fn stats(&self) -> &TranslationStats {
        &self.stats
    }

    /// The TLB.
    #[inline]
    pub const fn tlb(&self) -> &Tlb {
        &self.tlb
    }

    /// The page table.
    #[inline]
    pub const fn page_table(&self) -> &PageTable {
        &self.page_table
    }

    /// The frame pool.
    #[inline]
    pub const fn frame_table(&self) -> &FrameTable {
        &self.frames
    }

    /// Returns to the cold state.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
