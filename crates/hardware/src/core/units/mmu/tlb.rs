//! Translation Lookaside Buffer (TLB).
//!
//! A fully associative cache mapping page numbers to frame numbers. Lookups scan
//! every slot; replacement follows an LRU order over the slots. The TLB never
//! promotes on its own: the MMU installs into the slot returned by
//! [`Tlb::evict_candidate`] and promotes the slot it used once per translation.
//!
//! Hits are not counted here. The MMU bumps `tlb_hits` as soon as
//! [`Tlb::lookup`] returns a slot, before any promotion, so the counter moves at
//! lookup time even though the TLB itself holds no statistics.

use crate::common::constants::TLB_ENTRIES;
use crate::core::units::lru::LruList;

/// A single occupied entry in the TLB.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TlbEntry {
    /// Virtual page number (tag).
    pub page: u8,
    /// Physical frame number (data).
    pub frame: usize,
}

/// Translation Lookaside Buffer structure.
#[derive(Clone, Debug)]
pub struct Tlb {
    /// Slots; `None` marks an empty slot.
    slots: [Option<TlbEntry>; TLB_ENTRIES],
    /// Recency order over slot indices.
    recency: LruList,
}

impl Default for Tlb {
    fn default() -> Self {
        Self::new()
    }
}

impl Tlb {
    /// Creates an empty TLB with every slot unoccupied.
    pub fn new() -> Self {
        Self {
            slots: [None; TLB_ENTRIES],
            recency: LruList::new(TLB_ENTRIES),
        }
    }

    /// Number of slots.
    #[inline]
    pub const fn capacity(&self) -> usize {
        TLB_ENTRIES
    }

    /// Looks up a page in the TLB.
    ///
    /// # Returns
    ///
    /// The index of the occupied slot holding `page`, or `None` on a miss. The
    /// caller counts the hit.
    #[inline]
    pub fn lookup(&self, page: u8) -> Option<usize> {
        self.slots
            .iter()
            .position(|slot| slot.is_some_and(|e| e.page == page))
    }

    /// Frame stored in `slot`, or `None` if the slot is empty.
    #[inline]
    pub fn frame_at(&self, slot: usize) -> Option<usize> {
        self.slots[slot].map(|e| e.frame)
    }

    /// Entry stored in `slot`.
    #[inline]
    pub fn entry(&self, slot: usize) -> Option<TlbEntry> {
        self.slots[slot]
    }

    /// Overwrites `slot` unconditionally. Recency is left alone.
    pub fn install(&mut self, slot: usize, page: u8, frame: usize) {
        tracing::debug!(slot, page, frame, "tlb install");
        self.slots[slot] = Some(TlbEntry { page, frame });
    }

    /// Slot that should be overwritten next (the least recently used one).
    #[inline]
    pub fn evict_candidate(&self) -> usize {
        self.recency.peek_least()
    }

    /// Marks `slot` as most recently used.
    #[inline]
    pub fn promote(&mut self, slot: usize) {
        self.recency.promote(slot);
    }

    /// Read-only view of the slot recency order.
    #[inline]
    pub fn recency(&self) -> &LruList {
        &self.recency
    }

    /// Empties every slot. The recency order is kept.
    pub fn flush(&mut self) {
        self.slots = [None; TLB_ENTRIES];
    }

    /// Number of occupied slots.
    pub fn occupied(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }
}
