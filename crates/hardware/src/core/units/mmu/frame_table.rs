//! Frame Table and page-fault handling.
//!
//! This module models physical memory as a pool of fixed-size frames and services
//! page faults against a backing store. It performs:
//! 1. **Demand Fill:** Frames are handed out in order `0, 1, 2, ...` until the pool is full.
//! 2. **LRU Eviction:** Once full, the least recently used frame is overwritten in place
//!    and the page it held is invalidated in the page table.
//! 3. **Byte Access:** Typed, signed reads from a frame.
//!
//! A fault reads the incoming page into a scratch frame before touching any state, so a
//! failed read leaves the tables and counters exactly as they were.

use crate::common::constants::{NUM_FRAMES, PAGE_SIZE};
use crate::common::error::{Result, SimError};
use crate::core::units::lru::LruList;
use crate::sim::backing_store::BackingStore;
use crate::stats::TranslationStats;

use super::page_table::PageTable;

/// One page worth of physical memory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Frame([u8; PAGE_SIZE]);

impl Default for Frame {
    fn default() -> Self {
        Self::zeroed()
    }
}

impl Frame {
    /// A frame filled with zeros.
    pub const fn zeroed() -> Self {
        Self([0; PAGE_SIZE])
    }

    /// Reads the byte at `offset` as a signed value.
    #[inline(always)]
    pub const fn read_byte(&self, offset: u8) -> i8 {
        self.0[offset as usize] as i8
    }

    /// Raw contents.
    #[inline]
    pub const fn as_bytes(&self) -> &[u8; PAGE_SIZE] {
        &self.0
    }
}

/// Outcome of [`FrameTable::ensure_resident`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Resolution {
    /// Frame now holding the requested page.
    pub frame: usize,
    /// `true` when the page had to be loaded from the backing store.
    pub faulted: bool,
    /// Page that was displaced to make room, if any.
    pub evicted: Option<u8>,
}

/// The simulated physical memory.
#[derive(Clone, Debug)]
pub struct FrameTable {
    frames: Vec<Frame>,
    /// Page held by each frame; `None` until the frame is first filled.
    resident_page: [Option<u8>; NUM_FRAMES],
    /// Frames handed out before eviction begins.
    fill_count: usize,
    /// Recency order over frame indices.
    recency: LruList,
}

impl Default for FrameTable {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameTable {
    /// Creates an empty frame pool.
    pub fn new() -> Self {
        Self {
            frames: vec![Frame::zeroed(); NUM_FRAMES],
            resident_page: [None; NUM_FRAMES],
            fill_count: 0,
            recency: LruList::new(NUM_FRAMES),
        }
    }

    /// Makes `page` resident and returns the frame holding it.
    ///
    /// A valid page returns immediately with no I/O and no counter change.
    /// Otherwise `stats.page_faults` is incremented, a frame is chosen (the next
    /// unused one, or the least recently used one once all are in use), the
    /// displaced page is invalidated, and the page is read from `store`.
    ///
    /// The chosen frame is not promoted here; the caller promotes it once per
    /// translation.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::BackingStore`] if the page cannot be read. Nothing is
    /// modified in that case.
    pub fn ensure_resident<S: BackingStore + ?Sized>(
        &mut self,
        page_table: &mut PageTable,
        page: u8,
        store: &mut S,
        stats: &mut TranslationStats,
    ) -> Result<Resolution> {
        if let Some(frame) = page_table.frame_of(page) {
            return Ok(Resolution {
                frame,
                faulted: false,
                evicted: None,
            });
        }

        let mut incoming = Frame::zeroed();
        store
            .read_page(page, &mut incoming.0)
            .map_err(|source| SimError::BackingStore { page, source })?;

        stats.page_faults += 1;

        let (target, evicted) = if self.fill_count < NUM_FRAMES {
            let target = self.fill_count;
            self.fill_count += 1;
            (target, None)
        } else {
            let target = self.recency.peek_least();
            let old_page = self.resident_page[target];
            if let Some(old_page) = old_page {
                page_table.invalidate(old_page);
            }
            (target, old_page)
        };

        self.frames[target] = incoming;
        page_table.mark_resident(page, target);
        self.resident_page[target] = Some(page);

        match evicted {
            Some(old_page) => {
                tracing::debug!(page, frame = target, evicted = old_page, "page fault, evicted");
            }
            None => tracing::debug!(page, frame = target, "page fault, fresh frame"),
        }

        Ok(Resolution {
            frame: target,
            faulted: true,
            evicted,
        })
    }

    /// Reads the signed byte at `offset` within `frame`.
    #[inline]
    pub fn read_byte(&self, frame: usize, offset: u8) -> i8 {
        self.frames[frame].read_byte(offset)
    }

    /// Contents of `frame`.
    #[inline]
    pub fn frame(&self, frame: usize) -> &Frame {
        &self.frames[frame]
    }

    /// Page currently held by `frame`.
    #[inline]
    pub fn resident_page(&self, frame: usize) -> Option<u8> {
        self.resident_page[frame]
    }

    /// Number of frames handed out so far (saturates at the pool size).
    #[inline]
    pub const fn fill_count(&self) -> usize {
        self.fill_count
    }

    /// Marks `frame` as most recently used.
    #[inline]
    pub fn promote(&mut self, frame: usize) {
        self.recency.promote(frame);
    }

    /// Read-only view of the frame recency order.
    #[inline]
    pub fn recency(&self) -> &LruList {
        &self.recency
    }
}
