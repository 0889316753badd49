//! Direct-mapped page table.
//!
//! One entry per virtual page. An entry is either resident in a frame or absent;
//! the table has no replacement state of its own and is only mutated by the
//! frame table's fault handler.

use crate::common::constants::NUM_PAGES;

/// Page table with one optional frame number per page.
#[derive(Clone, Debug)]
pub struct PageTable {
    entries: [Option<usize>; NUM_PAGES],
}

impl Default for PageTable {
    fn default() -> Self {
        Self::new()
    }
}

impl PageTable {
    /// Creates a page table with every page absent.
    pub const fn new() -> Self {
        Self {
            entries: [None; NUM_PAGES],
        }
    }

    /// Returns `true` if `page` currently occupies a frame.
    #[inline]
    pub fn is_valid(&self, page: u8) -> bool {
        self.entries[page as usize].is_some()
    }

    /// Frame holding `page`, if resident.
    #[inline]
    pub fn frame_of(&self, page: u8) -> Option<usize> {
        self.entries[page as usize]
    }

    /// Records that `page` now lives in `frame`.
    #[inline]
    pub fn mark_resident(&mut self, page: u8, frame: usize) {
        self.entries[page as usize] = Some(frame);
    }

    /// Marks `page` as no longer resident.
    #[inline]
    pub fn invalidate(&mut self, page: u8) {
        self.entries[page as usize] = None;
    }

    /// Number of resident pages.
    pub fn resident_count(&self) -> usize {
        self.entries.iter().filter(|e| e.is_some()).count()
    }
}
