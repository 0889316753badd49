use std::io::Cursor;

use vmsim_core::common::constants::ADDRESS_SPACE_SIZE;
use vmsim_core::common::{AccessType, VirtAddr};
use vmsim_core::core::{Mmu, Translation};
use vmsim_core::sim::DiskImage;

/// Byte stored at `addr` in the patterned image.
///
/// Differs between pages at the same offset, so reading the wrong frame shows up.
pub fn image_byte(addr: usize) -> u8 {
    ((addr >> 8) as u8).wrapping_mul(7).wrapping_add(addr as u8)
}

/// A full 64 KiB image filled with [`image_byte`].
pub fn patterned_image() -> Vec<u8> {
    (0..ADDRESS_SPACE_SIZE).map(image_byte).collect()
}

/// The signed value a translation of `addr` should return.
pub fn expected_value(addr: u16) -> i8 {
    image_byte(addr as usize) as i8
}

/// A cold MMU paired with a patterned disk image.
#[derive(Debug)]
pub struct TestContext {
    /// MMU under test.
    pub mmu: Mmu,
    /// In-memory image built by [`patterned_image`].
    pub store: DiskImage<Cursor<Vec<u8>>>,
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}

impl TestContext {
    /// Creates a cold context and installs a test log writer once per process.
    pub fn new() -> Self {
        let _ = tracing_subscriber::fmt()
            .with_test_writer()
            .with_max_level(tracing::Level::TRACE)
            .try_init();

        Self {
            mmu: Mmu::new(),
            store: DiskImage::from_bytes(patterned_image()).unwrap(),
        }
    }

    /// Translates `addr` as a write, panicking on failure.
    pub fn translate(&mut self, addr: u16) -> Translation {
        self.mmu
            .translate(VirtAddr::new(addr), AccessType::Write, &mut self.store)
            .unwrap()
    }

    /// Touches pages `pages` once each at offset 0.
    pub fn touch_pages(&mut self, pages: impl IntoIterator<Item = u8>) {
        for page in pages {
            let _ = self.translate(VirtAddr::compose(page, 0).val());
        }
    }
}
