//! Physical and Virtual Address types.
//!
//! This module defines strong types for physical and virtual addresses to prevent
//! accidental mixing of address spaces. It provides the following:
//! 1. **Type Safety:** Distinguishes between virtual and physical address spaces at compile time.
//! 2. **Decomposition:** Splits a virtual address into its page number and page offset.
//! 3. **Composition:** Rebuilds addresses from a page (or frame) number and an offset.

use super::constants::{MAX_VIRTUAL_ADDRESS, PAGE_OFFSET_MASK, PAGE_SHIFT};
use super::error::RecordError;

/// A virtual address in the 16-bit simulated address space.
///
/// Every `u16` is a valid virtual address; values wider than 16 bits are
/// rejected by the `TryFrom<u64>` conversion.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VirtAddr(pub u16);

/// A physical address inside the simulated frame pool.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PhysAddr(pub u16);

impl VirtAddr {
    /// Creates a new virtual address from a raw 16-bit value.
    #[inline(always)]
    pub const fn new(addr: u16) -> Self {
        Self(addr)
    }

    /// Returns the raw 16-bit address value.
    #[inline(always)]
    pub const fn val(self) -> u16 {
        self.0
    }

    /// Extracts the page number (the upper 8 bits).
    #[inline(always)]
    pub const fn page(self) -> u8 {
        (self.0 >> PAGE_SHIFT) as u8
    }

    /// Extracts the page offset (the lower 8 bits).
    #[inline(always)]
    pub const fn offset(self) -> u8 {
        (self.0 & PAGE_OFFSET_MASK) as u8
    }

    /// Splits the address into `(page, offset)`.
    #[inline(always)]
    pub const fn decompose(self) -> (u8, u8) {
        (self.page(), self.offset())
    }

    /// Builds an address from a page number and an offset.
    ///
    /// Inverse of [`VirtAddr::decompose`]: `compose(a.decompose())` yields `a`
    /// for every address.
    #[inline(always)]
    pub const fn compose(page: u8, offset: u8) -> Self {
        Self(((page as u16) << PAGE_SHIFT) | offset as u16)
    }
}

impl TryFrom<u64> for VirtAddr {
    type Error = RecordError;

    /// Accepts values in `0..=65535`; anything larger is out of range.
    fn try_from(value: u64) -> Result<Self, Self::Error> {
        if value > MAX_VIRTUAL_ADDRESS {
            return Err(RecordError::AddressOutOfRange(value));
        }
        Ok(Self(value as u16))
    }
}

impl From<u16> for VirtAddr {
    fn from(value: u16) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for VirtAddr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl PhysAddr {
    /// Creates a new physical address from a raw 16-bit value.
    #[inline(always)]
    pub const fn new(addr: u16) -> Self {
        Self(addr)
    }

    /// Returns the raw 16-bit address value.
    #[inline(always)]
    pub const fn val(self) -> u16 {
        self.0
    }

    /// Builds the physical address `frame * 256 + offset`.
    #[inline(always)]
    pub const fn compose(frame: usize, offset: u8) -> Self {
        Self(((frame as u16) << PAGE_SHIFT) | offset as u16)
    }

    /// Frame number holding this address.
    #[inline(always)]
    pub const fn frame(self) -> usize {
        (self.0 >> PAGE_SHIFT) as usize
    }

    /// Offset within the frame.
    #[inline(always)]
    pub const fn offset(self) -> u8 {
        (self.0 & PAGE_OFFSET_MASK) as u8
    }
}

impl std::fmt::Display for PhysAddr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
