//! Global System Constants.
//!
//! This module defines the fixed geometry of the simulated machine. It includes:
//! 1. **Address Space:** A 16-bit virtual address space split into 256 pages of 256 bytes.
//! 2. **Physical Memory:** A pool of 128 frames, half the size of the virtual space.
//! 3. **TLB:** The number of fully associative translation slots.

/// Page (and frame) size in bytes.
pub const PAGE_SIZE: usize = 256;

/// Number of bits to shift to convert between addresses and page numbers.
pub const PAGE_SHIFT: u32 = 8;

/// Mask for extracting the page offset from an address.
pub const PAGE_OFFSET_MASK: u16 = (PAGE_SIZE - 1) as u16;

/// Number of virtual pages (and page table entries).
pub const NUM_PAGES: usize = 256;

/// Number of physical frames in the frame pool.
pub const NUM_FRAMES: usize = 128;

/// Number of TLB slots.
pub const TLB_ENTRIES: usize = 16;

/// Size of the virtual address space in bytes.
///
/// The backing store must hold at least this many bytes.
pub const ADDRESS_SPACE_SIZE: usize = NUM_PAGES * PAGE_SIZE;

/// Size of simulated physical memory in bytes.
pub const PHYSICAL_MEMORY_SIZE: usize = NUM_FRAMES * PAGE_SIZE;

/// Largest valid virtual address.
pub const MAX_VIRTUAL_ADDRESS: u64 = (ADDRESS_SPACE_SIZE - 1) as u64;
