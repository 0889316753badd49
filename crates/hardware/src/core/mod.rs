//! Core translation hardware.
//!
//! This module contains the memory management unit and the functional units it is
//! built from: the TLB, page table, frame pool and the LRU recency list shared by
//! the two caches.

/// Functional units (MMU, TLB, page table, frame table, LRU ordering).
pub mod units;

pub use self::units::mmu::{Mmu, Translation};
