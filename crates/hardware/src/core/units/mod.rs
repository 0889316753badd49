//! Functional units.
//!
//! This module contains the memory management unit and the LRU recency list used
//! for replacement in both the TLB and the frame pool.

/// Least-recently-used ordering over a fixed index set.
pub mod lru;

/// Memory Management Unit with TLB, page table and frame table.
pub mod mmu;
