//! Demand-paged virtual memory simulator library.
//!
//! This crate simulates hardware-assisted address translation for one process with a
//! 16-bit address space:
//! 1. **Core:** The MMU, a 16-slot TLB and a 256-entry page table, both consulted per address.
//! 2. **Memory:** A 128-frame pool filled on demand from a backing store, with LRU replacement.
//! 3. **Simulation:** Address-trace parsing, the backing-store abstraction and the run loop.
//! 4. **Reporting:** Configuration, statistics and the end-of-run summary.

/// Common types and constants (addresses, access types, errors).
pub mod common;
/// Simulator configuration (defaults and hierarchical config structures).
pub mod config;
/// Translation hardware (MMU, TLB, page table, frame table, LRU ordering).
pub mod core;
/// Backing store, trace parsing and the simulation loop.
pub mod sim;
/// Translation statistics collection and reporting.
pub mod stats;

/// Root configuration type; use `Config::default()` or deserialize from JSON.
pub use crate::config::Config;
/// Translation engine; owns the TLB, page table, frame pool and counters.
pub use crate::core::Mmu;
/// Trace-driven simulator; construct with `Simulator::new`.
pub use crate::sim::Simulator;
