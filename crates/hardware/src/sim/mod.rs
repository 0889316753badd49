//! Simulation driver.
//!
//! Provides the external collaborators of the MMU: the backing store that pages
//! are loaded from, the address-trace parser, and the loop that runs a trace
//! through the MMU and reports the results.

/// Page-addressed backing store (the simulated disk).
pub mod backing_store;

/// Trace-driven simulation loop.
pub mod simulator;

/// Address trace parsing.
pub mod trace;

pub use backing_store::{BackingStore, DiskImage};
pub use simulator::{RejectedRecord, RunReport, Simulator};
pub use trace::{AddressTrace, parse_address};
