//! Common utilities and types used throughout the simulator.
//!
//! This module provides fundamental building blocks that are shared across all components
//! of the simulator. It includes:
//! 1. **Address Types:** Strong types for virtual and physical addresses, with decomposition.
//! 2. **Constants:** The fixed page, frame and TLB geometry.
//! 3. **Memory Access:** The read/write classification carried through translation.
//! 4. **Error Handling:** Record-level and run-level error types.

/// Address type definitions (physical and virtual addresses).
pub mod addr;

/// Common constants used throughout the simulator.
pub mod constants;

/// Memory access type definitions.
pub mod data;

/// Error types.
pub mod error;

pub use addr::{PhysAddr, VirtAddr};
pub use constants::{NUM_FRAMES, NUM_PAGES, PAGE_SHIFT, PAGE_SIZE, TLB_ENTRIES};
pub use data::AccessType;
pub use error::{RecordError, Result, SimError};
