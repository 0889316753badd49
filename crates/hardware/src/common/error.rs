//! Error definitions.
//!
//! This module defines the error taxonomy of the simulator. It provides:
//! 1. **Record Errors:** Problems with a single trace record; the record is skipped and the run continues.
//! 2. **Simulation Errors:** Backing-store, I/O and configuration failures that stop the run.
//! 3. **Result Alias:** A crate-wide `Result` type over [`SimError`].

use std::io;

use thiserror::Error;

/// Crate-wide result type.
pub type Result<T> = std::result::Result<T, SimError>;

/// A problem with a single address record.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    /// The value does not fit the 16-bit virtual address space.
    #[error("address {0} is outside the virtual address space (0..=65535)")]
    AddressOutOfRange(u64),

    /// The record does not start with a decimal number.
    #[error("malformed address record {0:?}")]
    MalformedRecord(String),
}

/// Errors raised while running a simulation.
#[derive(Debug, Error)]
pub enum SimError {
    /// A trace record was rejected. The run may continue past it.
    #[error("line {line}: {source}")]
    Record {
        /// 1-based line number of the record in the address source.
        line: usize,
        /// What was wrong with the record.
        #[source]
        source: RecordError,
    },

    /// The backing store could not supply a page while servicing a fault.
    #[error("backing store read failed for page {page}: {source}")]
    BackingStore {
        /// Page being loaded.
        page: u8,
        /// Underlying read error (short reads surface as `UnexpectedEof`).
        #[source]
        source: io::Error,
    },

    /// The backing store is smaller than the virtual address space.
    #[error("backing store holds {len} bytes, at least {required} are required")]
    BackingStoreTooSmall {
        /// Actual length in bytes.
        len: u64,
        /// Required length in bytes.
        required: u64,
    },

    /// Reading the address source or writing output failed.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The configuration could not be parsed.
    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),
}

impl SimError {
    /// Returns `true` when the error only affects a single record.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Record { .. })
    }
}
