//! Memory Access Types.
//!
//! This module defines the classification of memory accesses handed to the MMU.
//! The simulator models no permission bits and no dirty tracking, so the access
//! type never changes how an address is translated; it is carried through to the
//! translation result for reporting.

use serde::{Deserialize, Serialize};

/// Type of memory access operation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum AccessType {
    /// Data read access.
    Read,

    /// Data write access.
    ///
    /// Trace records are treated as write requests unless configured otherwise.
    #[default]
    Write,
}

impl AccessType {
    /// Returns `true` for [`AccessType::Write`].
    #[inline]
    pub const fn is_write(self) -> bool {
        matches!(self, Self::Write)
    }
}
