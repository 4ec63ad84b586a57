//! Errors reported by the fallible [`GrowVec`][crate::GrowVec] operations.
//!
//! Only contract violations the caller can reasonably recover from are reported
//! as values. Misuse that C++-style containers leave undefined (a stale cursor, an
//! inverted erase range) panics instead.
//!
//! # Examples
//!
//! ```
//! use growvec::{growvec, Error};
//!
//! let v = growvec![7, 8, 9];
//! assert_eq!(v.at(1), Ok(&8));
//! assert_eq!(v.at(5), Err(Error::OutOfRange { index: 5, len: 3 }));
//! ```

use thiserror::Error;

/// Result type for fallible container operations.
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// Errors that can occur while accessing or resizing a container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// A checked access or a single-element erase named a position that is not
    /// less than the container's length.
    #[error("index {index} is out of range for length {len}")]
    OutOfRange {
        /// The offending position.
        index: usize,
        /// Length of the container at the time of the call.
        len: usize,
    },

    /// The requested number of slots cannot be described as a single allocation.
    #[error("capacity overflow: {requested} slots do not fit in one allocation")]
    CapacityOverflow {
        /// Requested capacity, in elements.
        requested: usize,
    },

    /// The global allocator returned null.
    #[error("allocator failed to provide {size} bytes aligned to {align}")]
    AllocFailed {
        /// Requested allocation size in bytes.
        size: usize,
        /// Requested alignment in bytes.
        align: usize,
    },
}
