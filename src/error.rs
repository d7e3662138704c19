// This file is part of stack-queue.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for [`Stack`](crate::Stack) and [`Queue`](crate::Queue).
//!
//! There is exactly one hard error condition: an index or range argument
//! outside the container's current bounds. Emptiness is never an error;
//! `peek`/`pop`/`dequeue` on an empty container return `None`.

// Core imports
use core::{error::Error as CoreError, fmt};

/// Errors returned by operations on [`Stack`](crate::Stack) and
/// [`Queue`](crate::Queue).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// An index or range argument was outside the current logical bounds.
    ///
    /// Raised by single-index access, multi-index access, ranged search,
    /// sub-container derivation, and index exchange. Bounds are never
    /// silently clamped.
    OutOfRange,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange => f.write_str("index out of range"),
        }
    }
}

impl CoreError for Error {}

#[cfg(test)]
mod tests {
    // Imports
    use crate::Error;
    use alloc::string::{String, ToString};
    use core::error::Error as CoreError;

    fn takes_error(e: &dyn CoreError) -> String {
        e.to_string()
    }

    #[test]
    fn test_error_is_core_error() {
        let s = takes_error(&Error::OutOfRange);
        assert!(s.contains("out of range"));
    }
}
