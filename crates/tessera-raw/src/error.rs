// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Error types for tessera-raw.

use thiserror::Error;

/// Errors that can occur when obtaining a raw block.
#[derive(Debug, Error, Clone, Copy, Eq, PartialEq)]
pub enum RawMemoryError {
    /// The requested capacity does not fit in a `Layout` (byte size above `isize::MAX`).
    #[error("capacity overflow: requested block exceeds isize::MAX bytes")]
    CapacityOverflow,

    /// The global allocator returned null.
    #[error("allocation of {size} bytes (align {align}) failed")]
    AllocationFailed {
        /// Requested size in bytes.
        size: usize,
        /// Requested alignment in bytes.
        align: usize,
    },
}
