// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Error types for tessera-vec.

use core::convert::Infallible;

use tessera_raw::RawMemoryError;
use thiserror::Error;

/// Error type for the fallible `TesseraVec` operations.
///
/// `E` is the error returned by a fallible element constructor. Operations that
/// take a ready value use the default `Infallible`.
///
/// Whatever the variant, the vector is left exactly as it was before the call.
#[derive(Debug, Error, Eq, PartialEq)]
pub enum TesseraVecError<E = Infallible> {
    /// A new block could not be obtained.
    #[error("storage error: {0}")]
    Storage(#[from] RawMemoryError),

    /// The element constructor reported a failure.
    #[error("element construction failed: {0}")]
    Element(E),
}
