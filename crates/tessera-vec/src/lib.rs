// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Growable contiguous array with explicit element lifetime.
//!
//! `TesseraVec<T>` is built on a [`tessera_raw::RawMemory`] block rather than
//! on `Vec<T>`. It decides itself when a cell becomes a live value and when it
//! goes back to being uninitialized memory.
//!
//! # Core Guarantees
//!
//! - **Build new, then discard old**: growth allocates a complete new block,
//!   constructs the incoming element in it, relocates the existing elements and
//!   only then swaps blocks. A panicking or failing constructor leaves the
//!   vector exactly as it was and leaks nothing.
//! - **Relocation, never duplication**: moving a value in Rust cannot fail, so
//!   existing elements are always relocated bitwise, never cloned.
//! - **Exact reserve, doubling growth**: `reserve(n)` allocates exactly `n`;
//!   appends and inserts on a full block grow to `max(2 * capacity, len + 1)`.
//! - **Fallible operations**: every growth path has a `try_*` twin that returns
//!   [`TesseraVecError`] instead of aborting.
//!
//! # Example: Basic Usage
//!
//! ```rust
//! use tessera_vec::TesseraVec;
//!
//! let mut vec = TesseraVec::new();
//! for i in 0..5 {
//!     vec.push(i);
//! }
//!
//! vec.insert(0, -1);
//! assert_eq!(vec.remove(1), 0);
//! assert_eq!(vec.as_slice(), &[-1, 1, 2, 3, 4]);
//! ```
//!
//! # Example: Fallible Construction
//!
//! ```rust
//! use tessera_vec::{TesseraVec, TesseraVecError};
//!
//! let mut vec = TesseraVec::from([1u32, 2, 3]);
//!
//! let result = vec.try_emplace_back_with(|| "4".parse::<u32>());
//! assert!(result.is_ok());
//!
//! let result = vec.try_emplace_back_with(|| "five".parse::<u32>());
//! assert!(matches!(result, Err(TesseraVecError::Element(_))));
//!
//! // The failed call left no trace.
//! assert_eq!(vec.as_slice(), &[1, 2, 3, 4]);
//! ```
//!
//! # Test Utilities
//!
//! Enable the `test-utils` feature to inject storage failures:
//!
//! ```toml
//! [dev-dependencies]
//! tessera-vec = { version = "*", features = ["test-utils"] }
//! ```
//!
//! Then use [`TesseraVecBehaviour`] to exercise the error paths of your code.

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![warn(unsafe_op_in_unsafe_fn)]

extern crate alloc;

#[cfg(test)]
mod tests;

mod error;
mod guard;
mod impls;
mod into_iter;
mod tessera_vec;

pub use error::TesseraVecError;
pub use into_iter::IntoIter;
pub use tessera_vec::TesseraVec;

#[cfg(any(test, feature = "test-utils"))]
pub use tessera_vec::TesseraVecBehaviour;
