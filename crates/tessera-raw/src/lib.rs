// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Uninitialized, fixed-capacity raw storage.
//!
//! `RawMemory<T>` owns a single heap block sized for `capacity` values of `T`
//! and nothing else. It never constructs, reads or drops a `T`: which cells
//! hold live values is entirely the owner's business.
//!
//! # Guarantees
//!
//! - **No element lifetime**: dropping a `RawMemory` releases the block without
//!   running any destructor. The owner must drop live cells first.
//! - **Exclusive ownership**: the block can be moved or swapped, never cloned.
//! - **No allocation for empty blocks**: a capacity of zero (or a zero-sized `T`)
//!   uses a dangling, well-aligned pointer.
//!
//! # Example
//!
//! ```rust
//! use tessera_raw::{RawMemory, RawMemoryError};
//!
//! fn example() -> Result<(), RawMemoryError> {
//!     let mut block = RawMemory::<u32>::try_with_capacity(4)?;
//!     assert_eq!(block.capacity(), 4);
//!
//!     unsafe {
//!         block.offset(0).write(7);
//!         assert_eq!(block.offset(0).read(), 7);
//!     }
//!
//!     // One-past-end is a valid address to compute.
//!     let _end = block.offset(4);
//!
//!     // u32 has no destructor, so the block can be released as is.
//!     Ok(())
//! }
//! # example().unwrap();
//! ```

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![warn(unsafe_op_in_unsafe_fn)]

extern crate alloc;

#[cfg(test)]
mod tests;

mod error;
mod raw_memory;

pub use error::RawMemoryError;
pub use raw_memory::RawMemory;
