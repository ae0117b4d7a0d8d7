// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! <p align="center"><em>Growable arrays over raw storage with strong failure guarantees.</em></p>
//!
//! ---
//!
//! Tessera splits a growable array into two layers:
//!
//! - [`raw`]: an owner of uninitialized storage for `capacity` values. It
//!   allocates and frees, nothing else. It never constructs or drops elements.
//! - [`vec`]: a dynamic array that tracks which prefix of that storage holds
//!   live values and keeps it consistent across growth, insertion and removal.
//!
//! # Features
//!
//! - **Strong guarantee** on append, insert, reserve and clone: if building an
//!   element panics or fails, the array is left exactly as it was.
//! - **Amortized O(1) append** through doubling growth.
//! - **Exact reserve**: `reserve(n)` allocates room for `n` elements, no more.
//! - **Fallible twins**: `try_push`, `try_reserve`, `try_emplace_with` return
//!   errors instead of aborting.
//! - **`no_std` compatible**: only `alloc` is required.
//!
//! # Installation
//!
//! ```toml
//! [dependencies]
//! tessera = "0.1.0"
//! ```
//!
//! # Quick Start
//!
//! ```rust
//! use tessera::TesseraVec;
//!
//! let mut names: TesseraVec<String> = TesseraVec::new();
//!
//! names.push("ada".into());
//! names.push("grace".into());
//! names.insert(1, "edsger".into());
//!
//! assert_eq!(names.len(), 3);
//! assert_eq!(names[1], "edsger");
//!
//! names.erase(0);
//! assert_eq!(names.as_slice(), ["edsger", "grace"]);
//! ```
//!
//! # Raw storage
//!
//! ```rust
//! use tessera::RawMemory;
//!
//! let mut block: RawMemory<u64> = RawMemory::with_capacity(4);
//!
//! // SAFETY: offsets 0 and 1 are within capacity; u64 needs no drop.
//! unsafe {
//!     block.offset(0).write(7);
//!     block.offset(1).write(11);
//!     assert_eq!(block.offset(1).read(), 11);
//! }
//!
//! assert_eq!(block.capacity(), 4);
//! ```
//!
//! # License
//!
//! GPL-3.0-only

#![cfg_attr(not(test), no_std)]

pub use tessera_raw as raw;
pub use tessera_vec as vec;

pub use tessera_raw::{RawMemory, RawMemoryError};
pub use tessera_vec::{TesseraVec, TesseraVecError};
