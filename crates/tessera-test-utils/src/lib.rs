// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Test utilities for Tessera crates.
//!
//! - [`Tracker`] / [`Tracked`]: elements that count live instances, drops and
//!   clones, and can be armed to panic on a chosen `clone()`.
//! - [`catch_panic`]: runs a closure and turns an unwinding panic into `Err`.
//!
//! ## License
//!
//! GPL-3.0-only

mod panic;
mod tracker;

pub use panic::catch_panic;
pub use tracker::{Tracked, Tracker, values};
