// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::ptr;

/// Tracks a run of cells being initialized one by one.
///
/// If a constructor panics before [`PartialInit::commit`], the cells written so
/// far are dropped on unwind, so nothing leaks and the owner's length never
/// needs to cover a half-built range.
pub(crate) struct PartialInit<T> {
    start: *mut T,
    initialized: usize,
}

impl<T> PartialInit<T> {
    /// # Safety
    ///
    /// `start` must point to uninitialized, writable cells with room for every
    /// value later passed to [`PartialInit::push`].
    pub(crate) unsafe fn new(start: *mut T) -> Self {
        Self {
            start,
            initialized: 0,
        }
    }

    #[inline]
    pub(crate) fn push(&mut self, value: T) {
        // SAFETY: room for this cell is guaranteed by the contract of `new`.
        unsafe { self.start.add(self.initialized).write(value) };
        self.initialized += 1;
    }

    /// Hands the initialized cells over to the caller and returns their count.
    #[inline]
    pub(crate) fn commit(self) -> usize {
        let initialized = self.initialized;
        core::mem::forget(self);
        initialized
    }
}

impl<T> Drop for PartialInit<T> {
    fn drop(&mut self) {
        // SAFETY: exactly `initialized` cells from `start` have been written.
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(self.start, self.initialized));
        }
    }
}
