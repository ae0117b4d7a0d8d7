// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use alloc::alloc::{Layout, alloc, dealloc, handle_alloc_error};
use core::marker::PhantomData;
use core::ptr::NonNull;

use crate::error::RawMemoryError;

/// An owned, uninitialized block sized for `capacity` values of `T`.
///
/// `RawMemory` knows nothing about which cells are initialized. It only
/// allocates, computes addresses, swaps blocks and deallocates. Dropping it
/// never drops a `T`.
///
/// # Example
///
/// ```rust
/// use tessera_raw::RawMemory;
///
/// let mut a = RawMemory::<u8>::with_capacity(8);
/// let mut b = RawMemory::<u8>::new();
///
/// a.swap(&mut b);
///
/// assert_eq!(a.capacity(), 0);
/// assert_eq!(b.capacity(), 8);
/// ```
pub struct RawMemory<T> {
    ptr: NonNull<T>,
    capacity: usize,
    _owns: PhantomData<T>,
}

// Safety: RawMemory uniquely owns its block, like Box<[MaybeUninit<T>]>.
unsafe impl<T: Send> Send for RawMemory<T> {}
unsafe impl<T: Sync> Sync for RawMemory<T> {}

impl<T> RawMemory<T> {
    /// Creates an empty block. Does not allocate.
    pub const fn new() -> Self {
        Self {
            ptr: NonNull::dangling(),
            capacity: 0,
            _owns: PhantomData,
        }
    }

    /// Allocates an uninitialized block for `capacity` elements.
    ///
    /// # Panics
    ///
    /// Panics if the byte size overflows `isize::MAX`. Allocator failure is
    /// reported through [`handle_alloc_error`].
    pub fn with_capacity(capacity: usize) -> Self {
        let Ok(layout) = Self::layout(capacity) else {
            capacity_overflow();
        };

        match Self::allocate(layout) {
            Some(ptr) => Self::from_parts(ptr, capacity),
            None => handle_alloc_error(layout),
        }
    }

    /// Fallible version of [`RawMemory::with_capacity`].
    ///
    /// # Errors
    ///
    /// - [`RawMemoryError::CapacityOverflow`] if the byte size overflows `isize::MAX`.
    /// - [`RawMemoryError::AllocationFailed`] if the global allocator returns null.
    pub fn try_with_capacity(capacity: usize) -> Result<Self, RawMemoryError> {
        let layout = Self::layout(capacity)?;
        let ptr = Self::allocate(layout).ok_or(RawMemoryError::AllocationFailed {
            size: layout.size(),
            align: layout.align(),
        })?;

        Ok(Self::from_parts(ptr, capacity))
    }

    /// Number of cells in the block, initialized or not.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Address of the first cell.
    #[inline]
    pub fn as_ptr(&self) -> *const T {
        self.ptr.as_ptr()
    }

    /// Mutable address of the first cell.
    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.ptr.as_ptr()
    }

    /// Address of the cell at `offset`.
    ///
    /// `offset == capacity` is allowed and yields the one-past-end address.
    /// Anything larger is a caller bug, caught by a debug assertion only.
    #[inline]
    pub fn offset(&self, offset: usize) -> *mut T {
        debug_assert!(
            offset <= self.capacity,
            "RawMemory::offset: offset {offset} exceeds capacity {}",
            self.capacity
        );

        self.ptr.as_ptr().wrapping_add(offset)
    }

    /// Exchanges blocks and capacities with `other`.
    #[inline]
    pub fn swap(&mut self, other: &mut Self) {
        core::mem::swap(&mut self.ptr, &mut other.ptr);
        core::mem::swap(&mut self.capacity, &mut other.capacity);
    }

    fn from_parts(ptr: NonNull<T>, capacity: usize) -> Self {
        Self {
            ptr,
            capacity,
            _owns: PhantomData,
        }
    }

    fn layout(capacity: usize) -> Result<Layout, RawMemoryError> {
        Layout::array::<T>(capacity).map_err(|_| RawMemoryError::CapacityOverflow)
    }

    fn allocate(layout: Layout) -> Option<NonNull<T>> {
        if layout.size() == 0 {
            return Some(NonNull::dangling());
        }

        // SAFETY: layout has a non-zero size.
        let ptr = unsafe { alloc(layout) };
        NonNull::new(ptr.cast::<T>())
    }
}

impl<T> Default for RawMemory<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for RawMemory<T> {
    fn drop(&mut self) {
        let Ok(layout) = Self::layout(self.capacity) else {
            return;
        };

        if layout.size() == 0 {
            return;
        }

        // SAFETY: a non-empty layout means ptr came from `alloc` with this exact layout.
        unsafe { dealloc(self.ptr.as_ptr().cast::<u8>(), layout) }
    }
}

impl<T> core::fmt::Debug for RawMemory<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("RawMemory")
            .field("ptr", &self.ptr)
            .field("capacity", &self.capacity)
            .finish()
    }
}

#[cold]
#[inline(never)]
fn capacity_overflow() -> ! {
    panic!("capacity overflow");
}
