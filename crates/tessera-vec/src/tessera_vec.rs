// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use alloc::alloc::handle_alloc_error;
use core::alloc::Layout;
use core::convert::Infallible;
use core::ptr;

use tessera_raw::{RawMemory, RawMemoryError};

use crate::error::TesseraVecError;
use crate::guard::PartialInit;

/// Test behaviour for injecting failures in `TesseraVec` operations.
///
/// This is only available with the `test-utils` feature and allows users
/// to test error handling paths in their code by injecting failures.
///
/// The behaviour is sticky - once set, it remains active until changed.
/// Only the `try_*` operations observe it.
///
/// # Example
///
/// ```rust
/// // test-utils feature required in dev-dependencies
/// use tessera_vec::{TesseraVec, TesseraVecBehaviour, TesseraVecError};
///
/// #[cfg(test)]
/// mod tests {
///     use super::*;
///
///     #[test]
///     fn test_handles_storage_failure() -> Result<(), TesseraVecError> {
///         let mut vec = TesseraVec::new();
///         vec.change_behaviour(TesseraVecBehaviour::FailAtGrow);
///
///         assert!(vec.try_push(1u8).is_err());
///
///         vec.change_behaviour(TesseraVecBehaviour::None);
///         vec.try_push(1u8)?;
///         Ok(())
///     }
/// }
/// ```
#[cfg(any(test, feature = "test-utils"))]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TesseraVecBehaviour {
    /// Normal behaviour - no injected failures.
    #[default]
    None,
    /// Every `try_*` call that needs a new block fails with `AllocationFailed`.
    FailAtGrow,
}

/// Where a new block comes from.
#[derive(Clone, Copy)]
enum Growth {
    /// Allocation failure aborts through `handle_alloc_error`.
    Infallible,
    /// Allocation failure is returned to the caller.
    Fallible,
}

/// A growable, contiguous array built directly on a [`RawMemory`] block.
///
/// Cells `[0, len)` of the block hold live values, cells `[len, capacity)` are
/// uninitialized. Any operation that needs more room builds a complete new
/// block first and swaps it in only once nothing else can fail, so a failing
/// or panicking element constructor never leaves the vector half-modified.
///
/// # Example
///
/// ```rust
/// use tessera_vec::TesseraVec;
///
/// let mut vec = TesseraVec::from([2, 4, 6]);
///
/// vec.insert(0, 1);
/// vec.push(8);
/// vec.erase(2);
///
/// assert_eq!(vec.as_slice(), &[1, 2, 6, 8]);
/// ```
pub struct TesseraVec<T> {
    buf: RawMemory<T>,
    len: usize,
    #[cfg(any(test, feature = "test-utils"))]
    behaviour: TesseraVecBehaviour,
}

impl<T> TesseraVec<T> {
    /// Creates an empty vector. Does not allocate.
    pub const fn new() -> Self {
        Self {
            buf: RawMemory::new(),
            len: 0,
            #[cfg(any(test, feature = "test-utils"))]
            behaviour: TesseraVecBehaviour::None,
        }
    }

    /// Creates an empty vector able to hold `capacity` elements without growing.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::from_raw(RawMemory::with_capacity(capacity), 0)
    }

    /// Creates a vector of `len` default-constructed elements.
    ///
    /// The capacity is exactly `len`.
    pub fn with_len(len: usize) -> Self
    where
        T: Default,
    {
        let mut vec = Self::new();
        vec.resize(len);
        vec
    }

    /// Creates a vector holding clones of `src`, with capacity `src.len()`.
    ///
    /// If a `clone()` panics, the clones made so far are dropped and the new
    /// block is released before the panic continues.
    pub fn from_slice(src: &[T]) -> Self
    where
        T: Clone,
    {
        let mut buf = RawMemory::with_capacity(src.len());
        // SAFETY: `buf` has exactly `src.len()` uninitialized cells.
        let mut guard = unsafe { PartialInit::new(buf.as_mut_ptr()) };

        for item in src {
            guard.push(item.clone());
        }

        let len = guard.commit();
        Self::from_raw(buf, len)
    }

    fn from_raw(buf: RawMemory<T>, len: usize) -> Self {
        debug_assert!(len <= buf.capacity());

        Self {
            buf,
            len,
            #[cfg(any(test, feature = "test-utils"))]
            behaviour: TesseraVecBehaviour::None,
        }
    }

    /// Returns the number of live elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the vector holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of elements the current block can hold.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buf.capacity()
    }

    /// Returns a slice over the live elements.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: cells [0, len) are initialized and the pointer is non-null and aligned.
        unsafe { core::slice::from_raw_parts(self.buf.as_ptr(), self.len) }
    }

    /// Returns a mutable slice over the live elements.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        // SAFETY: cells [0, len) are initialized and uniquely borrowed through `self`.
        unsafe { core::slice::from_raw_parts_mut(self.buf.as_mut_ptr(), self.len) }
    }

    /// Returns a pointer to the first cell (the begin position).
    #[inline]
    pub fn as_ptr(&self) -> *const T {
        self.buf.as_ptr()
    }

    /// Returns a mutable pointer to the first cell (the begin position).
    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.buf.as_mut_ptr()
    }

    /// Grows the block to exactly `new_capacity` if it is currently smaller.
    ///
    /// Live elements are relocated into the new block, which then replaces the
    /// old one. Does nothing when `new_capacity <= capacity()`.
    ///
    /// # Panics
    ///
    /// Panics on capacity overflow. Allocator failure goes through
    /// [`handle_alloc_error`].
    pub fn reserve(&mut self, new_capacity: usize) {
        if let Err(error) = self.reserve_with(new_capacity, Growth::Infallible) {
            handle_reserve_error(error);
        }
    }

    /// Fallible version of [`TesseraVec::reserve`].
    ///
    /// # Errors
    ///
    /// Returns [`TesseraVecError::Storage`] if the new block cannot be obtained.
    /// The vector is unchanged in that case.
    pub fn try_reserve(&mut self, new_capacity: usize) -> Result<(), TesseraVecError> {
        self.reserve_with(new_capacity, Growth::Fallible)?;
        Ok(())
    }

    /// Resizes to `new_len`, default-constructing new elements.
    ///
    /// See [`TesseraVec::resize_with`].
    pub fn resize(&mut self, new_len: usize)
    where
        T: Default,
    {
        self.resize_with(new_len, T::default);
    }

    /// Resizes to `new_len`.
    ///
    /// Shrinking drops the trailing elements. Growing reserves exactly
    /// `new_len` cells and fills the new ones with `f()`. The length changes
    /// only once every new element exists: if `f` panics, the elements it
    /// already produced are dropped and the length stays as it was.
    pub fn resize_with<F>(&mut self, new_len: usize, mut f: F)
    where
        F: FnMut() -> T,
    {
        if new_len <= self.len {
            self.truncate(new_len);
            return;
        }

        self.reserve(new_len);

        // SAFETY: reserve() made cells [len, new_len) available and uninitialized.
        let mut guard = unsafe { PartialInit::new(self.buf.offset(self.len)) };
        for _ in self.len..new_len {
            guard.push(f());
        }

        self.len += guard.commit();
        debug_assert_eq!(self.len, new_len);
    }

    /// Drops every element past `new_len`. Does nothing if `new_len >= len()`.
    pub fn truncate(&mut self, new_len: usize) {
        if new_len >= self.len {
            return;
        }

        let tail = ptr::slice_from_raw_parts_mut(self.buf.offset(new_len), self.len - new_len);
        // Shorten first: a panicking destructor must not lead to a double drop.
        self.len = new_len;

        // SAFETY: the tail cells were live and are no longer covered by `len`.
        unsafe { ptr::drop_in_place(tail) };
    }

    /// Drops every element, keeping the block.
    pub fn clear(&mut self) {
        self.truncate(0);
    }

    /// Appends `value` and returns a reference to it.
    ///
    /// When the block is full, a new one of `max(2 * capacity, len + 1)` cells
    /// is allocated and the existing elements are relocated into it.
    pub fn push(&mut self, value: T) -> &mut T {
        self.emplace_back_with(|| value)
    }

    /// Appends the value produced by `f` and returns a reference to it.
    ///
    /// `f` runs after any new block is allocated but before a single existing
    /// element is touched. If it panics, the new block is released and the
    /// vector is exactly as before.
    pub fn emplace_back_with<F>(&mut self, f: F) -> &mut T
    where
        F: FnOnce() -> T,
    {
        let index = self.len;
        self.emplace_with(index, f)
    }

    /// Fallible version of [`TesseraVec::push`].
    ///
    /// # Errors
    ///
    /// Returns [`TesseraVecError::Storage`] if growing is needed and fails.
    pub fn try_push(&mut self, value: T) -> Result<&mut T, TesseraVecError> {
        self.try_emplace_back_with(|| Ok::<T, Infallible>(value))
    }

    /// Appends the value produced by a fallible constructor.
    ///
    /// # Errors
    ///
    /// - [`TesseraVecError::Storage`] if growing is needed and fails.
    /// - [`TesseraVecError::Element`] if `f` fails.
    ///
    /// In both cases the vector is unchanged.
    pub fn try_emplace_back_with<E, F>(&mut self, f: F) -> Result<&mut T, TesseraVecError<E>>
    where
        F: FnOnce() -> Result<T, E>,
    {
        let index = self.len;
        self.emplace_at(index, Growth::Fallible, f)
    }

    /// Drops the last element.
    ///
    /// Calling this on an empty vector is a caller bug (debug assertion); in
    /// release builds it does nothing.
    pub fn pop_back(&mut self) {
        debug_assert!(self.len > 0, "TesseraVec::pop_back: vector is empty");

        if self.len == 0 {
            return;
        }

        self.len -= 1;
        // SAFETY: the cell at the old last index was live and is no longer covered by `len`.
        unsafe { ptr::drop_in_place(self.buf.offset(self.len)) };
    }

    /// Removes the last element and returns it, or `None` if empty.
    pub fn pop(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }

        self.len -= 1;
        // SAFETY: the cell was live and ownership moves to the caller.
        Some(unsafe { self.buf.offset(self.len).read() })
    }

    /// Inserts `value` at `index`, shifting later elements right.
    ///
    /// Returns a reference to the inserted element.
    ///
    /// # Panics
    ///
    /// Panics if `index > len()`.
    pub fn insert(&mut self, index: usize, value: T) -> &mut T {
        self.emplace_with(index, || value)
    }

    /// Inserts the value produced by `f` at `index`.
    ///
    /// `index == len()` behaves exactly like [`TesseraVec::emplace_back_with`].
    /// With spare capacity the value is built before anything is shifted.
    /// Without it, the value is built right after the new block is allocated
    /// and the old elements are relocated around it. A panic in `f` leaves the
    /// vector unchanged either way.
    ///
    /// # Panics
    ///
    /// Panics if `index > len()`.
    pub fn emplace_with<F>(&mut self, index: usize, f: F) -> &mut T
    where
        F: FnOnce() -> T,
    {
        match self.emplace_at(index, Growth::Infallible, || Ok::<T, Infallible>(f())) {
            Ok(slot) => slot,
            Err(TesseraVecError::Storage(error)) => handle_reserve_error(error),
            Err(TesseraVecError::Element(never)) => match never {},
        }
    }

    /// Fallible version of [`TesseraVec::emplace_with`].
    ///
    /// # Errors
    ///
    /// - [`TesseraVecError::Storage`] if growing is needed and fails.
    /// - [`TesseraVecError::Element`] if `f` fails.
    ///
    /// In both cases the vector is unchanged.
    ///
    /// # Panics
    ///
    /// Panics if `index > len()`.
    pub fn try_emplace_with<E, F>(
        &mut self,
        index: usize,
        f: F,
    ) -> Result<&mut T, TesseraVecError<E>>
    where
        F: FnOnce() -> Result<T, E>,
    {
        self.emplace_at(index, Growth::Fallible, f)
    }

    /// Removes and returns the element at `index`, shifting later elements left.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    pub fn remove(&mut self, index: usize) -> T {
        assert!(
            index < self.len,
            "removal index (is {index}) should be < len (is {})",
            self.len
        );

        // SAFETY: index < len, so the cell is live. The tail [index + 1, len)
        // is moved down by one, overwriting the now moved-out cell.
        unsafe {
            let slot = self.buf.offset(index);
            let value = slot.read();
            ptr::copy(slot.add(1), slot, self.len - index - 1);
            self.len -= 1;
            value
        }
    }

    /// Drops the element at `index`, shifting later elements left.
    ///
    /// Returns `index`, which now designates the element that followed the
    /// erased one (or the end position).
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    pub fn erase(&mut self, index: usize) -> usize {
        drop(self.remove(index));
        index
    }

    /// Exchanges contents with `other` without touching any element.
    pub fn swap(&mut self, other: &mut Self) {
        self.buf.swap(&mut other.buf);
        core::mem::swap(&mut self.len, &mut other.len);
    }

    /// # Safety
    ///
    /// Cells `[0, new_len)` must be initialized and `new_len <= capacity()`.
    pub(crate) unsafe fn set_len(&mut self, new_len: usize) {
        debug_assert!(new_len <= self.capacity());
        self.len = new_len;
    }

    /// Gives up ownership of the block and its `len` live cells without dropping them.
    pub(crate) fn into_raw_parts(self) -> (RawMemory<T>, usize) {
        let mut this = core::mem::ManuallyDrop::new(self);
        let len = this.len;
        (core::mem::take(&mut this.buf), len)
    }

    /// Changes the test behaviour for this vector.
    ///
    /// This is only available with the `test-utils` feature and allows injecting
    /// failures for testing error handling paths.
    #[cfg(any(test, feature = "test-utils"))]
    pub fn change_behaviour(&mut self, behaviour: TesseraVecBehaviour) {
        self.behaviour = behaviour;
    }

    /// Capacity of the block an append or insert grows into when full.
    fn grown_capacity(&self) -> Result<usize, RawMemoryError> {
        let required = self
            .len
            .checked_add(1)
            .ok_or(RawMemoryError::CapacityOverflow)?;

        Ok(core::cmp::max(self.capacity().saturating_mul(2), required))
    }

    fn allocate(&self, capacity: usize, growth: Growth) -> Result<RawMemory<T>, RawMemoryError> {
        match growth {
            Growth::Infallible => Ok(RawMemory::with_capacity(capacity)),
            Growth::Fallible => {
                #[cfg(any(test, feature = "test-utils"))]
                if matches!(self.behaviour, TesseraVecBehaviour::FailAtGrow) {
                    return Err(RawMemoryError::AllocationFailed {
                        size: capacity.saturating_mul(core::mem::size_of::<T>()),
                        align: core::mem::align_of::<T>(),
                    });
                }

                RawMemory::try_with_capacity(capacity)
            }
        }
    }

    fn reserve_with(&mut self, new_capacity: usize, growth: Growth) -> Result<(), RawMemoryError> {
        if new_capacity <= self.capacity() {
            return Ok(());
        }

        let mut new_buf = self.allocate(new_capacity, growth)?;

        // SAFETY: new_buf holds new_capacity > len uninitialized cells.
        unsafe { self.relocate_into(&mut new_buf, None) };

        Ok(())
    }

    fn emplace_at<E, F>(
        &mut self,
        index: usize,
        growth: Growth,
        f: F,
    ) -> Result<&mut T, TesseraVecError<E>>
    where
        F: FnOnce() -> Result<T, E>,
    {
        assert!(
            index <= self.len,
            "insertion index (is {index}) should be <= len (is {})",
            self.len
        );

        if self.len < self.capacity() {
            // Build the value before shifting anything.
            let value = f().map_err(TesseraVecError::Element)?;

            // SAFETY: len < capacity, so cell `len` exists and [index, len) can
            // move up by one. The hole at `index` is then filled.
            unsafe {
                let slot = self.buf.offset(index);
                ptr::copy(slot, slot.add(1), self.len - index);
                slot.write(value);
            }
        } else {
            let mut new_buf = self.allocate(self.grown_capacity()?, growth)?;

            // A failure or panic here only releases new_buf.
            let value = f().map_err(TesseraVecError::Element)?;

            // SAFETY: new_buf has at least len + 1 cells; cell `index` is
            // written here and relocation skips it.
            unsafe {
                new_buf.offset(index).write(value);
                self.relocate_into(&mut new_buf, Some(index));
            }
        }

        self.len += 1;

        // SAFETY: the cell at `index` was just initialized and index < len.
        Ok(unsafe { &mut *self.buf.offset(index) })
    }

    /// Relocates every live element into `new_buf` and adopts it, leaving the
    /// old block in `new_buf` to be released by the caller's drop.
    ///
    /// With `gap = Some(i)`, elements from `i` onward land one cell further,
    /// keeping cell `i` of the new block free for the caller.
    ///
    /// # Safety
    ///
    /// `new_buf` must have at least `len` cells (`len + 1` with a gap), none of
    /// which is initialized except, possibly, the gap cell. `i <= len`.
    unsafe fn relocate_into(&mut self, new_buf: &mut RawMemory<T>, gap: Option<usize>) {
        let old_capacity = self.capacity();
        let src = self.buf.as_ptr();
        let dst = new_buf.as_mut_ptr();

        // SAFETY: distinct blocks; ranges stay within len (source) and the
        // caller-guaranteed capacity (destination).
        unsafe {
            match gap {
                None => ptr::copy_nonoverlapping(src, dst, self.len),
                Some(index) => {
                    ptr::copy_nonoverlapping(src, dst, index);
                    ptr::copy_nonoverlapping(src.add(index), dst.add(index + 1), self.len - index);
                }
            }
        }

        self.buf.swap(new_buf);

        log::trace!(
            "tessera-vec: relocated {} elements, capacity {} -> {}",
            self.len,
            old_capacity,
            self.capacity()
        );
    }
}

impl<T> Drop for TesseraVec<T> {
    fn drop(&mut self) {
        // SAFETY: cells [0, len) are live; the block itself is released by RawMemory.
        unsafe { ptr::drop_in_place(self.as_mut_slice()) }
    }
}

#[cold]
#[inline(never)]
fn handle_reserve_error(error: RawMemoryError) -> ! {
    match error {
        RawMemoryError::CapacityOverflow => panic!("capacity overflow"),
        RawMemoryError::AllocationFailed { size, align } => {
            match Layout::from_size_align(size, align) {
                Ok(layout) => handle_alloc_error(layout),
                Err(_) => panic!("capacity overflow"),
            }
        }
    }
}
