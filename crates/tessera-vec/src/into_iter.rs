// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::iter::FusedIterator;
use core::ptr;

use tessera_raw::RawMemory;

use crate::tessera_vec::TesseraVec;

/// Owning iterator over the elements of a [`TesseraVec`].
///
/// Elements not yielded are dropped together with the iterator.
pub struct IntoIter<T> {
    buf: RawMemory<T>,
    start: usize,
    end: usize,
}

impl<T> IntoIter<T> {
    /// Returns the elements not yet yielded.
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: cells [start, end) are still live.
        unsafe { core::slice::from_raw_parts(self.buf.offset(self.start), self.end - self.start) }
    }
}

impl<T> IntoIterator for TesseraVec<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        let (buf, len) = self.into_raw_parts();

        IntoIter {
            buf,
            start: 0,
            end: len,
        }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.start == self.end {
            return None;
        }

        // SAFETY: start < end, the cell is live and leaves the live range here.
        let value = unsafe { self.buf.offset(self.start).read() };
        self.start += 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.end - self.start;
        (remaining, Some(remaining))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> {
        if self.start == self.end {
            return None;
        }

        self.end -= 1;
        // SAFETY: the cell at the old `end - 1` is live and leaves the live range here.
        Some(unsafe { self.buf.offset(self.end).read() })
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> Drop for IntoIter<T> {
    fn drop(&mut self) {
        let remaining = ptr::slice_from_raw_parts_mut(self.buf.offset(self.start), self.end - self.start);
        self.start = self.end;

        // SAFETY: cells [start, end) were live and are no longer reachable.
        unsafe { ptr::drop_in_place(remaining) };
    }
}

impl<T: core::fmt::Debug> core::fmt::Debug for IntoIter<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_tuple("IntoIter").field(&self.as_slice()).finish()
    }
}
