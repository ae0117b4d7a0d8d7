// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::ops::{Deref, DerefMut, Index, IndexMut};
use core::slice::SliceIndex;

use crate::guard::PartialInit;
use crate::tessera_vec::TesseraVec;

impl<T> Default for TesseraVec<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: core::fmt::Debug> core::fmt::Debug for TesseraVec<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: Clone> Clone for TesseraVec<T> {
    fn clone(&self) -> Self {
        Self::from_slice(self.as_slice())
    }

    /// Copy assignment.
    ///
    /// If `source` does not fit in the current block, a full copy is built and
    /// swapped in, so a panicking `clone()` leaves `self` untouched. Otherwise
    /// the block is reused: the shared prefix is assigned with `clone_from`, the
    /// missing tail is cloned in, or the excess tail is dropped.
    fn clone_from(&mut self, source: &Self) {
        if source.len() > self.capacity() {
            let mut fresh = source.clone();
            self.swap(&mut fresh);
            return;
        }

        let shared = core::cmp::min(self.len(), source.len());
        for (dst, src) in self.as_mut_slice()[..shared].iter_mut().zip(&source[..shared]) {
            dst.clone_from(src);
        }

        if source.len() <= self.len() {
            self.truncate(source.len());
            return;
        }

        let len = self.len();
        // SAFETY: source.len() <= capacity, so cells [len, source.len()) are
        // available and uninitialized.
        let mut guard = unsafe { PartialInit::new(self.as_mut_ptr().add(len)) };
        for item in &source[len..] {
            guard.push(item.clone());
        }

        let added = guard.commit();
        // SAFETY: the `added` cells after `len` were just initialized.
        unsafe { self.set_len(len + added) };
    }
}

impl<T> Deref for TesseraVec<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}

impl<T> DerefMut for TesseraVec<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.as_mut_slice()
    }
}

impl<T, I: SliceIndex<[T]>> Index<I> for TesseraVec<T> {
    type Output = I::Output;

    #[inline]
    fn index(&self, index: I) -> &Self::Output {
        Index::index(self.as_slice(), index)
    }
}

impl<T, I: SliceIndex<[T]>> IndexMut<I> for TesseraVec<T> {
    #[inline]
    fn index_mut(&mut self, index: I) -> &mut Self::Output {
        IndexMut::index_mut(self.as_mut_slice(), index)
    }
}

impl<T> AsRef<[T]> for TesseraVec<T> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> AsMut<[T]> for TesseraVec<T> {
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T: PartialEq> PartialEq for TesseraVec<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for TesseraVec<T> {}

impl<T: PartialEq, const N: usize> PartialEq<[T; N]> for TesseraVec<T> {
    fn eq(&self, other: &[T; N]) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T, const N: usize> From<[T; N]> for TesseraVec<T> {
    fn from(array: [T; N]) -> Self {
        let mut vec = Self::with_capacity(N);
        for item in array {
            vec.push(item);
        }
        vec
    }
}

impl<T: Clone> From<&[T]> for TesseraVec<T> {
    fn from(src: &[T]) -> Self {
        Self::from_slice(src)
    }
}

impl<T> Extend<T> for TesseraVec<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push(item);
        }
    }
}

impl<T> FromIterator<T> for TesseraVec<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut vec = Self::new();
        vec.extend(iter);
        vec
    }
}

impl<'a, T> IntoIterator for &'a TesseraVec<T> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut TesseraVec<T> {
    type Item = &'a mut T;
    type IntoIter = core::slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}
