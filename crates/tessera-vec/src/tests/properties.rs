// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use proptest::prelude::*;

use crate::TesseraVec;

proptest! {
    #[test]
    fn push_preserves_call_order(items in proptest::collection::vec(any::<i64>(), 0..200)) {
        let mut vec = TesseraVec::new();
        for &item in &items {
            vec.push(item);
        }

        prop_assert_eq!(vec.len(), items.len());
        prop_assert_eq!(vec.as_slice(), items.as_slice());
    }

    #[test]
    fn push_growth_is_geometric(n in 1..=2048usize) {
        let mut vec = TesseraVec::new();
        let mut reallocations = 0u32;
        let mut previous = vec.capacity();

        for i in 0..n {
            let len_before = vec.len();
            vec.push(i);

            let current = vec.capacity();
            prop_assert!(current >= previous);

            if current != previous {
                reallocations += 1;
                prop_assert_eq!(current, core::cmp::max(2 * previous, len_before + 1));
            }
            previous = current;
        }

        // A full block is hit at len 0, 1, 2, 4, ... below n.
        prop_assert_eq!(reallocations, n.next_power_of_two().ilog2() + 1);
    }

    #[test]
    fn reserve_is_idempotent(
        items in proptest::collection::vec(any::<u16>(), 0..64),
        extra in 0..128usize,
    ) {
        let target = items.len() + extra;

        let mut once: TesseraVec<u16> = items.iter().copied().collect();
        once.reserve(target);

        let mut twice: TesseraVec<u16> = items.iter().copied().collect();
        twice.reserve(target);
        let ptr = twice.as_ptr();
        twice.reserve(target);

        prop_assert_eq!(once.capacity(), twice.capacity());
        prop_assert_eq!(&once, &twice);
        prop_assert_eq!(twice.as_ptr(), ptr);
    }

    #[test]
    fn insert_then_remove_restores_contents(
        items in proptest::collection::vec(any::<i32>(), 0..64),
        position in any::<prop::sample::Index>(),
        value in any::<i32>(),
    ) {
        let mut vec: TesseraVec<i32> = items.iter().copied().collect();
        let index = position.index(items.len() + 1);

        prop_assert_eq!(*vec.insert(index, value), value);
        prop_assert_eq!(vec.len(), items.len() + 1);
        prop_assert_eq!(&vec[..index], &items[..index]);
        prop_assert_eq!(&vec[index + 1..], &items[index..]);

        prop_assert_eq!(vec.remove(index), value);
        prop_assert_eq!(vec.as_slice(), items.as_slice());
    }

    #[test]
    fn clone_is_independent(items in proptest::collection::vec(any::<u8>(), 1..64)) {
        let original: TesseraVec<u8> = items.iter().copied().collect();
        let mut copy = original.clone();

        prop_assert_eq!(&copy, &original);

        copy[0] = copy[0].wrapping_add(1);
        copy.push(0);

        prop_assert_eq!(original.as_slice(), items.as_slice());
    }
}
