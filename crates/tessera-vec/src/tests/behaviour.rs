// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use tessera_raw::RawMemoryError;

use crate::{TesseraVec, TesseraVecBehaviour, TesseraVecError};

#[test]
fn test_try_push_fails_when_grow_fails() {
    let mut vec = TesseraVec::from([1u32, 2]);
    let ptr = vec.as_ptr();
    vec.change_behaviour(TesseraVecBehaviour::FailAtGrow);

    let result = vec.try_push(3);

    assert_eq!(
        result.err(),
        Some(TesseraVecError::Storage(RawMemoryError::AllocationFailed {
            size: 4 * core::mem::size_of::<u32>(),
            align: core::mem::align_of::<u32>(),
        }))
    );
    assert_eq!(vec.as_slice(), &[1, 2]);
    assert_eq!(vec.capacity(), 2);
    assert_eq!(vec.as_ptr(), ptr);
}

#[test]
fn test_try_push_with_spare_capacity_ignores_grow_failure() {
    let mut vec = TesseraVec::with_capacity(2);
    vec.change_behaviour(TesseraVecBehaviour::FailAtGrow);

    vec.try_push(1u8).expect("Failed to try_push(1)");
    vec.try_push(2u8).expect("Failed to try_push(2)");

    assert!(vec.try_push(3u8).is_err());
    assert_eq!(vec.as_slice(), &[1, 2]);
}

#[test]
fn test_try_emplace_with_fails_when_grow_fails() {
    let mut vec = TesseraVec::from([1, 3]);
    vec.change_behaviour(TesseraVecBehaviour::FailAtGrow);

    let mut constructed = false;
    let result = vec.try_emplace_with(1, || {
        constructed = true;
        Ok::<_, ()>(2)
    });

    assert!(matches!(result, Err(TesseraVecError::Storage(_))));
    // Allocation comes first, so the constructor never ran.
    assert!(!constructed);
    assert_eq!(vec.as_slice(), &[1, 3]);
}

#[test]
fn test_try_reserve_fails_when_grow_fails() {
    let mut vec = TesseraVec::from([1u8]);
    vec.change_behaviour(TesseraVecBehaviour::FailAtGrow);

    assert!(vec.try_reserve(10).is_err());
    assert_eq!(vec.capacity(), 1);

    // No new block needed, no failure.
    vec.try_reserve(1).expect("Failed to try_reserve(1)");
}

#[test]
fn test_infallible_operations_ignore_behaviour() {
    let mut vec = TesseraVec::from([1u8]);
    vec.change_behaviour(TesseraVecBehaviour::FailAtGrow);

    vec.push(2);
    vec.reserve(10);

    assert_eq!(vec.as_slice(), &[1, 2]);
    assert_eq!(vec.capacity(), 10);
}

#[test]
fn test_behaviour_is_sticky_until_reset() {
    let mut vec: TesseraVec<u8> = TesseraVec::new();
    vec.change_behaviour(TesseraVecBehaviour::FailAtGrow);

    assert!(vec.try_push(1).is_err());
    assert!(vec.try_push(1).is_err());

    vec.change_behaviour(TesseraVecBehaviour::None);
    vec.try_push(1).expect("Failed to try_push(1)");

    assert_eq!(vec.as_slice(), &[1]);
}

#[test]
fn test_try_reserve_capacity_overflow() {
    let mut vec: TesseraVec<u64> = TesseraVec::new();

    let result = vec.try_reserve(usize::MAX);

    assert_eq!(
        result,
        Err(TesseraVecError::Storage(RawMemoryError::CapacityOverflow))
    );
    assert_eq!(vec.capacity(), 0);
}

#[test]
#[should_panic(expected = "capacity overflow")]
fn test_reserve_capacity_overflow_panics() {
    let mut vec: TesseraVec<u64> = TesseraVec::new();

    vec.reserve(usize::MAX);
}
