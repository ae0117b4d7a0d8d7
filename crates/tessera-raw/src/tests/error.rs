// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::RawMemoryError;

#[test]
fn test_capacity_overflow_display() {
    assert_eq!(
        RawMemoryError::CapacityOverflow.to_string(),
        "capacity overflow: requested block exceeds isize::MAX bytes"
    );
}

#[test]
fn test_allocation_failed_display() {
    let err = RawMemoryError::AllocationFailed { size: 64, align: 8 };

    assert_eq!(err.to_string(), "allocation of 64 bytes (align 8) failed");
}
