// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use tessera_raw::RawMemoryError;

use crate::TesseraVecError;

#[test]
fn test_storage_error_from_raw_memory_error() {
    let err: TesseraVecError = RawMemoryError::CapacityOverflow.into();

    assert_eq!(err, TesseraVecError::Storage(RawMemoryError::CapacityOverflow));
    assert_eq!(
        err.to_string(),
        "storage error: capacity overflow: requested block exceeds isize::MAX bytes"
    );
}

#[test]
fn test_element_error_display() {
    let err: TesseraVecError<&str> = TesseraVecError::Element("bad input");

    assert_eq!(err.to_string(), "element construction failed: bad input");
}
