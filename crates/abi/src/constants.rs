// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

/// Magic number to identify valid native UDF libraries
///
/// Libraries must export a `udf_library_magic` symbol that returns this value
/// to be recognized as valid UDF libraries.
pub const LIBRARY_MAGIC: u32 = 20250621;

/// Function signature for the magic number export
///
/// UDF libraries must export this function to be recognized by the host.
pub type LibraryMagicFnFFI = extern "C" fn() -> u32;

/// Maximum size in bytes of an error message reported to the host
///
/// Longer messages are truncated. The reported buffer is always
/// NUL-terminated within this budget.
pub const MAX_ERROR_MESSAGE_BYTES: usize = 2048;
