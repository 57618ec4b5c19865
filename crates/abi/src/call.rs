// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use core::ffi::c_void;

use crate::data::{BufferFFI, DatumFFI};

/// Error classification codes surfaced to the host
///
/// These are the only classifications a UDF library produces. Everything that
/// is not an allocation failure is reported as `InvalidArgument`.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCodeFFI {
	/// Memory allocation failed while executing the call
	OutOfMemory = 1,
	/// Bad input, decode failure or any other native-side failure
	InvalidArgument = 2,
}

/// Error-reporting channel provided by the host
///
/// # Parameters
/// - `call`: The per-call state the failure belongs to
/// - `code`: Error classification
/// - `message`: NUL-terminated UTF-8 message, at most
///   [`MAX_ERROR_MESSAGE_BYTES`](crate::constants::MAX_ERROR_MESSAGE_BYTES) bytes including the terminator
/// - `length`: Message length in bytes, excluding the terminator
///
/// # Semantics
/// This function performs a non-local exit and never returns to the caller.
/// The library must invoke it with only plain data live on its own stack
/// frame; no cleanup scheduled after the call will run.
pub type ErrorReportFnFFI =
	extern "C-unwind" fn(call: *mut CallInfoFFI, code: ErrorCodeFFI, message: *const u8, length: usize) -> !;

/// Result-buffer allocator provided by the host
///
/// Returns a host-owned buffer of `len` bytes the library copies a
/// variable-length result into, or null when allocation fails. The buffer
/// stays valid until the host has consumed the call's result.
pub type AllocResultFnFFI = extern "C" fn(call: *mut CallInfoFFI, len: usize) -> *mut u8;

/// Entry point signature of every exported UDF symbol
pub type UdfEntryFnFFI = extern "C-unwind" fn(call: *mut CallInfoFFI) -> DatumFFI;

/// Per-call state the host passes to an exported UDF symbol
///
/// All pointers stay valid for the duration of the call and are owned by the
/// host; the library must never free them.
#[repr(C)]
pub struct CallInfoFFI {
	/// Name of the invoked symbol (UTF-8, used only to format error text)
	pub symbol: BufferFFI,
	/// Number of positional arguments
	pub argument_count: usize,
	/// Pointer to `argument_count` datums (may be null when count is 0)
	pub arguments: *const DatumFFI,
	/// Set by the library when the call's result is null
	pub result_is_null: bool,
	/// Host channel for reporting a classified failure; never returns
	pub report_error: ErrorReportFnFFI,
	/// Host allocator for variable-length result payloads
	pub alloc_result: AllocResultFnFFI,
	/// Opaque host-side state, untouched by the library
	pub host_data: *mut c_void,
}
