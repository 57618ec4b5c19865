// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

/// FFI-safe byte buffer
///
/// Points at memory owned by whoever produced the buffer. The consumer must
/// never free it; lifetime is bounded by the call the buffer was produced for.
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct BufferFFI {
	/// Pointer to the first byte (may be null when `len` is 0)
	pub ptr: *const u8,
	/// Number of valid bytes
	pub len: usize,
}

impl BufferFFI {
	/// Create an empty buffer
	pub const fn empty() -> Self {
		Self {
			ptr: core::ptr::null(),
			len: 0,
		}
	}

	/// Check whether the buffer holds no bytes
	pub const fn is_empty(&self) -> bool {
		self.len == 0
	}
}

/// Type code for a datum payload (maps to the `Value` enum)
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeCodeFFI {
	Bool = 0,
	Float4 = 1,
	Float8 = 2,
	Int1 = 3,
	Int2 = 4,
	Int4 = 5,
	Int8 = 6,
	Utf8 = 7,
	Blob = 8,
	Undefined = 9,
}

/// FFI-safe datum: one positional argument or one call result
///
/// - For fixed-size types the raw bits live in `value` (integers sign-extended
///   to 64 bits, floats as IEEE-754 bit patterns).
/// - For variable-length types (Utf8, Blob) `data` points at the bytes and
///   `value` is unused.
/// - `Undefined` carries no payload and doubles as the null result datum; the
///   host distinguishes a null result via `CallInfoFFI::result_is_null`.
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct DatumFFI {
	/// Type code indicating payload format
	pub type_code: TypeCodeFFI,
	/// Raw bits for fixed-size types
	pub value: u64,
	/// Byte payload for variable-length types
	pub data: BufferFFI,
}

impl DatumFFI {
	/// Create the null datum
	pub const fn null() -> Self {
		Self {
			type_code: TypeCodeFFI::Undefined,
			value: 0,
			data: BufferFFI::empty(),
		}
	}

	/// Create a fixed-size datum from raw bits
	pub const fn from_bits(type_code: TypeCodeFFI, value: u64) -> Self {
		Self {
			type_code,
			value,
			data: BufferFFI::empty(),
		}
	}

	/// Create a variable-length datum over an existing buffer
	pub const fn from_buffer(type_code: TypeCodeFFI, data: BufferFFI) -> Self {
		Self {
			type_code,
			value: 0,
			data,
		}
	}
}
