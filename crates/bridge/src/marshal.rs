// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

//! Conversion between host datums and [`Value`].
//!
//! Decoding is a pure function of the datum and never retains host memory
//! past the call: variable-length payloads are copied into owned values
//! through fallible allocation, so exhaustion surfaces as an allocation
//! diagnostic instead of an abort.

use reifydb_udf_abi::{BufferFFI, CallInfoFFI, DatumFFI, TypeCodeFFI};
use reifydb_udf_type::{
	Result, Value, error,
	diagnostic::{bridge::allocation_failed, marshal::invalid_utf8_payload},
};

/// View a host buffer as a byte slice.
///
/// # Safety
/// The buffer must point at `len` readable bytes that stay valid for the
/// lifetime of the returned slice.
unsafe fn buffer_bytes<'a>(buffer: &BufferFFI) -> &'a [u8] {
	if buffer.is_empty() {
		&[]
	} else {
		unsafe { std::slice::from_raw_parts(buffer.ptr, buffer.len) }
	}
}

fn copy_bytes(bytes: &[u8]) -> Result<Vec<u8>> {
	let mut out = Vec::new();
	out.try_reserve_exact(bytes.len())?;
	out.extend_from_slice(bytes);
	Ok(out)
}

/// Decode one raw host argument into an owned [`Value`].
///
/// # Safety
/// Buffer pointers inside the datum must be valid for their stated length
/// for the duration of the call.
pub unsafe fn decode(datum: &DatumFFI) -> Result<Value> {
	match datum.type_code {
		TypeCodeFFI::Bool => Ok(Value::bool(datum.value != 0)),
		TypeCodeFFI::Float4 => Ok(Value::float4(f32::from_bits(datum.value as u32))),
		TypeCodeFFI::Float8 => Ok(Value::float8(f64::from_bits(datum.value))),
		TypeCodeFFI::Int1 => Ok(Value::int1(datum.value as i8)),
		TypeCodeFFI::Int2 => Ok(Value::int2(datum.value as i16)),
		TypeCodeFFI::Int4 => Ok(Value::int4(datum.value as i32)),
		TypeCodeFFI::Int8 => Ok(Value::int8(datum.value as i64)),
		TypeCodeFFI::Utf8 => {
			let bytes = copy_bytes(unsafe { buffer_bytes(&datum.data) })?;
			let text = String::from_utf8(bytes).map_err(|_| error!(invalid_utf8_payload()))?;
			Ok(Value::utf8(text))
		}
		TypeCodeFFI::Blob => Ok(Value::blob(copy_bytes(unsafe { buffer_bytes(&datum.data) })?)),
		TypeCodeFFI::Undefined => Ok(Value::Undefined),
	}
}

/// Signal a null result through the host's null-return protocol.
///
/// # Safety
/// `call` must point at the live per-call state of the current invocation.
pub unsafe fn signal_null(call: *mut CallInfoFFI) -> DatumFFI {
	unsafe { (*call).result_is_null = true };
	DatumFFI::null()
}

/// Encode a native result into the host's output representation.
///
/// Variable-length payloads are copied into a host-owned buffer obtained
/// through the call's result allocator; the library keeps no ownership of
/// the result. A null return from the allocator is an allocation failure,
/// same as local exhaustion.
///
/// # Safety
/// `call` must point at the live per-call state of the current invocation.
pub unsafe fn encode(value: &Value, call: *mut CallInfoFFI) -> Result<DatumFFI> {
	match value {
		Value::Undefined => Ok(unsafe { signal_null(call) }),
		Value::Boolean(v) => Ok(DatumFFI::from_bits(TypeCodeFFI::Bool, *v as u64)),
		Value::Float4(v) => Ok(DatumFFI::from_bits(TypeCodeFFI::Float4, v.to_bits() as u64)),
		Value::Float8(v) => Ok(DatumFFI::from_bits(TypeCodeFFI::Float8, v.to_bits())),
		Value::Int1(v) => Ok(DatumFFI::from_bits(TypeCodeFFI::Int1, *v as u64)),
		Value::Int2(v) => Ok(DatumFFI::from_bits(TypeCodeFFI::Int2, *v as u64)),
		Value::Int4(v) => Ok(DatumFFI::from_bits(TypeCodeFFI::Int4, *v as u64)),
		Value::Int8(v) => Ok(DatumFFI::from_bits(TypeCodeFFI::Int8, *v as u64)),
		Value::Utf8(v) => unsafe { encode_buffer(TypeCodeFFI::Utf8, v.as_bytes(), call) },
		Value::Blob(v) => unsafe { encode_buffer(TypeCodeFFI::Blob, v, call) },
	}
}

unsafe fn encode_buffer(type_code: TypeCodeFFI, bytes: &[u8], call: *mut CallInfoFFI) -> Result<DatumFFI> {
	if bytes.is_empty() {
		return Ok(DatumFFI::from_buffer(type_code, BufferFFI::empty()));
	}
	let alloc_result = unsafe { (*call).alloc_result };
	let ptr = alloc_result(call, bytes.len());
	if ptr.is_null() {
		return Err(error!(allocation_failed()));
	}
	unsafe { std::ptr::copy_nonoverlapping(bytes.as_ptr(), ptr, bytes.len()) };
	Ok(DatumFFI::from_buffer(type_code, BufferFFI {
		ptr,
		len: bytes.len(),
	}))
}
