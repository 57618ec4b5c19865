// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::{
	ffi::c_void,
	panic::{AssertUnwindSafe, catch_unwind, panic_any, resume_unwind},
};

use reifydb_udf_abi::{BufferFFI, CallInfoFFI, DatumFFI, ErrorCodeFFI, TypeCodeFFI, UdfEntryFnFFI};
use reifydb_udf_bridge::marshal;
use reifydb_udf_type::Value;
use thiserror::Error;

/// A report captured from the mock host's error channel.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{code:?}: {message}")]
pub struct HostError {
	pub code: ErrorCodeFFI,
	pub message: String,
}

/// What a driven call produced, as seen from the host side.
#[derive(Debug, PartialEq)]
pub enum CallOutcome {
	Value(Value),
	Null,
	Error(HostError),
}

impl CallOutcome {
	#[track_caller]
	pub fn unwrap_value(self) -> Value {
		match self {
			CallOutcome::Value(value) => value,
			other => panic!("expected a value, got {other:?}"),
		}
	}

	#[track_caller]
	pub fn unwrap_error(self) -> HostError {
		match self {
			CallOutcome::Error(error) => error,
			other => panic!("expected an error report, got {other:?}"),
		}
	}
}

/// Builder for the argument list of a mock call.
pub struct MockCallBuilder {
	symbol: String,
	arguments: Vec<DatumFFI>,
	buffers: Vec<Vec<u8>>,
	fail_alloc: bool,
}

impl MockCallBuilder {
	pub fn new(symbol: impl Into<String>) -> Self {
		Self {
			symbol: symbol.into(),
			arguments: Vec::new(),
			buffers: Vec::new(),
			fail_alloc: false,
		}
	}

	/// Make the call's result allocator refuse every request
	pub fn failing_allocator(mut self) -> Self {
		self.fail_alloc = true;
		self
	}

	pub fn arg_bool(self, value: bool) -> Self {
		self.arg_raw(TypeCodeFFI::Bool, value as u64, BufferFFI::empty())
	}

	pub fn arg_int1(self, value: i8) -> Self {
		self.arg_raw(TypeCodeFFI::Int1, value as u64, BufferFFI::empty())
	}

	pub fn arg_int2(self, value: i16) -> Self {
		self.arg_raw(TypeCodeFFI::Int2, value as u64, BufferFFI::empty())
	}

	pub fn arg_int4(self, value: i32) -> Self {
		self.arg_raw(TypeCodeFFI::Int4, value as u64, BufferFFI::empty())
	}

	pub fn arg_int8(self, value: i64) -> Self {
		self.arg_raw(TypeCodeFFI::Int8, value as u64, BufferFFI::empty())
	}

	pub fn arg_float4(self, value: f32) -> Self {
		self.arg_raw(TypeCodeFFI::Float4, value.to_bits() as u64, BufferFFI::empty())
	}

	pub fn arg_float8(self, value: f64) -> Self {
		self.arg_raw(TypeCodeFFI::Float8, value.to_bits(), BufferFFI::empty())
	}

	pub fn arg_utf8(self, value: impl Into<String>) -> Self {
		self.arg_bytes(TypeCodeFFI::Utf8, value.into().into_bytes())
	}

	pub fn arg_blob(self, value: impl Into<Vec<u8>>) -> Self {
		self.arg_bytes(TypeCodeFFI::Blob, value.into())
	}

	pub fn arg_undefined(mut self) -> Self {
		self.arguments.push(DatumFFI::null());
		self
	}

	/// Push a datum verbatim, for malformed or host-owned payloads
	pub fn arg_raw(mut self, type_code: TypeCodeFFI, value: u64, data: BufferFFI) -> Self {
		self.arguments.push(DatumFFI {
			type_code,
			value,
			data,
		});
		self
	}

	fn arg_bytes(mut self, type_code: TypeCodeFFI, bytes: Vec<u8>) -> Self {
		// inner allocations keep their address when the outer vec grows
		self.buffers.push(bytes);
		let backing = self.buffers.last().unwrap();
		self.arguments.push(DatumFFI::from_buffer(type_code, BufferFFI {
			ptr: backing.as_ptr(),
			len: backing.len(),
		}));
		self
	}

	pub fn build(self) -> MockCall {
		MockCall {
			symbol: self.symbol,
			arguments: self.arguments,
			_buffers: self.buffers,
			arena: Vec::new(),
			fail_alloc: self.fail_alloc,
			info: None,
		}
	}
}

/// The host side of one call: per-call state plus the memory backing it.
///
/// Do not move a `MockCall` after taking [`call_info`](MockCall::call_info);
/// the per-call state holds pointers into it.
pub struct MockCall {
	symbol: String,
	arguments: Vec<DatumFFI>,
	_buffers: Vec<Vec<u8>>,
	arena: Vec<Vec<u8>>,
	fail_alloc: bool,
	info: Option<Box<CallInfoFFI>>,
}

impl MockCall {
	/// Assemble the per-call state and hand out a pointer to it.
	pub fn call_info(&mut self) -> *mut CallInfoFFI {
		let host_data = self as *mut MockCall as *mut c_void;
		let info = Box::new(CallInfoFFI {
			symbol: BufferFFI {
				ptr: self.symbol.as_ptr(),
				len: self.symbol.len(),
			},
			argument_count: self.arguments.len(),
			arguments: if self.arguments.is_empty() {
				std::ptr::null()
			} else {
				self.arguments.as_ptr()
			},
			result_is_null: false,
			report_error: mock_report,
			alloc_result: if self.fail_alloc {
				mock_alloc_fail
			} else {
				mock_alloc
			},
			host_data,
		});
		self.info = Some(info);
		&mut **self.info.as_mut().unwrap()
	}

	/// Drive an exported entry point and observe what the host would see.
	///
	/// A report through the error channel unwinds back here and becomes
	/// [`CallOutcome::Error`]; any other unwind is a test bug and is
	/// propagated.
	pub fn invoke(&mut self, entry: UdfEntryFnFFI) -> CallOutcome {
		let call = self.call_info();
		match catch_unwind(AssertUnwindSafe(|| entry(call))) {
			Ok(datum) => {
				if unsafe { (*call).result_is_null } {
					CallOutcome::Null
				} else {
					let value = unsafe { marshal::decode(&datum) }
						.unwrap_or_else(|err| panic!("undecodable result datum: {err}"));
					CallOutcome::Value(value)
				}
			}
			Err(payload) => match payload.downcast::<HostError>() {
				Ok(error) => CallOutcome::Error(*error),
				Err(payload) => resume_unwind(payload),
			},
		}
	}
}

/// Mock error channel: captures the report and unwinds instead of longjmp-ing.
extern "C-unwind" fn mock_report(
	_call: *mut CallInfoFFI,
	code: ErrorCodeFFI,
	message: *const u8,
	length: usize,
) -> ! {
	let bytes = unsafe { std::slice::from_raw_parts(message, length) };
	panic_any(HostError {
		code,
		message: String::from_utf8_lossy(bytes).into_owned(),
	})
}

/// Mock result allocator: hands out arena-backed buffers that live until the
/// call is dropped.
extern "C" fn mock_alloc(call: *mut CallInfoFFI, len: usize) -> *mut u8 {
	let mock = unsafe { &mut *((*call).host_data as *mut MockCall) };
	let mut buffer = vec![0u8; len];
	let ptr = buffer.as_mut_ptr();
	mock.arena.push(buffer);
	ptr
}

/// Allocator standing in for an exhausted host
extern "C" fn mock_alloc_fail(_call: *mut CallInfoFFI, _len: usize) -> *mut u8 {
	std::ptr::null_mut()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_builder_backs_variable_length_arguments() {
		let mut mock = MockCallBuilder::new("f").arg_utf8("hello").arg_blob(vec![1u8, 2, 3]).build();
		let call = mock.call_info();
		let arguments = unsafe { std::slice::from_raw_parts((*call).arguments, (*call).argument_count) };
		assert_eq!(arguments.len(), 2);
		assert_eq!(unsafe { marshal::decode(&arguments[0]) }.unwrap(), Value::utf8("hello"));
		assert_eq!(unsafe { marshal::decode(&arguments[1]) }.unwrap(), Value::blob(vec![1u8, 2, 3]));
	}

	#[test]
	fn test_arena_allocation() {
		let mut mock = MockCallBuilder::new("f").build();
		let call = mock.call_info();
		let ptr = mock_alloc(call, 16);
		assert!(!ptr.is_null());
		assert_eq!(mock.arena.len(), 1);
		assert_eq!(mock.arena[0].len(), 16);
	}

	#[test]
	fn test_failing_allocator() {
		let mut mock = MockCallBuilder::new("f").failing_allocator().build();
		let call = mock.call_info();
		let alloc_result = unsafe { (*call).alloc_result };
		assert!(alloc_result(call, 16).is_null());
		assert!(mock.arena.is_empty());
	}
}
