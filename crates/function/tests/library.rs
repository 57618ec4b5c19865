// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

//! Host-side tests of the exported library surface.

use reifydb_udf_abi::{BufferFFI, ErrorCodeFFI, LIBRARY_MAGIC, TypeCodeFFI};
use reifydb_udf_function::{UDF_REGISTRY, abs, add, concat, udf_library_magic};
use reifydb_udf_testing::{CallOutcome, MockCallBuilder};
use reifydb_udf_type::Value;

#[test]
fn test_add_end_to_end() {
	let mut mock = MockCallBuilder::new("add").arg_int8(1).arg_int8(2).build();
	assert_eq!(mock.invoke(add).unwrap_value(), Value::int8(3i64));
}

#[test]
fn test_add_null_propagation() {
	let mut mock = MockCallBuilder::new("add").arg_undefined().arg_int8(2).build();
	assert_eq!(mock.invoke(add), CallOutcome::Null);
}

#[test]
fn test_add_overflow_reports_specific_message() {
	let mut mock = MockCallBuilder::new("add").arg_int8(i64::MAX).arg_int8(1).build();
	let error = mock.invoke(add).unwrap_error();
	assert_eq!(error.code, ErrorCodeFFI::InvalidArgument);
	assert!(error.message.starts_with("Function \"add\": "));
	assert!(error.message.contains("8-byte integer"));
}

#[test]
fn test_add_undecodable_argument() {
	let bytes = [0xffu8, 0xfe];
	let mut mock = MockCallBuilder::new("add")
		.arg_raw(TypeCodeFFI::Utf8, 0, BufferFFI {
			ptr: bytes.as_ptr(),
			len: bytes.len(),
		})
		.arg_int8(2)
		.build();
	let error = mock.invoke(add).unwrap_error();
	assert_eq!(error.code, ErrorCodeFFI::InvalidArgument);
	assert!(error.message.contains("add"));
}

#[test]
fn test_abs_end_to_end() {
	let mut mock = MockCallBuilder::new("abs").arg_int8(-5).build();
	assert_eq!(mock.invoke(abs).unwrap_value(), Value::int8(5i64));
}

#[test]
fn test_concat_end_to_end() {
	let mut mock = MockCallBuilder::new("concat").arg_utf8("re").arg_utf8("ify").arg_utf8("db").build();
	assert_eq!(mock.invoke(concat).unwrap_value(), Value::utf8("reifydb"));
}

#[test]
fn test_magic_handshake() {
	assert_eq!(udf_library_magic(), LIBRARY_MAGIC);
}

#[test]
fn test_registry_lists_exports() {
	let names: Vec<_> = UDF_REGISTRY.names().collect();
	assert_eq!(names, vec!["abs", "add", "concat"]);
}
