// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use reifydb_udf_bridge::UdfContext;
use reifydb_udf_type::{AnyValue, Result, Value};

/// Concatenate all text arguments in order.
///
/// An undefined operand makes the result undefined.
pub fn concat<'a>(ctx: &'a UdfContext<'_>) -> Result<AnyValue<'a>> {
	let mut out = String::new();
	for index in 0..ctx.argument_count() {
		let part = ctx.argument(index)?;
		if part.is_undefined() {
			return Ok(AnyValue::undefined());
		}
		out.push_str(&part.try_as::<String>()?);
	}
	Ok(AnyValue::owned(Value::utf8(out)))
}

#[cfg(test)]
mod tests {
	use reifydb_udf_testing::MockCallBuilder;

	use super::*;

	#[test]
	fn test_concat() {
		let mut mock = MockCallBuilder::new("concat").arg_utf8("foo").arg_utf8("bar").arg_utf8("baz").build();
		let call = mock.call_info();
		let ctx = unsafe { UdfContext::new(&*call) };

		assert_eq!(concat(&ctx).unwrap().try_as::<String>().unwrap(), "foobarbaz");
	}

	#[test]
	fn test_concat_no_arguments() {
		let mut mock = MockCallBuilder::new("concat").build();
		let call = mock.call_info();
		let ctx = unsafe { UdfContext::new(&*call) };

		assert_eq!(concat(&ctx).unwrap().try_as::<String>().unwrap(), "");
	}

	#[test]
	fn test_concat_undefined_operand() {
		let mut mock = MockCallBuilder::new("concat").arg_utf8("foo").arg_undefined().build();
		let call = mock.call_info();
		let ctx = unsafe { UdfContext::new(&*call) };

		assert!(concat(&ctx).unwrap().is_undefined());
	}

	#[test]
	fn test_concat_rejects_non_text() {
		let mut mock = MockCallBuilder::new("concat").arg_int8(1).build();
		let call = mock.call_info();
		let ctx = unsafe { UdfContext::new(&*call) };

		assert_eq!(concat(&ctx).unwrap_err().diagnostic().code, "VALUE_001");
	}
}
