// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use reifydb_udf_bridge::UdfContext;
use reifydb_udf_type::{AnyValue, Result, Value, diagnostic::bridge::execution_failed, return_error};

/// 64-bit integer addition with overflow detection.
///
/// An undefined operand makes the result undefined.
pub fn add<'a>(ctx: &'a UdfContext<'_>) -> Result<AnyValue<'a>> {
	let left = ctx.argument(0)?;
	let right = ctx.argument(1)?;
	if left.is_undefined() || right.is_undefined() {
		return Ok(AnyValue::undefined());
	}
	let left = left.try_as::<i64>()?;
	let right = right.try_as::<i64>()?;
	match left.checked_add(right) {
		Some(sum) => Ok(AnyValue::owned(Value::int8(sum))),
		None => {
			ctx.set_last_diagnostic(format!("{left} + {right} does not fit into an 8-byte integer"));
			return_error!(execution_failed(ctx.symbol(), "integer overflow"))
		}
	}
}

/// Absolute value of a 64-bit integer.
pub fn abs<'a>(ctx: &'a UdfContext<'_>) -> Result<AnyValue<'a>> {
	let operand = ctx.argument(0)?;
	if operand.is_undefined() {
		return Ok(AnyValue::undefined());
	}
	let operand = operand.try_as::<i64>()?;
	match operand.checked_abs() {
		Some(result) => Ok(AnyValue::owned(Value::int8(result))),
		None => {
			ctx.set_last_diagnostic(format!("|{operand}| does not fit into an 8-byte integer"));
			return_error!(execution_failed(ctx.symbol(), "integer overflow"))
		}
	}
}

#[cfg(test)]
mod tests {
	use reifydb_udf_testing::MockCallBuilder;

	use super::*;

	#[test]
	fn test_add() {
		let mut mock = MockCallBuilder::new("add").arg_int8(40).arg_int8(2).build();
		let call = mock.call_info();
		let ctx = unsafe { UdfContext::new(&*call) };

		let result = add(&ctx).unwrap();
		assert_eq!(result.try_as::<i64>().unwrap(), 42);
	}

	#[test]
	fn test_add_undefined_operand() {
		let mut mock = MockCallBuilder::new("add").arg_int8(1).arg_undefined().build();
		let call = mock.call_info();
		let ctx = unsafe { UdfContext::new(&*call) };

		assert!(add(&ctx).unwrap().is_undefined());
	}

	#[test]
	fn test_add_overflow() {
		let mut mock = MockCallBuilder::new("add").arg_int8(i64::MAX).arg_int8(1).build();
		let call = mock.call_info();
		let ctx = unsafe { UdfContext::new(&*call) };

		let err = add(&ctx).unwrap_err();
		assert_eq!(err.diagnostic().code, "BRIDGE_004");
		assert!(ctx.last_diagnostic().unwrap().contains("8-byte integer"));
	}

	#[test]
	fn test_abs() {
		let mut mock = MockCallBuilder::new("abs").arg_int8(-7).build();
		let call = mock.call_info();
		let ctx = unsafe { UdfContext::new(&*call) };

		assert_eq!(abs(&ctx).unwrap().try_as::<i64>().unwrap(), 7);
	}

	#[test]
	fn test_abs_min_overflows() {
		let mut mock = MockCallBuilder::new("abs").arg_int8(i64::MIN).build();
		let call = mock.call_info();
		let ctx = unsafe { UdfContext::new(&*call) };

		assert_eq!(abs(&ctx).unwrap_err().diagnostic().code, "BRIDGE_004");
	}
}
