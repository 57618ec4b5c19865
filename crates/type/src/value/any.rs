// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use crate::{
	error::{
		Result,
		diagnostic::value::{type_mismatch, undefined_retrieval},
	},
	value::{FromValue, Type, Value},
};

/// A type-erased value crossing the UDF boundary.
///
/// Either holds no value, owns one [`Value`], or references a [`Value`] whose
/// real owner is the invocation context or the host. The borrowed
/// construction path is statically distinguishable from the owning one: a
/// `Borrowed` instance can never free what it points at, and the borrow
/// checker pins its lifetime to the enclosing call.
#[derive(Debug, Clone, PartialEq)]
pub enum AnyValue<'a> {
	/// No value
	Undefined,
	/// The container owns the wrapped value
	Owned(Value),
	/// The wrapped value is owned elsewhere for the duration of the call
	Borrowed(&'a Value),
}

impl<'a> AnyValue<'a> {
	/// Create the "no value" container
	pub fn undefined() -> Self {
		AnyValue::Undefined
	}

	/// Wrap a value the container owns
	pub fn owned(value: Value) -> Self {
		match value {
			Value::Undefined => AnyValue::Undefined,
			value => AnyValue::Owned(value),
		}
	}

	/// Wrap a value owned by the invocation context or the host
	pub fn borrowed(value: &'a Value) -> Self {
		match value {
			Value::Undefined => AnyValue::Undefined,
			value => AnyValue::Borrowed(value),
		}
	}

	pub fn is_undefined(&self) -> bool {
		matches!(self, AnyValue::Undefined)
	}

	/// The wrapped value, if any
	pub fn as_value(&self) -> Option<&Value> {
		match self {
			AnyValue::Undefined => None,
			AnyValue::Owned(value) => Some(value),
			AnyValue::Borrowed(value) => Some(value),
		}
	}

	pub fn get_type(&self) -> Type {
		self.as_value().map(Value::get_type).unwrap_or(Type::Undefined)
	}

	/// Attempt retrieval as `T`.
	///
	/// Retrieval as a mismatched type fails with a type diagnostic; it never
	/// reinterprets memory.
	pub fn try_as<T: FromValue>(&self) -> Result<T> {
		match self.as_value() {
			None => Err(crate::error!(undefined_retrieval(T::TYPE))),
			Some(value) => T::from_value(value)
				.ok_or_else(|| crate::error!(type_mismatch(T::TYPE, value.get_type()))),
		}
	}

	/// Detach the container from whatever owns the wrapped value
	pub fn into_owned(self) -> Value {
		match self {
			AnyValue::Undefined => Value::Undefined,
			AnyValue::Owned(value) => value,
			AnyValue::Borrowed(value) => value.clone(),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_undefined() {
		let value = AnyValue::undefined();
		assert!(value.is_undefined());
		assert!(value.as_value().is_none());
		assert_eq!(value.get_type(), Type::Undefined);
	}

	#[test]
	fn test_owned_retrieval() {
		let value = AnyValue::owned(Value::int8(3i64));
		assert_eq!(value.try_as::<i64>().unwrap(), 3);
	}

	#[test]
	fn test_borrowed_retrieval() {
		let backing = Value::utf8("hello");
		let value = AnyValue::borrowed(&backing);
		assert_eq!(value.try_as::<String>().unwrap(), "hello");
		// the backing value is untouched
		assert_eq!(backing, Value::utf8("hello"));
	}

	#[test]
	fn test_mismatched_retrieval_fails_cleanly() {
		let value = AnyValue::owned(Value::utf8("not a number"));
		let err = value.try_as::<i64>().unwrap_err();
		assert_eq!(err.diagnostic(), type_mismatch(Type::Int8, Type::Utf8));
	}

	#[test]
	fn test_retrieval_from_undefined_fails() {
		let value = AnyValue::undefined();
		let err = value.try_as::<bool>().unwrap_err();
		assert_eq!(err.diagnostic(), undefined_retrieval(Type::Boolean));
	}

	#[test]
	fn test_into_owned_detaches() {
		let backing = Value::utf8("hello");
		let owned = AnyValue::borrowed(&backing).into_owned();
		drop(backing);
		assert_eq!(owned, Value::utf8("hello"));

		assert_eq!(AnyValue::owned(Value::int8(3i64)).into_owned(), Value::int8(3i64));
		assert_eq!(AnyValue::undefined().into_owned(), Value::Undefined);
	}

	#[test]
	fn test_wrapping_undefined_normalizes() {
		assert!(AnyValue::owned(Value::Undefined).is_undefined());
		assert!(AnyValue::borrowed(&Value::Undefined).is_undefined());
	}

	#[test]
	fn test_integer_widening() {
		let value = AnyValue::owned(Value::int2(7i16));
		assert_eq!(value.try_as::<i64>().unwrap(), 7);
		assert_eq!(value.try_as::<i16>().unwrap(), 7);
		// narrowing is a mismatch, not a silent truncation
		assert!(AnyValue::owned(Value::int8(1i64)).try_as::<i16>().is_err());
	}
}
