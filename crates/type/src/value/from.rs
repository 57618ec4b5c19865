// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use crate::value::{Type, Value};

/// Typed retrieval out of a [`Value`].
///
/// Integer sources widen losslessly into larger targets; narrowing never
/// happens implicitly. `TYPE` names the canonical target type for the
/// mismatch diagnostic.
pub trait FromValue: Sized {
	const TYPE: Type;

	fn from_value(value: &Value) -> Option<Self>;
}

impl FromValue for bool {
	const TYPE: Type = Type::Boolean;

	fn from_value(value: &Value) -> Option<Self> {
		match value {
			Value::Boolean(v) => Some(*v),
			_ => None,
		}
	}
}

impl FromValue for i8 {
	const TYPE: Type = Type::Int1;

	fn from_value(value: &Value) -> Option<Self> {
		match value {
			Value::Int1(v) => Some(*v),
			_ => None,
		}
	}
}

impl FromValue for i16 {
	const TYPE: Type = Type::Int2;

	fn from_value(value: &Value) -> Option<Self> {
		match value {
			Value::Int1(v) => Some(*v as i16),
			Value::Int2(v) => Some(*v),
			_ => None,
		}
	}
}

impl FromValue for i32 {
	const TYPE: Type = Type::Int4;

	fn from_value(value: &Value) -> Option<Self> {
		match value {
			Value::Int1(v) => Some(*v as i32),
			Value::Int2(v) => Some(*v as i32),
			Value::Int4(v) => Some(*v),
			_ => None,
		}
	}
}

impl FromValue for i64 {
	const TYPE: Type = Type::Int8;

	fn from_value(value: &Value) -> Option<Self> {
		match value {
			Value::Int1(v) => Some(*v as i64),
			Value::Int2(v) => Some(*v as i64),
			Value::Int4(v) => Some(*v as i64),
			Value::Int8(v) => Some(*v),
			_ => None,
		}
	}
}

impl FromValue for f32 {
	const TYPE: Type = Type::Float4;

	fn from_value(value: &Value) -> Option<Self> {
		match value {
			Value::Float4(v) => Some(*v),
			_ => None,
		}
	}
}

impl FromValue for f64 {
	const TYPE: Type = Type::Float8;

	fn from_value(value: &Value) -> Option<Self> {
		match value {
			Value::Float4(v) => Some(*v as f64),
			Value::Float8(v) => Some(*v),
			_ => None,
		}
	}
}

impl FromValue for String {
	const TYPE: Type = Type::Utf8;

	fn from_value(value: &Value) -> Option<Self> {
		match value {
			Value::Utf8(v) => Some(v.clone()),
			_ => None,
		}
	}
}

impl FromValue for Vec<u8> {
	const TYPE: Type = Type::Blob;

	fn from_value(value: &Value) -> Option<Self> {
		match value {
			Value::Blob(v) => Some(v.clone()),
			_ => None,
		}
	}
}
