// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// The type tag of a [`Value`](super::Value)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Type {
	Boolean,
	Float4,
	Float8,
	Int1,
	Int2,
	Int4,
	Int8,
	Utf8,
	Blob,
	Undefined,
}

impl Display for Type {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		let name = match self {
			Type::Boolean => "BOOLEAN",
			Type::Float4 => "FLOAT4",
			Type::Float8 => "FLOAT8",
			Type::Int1 => "INT1",
			Type::Int2 => "INT2",
			Type::Int4 => "INT4",
			Type::Int8 => "INT8",
			Type::Utf8 => "UTF8",
			Type::Blob => "BLOB",
			Type::Undefined => "UNDEFINED",
		};
		f.write_str(name)
	}
}
