// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use crate::{error::Diagnostic, value::Type};

/// Typed retrieval was attempted with a mismatched type
pub fn type_mismatch(expected: Type, actual: Type) -> Diagnostic {
	Diagnostic {
		code: "VALUE_001".to_string(),
		message: format!("cannot retrieve value of type {} as {}", actual, expected),
		label: Some("type mismatch".to_string()),
		help: Some(format!("provide a value of type {}", expected)),
		notes: vec![],
		cause: None,
	}
}

/// Typed retrieval was attempted on an undefined value
pub fn undefined_retrieval(expected: Type) -> Diagnostic {
	Diagnostic {
		code: "VALUE_002".to_string(),
		message: format!("cannot retrieve {} from an undefined value", expected),
		label: Some("undefined value".to_string()),
		help: Some("check is_undefined() before retrieval or provide a defined value".to_string()),
		notes: vec![],
		cause: None,
	}
}
