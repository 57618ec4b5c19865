// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use crate::error::Diagnostic;

/// A text datum carried bytes that are not valid UTF-8
pub fn invalid_utf8_payload() -> Diagnostic {
	Diagnostic {
		code: "MARSHAL_001".to_string(),
		message: "text payload contains invalid UTF-8 bytes".to_string(),
		label: Some("invalid UTF-8".to_string()),
		help: Some("pass the payload as BLOB if it is not UTF-8 text".to_string()),
		notes: vec![],
		cause: None,
	}
}
