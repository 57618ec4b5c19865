// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use crate::error::Diagnostic;

/// An argument index past the end of the call's argument list was requested
pub fn argument_out_of_range(symbol: &str, index: usize, count: usize) -> Diagnostic {
	Diagnostic {
		code: "BRIDGE_001".to_string(),
		message: format!("function {} has {} arguments, argument {} was requested", symbol, count, index + 1),
		label: Some("argument out of range".to_string()),
		help: Some("check the argument index against the function's declared arity".to_string()),
		notes: vec![],
		cause: None,
	}
}

/// A raw host argument could not be decoded into a value
pub fn argument_decode_failed(symbol: &str, index: usize, cause: Option<Diagnostic>) -> Diagnostic {
	Diagnostic {
		code: "BRIDGE_002".to_string(),
		message: format!("function {} argument {} could not be decoded", symbol, index + 1),
		label: Some("argument decode failed".to_string()),
		help: Some("check that the host passed a well-formed datum for this argument".to_string()),
		notes: vec![],
		cause: cause.map(Box::new),
	}
}

/// Memory allocation failed during the call, locally or in the host's
/// result allocator.
///
/// The message is fixed and never echoes the underlying failure; an
/// allocation failure carries no useful payload.
pub fn allocation_failed() -> Diagnostic {
	Diagnostic {
		code: "BRIDGE_003".to_string(),
		message: "Memory allocation failed. Typically, this indicates that ReifyDB limits the \
			  available memory to less than what is needed for this input."
			.to_string(),
		label: Some("out of memory".to_string()),
		help: None,
		notes: vec![],
		cause: None,
	}
}

/// Native function execution failed with a specific reason
pub fn execution_failed(symbol: &str, reason: impl Into<String>) -> Diagnostic {
	Diagnostic {
		code: "BRIDGE_004".to_string(),
		message: format!("function {} execution failed: {}", symbol, reason.into()),
		label: Some("execution failed".to_string()),
		help: Some("check function arguments and data".to_string()),
		notes: vec![],
		cause: None,
	}
}

/// Whether a diagnostic classifies as an allocation failure.
///
/// The trampoline reports these as `OutOfMemory` rather than
/// `InvalidArgument`.
pub fn is_allocation_failure(diagnostic: &Diagnostic) -> bool {
	diagnostic.code == "BRIDGE_003"
}
