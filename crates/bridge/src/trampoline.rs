// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

//! The guarded entry point every exported symbol funnels through.
//!
//! A call either returns a result datum normally (possibly after signalling
//! null) or leaves through the host's error channel with exactly one
//! classified report. Failures are never retried and no partial result is
//! ever returned. The channel performs a non-local exit, so the report is
//! built with only plain data live on the stack: everything with teardown
//! logic is dropped before the transfer.

use std::{
	any::Any,
	panic::{AssertUnwindSafe, catch_unwind},
};

use reifydb_udf_abi::{CallInfoFFI, DatumFFI, ErrorCodeFFI, MAX_ERROR_MESSAGE_BYTES};
use reifydb_udf_type::{Error, Result, diagnostic::bridge};
use tracing::warn;

use crate::{context::UdfContext, marshal, registry::FunctionDescriptor};

const UNRECOGNIZED_FAILURE: &str = "Unknown exception was raised.";

/// Run `descriptor` against the host's per-call state.
///
/// Called by the entry points `udf_library!` generates, each with its own
/// descriptor; no name resolution happens here.
pub fn call(descriptor: &'static FunctionDescriptor, call: *mut CallInfoFFI) -> DatumFFI {
	debug_assert!(!call.is_null());
	// Construction stays outside the main guard so the context's last
	// diagnostic survives an unwind, but it is guarded on its own: a
	// failure here has no context to classify against and is reported as
	// unrecognized.
	let ctx = match catch_unwind(AssertUnwindSafe(|| unsafe { UdfContext::new(&*call) })) {
		Ok(ctx) => ctx,
		Err(payload) => {
			drop(payload);
			report_construction_failure(call)
		}
	};
	match catch_unwind(AssertUnwindSafe(|| execute(descriptor, &ctx, call))) {
		Ok(Ok(datum)) => datum,
		Ok(Err(error)) => report_failure(ctx, call, Failure::Error(error)),
		Err(payload) => report_failure(ctx, call, Failure::Unwind(payload)),
	}
}

fn execute(descriptor: &FunctionDescriptor, ctx: &UdfContext<'_>, call: *mut CallInfoFFI) -> Result<DatumFFI> {
	let result = (descriptor.function)(ctx)?;
	match result.as_value() {
		None => Ok(unsafe { marshal::signal_null(call) }),
		Some(value) => unsafe { marshal::encode(value, call) },
	}
}

enum Failure {
	/// A diagnostic-carrying error returned by decode, execution or encode
	Error(Error),
	/// An unwind payload that escaped the native function
	Unwind(Box<dyn Any + Send>),
}

/// Classify a failure and choose the reported message.
///
/// Precedence: an allocation failure always reports the fixed out-of-memory
/// explanation; otherwise the context's last diagnostic overrides the
/// failure's own text, and an unrecognizable payload falls back to a generic
/// message.
fn classify(ctx: &UdfContext<'_>, failure: Failure) -> (ErrorCodeFFI, String) {
	match failure {
		Failure::Error(error) => {
			let diagnostic = error.diagnostic();
			if bridge::is_allocation_failure(&diagnostic) {
				(ErrorCodeFFI::OutOfMemory, diagnostic.message)
			} else {
				let message = ctx.last_diagnostic().unwrap_or(diagnostic.message);
				(ErrorCodeFFI::InvalidArgument, message)
			}
		}
		Failure::Unwind(payload) => {
			let own = payload
				.downcast_ref::<&'static str>()
				.map(|text| (*text).to_string())
				.or_else(|| payload.downcast_ref::<String>().cloned());
			let message = ctx.last_diagnostic().or(own).unwrap_or_else(|| UNRECOGNIZED_FAILURE.to_string());
			(ErrorCodeFFI::InvalidArgument, message)
		}
	}
}

fn report_failure(ctx: UdfContext<'_>, call: *mut CallInfoFFI, failure: Failure) -> ! {
	let (code, message) = classify(&ctx, failure);
	warn!(symbol = ctx.symbol(), code = ?code, "udf call failed");

	let mut report = [0u8; MAX_ERROR_MESSAGE_BYTES];
	let length = write_report(&mut report, ctx.symbol(), &message);
	let report_error = unsafe { (*call).report_error };

	drop(message);
	drop(ctx);

	// Only plain data is live here; the transfer never returns and nothing
	// after it runs.
	report_error(call, code, report.as_ptr(), length)
}

/// Failure before the context existed: no symbol, no diagnostic slot.
fn report_construction_failure(call: *mut CallInfoFFI) -> ! {
	warn!("udf call failed before context construction");

	let mut report = [0u8; MAX_ERROR_MESSAGE_BYTES];
	let length = write_report(&mut report, "", UNRECOGNIZED_FAILURE);
	let report_error = unsafe { (*call).report_error };

	report_error(call, ErrorCodeFFI::InvalidArgument, report.as_ptr(), length)
}

/// Format `Function "<symbol>": <message>` into a fixed buffer, truncating to
/// the byte budget with a guaranteed NUL terminator. Truncation is
/// byte-oriented, matching the host's report buffer semantics.
fn write_report(buffer: &mut [u8; MAX_ERROR_MESSAGE_BYTES], symbol: &str, message: &str) -> usize {
	let limit = buffer.len() - 1;
	let mut length = 0;
	'copy: for part in ["Function \"", symbol, "\": ", message] {
		for &byte in part.as_bytes() {
			if length == limit {
				break 'copy;
			}
			buffer[length] = byte;
			length += 1;
		}
	}
	buffer[length] = 0;
	length
}

#[cfg(test)]
mod tests {
	use reifydb_udf_testing::MockCallBuilder;
	use reifydb_udf_type::error;

	use super::*;

	fn prefix_len(symbol: &str) -> usize {
		"Function \"\": ".len() + symbol.len()
	}

	#[test]
	fn test_write_report_format() {
		let mut buffer = [0u8; MAX_ERROR_MESSAGE_BYTES];
		let length = write_report(&mut buffer, "add", "boom");
		assert_eq!(&buffer[..length], b"Function \"add\": boom");
		assert_eq!(buffer[length], 0);
	}

	#[test]
	fn test_write_report_without_symbol() {
		// shape of the report for failures preceding context construction
		let mut buffer = [0u8; MAX_ERROR_MESSAGE_BYTES];
		let length = write_report(&mut buffer, "", UNRECOGNIZED_FAILURE);
		assert_eq!(&buffer[..length], b"Function \"\": Unknown exception was raised.");
	}

	#[test]
	fn test_write_report_truncation() {
		// one byte below budget, exactly at budget, and far beyond it
		for padding in [0usize, 1, 1000] {
			let message = "x".repeat(MAX_ERROR_MESSAGE_BYTES - 1 - prefix_len("f") - 1 + padding);
			let mut buffer = [0u8; MAX_ERROR_MESSAGE_BYTES];
			let length = write_report(&mut buffer, "f", &message);
			assert!(length <= MAX_ERROR_MESSAGE_BYTES - 1);
			assert_eq!(buffer[length], 0);
			if padding == 0 {
				// fits with one byte to spare before the terminator slot
				assert_eq!(length, MAX_ERROR_MESSAGE_BYTES - 2);
			} else {
				assert_eq!(length, MAX_ERROR_MESSAGE_BYTES - 1);
			}
		}
	}

	#[test]
	fn test_classify_out_of_memory_ignores_context_diagnostic() {
		let mut mock = MockCallBuilder::new("f").build();
		let call = mock.call_info();
		let ctx = unsafe { UdfContext::new(&*call) };
		ctx.set_last_diagnostic("more specific");

		let (code, message) = classify(&ctx, Failure::Error(error!(bridge::allocation_failed())));
		assert_eq!(code, ErrorCodeFFI::OutOfMemory);
		assert!(message.starts_with("Memory allocation failed."));
	}

	#[test]
	fn test_classify_context_diagnostic_overrides_error_text() {
		let mut mock = MockCallBuilder::new("f").build();
		let call = mock.call_info();
		let ctx = unsafe { UdfContext::new(&*call) };
		ctx.set_last_diagnostic("M1");

		let (code, message) = classify(&ctx, Failure::Error(error!(bridge::execution_failed("f", "M2"))));
		assert_eq!(code, ErrorCodeFFI::InvalidArgument);
		assert_eq!(message, "M1");
	}

	#[test]
	fn test_classify_unwind_payloads() {
		let mut mock = MockCallBuilder::new("f").build();
		let call = mock.call_info();
		let ctx = unsafe { UdfContext::new(&*call) };

		let (_, message) = classify(&ctx, Failure::Unwind(Box::new("str payload")));
		assert_eq!(message, "str payload");

		let (_, message) = classify(&ctx, Failure::Unwind(Box::new(String::from("string payload"))));
		assert_eq!(message, "string payload");

		// opaque payload falls back to the generic message
		let (code, message) = classify(&ctx, Failure::Unwind(Box::new(42u32)));
		assert_eq!(code, ErrorCodeFFI::InvalidArgument);
		assert_eq!(message, UNRECOGNIZED_FAILURE);
	}
}
