// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::{borrow::Cow, cell::RefCell};

use once_cell::unsync::OnceCell;
use reifydb_udf_abi::{CallInfoFFI, DatumFFI};
use reifydb_udf_type::{AnyValue, Result, Value, diagnostic::bridge, error, return_error};

use crate::marshal;

/// Per-call invocation context handed to a native function.
///
/// Wraps the host's per-call state without owning it; the context never
/// outlives the call it was constructed for. Arguments are exposed as
/// type-erased values and decoded at most once, on first access. Decoded
/// values are owned by the context, so argument retrieval hands out borrowed
/// containers.
pub struct UdfContext<'a> {
	symbol: Cow<'a, str>,
	arguments: &'a [DatumFFI],
	slots: Vec<OnceCell<Value>>,
	last_diagnostic: RefCell<Option<String>>,
}

impl<'a> UdfContext<'a> {
	/// Construct a context over the host's per-call state.
	///
	/// # Safety
	/// All pointers inside `call` must stay valid for `'a`. The symbol
	/// buffer does not have to be valid UTF-8; it is decoded lossily since
	/// it is used only to format error text.
	pub unsafe fn new(call: &'a CallInfoFFI) -> Self {
		let symbol = if call.symbol.is_empty() {
			Cow::Borrowed("")
		} else {
			let bytes = unsafe { std::slice::from_raw_parts(call.symbol.ptr, call.symbol.len) };
			String::from_utf8_lossy(bytes)
		};
		let arguments = if call.arguments.is_null() || call.argument_count == 0 {
			&[]
		} else {
			unsafe { std::slice::from_raw_parts(call.arguments, call.argument_count) }
		};
		Self {
			symbol,
			arguments,
			slots: (0..arguments.len()).map(|_| OnceCell::new()).collect(),
			last_diagnostic: RefCell::new(None),
		}
	}

	/// Name of the invoked symbol, used only for error text
	pub fn symbol(&self) -> &str {
		&self.symbol
	}

	pub fn argument_count(&self) -> usize {
		self.arguments.len()
	}

	/// Positional argument as a type-erased value.
	///
	/// The raw host datum is decoded on first access only; later accesses
	/// reuse the decoded value. A decode failure surfaces as a diagnostic
	/// error, never a crash.
	pub fn argument(&self, index: usize) -> Result<AnyValue<'_>> {
		let Some(slot) = self.slots.get(index) else {
			return_error!(bridge::argument_out_of_range(self.symbol(), index, self.arguments.len()));
		};
		let value = slot.get_or_try_init(|| {
			unsafe { marshal::decode(&self.arguments[index]) }.map_err(|err| {
				error!(bridge::argument_decode_failed(
					self.symbol(),
					index,
					Some(err.diagnostic())
				))
			})
		})?;
		Ok(AnyValue::borrowed(value))
	}

	/// Attach a specific, already-localized message to the eventual error
	/// report. The last write wins; the trampoline lets it override a more
	/// generic failure message caught higher up.
	pub fn set_last_diagnostic(&self, text: impl Into<String>) {
		*self.last_diagnostic.borrow_mut() = Some(text.into());
	}

	pub fn last_diagnostic(&self) -> Option<String> {
		self.last_diagnostic.borrow().clone()
	}
}
