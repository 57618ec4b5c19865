// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use reifydb_udf_type::{AnyValue, Result};
use tracing::debug;

use crate::context::UdfContext;

/// Signature of a native function reachable through the bridge.
///
/// A pure mapping from invocation context (which exposes the call's
/// arguments as type-erased values) to a type-erased result. Stateless
/// across calls; the result may borrow from the context since it is encoded
/// before the context is torn down.
pub type NativeFn = for<'ctx, 'call> fn(&'ctx UdfContext<'call>) -> Result<AnyValue<'ctx>>;

/// The registered mapping from an exported symbol to the native function it
/// invokes. One descriptor per exported symbol, `'static`, referenced by the
/// registry and by the generated entry point.
pub struct FunctionDescriptor {
	pub name: &'static str,
	pub function: NativeFn,
}

/// Immutable symbol table of a UDF library.
///
/// Built exactly once before any call is dispatched and read-only for the
/// remainder of the process lifetime; no locking is needed because no
/// mutation occurs after construction. Generated entry points do not go
/// through [`resolve`](Registry::resolve) — each one carries its own
/// descriptor — so resolution over arbitrary strings exists only for host
/// introspection and tests.
pub struct Registry {
	entries: Vec<(&'static str, &'static FunctionDescriptor)>,
}

impl Registry {
	/// Freeze a set of descriptors into an immutable table.
	///
	/// Name uniqueness is a build-time invariant: `udf_library!` emits one
	/// exported symbol per name, so duplicates fail to link. The assert
	/// below only guards hand-built tables in tests.
	pub fn freeze(descriptors: &[&'static FunctionDescriptor]) -> Self {
		let mut entries: Vec<_> = descriptors.iter().map(|descriptor| (descriptor.name, *descriptor)).collect();
		entries.sort_by_key(|(name, _)| *name);
		debug_assert!(
			entries.windows(2).all(|pair| pair[0].0 != pair[1].0),
			"duplicate exported symbol in registry"
		);
		debug!(functions = entries.len(), "udf registry frozen");
		Self {
			entries,
		}
	}

	pub fn resolve(&self, name: &str) -> Option<&'static FunctionDescriptor> {
		self.entries
			.binary_search_by_key(&name, |(entry, _)| *entry)
			.ok()
			.map(|index| self.entries[index].1)
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
		self.entries.iter().map(|(name, _)| *name)
	}
}

#[cfg(test)]
mod tests {
	use reifydb_udf_type::Value;

	use super::*;

	fn one<'a>(_ctx: &'a UdfContext<'_>) -> Result<AnyValue<'a>> {
		Ok(AnyValue::owned(Value::int8(1i64)))
	}

	fn two<'a>(_ctx: &'a UdfContext<'_>) -> Result<AnyValue<'a>> {
		Ok(AnyValue::owned(Value::int8(2i64)))
	}

	static ONE: FunctionDescriptor = FunctionDescriptor {
		name: "one",
		function: one,
	};

	static TWO: FunctionDescriptor = FunctionDescriptor {
		name: "two",
		function: two,
	};

	#[test]
	fn test_resolve() {
		let registry = Registry::freeze(&[&TWO, &ONE]);
		assert_eq!(registry.len(), 2);
		assert_eq!(registry.resolve("one").unwrap().name, "one");
		assert_eq!(registry.resolve("two").unwrap().name, "two");
		assert!(registry.resolve("three").is_none());
	}

	#[test]
	fn test_descriptors_are_independent() {
		let registry = Registry::freeze(&[&ONE, &TWO]);
		let one = registry.resolve("one").unwrap();
		let two = registry.resolve("two").unwrap();
		assert!(!std::ptr::eq(one, two));
		assert_ne!(one.function as usize, two.function as usize);
	}

	#[test]
	fn test_names_sorted() {
		let registry = Registry::freeze(&[&TWO, &ONE]);
		let names: Vec<_> = registry.names().collect();
		assert_eq!(names, vec!["one", "two"]);
	}
}
