// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

/// Declare the exported surface of a UDF library.
///
/// For every `symbol => function` pair this generates a `'static` descriptor
/// and an `extern "C-unwind"` entry point named `symbol` that routes through
/// [`trampoline::call`](crate::trampoline::call). It also emits
/// `UDF_DESCRIPTORS`, a lazily frozen `UDF_REGISTRY` over them, and the
/// `udf_library_magic` export the host probes before dispatching any call.
///
/// Invoke it exactly once per library, at the crate root, after the modules
/// holding the native functions.
#[macro_export]
macro_rules! udf_library {
	($($symbol:ident => $function:path),+ $(,)?) => {
		$crate::paste! {
			$(
				#[doc(hidden)]
				static [<DESCRIPTOR_ $symbol:upper>]: $crate::FunctionDescriptor =
					$crate::FunctionDescriptor {
						name: stringify!($symbol),
						function: $function,
					};

				#[unsafe(no_mangle)]
				pub extern "C-unwind" fn $symbol(
					call: *mut $crate::abi::CallInfoFFI,
				) -> $crate::abi::DatumFFI {
					$crate::trampoline::call(&[<DESCRIPTOR_ $symbol:upper>], call)
				}
			)+

			#[doc(hidden)]
			pub static UDF_DESCRIPTORS: &[&$crate::FunctionDescriptor] =
				&[$(&[<DESCRIPTOR_ $symbol:upper>]),+];

			pub static UDF_REGISTRY: $crate::once_cell::sync::Lazy<$crate::Registry> =
				$crate::once_cell::sync::Lazy::new(|| {
					$crate::Registry::freeze(UDF_DESCRIPTORS)
				});

			/// Version handshake probed by the host at library load time
			#[unsafe(no_mangle)]
			pub extern "C" fn udf_library_magic() -> u32 {
				$crate::abi::LIBRARY_MAGIC
			}
		}
	};
}
