// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

//! Calling-convention bridge between a host database and native UDFs.
//!
//! The host invokes one exported symbol per registered function; every
//! export funnels through the same guarded trampoline, which
//! - exposes the host's raw arguments as type-erased values, lazily,
//! - invokes the registered native function,
//! - converts the result back into a host datum (or signals null), and
//! - translates any failure into exactly one classified report through the
//!   host's error channel, a non-local exit that never returns.
//!
//! # Registration
//!
//! Registration is code generation, not runtime lookup: [`udf_library!`]
//! generates one entry point per (symbol, function) pair, each calling the
//! trampoline with its own descriptor, plus a frozen [`Registry`] built once
//! before any call is dispatched.
//!
//! ```ignore
//! use reifydb_udf_bridge::udf_library;
//!
//! udf_library! {
//!     add => math::add,
//!     concat => text::concat,
//! }
//! ```

pub mod context;
mod export;
pub mod marshal;
pub mod registry;
pub mod trampoline;

pub use context::UdfContext;
pub use registry::{FunctionDescriptor, NativeFn, Registry};

// Re-exported for the udf_library! macro expansion
#[doc(hidden)]
pub use once_cell;
#[doc(hidden)]
pub use paste::paste;
#[doc(hidden)]
pub use reifydb_udf_abi as abi;
