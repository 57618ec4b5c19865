// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

//! Native functions exported to the host.
//!
//! Built as a `cdylib`: every name on the left of `udf_library!` below is an
//! exported symbol the host can bind to, next to `udf_library_magic` for the
//! version handshake.

use reifydb_udf_bridge::udf_library;

pub mod math;
pub mod text;

udf_library! {
	add => math::add,
	abs => math::abs,
	concat => text::concat,
}
