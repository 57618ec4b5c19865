// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

//! C ABI definitions for native UDF libraries
//!
//! This crate provides the stable C ABI interface between a host database and
//! a native UDF library. It defines FFI-safe types for the per-call state the
//! host hands to each exported function, the datum representation arguments
//! and results travel in, and the error-reporting channel the host exposes.
//!
//! Everything here is plain data. Decoding, dispatch and error translation
//! live in `reifydb-udf-bridge`.

pub mod call;
pub mod constants;
pub mod data;

pub use call::{AllocResultFnFFI, CallInfoFFI, ErrorCodeFFI, ErrorReportFnFFI, UdfEntryFnFFI};
pub use constants::{LIBRARY_MAGIC, LibraryMagicFnFFI, MAX_ERROR_MESSAGE_BYTES};
pub use data::{BufferFFI, DatumFFI, TypeCodeFFI};
