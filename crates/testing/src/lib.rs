// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

//! In-process mock host for UDF libraries.
//!
//! [`MockCall`] stands in for the database side of the call boundary: it owns
//! the per-call state, an argument list with backing buffers, a result arena
//! behind the call's allocator, and an error channel that captures the
//! report instead of longjmp-ing. Tests drive real exported entry points
//! through [`MockCall::invoke`] and observe the outcome as plain data.

mod mock;

pub use mock::{CallOutcome, HostError, MockCall, MockCallBuilder};
