// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

//! Value and error types shared by the UDF bridge and native functions.
//!
//! The central piece is [`AnyValue`], a type-erased container that either
//! holds no value or one [`Value`] of some concrete type, with an explicit
//! owned/borrowed distinction. Typed retrieval goes through
//! [`FromValue`] and fails with a diagnostic instead of corrupting memory.

pub mod error;
pub mod value;

pub use error::{Diagnostic, Error, IntoDiagnostic, Result, diagnostic};
pub use value::{AnyValue, FromValue, Type, Value};
