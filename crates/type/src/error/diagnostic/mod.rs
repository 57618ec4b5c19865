// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

pub mod bridge;
pub mod marshal;
pub mod value;
