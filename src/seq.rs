// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

pub mod label;
pub mod lines;
pub mod relabel;
