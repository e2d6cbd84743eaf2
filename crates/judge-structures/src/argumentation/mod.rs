// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Argumentation graph model: arguments (nodes), attacks (edges) and the
//! graph value holding both sets.

mod argument;
mod attack;
mod graph;

pub use argument::{Argument, Decision, Position};
pub use attack::Attack;
pub use graph::{duplicate_name, ArgumentationGraph, DUPLICATE_BASE_NAME};
