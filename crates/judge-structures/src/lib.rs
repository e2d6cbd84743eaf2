// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

/*!
# Judge Data Structures

The core crate for the judge argumentation editor. Defines the in-memory
representation of argumentation graphs:

- `Argument` - a node of the graph, representing a moral-reasoning premise
- `Attack` - a directed edge meaning "source argument undermines target"
- `ArgumentationGraph` - the two sets of nodes and edges, plus the identity
  rules (id allocation, duplicate naming) that the serialization codecs
  depend on

The graph is a plain value: the editor owns the live instance, the codecs in
`judge-serialization` receive snapshots or produce fresh replacements.

Copyright 2025 Neuraville Inc.
Licensed under the Apache License, Version 2.0
*/

/// Crate version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod argumentation;
pub mod random;

pub use argumentation::{
    duplicate_name, Argument, ArgumentationGraph, Attack, Decision, Position,
    DUPLICATE_BASE_NAME,
};
