// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

/*!
# Judge Serialization

Converts argumentation graphs between the in-memory model of
`judge-structures` and the three interchange formats of the judge editor:

- **JSON** (`json`) - lossless text interchange, compact or indented
- **Python code** (`python`) - a program reconstructing the graph against the
  AFDM runtime library, optionally carrying an embedded JSON snapshot between
  fixed marker lines for later round-trip import
- **PNG** (`png`) - a rendered picture of the graph with the compact JSON
  snapshot embedded as a `tEXt` chunk of the container

Import dispatch over declared media types lives in `media_type`. All import
functions return a complete fresh graph or an error; they never touch live
editor state, so a failed import leaves the previous graph intact by
construction.

Copyright 2025 Neuraville Inc.
Licensed under the Apache License, Version 2.0
*/

/// Crate version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

mod error;
pub mod json;
pub mod media_type;
pub mod png;
pub mod png_chunks;
pub mod python;
pub mod render;

pub use error::{SerializationError, SerializationResult};
pub use json::{export_json, import_json};
pub use media_type::{import_graph, import_graph_for_mime, MediaType};
pub use png::{export_png, import_png, DEFAULT_IMAGE_HEIGHT, DEFAULT_IMAGE_WIDTH, PNG_CHUNK_KEYWORD};
pub use python::{export_python, import_python, BEGIN_GRAPH_MARKER, END_GRAPH_MARKER};
pub use render::{fit_transform_for_bounds, nodes_bounds, FitTransform, NodeBounds, RenderSurface};
