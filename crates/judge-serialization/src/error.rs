// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

/*!
Codec error types.

Exports are expected to succeed for any well-formed graph; the failure
surface is the import path (malformed payloads, missing markers, missing
chunks) plus the image codec's external collaborators.
*/

use thiserror::Error;

/// Errors raised by the serialization codecs.
#[derive(Error, Debug)]
pub enum SerializationError {
    /// Malformed JSON, or Python code without the embedded-graph markers.
    #[error("Parse error: {0}")]
    Parse(String),

    /// The PNG container holds no `tEXt` chunk with the judge keyword, e.g.
    /// an externally-produced picture was dropped onto the editor.
    #[error("Could not find the argumentation graph in the PNG file")]
    GraphChunkNotFound,

    /// Import dispatch found no handler for the declared media type.
    #[error("Unsupported media type: {0}")]
    UnsupportedMediaType(String),

    /// The bytes are not a valid PNG chunk container.
    #[error("Invalid PNG container: {0}")]
    InvalidPng(String),

    /// The external render surface failed to rasterize the viewport.
    #[error("Render surface error: {0}")]
    Render(String),

    /// Re-encoding a payload (PNG or JSON) failed.
    #[error("Failed to encode: {0}")]
    Encode(String),
}

/// Result type for codec operations.
pub type SerializationResult<T> = Result<T, SerializationError>;
