// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

/*!
PNG codec for argumentation graphs.

The export renders the graph viewport through the external
[`RenderSurface`], encodes it as a PNG, and embeds the compact JSON snapshot
of the *data* graph as a `tEXt` chunk inserted right before the `IEND`
terminator. The picture is for humans; the chunk is what makes the file
importable again. The import never looks at pixels: it walks the chunk
list, finds the judge-tagged `tEXt` chunk and parses its JSON payload.
*/

use std::io::Cursor;

use image::{DynamicImage, ImageFormat};
use judge_structures::ArgumentationGraph;
use tracing::{debug, warn};

use crate::json::{export_json, import_json};
use crate::png_chunks::{decode_text_chunk, encode_chunks, encode_text_chunk, extract_chunks};
use crate::render::{fit_transform_for_bounds, nodes_bounds, RenderSurface};
use crate::{SerializationError, SerializationResult};

/// Keyword tagging the judge `tEXt` chunk inside exported pictures. Because
/// a PNG may carry arbitrary text chunks from other software, the import
/// selects ours by this exact keyword.
pub const PNG_CHUNK_KEYWORD: &str = "judge-argumentation-graph";

/// Default canvas size of exported pictures.
pub const DEFAULT_IMAGE_WIDTH: u32 = 1024;
pub const DEFAULT_IMAGE_HEIGHT: u32 = 768;

/// Zoom clamp for the fit transform: scale down as far as needed to show
/// every node, never scale up past native size.
const EXPORT_MIN_ZOOM: f64 = 0.05;
const EXPORT_MAX_ZOOM: f64 = 1.0;

/// Exports a graph as a PNG picture with the embedded JSON snapshot.
///
/// # Arguments
/// * `graph` - The data graph snapshot; this is what gets embedded and what
///   a later import recovers, regardless of how the picture looks.
/// * `surface` - The external drawing surface rendering the viewport.
/// * `width`, `height` - Canvas size in pixels (conventionally
///   [`DEFAULT_IMAGE_WIDTH`] x [`DEFAULT_IMAGE_HEIGHT`]).
pub fn export_png(
    graph: &ArgumentationGraph,
    surface: &dyn RenderSurface,
    width: u32,
    height: u32,
) -> SerializationResult<Vec<u8>> {
    let bounds = nodes_bounds(&graph.nodes);
    let transform =
        fit_transform_for_bounds(bounds, width, height, EXPORT_MIN_ZOOM, EXPORT_MAX_ZOOM);
    let rendered = surface.render(width, height, &transform)?;

    let mut png_bytes: Vec<u8> = Vec::new();
    DynamicImage::ImageRgba8(rendered)
        .write_to(&mut Cursor::new(&mut png_bytes), ImageFormat::Png)
        .map_err(|e| SerializationError::Encode(format!("Failed to encode PNG: {}", e)))?;

    let snapshot = export_json(graph, false)?;
    let graph_chunk = encode_text_chunk(PNG_CHUNK_KEYWORD, &snapshot)?;

    let mut chunks = extract_chunks(&png_bytes)?;
    // Insert right before the IEND terminator. extract_chunks guarantees the
    // terminator exists and is last, but locate it explicitly anyway instead
    // of trusting the position.
    let terminator = chunks
        .iter()
        .position(|chunk| chunk.is_terminator())
        .ok_or_else(|| {
            SerializationError::InvalidPng("Encoded stream has no IEND terminator".to_string())
        })?;
    chunks.insert(terminator, graph_chunk);
    debug!(
        nodes = graph.nodes.len(),
        edges = graph.edges.len(),
        snapshot_bytes = snapshot.len(),
        "embedded graph snapshot into PNG"
    );

    Ok(encode_chunks(&chunks))
}

/// Imports a graph from a PNG picture previously produced by [`export_png`].
///
/// Fails with [`SerializationError::GraphChunkNotFound`] when no `tEXt`
/// chunk carries the judge keyword - the case for any externally-produced
/// PNG. If several matching chunks exist (which this codec never produces),
/// the first one wins.
pub fn import_png(bytes: &[u8]) -> SerializationResult<ArgumentationGraph> {
    let chunks = extract_chunks(bytes)?;

    for chunk in chunks.iter().filter(|chunk| chunk.is_text()) {
        match decode_text_chunk(chunk) {
            Ok((keyword, text)) if keyword == PNG_CHUNK_KEYWORD => {
                return import_json(&text);
            }
            Ok(_) => {} // Some other software's text chunk.
            Err(e) => {
                warn!("skipping undecodable tEXt chunk: {}", e);
            }
        }
    }

    Err(SerializationError::GraphChunkNotFound)
}
