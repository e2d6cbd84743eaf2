// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

/*!
Render surface boundary for the image codec.

The editor's drawing surface is an external collaborator: the image codec
only needs it to rasterize the current viewport at a given size and
transform. The fit transform (translate + clamped scale) is computed here
from the node bounds so that every node lands inside the exported picture.
*/

use image::RgbaImage;
use judge_structures::Argument;

use crate::SerializationResult;

/// Horizontal extent reserved for one rendered node when computing bounds.
/// Layout-only tunable, no protocol meaning.
const NODE_EXTENT_WIDTH: f64 = 150.0;
/// Vertical extent reserved for one rendered node.
const NODE_EXTENT_HEIGHT: f64 = 40.0;

/// Axis-aligned bounding rectangle of a set of nodes.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct NodeBounds {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Viewport transform applied before rasterizing: translate then scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FitTransform {
    pub x: f64,
    pub y: f64,
    pub zoom: f64,
}

/// The external drawing surface the image codec renders through.
///
/// Implementations rasterize the current viewport into an RGBA buffer of
/// exactly `width` x `height` pixels with the given transform applied.
/// Rendering is the only codec step touching live editor state; everything
/// around it is a pure function of the graph snapshot.
pub trait RenderSurface {
    fn render(
        &self,
        width: u32,
        height: u32,
        transform: &FitTransform,
    ) -> SerializationResult<RgbaImage>;
}

/// Computes the bounding rectangle of the given nodes, reserving a fixed
/// extent around each node position. Empty input yields a zero rectangle at
/// the origin.
pub fn nodes_bounds(nodes: &[Argument]) -> NodeBounds {
    if nodes.is_empty() {
        return NodeBounds::default();
    }

    let mut min_x = f64::INFINITY;
    let mut min_y = f64::INFINITY;
    let mut max_x = f64::NEG_INFINITY;
    let mut max_y = f64::NEG_INFINITY;
    for node in nodes {
        min_x = min_x.min(node.position.x);
        min_y = min_y.min(node.position.y);
        max_x = max_x.max(node.position.x + NODE_EXTENT_WIDTH);
        max_y = max_y.max(node.position.y + NODE_EXTENT_HEIGHT);
    }

    NodeBounds {
        x: min_x,
        y: min_y,
        width: max_x - min_x,
        height: max_y - min_y,
    }
}

/// Computes the transform that centers `bounds` in a `width` x `height`
/// viewport, scaled so the whole rectangle is visible and clamped to the
/// given zoom range.
pub fn fit_transform_for_bounds(
    bounds: NodeBounds,
    width: u32,
    height: u32,
    min_zoom: f64,
    max_zoom: f64,
) -> FitTransform {
    let width = width as f64;
    let height = height as f64;

    // Degenerate bounds (no nodes, or all nodes on one point) carry no
    // scale information; center them at native zoom.
    if bounds.width <= 0.0 || bounds.height <= 0.0 {
        return FitTransform {
            x: width / 2.0 - bounds.x * max_zoom,
            y: height / 2.0 - bounds.y * max_zoom,
            zoom: max_zoom,
        };
    }

    let zoom = (width / bounds.width)
        .min(height / bounds.height)
        .clamp(min_zoom, max_zoom);
    FitTransform {
        x: width / 2.0 - (bounds.x + bounds.width / 2.0) * zoom,
        y: height / 2.0 - (bounds.y + bounds.height / 2.0) * zoom,
        zoom,
    }
}
