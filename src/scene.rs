//! Scene model: freehand paths, stamped shapes, and the store that owns them.
//!
//! This module defines what is on the canvas (`DrawnPath`, `DrawnShape`,
//! `ShapeKind`) and the runtime store that owns all drawn content
//! (`SceneStore`). The store is the single writer: the input engine mutates
//! it, the renderer reads it through the slice accessors, and nothing else
//! touches the vectors. Content is append-only; the only destructive
//! operation is a full [`SceneStore::clear`].

#[cfg(test)]
#[path = "scene_test.rs"]
mod scene_test;

use serde::{Deserialize, Serialize};

use crate::consts::{CANVAS_HEIGHT, CANVAS_WIDTH};
use crate::geom::Point;

/// A freehand stroke: an ordered run of points with a stroke style.
///
/// Created on pointer-down with one point, grown one point per pointer-move,
/// and sealed by [`SceneStore::end_path`]. Rendered only once it has at least
/// two points.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DrawnPath {
    /// Points in drawing order.
    pub points: Vec<Point>,
    /// Stroke color as a CSS color string.
    pub color: String,
    /// Stroke width in pixels.
    pub width: f64,
    /// Whether this path is still accepting appended points.
    active: bool,
}

impl DrawnPath {
    /// True while the pointer is down and this path is accepting points.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }
}

/// Variant-specific sizing for a stamped shape.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", tag = "kind")]
pub enum ShapeKind {
    /// Axis-aligned rectangle anchored at its top-left corner.
    Rect { width: f64, height: f64 },
    /// Circle centered on the anchor.
    Circle { radius: f64 },
    /// Ten-vertex star centered on the anchor; `radius` is the outer radius.
    Star { radius: f64 },
}

/// A shape placed by a single stamp-tool click. Immutable after creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DrawnShape {
    /// Shape variant and size, fixed at creation time.
    pub kind: ShapeKind,
    /// Anchor x in surface pixels (top-left for rects, center otherwise).
    pub x: f64,
    /// Anchor y in surface pixels.
    pub y: f64,
    /// Fill color as a CSS color string.
    pub color: String,
}

/// In-memory store of everything the user has drawn.
///
/// Render order is fixed: grid, then paths, then shapes, each sequence in
/// insertion order — later elements draw over earlier ones.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SceneStore {
    paths: Vec<DrawnPath>,
    shapes: Vec<DrawnShape>,
    /// Whether the renderer composes the background grid.
    pub show_grid: bool,
    /// Surface width in pixels.
    pub width: f64,
    /// Surface height in pixels.
    pub height: f64,
}

impl SceneStore {
    /// Create an empty store for a surface of the given dimensions.
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            paths: Vec::new(),
            shapes: Vec::new(),
            show_grid: true,
            width,
            height,
        }
    }

    /// Begin a new active path with a single point.
    pub fn begin_path(&mut self, point: Point, color: String, width: f64) {
        self.paths.push(DrawnPath {
            points: vec![point],
            color,
            width,
            active: true,
        });
    }

    /// Append a point to the active path, if one exists. No-op otherwise.
    pub fn append_path_point(&mut self, point: Point) {
        if let Some(path) = self.paths.last_mut() {
            if path.active {
                path.points.push(point);
            }
        }
    }

    /// Seal the active path. Subsequent appends are ignored until a new
    /// path begins.
    pub fn end_path(&mut self) {
        if let Some(path) = self.paths.last_mut() {
            path.active = false;
        }
    }

    /// Append a stamped shape. Stamps are single-click placements, so the
    /// shape is complete as soon as it is added.
    pub fn add_shape(&mut self, kind: ShapeKind, anchor: Point, color: String) {
        self.shapes.push(DrawnShape {
            kind,
            x: anchor.x,
            y: anchor.y,
            color,
        });
    }

    /// Empty both sequences. Grid visibility and dimensions are render
    /// configuration and survive a clear.
    pub fn clear(&mut self) {
        self.paths.clear();
        self.shapes.clear();
    }

    /// All paths in insertion order.
    #[must_use]
    pub fn paths(&self) -> &[DrawnPath] {
        &self.paths
    }

    /// All shapes in insertion order.
    #[must_use]
    pub fn shapes(&self) -> &[DrawnShape] {
        &self.shapes
    }

    /// Total number of drawn elements (paths plus shapes).
    #[must_use]
    pub fn len(&self) -> usize {
        self.paths.len() + self.shapes.len()
    }

    /// Returns `true` if nothing has been drawn.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty() && self.shapes.is_empty()
    }
}

impl Default for SceneStore {
    fn default() -> Self {
        Self::new(CANVAS_WIDTH, CANVAS_HEIGHT)
    }
}
