//! Scene building: turns the collection into flat, renderer-ready meshes.
//!
//! This is the contract a renderer consumes. It reads the collection in
//! render order and never mutates it. Vertex positions are converted from the
//! model's Y-down space into a Y-up viewport space (`height - y`), which is
//! what an orthographic camera with its origin at the bottom-left expects.
//! The z-index becomes mesh depth and the color is decoded to `0xRRGGBB`.

#[cfg(test)]
#[path = "scene_test.rs"]
mod scene_test;

use serde::Serialize;

use crate::consts::{DEFAULT_VIEWPORT_HEIGHT, DEFAULT_VIEWPORT_WIDTH};
use crate::doc::{ShapeCollection, ShapeType};
use crate::geom::{Bounds, Point};

/// Size of the drawing surface in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self { width: DEFAULT_VIEWPORT_WIDTH, height: DEFAULT_VIEWPORT_HEIGHT }
    }
}

impl Viewport {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Flip a model-space point into Y-up viewport space.
    #[must_use]
    pub fn to_screen(&self, p: Point) -> Point {
        Point::new(p.x, self.height - p.y)
    }

    fn bounds(&self) -> Bounds {
        Bounds { min: Point::new(0.0, 0.0), max: Point::new(self.width, self.height) }
    }
}

/// One filled outline ready for drawing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Mesh {
    /// Storage index of the source record in the collection.
    pub index: usize,
    pub shape_type: ShapeType,
    /// Packed `0xRRGGBB` fill.
    pub color: u32,
    /// Stacking depth, taken from the z-index.
    pub depth: i64,
    /// Outline in Y-up viewport space.
    pub vertices: Vec<Point>,
    /// Whether any part of the shape overlaps the viewport.
    pub visible: bool,
}

/// Build one mesh per record, bottom-most first.
#[must_use]
pub fn build_scene(shapes: &ShapeCollection, viewport: Viewport) -> Vec<Mesh> {
    let screen = viewport.bounds();
    shapes
        .render_indices()
        .into_iter()
        .filter_map(|index| {
            let record = shapes.get(index)?;
            let outline = record.outline();
            let visible = Bounds::of(&outline).is_some_and(|b| b.intersects(&screen));
            Some(Mesh {
                index,
                shape_type: record.shape_type(),
                color: record.color.to_int(),
                depth: record.z_index,
                vertices: outline.into_iter().map(|p| viewport.to_screen(p)).collect(),
                visible,
            })
        })
        .collect()
}
