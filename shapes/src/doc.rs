//! Document model: shape records, their geometry, and the in-memory collection.
//!
//! This module defines what a drawing is made of (`ShapeRecord`, `Geometry`,
//! `ShapeType`) and the store that owns every record of the open drawing
//! (`ShapeCollection`).
//!
//! Records enter the collection from the parser (which replaces the whole
//! collection) or from interactive add (which appends one). Drags mutate
//! position fields in place through [`ShapeCollection::move_shape`]; size
//! and color never change after creation. Renderers read the collection via
//! [`ShapeCollection::render_order`], a fresh stable sort by z-index.

#[cfg(test)]
#[path = "doc_test.rs"]
mod doc_test;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::anchor;
use crate::color::Color;
use crate::geom::Point;

/// The type tag written in the first field of a shape definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShapeType {
    /// Axis-aligned box anchored at its top-left corner.
    Rectangle,
    /// Upward-pointing isosceles triangle inscribed in its box.
    Triangle,
    /// Closed outline of points relative to the shape origin.
    Polygon,
}

impl ShapeType {
    /// The exact name used in `.shapefile` text.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Rectangle => "Rectangle",
            Self::Triangle => "Triangle",
            Self::Polygon => "Polygon",
        }
    }

    /// Look up a type by its file name. Matching is case-sensitive.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "Rectangle" => Some(Self::Rectangle),
            "Triangle" => Some(Self::Triangle),
            "Polygon" => Some(Self::Polygon),
            _ => None,
        }
    }
}

impl fmt::Display for ShapeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A polygon vertex, stored as an offset from the owning shape's origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vertex {
    pub x: i64,
    pub y: i64,
}

impl Vertex {
    #[must_use]
    pub fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }
}

/// Per-type geometry of a shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Geometry {
    Rectangle { width: i64, height: i64 },
    /// Legacy single-size triangles are stored with `width == height`.
    Triangle { width: i64, height: i64 },
    Polygon { points: Vec<Vertex> },
}

impl Geometry {
    /// The type tag matching this geometry.
    #[must_use]
    pub fn shape_type(&self) -> ShapeType {
        match self {
            Self::Rectangle { .. } => ShapeType::Rectangle,
            Self::Triangle { .. } => ShapeType::Triangle,
            Self::Polygon { .. } => ShapeType::Polygon,
        }
    }

    /// Width and height of a boxed shape. Polygons have no stored size and report `(0, 0)`.
    #[must_use]
    pub fn size(&self) -> (i64, i64) {
        match self {
            Self::Rectangle { width, height } | Self::Triangle { width, height } => (*width, *height),
            Self::Polygon { .. } => (0, 0),
        }
    }
}

/// A single shape as stored in the document and written to `.shapefile` text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShapeRecord {
    /// Origin x in model space (Y grows downward).
    pub x: i64,
    /// Origin y in model space.
    pub y: i64,
    /// Stacking order; lower values are drawn beneath higher values.
    pub z_index: i64,
    /// Fill color.
    pub color: Color,
    /// Type tag and type-specific fields.
    #[serde(flatten)]
    pub geometry: Geometry,
}

impl ShapeRecord {
    #[must_use]
    pub fn rectangle(x: i64, y: i64, z_index: i64, width: i64, height: i64, color: Color) -> Self {
        Self { x, y, z_index, color, geometry: Geometry::Rectangle { width, height } }
    }

    #[must_use]
    pub fn triangle(x: i64, y: i64, z_index: i64, width: i64, height: i64, color: Color) -> Self {
        Self { x, y, z_index, color, geometry: Geometry::Triangle { width, height } }
    }

    #[must_use]
    pub fn polygon(x: i64, y: i64, z_index: i64, points: Vec<Vertex>, color: Color) -> Self {
        Self { x, y, z_index, color, geometry: Geometry::Polygon { points } }
    }

    #[must_use]
    pub fn shape_type(&self) -> ShapeType {
        self.geometry.shape_type()
    }

    /// Absolute outline vertices in model space, in drawing order.
    ///
    /// Rectangles list their corners clockwise from the top-left. Triangles
    /// list the top vertex, then bottom-left, then bottom-right.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn outline(&self) -> Vec<Point> {
        let (x, y) = (self.x as f64, self.y as f64);
        match &self.geometry {
            Geometry::Rectangle { width, height } => {
                let (w, h) = (*width as f64, *height as f64);
                vec![Point::new(x, y), Point::new(x + w, y), Point::new(x + w, y + h), Point::new(x, y + h)]
            }
            Geometry::Triangle { width, height } => {
                let (w, h) = (*width as f64, *height as f64);
                vec![Point::new(x + w / 2.0, y), Point::new(x, y + h), Point::new(x + w, y + h)]
            }
            Geometry::Polygon { points } => points
                .iter()
                .map(|p| Point::new(x + p.x as f64, y + p.y as f64))
                .collect(),
        }
    }
}

/// In-memory store of the shapes in one drawing, in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShapeCollection {
    shapes: Vec<ShapeRecord>,
}

impl ShapeCollection {
    /// Create an empty collection.
    #[must_use]
    pub fn new() -> Self {
        Self { shapes: Vec::new() }
    }

    /// Append a record. Callers are responsible for validating it first.
    pub fn add_shape(&mut self, record: ShapeRecord) {
        self.shapes.push(record);
    }

    /// Move the record at `index` so its anchor point lands on `(x, y)`.
    ///
    /// Each shape type has its own anchor; see [`anchor::AnchorRule`].
    /// Returns `false` and leaves the collection untouched if `index` is out of range.
    pub fn move_shape(&mut self, index: usize, x: i64, y: i64) -> bool {
        let Some(record) = self.shapes.get_mut(index) else {
            return false;
        };
        anchor::relocate(record, x, y);
        true
    }

    /// Replace every record with a freshly parsed set.
    pub fn replace(&mut self, records: Vec<ShapeRecord>) {
        self.shapes = records;
    }

    /// Remove every record.
    pub fn clear(&mut self) {
        self.shapes.clear();
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&ShapeRecord> {
        self.shapes.get(index)
    }

    /// Records in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, ShapeRecord> {
        self.shapes.iter()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[ShapeRecord] {
        &self.shapes
    }

    /// Storage indices sorted by z-index. Equal z-indices keep insertion order.
    #[must_use]
    pub fn render_indices(&self) -> Vec<usize> {
        let mut indices: Vec<usize> = (0..self.shapes.len()).collect();
        indices.sort_by_key(|&i| self.shapes[i].z_index);
        indices
    }

    /// Records in paint order: ascending z-index, stable on ties.
    #[must_use]
    pub fn render_order(&self) -> Vec<&ShapeRecord> {
        let mut shapes: Vec<&ShapeRecord> = self.shapes.iter().collect();
        shapes.sort_by_key(|s| s.z_index);
        shapes
    }

    /// Number of records in the collection.
    #[must_use]
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    /// Returns `true` if the collection holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }
}

impl From<Vec<ShapeRecord>> for ShapeCollection {
    fn from(shapes: Vec<ShapeRecord>) -> Self {
        Self { shapes }
    }
}

impl FromIterator<ShapeRecord> for ShapeCollection {
    fn from_iter<I: IntoIterator<Item = ShapeRecord>>(iter: I) -> Self {
        Self { shapes: iter.into_iter().collect() }
    }
}

impl<'a> IntoIterator for &'a ShapeCollection {
    type Item = &'a ShapeRecord;
    type IntoIter = std::slice::Iter<'a, ShapeRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.shapes.iter()
    }
}
