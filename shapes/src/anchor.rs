//! Per-type anchor points used when dragging shapes.
//!
//! A shape's stored `(x, y)` is its origin, but the point a user grabs is
//! different for each type: the center of a rectangle, the apex of a
//! triangle, the origin of a polygon. [`AnchorRule`] is the rule table;
//! [`anchor`] reads a record's anchor and [`relocate`] writes it back.
//! Halving uses integer division.

#[cfg(test)]
#[path = "anchor_test.rs"]
mod anchor_test;

use crate::doc::{ShapeRecord, ShapeType, Vertex};

/// Which point of a shape follows the pointer during a drag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorRule {
    /// Center of the bounding box.
    Center,
    /// Top vertex; horizontally centered, on the top edge.
    TopVertex,
    /// The stored origin itself.
    Origin,
}

impl AnchorRule {
    #[must_use]
    pub fn for_type(shape_type: ShapeType) -> Self {
        match shape_type {
            ShapeType::Rectangle => Self::Center,
            ShapeType::Triangle => Self::TopVertex,
            ShapeType::Polygon => Self::Origin,
        }
    }
}

/// The anchor point of `record` in model space.
#[must_use]
pub fn anchor(record: &ShapeRecord) -> Vertex {
    let (w, h) = record.geometry.size();
    match AnchorRule::for_type(record.shape_type()) {
        AnchorRule::Center => Vertex::new(record.x.saturating_add(w / 2), record.y.saturating_add(h / 2)),
        AnchorRule::TopVertex => Vertex::new(record.x.saturating_add(w / 2), record.y),
        AnchorRule::Origin => Vertex::new(record.x, record.y),
    }
}

/// Reposition `record` so its anchor lands on `(x, y)`. Size and color are untouched.
pub fn relocate(record: &mut ShapeRecord, x: i64, y: i64) {
    let (w, h) = record.geometry.size();
    match AnchorRule::for_type(record.shape_type()) {
        AnchorRule::Center => {
            record.x = x.saturating_sub(w / 2);
            record.y = y.saturating_sub(h / 2);
        }
        AnchorRule::TopVertex => {
            record.x = x.saturating_sub(w / 2);
            record.y = y;
        }
        AnchorRule::Origin => {
            record.x = x;
            record.y = y;
        }
    }
}
