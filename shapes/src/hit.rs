#[cfg(test)]
#[path = "hit_test.rs"]
mod hit_test;

use crate::doc::{Geometry, ShapeCollection, ShapeRecord};
use crate::geom::{Bounds, Point, polygon_contains};

/// Storage index of the topmost shape under `point`, in model coordinates.
///
/// Shapes later in render order are on top, so ties in z-index go to the
/// one added last.
#[must_use]
pub fn hit_test(shapes: &ShapeCollection, point: Point) -> Option<usize> {
    shapes
        .render_indices()
        .into_iter()
        .rev()
        .find(|&index| shapes.get(index).is_some_and(|record| contains(record, point)))
}

/// Whether `point` lies inside `record`. Rectangle edges count as inside.
#[must_use]
pub fn contains(record: &ShapeRecord, point: Point) -> bool {
    let outline = record.outline();
    match record.geometry {
        Geometry::Rectangle { .. } => Bounds::of(&outline).is_some_and(|b| b.contains(point)),
        Geometry::Triangle { .. } | Geometry::Polygon { .. } => polygon_contains(&outline, point),
    }
}
