//! Serializer: the inverse of [`parse_lenient`](crate::parse::parse_lenient).
//!
//! Every record becomes one line of the form
//! `Type, x, y, zIndex, <params>, color;` in insertion order. Triangles are
//! always written with both width and height, so legacy single-size files
//! come back in the current grammar. No comments are emitted and nothing is
//! escaped; field values never contain separators.

#[cfg(test)]
#[path = "serialize_test.rs"]
mod serialize_test;

use std::fmt;
use std::path::{Path, PathBuf};

use crate::consts::{COORD_SEPARATOR, DEFINITION_SEPARATOR, FILE_EXTENSION, POINT_SEPARATOR};
use crate::doc::{Geometry, ShapeCollection, ShapeRecord, Vertex};

/// Render the collection as `.shapefile` text. An empty collection yields `""`.
#[must_use]
pub fn serialize(shapes: &ShapeCollection) -> String {
    shapes
        .iter()
        .map(|record| format!("{record}{DEFINITION_SEPARATOR}\n"))
        .collect()
}

/// Path for saving under a user-chosen name, adding `.shapefile` when missing.
#[must_use]
pub fn save_path(name: impl AsRef<Path>) -> PathBuf {
    let path = name.as_ref();
    if path.extension().is_some_and(|ext| ext == FILE_EXTENSION) {
        return path.to_path_buf();
    }
    let mut with_ext = path.as_os_str().to_owned();
    with_ext.push(".");
    with_ext.push(FILE_EXTENSION);
    PathBuf::from(with_ext)
}

impl fmt::Display for Vertex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{COORD_SEPARATOR}{}", self.x, self.y)
    }
}

/// The definition text without its trailing `;`.
impl fmt::Display for ShapeRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}, {}, {}, ", self.shape_type(), self.x, self.y, self.z_index)?;
        match &self.geometry {
            Geometry::Rectangle { width, height } | Geometry::Triangle { width, height } => {
                write!(f, "{width}, {height}")?;
            }
            Geometry::Polygon { points } => {
                for (i, point) in points.iter().enumerate() {
                    if i > 0 {
                        write!(f, "{POINT_SEPARATOR}")?;
                    }
                    write!(f, "{point}")?;
                }
            }
        }
        write!(f, ", {}", self.color)
    }
}
