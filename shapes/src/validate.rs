//! Strict validation for shapes entered by a user.
//!
//! The file parser tolerates garbage; the add-shape form does not. A form
//! collects a [`ShapeDraft`] with every field optional and calls
//! [`ShapeDraft::validate`], which either builds a [`ShapeRecord`] that
//! satisfies every model invariant or explains why it cannot. Only records
//! that pass this check should reach [`ShapeCollection::add_shape`].
//!
//! [`ShapeCollection::add_shape`]: crate::doc::ShapeCollection::add_shape

#[cfg(test)]
#[path = "validate_test.rs"]
mod validate_test;

use crate::color::{Color, ColorError};
use crate::consts::MIN_POLYGON_POINTS;
use crate::doc::{Geometry, ShapeRecord, ShapeType};
use crate::parse::parse_points;

/// Why a shape was rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("missing required field `{0}`")]
    MissingField(&'static str),
    #[error("`{field}` must be positive, got {value}")]
    NonPositive { field: &'static str, value: i64 },
    #[error("invalid color: {0}")]
    InvalidColor(#[from] ColorError),
    #[error("invalid point list `{0}`; expected X:Y pairs separated by `|`")]
    InvalidPoints(String),
    #[error("a polygon needs at least {min} points, got {found}")]
    TooFewPoints { min: usize, found: usize },
}

/// Form input for a new shape. `None` means the field was left blank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShapeDraft {
    pub shape_type: ShapeType,
    pub x: Option<i64>,
    pub y: Option<i64>,
    pub z_index: Option<i64>,
    /// Rectangle and triangle only.
    pub width: Option<i64>,
    /// Rectangle and triangle only.
    pub height: Option<i64>,
    /// Polygon only, in `X:Y|X:Y|…` form.
    pub points: Option<String>,
    pub color: Option<String>,
}

impl ShapeDraft {
    /// An empty draft of the given type.
    #[must_use]
    pub fn new(shape_type: ShapeType) -> Self {
        Self {
            shape_type,
            x: None,
            y: None,
            z_index: None,
            width: None,
            height: None,
            points: None,
            color: None,
        }
    }

    /// Check every field and build the record.
    ///
    /// # Errors
    ///
    /// Returns the first [`ValidationError`] found: missing fields in form
    /// order, then a malformed point list or color, then the invariants of
    /// [`validate_record`].
    pub fn validate(&self) -> Result<ShapeRecord, ValidationError> {
        let x = self.x.ok_or(ValidationError::MissingField("x"))?;
        let y = self.y.ok_or(ValidationError::MissingField("y"))?;
        let z_index = self.z_index.ok_or(ValidationError::MissingField("zIndex"))?;

        let geometry = match self.shape_type {
            ShapeType::Rectangle | ShapeType::Triangle => {
                let width = self.width.ok_or(ValidationError::MissingField("width"))?;
                let height = self.height.ok_or(ValidationError::MissingField("height"))?;
                if self.shape_type == ShapeType::Rectangle {
                    Geometry::Rectangle { width, height }
                } else {
                    Geometry::Triangle { width, height }
                }
            }
            ShapeType::Polygon => {
                let raw = self
                    .points
                    .as_deref()
                    .map(str::trim)
                    .filter(|raw| !raw.is_empty())
                    .ok_or(ValidationError::MissingField("points"))?;
                let points = parse_points(raw).ok_or_else(|| ValidationError::InvalidPoints(raw.to_owned()))?;
                Geometry::Polygon { points }
            }
        };

        let color = self
            .color
            .as_deref()
            .map(str::trim)
            .filter(|raw| !raw.is_empty())
            .ok_or(ValidationError::MissingField("color"))?;
        let color = Color::parse(color)?;

        let record = ShapeRecord { x, y, z_index, color, geometry };
        validate_record(&record)?;
        Ok(record)
    }
}

/// Check the invariants a parsed record cannot guarantee on its own:
/// positive width and height, and at least three polygon points.
///
/// # Errors
///
/// Returns [`ValidationError::NonPositive`] or [`ValidationError::TooFewPoints`].
pub fn validate_record(record: &ShapeRecord) -> Result<(), ValidationError> {
    match &record.geometry {
        Geometry::Rectangle { width, height } | Geometry::Triangle { width, height } => {
            positive("width", *width)?;
            positive("height", *height)
        }
        Geometry::Polygon { points } if points.len() < MIN_POLYGON_POINTS => {
            Err(ValidationError::TooFewPoints { min: MIN_POLYGON_POINTS, found: points.len() })
        }
        Geometry::Polygon { .. } => Ok(()),
    }
}

fn positive(field: &'static str, value: i64) -> Result<(), ValidationError> {
    if value > 0 { Ok(()) } else { Err(ValidationError::NonPositive { field, value }) }
}
