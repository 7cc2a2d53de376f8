//! Line-oriented parser for `.shapefile` text.
//!
//! The grammar is the same in both modes:
//!
//! 1. split the input on `\n`;
//! 2. cut every line at the first `//` (a plain substring search, so a `//`
//!    inside a field also ends the line);
//! 3. split what is left on `;` into definitions, skipping blank ones;
//! 4. split each definition on `,` and trim every field.
//!
//! The field layout is chosen by the type name in `parts[0]` and the field
//! count. The color is always the last field.
//!
//! | Type | Fields | Layout |
//! |------|--------|--------|
//! | `Rectangle` | ≥ 6 | `x, y, z, width, height, …, color` |
//! | `Triangle` | ≥ 7 | `x, y, z, width, height, …, color` |
//! | `Triangle` | 5–6 | `x, y, z, size, color` (legacy, `width = height = size`) |
//! | `Polygon` | ≥ 6 | `x, y, z, X:Y\|X:Y\|…, color` |
//!
//! [`parse_lenient`] is for file ingestion: numbers use the leading-integer
//! rule and any definition that cannot produce a well-formed record is
//! dropped and logged at `debug`. [`parse_strict`] requires whole integers,
//! exact field counts, and records that pass [`validate_record`], and
//! reports the first failure with its line number.

use tracing::debug;

use crate::color::{Color, ColorError};
use crate::consts::{
    COMMENT_MARKER, COORD_SEPARATOR, DEFINITION_SEPARATOR, FIELD_SEPARATOR, MIN_FIELDS, MIN_POLYGON_POINTS,
    POINT_SEPARATOR, SINGLE_PARAM_FIELDS, SIZED_FIELDS,
};
use crate::doc::{Geometry, ShapeCollection, ShapeRecord, ShapeType, Vertex};
use crate::validate::{ValidationError, validate_record};

#[cfg(test)]
#[path = "parse_test.rs"]
mod parse_test;

/// Why a single definition could not become a record.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseErrorKind {
    #[error("expected at least {expected} fields, found {found}")]
    TooFewFields { expected: usize, found: usize },
    #[error("expected at most {expected} fields, found {found}")]
    TooManyFields { expected: usize, found: usize },
    #[error("unknown shape type `{0}`")]
    UnknownType(String),
    #[error("field `{field}` is not an integer: `{value}`")]
    InvalidNumber { field: &'static str, value: String },
    #[error("invalid polygon points `{0}`")]
    InvalidPoints(String),
    #[error("invalid color: {0}")]
    InvalidColor(#[from] ColorError),
    #[error(transparent)]
    Invalid(#[from] ValidationError),
}

/// Error returned by [`parse_strict`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("line {line}: {kind}")]
pub struct ParseError {
    /// 1-based line number of the offending definition.
    pub line: usize,
    pub kind: ParseErrorKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Lenient,
    Strict,
}

impl Mode {
    fn int(self, raw: &str) -> Option<i64> {
        match self {
            Self::Lenient => leading_int(raw),
            Self::Strict => whole_int(raw),
        }
    }
}

/// Parse `.shapefile` text, dropping anything that does not form a record.
///
/// Never fails; the worst case is an empty collection.
#[must_use]
pub fn parse_lenient(text: &str) -> ShapeCollection {
    let mut shapes = ShapeCollection::new();
    for (line, definition) in definitions(text) {
        match parse_definition(definition, Mode::Lenient) {
            Ok(record) => shapes.add_shape(record),
            Err(reason) => debug!(line, definition, %reason, "dropping shape definition"),
        }
    }
    shapes
}

/// Parse `.shapefile` text, rejecting the whole input on the first bad definition.
///
/// # Errors
///
/// Returns a [`ParseError`] naming the 1-based line of the first definition
/// that is malformed or fails [`validate_record`].
pub fn parse_strict(text: &str) -> Result<ShapeCollection, ParseError> {
    let mut shapes = ShapeCollection::new();
    for (line, definition) in definitions(text) {
        let record = parse_definition(definition, Mode::Strict).map_err(|kind| ParseError { line, kind })?;
        shapes.add_shape(record);
    }
    Ok(shapes)
}

/// Cut `line` at the first comment marker.
#[must_use]
pub fn strip_comment(line: &str) -> &str {
    line.find(COMMENT_MARKER).map_or(line, |idx| &line[..idx])
}

/// Parse the leading integer of `raw`, ignoring trailing garbage.
///
/// Leading whitespace and one sign are skipped; a `0x`/`0X` prefix switches
/// to hexadecimal. Returns `None` when no digit follows, or on overflow.
#[must_use]
pub fn leading_int(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let (radix, digits) = match rest.get(..2) {
        Some("0x" | "0X") => (16, &rest[2..]),
        _ => (10, rest),
    };

    // Accumulate toward the sign so `i64::MIN` is reachable.
    let mut value: i64 = 0;
    let mut seen_digit = false;
    for c in digits.chars() {
        let Some(digit) = c.to_digit(radix) else {
            break;
        };
        let shifted = value.checked_mul(i64::from(radix))?;
        value = if negative {
            shifted.checked_sub(i64::from(digit))?
        } else {
            shifted.checked_add(i64::from(digit))?
        };
        seen_digit = true;
    }

    seen_digit.then_some(value)
}

/// Parse a polygon point list (`X:Y|X:Y|…`) with whole-integer coordinates.
#[must_use]
pub fn parse_points(raw: &str) -> Option<Vec<Vertex>> {
    points_with(raw, Mode::Strict)
}

fn whole_int(raw: &str) -> Option<i64> {
    raw.trim().parse::<i64>().ok()
}

/// Yield `(line_number, definition)` for every non-blank definition in `text`.
fn definitions(text: &str) -> impl Iterator<Item = (usize, &str)> {
    text.split('\n').enumerate().flat_map(|(idx, line)| {
        strip_comment(line)
            .trim()
            .split(DEFINITION_SEPARATOR)
            .map(str::trim)
            .filter(|definition| !definition.is_empty())
            .map(move |definition| (idx + 1, definition))
    })
}

fn parse_definition(definition: &str, mode: Mode) -> Result<ShapeRecord, ParseErrorKind> {
    let parts: Vec<&str> = definition.split(FIELD_SEPARATOR).map(str::trim).collect();
    if parts.len() < MIN_FIELDS {
        return Err(ParseErrorKind::TooFewFields { expected: MIN_FIELDS, found: parts.len() });
    }

    let shape_type = ShapeType::from_name(parts[0]).ok_or_else(|| ParseErrorKind::UnknownType(parts[0].to_owned()))?;
    check_field_count(shape_type, parts.len(), mode)?;

    let x = int_field("x", parts[1], mode)?;
    let y = int_field("y", parts[2], mode)?;
    let z_index = int_field("zIndex", parts[3], mode)?;

    let geometry = match shape_type {
        ShapeType::Rectangle => Geometry::Rectangle {
            width: int_field("width", parts[4], mode)?,
            height: int_field("height", parts[5], mode)?,
        },
        ShapeType::Triangle if parts.len() >= SIZED_FIELDS => Geometry::Triangle {
            width: int_field("width", parts[4], mode)?,
            height: int_field("height", parts[5], mode)?,
        },
        ShapeType::Triangle => {
            let size = int_field("size", parts[4], mode)?;
            Geometry::Triangle { width: size, height: size }
        }
        ShapeType::Polygon => Geometry::Polygon {
            points: points_with(parts[4], mode).ok_or_else(|| ParseErrorKind::InvalidPoints(parts[4].to_owned()))?,
        },
    };

    let color = Color::parse(parts[parts.len() - 1])?;
    let record = ShapeRecord { x, y, z_index, color, geometry };

    match mode {
        Mode::Strict => validate_record(&record)?,
        Mode::Lenient => {
            if let Geometry::Polygon { points } = &record.geometry {
                if points.len() < MIN_POLYGON_POINTS {
                    return Err(ValidationError::TooFewPoints { min: MIN_POLYGON_POINTS, found: points.len() }.into());
                }
            }
        }
    }

    Ok(record)
}

/// Field-count bounds per type. Lenient mode only enforces minimums and
/// ignores anything between the type-specific fields and the color.
fn check_field_count(shape_type: ShapeType, found: usize, mode: Mode) -> Result<(), ParseErrorKind> {
    let (min, max) = match (shape_type, mode) {
        (ShapeType::Rectangle | ShapeType::Polygon, Mode::Lenient) => (SINGLE_PARAM_FIELDS, usize::MAX),
        (ShapeType::Triangle, Mode::Lenient) => (MIN_FIELDS, usize::MAX),
        (ShapeType::Rectangle, Mode::Strict) => (SIZED_FIELDS, SIZED_FIELDS),
        (ShapeType::Triangle, Mode::Strict) => (SINGLE_PARAM_FIELDS, SIZED_FIELDS),
        (ShapeType::Polygon, Mode::Strict) => (SINGLE_PARAM_FIELDS, SINGLE_PARAM_FIELDS),
    };
    if found < min {
        return Err(ParseErrorKind::TooFewFields { expected: min, found });
    }
    if found > max {
        return Err(ParseErrorKind::TooManyFields { expected: max, found });
    }
    Ok(())
}

fn int_field(field: &'static str, raw: &str, mode: Mode) -> Result<i64, ParseErrorKind> {
    mode.int(raw).ok_or_else(|| ParseErrorKind::InvalidNumber { field, value: raw.to_owned() })
}

fn points_with(raw: &str, mode: Mode) -> Option<Vec<Vertex>> {
    raw.split(POINT_SEPARATOR)
        .map(|pair| {
            let (px, py) = pair.split_once(COORD_SEPARATOR)?;
            Some(Vertex::new(mode.int(px)?, mode.int(py)?))
        })
        .collect()
}
