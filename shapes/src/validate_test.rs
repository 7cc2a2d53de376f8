use super::*;
use crate::doc::Vertex;

fn rect_draft() -> ShapeDraft {
    ShapeDraft {
        x: Some(10),
        y: Some(20),
        z_index: Some(1),
        width: Some(30),
        height: Some(40),
        color: Some("abc123".to_owned()),
        ..ShapeDraft::new(ShapeType::Rectangle)
    }
}

fn polygon_draft(points: &str) -> ShapeDraft {
    ShapeDraft {
        x: Some(0),
        y: Some(0),
        z_index: Some(0),
        points: Some(points.to_owned()),
        color: Some("0000FF".to_owned()),
        ..ShapeDraft::new(ShapeType::Polygon)
    }
}

// =============================================================
// Accepted drafts
// =============================================================

#[test]
fn valid_rectangle_builds_record() {
    let r = rect_draft().validate().unwrap();
    assert_eq!(r, ShapeRecord::rectangle(10, 20, 1, 30, 40, Color::parse("abc123").unwrap()));
}

#[test]
fn valid_triangle_builds_record() {
    let draft = ShapeDraft { shape_type: ShapeType::Triangle, ..rect_draft() };
    let t = draft.validate().unwrap();
    assert_eq!(t.geometry, Geometry::Triangle { width: 30, height: 40 });
}

#[test]
fn valid_polygon_builds_record() {
    let p = polygon_draft("0:0|10:0|5:10").validate().unwrap();
    assert_eq!(p.geometry, Geometry::Polygon {
        points: vec![Vertex::new(0, 0), Vertex::new(10, 0), Vertex::new(5, 10)],
    });
}

#[test]
fn color_is_trimmed() {
    let draft = ShapeDraft { color: Some("  FF00ff ".to_owned()), ..rect_draft() };
    assert_eq!(draft.validate().unwrap().color.as_str(), "FF00ff");
}

// =============================================================
// Rejected drafts
// =============================================================

#[test]
fn missing_position_is_rejected() {
    let draft = ShapeDraft { x: None, ..rect_draft() };
    assert_eq!(draft.validate(), Err(ValidationError::MissingField("x")));
    let draft = ShapeDraft { z_index: None, ..rect_draft() };
    assert_eq!(draft.validate(), Err(ValidationError::MissingField("zIndex")));
}

#[test]
fn missing_dimension_is_rejected() {
    let draft = ShapeDraft { height: None, ..rect_draft() };
    assert_eq!(draft.validate(), Err(ValidationError::MissingField("height")));
}

#[test]
fn blank_color_counts_as_missing() {
    let draft = ShapeDraft { color: Some("   ".to_owned()), ..rect_draft() };
    assert_eq!(draft.validate(), Err(ValidationError::MissingField("color")));
}

#[test]
fn zero_or_negative_dimensions_are_rejected() {
    let draft = ShapeDraft { width: Some(0), ..rect_draft() };
    assert_eq!(draft.validate(), Err(ValidationError::NonPositive { field: "width", value: 0 }));
    let draft = ShapeDraft { height: Some(-3), ..rect_draft() };
    assert_eq!(draft.validate(), Err(ValidationError::NonPositive { field: "height", value: -3 }));
}

#[test]
fn color_boundary() {
    let ok = ShapeDraft { color: Some("abc123".to_owned()), ..rect_draft() };
    assert!(ok.validate().is_ok());

    let short = ShapeDraft { color: Some("abc12".to_owned()), ..rect_draft() };
    assert_eq!(short.validate(), Err(ValidationError::InvalidColor(ColorError::WrongLength(5))));

    let not_hex = ShapeDraft { color: Some("GGGGGG".to_owned()), ..rect_draft() };
    assert_eq!(not_hex.validate(), Err(ValidationError::InvalidColor(ColorError::NotHex('G'))));
}

#[test]
fn polygon_needs_three_points() {
    assert_eq!(
        polygon_draft("0:0|10:0").validate(),
        Err(ValidationError::TooFewPoints { min: 3, found: 2 })
    );
}

#[test]
fn polygon_rejects_malformed_points() {
    assert_eq!(
        polygon_draft("0:0|10|5:10").validate(),
        Err(ValidationError::InvalidPoints("0:0|10|5:10".to_owned()))
    );
}

#[test]
fn polygon_requires_points_field() {
    let draft = ShapeDraft { points: None, ..polygon_draft("") };
    assert_eq!(draft.validate(), Err(ValidationError::MissingField("points")));
    assert_eq!(polygon_draft("  ").validate(), Err(ValidationError::MissingField("points")));
}

#[test]
fn error_messages_are_readable() {
    assert_eq!(ValidationError::MissingField("x").to_string(), "missing required field `x`");
    assert_eq!(
        ValidationError::TooFewPoints { min: 3, found: 1 }.to_string(),
        "a polygon needs at least 3 points, got 1"
    );
}

// =============================================================
// validate_record
// =============================================================

#[test]
fn validate_record_accepts_parsed_shapes() {
    let r = ShapeRecord::triangle(0, 0, 0, 1, 1, Color::parse("000000").unwrap());
    assert!(validate_record(&r).is_ok());
}
