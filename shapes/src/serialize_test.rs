use std::path::Path;

use proptest::prelude::*;

use super::*;
use crate::color::Color;
use crate::parse::parse_lenient;

fn color(hex: &str) -> Color {
    Color::parse(hex).unwrap()
}

// =============================================================
// Output format
// =============================================================

#[test]
fn empty_collection_serializes_to_empty_string() {
    assert_eq!(serialize(&ShapeCollection::new()), "");
}

#[test]
fn rectangle_line_format() {
    let shapes: ShapeCollection = vec![ShapeRecord::rectangle(1, 2, 0, 3, 4, color("FF0000"))].into();
    assert_eq!(serialize(&shapes), "Rectangle, 1, 2, 0, 3, 4, FF0000;\n");
}

#[test]
fn triangle_always_written_with_width_and_height() {
    let shapes = parse_lenient("Triangle, 10, 10, 0, 50, FF0000;");
    assert_eq!(serialize(&shapes), "Triangle, 10, 10, 0, 50, 50, FF0000;\n");
}

#[test]
fn polygon_line_format() {
    let points = vec![Vertex::new(0, 0), Vertex::new(10, 0), Vertex::new(5, -10)];
    let shapes: ShapeCollection = vec![ShapeRecord::polygon(7, 8, 2, points, color("0000ff"))].into();
    assert_eq!(serialize(&shapes), "Polygon, 7, 8, 2, 0:0|10:0|5:-10, 0000ff;\n");
}

#[test]
fn serializes_in_insertion_order_not_render_order() {
    let shapes: ShapeCollection = vec![
        ShapeRecord::rectangle(0, 0, 5, 1, 1, color("000005")),
        ShapeRecord::rectangle(0, 0, 1, 1, 1, color("000001")),
    ]
    .into();
    let text = serialize(&shapes);
    let lines: Vec<&str> = text.lines().collect();
    assert!(lines[0].ends_with("000005;"));
    assert!(lines[1].ends_with("000001;"));
}

#[test]
fn comments_are_not_preserved() {
    let shapes = parse_lenient("// title\nRectangle, 0, 0, 0, 1, 1, 000000; // inline\n");
    assert_eq!(serialize(&shapes), "Rectangle, 0, 0, 0, 1, 1, 000000;\n");
}

#[test]
fn record_display_has_no_terminator() {
    let r = ShapeRecord::triangle(1, 2, 3, 4, 5, color("ABCDEF"));
    assert_eq!(r.to_string(), "Triangle, 1, 2, 3, 4, 5, ABCDEF");
}

// =============================================================
// Round trip
// =============================================================

#[test]
fn reparse_of_serialized_file_is_stable() {
    let text = "Rectangle,0,0,0,10,10,FF0000; Triangle,5,5,1,10,10,00FF00;\n\
                Triangle, 1, 1, 4, 6, abcdef // legacy\n\
                Polygon,0,0,0,0:0|10:0|5:10,0000FF;\n";
    let first = parse_lenient(text);
    assert_eq!(first.len(), 4);
    let second = parse_lenient(&serialize(&first));
    assert_eq!(second, first);
}

#[test]
fn moved_shape_survives_round_trip() {
    let mut shapes = parse_lenient("Rectangle, 0, 0, 0, 10, 10, FF0000;");
    assert!(shapes.move_shape(0, 50, 50));
    let back = parse_lenient(&serialize(&shapes));
    assert_eq!(back.get(0).map(|r| (r.x, r.y)), Some((45, 45)));
}

#[test]
fn extreme_coordinates_round_trip() {
    let mut shapes = ShapeCollection::new();
    shapes.add_shape(ShapeRecord::rectangle(i64::MIN, i64::MAX, i64::MIN, 10, 10, color("FF0000")));
    let points = vec![Vertex::new(i64::MIN, 0), Vertex::new(1, i64::MAX), Vertex::new(2, 2)];
    shapes.add_shape(ShapeRecord::polygon(0, 0, 0, points, color("00FF00")));
    assert_eq!(parse_lenient(&serialize(&shapes)), shapes);
}

#[test]
fn move_saturating_to_min_survives_reload() {
    let mut shapes = ShapeCollection::new();
    shapes.add_shape(ShapeRecord::rectangle(0, 0, 0, 10, 10, color("FF0000")));
    assert!(shapes.move_shape(0, i64::MIN + 1, 0));
    assert_eq!(shapes.get(0).map(|r| (r.x, r.y)), Some((i64::MIN, -5)));
    assert_eq!(parse_lenient(&serialize(&shapes)), shapes);
}

fn arb_color() -> impl Strategy<Value = Color> {
    "[0-9a-fA-F]{6}".prop_map(|s| Color::parse(&s).unwrap())
}

fn arb_record() -> impl Strategy<Value = ShapeRecord> {
    let coord = prop_oneof![Just(i64::MIN), Just(i64::MAX), -10_000_i64..10_000];
    let dim = 1_i64..5_000;
    let z = -50_i64..50;
    prop_oneof![
        (coord.clone(), coord.clone(), z.clone(), dim.clone(), dim.clone(), arb_color())
            .prop_map(|(x, y, z, w, h, c)| ShapeRecord::rectangle(x, y, z, w, h, c)),
        (coord.clone(), coord.clone(), z.clone(), dim.clone(), dim, arb_color())
            .prop_map(|(x, y, z, w, h, c)| ShapeRecord::triangle(x, y, z, w, h, c)),
        (
            coord.clone(),
            coord.clone(),
            z,
            prop::collection::vec((coord.clone(), coord).prop_map(|(x, y)| Vertex::new(x, y)), 3..8),
            arb_color(),
        )
            .prop_map(|(x, y, z, points, c)| ShapeRecord::polygon(x, y, z, points, c)),
    ]
}

proptest! {
    #[test]
    fn validated_collections_round_trip(records in prop::collection::vec(arb_record(), 0..12)) {
        let shapes: ShapeCollection = records.into();
        prop_assert_eq!(parse_lenient(&serialize(&shapes)), shapes);
    }
}

// =============================================================
// save_path
// =============================================================

#[test]
fn save_path_appends_extension() {
    assert_eq!(save_path("drawing"), Path::new("drawing.shapefile"));
    assert_eq!(save_path("out/my.drawing"), Path::new("out/my.drawing.shapefile"));
}

#[test]
fn save_path_keeps_existing_extension() {
    assert_eq!(save_path("drawing.shapefile"), Path::new("drawing.shapefile"));
}
