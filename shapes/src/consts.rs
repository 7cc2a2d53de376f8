//! Shared constants for the shapes crate.

// ── Grammar ─────────────────────────────────────────────────────

/// Everything from the first occurrence of this marker to end of line is ignored.
pub const COMMENT_MARKER: &str = "//";

/// Separates shape definitions sharing one physical line.
pub const DEFINITION_SEPARATOR: char = ';';

/// Separates the fields of a single definition.
pub const FIELD_SEPARATOR: char = ',';

/// Separates polygon points inside the points field.
pub const POINT_SEPARATOR: char = '|';

/// Separates the two coordinates of a polygon point.
pub const COORD_SEPARATOR: char = ':';

/// Definitions with fewer fields are dropped before their type is considered.
pub const MIN_FIELDS: usize = 5;

/// Field count of a rectangle or triangle written with a width/height pair
/// (`type, x, y, z, width, height, color`).
pub const SIZED_FIELDS: usize = 7;

/// Field count of a legacy triangle or a polygon (`type, x, y, z, param, color`).
pub const SINGLE_PARAM_FIELDS: usize = 6;

/// Minimum vertex count of a polygon.
pub const MIN_POLYGON_POINTS: usize = 3;

/// Number of hex digits in a color field.
pub const COLOR_DIGITS: usize = 6;

/// Fixed extension of saved drawings.
pub const FILE_EXTENSION: &str = "shapefile";

// ── Scene ───────────────────────────────────────────────────────

/// Viewport width used when the host does not report one.
pub const DEFAULT_VIEWPORT_WIDTH: f64 = 800.0;

/// Viewport height used when the host does not report one.
pub const DEFAULT_VIEWPORT_HEIGHT: f64 = 600.0;
