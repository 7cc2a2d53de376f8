//! Codec and document model for `.shapefile` drawings.
//!
//! A `.shapefile` is plain text: one or more `;`-terminated shape
//! definitions per line, comma-separated fields, `//` comments. This crate
//! parses that text into a [`ShapeCollection`], lets an editor append and
//! drag shapes, and serializes the collection back. Rendering, file dialogs
//! and form UI live in the host; they call into the functions exported here.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`parse`] | Lenient and strict parsers for the text grammar |
//! | [`serialize`] | Text serializer and save-path helper |
//! | [`doc`] | Shape records and the in-memory collection |
//! | [`anchor`] | Per-type drag anchors (center, apex, origin) |
//! | [`validate`] | Strict validation of user-entered shapes |
//! | [`color`] | Six-digit hex colors |
//! | [`scene`] | Renderer-ready meshes in viewport space |
//! | [`hit`] | Topmost-shape hit testing for drags |
//! | [`geom`] | Points, bounds, point-in-polygon |
//! | [`consts`] | Grammar separators, field counts, viewport defaults |

pub mod anchor;
pub mod color;
pub mod consts;
pub mod doc;
pub mod geom;
pub mod hit;
pub mod parse;
pub mod scene;
pub mod serialize;
pub mod validate;

pub use color::{Color, ColorError, color_to_int};
pub use doc::{Geometry, ShapeCollection, ShapeRecord, ShapeType, Vertex};
pub use parse::{ParseError, ParseErrorKind, parse_lenient, parse_strict};
pub use serialize::{save_path, serialize};
pub use validate::{ShapeDraft, ValidationError, validate_record};
