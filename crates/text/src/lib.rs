//! Extruded text meshes built from font glyph outlines.
//!
//! Pipeline: parse the font with ttf-parser, flatten each glyph's outline
//! into closed contours, triangulate by ear clipping, extrude into a prism,
//! and hand the result back as a plain geometry descriptor.
//!
//! The build runs on a background thread ([`FontMeshTask`]) so the frame
//! loop never blocks on font IO. Failure surfaces once through `poll`; the
//! demo simply runs without its label if the font cannot be used.

mod builder;
mod loader;
mod outline;

pub use builder::{build_text_mesh, TextError};
pub use loader::FontMeshTask;
pub use outline::{triangulate, ContourCollector};
