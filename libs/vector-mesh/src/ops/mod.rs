//! # Geometry Operations
//!
//! Polygon triangulation and line extrusion.

pub mod line;
pub mod triangulate;

pub use line::{extrude_line, Ribbon};
pub use triangulate::triangulate;
