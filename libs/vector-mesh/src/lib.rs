//! # Vector Mesh
//!
//! Builds renderable triangle meshes from 2D spline shapes.
//! Each shape is either a filled polygon or a stroked line; all shapes of a
//! component are merged into a single mesh section.
//!
//! ## Architecture
//!
//! ```text
//! Shape (curve + style)
//!   → CurveSampler        (curve → CCW polyline)
//!   → PolygonSimplifier   (collinear / duplicate removal)
//!   → Triangulator        (ear clipping)  |  LineExtruder (ribbon)
//!   → ShapeMeshBuilder    (one MeshSection)
//!   → MeshComponent       (bounds, snapshot, revision)
//!   → project_to_flat     (unit-square UI buffer)
//! ```
//!
//! ## Coordinates
//!
//! Shapes are authored in world units centered on the origin, Y up. The mesh
//! lies in the XY plane with each shape's depth offset as Z. The flat buffer
//! maps the world-size rectangle onto `[-1, 1]²`.
//!
//! ## Usage
//!
//! ```rust
//! use vector_mesh::{project_to_flat, MeshComponent, MeshSettings, Shape, ShapeKind};
//! use glam::DVec2;
//!
//! let shapes = [
//!     Shape::new_rect(DVec2::ZERO, DVec2::splat(40.0), ShapeKind::Polygon),
//!     Shape::new_rect(DVec2::ZERO, DVec2::splat(20.0), ShapeKind::Line).with_offset_z(1.0),
//! ];
//!
//! let mut component = MeshComponent::default();
//! component.rebuild(&shapes, &MeshSettings::default());
//!
//! let flat = project_to_flat(component.section(0), component.world_size());
//! assert_eq!(flat.triangle_count(), 4);
//! ```

pub mod bounds;
pub mod builder;
pub mod color;
pub mod component;
pub mod curve;
pub mod error;
pub mod flat;
pub mod mesh;
pub mod ops;
pub mod polygon;
pub mod settings;
pub mod shape;

pub use bounds::{Aabb, BoxSphereBounds};
pub use builder::{rebuild_mesh, ShapeMeshBuilder};
pub use color::{Color, LinearColor};
pub use component::{MeshComponent, RenderSnapshot};
pub use curve::{CurveSampler, CurveSource, InterpMode, SplineCurve, SplinePoint, StepMode};
pub use error::{MeshError, MeshResult};
pub use flat::{project_to_flat, FlatMeshBuffer, FlatShapeData, FlatVertex, WidgetRenderData};
pub use mesh::{Attribute, MeshSection};
pub use polygon::Polygon2D;
pub use settings::{MaterialHandle, MeshSettings};
pub use shape::{Shape, ShapeKind, ShapeStyle};
