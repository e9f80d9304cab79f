//! # Shapes
//!
//! The authored input of a rebuild: a curve plus how it should be drawn.

use crate::color::Color;
use crate::curve::{CurveSource, SplineCurve};
use config::constants::DEFAULT_NEW_SHAPE_EXTENT;
use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Whether a shape is filled or stroked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ShapeKind {
    /// Closed outline, triangulated
    #[default]
    Polygon,
    /// Open polyline, extruded into a ribbon
    Line,
}

/// Drawing attributes shared by a shape and the polygons sampled from it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShapeStyle {
    /// Vertex color of every emitted vertex
    pub color: Color,
    /// Depth of the shape; higher values draw later
    pub offset_z: f64,
    /// Fill or stroke
    pub kind: ShapeKind,
    /// Line half-width overriding the settings value
    pub width: Option<f64>,
}

impl Default for ShapeStyle {
    fn default() -> Self {
        Self {
            color: Color::WHITE,
            offset_z: 0.0,
            kind: ShapeKind::Polygon,
            width: None,
        }
    }
}

/// A curve with its style.
///
/// # Example
///
/// ```rust
/// use vector_mesh::{Shape, ShapeKind};
/// use glam::DVec2;
///
/// let shape = Shape::new_rect(DVec2::ZERO, DVec2::splat(50.0), ShapeKind::Polygon);
/// assert_eq!(shape.curve.points().len(), 4);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shape<C = SplineCurve> {
    /// Outline curve
    pub curve: C,
    /// Drawing attributes
    pub style: ShapeStyle,
    /// Shapes with this unset are skipped by the mesh builder
    pub draw_mesh: bool,
}

impl<C: CurveSource> Shape<C> {
    /// Wraps a curve with the default style of `kind`.
    pub fn new(curve: C, kind: ShapeKind) -> Self {
        Self {
            curve,
            style: ShapeStyle {
                kind,
                ..ShapeStyle::default()
            },
            draw_mesh: true,
        }
    }

    /// Sets the vertex color.
    pub fn with_color(mut self, color: Color) -> Self {
        self.style.color = color;
        self
    }

    /// Sets the depth offset; negative values are clamped to zero.
    pub fn with_offset_z(mut self, offset_z: f64) -> Self {
        self.style.offset_z = offset_z.max(0.0);
        self
    }

    /// Overrides the line width of this shape.
    pub fn with_width(mut self, width: f64) -> Self {
        self.style.width = Some(width);
        self
    }

    /// Enables or disables mesh output for this shape.
    pub fn with_draw_mesh(mut self, draw_mesh: bool) -> Self {
        self.draw_mesh = draw_mesh;
        self
    }

    /// Returns the kind of the shape.
    #[inline]
    pub fn kind(&self) -> ShapeKind {
        self.style.kind
    }
}

impl Shape<SplineCurve> {
    /// Filled shape through linear `points`.
    pub fn polygon(points: &[DVec2]) -> Self {
        Self::new(SplineCurve::from_linear_points(points, true), ShapeKind::Polygon)
    }

    /// Stroked shape through linear `points`.
    pub fn line(points: &[DVec2]) -> Self {
        Self::new(SplineCurve::from_linear_points(points, false), ShapeKind::Line)
    }

    /// Default outline for a new shape.
    ///
    /// Polygons get the rectangle `(-x, y), (x, y), (x, -y), (-x, -y)`
    /// around `center`; lines only the top edge.
    pub fn new_rect(center: DVec2, extent: DVec2, kind: ShapeKind) -> Self {
        let corners = [
            DVec2::new(-extent.x, extent.y),
            DVec2::new(extent.x, extent.y),
            DVec2::new(extent.x, -extent.y),
            DVec2::new(-extent.x, -extent.y),
        ];
        let count = match kind {
            ShapeKind::Polygon => 4,
            ShapeKind::Line => 2,
        };
        let points: Vec<DVec2> = corners[..count].iter().map(|c| *c + center).collect();
        match kind {
            ShapeKind::Polygon => Self::polygon(&points),
            ShapeKind::Line => Self::line(&points),
        }
    }

    /// Polygons must be closed loops, lines open.
    pub fn enforce_closure(&mut self) {
        self.curve.set_closed_loop(self.style.kind == ShapeKind::Polygon);
    }
}

impl Default for Shape<SplineCurve> {
    fn default() -> Self {
        Self::new_rect(DVec2::ZERO, DVec2::from(DEFAULT_NEW_SHAPE_EXTENT), ShapeKind::Polygon)
    }
}
