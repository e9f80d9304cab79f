//! # 2D Polygons
//!
//! Flattened shape outlines, tagged with the style of the shape they were
//! sampled from.
//!
//! ## Winding
//!
//! Winding follows the sign of `Σ (b.x - a.x) * (b.y + a.y)` over the ring:
//! negative is counter-clockwise with Y pointing up. Points sampled from a
//! clockwise curve are inserted at the front so every sampled polygon ends
//! up counter-clockwise, which is what the triangulator expects.

pub mod simplify;

use crate::shape::ShapeStyle;
use glam::DVec2;

pub use simplify::{remove_collinear_points, remove_duplicated_points};

/// Returns true if the ring winds counter-clockwise.
///
/// # Example
///
/// ```rust
/// use vector_mesh::polygon::is_winding_ccw;
/// use glam::DVec2;
///
/// let ccw = [DVec2::ZERO, DVec2::X, DVec2::ONE, DVec2::Y];
/// assert!(is_winding_ccw(&ccw));
///
/// let mut cw = ccw;
/// cw.reverse();
/// assert!(!is_winding_ccw(&cw));
/// ```
pub fn is_winding_ccw(points: &[DVec2]) -> bool {
    let n = points.len();
    let sum: f64 = (0..n)
        .map(|i| {
            let a = points[i];
            let b = points[(i + 1) % n];
            (b.x - a.x) * (b.y + a.y)
        })
        .sum();
    sum < 0.0
}

/// Signed area of a ring (shoelace), positive for counter-clockwise.
pub fn signed_area(points: &[DVec2]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }
    let twice: f64 = (0..n)
        .map(|i| points[i].perp_dot(points[(i + 1) % n]))
        .sum();
    twice * 0.5
}

/// A flattened outline plus the style of its originating shape.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Polygon2D {
    /// Outline points, counter-clockwise for closed shapes
    pub points: Vec<DVec2>,
    /// Index of the originating shape in the rebuild input
    pub shape_index: usize,
    /// Color, depth, kind and width of the originating shape
    pub style: ShapeStyle,
}

impl Polygon2D {
    /// Creates an empty polygon for a shape.
    pub fn new(shape_index: usize, style: ShapeStyle) -> Self {
        Self {
            points: Vec::new(),
            shape_index,
            style,
        }
    }

    /// Creates a polygon with default style from points.
    pub fn from_points(points: Vec<DVec2>) -> Self {
        Self {
            points,
            ..Self::default()
        }
    }

    /// Returns the number of points.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns true if the polygon has no points.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Adds a point at the end when `is_ccw`, at the front otherwise.
    pub fn add_point(&mut self, point: DVec2, is_ccw: bool) {
        if is_ccw {
            self.points.push(point);
        } else {
            self.points.insert(0, point);
        }
    }

    /// Returns true if the outline winds counter-clockwise.
    pub fn is_ccw(&self) -> bool {
        is_winding_ccw(&self.points)
    }

    /// Signed area of the outline.
    pub fn signed_area(&self) -> f64 {
        signed_area(&self.points)
    }

    /// Removes collinear, then duplicated points.
    ///
    /// # Returns
    ///
    /// The number of points removed.
    pub fn simplify(&mut self) -> usize {
        remove_collinear_points(&mut self.points) + remove_duplicated_points(&mut self.points)
    }
}
