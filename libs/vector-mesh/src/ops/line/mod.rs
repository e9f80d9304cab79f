//! # Line Extrusion
//!
//! Turns an open polyline into a ribbon of quads, two vertices per point.
//!
//! ## Normals
//!
//! The normal of an edge direction `d` is `(d.y, -d.x)`. End points use the
//! normal of their single edge; interior points average the normals of the
//! incoming and outgoing edges and re-normalize. The last point has no
//! outgoing edge, so its direction is taken backwards, `P[n-1] - P[n-2]`.
//!
//! ## Quad layout
//!
//! ```text
//!  T0 ──── T2        T0, T1: offsets of point i
//!  │ ╲      │        T2, T3: offsets of point i + 1
//!  │   ╲    │
//!  T1 ──── T3        triangles (T0, T1, T3) and (T3, T2, T0)
//! ```

use crate::error::{MeshError, MeshResult};
use glam::DVec2;

/// Vertices and triangle indices of an extruded line.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Ribbon {
    /// Two vertices per polyline point: `+normal` side, then `-normal` side
    pub vertices: Vec<DVec2>,
    /// Triangle list, offset by the extrusion's index offset
    pub indices: Vec<u32>,
}

impl Ribbon {
    /// Returns the number of triangles.
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}

/// Extrudes a polyline into a ribbon.
///
/// # Arguments
///
/// * `points` - Open polyline, at least 2 points
/// * `width` - Offset of each side from the center line
/// * `scale_at` - Width multiplier near a position; its `y` is used
/// * `index_offset` - Index of the first emitted vertex in the target mesh
///
/// # Errors
///
/// [`MeshError::DegenerateInput`] for fewer than 2 points or a polyline of
/// zero length.
///
/// # Example
///
/// ```rust
/// use vector_mesh::ops::line::extrude_line;
/// use glam::DVec2;
///
/// let ribbon = extrude_line(&[DVec2::ZERO, DVec2::new(100.0, 0.0)], 10.0, |_| DVec2::ONE, 0).unwrap();
/// assert_eq!(ribbon.vertices.len(), 4);
/// assert_eq!(ribbon.indices, vec![0, 1, 3, 3, 2, 0]);
/// ```
pub fn extrude_line(
    points: &[DVec2],
    width: f64,
    scale_at: impl Fn(DVec2) -> DVec2,
    index_offset: u32,
) -> MeshResult<Ribbon> {
    let n = points.len();
    if n < 2 {
        return Err(MeshError::degenerate(format!(
            "polyline needs at least 2 points, got {n}"
        )));
    }
    let length: f64 = points.windows(2).map(|pair| pair[0].distance(pair[1])).sum();
    if length <= 0.0 {
        return Err(MeshError::degenerate("polyline has zero length"));
    }

    let mut ribbon = Ribbon {
        vertices: Vec::with_capacity(n * 2),
        indices: Vec::with_capacity((n - 1) * 6),
    };

    for i in 0..n {
        let normal = vertex_normal(points, i);
        let p = points[i];
        let half_width = width * scale_at(p).y;

        ribbon.vertices.push(p + normal * half_width);
        ribbon.vertices.push(p - normal * half_width);

        if i + 1 < n {
            let t0 = index_offset + 2 * i as u32;
            let t1 = t0 + 1;
            let t2 = t0 + 2;
            let t3 = t0 + 3;
            ribbon.indices.extend_from_slice(&[t0, t1, t3, t3, t2, t0]);
        }
    }

    Ok(ribbon)
}

/// Unit normal of the ribbon at point `index`.
///
/// Zero when the adjacent edges have no length.
pub fn vertex_normal(points: &[DVec2], index: usize) -> DVec2 {
    let n = points.len();
    if n < 2 {
        return DVec2::ZERO;
    }
    let p = points[index];
    let is_last = index == n - 1;
    let direction = if is_last { p - points[index - 1] } else { points[index + 1] - p };

    if index > 0 && !is_last {
        let incoming = p - points[index - 1];
        ((edge_normal(direction) + edge_normal(incoming)) * 0.5).normalize_or_zero()
    } else {
        edge_normal(direction)
    }
}

#[inline]
fn edge_normal(direction: DVec2) -> DVec2 {
    DVec2::new(direction.y, -direction.x).normalize_or_zero()
}

#[cfg(test)]
mod tests;
