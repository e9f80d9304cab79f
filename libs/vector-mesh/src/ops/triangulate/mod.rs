//! # Polygon Triangulation
//!
//! Converts a simple counter-clockwise polygon into a flat triangle index
//! list.
//!
//! ## Algorithm
//!
//! - **Convex fast path**: a fan `(0, i, i + 1)` when the caller allows it
//!   and the outline is convex
//! - **Ear clipping**: Ratcliff's "Efficient Polygon Triangulation"
//!
//! Ear clipping scans consecutive working vertices `(u, v, w)` and clips
//! `v` when the triangle turns counter-clockwise by at least
//! [`TRIANGULATION_EPSILON`] and no other remaining vertex lies inside or on
//! it. Clipped triangles are emitted as `(w, v, u)`.
//!
//! A loop guard of `2 * m` attempts, reset after every clip, bounds the work
//! on non-simple input such as exactly overlapping adjacent points.

use crate::error::{MeshError, MeshResult};
use config::constants::TRIANGULATION_EPSILON;
use glam::DVec2;
use robust::{orient2d, Coord};
use std::f64::consts::TAU;

/// Triangulates a polygon, appending indices offset by `index_offset`.
///
/// # Arguments
///
/// * `points` - Outline, counter-clockwise with Y up
/// * `indices` - Output list; receives exactly `3 * (n - 2)` indices on success
/// * `index_offset` - Added to every emitted index
/// * `allow_convex_fastpath` - Use a fan for convex outlines
///
/// # Errors
///
/// - [`MeshError::DegenerateInput`] for fewer than 3 points
/// - [`MeshError::NonSimplePolygon`] when no ear can be found; nothing is
///   appended to `indices` in that case
///
/// # Example
///
/// ```rust
/// use vector_mesh::ops::triangulate::triangulate;
/// use glam::DVec2;
///
/// let square = [DVec2::ZERO, DVec2::X, DVec2::ONE, DVec2::Y];
/// let mut indices = Vec::new();
/// triangulate(&square, &mut indices, 10, false).unwrap();
/// assert_eq!(indices.len(), 6);
/// assert!(indices.iter().all(|&i| (10..14).contains(&i)));
/// ```
pub fn triangulate(
    points: &[DVec2],
    indices: &mut Vec<u32>,
    index_offset: u32,
    allow_convex_fastpath: bool,
) -> MeshResult<()> {
    let n = points.len();
    if n < 3 {
        return Err(MeshError::degenerate(format!(
            "polygon needs at least 3 points, got {n}"
        )));
    }

    if allow_convex_fastpath && is_convex(points) {
        triangulate_fan(n, indices, index_offset);
        return Ok(());
    }

    let start_len = indices.len();
    let result = clip_ears(points, indices, index_offset);
    if result.is_err() {
        indices.truncate(start_len);
    }
    result
}

/// Appends the fan `(0, i, i + 1)` for `i in 1..n - 1`.
pub fn triangulate_fan(vertex_count: usize, indices: &mut Vec<u32>, index_offset: u32) {
    indices.reserve(vertex_count.saturating_sub(2) * 3);
    for i in 1..vertex_count.saturating_sub(1) {
        let i = i as u32;
        indices.extend_from_slice(&[index_offset, index_offset + i, index_offset + i + 1]);
    }
}

/// Returns true if the outline is convex.
///
/// Every non-zero turn must have the same orientation and the turns must
/// add up to a single revolution, which rejects star-shaped outlines.
/// Collinear vertices are ignored.
pub fn is_convex(points: &[DVec2]) -> bool {
    let n = points.len();
    if n < 3 {
        return false;
    }

    let mut sign = 0.0_f64;
    let mut total_turn = 0.0;
    for i in 0..n {
        let a = points[i];
        let b = points[(i + 1) % n];
        let c = points[(i + 2) % n];

        let orientation = orient2d(coord(a), coord(b), coord(c));
        if orientation != 0.0 {
            if sign != 0.0 && orientation.signum() != sign {
                return false;
            }
            sign = orientation.signum();
        }

        let incoming = b - a;
        let outgoing = c - b;
        total_turn += incoming.perp_dot(outgoing).atan2(incoming.dot(outgoing));
    }

    sign != 0.0 && (total_turn.abs() - TAU).abs() < 1e-6
}

/// Unsigned area of triangle `abc`.
#[inline]
pub fn triangle_area(a: DVec2, b: DVec2, c: DVec2) -> f64 {
    (b - a).perp_dot(c - a).abs() * 0.5
}

/// Total unsigned area of the triangles in `indices`.
///
/// `index_offset` is subtracted from every index before lookup. Triangles
/// with an index below the offset or past the end of `points` are skipped.
pub fn triangulated_area(points: &[DVec2], indices: &[u32], index_offset: u32) -> f64 {
    let vertex = |i: u32| {
        i.checked_sub(index_offset)
            .and_then(|local| points.get(local as usize))
            .copied()
    };
    indices
        .chunks_exact(3)
        .filter_map(|tri| Some(triangle_area(vertex(tri[0])?, vertex(tri[1])?, vertex(tri[2])?)))
        .sum()
}

#[inline]
fn coord(p: DVec2) -> Coord<f64> {
    Coord { x: p.x, y: p.y }
}

fn clip_ears(points: &[DVec2], indices: &mut Vec<u32>, index_offset: u32) -> MeshResult<()> {
    let mut remaining: Vec<usize> = (0..points.len()).collect();
    let mut guard = 2 * remaining.len();
    let mut v = remaining.len() - 1;

    while remaining.len() > 2 {
        let m = remaining.len();

        guard -= 1;
        if guard == 0 {
            return Err(MeshError::non_simple(points.len()));
        }

        let u = if v < m { v } else { 0 };
        v = if u + 1 < m { u + 1 } else { 0 };
        let w = if v + 1 < m { v + 1 } else { 0 };

        if is_ear(points, &remaining, u, v, w) {
            indices.extend_from_slice(&[
                index_offset + remaining[w] as u32,
                index_offset + remaining[v] as u32,
                index_offset + remaining[u] as u32,
            ]);
            remaining.remove(v);
            guard = 2 * remaining.len();
        }
    }

    Ok(())
}

fn is_ear(points: &[DVec2], remaining: &[usize], u: usize, v: usize, w: usize) -> bool {
    let a = points[remaining[u]];
    let b = points[remaining[v]];
    let c = points[remaining[w]];

    if (b - a).perp_dot(c - a) < TRIANGULATION_EPSILON {
        return false;
    }

    !remaining
        .iter()
        .enumerate()
        .filter(|&(slot, _)| slot != u && slot != v && slot != w)
        .any(|(_, &p)| inside_or_on_triangle(a, b, c, points[p]))
}

// Inclusive: points on an edge or coinciding with a corner count as inside.
fn inside_or_on_triangle(a: DVec2, b: DVec2, c: DVec2, p: DVec2) -> bool {
    (c - b).perp_dot(p - b) >= 0.0 && (b - a).perp_dot(p - a) >= 0.0 && (a - c).perp_dot(p - c) >= 0.0
}
