//! # Polygon Simplification
//!
//! Removes near-collinear and near-duplicate points from a ring.
//!
//! Both passes walk the ring with explicit cyclic indices and delete in
//! place, re-testing the same index after a removal. A sweep is repeated
//! until it removes nothing, so applying a pass twice equals applying it
//! once. A ring is never reduced below three points.

use config::constants::{COLLINEAR_EPSILON, DUPLICATE_DISTANCE_SQUARED};
use glam::DVec2;

const MIN_RING_LEN: usize = 3;

/// Removes every point that is collinear with its neighbours.
///
/// A point `B` between `A` and `C` is collinear when the doubled signed area
/// of `ABC` is below [`COLLINEAR_EPSILON`].
///
/// # Returns
///
/// The number of points removed.
///
/// # Example
///
/// ```rust
/// use vector_mesh::polygon::remove_collinear_points;
/// use glam::DVec2;
///
/// let mut ring = vec![
///     DVec2::new(0.0, 0.0),
///     DVec2::new(5.0, 0.0),
///     DVec2::new(10.0, 0.0),
///     DVec2::new(10.0, 10.0),
/// ];
/// assert_eq!(remove_collinear_points(&mut ring), 1);
/// assert_eq!(ring.len(), 3);
/// ```
pub fn remove_collinear_points(points: &mut Vec<DVec2>) -> usize {
    remove_until_stable(points, |a, b, c| {
        let area = a.x * (b.y - c.y) + b.x * (c.y - a.y) + c.x * (a.y - b.y);
        area.abs() < COLLINEAR_EPSILON
    })
}

/// Removes every point closer than one unit to its predecessor.
///
/// # Returns
///
/// The number of points removed.
pub fn remove_duplicated_points(points: &mut Vec<DVec2>) -> usize {
    remove_until_stable(points, |a, b, _| a.distance_squared(b) < DUPLICATE_DISTANCE_SQUARED)
}

fn remove_until_stable(points: &mut Vec<DVec2>, is_redundant: impl Fn(DVec2, DVec2, DVec2) -> bool) -> usize {
    let before = points.len();
    while sweep(points, &is_redundant) > 0 {}
    before - points.len()
}

// One pass over the ring. `index` names the middle point of the triple
// and may equal `len`, which wraps to the first point.
fn sweep(points: &mut Vec<DVec2>, is_redundant: &impl Fn(DVec2, DVec2, DVec2) -> bool) -> usize {
    let mut removed = 0;
    let mut index = 1;
    while points.len() > MIN_RING_LEN && index <= points.len() {
        let len = points.len();
        let a = points[index - 1];
        let b = points[index % len];
        let c = points[(index + 1) % len];
        if is_redundant(a, b, c) {
            points.remove(index % len);
            removed += 1;
        } else {
            index += 1;
        }
    }
    removed
}
