//! # Curves
//!
//! Piecewise cubic curves that shapes are authored with.
//!
//! The pipeline only talks to curves through [`CurveSource`], so a host can
//! plug in its own spline math. [`SplineCurve`] is the bundled
//! implementation: cubic Hermite segments between integer keys, one key per
//! control point.
//!
//! ## Keys
//!
//! ```text
//! key:    0 ─────── 1 ─────── 2 ─────── 3 (─── 0 when closed)
//! point:  P0        P1        P2        P3
//! ```
//!
//! The fractional part of a key is the parameter inside the segment that
//! leaves the point with the integer part.

pub mod sampler;

use config::constants::REPARAM_STEPS_PER_SEGMENT;
use glam::{DVec2, DVec3};
use serde::{Deserialize, Serialize};

pub use sampler::{CurveSampler, StepMode};

// =============================================================================
// CURVE CONTRACT
// =============================================================================

/// Read-only access to an evaluated curve.
pub trait CurveSource {
    /// Number of control points.
    fn point_count(&self) -> usize;

    /// Position of control point `index`.
    fn point_position(&self, index: usize) -> DVec3;

    /// Tangent leaving control point `index`.
    fn leave_tangent(&self, index: usize) -> DVec3;

    /// Returns true if the segment leaving point `index` is a straight line
    /// or does not exist.
    fn is_linear_segment(&self, index: usize) -> bool;

    /// Returns true if the last point connects back to the first.
    fn is_closed_loop(&self) -> bool;

    /// Position at `key`.
    fn sample_at(&self, key: f64) -> DVec3;

    /// First derivative with respect to the key at `key`.
    fn derivative_at(&self, key: f64) -> DVec3;

    /// Length of the curve's reparameterization table.
    fn reparam_table_len(&self) -> usize;

    /// Width multiplier of the curve closest to `position`.
    fn scale_at(&self, position: DVec2) -> DVec2;

    /// Control point positions projected onto the XY plane.
    fn control_points_2d(&self) -> Vec<DVec2> {
        (0..self.point_count())
            .map(|i| self.point_position(i).truncate())
            .collect()
    }
}

// =============================================================================
// SPLINE POINTS
// =============================================================================

/// How a segment leaving a control point is interpolated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum InterpMode {
    /// Straight line to the next point
    Linear,
    /// Hermite with user-edited, mirrored tangents
    CurveUser,
    /// Hermite with automatic tangents
    #[default]
    CurveAuto,
    /// Automatic tangents flattened at local extrema
    CurveAutoClamped,
    /// Hermite with independent arrive and leave tangents
    CurveBreak,
}

impl InterpMode {
    /// Returns true for every mode except [`InterpMode::Linear`].
    #[inline]
    pub fn is_curve(self) -> bool {
        self != InterpMode::Linear
    }

    fn is_auto(self) -> bool {
        matches!(self, InterpMode::CurveAuto | InterpMode::CurveAutoClamped)
    }
}

/// A control point of a [`SplineCurve`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SplinePoint {
    /// Location of the point
    pub position: DVec3,
    /// Tangent entering the point
    pub arrive_tangent: DVec3,
    /// Tangent leaving the point
    pub leave_tangent: DVec3,
    /// Interpolation of the segment leaving the point
    pub mode: InterpMode,
    /// Width multiplier at the point
    pub scale: DVec2,
}

impl SplinePoint {
    /// Creates a point with zero tangents and unit scale.
    pub fn new(position: DVec3, mode: InterpMode) -> Self {
        Self {
            position,
            arrive_tangent: DVec3::ZERO,
            leave_tangent: DVec3::ZERO,
            mode,
            scale: DVec2::ONE,
        }
    }

    /// Creates a linear point on the XY plane.
    pub fn linear(position: DVec2) -> Self {
        Self::new(position.extend(0.0), InterpMode::Linear)
    }

    /// Creates a point with explicit mirrored tangents.
    pub fn with_tangent(position: DVec3, tangent: DVec3) -> Self {
        Self {
            arrive_tangent: tangent,
            leave_tangent: tangent,
            ..Self::new(position, InterpMode::CurveUser)
        }
    }

    /// Sets the width multiplier.
    pub fn with_scale(mut self, scale: DVec2) -> Self {
        self.scale = scale;
        self
    }
}

// =============================================================================
// SPLINE CURVE
// =============================================================================

/// Cubic Hermite spline over integer keys.
///
/// # Example
///
/// ```rust
/// use vector_mesh::curve::{CurveSource, SplineCurve};
/// use glam::{DVec2, DVec3};
///
/// let curve = SplineCurve::from_linear_points(&[DVec2::ZERO, DVec2::new(10.0, 0.0)], false);
/// assert_eq!(curve.sample_at(0.5), DVec3::new(5.0, 0.0, 0.0));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SplineCurve {
    points: Vec<SplinePoint>,
    closed: bool,
}

impl SplineCurve {
    /// Creates a curve and computes automatic tangents.
    pub fn new(points: Vec<SplinePoint>, closed: bool) -> Self {
        let mut curve = Self { points, closed };
        curve.auto_set_tangents();
        curve
    }

    /// Creates a curve of straight segments.
    pub fn from_linear_points(points: &[DVec2], closed: bool) -> Self {
        Self::new(points.iter().copied().map(SplinePoint::linear).collect(), closed)
    }

    /// Returns the control points.
    pub fn points(&self) -> &[SplinePoint] {
        &self.points
    }

    /// Appends a control point and refreshes automatic tangents.
    pub fn push_point(&mut self, point: SplinePoint) {
        self.points.push(point);
        self.auto_set_tangents();
    }

    /// Opens or closes the loop and refreshes automatic tangents.
    pub fn set_closed_loop(&mut self, closed: bool) {
        if self.closed != closed {
            self.closed = closed;
            self.auto_set_tangents();
        }
    }

    /// Number of segments between control points.
    pub fn segment_count(&self) -> usize {
        match self.points.len() {
            0 | 1 => 0,
            n if self.closed => n,
            n => n - 1,
        }
    }

    /// Recomputes tangents of points in an automatic mode.
    ///
    /// Automatic tangents are Catmull-Rom style, `(next - prev) / 2`.
    /// Clamped points zero each component where the point is a local
    /// extreme. End points of open curves get zero tangents.
    pub fn auto_set_tangents(&mut self) {
        let n = self.points.len();
        for i in 0..n {
            let mode = self.points[i].mode;
            if !mode.is_auto() {
                continue;
            }

            let neighbours = if self.closed && n > 1 {
                Some(((i + n - 1) % n, (i + 1) % n))
            } else if i > 0 && i + 1 < n {
                Some((i - 1, i + 1))
            } else {
                None
            };

            let tangent = match neighbours {
                None => DVec3::ZERO,
                Some((prev, next)) => {
                    let prev = self.points[prev].position;
                    let next = self.points[next].position;
                    let mut tangent = (next - prev) * 0.5;
                    if mode == InterpMode::CurveAutoClamped {
                        let here = self.points[i].position;
                        for axis in 0..3 {
                            let is_extreme = (here[axis] >= prev[axis] && here[axis] >= next[axis])
                                || (here[axis] <= prev[axis] && here[axis] <= next[axis]);
                            if is_extreme {
                                tangent[axis] = 0.0;
                            }
                        }
                    }
                    tangent
                }
            };

            self.points[i].arrive_tangent = tangent;
            self.points[i].leave_tangent = tangent;
        }
    }

    // Splits a key into (start point, end point, t).
    fn locate(&self, key: f64) -> Option<(usize, usize, f64)> {
        let segments = self.segment_count();
        if segments == 0 {
            return None;
        }
        let key = key.clamp(0.0, segments as f64);
        let segment = (key.floor() as usize).min(segments - 1);
        let t = key - segment as f64;
        Some((segment, (segment + 1) % self.points.len(), t))
    }
}

impl CurveSource for SplineCurve {
    fn point_count(&self) -> usize {
        self.points.len()
    }

    fn point_position(&self, index: usize) -> DVec3 {
        self.points[index].position
    }

    fn leave_tangent(&self, index: usize) -> DVec3 {
        self.points[index].leave_tangent
    }

    fn is_linear_segment(&self, index: usize) -> bool {
        index >= self.segment_count() || !self.points[index].mode.is_curve()
    }

    fn is_closed_loop(&self) -> bool {
        self.closed
    }

    fn sample_at(&self, key: f64) -> DVec3 {
        let Some((start, end, t)) = self.locate(key) else {
            return self.points.first().map_or(DVec3::ZERO, |p| p.position);
        };
        let a = &self.points[start];
        let b = &self.points[end];
        if !a.mode.is_curve() {
            return a.position.lerp(b.position, t);
        }

        let t2 = t * t;
        let t3 = t2 * t;
        a.position * (2.0 * t3 - 3.0 * t2 + 1.0)
            + a.leave_tangent * (t3 - 2.0 * t2 + t)
            + b.position * (-2.0 * t3 + 3.0 * t2)
            + b.arrive_tangent * (t3 - t2)
    }

    fn derivative_at(&self, key: f64) -> DVec3 {
        let Some((start, end, t)) = self.locate(key) else {
            return DVec3::ZERO;
        };
        let a = &self.points[start];
        let b = &self.points[end];
        if !a.mode.is_curve() {
            return b.position - a.position;
        }

        let t2 = t * t;
        a.position * (6.0 * t2 - 6.0 * t)
            + a.leave_tangent * (3.0 * t2 - 4.0 * t + 1.0)
            + b.position * (-6.0 * t2 + 6.0 * t)
            + b.arrive_tangent * (3.0 * t2 - 2.0 * t)
    }

    fn reparam_table_len(&self) -> usize {
        if self.points.is_empty() {
            return 0;
        }
        self.segment_count() * REPARAM_STEPS_PER_SEGMENT as usize + 1
    }

    fn scale_at(&self, position: DVec2) -> DVec2 {
        let Some(first) = self.points.first() else {
            return DVec2::ONE;
        };
        let segments = self.segment_count();
        if segments == 0 {
            return first.scale;
        }

        // Closest sample of the reparameterization table.
        let steps = REPARAM_STEPS_PER_SEGMENT as usize;
        let mut best_key = 0.0;
        let mut best_distance = f64::INFINITY;
        for sample in 0..=segments * steps {
            let key = sample as f64 / steps as f64;
            let distance = self.sample_at(key).truncate().distance_squared(position);
            if distance < best_distance {
                best_distance = distance;
                best_key = key;
            }
        }

        match self.locate(best_key) {
            Some((start, end, t)) => self.points[start].scale.lerp(self.points[end].scale, t),
            None => first.scale,
        }
    }
}
