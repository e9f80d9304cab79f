//! # Curve Sampler
//!
//! Flattens a [`CurveSource`] into a polyline.
//!
//! Every control point is emitted. Curved segments are walked in equal key
//! steps and a step is only emitted when the curve direction has turned away
//! from the last emitted direction by more than the tolerance, so the point
//! count follows curvature rather than a fixed rate.

use super::CurveSource;
use crate::polygon::{is_winding_ccw, Polygon2D};
use config::constants::{simplification_tolerance, MAX_STEPS_PER_SEGMENT, MIN_STEPS_PER_SEGMENT};
use glam::DVec3;
use serde::{Deserialize, Serialize};

/// How many sub-steps a curved segment is walked in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StepMode {
    /// Fixed count per segment, clamped to `[1, 100]`
    Fixed(u32),
    /// Length of the curve's reparameterization table
    Adaptive,
}

impl StepMode {
    /// Resolves the number of steps for `curve`.
    pub fn num_steps<C: CurveSource + ?Sized>(self, curve: &C) -> usize {
        match self {
            StepMode::Fixed(steps) => steps.clamp(MIN_STEPS_PER_SEGMENT, MAX_STEPS_PER_SEGMENT) as usize,
            StepMode::Adaptive => curve.reparam_table_len().max(1),
        }
    }
}

/// Adaptive curve-to-polyline sampler.
///
/// # Example
///
/// ```rust
/// use vector_mesh::curve::{CurveSampler, SplineCurve, StepMode};
/// use glam::DVec2;
///
/// let square = SplineCurve::from_linear_points(
///     &[DVec2::ZERO, DVec2::X, DVec2::ONE, DVec2::Y],
///     true,
/// );
/// let sampler = CurveSampler::from_threshold(&square, StepMode::Fixed(20), 0.98);
/// assert_eq!(sampler.samples().count(), 4);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct CurveSampler<'a, C: CurveSource + ?Sized> {
    curve: &'a C,
    num_steps: usize,
    tolerance: f64,
}

impl<'a, C: CurveSource + ?Sized> CurveSampler<'a, C> {
    /// Creates a sampler with an explicit cosine tolerance.
    ///
    /// # Arguments
    ///
    /// * `curve` - Curve to flatten
    /// * `mode` - Sub-step resolution of curved segments
    /// * `tolerance` - Minimum dot product between the last emitted
    ///   direction and a candidate direction for the candidate to be skipped
    pub fn new(curve: &'a C, mode: StepMode, tolerance: f64) -> Self {
        Self {
            curve,
            num_steps: mode.num_steps(curve),
            tolerance,
        }
    }

    /// Creates a sampler from a user threshold in `[0, 1]`.
    pub fn from_threshold(curve: &'a C, mode: StepMode, threshold: f64) -> Self {
        Self::new(curve, mode, simplification_tolerance(threshold))
    }

    /// Number of sub-steps per curved segment.
    pub fn num_steps(&self) -> usize {
        self.num_steps
    }

    /// Cosine tolerance in use.
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Returns a fresh iterator over the sampled positions.
    ///
    /// Each call starts over from the first control point.
    pub fn samples(&self) -> Samples<'a, C> {
        Samples {
            curve: self.curve,
            num_steps: self.num_steps,
            tolerance: self.tolerance,
            point: 0,
            step: 0,
            carried: DVec3::ZERO,
        }
    }

    /// Appends every sample to `polygon`, keeping it counter-clockwise.
    ///
    /// Samples are appended when the control points wind counter-clockwise
    /// and prepended otherwise.
    ///
    /// # Returns
    ///
    /// The number of points added.
    pub fn append_to(&self, polygon: &mut Polygon2D) -> usize {
        let is_ccw = is_winding_ccw(&self.curve.control_points_2d());
        let before = polygon.len();
        for sample in self.samples() {
            polygon.add_point(sample.truncate(), is_ccw);
        }
        polygon.len() - before
    }
}

/// Iterator returned by [`CurveSampler::samples`].
#[derive(Debug, Clone)]
pub struct Samples<'a, C: CurveSource + ?Sized> {
    curve: &'a C,
    num_steps: usize,
    tolerance: f64,
    point: usize,
    // 0 means the control point itself is next
    step: usize,
    carried: DVec3,
}

impl<C: CurveSource + ?Sized> Iterator for Samples<'_, C> {
    type Item = DVec3;

    fn next(&mut self) -> Option<DVec3> {
        while self.point < self.curve.point_count() {
            if self.step == 0 {
                let position = self.curve.point_position(self.point);
                self.carried = self.curve.leave_tangent(self.point).normalize_or_zero();
                if self.curve.is_linear_segment(self.point) || self.num_steps < 2 {
                    self.point += 1;
                } else {
                    self.step = 1;
                }
                return Some(position);
            }

            if self.step >= self.num_steps {
                self.point += 1;
                self.step = 0;
                continue;
            }

            let key = self.point as f64 + self.step as f64 / self.num_steps as f64;
            self.step += 1;

            let direction = self.curve.derivative_at(key).normalize_or_zero();
            if self.carried.dot(direction) >= self.tolerance {
                continue;
            }
            self.carried = direction;
            return Some(self.curve.sample_at(key));
        }
        None
    }
}
