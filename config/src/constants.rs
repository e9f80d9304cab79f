//! # Configuration Constants
//!
//! Centralized constants for the vector shape mesh pipeline. Sampling,
//! simplification and triangulation tolerances as well as the defaults of
//! the user-facing mesh settings are defined here.
//!
//! ## Categories
//!
//! - **Precision**: Floating-point comparison tolerances
//! - **Simplification**: Collinear/duplicate thresholds and tolerance range
//! - **Sampling**: Curve subdivision step counts
//! - **Settings**: Defaults and clamps for world size, line width, threshold
//! - **Presentation**: Widget size and default material

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Epsilon for floating-point comparisons.
///
/// Used for determining if two floating-point values are "equal" within
/// numerical tolerance.
///
/// # Example
///
/// ```rust
/// use config::constants::EPSILON;
///
/// fn approximately_equal(a: f64, b: f64) -> bool {
///     (a - b).abs() < EPSILON
/// }
///
/// assert!(approximately_equal(1.0, 1.0 + 1e-11));
/// ```
pub const EPSILON: f64 = 1e-10;

/// Minimum doubled signed area for a triangle to count as an ear.
///
/// Candidate ears whose cross product falls below this value are rejected
/// as reflex or degenerate during ear clipping.
///
/// # Example
///
/// ```rust
/// use config::constants::TRIANGULATION_EPSILON;
///
/// let doubled_area: f64 = 0.0;
/// assert!(doubled_area < TRIANGULATION_EPSILON); // zero-area ear rejected
/// ```
pub const TRIANGULATION_EPSILON: f64 = 1e-10;

// =============================================================================
// SIMPLIFICATION CONSTANTS
// =============================================================================

/// Doubled triangle area below which the middle point of a triple is
/// treated as collinear and removed.
///
/// # Example
///
/// ```rust
/// use config::constants::COLLINEAR_EPSILON;
///
/// // (0,0), (1,0), (2,1e-5) are collinear within tolerance
/// let area: f64 = 0.0 * (0.0 - 1e-5) + 1.0 * (1e-5 - 0.0) + 2.0 * (0.0 - 0.0);
/// assert!(area.abs() < COLLINEAR_EPSILON);
/// ```
pub const COLLINEAR_EPSILON: f64 = 1e-4;

/// Squared distance below which two consecutive points are duplicates.
///
/// Unit-dependent: with world units in centimeters this merges points
/// closer than one unit.
pub const DUPLICATE_DISTANCE_SQUARED: f64 = 1.0;

/// Cosine tolerance used for a simplification threshold of `0.0`.
pub const MIN_SIMPLIFICATION_TOLERANCE: f64 = 0.25;

/// Cosine tolerance used for a simplification threshold of `1.0`.
pub const MAX_SIMPLIFICATION_TOLERANCE: f64 = 0.9995;

// =============================================================================
// SAMPLING CONSTANTS
// =============================================================================

/// Default number of sub-steps per curve segment in fixed step mode.
pub const DEFAULT_STEPS_PER_SEGMENT: u32 = 20;

/// Lower clamp for fixed sub-steps per segment.
pub const MIN_STEPS_PER_SEGMENT: u32 = 1;

/// Upper clamp for fixed sub-steps per segment.
pub const MAX_STEPS_PER_SEGMENT: u32 = 100;

/// Samples per segment of a curve's reparameterization table.
///
/// The adaptive step mode walks one sub-step per table entry, so the table
/// length bounds the number of candidate samples on a curved segment.
///
/// # Example
///
/// ```rust
/// use config::constants::REPARAM_STEPS_PER_SEGMENT;
///
/// let segments = 4;
/// let table_len = REPARAM_STEPS_PER_SEGMENT as usize * segments + 1;
/// assert_eq!(table_len, 41);
/// ```
pub const REPARAM_STEPS_PER_SEGMENT: u32 = 10;

// =============================================================================
// SETTINGS CONSTANTS
// =============================================================================

/// Default declared world size (width, height) of the drawing canvas.
pub const DEFAULT_WORLD_SIZE: [f64; 2] = [100.0, 100.0];

/// Minimum allowed world size component.
pub const MIN_WORLD_SIZE: f64 = 5.0;

/// Default half-width of extruded line shapes.
pub const DEFAULT_LINE_WIDTH: f64 = 100.0;

/// Minimum allowed line width.
pub const MIN_LINE_WIDTH: f64 = 1.0;

/// Default user simplification threshold in `[0, 1]`.
///
/// # Example
///
/// ```rust
/// use config::constants::DEFAULT_SIMPLIFICATION_THRESHOLD;
///
/// assert!((0.0..=1.0).contains(&DEFAULT_SIMPLIFICATION_THRESHOLD));
/// ```
pub const DEFAULT_SIMPLIFICATION_THRESHOLD: f64 = 0.98;

/// Half extent of a newly created rectangle shape.
pub const DEFAULT_NEW_SHAPE_EXTENT: [f64; 2] = [100.0, 100.0];

// =============================================================================
// PRESENTATION CONSTANTS
// =============================================================================

/// Desired widget size in slate units for a square mesh.
pub const DEFAULT_WIDGET_SIZE: [f64; 2] = [512.0, 512.0];

/// Material assigned to rebuilt mesh sections when none is supplied.
pub const DEFAULT_MESH_MATERIAL: &str = "VectorShapeMaterial";

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Exponential ease-out on `alpha` in `[0, 1]`.
///
/// Returns `1 - 2^(-10 * alpha)`, which rises steeply near zero and
/// flattens towards one.
///
/// # Example
///
/// ```rust
/// use config::constants::ease_expo_out;
///
/// assert_eq!(ease_expo_out(0.0), 0.0);
/// assert!(ease_expo_out(1.0) > 0.999);
/// ```
#[inline]
pub fn ease_expo_out(alpha: f64) -> f64 {
    1.0 - 2f64.powf(-10.0 * alpha)
}

/// Maps a user simplification threshold to a cosine-similarity tolerance.
///
/// The threshold is clamped to `[0, 1]`, eased with [`ease_expo_out`] and
/// interpolated between [`MIN_SIMPLIFICATION_TOLERANCE`] and
/// [`MAX_SIMPLIFICATION_TOLERANCE`].
///
/// # Arguments
///
/// * `threshold` - User-facing threshold; higher keeps more samples, giving
///   finer output
///
/// # Returns
///
/// Minimum dot product between consecutive tangent directions for a sample
/// to be skipped.
///
/// # Example
///
/// ```rust
/// use config::constants::{simplification_tolerance, MIN_SIMPLIFICATION_TOLERANCE};
///
/// assert_eq!(simplification_tolerance(0.0), MIN_SIMPLIFICATION_TOLERANCE);
/// assert!(simplification_tolerance(0.5) < simplification_tolerance(0.9));
/// ```
pub fn simplification_tolerance(threshold: f64) -> f64 {
    let alpha = ease_expo_out(threshold.clamp(0.0, 1.0));
    MIN_SIMPLIFICATION_TOLERANCE + (MAX_SIMPLIFICATION_TOLERANCE - MIN_SIMPLIFICATION_TOLERANCE) * alpha
}

/// Checks if two f64 values are approximately equal within EPSILON.
///
/// # Example
///
/// ```rust
/// use config::constants::approx_equal;
///
/// assert!(approx_equal(1.0, 1.0 + 1e-11));
/// assert!(!approx_equal(1.0, 1.1));
/// ```
#[inline]
pub fn approx_equal(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

/// Checks if a f64 value is approximately zero within EPSILON.
#[inline]
pub fn approx_zero(value: f64) -> bool {
    value.abs() < EPSILON
}
