//! # Tests for Config Constants
//!
//! Unit tests verifying the correctness of configuration constants
//! and helper functions.

use crate::constants::*;

// =============================================================================
// PRECISION TESTS
// =============================================================================

#[test]
fn test_epsilon_is_positive() {
    assert!(EPSILON > 0.0, "EPSILON must be positive");
    assert!(TRIANGULATION_EPSILON > 0.0);
}

#[test]
fn test_collinear_epsilon_larger_than_epsilon() {
    assert!(
        COLLINEAR_EPSILON > EPSILON,
        "COLLINEAR_EPSILON should be coarser than EPSILON"
    );
}

// =============================================================================
// SIMPLIFICATION TESTS
// =============================================================================

#[test]
fn test_tolerance_range_is_ordered() {
    assert!(MIN_SIMPLIFICATION_TOLERANCE < MAX_SIMPLIFICATION_TOLERANCE);
    assert!(MAX_SIMPLIFICATION_TOLERANCE < 1.0);
}

#[test]
fn test_simplification_tolerance_endpoints() {
    assert_eq!(simplification_tolerance(0.0), MIN_SIMPLIFICATION_TOLERANCE);

    let expected_top = MIN_SIMPLIFICATION_TOLERANCE
        + (MAX_SIMPLIFICATION_TOLERANCE - MIN_SIMPLIFICATION_TOLERANCE) * (1.0 - 2f64.powi(-10));
    assert!(approx_equal(simplification_tolerance(1.0), expected_top));
}

#[test]
fn test_simplification_tolerance_clamps_threshold() {
    assert_eq!(simplification_tolerance(-3.0), simplification_tolerance(0.0));
    assert_eq!(simplification_tolerance(7.0), simplification_tolerance(1.0));
}

#[test]
fn test_simplification_tolerance_is_monotonic() {
    let mut previous = simplification_tolerance(0.0);
    for step in 1..=10 {
        let current = simplification_tolerance(step as f64 / 10.0);
        assert!(current > previous, "tolerance must grow with threshold");
        previous = current;
    }
}

#[test]
fn test_ease_expo_out_half() {
    let expected = 1.0 - 1.0 / 32.0;
    assert!(approx_equal(ease_expo_out(0.5), expected));
}

// =============================================================================
// SETTINGS TESTS
// =============================================================================

#[test]
fn test_step_range_contains_default() {
    assert!((MIN_STEPS_PER_SEGMENT..=MAX_STEPS_PER_SEGMENT).contains(&DEFAULT_STEPS_PER_SEGMENT));
}

#[test]
fn test_default_world_size_above_minimum() {
    assert!(DEFAULT_WORLD_SIZE.iter().all(|&v| v >= MIN_WORLD_SIZE));
    assert!(DEFAULT_LINE_WIDTH >= MIN_LINE_WIDTH);
}

// =============================================================================
// HELPER TESTS
// =============================================================================

#[test]
fn test_approx_zero() {
    assert!(approx_zero(0.0));
    assert!(approx_zero(1e-11));
    assert!(!approx_zero(1e-9));
}
