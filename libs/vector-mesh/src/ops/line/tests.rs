use super::*;
use approx::assert_relative_eq;
use std::f64::consts::FRAC_1_SQRT_2;

fn unit_scale(_: DVec2) -> DVec2 {
    DVec2::ONE
}

#[test]
fn test_straight_line_width() {
    let ribbon = extrude_line(&[DVec2::ZERO, DVec2::new(100.0, 0.0)], 10.0, unit_scale, 0).unwrap();

    assert_eq!(ribbon.vertices.len(), 4);
    assert_eq!(ribbon.indices.len(), 6);
    assert_eq!(ribbon.triangle_count(), 2);

    let min_y = ribbon.vertices.iter().map(|v| v.y).fold(f64::INFINITY, f64::min);
    let max_y = ribbon.vertices.iter().map(|v| v.y).fold(f64::NEG_INFINITY, f64::max);
    assert_relative_eq!(max_y - min_y, 20.0);
    assert_relative_eq!(max_y + min_y, 0.0);
}

#[test]
fn test_vertex_sides() {
    let ribbon = extrude_line(&[DVec2::ZERO, DVec2::new(100.0, 0.0)], 10.0, unit_scale, 0).unwrap();
    assert_eq!(
        ribbon.vertices,
        vec![
            DVec2::new(0.0, -10.0),
            DVec2::new(0.0, 10.0),
            DVec2::new(100.0, -10.0),
            DVec2::new(100.0, 10.0),
        ]
    );
}

#[test]
fn test_scale_multiplies_width() {
    let ribbon = extrude_line(&[DVec2::ZERO, DVec2::new(50.0, 0.0)], 10.0, |_| DVec2::new(7.0, 2.0), 0).unwrap();
    assert_relative_eq!(ribbon.vertices[1].y - ribbon.vertices[0].y, 40.0);
}

#[test]
fn test_scale_sampled_per_point() {
    let ribbon = extrude_line(
        &[DVec2::ZERO, DVec2::new(50.0, 0.0)],
        1.0,
        |p| DVec2::new(1.0, 1.0 + p.x / 50.0),
        0,
    )
    .unwrap();
    assert_relative_eq!(ribbon.vertices[1].y, 1.0);
    assert_relative_eq!(ribbon.vertices[3].y, 2.0);
}

#[test]
fn test_index_offset_and_quads() {
    let points = [DVec2::ZERO, DVec2::new(10.0, 0.0), DVec2::new(20.0, 5.0)];
    let ribbon = extrude_line(&points, 1.0, unit_scale, 8).unwrap();

    assert_eq!(ribbon.vertices.len(), 6);
    assert_eq!(ribbon.indices, vec![8, 9, 11, 11, 10, 8, 10, 11, 13, 13, 12, 10]);
}

#[test]
fn test_interior_normal_bisects_corner() {
    let points = [DVec2::ZERO, DVec2::new(10.0, 0.0), DVec2::new(10.0, 10.0)];
    let normal = vertex_normal(&points, 1);
    assert_relative_eq!(normal.x, FRAC_1_SQRT_2, epsilon = 1e-12);
    assert_relative_eq!(normal.y, -FRAC_1_SQRT_2, epsilon = 1e-12);
}

#[test]
fn test_last_point_uses_backward_direction() {
    let points = [DVec2::ZERO, DVec2::new(0.0, 10.0)];
    assert_eq!(vertex_normal(&points, 1), DVec2::new(1.0, 0.0));
    assert_eq!(vertex_normal(&points, 0), DVec2::new(1.0, 0.0));
}

#[test]
fn test_degenerate_lines() {
    let single = extrude_line(&[DVec2::ZERO], 1.0, unit_scale, 0);
    assert!(matches!(single, Err(MeshError::DegenerateInput { .. })));

    let zero_length = extrude_line(&[DVec2::ONE, DVec2::ONE], 1.0, unit_scale, 0);
    assert!(matches!(zero_length, Err(MeshError::DegenerateInput { .. })));
}
