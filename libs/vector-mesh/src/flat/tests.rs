use super::*;
use crate::mesh::Attribute;
use crate::settings::MeshSettings;
use crate::shape::{Shape, ShapeKind};
use approx::assert_relative_eq;
use glam::{DAffine2, DVec3};

fn section_with(positions: Vec<DVec3>, indices: Vec<u32>) -> MeshSection {
    let mut section = MeshSection::new();
    section.colors = vec![Color::BLACK; positions.len()];
    section.positions = positions;
    section.indices = indices;
    section.normals = Attribute::Uniform(DVec3::Z);
    section.tangents = Attribute::Uniform(DVec3::X);
    section.uvs = Attribute::Uniform(DVec2::ONE);
    section
}

// =============================================================================
// PROJECTION
// =============================================================================

#[test]
fn test_positions_normalized_to_unit_square() {
    let section = section_with(
        vec![DVec3::new(-50.0, 50.0, 0.0), DVec3::new(25.0, 0.0, 0.0), DVec3::new(50.0, -100.0, 0.0)],
        vec![0, 1, 2],
    );
    let flat = project_to_flat(Some(&section), DVec2::new(100.0, 200.0));

    assert_eq!(flat.mesh_size, DVec2::new(100.0, 200.0));
    assert_eq!(flat.vertices[0].position, Vec2::new(-1.0, 0.5));
    assert_eq!(flat.vertices[1].position, Vec2::new(0.5, 0.0));
    assert_eq!(flat.vertices[2].position, Vec2::new(1.0, -1.0));
    assert!(flat.vertices.iter().all(|v| v.color == Color::BLACK.packed()));
}

#[test]
fn test_missing_colors_become_white() {
    let mut section = section_with(vec![DVec3::ZERO, DVec3::X, DVec3::Y], vec![0, 1, 2]);
    section.colors.truncate(1);
    let flat = project_to_flat(Some(&section), DVec2::splat(10.0));

    assert_eq!(flat.vertices[0].color, 0xFF00_0000);
    assert_eq!(flat.vertices[1].color, 0xFFFF_FFFF);
    assert_eq!(flat.vertices[2].color, 0xFFFF_FFFF);
}

#[test]
fn test_missing_section_yields_empty_buffer() {
    let flat = project_to_flat(None, DVec2::splat(100.0));
    assert!(flat.is_empty());
    assert_eq!(flat.mesh_size, DVec2::splat(100.0));
}

#[test]
fn test_invalid_world_size_zeroes_mesh_size() {
    let section = section_with(vec![DVec3::ZERO, DVec3::X, DVec3::Y], vec![0, 1, 2]);
    for world_size in [DVec2::ZERO, DVec2::new(100.0, 0.0), DVec2::new(-1.0, 100.0)] {
        let flat = project_to_flat(Some(&section), world_size);
        assert!(flat.vertices.is_empty());
        assert!(flat.indices.is_empty());
        assert_eq!(flat.mesh_size, DVec2::ZERO);
    }
}

#[test]
fn test_trailing_partial_triangle_dropped() {
    let section = section_with(vec![DVec3::ZERO, DVec3::X, DVec3::Y], vec![0, 1, 2, 2, 1]);
    let flat = project_to_flat(Some(&section), DVec2::splat(10.0));
    assert_eq!(flat.indices, vec![0, 1, 2]);
    assert_eq!(flat.triangle_count(), 1);
}

// =============================================================================
// DEPTH SORT
// =============================================================================

#[test]
fn test_triangles_sorted_back_to_front() {
    let section = section_with(
        vec![
            DVec3::new(0.0, 0.0, 5.0),
            DVec3::new(1.0, 0.0, 5.0),
            DVec3::new(0.0, 1.0, 5.0),
            DVec3::new(0.0, 0.0, 1.0),
            DVec3::new(1.0, 0.0, 1.0),
            DVec3::new(0.0, 1.0, 1.0),
        ],
        vec![0, 1, 2, 3, 4, 5],
    );
    let flat = project_to_flat(Some(&section), DVec2::splat(10.0));
    assert_eq!(flat.indices, vec![3, 4, 5, 0, 1, 2]);
}

#[test]
fn test_depth_sort_uses_first_vertex_and_is_stable() {
    let positions = vec![
        DVec3::new(0.0, 0.0, 2.0),
        DVec3::new(0.0, 0.0, 0.0),
        DVec3::new(0.0, 0.0, 2.0),
        DVec3::new(0.0, 0.0, 9.0),
    ];
    let section = section_with(positions, Vec::new());

    // First vertices: 0 (z 2), 2 (z 2), 1 (z 0). Vertex 3 only trails.
    let mut indices = vec![0, 3, 3, 2, 3, 3, 1, 3, 3];
    sort_triangles_by_depth(&mut indices, &section);
    assert_eq!(indices, vec![1, 3, 3, 0, 3, 3, 2, 3, 3]);
}

#[test]
fn test_depth_sort_preserves_triangle_multiset() {
    let positions: Vec<DVec3> = (0..9).map(|i| DVec3::new(0.0, 0.0, f64::from(8 - i))).collect();
    let section = section_with(positions, Vec::new());
    let original: Vec<u32> = (0..9).collect();

    let mut indices = original.clone();
    sort_triangles_by_depth(&mut indices, &section);
    assert_eq!(indices, vec![6, 7, 8, 3, 4, 5, 0, 1, 2]);

    let mut sorted = indices.clone();
    sorted.sort_unstable();
    assert_eq!(sorted, original);
}

// =============================================================================
// CACHE
// =============================================================================

fn square_component() -> MeshComponent {
    let mut component = MeshComponent::default();
    let shapes = [Shape::new_rect(DVec2::ZERO, DVec2::splat(50.0), ShapeKind::Polygon)];
    component.rebuild(&shapes, &MeshSettings::default());
    component
}

#[test]
fn test_cache_refreshes_only_on_new_revision() {
    let mut component = square_component();
    let mut cache = FlatShapeData::new();

    assert_eq!(cache.refresh(&component, 0), Ok(true));
    assert_eq!(cache.source_revision(), Some(component.revision()));
    assert_eq!(cache.buffer().vertices.len(), 4);
    assert_eq!(cache.mesh_size(), DVec2::splat(100.0));

    assert_eq!(cache.refresh(&component, 0), Ok(false));

    component.mark_dirty();
    assert_eq!(cache.refresh(&component, 0), Ok(true));
}

#[test]
fn test_cache_reports_missing_section() {
    let component = MeshComponent::default();
    let mut cache = FlatShapeData::new();

    assert_eq!(cache.refresh(&component, 0), Err(crate::MeshError::missing_section(0)));
    assert!(cache.buffer().is_empty());
    assert_eq!(cache.source_revision(), None);
}

#[test]
fn test_cache_checks_section_at_same_revision() {
    let component = square_component();
    let mut cache = FlatShapeData::new();
    assert_eq!(cache.refresh(&component, 0), Ok(true));

    assert_eq!(cache.refresh(&component, 7), Err(crate::MeshError::missing_section(7)));
    assert!(cache.buffer().is_empty());
    assert_eq!(cache.source_section(), None);

    assert_eq!(cache.refresh(&component, 0), Ok(true));
    assert_eq!(cache.source_section(), Some(0));
    assert_eq!(cache.buffer().triangle_count(), 2);
}

#[test]
fn test_cache_distinguishes_components() {
    let first = square_component();
    let mut second = MeshComponent::default();
    let shapes = [Shape::new_rect(DVec2::ZERO, DVec2::splat(25.0), ShapeKind::Polygon)];
    second.rebuild(&shapes, &MeshSettings::default());

    let mut cache = FlatShapeData::new();
    assert_eq!(cache.refresh(&first, 0), Ok(true));
    assert_eq!(cache.refresh(&second, 0), Ok(true));
    assert!(cache
        .buffer()
        .vertices
        .iter()
        .all(|v| v.position.abs() == Vec2::splat(0.5)));
}

#[test]
fn test_cache_rejects_invalid_world_size() {
    let mut component = square_component();
    component.set_world_size(DVec2::new(0.0, 100.0));
    let mut cache = FlatShapeData::new();

    assert_eq!(
        cache.refresh(&component, 0),
        Err(crate::MeshError::invalid_world_size(0.0, 100.0))
    );
    assert!(cache.buffer().is_empty());
    assert_eq!(cache.mesh_size(), DVec2::ZERO);
}

#[test]
fn test_cache_invalidate_forces_refresh() {
    let component = square_component();
    let mut cache = FlatShapeData::new();
    assert_eq!(cache.refresh(&component, 0), Ok(true));

    cache.invalidate();
    assert!(cache.buffer().is_empty());
    assert_eq!(cache.refresh(&component, 0), Ok(true));
}

// =============================================================================
// WIDGET
// =============================================================================

fn unit_triangle_flat(mesh_size: DVec2) -> FlatMeshBuffer {
    FlatMeshBuffer {
        vertices: vec![
            FlatVertex {
                position: Vec2::new(-1.0, -1.0),
                color: 0xFF11_2233,
            },
            FlatVertex {
                position: Vec2::new(1.0, -1.0),
                color: 0xFF11_2233,
            },
            FlatVertex {
                position: Vec2::new(0.0, 1.0),
                color: 0xFF11_2233,
            },
        ],
        indices: vec![0, 1, 2],
        mesh_size,
    }
}

#[test]
fn test_widget_vertex_tex_coords() {
    let data = WidgetRenderData::from_flat(&unit_triangle_flat(DVec2::splat(100.0)));
    let vertex = data.vertices()[0];

    assert_eq!(vertex.tex_coords, [0.0, 0.0, -0.5, -0.5]);
    assert_eq!(data.vertices()[2].tex_coords, [0.5, 1.0, 0.0, 0.5]);
    assert_eq!(vertex.material_tex_coords, Vec2::ONE);
    assert_eq!(vertex.color, 0xFF11_2233);
}

#[test]
fn test_widget_desired_size_follows_aspect() {
    let wide = WidgetRenderData::from_flat(&unit_triangle_flat(DVec2::new(200.0, 100.0)));
    assert_eq!(wide.desired_size(), DVec2::new(512.0, 256.0));

    let r#unsized = WidgetRenderData::from_flat(&FlatMeshBuffer::default());
    assert_eq!(r#unsized.desired_size(), DVec2::splat(512.0));
    assert!(!r#unsized.has_mesh());
}

#[test]
fn test_paint_maps_unit_square_to_local_rect() {
    let data = WidgetRenderData::from_flat(&unit_triangle_flat(DVec2::splat(100.0)));
    let geometry = PaintGeometry {
        local_size: DVec2::new(200.0, 100.0),
        transform: DAffine2::from_translation(DVec2::new(10.0, 20.0)),
    };
    let output = data.paint(&geometry, 3);

    assert_eq!(output.layer, 3);
    assert_eq!(output.indices, vec![0, 1, 2]);
    assert_eq!(output.vertices[0].position, Vec2::new(10.0, 20.0));
    assert_eq!(output.vertices[1].position, Vec2::new(210.0, 20.0));
    assert_eq!(output.vertices[2].position, Vec2::new(110.0, 120.0));
    assert_eq!(output.vertices[0].tex_coords, data.vertices()[0].tex_coords);
}

#[test]
fn test_paint_applies_linear_transform() {
    let data = WidgetRenderData::from_flat(&unit_triangle_flat(DVec2::splat(100.0)));
    let geometry = PaintGeometry {
        local_size: DVec2::splat(100.0),
        transform: DAffine2::from_scale(DVec2::splat(2.0)),
    };
    let output = data.paint(&geometry, 0);

    // Center (50, 50) maps to (100, 100); unit corner offsets double too.
    assert_eq!(output.vertices[0].position, Vec2::new(0.0, 0.0));
    assert_eq!(output.vertices[2].position, Vec2::new(100.0, 200.0));
}

#[test]
fn test_paint_overlay_lines_one_layer_up() {
    let mut data = WidgetRenderData::from_flat(&unit_triangle_flat(DVec2::splat(100.0)));
    data.add_line(LineOverlay::new(vec![DVec2::new(-50.0, 0.0), DVec2::new(25.0, 50.0)]));

    let output = data.paint(&PaintGeometry::from_size(DVec2::splat(40.0)), 7);
    let line = &output.lines[0];

    assert_eq!(line.layer, 8);
    assert!(line.antialias);
    assert_relative_eq!(line.thickness, 1.0);
    assert_eq!(line.points, vec![Vec2::new(0.0, 20.0), Vec2::new(30.0, 40.0)]);
    assert_eq!(line.tint, crate::color::LinearColor::WHITE);

    data.clear_lines();
    assert!(data.paint(&PaintGeometry::from_size(DVec2::splat(40.0)), 7).lines.is_empty());
}

#[test]
fn test_paint_skips_lines_without_world_size() {
    let mut data = WidgetRenderData::default();
    data.add_line(LineOverlay::new(vec![DVec2::ZERO, DVec2::ONE]));
    let output = data.paint(&PaintGeometry::from_size(DVec2::splat(40.0)), 0);

    assert!(output.lines.is_empty());
    assert!(output.vertices.is_empty());
    assert_eq!(data.lines().len(), 1);
}
