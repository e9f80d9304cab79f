//! # Shape Mesh Builder
//!
//! Merges every drawable shape into one [`MeshSection`].
//!
//! ## Pipeline
//!
//! ```text
//! Shape ──CurveSampler──► Polygon2D ──simplify──► sort by offset_z
//!                                                      │
//!                  ┌───────────────────────────────────┴──────┐
//!                  ▼                                          ▼
//!          Polygon: triangulate                      Line: extrude_line
//!                  └──────────────► MeshSection ◄─────────────┘
//! ```
//!
//! A shape that fails to triangulate or extrude contributes nothing and is
//! logged; the remaining shapes are still built.

use crate::bounds::Aabb;
use crate::curve::{CurveSampler, CurveSource};
use crate::error::MeshResult;
use crate::mesh::{Attribute, MeshSection};
use crate::ops::{extrude_line, triangulate};
use crate::polygon::Polygon2D;
use crate::settings::MeshSettings;
use crate::shape::{Shape, ShapeKind};
use glam::{DVec2, DVec3};

/// Builds mesh sections from shapes.
///
/// # Example
///
/// ```rust
/// use vector_mesh::{MeshSettings, Shape, ShapeKind, ShapeMeshBuilder};
/// use glam::DVec2;
///
/// let shapes = [Shape::new_rect(DVec2::ZERO, DVec2::splat(50.0), ShapeKind::Polygon)];
/// let section = ShapeMeshBuilder::new(&MeshSettings::default()).build(&shapes);
/// assert_eq!(section.vertex_count(), 4);
/// assert_eq!(section.indices.len(), 6);
/// ```
#[derive(Debug, Clone)]
pub struct ShapeMeshBuilder {
    settings: MeshSettings,
}

impl ShapeMeshBuilder {
    /// Creates a builder; the settings are clamped into their valid ranges.
    pub fn new(settings: &MeshSettings) -> Self {
        Self {
            settings: settings.sanitized(),
        }
    }

    /// Settings in use after clamping.
    pub fn settings(&self) -> &MeshSettings {
        &self.settings
    }

    /// Samples and simplifies every shape with `draw_mesh` set.
    ///
    /// Polygons keep the index of their shape in `shapes`.
    pub fn sample_shapes<C: CurveSource>(&self, shapes: &[Shape<C>]) -> Vec<Polygon2D> {
        let tolerance = self.settings.tolerance();
        shapes
            .iter()
            .enumerate()
            .filter(|(_, shape)| shape.draw_mesh)
            .map(|(index, shape)| {
                let mut polygon = Polygon2D::new(index, shape.style);
                let sampled = CurveSampler::new(&shape.curve, self.settings.step_mode, tolerance).append_to(&mut polygon);
                let removed = polygon.simplify();
                log::trace!("shape {index}: sampled {sampled} points, simplified away {removed}");
                polygon
            })
            .collect()
    }

    /// Builds one section from all drawable shapes.
    ///
    /// The section stays empty (and invalid) when no shape produced
    /// vertices.
    pub fn build<C: CurveSource>(&self, shapes: &[Shape<C>]) -> MeshSection {
        let mut polygons = self.sample_shapes(shapes);
        sort_by_depth(&mut polygons);

        let mut section = MeshSection::new();
        let mut uvs = Vec::new();
        let mut skipped = 0;

        for polygon in &polygons {
            let result = match polygon.style.kind {
                ShapeKind::Polygon => self.append_polygon(&mut section, &mut uvs, polygon),
                ShapeKind::Line => {
                    let curve = &shapes[polygon.shape_index].curve;
                    self.append_line(&mut section, &mut uvs, polygon, |p| curve.scale_at(p))
                }
            };
            if let Err(err) = result {
                skipped += 1;
                log::warn!("skipping shape {}: {err}", polygon.shape_index);
            }
        }

        if section.positions.is_empty() {
            log::debug!("rebuild produced no vertices from {} shapes", shapes.len());
            return section;
        }

        section.tangents = Attribute::Uniform(DVec3::X);
        section.normals = Attribute::Uniform(DVec3::Z);
        section.uvs = if uvs.is_empty() {
            Attribute::Uniform(DVec2::ONE)
        } else {
            Attribute::PerVertex(uvs)
        };
        section.local_box = section.local_box.union(&Aabb::from_world_size(self.settings.world_size));

        log::debug!(
            "rebuilt mesh: {} vertices, {} triangles, {} of {} shapes skipped",
            section.vertex_count(),
            section.triangle_count(),
            skipped,
            polygons.len()
        );
        section
    }

    fn append_polygon(&self, section: &mut MeshSection, uvs: &mut Vec<DVec2>, polygon: &Polygon2D) -> MeshResult<()> {
        // General user outlines are not guaranteed convex.
        triangulate(&polygon.points, &mut section.indices, section.positions.len() as u32, false)?;

        let z = polygon.style.offset_z;
        for &point in &polygon.points {
            section.push_vertex(point.extend(z), polygon.style.color);
            uvs.push(point / self.settings.world_size);
        }
        Ok(())
    }

    fn append_line(
        &self,
        section: &mut MeshSection,
        uvs: &mut Vec<DVec2>,
        polygon: &Polygon2D,
        scale_at: impl Fn(DVec2) -> DVec2,
    ) -> MeshResult<()> {
        let width = polygon.style.width.unwrap_or(self.settings.line_width);
        let ribbon = extrude_line(&polygon.points, width, scale_at, section.positions.len() as u32)?;

        let z = polygon.style.offset_z;
        for vertex in ribbon.vertices {
            section.push_vertex(vertex.extend(z), polygon.style.color);
            uvs.push(vertex / self.settings.world_size);
        }
        section.indices.extend(ribbon.indices);
        Ok(())
    }
}

/// Rebuilds the mesh sections of a shape collection.
///
/// Deterministic for a given shape order. Returns no sections when
/// `settings.draw_mesh` is unset, otherwise exactly one (possibly empty)
/// section.
///
/// # Example
///
/// ```rust
/// use vector_mesh::{rebuild_mesh, MeshSettings, Shape, ShapeKind};
/// use glam::DVec2;
///
/// let shapes = [Shape::new_rect(DVec2::ZERO, DVec2::splat(20.0), ShapeKind::Line)];
/// let sections = rebuild_mesh(&shapes, &MeshSettings::default());
/// assert_eq!(sections.len(), 1);
/// assert!(sections[0].is_valid());
/// ```
pub fn rebuild_mesh<C: CurveSource>(shapes: &[Shape<C>], settings: &MeshSettings) -> Vec<MeshSection> {
    if !settings.draw_mesh {
        return Vec::new();
    }
    vec![ShapeMeshBuilder::new(settings).build(shapes)]
}

/// Orders polygons by ascending `offset_z`, keeping input order on ties.
pub fn sort_by_depth(polygons: &mut [Polygon2D]) {
    polygons.sort_by(|a, b| a.style.offset_z.total_cmp(&b.style.offset_z));
}
