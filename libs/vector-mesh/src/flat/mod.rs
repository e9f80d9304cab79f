//! # Flat Projection
//!
//! Converts a mesh section into a 2D buffer for UI drawing. Positions are
//! mapped into `[-1, 1]` relative to the world size and triangles are
//! reordered back to front by the Z of their first vertex.
//!
//! ```text
//! MeshSection (world units, Z = depth)
//!        │ project_to_flat
//!        ▼
//! FlatMeshBuffer (unit square, packed colors, depth-sorted triangles)
//!        │ WidgetRenderData::from_flat
//!        ▼
//! UiVertex list, transformed per paint
//! ```

pub mod widget;

pub use widget::{LineOverlay, PaintGeometry, PaintOutput, PaintedLine, UiVertex, WidgetRenderData};

use crate::color::Color;
use crate::component::MeshComponent;
use crate::error::{MeshError, MeshResult};
use crate::mesh::MeshSection;
use glam::{DVec2, Vec2};
use log::{debug, warn};
use serde::{Deserialize, Serialize};

// =============================================================================
// BUFFER
// =============================================================================

/// One vertex of the flat buffer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FlatVertex {
    /// Position in the unit square, `[-1, 1]` inside the world size
    pub position: Vec2,
    /// Color packed as `0xAARRGGBB`
    pub color: u32,
}

/// 2D vertices and a triangle list sorted back to front.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FlatMeshBuffer {
    /// Projected vertices, same order as the source section
    pub vertices: Vec<FlatVertex>,
    /// Triangle list, length a multiple of 3
    pub indices: Vec<u32>,
    /// World size the positions were normalized against
    pub mesh_size: DVec2,
}

impl FlatMeshBuffer {
    /// True when there is nothing to draw.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty() || self.indices.is_empty()
    }

    /// Number of triangles.
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}

/// Projects `section` onto the XY plane.
///
/// A missing section or a world size with a non-positive component yields an
/// empty buffer. In the latter case `mesh_size` is zeroed as well.
///
/// # Example
///
/// ```rust
/// use vector_mesh::{project_to_flat, rebuild_mesh, MeshSettings, Shape, ShapeKind};
/// use glam::DVec2;
///
/// let shapes = [Shape::new_rect(DVec2::ZERO, DVec2::splat(50.0), ShapeKind::Polygon)];
/// let sections = rebuild_mesh(&shapes, &MeshSettings::default());
/// let flat = project_to_flat(sections.first(), DVec2::splat(100.0));
///
/// assert_eq!(flat.vertices.len(), 4);
/// assert!(flat.vertices.iter().all(|v| v.position.abs() == glam::Vec2::ONE));
/// ```
pub fn project_to_flat(section: Option<&MeshSection>, world_size: DVec2) -> FlatMeshBuffer {
    if !world_size.cmpgt(DVec2::ZERO).all() {
        warn!(
            "cannot project mesh with world size {}x{}",
            world_size.x, world_size.y
        );
        return FlatMeshBuffer::default();
    }

    let Some(section) = section else {
        warn!("no mesh section to project");
        return FlatMeshBuffer {
            mesh_size: world_size,
            ..Default::default()
        };
    };

    let half_size = world_size * 0.5;
    let vertices = section
        .positions
        .iter()
        .enumerate()
        .map(|(i, position)| FlatVertex {
            position: (position.truncate() / half_size).as_vec2(),
            color: section.colors.get(i).copied().unwrap_or(Color::WHITE).packed(),
        })
        .collect();

    let mut indices = section.indices.clone();
    let remainder = indices.len() % 3;
    if remainder != 0 {
        warn!("dropping {remainder} trailing indices of an incomplete triangle");
        indices.truncate(indices.len() - remainder);
    }
    sort_triangles_by_depth(&mut indices, section);

    debug!(
        "projected {} vertices, {} triangles",
        section.positions.len(),
        indices.len() / 3
    );

    FlatMeshBuffer {
        vertices,
        indices,
        mesh_size: world_size,
    }
}

/// Reorders whole triangles ascending by the Z of their first vertex.
///
/// Ties keep their relative order. Triangles referencing a missing vertex
/// sort as depth zero.
pub fn sort_triangles_by_depth(indices: &mut Vec<u32>, section: &MeshSection) {
    let depth = |triangle: &[u32; 3]| {
        section
            .positions
            .get(triangle[0] as usize)
            .map_or(0.0, |position| position.z)
    };

    let mut triangles: Vec<[u32; 3]> = indices
        .chunks_exact(3)
        .map(|chunk| [chunk[0], chunk[1], chunk[2]])
        .collect();
    triangles.sort_by(|a, b| depth(a).total_cmp(&depth(b)));

    indices.clear();
    indices.extend(triangles.into_iter().flatten());
}

// =============================================================================
// CACHE
// =============================================================================

/// Flat buffer cached against a [`MeshComponent`] revision.
///
/// Holds the last projection of one section and re-projects only when the
/// component revision or the requested section differs from the cached one.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FlatShapeData {
    buffer: FlatMeshBuffer,
    source: Option<(u64, usize)>,
}

impl FlatShapeData {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Re-projects section `section_index` unless it is already cached at
    /// the component's current revision.
    ///
    /// Returns whether the buffer was replaced.
    ///
    /// # Errors
    ///
    /// - [`MeshError::InvalidWorldSize`] if the component's world size has a
    ///   non-positive component
    /// - [`MeshError::MissingMeshSection`] if the section is absent or empty
    ///
    /// The cached buffer is cleared on error.
    pub fn refresh(&mut self, component: &MeshComponent, section_index: usize) -> MeshResult<bool> {
        let world_size = component.world_size();
        let section = if world_size.cmpgt(DVec2::ZERO).all() {
            component.valid_section(section_index)
        } else {
            Err(MeshError::invalid_world_size(world_size.x, world_size.y))
        };
        let section = match section {
            Ok(section) => section,
            Err(err) => {
                self.invalidate();
                return Err(err);
            }
        };

        let key = (component.revision(), section_index);
        if self.source == Some(key) {
            return Ok(false);
        }

        self.buffer = project_to_flat(Some(section), world_size);
        self.source = Some(key);
        Ok(true)
    }

    /// The cached buffer.
    pub fn buffer(&self) -> &FlatMeshBuffer {
        &self.buffer
    }

    /// World size of the cached projection.
    pub fn mesh_size(&self) -> DVec2 {
        self.buffer.mesh_size
    }

    /// Component revision the buffer was built from.
    pub fn source_revision(&self) -> Option<u64> {
        self.source.map(|(revision, _)| revision)
    }

    /// Section index the buffer was built from.
    pub fn source_section(&self) -> Option<usize> {
        self.source.map(|(_, section)| section)
    }

    /// Drops the cached buffer so the next refresh re-projects.
    pub fn invalidate(&mut self) {
        self.buffer = FlatMeshBuffer::default();
        self.source = None;
    }
}

#[cfg(test)]
mod tests;
