//! # Mesh Component
//!
//! Owns the mesh sections of one vector shape and everything derived from
//! them: bounds, face lookup and the render snapshot.
//!
//! Sections are replaced wholesale by [`MeshComponent::rebuild`]. Each
//! rebuild moves [`MeshComponent::revision`] to a fresh value, which is the
//! only change signal consumers such as [`crate::flat::FlatShapeData`] rely
//! on. Revisions are drawn from one process-wide counter, so no two
//! components ever report the same non-zero revision.

use crate::bounds::{Aabb, BoxSphereBounds};
use crate::builder::rebuild_mesh;
use crate::color::Color;
use crate::curve::CurveSource;
use crate::error::{MeshError, MeshResult};
use crate::mesh::MeshSection;
use crate::settings::{MaterialHandle, MeshSettings};
use crate::shape::Shape;
use config::constants::DEFAULT_WORLD_SIZE;
use glam::{DVec2, Vec2, Vec3};
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_REVISION: AtomicU64 = AtomicU64::new(1);

// =============================================================================
// COMPONENT
// =============================================================================

/// Mesh sections plus the material and world size they were built with.
#[derive(Debug, Clone, PartialEq)]
pub struct MeshComponent {
    sections: Vec<MeshSection>,
    material: MaterialHandle,
    world_size: DVec2,
    revision: u64,
}

impl Default for MeshComponent {
    fn default() -> Self {
        Self::new(DVec2::from(DEFAULT_WORLD_SIZE))
    }
}

impl MeshComponent {
    /// Creates a component without sections.
    pub fn new(world_size: DVec2) -> Self {
        Self {
            sections: Vec::new(),
            material: MaterialHandle::default(),
            world_size,
            revision: 0,
        }
    }

    /// Replaces all sections with `count` empty ones.
    pub fn init_sections(&mut self, count: usize) {
        self.sections.clear();
        self.sections.resize_with(count, MeshSection::new);
    }

    /// Removes every section.
    pub fn clear_sections(&mut self) {
        self.sections.clear();
    }

    /// Number of sections.
    #[inline]
    pub fn num_sections(&self) -> usize {
        self.sections.len()
    }

    /// All sections.
    #[inline]
    pub fn sections(&self) -> &[MeshSection] {
        &self.sections
    }

    /// Section `index`, if it exists.
    #[inline]
    pub fn section(&self, index: usize) -> Option<&MeshSection> {
        self.sections.get(index)
    }

    /// Mutable section `index`, if it exists.
    ///
    /// Call [`MeshComponent::mark_dirty`] after editing.
    pub fn section_mut(&mut self, index: usize) -> Option<&mut MeshSection> {
        self.sections.get_mut(index)
    }

    /// Section `index` if it exists and holds drawable data.
    pub fn valid_section(&self, index: usize) -> MeshResult<&MeshSection> {
        self.sections
            .get(index)
            .filter(|section| section.is_valid())
            .ok_or_else(|| MeshError::missing_section(index))
    }

    /// Material bound to every section.
    pub fn material(&self) -> &MaterialHandle {
        &self.material
    }

    /// Sets the material bound to every section.
    pub fn set_material(&mut self, material: MaterialHandle) {
        self.material = material;
        self.mark_dirty();
    }

    /// Declared world size of the owning shape.
    pub fn world_size(&self) -> DVec2 {
        self.world_size
    }

    /// Sets the declared world size.
    pub fn set_world_size(&mut self, world_size: DVec2) {
        self.world_size = world_size;
        self.mark_dirty();
    }

    /// Change stamp, replaced by every mutation that affects output.
    ///
    /// Zero until the first mutation; unique across components afterwards.
    #[inline]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Signals that the sections changed.
    pub fn mark_dirty(&mut self) {
        self.revision = NEXT_REVISION.fetch_add(1, Ordering::Relaxed);
    }

    /// Rebuilds all sections from `shapes`.
    ///
    /// With `settings.draw_mesh` unset the component is left without
    /// sections.
    pub fn rebuild<C: CurveSource>(&mut self, shapes: &[Shape<C>], settings: &MeshSettings) {
        let settings = settings.sanitized();
        self.sections = rebuild_mesh(shapes, &settings);
        self.world_size = settings.world_size;
        self.material = settings.material;
        self.mark_dirty();
    }

    /// Bounds of all sections, widened to the world-size rectangle.
    ///
    /// Zero bounds when nothing contributes a valid box.
    pub fn local_bounds(&self) -> BoxSphereBounds {
        let mut local_box = self
            .sections
            .iter()
            .fold(Aabb::empty(), |acc, section| acc.union(&section.local_box));
        if self.world_size.cmpgt(DVec2::ZERO).all() {
            local_box = local_box.union(&Aabb::from_world_size(self.world_size));
        }
        BoxSphereBounds::from_box(&local_box)
    }

    /// Maps a triangle index counted across all sections to its section.
    pub fn section_for_face(&self, face_index: usize) -> Option<usize> {
        let mut total_faces = 0;
        for (index, section) in self.sections.iter().enumerate() {
            total_faces += section.triangle_count();
            if face_index < total_faces {
                return Some(index);
            }
        }
        None
    }

    /// Copies every valid section into render-ready vertex buffers.
    pub fn snapshot(&self) -> RenderSnapshot {
        RenderSnapshot {
            world_size: self.world_size.as_vec2(),
            revision: self.revision,
            sections: self
                .sections
                .iter()
                .map(|section| section.is_valid().then(|| ProxySection::from_section(section, &self.material)))
                .collect(),
        }
    }
}

// =============================================================================
// RENDER SNAPSHOT
// =============================================================================

/// One vertex as uploaded to a GPU buffer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProxyVertex {
    /// Position
    pub position: Vec3,
    /// Vertex color
    pub color: Color,
    /// Texture coordinate
    pub uv: Vec2,
    /// Tangent (X axis of the tangent frame)
    pub tangent: Vec3,
    /// Normal (Z axis of the tangent frame)
    pub normal: Vec3,
}

/// Immutable copy of one section with every attribute resolved per vertex.
#[derive(Debug, Clone, PartialEq)]
pub struct ProxySection {
    /// Vertices
    pub vertices: Vec<ProxyVertex>,
    /// Triangle list
    pub indices: Vec<u32>,
    /// Material to draw with
    pub material: MaterialHandle,
}

impl ProxySection {
    fn from_section(section: &MeshSection, material: &MaterialHandle) -> Self {
        let count = section.vertex_count();
        let uvs = section.uvs.resolve(count);
        let tangents = section.tangents.resolve(count);
        let normals = section.normals.resolve(count);

        let vertices = section
            .positions
            .iter()
            .enumerate()
            .map(|(i, position)| ProxyVertex {
                position: position.as_vec3(),
                color: section.colors.get(i).copied().unwrap_or(Color::WHITE),
                uv: uvs[i].as_vec2(),
                tangent: tangents[i].as_vec3(),
                normal: normals[i].as_vec3(),
            })
            .collect();

        Self {
            vertices,
            indices: section.indices.clone(),
            material: material.clone(),
        }
    }
}

/// Everything a render thread needs, taken after a rebuild completes.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderSnapshot {
    /// World size of the component
    pub world_size: Vec2,
    /// Component revision the snapshot was taken at
    pub revision: u64,
    /// One entry per section; `None` for sections without data
    pub sections: Vec<Option<ProxySection>>,
}
