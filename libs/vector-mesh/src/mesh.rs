//! # Mesh Section
//!
//! One drawable unit of a vector mesh: parallel vertex arrays, a flat
//! triangle index list and the accumulated local bounding box.
//!
//! Normals, tangents and UVs are either shared by every vertex or stored
//! per vertex. [`Attribute`] makes that distinction explicit instead of
//! relying on array lengths.

use crate::bounds::Aabb;
use crate::color::Color;
use glam::{DVec2, DVec3};

// =============================================================================
// ATTRIBUTE
// =============================================================================

/// A vertex attribute that is either uniform or stored per vertex.
///
/// An empty `PerVertex` means the attribute was never populated.
///
/// # Example
///
/// ```rust
/// use vector_mesh::mesh::Attribute;
/// use glam::DVec3;
///
/// let normals = Attribute::Uniform(DVec3::Z);
/// assert_eq!(normals.get(41), Some(&DVec3::Z));
/// assert_eq!(normals.resolve(3), vec![DVec3::Z; 3]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Attribute<T> {
    /// Same value for every vertex
    Uniform(T),
    /// One value per vertex
    PerVertex(Vec<T>),
}

impl<T> Default for Attribute<T> {
    fn default() -> Self {
        Attribute::PerVertex(Vec::new())
    }
}

impl<T: Clone> Attribute<T> {
    /// Builds an attribute from a value array that follows the
    /// "single entry means shared" convention.
    pub fn from_values(mut values: Vec<T>, vertex_count: usize) -> Self {
        if values.len() == 1 && vertex_count != 1 {
            if let Some(value) = values.pop() {
                return Attribute::Uniform(value);
            }
        }
        Attribute::PerVertex(values)
    }

    /// Returns the value for `vertex`, if populated.
    #[inline]
    pub fn get(&self, vertex: usize) -> Option<&T> {
        match self {
            Attribute::Uniform(value) => Some(value),
            Attribute::PerVertex(values) => values.get(vertex),
        }
    }

    /// Returns true if no value has been stored.
    pub fn is_empty(&self) -> bool {
        matches!(self, Attribute::PerVertex(values) if values.is_empty())
    }

    /// Returns true if one value is shared by every vertex.
    pub fn is_uniform(&self) -> bool {
        matches!(self, Attribute::Uniform(_))
    }

    /// Number of stored values.
    pub fn stored_len(&self) -> usize {
        match self {
            Attribute::Uniform(_) => 1,
            Attribute::PerVertex(values) => values.len(),
        }
    }

    /// Expands the attribute to exactly `vertex_count` values.
    ///
    /// Missing per-vertex entries are filled with the last stored value.
    /// Returns an empty vector when nothing is stored.
    pub fn resolve(&self, vertex_count: usize) -> Vec<T> {
        match self {
            Attribute::Uniform(value) => vec![value.clone(); vertex_count],
            Attribute::PerVertex(values) => match values.last() {
                None => Vec::new(),
                Some(last) => (0..vertex_count)
                    .map(|i| values.get(i).unwrap_or(last).clone())
                    .collect(),
            },
        }
    }
}

// =============================================================================
// MESH SECTION
// =============================================================================

/// Vertex, index and bounds data for one material slot.
///
/// A section is rebuilt wholesale on every geometry change; it is never
/// patched incrementally.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeshSection {
    /// Vertex positions
    pub positions: Vec<DVec3>,
    /// Texture coordinates
    pub uvs: Attribute<DVec2>,
    /// Vertex normals
    pub normals: Attribute<DVec3>,
    /// Vertex tangents
    pub tangents: Attribute<DVec3>,
    /// Vertex colors, one per vertex
    pub colors: Vec<Color>,
    /// Triangle list, three indices per triangle
    pub indices: Vec<u32>,
    /// Bounds of every emitted vertex
    pub local_box: Aabb,
}

impl MeshSection {
    /// Creates an empty section.
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears every array and the bounds.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// A section is drawable only if every array holds data.
    pub fn is_valid(&self) -> bool {
        !self.positions.is_empty()
            && !self.uvs.is_empty()
            && !self.normals.is_empty()
            && !self.tangents.is_empty()
            && !self.colors.is_empty()
            && !self.indices.is_empty()
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Returns the number of complete triangles.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Returns the indices of triangle `index`, if complete.
    pub fn triangle(&self, index: usize) -> Option<[u32; 3]> {
        let start = index * 3;
        match self.indices.get(start..start + 3) {
            Some(&[a, b, c]) => Some([a, b, c]),
            _ => None,
        }
    }

    /// Appends a vertex and grows the local bounds.
    ///
    /// Returns the index of the new vertex.
    pub fn push_vertex(&mut self, position: DVec3, color: Color) -> u32 {
        let index = self.positions.len() as u32;
        self.positions.push(position);
        self.colors.push(color);
        self.local_box.include(position);
        index
    }

    /// Checks that every index refers to an existing vertex.
    pub fn indices_in_range(&self) -> bool {
        let count = self.positions.len();
        self.indices.iter().all(|&i| (i as usize) < count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle_section() -> MeshSection {
        let mut section = MeshSection::new();
        section.push_vertex(DVec3::new(0.0, 0.0, 0.0), Color::WHITE);
        section.push_vertex(DVec3::new(1.0, 0.0, 0.0), Color::WHITE);
        section.push_vertex(DVec3::new(0.0, 1.0, 2.0), Color::WHITE);
        section.indices.extend_from_slice(&[0, 1, 2]);
        section
    }

    #[test]
    fn test_attribute_default_is_empty() {
        let attribute: Attribute<f64> = Attribute::default();
        assert!(attribute.is_empty());
        assert_eq!(attribute.get(0), None);
        assert!(attribute.resolve(4).is_empty());
    }

    #[test]
    fn test_attribute_from_values() {
        let shared = Attribute::from_values(vec![1.0], 5);
        assert!(shared.is_uniform());

        let per_vertex = Attribute::from_values(vec![1.0, 2.0], 2);
        assert_eq!(per_vertex.get(1), Some(&2.0));
        assert_eq!(per_vertex.stored_len(), 2);

        let single_vertex = Attribute::from_values(vec![3.0], 1);
        assert!(!single_vertex.is_uniform());
    }

    #[test]
    fn test_attribute_resolve_pads_with_last() {
        let attribute = Attribute::PerVertex(vec![1.0, 2.0]);
        assert_eq!(attribute.resolve(4), vec![1.0, 2.0, 2.0, 2.0]);
    }

    #[test]
    fn test_section_validity() {
        let mut section = triangle_section();
        assert!(!section.is_valid(), "normals, tangents and uvs are missing");

        section.normals = Attribute::Uniform(DVec3::Z);
        section.tangents = Attribute::Uniform(DVec3::X);
        section.uvs = Attribute::Uniform(DVec2::ONE);
        assert!(section.is_valid());
        assert!(section.indices_in_range());
    }

    #[test]
    fn test_section_bounds_and_reset() {
        let mut section = triangle_section();
        assert_eq!(section.local_box.max, DVec3::new(1.0, 1.0, 2.0));
        assert_eq!(section.triangle(0), Some([0, 1, 2]));
        assert_eq!(section.triangle(1), None);

        section.reset();
        assert_eq!(section.vertex_count(), 0);
        assert!(!section.local_box.is_valid());
    }
}
