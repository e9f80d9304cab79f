//! # Mesh Errors
//!
//! Error types for the shape-to-mesh pipeline.
//!
//! ## Error Policy
//!
//! - Every failure is local to one shape or one section
//! - Callers decide whether to skip, log or propagate
//! - The mesh builder never aborts a rebuild on a shape error

use thiserror::Error;

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors that can occur while building or projecting vector meshes.
///
/// ## Example
///
/// ```rust
/// use vector_mesh::ops::triangulate::triangulate;
/// use vector_mesh::MeshError;
/// use glam::DVec2;
///
/// let mut indices = Vec::new();
/// let result = triangulate(&[DVec2::ZERO, DVec2::X], &mut indices, 0, false);
/// assert!(matches!(result, Err(MeshError::DegenerateInput { .. })));
/// ```
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MeshError {
    /// Not enough points, or a polyline without length.
    #[error("Degenerate input: {message}")]
    DegenerateInput {
        /// What was degenerate
        message: String,
    },

    /// Ear clipping could not find an ear before the loop guard expired.
    #[error("Polygon with {vertex_count} vertices is not simple")]
    NonSimplePolygon {
        /// Vertex count of the rejected polygon
        vertex_count: usize,
    },

    /// The declared world size has a non-positive component.
    #[error("Invalid world size: {width} x {height}")]
    InvalidWorldSize {
        /// Declared width
        width: f64,
        /// Declared height
        height: f64,
    },

    /// The requested section does not exist or holds no geometry.
    #[error("Mesh section {index} is missing or empty")]
    MissingMeshSection {
        /// Requested section index
        index: usize,
    },
}

impl MeshError {
    /// Creates a degenerate input error.
    pub fn degenerate(message: impl Into<String>) -> Self {
        Self::DegenerateInput {
            message: message.into(),
        }
    }

    /// Creates a non-simple polygon error.
    pub fn non_simple(vertex_count: usize) -> Self {
        Self::NonSimplePolygon { vertex_count }
    }

    /// Creates an invalid world size error.
    pub fn invalid_world_size(width: f64, height: f64) -> Self {
        Self::InvalidWorldSize { width, height }
    }

    /// Creates a missing section error.
    pub fn missing_section(index: usize) -> Self {
        Self::MissingMeshSection { index }
    }
}

/// Result alias for mesh operations.
pub type MeshResult<T> = Result<T, MeshError>;

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = MeshError::degenerate("polyline has zero length");
        assert_eq!(err.to_string(), "Degenerate input: polyline has zero length");

        let err = MeshError::non_simple(4);
        assert_eq!(err.to_string(), "Polygon with 4 vertices is not simple");

        let err = MeshError::missing_section(2);
        assert!(err.to_string().contains("section 2"));
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<MeshError>();
    }
}
