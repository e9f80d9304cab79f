//! # Mesh Settings
//!
//! Per-rebuild configuration. Defaults come from `config::constants`;
//! [`MeshSettings::sanitized`] applies the same clamps an editor would.

use crate::curve::StepMode;
use config::constants::{
    simplification_tolerance, DEFAULT_LINE_WIDTH, DEFAULT_MESH_MATERIAL, DEFAULT_SIMPLIFICATION_THRESHOLD,
    DEFAULT_STEPS_PER_SEGMENT, DEFAULT_WORLD_SIZE, MAX_STEPS_PER_SEGMENT, MIN_LINE_WIDTH, MIN_STEPS_PER_SEGMENT,
    MIN_WORLD_SIZE,
};
use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Opaque name of the material a host binds to rebuilt sections.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MaterialHandle(pub String);

impl Default for MaterialHandle {
    fn default() -> Self {
        Self(DEFAULT_MESH_MATERIAL.to_owned())
    }
}

/// Inputs of a mesh rebuild besides the shapes themselves.
///
/// # Example
///
/// ```rust
/// use vector_mesh::MeshSettings;
/// use glam::DVec2;
///
/// let settings = MeshSettings {
///     world_size: DVec2::new(1.0, 200.0),
///     simplification_threshold: 3.0,
///     ..Default::default()
/// }
/// .sanitized();
/// assert_eq!(settings.world_size, DVec2::new(5.0, 200.0));
/// assert_eq!(settings.simplification_threshold, 1.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeshSettings {
    /// Declared canvas size; UVs and flat positions are relative to it
    pub world_size: DVec2,
    /// Default half-width of line shapes
    pub line_width: f64,
    /// Curve simplification in `[0, 1]`; higher keeps more samples
    pub simplification_threshold: f64,
    /// Sub-step resolution of curved segments
    pub step_mode: StepMode,
    /// When unset, rebuilding clears the mesh
    pub draw_mesh: bool,
    /// Material bound to rebuilt sections
    pub material: MaterialHandle,
}

impl Default for MeshSettings {
    fn default() -> Self {
        Self {
            world_size: DVec2::from(DEFAULT_WORLD_SIZE),
            line_width: DEFAULT_LINE_WIDTH,
            simplification_threshold: DEFAULT_SIMPLIFICATION_THRESHOLD,
            step_mode: StepMode::Fixed(DEFAULT_STEPS_PER_SEGMENT),
            draw_mesh: true,
            material: MaterialHandle::default(),
        }
    }
}

impl MeshSettings {
    /// Returns a copy with every value clamped into its valid range.
    pub fn sanitized(&self) -> Self {
        let step_mode = match self.step_mode {
            StepMode::Fixed(steps) => StepMode::Fixed(steps.clamp(MIN_STEPS_PER_SEGMENT, MAX_STEPS_PER_SEGMENT)),
            StepMode::Adaptive => StepMode::Adaptive,
        };
        Self {
            world_size: self.world_size.max(DVec2::splat(MIN_WORLD_SIZE)),
            line_width: self.line_width.max(MIN_LINE_WIDTH),
            simplification_threshold: self.simplification_threshold.clamp(0.0, 1.0),
            step_mode,
            draw_mesh: self.draw_mesh,
            material: self.material.clone(),
        }
    }

    /// Cosine tolerance derived from the simplification threshold.
    pub fn tolerance(&self) -> f64 {
        simplification_tolerance(self.simplification_threshold)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = MeshSettings::default();
        assert_eq!(settings.world_size, DVec2::new(100.0, 100.0));
        assert_eq!(settings.line_width, 100.0);
        assert_eq!(settings.step_mode, StepMode::Fixed(20));
        assert_eq!(settings.material.0, DEFAULT_MESH_MATERIAL);
    }

    #[test]
    fn test_sanitized_clamps() {
        let settings = MeshSettings {
            world_size: DVec2::new(-10.0, 3.0),
            line_width: 0.0,
            simplification_threshold: -1.0,
            step_mode: StepMode::Fixed(500),
            ..Default::default()
        }
        .sanitized();

        assert_eq!(settings.world_size, DVec2::splat(5.0));
        assert_eq!(settings.line_width, 1.0);
        assert_eq!(settings.simplification_threshold, 0.0);
        assert_eq!(settings.step_mode, StepMode::Fixed(100));
    }

    #[test]
    fn test_sanitized_keeps_valid_values() {
        let settings = MeshSettings::default();
        assert_eq!(settings.sanitized(), settings);
    }
}
