//! # Bounds
//!
//! Axis-aligned boxes accumulated while building sections, and the
//! box/sphere pair reported for a whole component.

use glam::{DVec2, DVec3};

/// Axis-aligned bounding box.
///
/// Starts empty (inverted) so that the first [`Aabb::include`] sets both
/// corners.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    /// Minimum corner (x, y, z)
    pub min: DVec3,
    /// Maximum corner (x, y, z)
    pub max: DVec3,
}

impl Default for Aabb {
    fn default() -> Self {
        Self::empty()
    }
}

impl Aabb {
    /// Creates a new bounding box from min/max corners.
    pub fn new(min: DVec3, max: DVec3) -> Self {
        Self { min, max }
    }

    /// Creates an empty (invalid) bounding box.
    pub fn empty() -> Self {
        Self {
            min: DVec3::splat(f64::INFINITY),
            max: DVec3::splat(f64::NEG_INFINITY),
        }
    }

    /// Grows the box to contain `point`.
    #[inline]
    pub fn include(&mut self, point: DVec3) {
        self.min = self.min.min(point);
        self.max = self.max.max(point);
    }

    /// Returns the smallest box containing both boxes.
    pub fn union(&self, other: &Aabb) -> Aabb {
        Aabb {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }

    /// Checks if the bounding box is valid (non-empty).
    pub fn is_valid(&self) -> bool {
        self.min.x <= self.max.x && self.min.y <= self.max.y && self.min.z <= self.max.z
    }

    /// Center of the box.
    pub fn center(&self) -> DVec3 {
        (self.min + self.max) * 0.5
    }

    /// Half size of the box.
    pub fn extent(&self) -> DVec3 {
        (self.max - self.min) * 0.5
    }

    /// Box spanning a world-size rectangle centered on the origin at `z = 0`.
    pub fn from_world_size(world_size: DVec2) -> Aabb {
        let half = (world_size * 0.5).extend(0.0);
        Aabb::new(-half, half)
    }
}

/// Box plus enclosing sphere, as reported to a renderer for culling.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoxSphereBounds {
    /// Center shared by box and sphere
    pub origin: DVec3,
    /// Half size of the box
    pub box_extent: DVec3,
    /// Radius of the enclosing sphere
    pub sphere_radius: f64,
}

impl BoxSphereBounds {
    /// Zero-sized bounds at the origin.
    pub const ZERO: Self = Self {
        origin: DVec3::ZERO,
        box_extent: DVec3::ZERO,
        sphere_radius: 0.0,
    };

    /// Derives bounds from a box, falling back to [`BoxSphereBounds::ZERO`]
    /// for an empty box.
    pub fn from_box(aabb: &Aabb) -> Self {
        if !aabb.is_valid() {
            return Self::ZERO;
        }
        let box_extent = aabb.extent();
        Self {
            origin: aabb.center(),
            box_extent,
            sphere_radius: box_extent.length(),
        }
    }

    /// Box form of the bounds.
    pub fn to_box(&self) -> Aabb {
        Aabb::new(self.origin - self.box_extent, self.origin + self.box_extent)
    }
}
