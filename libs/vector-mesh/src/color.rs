//! # Colors
//!
//! 8-bit vertex colors and float tints.

use serde::{Deserialize, Serialize};

/// 8-bit RGBA vertex color.
///
/// # Example
///
/// ```rust
/// use vector_mesh::Color;
///
/// let red = Color::rgba(255, 0, 0, 255);
/// assert_eq!(red.packed(), 0xFFFF_0000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
    /// Alpha channel
    pub a: u8,
}

impl Color {
    /// Opaque white.
    pub const WHITE: Self = Self::rgba(255, 255, 255, 255);
    /// Opaque black.
    pub const BLACK: Self = Self::rgba(0, 0, 0, 255);

    /// Creates a color from channels.
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Packs the color as `0xAARRGGBB`.
    #[inline]
    pub fn packed(self) -> u32 {
        u32::from_be_bytes([self.a, self.r, self.g, self.b])
    }

    /// Unpacks a `0xAARRGGBB` value.
    #[inline]
    pub fn from_packed(value: u32) -> Self {
        let [a, r, g, b] = value.to_be_bytes();
        Self { r, g, b, a }
    }

    /// Converts to normalized float channels.
    pub fn to_linear(self) -> LinearColor {
        LinearColor::new(
            f32::from(self.r) / 255.0,
            f32::from(self.g) / 255.0,
            f32::from(self.b) / 255.0,
            f32::from(self.a) / 255.0,
        )
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

/// Float RGBA tint in `[0, 1]` used by line overlays.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearColor(pub [f32; 4]);

impl LinearColor {
    /// Opaque white.
    pub const WHITE: Self = Self([1.0, 1.0, 1.0, 1.0]);

    /// Creates a tint from channels.
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self([r, g, b, a])
    }
}

impl Default for LinearColor {
    fn default() -> Self {
        Self::WHITE
    }
}
