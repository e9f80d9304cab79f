//! UI widget render data built from a [`FlatMeshBuffer`].
//!
//! The flat buffer lives in the unit square. At paint time every vertex is
//! scaled by half the widget's local size and pushed through the widget's
//! accumulated render transform:
//!
//! ```text
//! extent   = local_size / 2
//! offset   = transform(extent)                 (widget center, absolute)
//! vertex'  = offset + linear(vertex * extent)
//! line'    = offset + linear((2 * point / world_size) * extent)
//! ```

use super::FlatMeshBuffer;
use crate::color::LinearColor;
use config::constants::DEFAULT_WIDGET_SIZE;
use glam::{DAffine2, DVec2, Vec2};

/// Vertex handed to the UI renderer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UiVertex {
    /// Position; unit square before painting, absolute afterwards
    pub position: Vec2,
    /// `[0.5 + x / 2, 0.5 + y / 2, x / 2, y / 2]` of the unit-square position
    pub tex_coords: [f32; 4],
    /// Always `(1, 1)`
    pub material_tex_coords: Vec2,
    /// Packed `0xAARRGGBB` color
    pub color: u32,
}

impl UiVertex {
    fn from_unit(position: Vec2, color: u32) -> Self {
        let half = position * 0.5;
        Self {
            position,
            tex_coords: [0.5 + half.x, 0.5 + half.y, half.x, half.y],
            material_tex_coords: Vec2::ONE,
            color,
        }
    }
}

/// Polyline drawn above the mesh, in world units.
#[derive(Debug, Clone, PartialEq)]
pub struct LineOverlay {
    /// Points in world units, centered on the shape origin
    pub points: Vec<DVec2>,
    /// Line color
    pub tint: LinearColor,
    /// Smooth edges
    pub antialias: bool,
    /// Thickness in pixels
    pub thickness: f32,
}

impl LineOverlay {
    /// White, antialiased, one pixel thick.
    pub fn new(points: Vec<DVec2>) -> Self {
        Self {
            points,
            tint: LinearColor::WHITE,
            antialias: true,
            thickness: 1.0,
        }
    }

    /// Sets the color.
    pub fn with_tint(mut self, tint: LinearColor) -> Self {
        self.tint = tint;
        self
    }
}

/// Size and placement of the widget for one paint.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaintGeometry {
    /// Allotted size in local space
    pub local_size: DVec2,
    /// Accumulated local-to-absolute render transform
    pub transform: DAffine2,
}

impl PaintGeometry {
    /// Untransformed geometry of the given size.
    pub fn from_size(local_size: DVec2) -> Self {
        Self {
            local_size,
            transform: DAffine2::IDENTITY,
        }
    }

    fn place(&self, unit: DVec2) -> DVec2 {
        let extent = self.local_size * 0.5;
        self.transform.transform_point2(extent) + self.transform.transform_vector2(unit * extent)
    }
}

/// Overlay line after transformation.
#[derive(Debug, Clone, PartialEq)]
pub struct PaintedLine {
    /// Absolute points
    pub points: Vec<Vec2>,
    /// Line color
    pub tint: LinearColor,
    /// Smooth edges
    pub antialias: bool,
    /// Thickness in pixels
    pub thickness: f32,
    /// Draw layer
    pub layer: i32,
}

/// Draw elements produced by one paint.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PaintOutput {
    /// Transformed mesh vertices
    pub vertices: Vec<UiVertex>,
    /// Mesh triangle list
    pub indices: Vec<u32>,
    /// Layer of the mesh
    pub layer: i32,
    /// Overlay lines, one layer above the mesh
    pub lines: Vec<PaintedLine>,
}

/// Cached vertex data for drawing a flat shape inside a widget.
#[derive(Debug, Clone, PartialEq)]
pub struct WidgetRenderData {
    vertices: Vec<UiVertex>,
    indices: Vec<u32>,
    world_size: DVec2,
    desired_size: DVec2,
    lines: Vec<LineOverlay>,
}

impl Default for WidgetRenderData {
    fn default() -> Self {
        Self {
            vertices: Vec::new(),
            indices: Vec::new(),
            world_size: DVec2::ZERO,
            desired_size: DVec2::from(DEFAULT_WIDGET_SIZE),
            lines: Vec::new(),
        }
    }
}

impl WidgetRenderData {
    /// Builds render data from a flat buffer.
    ///
    /// The desired size is the default widget size scaled so its longer side
    /// matches the aspect of `flat.mesh_size`; an unsized buffer keeps the
    /// default.
    pub fn from_flat(flat: &FlatMeshBuffer) -> Self {
        let mut data = Self::default();
        data.set_flat(flat);
        data
    }

    /// Replaces the mesh data, keeping overlay lines.
    pub fn set_flat(&mut self, flat: &FlatMeshBuffer) {
        self.vertices = flat
            .vertices
            .iter()
            .map(|v| UiVertex::from_unit(v.position, v.color))
            .collect();
        self.indices = flat.indices.clone();
        self.world_size = flat.mesh_size;

        let max_side = flat.mesh_size.max_element();
        self.desired_size = if max_side > 0.0 {
            DVec2::from(DEFAULT_WIDGET_SIZE) * (flat.mesh_size / max_side)
        } else {
            DVec2::from(DEFAULT_WIDGET_SIZE)
        };
    }

    /// Vertices in the unit square.
    pub fn vertices(&self) -> &[UiVertex] {
        &self.vertices
    }

    /// Triangle list.
    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    /// World size of the mesh the data came from.
    pub fn world_size(&self) -> DVec2 {
        self.world_size
    }

    /// Size the widget asks for in layout.
    pub fn desired_size(&self) -> DVec2 {
        self.desired_size
    }

    /// True when there is a mesh to draw.
    pub fn has_mesh(&self) -> bool {
        !self.vertices.is_empty() && !self.indices.is_empty()
    }

    /// Adds an overlay line.
    pub fn add_line(&mut self, line: LineOverlay) {
        self.lines.push(line);
    }

    /// Removes all overlay lines.
    pub fn clear_lines(&mut self) {
        self.lines.clear();
    }

    /// Overlay lines.
    pub fn lines(&self) -> &[LineOverlay] {
        &self.lines
    }

    /// Transforms mesh and overlay lines for drawing at `layer`.
    ///
    /// Lines need a positive world size; without one they are left out.
    pub fn paint(&self, geometry: &PaintGeometry, layer: i32) -> PaintOutput {
        let mut output = PaintOutput {
            layer,
            ..Default::default()
        };

        if self.has_mesh() {
            output.vertices = self
                .vertices
                .iter()
                .map(|v| UiVertex {
                    position: geometry.place(v.position.as_dvec2()).as_vec2(),
                    ..*v
                })
                .collect();
            output.indices = self.indices.clone();
        }

        if self.world_size.cmpgt(DVec2::ZERO).all() {
            output.lines = self
                .lines
                .iter()
                .map(|line| PaintedLine {
                    points: line
                        .points
                        .iter()
                        .map(|p| geometry.place(2.0 * *p / self.world_size).as_vec2())
                        .collect(),
                    tint: line.tint,
                    antialias: line.antialias,
                    thickness: line.thickness,
                    layer: layer + 1,
                })
                .collect();
        } else if !self.lines.is_empty() {
            log::debug!("skipping {} overlay lines without a world size", self.lines.len());
        }

        output
    }
}
