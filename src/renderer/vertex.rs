//! Vertex format and palette

use bytemuck::{Pod, Zeroable};
use glam::Vec2;

use super::surface::Color;

/// Colored 2D vertex, in canvas pixels until the pipeline maps it to NDC
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: Color,
}

impl Vertex {
    const ATTRIBUTES: [wgpu::VertexAttribute; 2] =
        wgpu::vertex_attr_array![0 => Float32x2, 1 => Float32x4];

    pub const fn new(x: f32, y: f32, color: Color) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }

    pub fn at(point: Vec2, color: Color) -> Self {
        Self::new(point.x, point.y, color)
    }

    pub fn point(&self) -> Vec2 {
        Vec2::from(self.position)
    }

    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBUTES,
        }
    }
}

/// Scene palette
pub mod colors {
    use super::Color;

    const fn rgb(r: u8, g: u8, b: u8) -> Color {
        [r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, 1.0]
    }

    pub const SKY: Color = rgb(0x9e, 0xdc, 0xff);
    pub const GROUND: Color = rgb(0xd7, 0xb4, 0x6a);
    pub const GROUND_EDGE: Color = rgb(0xb8, 0x90, 0x4c);
    pub const PIPE: Color = rgb(0x2c, 0x9f, 0x3f);
    pub const PIPE_LIP: Color = rgb(0x23, 0x7d, 0x33);
    pub const BIRD: Color = rgb(0xff, 0xd4, 0x00);
    pub const BIRD_EYE: Color = rgb(0x22, 0x22, 0x22);
    pub const SCORE: Color = rgb(0x1f, 0x2f, 0x3a);
    pub const OVERLAY: Color = [0.0, 0.0, 0.0, 0.28];
    pub const OVERLAY_TEXT: Color = [1.0, 1.0, 1.0, 1.0];
    /// Visible only where nothing else is drawn
    pub const CLEAR: Color = [0.0, 0.0, 0.0, 0.0];
}
