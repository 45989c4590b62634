//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

/// 2D vertex with position and color
///
/// Shapes are built in window pixels; the pipeline maps them to clip space
/// just before upload.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }

    /// Position at location 0, color at location 1, matching `shader.wgsl`
    const ATTRIBUTES: [wgpu::VertexAttribute; 2] =
        wgpu::vertex_attr_array![0 => Float32x2, 1 => Float32x4];

    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Self>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBUTES,
        }
    }
}

/// Colors for non-sprite elements
pub mod colors {
    pub const HUD_BAND: [f32; 4] = [0.08, 0.08, 0.1, 1.0];
    /// Sprite handle not in the registry
    pub const MISSING: [f32; 4] = [1.0, 0.0, 1.0, 1.0];

    // Overlay tints, drawn over the field
    pub const PAUSED: [f32; 4] = [0.0, 0.0, 0.0, 0.55];
    pub const HELP: [f32; 4] = [0.1, 0.2, 0.5, 0.6];
    pub const GAME_OVER: [f32; 4] = [0.6, 0.05, 0.05, 0.6];
    pub const MENU: [f32; 4] = [0.15, 0.05, 0.25, 0.7];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_matches_vertex() {
        let layout = Vertex::layout();
        assert_eq!(layout.array_stride, 24);
        assert_eq!(layout.attributes.len(), 2);
        assert_eq!(layout.attributes[0].offset, 0);
        assert_eq!(layout.attributes[1].offset, 8);
        assert_eq!(layout.attributes[1].shader_location, 1);
    }
}
