//! GPU-compatible data types for the line pipeline
//!
//! These types are designed to match the shader layouts exactly.
//! All types derive Pod and Zeroable for safe GPU buffer operations.

use bytemuck::{Pod, Zeroable};

/// A flat-colored vertex in canvas pixels
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex2D {
    /// Position in canvas pixels (origin top-left, y down)
    pub position: [f32; 2],
    /// RGBA color
    pub color: [f32; 4],
}

impl Vertex2D {
    pub fn new(position: [f32; 2], color: [f32; 4]) -> Self {
        Self { position, color }
    }
}

/// Uniforms for the line shader
#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct CanvasUniforms {
    /// Canvas size in pixels
    pub canvas_size: [f32; 2],
    /// Padding to align to 16 bytes
    pub _padding: [f32; 2],
}

impl CanvasUniforms {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            canvas_size: [width, height],
            _padding: [0.0; 2],
        }
    }
}

impl Default for CanvasUniforms {
    fn default() -> Self {
        Self::new(500.0, 500.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::mem::size_of;

    #[test]
    fn test_vertex2d_size() {
        // 2 floats position + 4 floats color
        assert_eq!(size_of::<Vertex2D>(), 24);
    }

    #[test]
    fn test_canvas_uniforms_size() {
        // Uniform buffers need 16-byte alignment
        assert_eq!(size_of::<CanvasUniforms>(), 16);
    }

    #[test]
    fn test_vertex_bytes() {
        let v = Vertex2D::new([1.0, 2.0], [0.0, 0.0, 0.0, 1.0]);
        assert_eq!(bytemuck::bytes_of(&v).len(), 24);
    }
}
