//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};
use glam::Vec2;

/// Simple 2D vertex with position and color
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

    pub fn at(p: Vec2, color: [f32; 4]) -> Self {
        Self::new(p.x, p.y, color)
    }
}

/// Reinterpret vertices as raw bytes for upload
pub fn as_bytes(vertices: &[Vertex]) -> &[u8] {
    bytemuck::cast_slice(vertices)
}

/// Colors for game elements
pub mod colors {
    pub const SHIP_FILL: [f32; 4] = [0.2, 0.7, 0.7, 1.0];
    pub const SHIP_OUTLINE: [f32; 4] = [0.5, 1.0, 1.0, 1.0];
    pub const THRUST: [f32; 4] = [1.0, 1.0, 0.0, 1.0];
    pub const BULLET: [f32; 4] = [1.0, 0.0, 0.0, 1.0];
    pub const BACKGROUND: [f32; 4] = [0.02, 0.01, 0.05, 1.0];

    /// Darkened body color for an asteroid
    pub fn fill(rgb: [f32; 3]) -> [f32; 4] {
        [rgb[0] * 0.5, rgb[1] * 0.5, rgb[2] * 0.5, 1.0]
    }

    /// Brightened outline color for an asteroid, clamped to 1.0
    pub fn outline(rgb: [f32; 3]) -> [f32; 4] {
        [
            (rgb[0] * 1.5).min(1.0),
            (rgb[1] * 1.5).min(1.0),
            (rgb[2] * 1.5).min(1.0),
            1.0,
        ]
    }
}
