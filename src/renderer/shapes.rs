//! Shape generation for 2D primitives
//!
//! Model-space vertex lists; the renderer applies each entity's
//! translate/rotate/scale transform at draw time.

use glam::Vec2;
use std::f32::consts::TAU;

use super::vertex::{Vertex, colors};

/// Ship body as a triangle fan: center, nose, left tail, right tail, nose
pub fn ship_fill() -> Vec<Vertex> {
    let c = colors::SHIP_FILL;
    vec![
        Vertex::new(0.0, 0.0, c),
        Vertex::new(0.0, 1.0, c),
        Vertex::new(-1.0, -1.0, c),
        Vertex::new(1.0, -1.0, c),
        Vertex::new(0.0, 1.0, c),
    ]
}

/// Ship outline as a line loop
pub fn ship_outline() -> Vec<Vertex> {
    let c = colors::SHIP_OUTLINE;
    vec![
        Vertex::new(0.0, 1.0, c),
        Vertex::new(-1.0, -1.0, c),
        Vertex::new(1.0, -1.0, c),
    ]
}

/// Exhaust flame drawn behind the ship while thrusting (triangle fan).
///
/// Drawn at 1.5x the ship scale.
pub fn thrust_flame() -> Vec<Vertex> {
    let c = colors::THRUST;
    vec![
        Vertex::new(0.0, 0.0, c),
        Vertex::new(-0.5, -1.0, c),
        Vertex::new(0.5, -1.0, c),
        Vertex::new(0.0, 0.0, c),
    ]
}

/// Scale applied to the ship transform when drawing the flame
pub const THRUST_SCALE: f32 = 1.5;

/// Segments used for bullet discs
const BULLET_SEGMENTS: u32 = 8;

/// Bullet as a filled disc (triangle list) in world space
pub fn bullet(center: Vec2, radius: f32) -> Vec<Vertex> {
    let color = colors::BULLET;
    let mut vertices = Vec::with_capacity((BULLET_SEGMENTS * 3) as usize);
    for i in 0..BULLET_SEGMENTS {
        let theta1 = i as f32 / BULLET_SEGMENTS as f32 * TAU;
        let theta2 = (i + 1) as f32 / BULLET_SEGMENTS as f32 * TAU;
        vertices.push(Vertex::at(center, color));
        vertices.push(Vertex::at(center + Vec2::from_angle(theta1) * radius, color));
        vertices.push(Vertex::at(center + Vec2::from_angle(theta2) * radius, color));
    }
    vertices
}

/// Asteroid body from a triangle-fan point list
pub fn asteroid_fill(fan: &[Vec2], rgb: [f32; 3]) -> Vec<Vertex> {
    let color = colors::fill(rgb);
    fan.iter().map(|&p| Vertex::at(p, color)).collect()
}

/// Asteroid outline (line loop): the fan without its center vertex
pub fn asteroid_outline(fan: &[Vec2], rgb: [f32; 3]) -> Vec<Vertex> {
    let color = colors::outline(rgb);
    fan.iter().skip(1).map(|&p| Vertex::at(p, color)).collect()
}
