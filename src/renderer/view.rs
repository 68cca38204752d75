//! Read-only per-frame snapshot for the renderer

use glam::Vec2;
use serde::Serialize;

use crate::sim::{AsteroidColor, AsteroidSize, GameState, ShapeId};

#[derive(Debug, Clone, Serialize)]
pub struct ShipView {
    pub position: Vec2,
    pub rotation: f32,
    pub scale: f32,
}

#[derive(Debug, Clone, Serialize)]
pub struct AsteroidView {
    pub position: Vec2,
    pub rotation: f32,
    pub scale: f32,
    pub size: AsteroidSize,
    pub color: AsteroidColor,
    pub shape: ShapeId,
    pub vertex_count: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct BulletView {
    pub position: Vec2,
    pub scale: f32,
}

/// Everything a renderer needs to draw one frame
#[derive(Debug, Clone, Serialize)]
pub struct FrameView {
    pub ship: ShipView,
    pub thrusting: bool,
    pub game_over: bool,
    pub asteroids: Vec<AsteroidView>,
    pub bullets: Vec<BulletView>,
}

impl FrameView {
    pub fn capture(state: &GameState) -> Self {
        Self {
            ship: ShipView {
                position: state.ship.pos,
                rotation: state.ship.rotation,
                scale: state.ship.scale,
            },
            thrusting: state.thrusting,
            game_over: state.game_over,
            asteroids: state
                .asteroids
                .iter()
                .map(|a| AsteroidView {
                    position: a.pos,
                    rotation: a.rotation,
                    scale: a.scale,
                    size: a.size,
                    color: a.color,
                    shape: a.shape.id,
                    vertex_count: a.shape.vertex_count,
                })
                .collect(),
            bullets: state
                .bullets
                .iter()
                .map(|b| BulletView {
                    position: b.pos,
                    scale: b.scale,
                })
                .collect(),
        }
    }

    /// Whether the ship (and its flame) should be drawn
    pub fn ship_visible(&self) -> bool {
        !self.game_over
    }

    pub fn flame_visible(&self) -> bool {
        self.thrusting && !self.game_over
    }
}
