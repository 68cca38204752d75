//! Drift - An Asteroids-style arcade game on a wrapped torus
//!
//! Core modules:
//! - `sim`: Simulation core (physics, spawning, collisions, splitting)
//! - `renderer`: Read-only frame view and vertex data for a renderer
//! - `platform`: Key input, wall-clock frame timing, demo autopilot
//! - `tuning`: Data-driven game balance

pub mod platform;
pub mod renderer;
pub mod sim;
pub mod tuning;

pub use tuning::{FragmentCapPolicy, SizeTable, Tuning, TuningError};

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Half-extent of the play area; the field spans [-1, 1] on both axes
    pub const FIELD_EXTENT: f32 = 1.0;
    /// Full width of the field (distance a wrapping entity is translated)
    pub const FIELD_WIDTH: f32 = 2.0 * FIELD_EXTENT;

    /// Ship model points along +Y at rotation 0
    pub const SHIP_FACING_OFFSET: f32 = std::f32::consts::FRAC_PI_2;

    /// Irregularity of asteroid outlines (0.4 => radius varies ±20%)
    pub const OUTLINE_JITTER: f32 = 0.4;
    /// Internal base radius of generated asteroid shapes (scaled at draw time)
    pub const SHAPE_BASE_RADIUS: f32 = 1.0;

    /// Bullet defaults
    pub const BULLET_RADIUS: f32 = 0.01;
    pub const BULLET_LIFETIME: f32 = 1.0;
    /// Bullets spawn this many ship radii ahead of the ship center
    pub const BULLET_SPAWN_DISTANCE: f32 = 1.5;
}

/// Wrap a single coordinate onto the torus [-1, 1].
///
/// Values inside the field are returned unchanged; values beyond either edge
/// are translated by the field width so they re-enter from the opposite side.
#[inline]
pub fn wrap_coord(v: f32) -> f32 {
    use consts::{FIELD_EXTENT, FIELD_WIDTH};
    if v > FIELD_EXTENT || v < -FIELD_EXTENT {
        (v + FIELD_EXTENT).rem_euclid(FIELD_WIDTH) - FIELD_EXTENT
    } else {
        v
    }
}

/// Wrap a position onto the torus, axes independently
#[inline]
pub fn wrap_position(pos: Vec2) -> Vec2 {
    Vec2::new(wrap_coord(pos.x), wrap_coord(pos.y))
}

/// Normalize an angle to [0, 2π)
#[inline]
pub fn normalize_angle(angle: f32) -> f32 {
    angle.rem_euclid(std::f32::consts::TAU)
}

/// Unit facing vector for a ship rotation (rotation 0 faces +Y)
#[inline]
pub fn facing(rotation: f32) -> Vec2 {
    Vec2::from_angle(rotation + consts::SHIP_FACING_OFFSET)
}
