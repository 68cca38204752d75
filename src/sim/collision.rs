//! Bounding-circle collision detection
//!
//! Every entity is approximated by a circle. Two circles collide when the
//! distance between their centers is strictly less than the sum of their
//! radii; touching exactly does not count.

use glam::Vec2;

use super::state::{Asteroid, Bullet, Ship};

/// Circle-circle overlap test (strict, no epsilon)
#[inline]
pub fn collides(pos_a: Vec2, radius_a: f32, pos_b: Vec2, radius_b: f32) -> bool {
    let reach = radius_a + radius_b;
    pos_a.distance_squared(pos_b) < reach * reach
}

/// Ship against an asteroid
#[inline]
pub fn ship_hits_asteroid(ship: &Ship, asteroid: &Asteroid) -> bool {
    collides(ship.pos, ship.radius, asteroid.pos, asteroid.radius)
}

/// Bullet against an asteroid
#[inline]
pub fn bullet_hits_asteroid(bullet: &Bullet, asteroid: &Asteroid) -> bool {
    collides(asteroid.pos, asteroid.radius, bullet.pos, bullet.radius)
}

/// Index of the first asteroid touching the ship, in store order
pub fn first_ship_hit(ship: &Ship, asteroids: &[Asteroid]) -> Option<usize> {
    asteroids.iter().position(|a| ship_hits_asteroid(ship, a))
}
