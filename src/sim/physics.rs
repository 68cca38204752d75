//! Motion integration
//!
//! Explicit Euler on wall-clock dt. The ship is damped by friction every
//! frame; asteroids drift freely and spin. Both wrap around the torus.
//! Bullets move in straight lines and never wrap; they are culled instead.

use super::state::{Asteroid, Bullet, GameState, Ship};
use crate::wrap_position;

/// Apply friction, move, and wrap the ship
pub fn integrate_ship(ship: &mut Ship, friction: f32, dt: f32) {
    ship.vel *= friction;
    ship.pos = wrap_position(ship.pos + ship.vel * dt);
}

/// Move, spin, and wrap every asteroid.
///
/// Rocks still entering from an edge move unwrapped until their center
/// crosses into the field.
pub fn integrate_asteroids(asteroids: &mut [Asteroid], dt: f32) {
    for asteroid in asteroids {
        let moved = asteroid.pos + asteroid.vel * dt;
        asteroid.rotation += asteroid.rotation_speed * dt;
        if asteroid.entering {
            asteroid.pos = moved;
            asteroid.entering = !asteroid.in_field();
        } else {
            asteroid.pos = wrap_position(moved);
        }
    }
}

/// Move every bullet and burn down its lifetime
pub fn integrate_bullets(bullets: &mut [Bullet], dt: f32) {
    for bullet in bullets {
        bullet.pos += bullet.vel * dt;
        bullet.lifetime -= dt;
    }
}

/// Advance all entities by `dt` and cull spent bullets
pub fn step(state: &mut GameState, dt: f32) {
    integrate_ship(&mut state.ship, state.tuning.friction, dt);
    integrate_asteroids(&mut state.asteroids, dt);
    integrate_bullets(&mut state.bullets, dt);

    let margin = state.tuning.bullet_margin;
    let before = state.bullets.len();
    state.bullets.retain(|b| !b.is_spent(margin));
    let culled = before - state.bullets.len();
    if culled > 0 {
        log::trace!("Culled {} bullets", culled);
    }
}
