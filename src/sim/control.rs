//! Ship control: steering, thrust and fire
//!
//! Input arrives as raw key states once per frame; everything here is
//! scaled by dt so behaviour is frame-rate independent.

use super::state::{Bullet, GameEvent, GameState};
use super::tick::TickInput;
use crate::consts::BULLET_SPAWN_DISTANCE;
use crate::normalize_angle;

/// Rotate the ship (left is counter-clockwise) and renormalize to [0, 2π)
pub fn steer(state: &mut GameState, input: &TickInput, dt: f32) {
    let turn = state.tuning.rotation_speed * dt;
    let ship = &mut state.ship;
    if input.rotate_left {
        ship.rotation += turn;
    }
    if input.rotate_right {
        ship.rotation -= turn;
    }
    ship.rotation = normalize_angle(ship.rotation);
}

/// Accelerate along the facing direction; sets the thrust flag for this frame
pub fn thrust(state: &mut GameState, input: &TickInput, dt: f32) {
    state.thrusting = input.thrust;
    if input.thrust {
        let accel = state.ship.facing() * state.tuning.thrust * dt;
        state.ship.vel += accel;
    }
}

/// Fire a bullet if the cooldown has elapsed. Returns true if one was fired.
///
/// The bullet leaves from just ahead of the nose and inherits the ship's
/// velocity on top of its own muzzle speed.
pub fn try_fire(state: &mut GameState) -> bool {
    if state.fire_cooldown > 0.0 {
        return false;
    }

    let tuning = &state.tuning;
    let ship = &state.ship;
    let dir = ship.facing();
    let bullet = Bullet {
        pos: ship.pos + dir * ship.radius * BULLET_SPAWN_DISTANCE,
        vel: dir * tuning.bullet_speed + ship.vel,
        scale: tuning.bullet_radius,
        radius: tuning.bullet_radius,
        lifetime: tuning.bullet_lifetime,
    };
    state.fire_cooldown = tuning.fire_interval;
    state.bullets.push(bullet);
    state.emit(GameEvent::BulletFired);
    true
}

/// Apply one frame of player input
pub fn apply_input(state: &mut GameState, input: &TickInput, dt: f32) {
    steer(state, input, dt);
    thrust(state, input, dt);
    if input.fire {
        try_fire(state);
    }
}
