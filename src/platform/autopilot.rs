//! Demo autopilot
//!
//! Plays the game through the same key interface a human uses: turn toward
//! the nearest asteroid, shoot when lined up, nudge forward when the field is
//! quiet. Presses Quit once the session time limit is reached.

use std::f32::consts::{PI, TAU};

use super::input::{Key, KeySource};
use crate::sim::GameState;

/// Heading error (radians) below which the pilot stops turning
const AIM_DEADBAND: f32 = 0.05;
/// Heading error below which the pilot fires
const FIRE_CONE: f32 = 0.15;
/// Thrust only when the closest rock is at least this far away
const SAFE_DISTANCE: f32 = 0.7;
/// Top speed the pilot allows itself
const CRUISE_SPEED: f32 = 0.15;

#[derive(Debug, Clone, Default)]
pub struct Autopilot {
    /// Seconds of play before pressing Quit (`None` plays until game over)
    pub time_limit: Option<f32>,
    rotate_left: bool,
    rotate_right: bool,
    thrust: bool,
    fire: bool,
    quit: bool,
}

impl Autopilot {
    pub fn new(time_limit: Option<f32>) -> Self {
        Self {
            time_limit,
            ..Default::default()
        }
    }

    /// Decide this frame's key states from the current world
    pub fn update(&mut self, state: &GameState) {
        self.quit = self.time_limit.is_some_and(|limit| state.elapsed >= limit);

        let ship = &state.ship;
        let nearest = state
            .asteroids
            .iter()
            .map(|a| (a, a.pos.distance(ship.pos)))
            .min_by(|(_, da), (_, db)| da.total_cmp(db));

        let Some((target, distance)) = nearest else {
            self.rotate_left = false;
            self.rotate_right = false;
            self.fire = false;
            self.thrust = false;
            return;
        };

        let to_target = target.pos - ship.pos;
        // Rotation 0 faces +Y, so subtract a quarter turn from the polar angle
        let desired = to_target.y.atan2(to_target.x) - PI / 2.0;
        let error = (desired - ship.rotation + PI).rem_euclid(TAU) - PI;

        self.rotate_left = error > AIM_DEADBAND;
        self.rotate_right = error < -AIM_DEADBAND;
        self.fire = error.abs() < FIRE_CONE;
        self.thrust = distance > SAFE_DISTANCE && ship.vel.length() < CRUISE_SPEED;
    }
}

impl KeySource for Autopilot {
    fn is_down(&self, key: Key) -> bool {
        match key {
            Key::RotateLeft => self.rotate_left,
            Key::RotateRight => self.rotate_right,
            Key::Thrust => self.thrust,
            Key::Fire => self.fire,
            Key::Quit => self.quit,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::input::poll;
    use crate::sim::AsteroidSize;
    use glam::Vec2;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_idle_on_empty_field() {
        let mut pilot = Autopilot::new(None);
        pilot.update(&GameState::default());
        let input = poll(&pilot);
        assert!(!input.fire && !input.thrust && !input.quit);
    }

    #[test]
    fn test_fires_when_aligned() {
        let mut state = GameState::default();
        let mut rng = Pcg32::seed_from_u64(1);
        // Straight ahead (+Y)
        state.spawn_asteroid(AsteroidSize::Large, Vec2::new(0.0, 0.5), Vec2::ZERO, &mut rng);

        let mut pilot = Autopilot::new(None);
        pilot.update(&state);
        let input = poll(&pilot);
        assert!(input.fire);
        assert!(!input.rotate_left && !input.rotate_right);
    }

    #[test]
    fn test_turns_toward_target() {
        let mut state = GameState::default();
        let mut rng = Pcg32::seed_from_u64(1);
        // To the left (-X) means a counter-clockwise turn
        state.spawn_asteroid(AsteroidSize::Large, Vec2::new(-0.5, 0.0), Vec2::ZERO, &mut rng);

        let mut pilot = Autopilot::new(None);
        pilot.update(&state);
        assert!(pilot.is_down(Key::RotateLeft));
        assert!(!pilot.is_down(Key::Fire));
    }

    #[test]
    fn test_quits_at_time_limit() {
        let mut state = GameState::default();
        let mut pilot = Autopilot::new(Some(10.0));
        pilot.update(&state);
        assert!(!pilot.is_down(Key::Quit));
        state.elapsed = 10.0;
        pilot.update(&state);
        assert!(pilot.is_down(Key::Quit));
    }
}
