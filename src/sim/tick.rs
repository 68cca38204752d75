//! Per-frame simulation step
//!
//! Core game loop that advances the simulation by one wall-clock frame.

use super::random::UniformSource;
use super::state::GameState;
use super::{control, physics, resolve, spawner};

/// Key states for a single frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    pub rotate_left: bool,
    pub rotate_right: bool,
    pub thrust: bool,
    pub fire: bool,
    /// Leave the game loop (handled by the driver, not the simulation)
    pub quit: bool,
}

/// Advance the game state by `dt` seconds.
///
/// Order: input, spawning, integration, ship collision, bullet collision.
/// Once the game is over the world is frozen and this is a no-op.
pub fn tick<R: UniformSource + ?Sized>(
    state: &mut GameState,
    input: &TickInput,
    dt: f32,
    rng: &mut R,
) {
    if state.game_over {
        return;
    }

    state.frames += 1;
    state.elapsed += dt;
    state.fire_cooldown -= dt;

    control::apply_input(state, input, dt);
    spawner::update(state, dt, rng);
    physics::step(state, dt);

    if resolve::resolve_ship(state) {
        log::info!(
            "Game over at frame {} with {} asteroids in play",
            state.frames,
            state.asteroid_count()
        );
    }
    resolve::resolve_bullets(state, rng);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::random::scripted::Scripted;
    use crate::sim::state::{AsteroidSize, GameEvent};
    use glam::Vec2;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    const DT: f32 = 1.0 / 60.0;

    #[test]
    fn test_first_frame_spawns() {
        let mut state = GameState::default();
        let mut rng = Pcg32::seed_from_u64(12345);
        tick(&mut state, &TickInput::default(), DT, &mut rng);
        assert_eq!(state.asteroid_count(), 1);
        assert_eq!(state.frames, 1);
    }

    #[test]
    fn test_fire_then_cooldown() {
        let mut state = GameState::default();
        let mut rng = Pcg32::seed_from_u64(1);
        // Keep the field empty so nothing absorbs the shots
        state.spawner.timer = 100.0;
        let fire = TickInput {
            fire: true,
            ..Default::default()
        };
        tick(&mut state, &fire, DT, &mut rng);
        assert_eq!(state.bullets.len(), 1);

        // Held fire only repeats once the cooldown runs out
        for _ in 0..5 {
            tick(&mut state, &fire, DT, &mut rng);
        }
        assert!(state.bullets.len() <= 2);
        for _ in 0..20 {
            tick(&mut state, &fire, DT, &mut rng);
        }
        assert!(state.bullets.len() >= 2);
    }

    #[test]
    fn test_game_over_freezes_world() {
        let mut state = GameState::default();
        let mut rng = Pcg32::seed_from_u64(2);
        state.spawner.timer = 100.0;
        state.spawn_asteroid(AsteroidSize::Large, Vec2::new(0.1, 0.0), Vec2::new(0.1, 0.0), &mut rng);

        tick(&mut state, &TickInput::default(), DT, &mut rng);
        assert!(state.game_over);
        let pos = state.asteroids[0].pos;
        let frames = state.frames;

        let fire = TickInput {
            fire: true,
            thrust: true,
            ..Default::default()
        };
        tick(&mut state, &fire, DT, &mut rng);
        assert_eq!(state.asteroids[0].pos, pos);
        assert_eq!(state.frames, frames);
        assert!(state.bullets.is_empty());
    }

    #[test]
    fn test_events_emitted() {
        let mut state = GameState::default();
        let mut rng = Pcg32::seed_from_u64(3);
        let fire = TickInput {
            fire: true,
            ..Default::default()
        };
        tick(&mut state, &fire, DT, &mut rng);
        let events = state.drain_events();
        assert!(events.contains(&GameEvent::BulletFired));
        assert!(events.iter().any(|e| matches!(e, GameEvent::ShapeCreated { .. })));
    }

    #[test]
    fn test_determinism() {
        // Two states with the same seed and inputs stay identical
        let mut state1 = GameState::default();
        let mut state2 = GameState::default();
        let mut rng1 = Pcg32::seed_from_u64(99999);
        let mut rng2 = Pcg32::seed_from_u64(99999);

        let inputs = [
            TickInput {
                rotate_left: true,
                ..Default::default()
            },
            TickInput {
                thrust: true,
                fire: true,
                ..Default::default()
            },
            TickInput::default(),
        ];

        for i in 0..600 {
            let input = &inputs[i % inputs.len()];
            tick(&mut state1, input, DT, &mut rng1);
            tick(&mut state2, input, DT, &mut rng2);
        }

        assert_eq!(state1.asteroid_count(), state2.asteroid_count());
        assert_eq!(state1.bullets.len(), state2.bullets.len());
        assert_eq!(state1.ship.pos, state2.ship.pos);
        assert_eq!(state1.game_over, state2.game_over);
    }

    #[test]
    fn test_top_spawn_enters_from_the_top() {
        let mut state = GameState::default();
        state.ship.pos = Vec2::new(0.0, -0.9);
        // Top edge, centered, no scatter, slowest speed
        let mut rng = Scripted::new(&[0.1, 0.5, 0.5, 0.5, 0.0]);

        tick(&mut state, &TickInput::default(), DT, &mut rng);
        assert!(!state.game_over);
        let mut last_y = state.asteroids[0].pos.y;
        assert!(last_y > 1.0);

        for _ in 0..120 {
            tick(&mut state, &TickInput::default(), DT, &mut rng);
            let y = state.asteroids[0].pos.y;
            assert!(y < last_y, "rock jumped from {last_y} to {y}");
            last_y = y;
        }
        assert!(!state.game_over);
        assert!(!state.asteroids[0].entering);
        assert!((0.85..1.0).contains(&last_y));
    }
}
