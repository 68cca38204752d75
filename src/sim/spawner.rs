//! Top-level asteroid spawning
//!
//! A countdown timer releases one large asteroid from a random screen edge,
//! aimed roughly at the center. Every spawn shortens the interval by a fixed
//! step down to a floor, so pressure ramps up linearly over a run.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::random::UniformSource;
use super::state::{AsteroidSize, GameState};
use crate::tuning::Tuning;

/// Screen edge an asteroid enters from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Top,
    Bottom,
    Left,
    Right,
}

impl Edge {
    pub const ALL: [Edge; 4] = [Edge::Top, Edge::Bottom, Edge::Left, Edge::Right];

    /// Point on this edge, `offset` from the center along the edge normal;
    /// `along` in [-1, 1] slides it along the edge.
    pub fn point(self, offset: f32, along: f32) -> Vec2 {
        match self {
            Edge::Top => Vec2::new(along, offset),
            Edge::Bottom => Vec2::new(along, -offset),
            Edge::Left => Vec2::new(-offset, along),
            Edge::Right => Vec2::new(offset, along),
        }
    }
}

/// Spawn timer and difficulty ramp
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Spawner {
    /// Seconds until the next spawn attempt (spawns at <= 0)
    pub timer: f32,
    /// Interval the timer resets to after a spawn
    pub interval: f32,
    /// Top-level asteroids released so far
    pub spawned: u32,
}

impl Spawner {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            // First rock arrives immediately
            timer: 0.0,
            interval: tuning.initial_spawn_interval,
            spawned: 0,
        }
    }

    /// Shorten the interval by one step (never below the floor) and rearm
    fn ramp(&mut self, tuning: &Tuning) {
        self.interval = (self.interval - tuning.spawn_interval_step).max(tuning.min_spawn_interval);
        self.timer = self.interval;
        self.spawned += 1;
    }
}

/// Position and velocity for a new edge spawn
pub fn edge_launch<R: UniformSource + ?Sized>(tuning: &Tuning, rng: &mut R) -> (Vec2, Vec2) {
    let edge = Edge::ALL[rng.index(Edge::ALL.len())];
    let along = rng.unit() * 2.0 - 1.0;
    let pos = edge.point(tuning.spawn_edge_offset, along);

    let mut dir = (Vec2::ZERO - pos).normalize_or_zero();
    dir.x += rng.centered(tuning.spawn_scatter);
    dir.y += rng.centered(tuning.spawn_scatter);
    let dir = dir.normalize_or_zero();

    let speed = rng.range(tuning.spawn_speed_min, tuning.spawn_speed_max);
    (pos, dir * speed)
}

/// Advance the spawn timer; release a large asteroid when it is due and the
/// field has room. Returns the new asteroid's id.
pub fn update<R: UniformSource + ?Sized>(state: &mut GameState, dt: f32, rng: &mut R) -> Option<u32> {
    state.spawner.timer -= dt;
    if state.spawner.timer > 0.0 {
        return None;
    }
    if !state.has_room() {
        log::trace!("Spawn due but field is at cap ({})", state.asteroid_count());
        return None;
    }

    let (pos, vel) = edge_launch(&state.tuning, rng);
    let id = state.spawn_incoming(AsteroidSize::Large, pos, vel, rng);
    state.spawner.ramp(&state.tuning);
    log::debug!(
        "Spawned asteroid {} at ({:.2}, {:.2}); next in {:.1}s",
        id,
        pos.x,
        pos.y,
        state.spawner.interval
    );
    Some(id)
}
