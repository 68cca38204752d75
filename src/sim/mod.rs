//! Simulation module
//!
//! All gameplay logic lives here. This module must stay free of rendering
//! and platform dependencies:
//! - Wall-clock dt is passed in, never read
//! - Randomness comes from an injected [`UniformSource`]
//! - Graphics resources are only referenced through [`ShapeHandle`]s

pub mod collision;
pub mod control;
pub mod geometry;
pub mod physics;
pub mod random;
pub mod resolve;
pub mod spawner;
pub mod state;
pub mod tick;

pub use collision::collides;
pub use random::{UniformSource, session_rng};
pub use resolve::HitReport;
pub use spawner::{Edge, Spawner};
pub use state::{
    Asteroid, AsteroidColor, AsteroidSize, Bullet, GameEvent, GameState, ShapeHandle, ShapeId,
    Ship,
};
pub use tick::{TickInput, tick};
