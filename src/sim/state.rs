//! Game state and core simulation types
//!
//! [`GameState`] is the entity store: it owns the ship, the asteroid and
//! bullet collections, every timer and flag, and is the only place entities
//! are created or destroyed.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::geometry;
use super::random::UniformSource;
use super::spawner::Spawner;
use crate::consts::{FIELD_EXTENT, SHAPE_BASE_RADIUS};
use crate::tuning::{FragmentCapPolicy, Tuning};

/// Asteroid size category, largest first
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum AsteroidSize {
    Large,
    Medium,
    Small,
}

impl AsteroidSize {
    /// Size of the fragments a hit produces (`None` for the smallest size)
    pub fn next_smaller(self) -> Option<Self> {
        match self {
            AsteroidSize::Large => Some(AsteroidSize::Medium),
            AsteroidSize::Medium => Some(AsteroidSize::Small),
            AsteroidSize::Small => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AsteroidSize::Large => "large",
            AsteroidSize::Medium => "medium",
            AsteroidSize::Small => "small",
        }
    }
}

/// Asteroid palette tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AsteroidColor {
    Orange,
    Cyan,
    Magenta,
    Yellow,
    Green,
}

impl AsteroidColor {
    pub const PALETTE: [AsteroidColor; 5] = [
        AsteroidColor::Orange,
        AsteroidColor::Cyan,
        AsteroidColor::Magenta,
        AsteroidColor::Yellow,
        AsteroidColor::Green,
    ];

    /// Pick a palette entry uniformly
    pub fn random<R: UniformSource + ?Sized>(rng: &mut R) -> Self {
        Self::PALETTE[rng.index(Self::PALETTE.len())]
    }

    /// Base RGB color
    pub fn rgb(&self) -> [f32; 3] {
        match self {
            AsteroidColor::Orange => [1.0, 0.4, 0.0],
            AsteroidColor::Cyan => [0.0, 0.8, 0.8],
            AsteroidColor::Magenta => [0.8, 0.0, 0.8],
            AsteroidColor::Yellow => [1.0, 1.0, 0.0],
            AsteroidColor::Green => [0.1, 1.0, 0.1],
        }
    }
}

/// Identifier of an asteroid shape in the renderer's side table
pub type ShapeId = u32;

/// Lightweight reference to shape vertices owned by the renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShapeHandle {
    pub id: ShapeId,
    pub vertex_count: u32,
}

/// The player's ship
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ship {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Radians in [0, 2π); 0 faces +Y
    pub rotation: f32,
    pub scale: f32,
    /// Collision radius
    pub radius: f32,
}

impl Ship {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            pos: Vec2::ZERO,
            vel: Vec2::ZERO,
            rotation: 0.0,
            scale: tuning.ship_scale,
            radius: tuning.ship_radius,
        }
    }

    /// Unit vector the ship is facing
    pub fn facing(&self) -> Vec2 {
        crate::facing(self.rotation)
    }
}

/// An asteroid entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Asteroid {
    pub id: u32,
    pub pos: Vec2,
    pub vel: Vec2,
    /// Accumulated spin (cosmetic, never wrapped)
    pub rotation: f32,
    /// Radians/sec, fixed at spawn
    pub rotation_speed: f32,
    pub size: AsteroidSize,
    pub scale: f32,
    pub radius: f32,
    pub color: AsteroidColor,
    pub shape: ShapeHandle,
    /// Still outside the field after an edge spawn; not wrapped until it
    /// first crosses into [-1, 1]
    pub entering: bool,
}

impl Asteroid {
    /// Whether the center lies inside the field
    pub fn in_field(&self) -> bool {
        self.pos.x.abs() <= FIELD_EXTENT && self.pos.y.abs() <= FIELD_EXTENT
    }
}

/// A bullet entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bullet {
    pub pos: Vec2,
    pub vel: Vec2,
    pub scale: f32,
    pub radius: f32,
    /// Seconds remaining
    pub lifetime: f32,
}

impl Bullet {
    /// Whether the bullet should be culled (timed out or past the margin)
    pub fn is_spent(&self, margin: f32) -> bool {
        self.lifetime <= 0.0 || self.pos.x.abs() > margin || self.pos.y.abs() > margin
    }
}

/// Notifications for collaborators outside the simulation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A new asteroid shape needs uploading (triangle-fan layout)
    ShapeCreated { shape: ShapeId, vertices: Vec<Vec2> },
    /// An asteroid was removed; its shape can be freed
    ShapeReleased { shape: ShapeId },
    AsteroidSpawned { id: u32, size: AsteroidSize },
    /// An asteroid was hit and replaced by `fragments` smaller ones
    AsteroidDestroyed {
        id: u32,
        size: AsteroidSize,
        fragments: usize,
    },
    BulletFired,
    ShipDestroyed,
}

/// Complete simulation state
///
/// Entity lifecycle changes are queued as [`GameEvent`]s. The queue is only
/// emptied by [`drain_events`](Self::drain_events), so the owner must drain
/// it every frame; shape events carry full vertex lists.
#[derive(Debug, Clone, Serialize)]
pub struct GameState {
    /// Balance parameters for this session
    pub tuning: Tuning,
    /// Seconds simulated so far
    pub elapsed: f32,
    /// Frames simulated so far
    pub frames: u64,
    pub ship: Ship,
    /// Active asteroids, in insertion order
    pub asteroids: Vec<Asteroid>,
    /// Live bullets
    pub bullets: Vec<Bullet>,
    /// Top-level asteroid spawn timing
    pub spawner: Spawner,
    /// Seconds until the ship may fire again (fires at <= 0)
    pub fire_cooldown: f32,
    /// Thrust held this frame (recomputed from input every frame)
    pub thrusting: bool,
    /// Terminal flag; only ever goes false -> true
    pub game_over: bool,
    /// Events not yet collected by the driver
    #[serde(skip)]
    events: Vec<GameEvent>,
    /// Next entity ID
    next_id: u32,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(Tuning::default())
    }
}

impl GameState {
    /// Create a fresh session: ship at rest in the center, empty field
    pub fn new(tuning: Tuning) -> Self {
        Self {
            ship: Ship::new(&tuning),
            spawner: Spawner::new(&tuning),
            tuning,
            elapsed: 0.0,
            frames: 0,
            asteroids: Vec::new(),
            bullets: Vec::new(),
            fire_cooldown: 0.0,
            thrusting: false,
            game_over: false,
            events: Vec::new(),
            next_id: 1,
        }
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    pub fn asteroid_count(&self) -> usize {
        self.asteroids.len()
    }

    /// Whether a new asteroid fits under the cap
    pub fn has_room(&self) -> bool {
        self.asteroids.len() < self.tuning.max_asteroids
    }

    /// Queue an event for the driver
    pub fn emit(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Take all events queued since the last call
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Flag the run as over. Returns false if it already was.
    pub fn end_game(&mut self) -> bool {
        if self.game_over {
            return false;
        }
        self.game_over = true;
        self.emit(GameEvent::ShipDestroyed);
        true
    }

    /// Create an asteroid with a freshly generated shape.
    ///
    /// Does not check the cap; callers decide whether a spawn is allowed.
    pub fn spawn_asteroid<R: UniformSource + ?Sized>(
        &mut self,
        size: AsteroidSize,
        pos: Vec2,
        vel: Vec2,
        rng: &mut R,
    ) -> u32 {
        self.insert_asteroid(size, pos, vel, false, rng)
    }

    /// Create an asteroid outside the field that drifts in across its own
    /// edge. It only starts wrapping once it has entered.
    pub fn spawn_incoming<R: UniformSource + ?Sized>(
        &mut self,
        size: AsteroidSize,
        pos: Vec2,
        vel: Vec2,
        rng: &mut R,
    ) -> u32 {
        let outside = pos.x.abs() > FIELD_EXTENT || pos.y.abs() > FIELD_EXTENT;
        self.insert_asteroid(size, pos, vel, outside, rng)
    }

    fn insert_asteroid<R: UniformSource + ?Sized>(
        &mut self,
        size: AsteroidSize,
        pos: Vec2,
        vel: Vec2,
        entering: bool,
        rng: &mut R,
    ) -> u32 {
        let id = self.next_entity_id();
        let rotation_speed = rng.range(self.tuning.spin_min, self.tuning.spin_max);
        let color = AsteroidColor::random(rng);
        let vertices = geometry::filled_fan(
            self.tuning.asteroid_segments,
            self.tuning.min_segments,
            SHAPE_BASE_RADIUS,
            rng,
        );

        let asteroid = Asteroid {
            id,
            pos,
            vel,
            rotation: 0.0,
            rotation_speed,
            size,
            scale: self.tuning.sizes.scale(size),
            radius: self.tuning.sizes.radius(size),
            color,
            shape: ShapeHandle {
                id,
                vertex_count: vertices.len() as u32,
            },
            entering,
        };
        self.asteroids.push(asteroid);

        self.emit(GameEvent::ShapeCreated { shape: id, vertices });
        self.emit(GameEvent::AsteroidSpawned { id, size });
        id
    }

    /// Remove the asteroid at `index`, preserving the order of the rest
    pub fn remove_asteroid_at(&mut self, index: usize) -> Option<Asteroid> {
        if index >= self.asteroids.len() {
            return None;
        }
        let asteroid = self.asteroids.remove(index);
        self.emit(GameEvent::ShapeReleased {
            shape: asteroid.shape.id,
        });
        Some(asteroid)
    }

    /// Apply a hit to the asteroid at `index`.
    ///
    /// Large and medium asteroids are replaced by fragments one size down;
    /// small ones are simply removed. Returns the number of fragments
    /// spawned, or `None` if `index` is out of range.
    pub fn destroy_asteroid<R: UniformSource + ?Sized>(
        &mut self,
        index: usize,
        rng: &mut R,
    ) -> Option<usize> {
        let parent = self.remove_asteroid_at(index)?;

        let mut fragments = 0;
        if let Some(next) = parent.size.next_smaller() {
            for _ in 0..self.tuning.fragments_per_split {
                let allowed = match self.tuning.fragment_cap {
                    FragmentCapPolicy::Enforce => self.has_room(),
                    FragmentCapPolicy::Exempt => true,
                };
                if !allowed {
                    log::debug!("Fragment of asteroid {} dropped: field at cap", parent.id);
                    continue;
                }
                self.spawn_fragment(&parent, next, rng);
                fragments += 1;
            }
        }

        log::debug!(
            "Asteroid {} ({}) destroyed, {} fragments",
            parent.id,
            parent.size.as_str(),
            fragments
        );
        self.emit(GameEvent::AsteroidDestroyed {
            id: parent.id,
            size: parent.size,
            fragments,
        });
        Some(fragments)
    }

    /// Spawn one fragment near `parent`, flying off in a random direction
    fn spawn_fragment<R: UniformSource + ?Sized>(
        &mut self,
        parent: &Asteroid,
        size: AsteroidSize,
        rng: &mut R,
    ) -> u32 {
        let spread = parent.scale * self.tuning.fragment_jitter;
        let offset = Vec2::new(rng.centered(spread), rng.centered(spread));
        let speed = rng.range(self.tuning.fragment_speed_min, self.tuning.fragment_speed_max);
        let vel = rng.direction() * speed;
        self.spawn_asteroid(size, parent.pos + offset, vel, rng)
    }
}
