//! Data-driven game balance
//!
//! Every gameplay constant lives in [`Tuning`]. Defaults reproduce the classic
//! feel; a JSON file can override any subset of fields.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::sim::AsteroidSize;

/// Errors raised while loading or validating a tuning file
#[derive(Debug, Error)]
pub enum TuningError {
    #[error("failed to read tuning file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse tuning file: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid tuning value: {0}")]
    Invalid(String),
}

/// Upper bound on fragments per split; keeps a large rock's split tree at
/// no more than six descendants
pub const MAX_FRAGMENTS_PER_SPLIT: usize = 2;

/// Whether fragment spawns respect the asteroid cap
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum FragmentCapPolicy {
    /// Each fragment is only spawned while the field is below the cap
    #[default]
    Enforce,
    /// Splits always produce their fragments, even past the cap
    Exempt,
}

impl FragmentCapPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            FragmentCapPolicy::Enforce => "enforce",
            FragmentCapPolicy::Exempt => "exempt",
        }
    }
}

/// Size category -> scale mapping.
///
/// Shapes are generated at unit radius, so the scale doubles as the
/// collision radius.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SizeTable {
    pub large: f32,
    pub medium: f32,
    pub small: f32,
}

impl Default for SizeTable {
    fn default() -> Self {
        Self {
            large: 0.15,
            medium: 0.08,
            small: 0.04,
        }
    }
}

impl SizeTable {
    /// Render scale for a size category
    pub fn scale(&self, size: AsteroidSize) -> f32 {
        match size {
            AsteroidSize::Large => self.large,
            AsteroidSize::Medium => self.medium,
            AsteroidSize::Small => self.small,
        }
    }

    /// Collision radius for a size category
    pub fn radius(&self, size: AsteroidSize) -> f32 {
        self.scale(size) * crate::consts::SHAPE_BASE_RADIUS
    }
}

/// Game balance parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Ship ===
    /// Ship render scale
    pub ship_scale: f32,
    /// Ship collision radius
    pub ship_radius: f32,
    /// Thrust acceleration (units/s²)
    pub thrust: f32,
    /// Turn rate (radians/s)
    pub rotation_speed: f32,
    /// Per-frame velocity multiplier applied to the ship
    pub friction: f32,

    // === Bullets ===
    pub bullet_speed: f32,
    /// Seconds between shots
    pub fire_interval: f32,
    pub bullet_lifetime: f32,
    pub bullet_radius: f32,
    /// Bullets beyond this absolute coordinate are culled
    pub bullet_margin: f32,

    // === Spawning ===
    /// First spawn interval (seconds)
    pub initial_spawn_interval: f32,
    /// Floor for the spawn interval
    pub min_spawn_interval: f32,
    /// Interval reduction after every top-level spawn
    pub spawn_interval_step: f32,
    /// Active asteroid cap
    pub max_asteroids: usize,
    /// Edge spawns are placed this far from the center on the chosen axis
    pub spawn_edge_offset: f32,
    /// Random perturbation of the aim toward the center
    pub spawn_scatter: f32,
    pub spawn_speed_min: f32,
    pub spawn_speed_max: f32,

    // === Asteroids ===
    pub sizes: SizeTable,
    pub fragment_speed_min: f32,
    pub fragment_speed_max: f32,
    /// Fragment jitter as a fraction of the parent scale
    pub fragment_jitter: f32,
    pub fragments_per_split: usize,
    pub fragment_cap: FragmentCapPolicy,
    pub spin_min: f32,
    pub spin_max: f32,
    /// Requested outline segments (raised to `min_segments`)
    pub asteroid_segments: usize,
    pub min_segments: usize,

    // === Timing ===
    /// Longest wall-clock step fed to the simulation
    pub max_frame_dt: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            ship_scale: 0.04,
            ship_radius: 0.04,
            thrust: 1.0,
            rotation_speed: 2.0,
            friction: 0.995,

            bullet_speed: 2.5,
            fire_interval: 0.2,
            bullet_lifetime: crate::consts::BULLET_LIFETIME,
            bullet_radius: crate::consts::BULLET_RADIUS,
            bullet_margin: 1.5,

            initial_spawn_interval: 5.0,
            min_spawn_interval: 1.0,
            spawn_interval_step: 0.1,
            max_asteroids: 20,
            spawn_edge_offset: 1.1,
            spawn_scatter: 0.2,
            spawn_speed_min: 0.1,
            spawn_speed_max: 0.3,

            sizes: SizeTable::default(),
            fragment_speed_min: 0.3,
            fragment_speed_max: 0.7,
            fragment_jitter: 0.5,
            fragments_per_split: 2,
            fragment_cap: FragmentCapPolicy::Enforce,
            spin_min: 0.3,
            spin_max: 0.8,
            asteroid_segments: 16,
            min_segments: 20,

            max_frame_dt: 0.1,
        }
    }
}

impl Tuning {
    /// Environment variable naming an optional JSON tuning file
    pub const ENV_VAR: &'static str = "DRIFT_TUNING";

    /// Parse tuning from JSON (missing fields take defaults) and validate it
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Load tuning from a JSON file
    pub fn load(path: &Path) -> Result<Self, TuningError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Load tuning from `path` if given, falling back to defaults on any error
    pub fn load_or_default(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            log::info!("Using default tuning");
            return Self::default();
        };

        match Self::load(path) {
            Ok(tuning) => {
                log::info!("Loaded tuning from {}", path.display());
                tuning
            }
            Err(e) => {
                log::warn!("{} ({}), using default tuning", e, path.display());
                Self::default()
            }
        }
    }

    /// Reject values that would break simulation invariants
    pub fn validate(&self) -> Result<(), TuningError> {
        let positive = [
            ("ship_scale", self.ship_scale),
            ("ship_radius", self.ship_radius),
            ("bullet_speed", self.bullet_speed),
            ("bullet_lifetime", self.bullet_lifetime),
            ("bullet_radius", self.bullet_radius),
            ("bullet_margin", self.bullet_margin),
            ("min_spawn_interval", self.min_spawn_interval),
            ("sizes.large", self.sizes.large),
            ("sizes.medium", self.sizes.medium),
            ("sizes.small", self.sizes.small),
            ("max_frame_dt", self.max_frame_dt),
        ];
        for (name, value) in positive {
            if !(value > 0.0) {
                return Err(TuningError::Invalid(format!("{name} must be positive, got {value}")));
            }
        }

        if !(self.friction > 0.0 && self.friction <= 1.0) {
            return Err(TuningError::Invalid(format!(
                "friction must be in (0, 1], got {}",
                self.friction
            )));
        }
        if self.max_asteroids == 0 {
            return Err(TuningError::Invalid("max_asteroids must be at least 1".into()));
        }
        if self.min_spawn_interval > self.initial_spawn_interval {
            return Err(TuningError::Invalid(format!(
                "min_spawn_interval ({}) exceeds initial_spawn_interval ({})",
                self.min_spawn_interval, self.initial_spawn_interval
            )));
        }
        for (name, value) in [
            ("spawn_interval_step", self.spawn_interval_step),
            ("fire_interval", self.fire_interval),
        ] {
            if !(value >= 0.0) {
                return Err(TuningError::Invalid(format!(
                    "{name} must not be negative, got {value}"
                )));
            }
        }
        if self.fragments_per_split > MAX_FRAGMENTS_PER_SPLIT {
            return Err(TuningError::Invalid(format!(
                "fragments_per_split must be at most {MAX_FRAGMENTS_PER_SPLIT}, got {}",
                self.fragments_per_split
            )));
        }
        if !(self.sizes.large > self.sizes.medium && self.sizes.medium > self.sizes.small) {
            return Err(TuningError::Invalid(
                "sizes must strictly decrease from large to small".into(),
            ));
        }
        for (name, lo, hi) in [
            ("spawn_speed", self.spawn_speed_min, self.spawn_speed_max),
            ("fragment_speed", self.fragment_speed_min, self.fragment_speed_max),
            ("spin", self.spin_min, self.spin_max),
        ] {
            if lo > hi {
                return Err(TuningError::Invalid(format!("{name}_min exceeds {name}_max")));
            }
        }
        Ok(())
    }
}
