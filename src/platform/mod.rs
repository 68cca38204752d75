//! Platform abstraction layer
//!
//! Handles what the windowing layer would normally provide:
//! - Key state input
//! - Wall-clock frame timing
//! - A demo autopilot standing in for a player

pub mod autopilot;
pub mod clock;
pub mod input;

pub use autopilot::Autopilot;
pub use clock::FrameClock;
pub use input::{HeldKeys, Key, KeySource, poll};
