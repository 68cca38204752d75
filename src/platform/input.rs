//! Key input boundary
//!
//! The windowing layer exposes raw key states; the core samples them once per
//! frame. Repeat rates and edge detection are not the core's concern.

use std::collections::HashSet;

use crate::sim::TickInput;

/// Keys the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    RotateLeft,
    RotateRight,
    Thrust,
    Fire,
    Quit,
}

/// Anything that can report whether a key is currently held
pub trait KeySource {
    fn is_down(&self, key: Key) -> bool;
}

/// Sample every key once for this frame
pub fn poll<K: KeySource + ?Sized>(keys: &K) -> TickInput {
    TickInput {
        rotate_left: keys.is_down(Key::RotateLeft),
        rotate_right: keys.is_down(Key::RotateRight),
        thrust: keys.is_down(Key::Thrust),
        fire: keys.is_down(Key::Fire),
        quit: keys.is_down(Key::Quit),
    }
}

/// Key state set by hand (tests, scripted input, event-driven backends)
#[derive(Debug, Clone, Default)]
pub struct HeldKeys {
    held: HashSet<Key>,
}

impl HeldKeys {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self, key: Key) {
        self.held.insert(key);
    }

    pub fn release(&mut self, key: Key) {
        self.held.remove(&key);
    }

    pub fn release_all(&mut self) {
        self.held.clear();
    }
}

impl KeySource for HeldKeys {
    fn is_down(&self, key: Key) -> bool {
        self.held.contains(&key)
    }
}
