//! Key-state snapshot to movement intent
//!
//! The input collaborator records which keys are held; the simulation only
//! ever sees a snapshot of that state.

use std::collections::HashSet;

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Movement keys the game listens to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    ArrowLeft,
    ArrowRight,
    ArrowUp,
    ArrowDown,
    A,
    D,
    W,
    S,
}

impl Key {
    /// Map a DOM-style key code ("ArrowLeft", "KeyA", ...) to a key
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "ArrowLeft" => Some(Key::ArrowLeft),
            "ArrowRight" => Some(Key::ArrowRight),
            "ArrowUp" => Some(Key::ArrowUp),
            "ArrowDown" => Some(Key::ArrowDown),
            "KeyA" => Some(Key::A),
            "KeyD" => Some(Key::D),
            "KeyW" => Some(Key::W),
            "KeyS" => Some(Key::S),
            _ => None,
        }
    }
}

/// Snapshot of held keys
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyState {
    held: HashSet<Key>,
}

impl KeyState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot with the given keys held
    pub fn with_keys(keys: &[Key]) -> Self {
        Self {
            held: keys.iter().copied().collect(),
        }
    }

    pub fn press(&mut self, key: Key) {
        self.held.insert(key);
    }

    pub fn release(&mut self, key: Key) {
        self.held.remove(&key);
    }

    /// Keys never seen count as released
    pub fn is_down(&self, key: Key) -> bool {
        self.held.contains(&key)
    }

    fn any_down(&self, keys: [Key; 2]) -> bool {
        keys.iter().any(|k| self.is_down(*k))
    }
}

/// Translate held keys into a direction with each axis in {-1, 0, 1}.
///
/// Screen coordinates: +x is right, +y is down. Opposing keys on one axis
/// resolve to the later direction (right/down), matching key-poll order.
pub fn compute_intent(keys: &KeyState) -> Vec2 {
    let mut intent = Vec2::ZERO;
    if keys.any_down([Key::ArrowLeft, Key::A]) {
        intent.x = -1.0;
    }
    if keys.any_down([Key::ArrowRight, Key::D]) {
        intent.x = 1.0;
    }
    if keys.any_down([Key::ArrowUp, Key::W]) {
        intent.y = -1.0;
    }
    if keys.any_down([Key::ArrowDown, Key::S]) {
        intent.y = 1.0;
    }
    intent
}
