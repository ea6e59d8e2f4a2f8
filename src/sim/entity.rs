//! Entities owned by the world
//!
//! Entities hold plain values. Cross-entity links (a pet's target) are ids
//! resolved against `World::coins`, never references.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::geom::Rect;

/// Stable pet identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PetId(pub u32);

/// Stable coin identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CoinId(pub u32);

/// What a pet is doing this tick (drives its sprite)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PetState {
    /// Overlapping the player, not moving
    #[default]
    Sitting,
    /// Walking toward the player or a coin
    Moving,
    /// Overlapping its target coin and draining it
    Eating,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PetKind {
    #[default]
    Cat,
    Dog,
}

/// Rarity tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PetLevel {
    #[default]
    Normal,
    Gold,
    Rainbow,
    Darkmatter,
}

/// The player character
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub bounds: Rect,
}

impl Player {
    pub fn new(bounds: Rect) -> Self {
        Self { bounds }
    }
}

/// An autonomous pet
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pet {
    pub id: PetId,
    pub name: String,
    pub kind: PetKind,
    pub level: PetLevel,
    pub bounds: Rect,
    /// Pixels per tick
    pub run_speed: f32,
    /// Coins moved from the target to the score per tick
    pub eat_speed: u32,
    pub state: PetState,
    /// Coin being pathed toward; `None` means follow the player
    pub target: Option<CoinId>,
}

impl Pet {
    /// A sitting pet with default speeds, one `tile` square
    pub fn new(id: PetId, position: Vec2, tile: f32) -> Self {
        Self {
            id,
            name: "bob".to_string(),
            kind: PetKind::default(),
            level: PetLevel::default(),
            bounds: Rect::from_pos_size(position, Vec2::splat(tile)),
            run_speed: PET_RUN_SPEED,
            eat_speed: PET_EAT_SPEED,
            state: PetState::Sitting,
            target: None,
        }
    }

    pub fn with_kind(mut self, kind: PetKind, level: PetLevel) -> Self {
        self.kind = kind;
        self.level = level;
        self
    }

    pub fn with_speeds(mut self, run_speed: f32, eat_speed: u32) -> Self {
        self.run_speed = run_speed;
        self.eat_speed = eat_speed;
        self
    }
}

/// A collectible coin pile
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Coin {
    pub id: CoinId,
    pub bounds: Rect,
    /// Remaining value; can dip below zero on the tick it is finished
    pub count: i64,
    /// False once consumed; dead coins are inert until pruned
    pub alive: bool,
}

impl Coin {
    pub fn new(id: CoinId, position: Vec2, tile: f32, count: i64) -> Self {
        Self {
            id,
            bounds: Rect::from_pos_size(position, Vec2::splat(tile)),
            count,
            alive: true,
        }
    }
}

/// A static spawn point sold in the egg store
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Egg {
    pub kind: PetKind,
    pub level: PetLevel,
    pub bounds: Rect,
}

impl Egg {
    pub fn new(kind: PetKind, level: PetLevel, bounds: Rect) -> Self {
        Self { kind, level, bounds }
    }
}
