//! Data-driven game balance
//!
//! Every constant the simulation reads comes from `Tunables`. Defaults match
//! the shipped level; a JSON document can override any subset of fields.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;
use crate::geom::Rect;
use crate::sim::entity::{PetKind, PetLevel};

/// A static egg placed in the level
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EggSpec {
    pub kind: PetKind,
    pub level: PetLevel,
    pub bounds: Rect,
}

/// Simulation tunables
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Tunables {
    /// RNG seed for coin values and positions
    pub seed: u64,
    /// Base tile size (pets and coins are one tile)
    pub tile_size: f32,

    // === World ===
    /// Outer bounds the player must stay inside
    pub edge: Rect,
    /// Obstacles the player cannot overlap
    pub walls: Vec<Rect>,

    // === Player ===
    pub player_start: Vec2,
    pub player_size: Vec2,
    /// Pixels per tick along each held axis
    pub player_speed: f32,

    // === Pets ===
    pub pet_run_speed: f32,
    pub pet_eat_speed: u32,
    /// Pets present at session start
    pub initial_pets: usize,
    /// Region the starting pets are scattered in
    pub pet_spawn_area: Rect,

    // === Coins ===
    /// Seconds between spawn attempts
    pub coin_spawn_interval: f32,
    /// Spawning stops once the coin list is longer than this
    pub coin_cap: usize,
    pub coin_value_min: i64,
    pub coin_value_max: i64,
    /// Region new coins are placed in
    pub coin_spawn_area: Rect,
    /// Coins seeded at session start
    pub initial_coins: usize,

    // === Egg store ===
    pub eggs: Vec<EggSpec>,
    pub egg_cost: u64,

    // === Camera ===
    pub screen_size: Vec2,
    /// Dead-zone inset from every screen edge
    pub camera_margin: f32,
}

impl Default for Tunables {
    fn default() -> Self {
        Self {
            seed: 0x5eed,
            tile_size: TILE_SIZE,

            edge: Rect::new(0.0, 0.0, 600.0, 400.0),
            walls: vec![
                Rect::new(-100.0, -50.0, 200.0, 100.0),
                Rect::new(200.0, 50.0, 50.0, 50.0),
                Rect::new(400.0, 240.0, 50.0, 50.0),
            ],

            player_start: Vec2::new(50.0, 100.0),
            player_size: Vec2::splat(TILE_SIZE * 2.0),
            player_speed: PLAYER_SPEED,

            pet_run_speed: PET_RUN_SPEED,
            pet_eat_speed: PET_EAT_SPEED,
            initial_pets: 1,
            pet_spawn_area: Rect::new(0.0, 0.0, 200.0, 200.0),

            coin_spawn_interval: COIN_SPAWN_INTERVAL,
            coin_cap: COIN_CAP,
            coin_value_min: COIN_VALUE_MIN,
            coin_value_max: COIN_VALUE_MAX,
            coin_spawn_area: Rect::new(0.0, 0.0, 400.0, 400.0),
            initial_coins: 5,

            eggs: vec![EggSpec {
                kind: PetKind::Cat,
                level: PetLevel::Normal,
                bounds: Rect::new(200.0, 200.0, 30.0, 30.0),
            }],
            egg_cost: EGG_COST,

            screen_size: Vec2::new(SCREEN_WIDTH, SCREEN_HEIGHT),
            camera_margin: CAMERA_MARGIN,
        }
    }
}

impl Tunables {
    /// Parse tunables from JSON; missing fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let tunables: Tunables = serde_json::from_str(json)?;
        tunables.validate()?;
        Ok(tunables)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// The player's bounds at session start
    pub fn player_bounds(&self) -> Rect {
        Rect::from_pos_size(self.player_start, self.player_size)
    }

    /// Screen rect in screen space (origin at top-left)
    pub fn screen_rect(&self) -> Rect {
        Rect::from_pos_size(Vec2::ZERO, self.screen_size)
    }

    /// Reject values that would break a simulation invariant
    pub fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |msg: String| -> Result<(), ConfigError> { Err(ConfigError::Invalid(msg)) };

        if self.tile_size <= 0.0 {
            return invalid(format!("tile_size must be positive, got {}", self.tile_size));
        }
        if self.player_size.x <= 0.0 || self.player_size.y <= 0.0 {
            return invalid(format!("player_size must be positive, got {}", self.player_size));
        }
        if self.player_speed <= 0.0 || self.pet_run_speed <= 0.0 {
            return invalid("player_speed and pet_run_speed must be positive".to_string());
        }
        if self.pet_eat_speed == 0 {
            return invalid("pet_eat_speed must be positive".to_string());
        }
        if self.coin_spawn_interval <= 0.0 {
            return invalid(format!(
                "coin_spawn_interval must be positive, got {}",
                self.coin_spawn_interval
            ));
        }
        if self.coin_value_min > self.coin_value_max {
            return invalid(format!(
                "coin value range is empty: {}..={}",
                self.coin_value_min, self.coin_value_max
            ));
        }
        if self.coin_value_min < 0 {
            return invalid(format!("coin_value_min must be >= 0, got {}", self.coin_value_min));
        }
        for (name, area) in [
            ("coin_spawn_area", &self.coin_spawn_area),
            ("pet_spawn_area", &self.pet_spawn_area),
        ] {
            if area.w < 0.0 || area.h < 0.0 {
                return invalid(format!("{name} has a negative size"));
            }
        }

        let player = self.player_bounds();
        if !self.edge.contains_rect(&player) {
            return invalid(format!("player start {:?} is outside the edge", player));
        }
        if let Some(wall) = self.walls.iter().find(|w| w.intersects(&player)) {
            return invalid(format!("player start overlaps wall {:?}", wall));
        }

        if self.camera_margin < 0.0 {
            return invalid(format!("camera_margin must be >= 0, got {}", self.camera_margin));
        }
        let dead_zone = self.screen_rect().inset(self.camera_margin);
        if dead_zone.w < 0.0 || dead_zone.h < 0.0 {
            return invalid(format!(
                "camera_margin {} leaves no dead zone on a {} screen",
                self.camera_margin, self.screen_size
            ));
        }

        Ok(())
    }
}
