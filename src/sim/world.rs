//! World state and core simulation types
//!
//! `World` owns every entity. Update functions take it by `&mut` and mutate
//! in place; nothing outside the tick holds a reference into it.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::entity::{Coin, CoinId, Egg, Pet, PetId, Player};
use crate::error::ConfigError;
use crate::geom::Rect;
use crate::tuning::Tunables;

/// The egg the player is standing on, for the "buy egg" button
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EggPrompt {
    /// Index into `World::eggs`
    pub egg: usize,
    /// Where the UI should anchor the button (egg center)
    pub position: Vec2,
}

/// Score overlay data
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hud {
    pub coins: u64,
    pub pets: usize,
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct World {
    /// Outer bounds
    pub edge: Rect,
    /// Player obstacles
    pub walls: Vec<Rect>,
    pub player: Player,
    /// Pets in creation order
    pub pets: Vec<Pet>,
    /// Coins in creation order (dead ones linger until pruned)
    pub coins: Vec<Coin>,
    pub eggs: Vec<Egg>,
    /// Score / spendable coins
    pub coin_count: u64,
    /// World-to-screen offset
    pub camera_scroll: Vec2,
    /// Set while the player overlaps an egg
    pub egg_prompt: Option<EggPrompt>,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Seconds accumulated toward the next coin spawn
    pub spawn_timer: f32,
    /// Balance constants this session runs with
    pub tunables: Tunables,
    pub(crate) rng: Pcg32,
    next_id: u32,
}

impl World {
    /// Build a fresh session: player at its start, starting pets and coins
    /// scattered with the seeded RNG, eggs placed, camera settled.
    ///
    /// Tunables are validated first; the RNG draws below need a non-empty
    /// value range and non-negative spawn areas.
    pub fn new(tunables: Tunables) -> Result<Self, ConfigError> {
        tunables.validate()?;

        let mut world = Self {
            edge: tunables.edge,
            walls: tunables.walls.clone(),
            player: Player::new(tunables.player_bounds()),
            pets: Vec::new(),
            coins: Vec::new(),
            eggs: tunables
                .eggs
                .iter()
                .map(|e| Egg::new(e.kind, e.level, e.bounds))
                .collect(),
            coin_count: 0,
            camera_scroll: Vec2::ZERO,
            egg_prompt: None,
            time_ticks: 0,
            spawn_timer: 0.0,
            rng: Pcg32::seed_from_u64(tunables.seed),
            next_id: 1,
            tunables,
        };

        for _ in 0..world.tunables.initial_pets {
            let area = world.tunables.pet_spawn_area;
            let pos = world.random_point_in(&area);
            world.add_pet(pos);
        }

        for _ in 0..world.tunables.initial_coins {
            super::coins::spawn_coin(&mut world);
        }

        world.refresh_egg_prompt();
        let (screen, margin) = (world.tunables.screen_size, world.tunables.camera_margin);
        super::camera::update_camera(&mut world, screen, margin);

        log::debug!(
            "World ready: {} pets, {} coins, {} eggs, seed {:#x}",
            world.pets.len(),
            world.coins.len(),
            world.eggs.len(),
            world.tunables.seed
        );
        Ok(world)
    }

    /// Allocate a new entity ID (shared by pets and coins)
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Append a default pet at `position` using the tuned size and speeds
    pub fn add_pet(&mut self, position: Vec2) -> PetId {
        let id = PetId(self.next_entity_id());
        let pet = Pet::new(id, position, self.tunables.tile_size)
            .with_speeds(self.tunables.pet_run_speed, self.tunables.pet_eat_speed);
        self.pets.push(pet);
        id
    }

    /// Append a live coin of the given value
    pub fn add_coin(&mut self, position: Vec2, count: i64) -> CoinId {
        let id = CoinId(self.next_entity_id());
        self.coins
            .push(Coin::new(id, position, self.tunables.tile_size, count));
        id
    }

    pub fn pet(&self, id: PetId) -> Option<&Pet> {
        self.pets.iter().find(|p| p.id == id)
    }

    pub fn coin(&self, id: CoinId) -> Option<&Coin> {
        self.coins.iter().find(|c| c.id == id)
    }

    /// A coin that may still be targeted
    pub fn live_coin(&self, id: CoinId) -> Option<&Coin> {
        self.coin(id).filter(|c| c.alive)
    }

    /// Uniform point inside `area`, edges included
    pub(crate) fn random_point_in(&mut self, area: &Rect) -> Vec2 {
        let x = self.rng.random_range(area.x..=area.right());
        let y = self.rng.random_range(area.y..=area.bottom());
        Vec2::new(x, y)
    }

    /// Recompute which egg (if any) the player is standing on
    pub fn refresh_egg_prompt(&mut self) {
        let player = &self.player.bounds;
        self.egg_prompt = self
            .eggs
            .iter()
            .position(|egg| egg.bounds.intersects(player))
            .map(|i| EggPrompt {
                egg: i,
                position: self.eggs[i].bounds.center(),
            });
    }

    /// Screen point to world point
    #[inline]
    pub fn screen_to_world(&self, screen: Vec2) -> Vec2 {
        screen - self.camera_scroll
    }

    #[inline]
    pub fn world_to_screen(&self, world: Vec2) -> Vec2 {
        world + self.camera_scroll
    }

    pub fn hud(&self) -> Hud {
        Hud {
            coins: self.coin_count,
            pets: self.pets.len(),
        }
    }

    /// Number of coins still on the board
    pub fn live_coin_count(&self) -> usize {
        self.coins.iter().filter(|c| c.alive).count()
    }
}
