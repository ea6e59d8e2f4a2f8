//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (creation order for pets and coins)
//! - No rendering or platform dependencies

pub mod camera;
pub mod coins;
pub mod entity;
pub mod movement;
pub mod pets;
pub mod store;
pub mod tick;
pub mod world;

pub use camera::{dead_zone, update_camera};
pub use coins::{prune_coins, spawn_coin};
pub use entity::{Coin, CoinId, Egg, Pet, PetId, PetKind, PetLevel, PetState, Player};
pub use movement::{MoveBlock, check_player_bounds, resolve_player_move};
pub use pets::{assign_target, pointer_down, update_pets};
pub use store::purchase_pet;
pub use tick::{SimEvent, TickInput, tick};
pub use world::{EggPrompt, Hud, World};
