//! Pet Collector - simulation core
//!
//! Core modules:
//! - `geom`: Axis-aligned rectangles and vector helpers
//! - `input`: Key-state snapshot to movement intent
//! - `sim`: Deterministic simulation (movement, pets, coins, camera)
//! - `tuning`: Data-driven game balance
//!
//! Rendering, UI widgets and device polling live outside this crate; they read
//! the `World` and feed `TickInput` back in.

pub mod error;
pub mod geom;
pub mod input;
pub mod sim;
pub mod tuning;

pub use error::{ConfigError, StoreError};
pub use geom::Rect;
pub use input::{Key, KeyState, compute_intent};
pub use tuning::Tunables;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (one tick per 60 Hz frame)
    pub const SIM_DT: f32 = 1.0 / 60.0;

    /// Tile size; pets and coins are one tile, the player two
    pub const TILE_SIZE: f32 = 20.0;

    /// Player defaults
    pub const PLAYER_SPEED: f32 = 5.0;

    /// Pet defaults
    pub const PET_RUN_SPEED: f32 = 2.0;
    /// Coins eaten per tick while overlapping the target
    pub const PET_EAT_SPEED: u32 = 10;

    /// Coin economy defaults
    pub const COIN_SPAWN_INTERVAL: f32 = 5.0;
    pub const COIN_CAP: usize = 10;
    pub const COIN_VALUE_MIN: i64 = 10;
    pub const COIN_VALUE_MAX: i64 = 100;

    /// Egg store price
    pub const EGG_COST: u64 = 100;

    /// Screen and camera defaults
    pub const SCREEN_WIDTH: f32 = 640.0;
    pub const SCREEN_HEIGHT: f32 = 480.0;
    pub const CAMERA_MARGIN: f32 = 100.0;
}
