//! Fixed timestep simulation tick
//!
//! Core game loop that advances the world one frame deterministically.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::coins::{prune_coins, spawn_coin};
use super::entity::CoinId;
use super::world::World;
use super::{camera, movement, pets};
use crate::input::{KeyState, compute_intent};

/// Input for a single tick (deterministic)
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Movement keys held this frame
    pub keys: KeyState,
    /// Pointer press this frame, in screen coordinates
    pub pointer: Option<Vec2>,
}

/// Something the render/audio side may want to react to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SimEvent {
    /// A click sent every pet after this coin
    TargetAssigned(CoinId),
    /// The timer produced a coin
    CoinSpawned(CoinId),
    /// A pet finished this coin off
    CoinConsumed(CoinId),
}

/// Advance the world by one fixed timestep.
///
/// Order: pointer targeting, player movement, camera, pets, coin timer,
/// cleanup. Coin spawning rides on the same tick so it never races the
/// pet update.
pub fn tick(world: &mut World, input: &TickInput, dt: f32) -> Vec<SimEvent> {
    let mut events = Vec::new();
    world.time_ticks += 1;

    if let Some(screen_pos) = input.pointer {
        if let Some(coin) = pets::pointer_down(world, screen_pos) {
            events.push(SimEvent::TargetAssigned(coin));
        }
    }

    let intent = compute_intent(&input.keys);
    let speed = world.tunables.player_speed;
    movement::resolve_player_move(world, intent, speed);

    let (screen, margin) = (world.tunables.screen_size, world.tunables.camera_margin);
    camera::update_camera(world, screen, margin);

    events.extend(
        pets::update_pets(world)
            .into_iter()
            .map(SimEvent::CoinConsumed),
    );

    world.spawn_timer += dt;
    let interval = world.tunables.coin_spawn_interval;
    while world.spawn_timer >= interval {
        world.spawn_timer -= interval;
        if let Some(coin) = spawn_coin(world) {
            events.push(SimEvent::CoinSpawned(coin));
        }
    }

    let pruned = prune_coins(world);
    if pruned > 0 {
        log::trace!("Pruned {} consumed coins", pruned);
    }

    events
}
