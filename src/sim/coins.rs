//! Coin economy: spawning and cleanup

use rand::Rng;

use super::entity::CoinId;
use super::world::World;

/// Spawn one coin with a random value at a random spot in the spawn area.
///
/// No-op while the coin list is longer than the cap, so the list can reach
/// `cap + 1` before spawning stops. Dead coins awaiting pruning count too.
pub fn spawn_coin(world: &mut World) -> Option<CoinId> {
    if world.coins.len() > world.tunables.coin_cap {
        return None;
    }

    let (min, max) = (world.tunables.coin_value_min, world.tunables.coin_value_max);
    let count = world.rng.random_range(min..=max);
    let area = world.tunables.coin_spawn_area;
    let pos = world.random_point_in(&area);

    let id = world.add_coin(pos, count);
    log::debug!(
        "Spawned coin {:?} worth {} at ({:.0}, {:.0}), {} on board",
        id,
        count,
        pos.x,
        pos.y,
        world.coins.len()
    );
    Some(id)
}

/// Drop dead coins no pet still points at. Returns how many were removed.
pub fn prune_coins(world: &mut World) -> usize {
    let before = world.coins.len();
    let pets = &world.pets;
    world
        .coins
        .retain(|c| c.alive || pets.iter().any(|p| p.target == Some(c.id)));
    before - world.coins.len()
}
