//! Pet behavior
//!
//! Each tick a pet either follows the player or walks to its target coin and
//! eats it. Pets ignore walls and the world edge.

use glam::Vec2;

use super::entity::{CoinId, PetState};
use super::world::World;
use crate::geom::unit_or_zero;

/// One step of length `speed` from `from` toward `to`; zero when they coincide
#[inline]
fn step_toward(from: Vec2, to: Vec2, speed: f32) -> Vec2 {
    unit_or_zero(to - from) * speed
}

/// Run every pet's state machine once, in list order.
///
/// Must run after the player has moved so pets react to the new position.
/// Returns the coins finished off this tick.
pub fn update_pets(world: &mut World) -> Vec<CoinId> {
    let mut consumed = Vec::new();
    for i in 0..world.pets.len() {
        if let Some(coin) = update_pet(world, i) {
            consumed.push(coin);
        }
    }
    consumed
}

fn update_pet(world: &mut World, index: usize) -> Option<CoinId> {
    // A target that is gone or dead reverts the pet to following the player
    let target = world.pets[index]
        .target
        .and_then(|id| world.coins.iter().position(|c| c.id == id && c.alive));
    if target.is_none() {
        world.pets[index].target = None;
    }

    let player = world.player.bounds;
    let pet = &mut world.pets[index];

    let Some(coin_index) = target else {
        if pet.bounds.intersects(&player) {
            pet.state = PetState::Sitting;
        } else {
            pet.state = PetState::Moving;
            let step = step_toward(pet.bounds.center(), player.center(), pet.run_speed);
            pet.bounds.translate(step);
        }
        return None;
    };

    let coin = &mut world.coins[coin_index];
    if !pet.bounds.intersects(&coin.bounds) {
        pet.state = PetState::Moving;
        let step = step_toward(pet.bounds.center(), coin.bounds.center(), pet.run_speed);
        pet.bounds.translate(step);
        return None;
    }

    pet.state = PetState::Eating;
    coin.count -= i64::from(pet.eat_speed);
    // Score takes the full bite even when it overshoots the pile
    world.coin_count += u64::from(pet.eat_speed);

    if coin.count >= 0 {
        return None;
    }

    coin.alive = false;
    let id = coin.id;
    release_target(world, id);
    log::debug!(
        "Coin {:?} eaten by pet {:?}, score {}",
        id,
        world.pets[index].id,
        world.coin_count
    );
    Some(id)
}

/// Clear `coin` from every pet targeting it
pub fn release_target(world: &mut World, coin: CoinId) {
    for pet in world.pets.iter_mut().filter(|p| p.target == Some(coin)) {
        pet.target = None;
    }
}

/// Send every pet after `coin`. A dead or unknown coin is ignored.
pub fn assign_target(world: &mut World, coin: CoinId) -> bool {
    if world.live_coin(coin).is_none() {
        return false;
    }
    for pet in &mut world.pets {
        pet.target = Some(coin);
    }
    log::debug!("All {} pets now targeting coin {:?}", world.pets.len(), coin);
    true
}

/// Handle a pointer press at a screen position: the first live coin under
/// it becomes every pet's target
pub fn pointer_down(world: &mut World, screen_pos: Vec2) -> Option<CoinId> {
    let pos = world.screen_to_world(screen_pos);
    let coin = world
        .coins
        .iter()
        .find(|c| c.alive && c.bounds.contains(pos))
        .map(|c| c.id)?;
    assign_target(world, coin);
    Some(coin)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tuning::Tunables;

    fn empty_world() -> World {
        World::new(Tunables {
            initial_pets: 0,
            initial_coins: 0,
            ..Default::default()
        })
        .unwrap()
    }

    #[test]
    fn test_pet_follows_player_then_sits() {
        let mut world = empty_world();
        // Player at (50,100,40,40) centered on (70,120)
        world.add_pet(Vec2::new(300.0, 120.0));
        let speed = world.pets[0].run_speed;

        let before = world.pets[0].bounds.center();
        update_pets(&mut world);
        let after = world.pets[0].bounds.center();
        assert_eq!(world.pets[0].state, PetState::Moving);
        assert!(((after - before).length() - speed).abs() < 1e-4);
        assert!(after.x < before.x);

        let mut ticks = 0;
        while world.pets[0].state != PetState::Sitting {
            update_pets(&mut world);
            ticks += 1;
            assert!(ticks < 1000, "pet never reached the player");
        }
        assert!(world.pets[0].bounds.intersects(&world.player.bounds));

        let settled = world.pets[0].bounds;
        update_pets(&mut world);
        assert_eq!(world.pets[0].bounds, settled);
        assert_eq!(world.pets[0].state, PetState::Sitting);
    }

    #[test]
    fn test_pet_walks_to_target() {
        let mut world = empty_world();
        world.add_pet(Vec2::new(300.0, 300.0));
        let coin = world.add_coin(Vec2::new(300.0, 200.0), 50);
        assert!(assign_target(&mut world, coin));

        let before = world.pets[0].bounds.position();
        update_pets(&mut world);
        assert_eq!(world.pets[0].state, PetState::Moving);
        assert_eq!(world.pets[0].bounds.position(), before + Vec2::new(0.0, -2.0));
        assert_eq!(world.coin_count, 0);
    }

    #[test]
    fn test_eating_drains_coin_then_releases() {
        let mut world = empty_world();
        world.add_pet(Vec2::new(300.0, 300.0));
        let coin = world.add_coin(Vec2::new(305.0, 305.0), 15);
        assign_target(&mut world, coin);

        assert!(update_pets(&mut world).is_empty());
        assert_eq!(world.pets[0].state, PetState::Eating);
        assert_eq!(world.coins[0].count, 5);
        assert_eq!(world.coin_count, 10);
        assert!(world.coins[0].alive);
        assert_eq!(world.pets[0].target, Some(coin));

        assert_eq!(update_pets(&mut world), vec![coin]);
        assert_eq!(world.coins[0].count, -5);
        assert_eq!(world.coin_count, 20);
        assert!(!world.coins[0].alive);
        assert_eq!(world.pets[0].target, None);
    }

    #[test]
    fn test_exact_zero_keeps_coin_alive() {
        let mut world = empty_world();
        world.add_pet(Vec2::new(300.0, 300.0));
        let coin = world.add_coin(Vec2::new(300.0, 300.0), 10);
        assign_target(&mut world, coin);

        update_pets(&mut world);
        assert_eq!(world.coins[0].count, 0);
        assert!(world.coins[0].alive);
    }

    #[test]
    fn test_consumed_coin_released_from_all_pets() {
        let mut world = empty_world();
        // First pet is on the coin, second is far away
        world.add_pet(Vec2::new(300.0, 300.0));
        world.add_pet(Vec2::new(500.0, 50.0));
        let coin = world.add_coin(Vec2::new(300.0, 300.0), 5);
        assign_target(&mut world, coin);

        update_pets(&mut world);
        assert!(!world.coins[0].alive);
        for pet in &world.pets {
            assert_eq!(pet.target, None);
        }
        // The far pet followed the player this tick instead of the dead coin
        assert_eq!(world.pets[1].state, PetState::Moving);
    }

    #[test]
    fn test_dead_target_reverts_to_player() {
        let mut world = empty_world();
        world.add_pet(Vec2::new(300.0, 300.0));
        let coin = world.add_coin(Vec2::new(300.0, 250.0), 5);
        world.pets[0].target = Some(coin);
        world.coins[0].alive = false;

        update_pets(&mut world);
        assert_eq!(world.pets[0].target, None);
        assert_eq!(world.coin_count, 0);
    }

    #[test]
    fn test_coincident_centers_step_is_zero() {
        let p = Vec2::new(10.0, 10.0);
        let step = step_toward(p, p, 2.0);
        assert_eq!(step, Vec2::ZERO);
        assert!(step.x.is_finite() && step.y.is_finite());

        let step = step_toward(Vec2::ZERO, Vec2::new(0.0, -50.0), 2.0);
        assert_eq!(step, Vec2::new(0.0, -2.0));
    }

    #[test]
    fn test_assign_target_broadcasts() {
        let mut world = empty_world();
        world.add_pet(Vec2::new(0.0, 0.0));
        world.add_pet(Vec2::new(100.0, 0.0));
        world.add_pet(Vec2::new(0.0, 100.0));
        let coin = world.add_coin(Vec2::new(300.0, 300.0), 50);

        assert!(assign_target(&mut world, coin));
        assert!(world.pets.iter().all(|p| p.target == Some(coin)));
    }

    #[test]
    fn test_assign_dead_coin_ignored() {
        let mut world = empty_world();
        world.add_pet(Vec2::ZERO);
        let coin = world.add_coin(Vec2::new(300.0, 300.0), 50);
        world.coins[0].alive = false;

        assert!(!assign_target(&mut world, coin));
        assert_eq!(world.pets[0].target, None);
    }

    #[test]
    fn test_pointer_down_uses_camera_scroll() {
        let mut world = empty_world();
        world.add_pet(Vec2::ZERO);
        let coin = world.add_coin(Vec2::new(300.0, 300.0), 50);
        world.camera_scroll = Vec2::new(-100.0, -50.0);

        // World (310,310) shows at screen (210,260)
        assert_eq!(pointer_down(&mut world, Vec2::new(210.0, 260.0)), Some(coin));
        assert_eq!(world.pets[0].target, Some(coin));

        // Missing the coin leaves targets alone
        world.pets[0].target = None;
        assert_eq!(pointer_down(&mut world, Vec2::new(5.0, 5.0)), None);
        assert_eq!(world.pets[0].target, None);
    }

    #[test]
    fn test_pointer_down_skips_dead_coins() {
        let mut world = empty_world();
        world.add_pet(Vec2::ZERO);
        world.add_coin(Vec2::new(300.0, 300.0), 50);
        let live = world.add_coin(Vec2::new(305.0, 305.0), 50);
        world.coins[0].alive = false;
        world.camera_scroll = Vec2::ZERO;

        assert_eq!(pointer_down(&mut world, Vec2::new(310.0, 310.0)), Some(live));
    }
}
