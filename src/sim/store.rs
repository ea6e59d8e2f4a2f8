//! Egg store

use glam::Vec2;

use super::entity::{Pet, PetId, PetKind, PetLevel};
use super::world::World;
use crate::error::StoreError;

/// Buy a pet for `tunables.egg_cost` coins.
///
/// The new pet hatches sitting, with the kind and level of the egg the player
/// stands on (a default cat when none) at that egg's center, or beside the
/// player. Failure leaves the world untouched.
pub fn purchase_pet(world: &mut World) -> Result<&Pet, StoreError> {
    let cost = world.tunables.egg_cost;
    if world.coin_count < cost {
        return Err(StoreError::InsufficientFunds {
            have: world.coin_count,
            cost,
        });
    }

    let (kind, level, position) = match world.egg_prompt {
        Some(prompt) => {
            let egg = &world.eggs[prompt.egg];
            (egg.kind, egg.level, egg.bounds.center())
        }
        None => {
            let player = &world.player.bounds;
            (
                PetKind::default(),
                PetLevel::default(),
                Vec2::new(player.right(), player.y),
            )
        }
    };

    world.coin_count -= cost;
    let id = PetId(world.next_entity_id());
    let pet = Pet::new(id, position, world.tunables.tile_size)
        .with_speeds(world.tunables.pet_run_speed, world.tunables.pet_eat_speed)
        .with_kind(kind, level);
    let index = world.pets.len();
    world.pets.push(pet);

    log::debug!(
        "Hatched {:?} {:?} pet {:?} for {} coins, {} left",
        level,
        kind,
        id,
        cost,
        world.coin_count
    );
    Ok(&world.pets[index])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom::Rect;
    use crate::sim::entity::PetState;
    use crate::tuning::Tunables;

    fn world_with_coins(coins: u64) -> World {
        let mut world = World::new(Tunables {
            initial_coins: 0,
            ..Default::default()
        })
        .unwrap();
        world.coin_count = coins;
        world
    }

    #[test]
    fn test_insufficient_funds_changes_nothing() {
        let mut world = world_with_coins(50);
        let err = purchase_pet(&mut world).unwrap_err();
        assert_eq!(err, StoreError::InsufficientFunds { have: 50, cost: 100 });
        assert_eq!(world.pets.len(), 1);
        assert_eq!(world.coin_count, 50);
    }

    #[test]
    fn test_purchase_deducts_and_appends() {
        let mut world = world_with_coins(130);
        let pet = purchase_pet(&mut world).unwrap();
        assert_eq!(pet.state, PetState::Sitting);
        assert_eq!(pet.target, None);
        assert_eq!(world.coin_count, 30);
        assert_eq!(world.pets.len(), 2);
    }

    #[test]
    fn test_exact_funds_suffice() {
        let mut world = world_with_coins(100);
        assert!(purchase_pet(&mut world).is_ok());
        assert_eq!(world.coin_count, 0);
        assert!(purchase_pet(&mut world).is_err());
    }

    #[test]
    fn test_hatches_from_active_egg() {
        let mut world = World::new(Tunables {
            initial_coins: 0,
            eggs: vec![crate::tuning::EggSpec {
                kind: PetKind::Dog,
                level: PetLevel::Gold,
                bounds: Rect::new(200.0, 200.0, 30.0, 30.0),
            }],
            ..Default::default()
        })
        .unwrap();
        world.coin_count = 100;
        world.player.bounds = Rect::new(190.0, 190.0, 40.0, 40.0);
        world.refresh_egg_prompt();

        let pet = purchase_pet(&mut world).unwrap();
        assert_eq!(pet.kind, PetKind::Dog);
        assert_eq!(pet.level, PetLevel::Gold);
        assert_eq!(pet.bounds.position(), Vec2::new(215.0, 215.0));
    }

    #[test]
    fn test_hatched_pet_uses_tuned_tile_and_speeds() {
        let mut world = World::new(Tunables {
            initial_coins: 0,
            tile_size: 32.0,
            pet_run_speed: 3.0,
            pet_eat_speed: 7,
            ..Default::default()
        })
        .unwrap();
        world.coin_count = 100;

        let pet = purchase_pet(&mut world).unwrap();
        assert_eq!(pet.bounds.w, 32.0);
        assert_eq!(pet.bounds.h, 32.0);
        assert_eq!(pet.run_speed, 3.0);
        assert_eq!(pet.eat_speed, 7);
        let id = pet.id;
        assert_eq!(world.pets.last().map(|p| p.id), Some(id));
    }

    #[test]
    fn test_custom_cost() {
        let mut world = World::new(Tunables {
            initial_coins: 0,
            egg_cost: 25,
            ..Default::default()
        })
        .unwrap();
        world.coin_count = 30;
        assert!(purchase_pet(&mut world).is_ok());
        assert_eq!(world.coin_count, 5);
    }
}
