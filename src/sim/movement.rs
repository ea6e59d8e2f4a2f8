//! Player movement and collision
//!
//! A move is all-or-nothing: the translated bounds are checked against the
//! walls and the outer edge before anything is written back.

use glam::Vec2;

use super::world::World;
use crate::geom::Rect;

/// Why a candidate position was refused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveBlock {
    /// Candidate overlaps the wall at this index
    Wall(usize),
    /// Candidate pokes outside the world edge
    Edge,
}

/// Check a candidate player rect against the walls and the edge
pub fn check_player_bounds(world: &World, candidate: &Rect) -> Result<(), MoveBlock> {
    if let Some(i) = world.walls.iter().position(|w| w.intersects(candidate)) {
        return Err(MoveBlock::Wall(i));
    }
    if !world.edge.contains_rect(candidate) {
        return Err(MoveBlock::Edge);
    }
    Ok(())
}

/// Move the player by `intent * speed` if the destination is clear.
///
/// Diagonal intent is not normalized, so a diagonal step covers
/// `speed * sqrt(2)`. Returns whether the move was committed. The egg prompt
/// is refreshed either way.
pub fn resolve_player_move(world: &mut World, intent: Vec2, speed: f32) -> bool {
    let candidate = world.player.bounds.translated(intent * speed);

    let moved = match check_player_bounds(world, &candidate) {
        Ok(()) => {
            world.player.bounds = candidate;
            true
        }
        Err(block) => {
            log::trace!("Player move {:?} blocked: {:?}", intent, block);
            false
        }
    };

    world.refresh_egg_prompt();
    moved
}
