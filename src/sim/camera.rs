//! Camera follow
//!
//! The scroll offset is derived state: it only ever moves the minimum needed
//! to put the player's screen position back inside the dead zone.

use glam::Vec2;

use super::world::World;
use crate::geom::Rect;

/// The screen-space rect the player may roam without scrolling
pub fn dead_zone(screen_size: Vec2, margin: f32) -> Rect {
    Rect::from_pos_size(Vec2::ZERO, screen_size).inset(margin)
}

/// Minimal scroll correction that keeps `player_pos + scroll` inside `zone`
pub fn follow_scroll(scroll: Vec2, player_pos: Vec2, zone: &Rect) -> Vec2 {
    let screen = player_pos + scroll;
    let clamped = zone.clamp_point(screen);
    scroll + (clamped - screen)
}

/// Snap `world.camera_scroll` so the player sits inside the dead zone
pub fn update_camera(world: &mut World, screen_size: Vec2, margin: f32) {
    let zone = dead_zone(screen_size, margin);
    world.camera_scroll = follow_scroll(world.camera_scroll, world.player.bounds.position(), &zone);
}
