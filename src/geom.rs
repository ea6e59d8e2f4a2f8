//! Axis-aligned rectangle geometry
//!
//! A rectangle is its top-left corner plus a size, in world pixels:
//! - `contains` is inclusive of all four edges
//! - `intersects` needs real overlap; rects that only touch do not intersect

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned box
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Build from a top-left position and a size
    pub fn from_pos_size(pos: Vec2, size: Vec2) -> Self {
        Self::new(pos.x, pos.y, size.x, size.y)
    }

    /// Right edge (x + w)
    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    /// Bottom edge (y + h)
    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    /// Top-left corner
    #[inline]
    pub fn position(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.w / 2.0, self.y + self.h / 2.0)
    }

    /// Check if a point lies inside or on the edge
    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= self.x && p.x <= self.right() && p.y >= self.y && p.y <= self.bottom()
    }

    /// Check that all four corners of `other` lie inside this rect
    pub fn contains_rect(&self, other: &Rect) -> bool {
        self.contains(Vec2::new(other.x, other.y))
            && self.contains(Vec2::new(other.x, other.bottom()))
            && self.contains(Vec2::new(other.right(), other.y))
            && self.contains(Vec2::new(other.right(), other.bottom()))
    }

    /// Check for a non-empty overlap
    pub fn intersects(&self, other: &Rect) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }

    /// Same size, shifted by `offset`
    #[inline]
    pub fn translated(&self, offset: Vec2) -> Rect {
        Rect::new(self.x + offset.x, self.y + offset.y, self.w, self.h)
    }

    /// Move in place by `offset`
    #[inline]
    pub fn translate(&mut self, offset: Vec2) {
        self.x += offset.x;
        self.y += offset.y;
    }

    /// Shrink by `margin` on every side (may produce a negative size)
    pub fn inset(&self, margin: f32) -> Rect {
        Rect::new(
            self.x + margin,
            self.y + margin,
            self.w - margin * 2.0,
            self.h - margin * 2.0,
        )
    }

    /// Clamp a point into this rect
    pub fn clamp_point(&self, p: Vec2) -> Vec2 {
        Vec2::new(
            p.x.clamp(self.x, self.right().max(self.x)),
            p.y.clamp(self.y, self.bottom().max(self.y)),
        )
    }
}

/// Unit vector in the direction of `v`, or zero for a degenerate vector.
///
/// Zero-length and non-finite inputs map to `Vec2::ZERO` so a pet sitting
/// exactly on its goal never picks up a NaN position.
#[inline]
pub fn unit_or_zero(v: Vec2) -> Vec2 {
    v.normalize_or_zero()
}
