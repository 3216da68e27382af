//! Axis-aligned rectangle geometry for the avatar and obstacles
//!
//! Screen convention: x grows right, y grows down. A rectangle is stored
//! as its top-left corner plus size.

use glam::Vec2;

use crate::consts::{FLOOR_Y, GAP_REFERENCE_FLOOR, WORLD_HEIGHT, WORLD_WIDTH};

/// An axis-aligned box in world space
#[derive(Debug, Clone, Copy, PartialEq)]
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

    /// Build a rect of the given size centered on a point
    pub fn from_center(center: Vec2, w: f32, h: f32) -> Self {
        Self::new(center.x - w / 2.0, center.y - h / 2.0, w, h)
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    #[inline]
    pub fn center_x(&self) -> f32 {
        self.x + self.w / 2.0
    }

    #[inline]
    pub fn center_y(&self) -> f32 {
        self.y + self.h / 2.0
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.center_x(), self.center_y())
    }

    /// Move the rect so its center sits on `center`, keeping the size
    pub fn set_center(&mut self, center: Vec2) {
        self.x = center.x - self.w / 2.0;
        self.y = center.y - self.h / 2.0;
    }

    pub fn translate_x(&mut self, dx: f32) {
        self.x += dx;
    }

    /// Strict overlap test: rects that only share an edge do not intersect
    pub fn intersects(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }
}

/// Playfield dimensions
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct World {
    pub width: f32,
    pub height: f32,
    /// Top of the ground strip; everything above is open sky
    pub floor_y: f32,
}

impl Default for World {
    fn default() -> Self {
        Self {
            width: WORLD_WIDTH,
            height: WORLD_HEIGHT,
            floor_y: FLOOR_Y,
        }
    }
}

impl World {
    /// Factor applied to the authored gap offsets
    pub fn gap_scale(&self) -> f32 {
        self.floor_y / GAP_REFERENCE_FLOOR
    }

    /// X coordinate where new obstacle pairs appear
    pub fn spawn_x(&self) -> f32 {
        self.width + crate::consts::PIPE_SPAWN_MARGIN
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edges_and_center() {
        let r = Rect::new(10.0, 20.0, 30.0, 40.0);
        assert_eq!(r.right(), 40.0);
        assert_eq!(r.bottom(), 60.0);
        assert_eq!(r.center(), Vec2::new(25.0, 40.0));

        let c = Rect::from_center(Vec2::new(50.0, 300.0), 34.0, 24.0);
        assert_eq!(c.left(), 33.0);
        assert_eq!(c.top(), 288.0);
    }

    #[test]
    fn test_touching_edges_do_not_intersect() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(10.0, 0.0, 10.0, 10.0);
        assert!(!a.intersects(&b));

        let c = Rect::new(9.5, 9.5, 10.0, 10.0);
        assert!(a.intersects(&c));
        assert!(c.intersects(&a));
    }

    #[test]
    fn test_default_world_matches_reference_window() {
        let world = World::default();
        assert_eq!(world.gap_scale(), 1.0);
        assert_eq!(world.spawn_x(), 420.0);
    }
}
