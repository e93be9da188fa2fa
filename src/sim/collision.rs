//! Collision detection between round orbs and the rectangular paddle

use glam::Vec2;

/// Axis-aligned rectangle, `pos` is the top-left corner (screen space, Y down)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub const fn new(pos: Vec2, size: Vec2) -> Self {
        Self { pos, size }
    }

    #[inline]
    pub fn min(&self) -> Vec2 {
        self.pos
    }

    #[inline]
    pub fn max(&self) -> Vec2 {
        self.pos + self.size
    }

    /// Point of the rectangle nearest to `p`
    #[inline]
    pub fn closest_point(&self, p: Vec2) -> Vec2 {
        p.clamp(self.min(), self.max())
    }
}

/// Check whether a circle overlaps a rectangle (touching counts)
///
/// Works for centers inside the rectangle too: the closest point is then the
/// center itself and the distance is zero.
pub fn circle_rect_overlap(center: Vec2, radius: f32, rect: &Rect) -> bool {
    let closest = rect.closest_point(center);
    center.distance_squared(closest) <= radius * radius
}
