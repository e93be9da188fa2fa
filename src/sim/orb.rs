//! Falling orbs and their logical colors

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::palette;

/// Logical orb / target color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum OrbColor {
    #[default]
    Red,
    Green,
    Blue,
}

impl OrbColor {
    pub const ALL: [OrbColor; 3] = [OrbColor::Red, OrbColor::Green, OrbColor::Blue];

    /// Next color in the RED -> GREEN -> BLUE -> RED cycle
    pub fn next(self) -> Self {
        match self {
            OrbColor::Red => OrbColor::Green,
            OrbColor::Green => OrbColor::Blue,
            OrbColor::Blue => OrbColor::Red,
        }
    }

    /// Color for a random roll in `0..=2`; out-of-range values map to blue
    pub fn from_index(index: u32) -> Self {
        match index {
            0 => OrbColor::Red,
            1 => OrbColor::Green,
            _ => OrbColor::Blue,
        }
    }

    /// RGBA used to draw this color
    pub fn visual(self) -> [f32; 4] {
        match self {
            OrbColor::Red => palette::RED,
            OrbColor::Green => palette::GREEN,
            OrbColor::Blue => palette::BLUE,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            OrbColor::Red => "RED",
            OrbColor::Green => "GREEN",
            OrbColor::Blue => "BLUE",
        }
    }
}

/// A falling orb
///
/// Radius, color and fall speed are fixed at spawn; only the position and
/// the active flag change afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Orb {
    pub pos: Vec2,
    radius: f32,
    color: OrbColor,
    visual: [f32; 4],
    fall_speed: f32,
    /// Cleared on the first paddle contact; inactive orbs are pruned
    pub active: bool,
}

impl Orb {
    pub fn new(pos: Vec2, radius: f32, color: OrbColor, fall_speed: f32) -> Self {
        Self {
            pos,
            radius,
            color,
            visual: color.visual(),
            fall_speed,
            active: true,
        }
    }

    #[inline]
    pub fn radius(&self) -> f32 {
        self.radius
    }

    #[inline]
    pub fn color(&self) -> OrbColor {
        self.color
    }

    #[inline]
    pub fn visual(&self) -> [f32; 4] {
        self.visual
    }

    /// Fall for `dt` seconds
    pub fn update(&mut self, dt: f32) {
        self.pos.y += self.fall_speed * dt;
    }

    /// Whole orb is past the bottom edge
    #[inline]
    pub fn is_below(&self, screen_height: f32) -> bool {
        self.pos.y - self.radius > screen_height
    }

    /// Should be removed from play
    #[inline]
    pub fn is_spent(&self, screen_height: f32) -> bool {
        !self.active || self.is_below(screen_height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_cycle_visits_all() {
        let mut c = OrbColor::Red;
        let mut seen = Vec::new();
        for _ in 0..3 {
            seen.push(c);
            c = c.next();
        }
        assert_eq!(c, OrbColor::Red);
        assert_eq!(seen, OrbColor::ALL.to_vec());
    }

    #[test]
    fn test_orb_falls() {
        let mut orb = Orb::new(Vec2::new(50.0, -20.0), 15.0, OrbColor::Green, 150.0);
        orb.update(0.5);
        assert!((orb.pos.y - 55.0).abs() < 1e-4);
        assert_eq!(orb.pos.x, 50.0);
        assert_eq!(orb.visual(), OrbColor::Green.visual());
    }

    #[test]
    fn test_is_below_uses_top_edge() {
        let mut orb = Orb::new(Vec2::new(50.0, 610.0), 15.0, OrbColor::Red, 150.0);
        // Top edge at 595, still visible on a 600px screen
        assert!(!orb.is_below(600.0));
        orb.pos.y = 615.0;
        assert!(!orb.is_below(600.0));
        orb.pos.y = 615.5;
        assert!(orb.is_below(600.0));
    }

    #[test]
    fn test_spent() {
        let mut orb = Orb::new(Vec2::new(50.0, 100.0), 15.0, OrbColor::Blue, 150.0);
        assert!(!orb.is_spent(600.0));
        orb.active = false;
        assert!(orb.is_spent(600.0));
    }
}
