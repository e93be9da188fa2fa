//! The player's paddle

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::Rect;
use super::orb::OrbColor;
use super::tick::FrameInput;
use crate::consts::*;

/// Horizontally moving paddle with a selected target color
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
    /// Horizontal speed (pixels/s)
    pub speed: f32,
    /// Color that scores when caught
    pub target: OrbColor,
}

impl Default for Player {
    fn default() -> Self {
        Self::new(Vec2::ZERO, Vec2::new(PLAYER_WIDTH, PLAYER_HEIGHT), PLAYER_SPEED)
    }
}

impl Player {
    pub fn new(pos: Vec2, size: Vec2, speed: f32) -> Self {
        Self {
            pos,
            size,
            speed,
            target: OrbColor::Red,
        }
    }

    /// Apply one frame of input: move within `[0, screen_width - width]` and
    /// cycle the target color
    pub fn handle_input(&mut self, input: &FrameInput, screen_width: f32, dt: f32) {
        let mut dir = 0.0;
        if input.left {
            dir -= 1.0;
        }
        if input.right {
            dir += 1.0;
        }
        if dir != 0.0 {
            self.pos.x += dir * self.speed * dt;
        }
        let max_x = (screen_width - self.size.x).max(0.0);
        self.pos.x = self.pos.x.clamp(0.0, max_x);

        if input.cycle_color {
            self.target = self.target.next();
        }
    }

    /// Move to `pos` (used on match reset); the target color is kept
    pub fn reset(&mut self, pos: Vec2) {
        self.pos = pos;
    }

    /// Bounding rectangle for collision
    #[inline]
    pub fn rect(&self) -> Rect {
        Rect::new(self.pos, self.size)
    }

    #[inline]
    pub fn center_x(&self) -> f32 {
        self.pos.x + self.size.x * 0.5
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DT: f32 = 1.0 / 60.0;

    #[test]
    fn test_moves_at_speed() {
        let mut player = Player::new(Vec2::new(300.0, 550.0), Vec2::new(100.0, 30.0), 400.0);
        let input = FrameInput {
            right: true,
            ..Default::default()
        };
        player.handle_input(&input, 800.0, 0.5);
        assert!((player.pos.x - 500.0).abs() < 1e-3);

        let input = FrameInput {
            left: true,
            ..Default::default()
        };
        player.handle_input(&input, 800.0, 0.25);
        assert!((player.pos.x - 400.0).abs() < 1e-3);
    }

    #[test]
    fn test_both_directions_cancel() {
        let mut player = Player::new(Vec2::new(300.0, 550.0), Vec2::new(100.0, 30.0), 400.0);
        let input = FrameInput {
            left: true,
            right: true,
            ..Default::default()
        };
        player.handle_input(&input, 800.0, DT);
        assert_eq!(player.pos.x, 300.0);
    }

    #[test]
    fn test_clamped_to_screen() {
        let mut player = Player::new(Vec2::new(10.0, 550.0), Vec2::new(100.0, 30.0), 400.0);
        let left = FrameInput {
            left: true,
            ..Default::default()
        };
        player.handle_input(&left, 800.0, 1.0);
        assert_eq!(player.pos.x, 0.0);

        let right = FrameInput {
            right: true,
            ..Default::default()
        };
        for _ in 0..10 {
            player.handle_input(&right, 800.0, 1.0);
        }
        assert_eq!(player.pos.x, 700.0);
    }

    #[test]
    fn test_cycle_color() {
        let mut player = Player::default();
        assert_eq!(player.target, OrbColor::Red);
        let input = FrameInput {
            cycle_color: true,
            ..Default::default()
        };
        player.handle_input(&input, 800.0, DT);
        assert_eq!(player.target, OrbColor::Green);
        player.handle_input(&input, 800.0, DT);
        assert_eq!(player.target, OrbColor::Blue);
        player.handle_input(&input, 800.0, DT);
        assert_eq!(player.target, OrbColor::Red);
    }

    #[test]
    fn test_reset_keeps_target() {
        let mut player = Player::default();
        player.target = OrbColor::Blue;
        player.reset(Vec2::new(350.0, 550.0));
        assert_eq!(player.pos, Vec2::new(350.0, 550.0));
        assert_eq!(player.target, OrbColor::Blue);
    }
}
