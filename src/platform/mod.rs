//! Platform abstraction layer
//!
//! The game core never talks to a window, keyboard or GPU directly. The host
//! supplies these collaborators:
//! - Input: per-key held / pressed-this-frame queries
//! - Time: seconds elapsed since the previous frame
//! - Drawing: clear, filled rectangles and circles, text

pub mod clock;
pub mod keyboard;

pub use clock::FixedStep;
pub use keyboard::KeyboardState;

use glam::Vec2;

/// Logical keys the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// Start a match / return to the menu (Enter)
    Confirm,
    /// Move paddle left (ArrowLeft)
    Left,
    /// Move paddle right (ArrowRight)
    Right,
    /// Switch target color (Space)
    CycleColor,
}

impl Key {
    /// Map a DOM `KeyboardEvent.key` value to a logical key
    pub fn from_dom_key(key: &str) -> Option<Self> {
        match key {
            "Enter" => Some(Key::Confirm),
            "ArrowLeft" | "a" | "A" => Some(Key::Left),
            "ArrowRight" | "d" | "D" => Some(Key::Right),
            " " | "Spacebar" => Some(Key::CycleColor),
            _ => None,
        }
    }
}

/// Keyboard query interface
pub trait InputSource {
    /// Key is currently held
    fn is_down(&self, key: Key) -> bool;
    /// Key went down during this frame
    fn is_pressed(&self, key: Key) -> bool;
}

/// Frame timing source
pub trait FrameClock {
    /// Seconds elapsed since the previous frame
    fn frame_time(&self) -> f32;
}

/// Opaque font handle handed out by a [`Canvas`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Font(pub u32);

/// Immediate-mode 2D drawing surface. Coordinates are pixels, origin top-left.
pub trait Canvas {
    /// Acquire the backend's built-in font
    fn default_font(&mut self) -> Font;
    fn clear_background(&mut self, color: [f32; 4]);
    /// Filled axis-aligned rectangle, `pos` is the top-left corner
    fn fill_rect(&mut self, pos: Vec2, size: Vec2, color: [f32; 4]);
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: [f32; 4]);
    /// Size in pixels `text` would occupy when drawn
    fn measure_text(&self, font: Font, text: &str, size: f32, spacing: f32) -> Vec2;
    fn draw_text(
        &mut self,
        font: Font,
        text: &str,
        pos: Vec2,
        size: f32,
        spacing: f32,
        color: [f32; 4],
    );
}
