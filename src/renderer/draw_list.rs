//! Recording canvas
//!
//! Shapes are tessellated into a vertex list for the GPU pipeline; text is
//! kept as runs for an overlay (DOM on the web, logs on the headless host).

use glam::Vec2;

use super::shapes;
use super::vertex::Vertex;
use crate::palette;
use crate::platform::{Canvas, Font};

/// Glyph advance as a fraction of the font size; matches the overlay's
/// Courier New, whose every glyph is 0.6em wide
const GLYPH_ADVANCE: f32 = 0.6;

/// A piece of text to draw on top of the shapes
#[derive(Debug, Clone, PartialEq)]
pub struct TextRun {
    pub text: String,
    /// Top-left corner
    pub pos: Vec2,
    pub size: f32,
    pub spacing: f32,
    pub color: [f32; 4],
}

/// One frame's worth of drawing commands
#[derive(Debug, Clone)]
pub struct DrawList {
    clear_color: [f32; 4],
    vertices: Vec<Vertex>,
    texts: Vec<TextRun>,
}

impl Default for DrawList {
    fn default() -> Self {
        Self::new()
    }
}

impl DrawList {
    pub fn new() -> Self {
        Self {
            clear_color: palette::BACKGROUND,
            vertices: Vec::with_capacity(4096),
            texts: Vec::new(),
        }
    }

    /// Drop last frame's commands
    pub fn begin_frame(&mut self) {
        self.clear_color = palette::BACKGROUND;
        self.vertices.clear();
        self.texts.clear();
    }

    #[inline]
    pub fn clear_color(&self) -> [f32; 4] {
        self.clear_color
    }

    #[inline]
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    #[inline]
    pub fn texts(&self) -> &[TextRun] {
        &self.texts
    }
}

impl Canvas for DrawList {
    fn default_font(&mut self) -> Font {
        Font::default()
    }

    /// Clearing wipes everything recorded so far this frame
    fn clear_background(&mut self, color: [f32; 4]) {
        self.clear_color = color;
        self.vertices.clear();
        self.texts.clear();
    }

    fn fill_rect(&mut self, pos: Vec2, size: Vec2, color: [f32; 4]) {
        self.vertices.extend_from_slice(&shapes::rect(pos, size, color));
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: [f32; 4]) {
        let segments = shapes::circle_segments(radius);
        self.vertices
            .extend(shapes::circle(center, radius, color, segments));
    }

    fn measure_text(&self, _font: Font, text: &str, size: f32, spacing: f32) -> Vec2 {
        let glyphs = text.chars().count();
        if glyphs == 0 {
            return Vec2::new(0.0, size);
        }
        let width = glyphs as f32 * size * GLYPH_ADVANCE + (glyphs - 1) as f32 * spacing;
        Vec2::new(width, size)
    }

    fn draw_text(
        &mut self,
        _font: Font,
        text: &str,
        pos: Vec2,
        size: f32,
        spacing: f32,
        color: [f32; 4],
    ) {
        self.texts.push(TextRun {
            text: text.to_string(),
            pos,
            size,
            spacing,
            color,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shapes_tessellate() {
        let mut list = DrawList::new();
        list.fill_rect(Vec2::ZERO, Vec2::new(10.0, 10.0), palette::WHITE);
        assert_eq!(list.vertices().len(), 6);
        list.fill_circle(Vec2::new(5.0, 5.0), 15.0, palette::RED);
        assert_eq!(list.vertices().len(), 6 + 3 * shapes::circle_segments(15.0) as usize);
    }

    #[test]
    fn test_clear_discards_earlier_commands() {
        let mut list = DrawList::new();
        list.fill_rect(Vec2::ZERO, Vec2::new(10.0, 10.0), palette::WHITE);
        list.draw_text(Font::default(), "hi", Vec2::ZERO, 20.0, 1.0, palette::WHITE);
        list.clear_background(palette::BLACK);
        assert!(list.vertices().is_empty());
        assert!(list.texts().is_empty());
        assert_eq!(list.clear_color(), palette::BLACK);

        list.begin_frame();
        assert_eq!(list.clear_color(), palette::BACKGROUND);
    }

    #[test]
    fn test_measure_text() {
        let list = DrawList::new();
        let font = Font::default();
        assert_eq!(list.measure_text(font, "", 20.0, 1.0), Vec2::new(0.0, 20.0));
        // 4 glyphs * 12px + 3 gaps * 2px
        assert_eq!(list.measure_text(font, "ABCD", 20.0, 2.0), Vec2::new(54.0, 20.0));
    }
}
