//! CPU-side surface that collects a frame for the GPU
//!
//! Filled shapes become colored triangles in canvas pixels. Text cannot go
//! through the triangle pipeline, so it is kept as [`TextRun`]s for the host
//! to lay out (the browser puts them in the DOM over the canvas).

use glam::{Affine2, Vec2};

use super::shapes;
use super::surface::{Color, Surface, TextStyle};
use super::vertex::{Vertex, colors};
use crate::sim::Rect;

/// Triangles per circle
const CIRCLE_SEGMENTS: u32 = 32;

/// A positioned line of text
#[derive(Debug, Clone, PartialEq)]
pub struct TextRun {
    pub text: String,
    /// Anchor point in canvas pixels, after transforms
    pub pos: Vec2,
    pub style: TextStyle,
}

/// One frame's worth of draw output
#[derive(Debug, Clone)]
pub struct ShapeBatch {
    pub clear_color: Color,
    pub vertices: Vec<Vertex>,
    pub text: Vec<TextRun>,
    transform: Affine2,
    stack: Vec<Affine2>,
}

impl Default for ShapeBatch {
    fn default() -> Self {
        Self {
            clear_color: colors::CLEAR,
            vertices: Vec::new(),
            text: Vec::new(),
            transform: Affine2::IDENTITY,
            stack: Vec::new(),
        }
    }
}

impl ShapeBatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current transform (identity outside any save/restore pair)
    pub fn transform(&self) -> Affine2 {
        self.transform
    }

    /// Saved transforms not yet restored
    pub fn depth(&self) -> usize {
        self.stack.len()
    }
}

impl Surface for ShapeBatch {
    fn clear(&mut self, color: Color) {
        self.clear_color = color;
        self.vertices.clear();
        self.text.clear();
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.vertices.extend(shapes::rect(&rect, color, &self.transform));
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        self.vertices.extend(shapes::circle(
            center,
            radius,
            color,
            CIRCLE_SEGMENTS,
            &self.transform,
        ));
    }

    fn fill_text(&mut self, text: &str, pos: Vec2, style: &TextStyle) {
        self.text.push(TextRun {
            text: text.to_owned(),
            pos: self.transform.transform_point2(pos),
            style: *style,
        });
    }

    fn save(&mut self) {
        self.stack.push(self.transform);
    }

    fn restore(&mut self) {
        match self.stack.pop() {
            Some(t) => self.transform = t,
            None => log::warn!("restore() without matching save()"),
        }
    }

    fn translate(&mut self, offset: Vec2) {
        self.transform = self.transform * Affine2::from_translation(offset);
    }

    fn rotate(&mut self, radians: f32) {
        self.transform = self.transform * Affine2::from_angle(radians);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::surface::{TextAlign, TextBaseline};

    fn style() -> TextStyle {
        TextStyle {
            size: 20.0,
            bold: false,
            color: [1.0; 4],
            align: TextAlign::Center,
            baseline: TextBaseline::Middle,
        }
    }

    #[test]
    fn test_clear_drops_previous_frame() {
        let mut batch = ShapeBatch::new();
        batch.fill_rect(Rect::new(0.0, 0.0, 1.0, 1.0), [1.0; 4]);
        batch.fill_text("hi", Vec2::ZERO, &style());
        batch.clear(colors::SKY);
        assert!(batch.vertices.is_empty());
        assert!(batch.text.is_empty());
        assert_eq!(batch.clear_color, colors::SKY);
    }

    #[test]
    fn test_translate_then_rotate_like_canvas() {
        let mut batch = ShapeBatch::new();
        batch.save();
        batch.translate(Vec2::new(100.0, 300.0));
        batch.rotate(std::f32::consts::FRAC_PI_2);
        batch.fill_text("x", Vec2::new(10.0, 0.0), &style());
        batch.restore();

        // (10, 0) rotated a quarter turn is (0, 10), then moved to the bird
        let p = batch.text[0].pos;
        assert!((p - Vec2::new(100.0, 310.0)).length() < 1e-4);
        assert_eq!(batch.transform(), Affine2::IDENTITY);
        assert_eq!(batch.depth(), 0);
    }

    #[test]
    fn test_unbalanced_restore_is_harmless() {
        let mut batch = ShapeBatch::new();
        batch.translate(Vec2::new(5.0, 5.0));
        batch.restore();
        assert_eq!(batch.transform(), Affine2::from_translation(Vec2::new(5.0, 5.0)));
    }
}
