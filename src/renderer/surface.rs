//! Drawing surface abstraction
//!
//! The render pass only talks to a [`Surface`]. Coordinates are canvas pixels
//! with y growing downward; transforms compose like a 2D canvas context.

use glam::Vec2;

use crate::sim::Rect;

/// Straight (non-premultiplied) RGBA in 0..1
pub type Color = [f32; 4];

/// Horizontal anchor of a text run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAlign {
    Left,
    #[default]
    Center,
    Right,
}

/// Vertical anchor of a text run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextBaseline {
    Top,
    #[default]
    Middle,
    Bottom,
}

/// How a text run is laid out
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    /// Font size in pixels
    pub size: f32,
    pub bold: bool,
    pub color: Color,
    pub align: TextAlign,
    pub baseline: TextBaseline,
}

/// Primitive drawing operations the render pass depends on
pub trait Surface {
    /// Erase everything and fill with `color`
    fn clear(&mut self, color: Color);
    fn fill_rect(&mut self, rect: Rect, color: Color);
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color);
    /// Draw a single line of text anchored at `pos`
    fn fill_text(&mut self, text: &str, pos: Vec2, style: &TextStyle);
    /// Push the current transform
    fn save(&mut self);
    /// Pop back to the last saved transform
    fn restore(&mut self);
    fn translate(&mut self, offset: Vec2);
    fn rotate(&mut self, radians: f32);
}
