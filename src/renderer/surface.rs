//! Drawing surface abstraction
//!
//! The scene only needs filled shapes, text and a transform stack. The
//! browser implements this on a 2D canvas context; tests record the calls.

use glam::Vec2;

use super::palette::Color;
use crate::sim::Rect;

/// Horizontal text anchor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Center,
}

/// Font settings for a text draw
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    pub size_px: f32,
    pub bold: bool,
    pub align: TextAlign,
}

impl TextStyle {
    pub const fn new(size_px: f32, bold: bool, align: TextAlign) -> Self {
        Self {
            size_px,
            bold,
            align,
        }
    }

    /// CSS font shorthand
    pub fn css_font(&self) -> String {
        if self.bold {
            format!("bold {}px sans-serif", self.size_px)
        } else {
            format!("{}px sans-serif", self.size_px)
        }
    }
}

/// An opaque 2D raster target
pub trait Surface {
    /// Surface size in logical pixels
    fn size(&self) -> Vec2;
    fn clear(&mut self);
    fn fill_rect(&mut self, rect: Rect, color: Color);
    fn fill_ellipse(&mut self, center: Vec2, radii: Vec2, color: Color);
    fn fill_polygon(&mut self, points: &[Vec2], color: Color);
    fn fill_text(&mut self, text: &str, pos: Vec2, style: TextStyle, color: Color);
    fn save(&mut self);
    fn restore(&mut self);
    fn translate(&mut self, offset: Vec2);
    fn rotate(&mut self, angle: f32);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_css_font() {
        assert_eq!(
            TextStyle::new(38.0, true, TextAlign::Center).css_font(),
            "bold 38px sans-serif"
        );
        assert_eq!(
            TextStyle::new(12.0, false, TextAlign::Left).css_font(),
            "12px sans-serif"
        );
    }
}
