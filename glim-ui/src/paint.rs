use crate::font::Font;
use crate::types::Color;

/// Fill-only paint state a widget hands to its surface.
///
/// Labels never stroke their glyphs, so the stroke width stays at zero
/// for the lifetime of the paint.
#[derive(Debug, Clone, PartialEq)]
pub struct Paint {
    pub font: Font,
    pub color: Color,
    pub stroke_width: f32,
}

impl Paint {
    pub fn new(font: Font) -> Self {
        Self {
            font,
            color: Color::BLACK,
            stroke_width: 0.0,
        }
    }
}

impl Default for Paint {
    fn default() -> Self {
        Self::new(Font::default())
    }
}
