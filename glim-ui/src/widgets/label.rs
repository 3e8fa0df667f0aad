use crate::{Color, Font, FontStyle, Paint, Point, Rect, StringTable, Surface, TextMetrics, UiError};

/// A text string placed on a surface.
///
/// The stored origin is the label's top-left corner, while the draw
/// primitive underneath is baseline-addressed; `paint` reconciles the
/// two by shifting down by the measured ink height. Width and height
/// are never cached: they are remeasured from the current text and font
/// on every call, so they cannot go stale across mutations.
pub struct Label {
    text: String,
    origin: Point,
    paint: Paint,
    needs_repaint: bool,
}

impl Label {
    /// Label at (0, 0) with the default font.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            origin: Point::new(0.0, 0.0),
            paint: Paint::new(Font::default()),
            needs_repaint: true,
        }
    }

    /// Label whose text is a string table entry. Fails when the key is
    /// missing; no placeholder label is produced.
    pub fn from_resource(strings: &StringTable, key: &str) -> Result<Self, UiError> {
        Ok(Self::new(strings.resolve(key)?))
    }

    /// Place the origin while building.
    pub fn at(mut self, x: f32, y: f32) -> Self {
        self.origin = Point::new(x, y);
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn font(&self) -> &Font {
        &self.paint.font
    }

    pub fn font_style(&self) -> FontStyle {
        self.paint.font.style
    }

    pub fn font_size(&self) -> f32 {
        self.paint.font.size
    }

    pub fn color(&self) -> Color {
        self.paint.color
    }

    pub fn origin(&self) -> Point {
        self.origin
    }

    /// Whether a mutation since the last `paint` call is still unshown.
    pub fn needs_repaint(&self) -> bool {
        self.needs_repaint
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.needs_repaint = true;
    }

    /// Replace the text with a string table entry. The current text is
    /// kept when the key is missing.
    pub fn set_text_resource(&mut self, strings: &StringTable, key: &str) -> Result<(), UiError> {
        let text = strings.resolve(key)?;
        self.set_text(text);
        Ok(())
    }

    pub fn set_font(&mut self, font: Font) {
        self.paint.font = font;
        self.needs_repaint = true;
    }

    /// Replace family and size. Any style override is dropped along
    /// with the old family; the new font carries whatever the family
    /// name itself encodes.
    pub fn set_font_face(&mut self, family: impl Into<String>, size: f32) {
        self.set_font(Font::new(family, size));
    }

    /// Family, platform style code and size in one call, for callers
    /// that speak raw codes. The code is validated before anything
    /// changes.
    pub fn set_font_spec(
        &mut self,
        family: impl Into<String>,
        style_code: i32,
        size: f32,
    ) -> Result<(), UiError> {
        let style = FontStyle::from_code(style_code)?;
        self.set_font(Font::new(family, size).with_style(style));
        Ok(())
    }

    /// Re-derive the current family at `style`.
    pub fn set_font_style(&mut self, style: FontStyle) {
        self.paint.font.style = style;
        self.needs_repaint = true;
    }

    /// `set_font_style` for callers that speak raw codes.
    pub fn set_font_style_code(&mut self, code: i32) -> Result<(), UiError> {
        self.set_font_style(FontStyle::from_code(code)?);
        Ok(())
    }

    pub fn set_font_size(&mut self, size: f32) {
        self.paint.font.size = size;
        self.needs_repaint = true;
    }

    pub fn set_color(&mut self, color: Color) {
        self.paint.color = color;
        self.needs_repaint = true;
    }

    pub fn set_origin(&mut self, x: f32, y: f32) {
        self.origin = Point::new(x, y);
        self.needs_repaint = true;
    }

    /// Advance width of the current text under the current font.
    pub fn width(&self, metrics: &impl TextMetrics) -> f32 {
        metrics.measure_text(&self.text, &self.paint)
    }

    /// Ink height of the current text under the current font: the tight
    /// glyph bounds, not the font's line height. This is the amount
    /// `paint` shifts the baseline down by.
    pub fn height(&self, metrics: &impl TextMetrics) -> f32 {
        metrics.text_bounds(&self.text, &self.paint).h
    }

    /// On-surface bounding box at the current origin.
    pub fn bounds(&self, metrics: &impl TextMetrics) -> Rect {
        let ink = metrics.text_bounds(&self.text, &self.paint);
        Rect::new(self.origin.x, self.origin.y, ink.w, ink.h)
    }

    /// Draw the label with a single text call.
    ///
    /// The baseline handed to the surface sits one ink height below the
    /// stored origin, so the origin reads as a top-left corner to
    /// callers. No horizontal or ascent compensation is applied;
    /// downstream alignment depends on exactly this offset.
    pub fn paint(&mut self, surface: &mut impl Surface) {
        let baseline = self.origin.y + self.height(surface);
        surface.draw_text(&self.text, self.origin.x, baseline, &self.paint);
        self.needs_repaint = false;
    }
}

impl Default for Label {
    fn default() -> Self {
        Self::new("")
    }
}
