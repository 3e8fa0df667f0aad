use glim_ui::{Color, Font, FontStyle, Label, Paint, Rect, StringTable, Surface, TextMetrics, UiError};

/// Fixed-advance metrics: every glyph is `advance` wide, ink is `ink` tall.
struct FixedMetrics {
    advance: f32,
    ink: f32,
}

impl TextMetrics for FixedMetrics {
    fn measure_text(&self, text: &str, _paint: &Paint) -> f32 {
        text.chars().count() as f32 * self.advance
    }

    fn text_bounds(&self, text: &str, paint: &Paint) -> Rect {
        if text.is_empty() {
            return Rect::new(0.0, 0.0, 0.0, 0.0);
        }
        Rect::new(0.0, 0.0, self.measure_text(text, paint), self.ink)
    }
}

/// Surface that records every draw call instead of rendering.
struct RecordingSurface {
    metrics: FixedMetrics,
    calls: Vec<(String, f32, f32)>,
}

impl RecordingSurface {
    fn new(advance: f32, ink: f32) -> Self {
        Self {
            metrics: FixedMetrics { advance, ink },
            calls: Vec::new(),
        }
    }
}

impl TextMetrics for RecordingSurface {
    fn measure_text(&self, text: &str, paint: &Paint) -> f32 {
        self.metrics.measure_text(text, paint)
    }

    fn text_bounds(&self, text: &str, paint: &Paint) -> Rect {
        self.metrics.text_bounds(text, paint)
    }
}

impl Surface for RecordingSurface {
    fn draw_text(&mut self, text: &str, x: f32, y: f32, _paint: &Paint) {
        self.calls.push((text.to_string(), x, y));
    }
}

#[test]
fn style_roundtrip() {
    let mut label = Label::new("abc");

    for style in [
        FontStyle::Normal,
        FontStyle::Italic,
        FontStyle::Bold,
        FontStyle::BoldItalic,
    ] {
        label.set_font_style(style);
        assert_eq!(label.font_style(), style);
    }

    for code in 0..=3 {
        label.set_font_style_code(code).unwrap();
        assert_eq!(label.font_style().code(), code);
    }
}

#[test]
fn bogus_style_code_rejected() {
    let mut label = Label::new("abc");
    label.set_font(Font::new("serif", 16.0).with_style(FontStyle::Italic));
    let before = label.font().clone();

    // A size passed where the style belongs.
    let err = label.set_font_style_code(24).unwrap_err();
    assert!(matches!(err, UiError::InvalidFontStyle(24)));
    assert!(err.to_string().contains("swap"));
    assert_eq!(label.font(), &before);

    let err = label.set_font_spec("serif", 24, 2.0).unwrap_err();
    assert!(matches!(err, UiError::InvalidFontStyle(24)));
    assert_eq!(label.font(), &before);
}

#[test]
fn failed_mutation_does_not_schedule_repaint() {
    let mut surface = RecordingSurface::new(7.0, 12.0);
    let mut label = Label::new("abc");
    label.paint(&mut surface);
    assert!(!label.needs_repaint());

    assert!(label.set_font_style_code(-1).is_err());
    assert!(!label.needs_repaint());
}

#[test]
fn measurement_is_derived_from_current_state() {
    let metrics = FixedMetrics {
        advance: 7.0,
        ink: 12.0,
    };
    let mut label = Label::new("Hello");

    assert_eq!(label.width(&metrics), 35.0);
    assert_eq!(label.width(&metrics), 35.0);
    assert_eq!(label.height(&metrics), 12.0);

    // Fixed-width font: width grows with every added char.
    let mut last = label.width(&metrics);
    for text in ["Hello!", "Hello!!", "Hello, world"] {
        label.set_text(text);
        let width = label.width(&metrics);
        assert!(width > last);
        last = width;
    }
}

#[test]
fn text_and_font_roundtrip() {
    let mut label = Label::default();

    label.set_text("Hello");
    assert_eq!(label.text(), "Hello");

    let font = Font::new("serif", 16.0).with_style(FontStyle::Bold);
    label.set_font(font.clone());
    assert_eq!(label.font(), &font);
    assert_eq!(label.font_size(), 16.0);

    label.set_color(Color::rgb(10, 20, 30));
    assert_eq!(label.color(), Color::rgb(10, 20, 30));
}

#[test]
fn font_face_drops_style_override() {
    let mut label = Label::new("abc");
    label.set_font_style(FontStyle::Bold);

    label.set_font_face("monospace", 13.0);
    assert_eq!(label.font().family, "monospace");
    assert_eq!(label.font_size(), 13.0);
    assert_eq!(label.font_style(), FontStyle::Normal);
}

#[test]
fn resource_construction() {
    let mut strings = StringTable::new();
    strings.insert("greeting", "Hola");

    let label = Label::from_resource(&strings, "greeting").unwrap().at(10.0, 20.0);
    assert_eq!(label.text(), "Hola");
    assert_eq!(label.origin().x, 10.0);
    assert_eq!(label.origin().y, 20.0);

    let err = Label::from_resource(&strings, "missing").unwrap_err();
    assert!(matches!(err, UiError::StringNotFound(ref key) if key == "missing"));
}

#[test]
fn missing_resource_keeps_current_text() {
    let strings = StringTable::new();
    let mut label = Label::new("before");

    assert!(label.set_text_resource(&strings, "missing").is_err());
    assert_eq!(label.text(), "before");
}

#[test]
fn paint_shifts_baseline_by_ink_height() {
    let mut surface = RecordingSurface::new(7.0, 12.0);
    let mut label = Label::new("hud").at(5.0, 10.0);

    label.paint(&mut surface);

    // Origin is top-left; the baseline lands one ink height lower.
    assert_eq!(surface.calls.len(), 1);
    assert_eq!(surface.calls[0], ("hud".to_string(), 5.0, 22.0));
}

#[test]
fn empty_label_has_no_extent() {
    let mut surface = RecordingSurface::new(7.0, 12.0);
    let mut label = Label::default().at(3.0, 4.0);

    assert_eq!(label.width(&surface), 0.0);
    assert_eq!(label.height(&surface), 0.0);

    label.paint(&mut surface);
    assert_eq!(surface.calls[0], (String::new(), 3.0, 4.0));
}

#[test]
fn repaint_scheduling() {
    let mut surface = RecordingSurface::new(7.0, 12.0);
    let mut label = Label::new("abc");
    assert!(label.needs_repaint());

    label.paint(&mut surface);
    assert!(!label.needs_repaint());

    label.set_text("def");
    assert!(label.needs_repaint());
    label.paint(&mut surface);

    label.set_font_size(9.0);
    assert!(label.needs_repaint());
    label.paint(&mut surface);

    label.set_origin(1.0, 2.0);
    assert!(label.needs_repaint());
}

#[test]
fn bounds_sit_at_the_origin() {
    let metrics = FixedMetrics {
        advance: 7.0,
        ink: 12.0,
    };
    let label = Label::new("abc").at(5.0, 10.0);

    let bounds = label.bounds(&metrics);
    assert_eq!(bounds, Rect::new(5.0, 10.0, 21.0, 12.0));
    assert!(bounds.contains(6.0, 11.0));
    assert!(!bounds.contains(40.0, 11.0));
}
