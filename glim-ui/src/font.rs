use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::UiError;

/// The four typeface variants a backend can be asked for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FontStyle {
    #[default]
    Normal,
    Bold,
    Italic,
    BoldItalic,
}

impl FontStyle {
    /// Platform style code, for callers that speak raw numbers.
    pub fn code(self) -> i32 {
        match self {
            FontStyle::Normal => 0,
            FontStyle::Bold => 1,
            FontStyle::Italic => 2,
            FontStyle::BoldItalic => 3,
        }
    }

    /// Validate a raw platform style code.
    ///
    /// Anything outside 0..=3 is rejected before it can reach a font, so
    /// a failed call leaves the caller's state untouched.
    pub fn from_code(code: i32) -> Result<Self, UiError> {
        match code {
            0 => Ok(FontStyle::Normal),
            1 => Ok(FontStyle::Bold),
            2 => Ok(FontStyle::Italic),
            3 => Ok(FontStyle::BoldItalic),
            other => Err(UiError::InvalidFontStyle(other)),
        }
    }
}

impl fmt::Display for FontStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FontStyle::Normal => "normal",
            FontStyle::Bold => "bold",
            FontStyle::Italic => "italic",
            FontStyle::BoldItalic => "bold-italic",
        };
        f.write_str(name)
    }
}

/// Font descriptor: the (family, style, size) triple a backend resolves
/// to a concrete typeface. Glyph selection and scaling stay on the
/// backend's side of the fence.
#[derive(Debug, Clone, PartialEq)]
pub struct Font {
    pub family: String,
    pub style: FontStyle,
    pub size: f32,
}

impl Font {
    pub const DEFAULT_FAMILY: &'static str = "sans-serif";
    pub const DEFAULT_SIZE: f32 = 20.0;

    /// An upright font of the given family and size.
    pub fn new(family: impl Into<String>, size: f32) -> Self {
        Self {
            family: family.into(),
            style: FontStyle::Normal,
            size,
        }
    }

    pub fn with_style(mut self, style: FontStyle) -> Self {
        self.style = style;
        self
    }

    pub fn with_size(mut self, size: f32) -> Self {
        self.size = size;
        self
    }
}

impl Default for Font {
    fn default() -> Self {
        Self::new(Self::DEFAULT_FAMILY, Self::DEFAULT_SIZE)
    }
}
