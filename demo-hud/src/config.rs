use glim_ui::{Font, FontStyle};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemConfig {
    pub log_level: String,
    pub strings_path: String,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            log_level: "info".into(),
            strings_path: "strings.toml".into(),
        }
    }
}

/// Default font for labels the demo builds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FontConfig {
    pub family: String,
    pub style: FontStyle,
    pub size: f32,
}

impl FontConfig {
    pub fn to_font(&self) -> Font {
        Font::new(self.family.clone(), self.size).with_style(self.style)
    }
}

impl Default for FontConfig {
    fn default() -> Self {
        Self {
            family: Font::DEFAULT_FAMILY.into(),
            style: FontStyle::Normal,
            size: Font::DEFAULT_SIZE,
        }
    }
}
