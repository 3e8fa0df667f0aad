use std::fs;
use std::path::Path;

use rustc_hash::FxHashMap;

use crate::error::UiError;

/// Key -> string lookup table for localized widget text.
///
/// The table is handed to widgets explicitly; nothing in this crate
/// resolves text through ambient global state.
#[derive(Debug, Clone, Default)]
pub struct StringTable {
    entries: FxHashMap<String, String>,
}

impl StringTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Resolve `key`, failing with `StringNotFound` when it is absent.
    /// No fallback text is substituted.
    pub fn resolve(&self, key: &str) -> Result<&str, UiError> {
        self.get(key)
            .ok_or_else(|| UiError::StringNotFound(key.to_string()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Parse a flat `key = "value"` TOML table.
    pub fn from_toml_str(src: &str) -> Result<Self, UiError> {
        let entries: FxHashMap<String, String> = toml::from_str(src)?;
        Ok(Self { entries })
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, UiError> {
        let path = path.as_ref();
        let table = Self::from_toml_str(&fs::read_to_string(path)?)?;
        log::info!("Loaded {} strings from {:?}", table.len(), path);
        Ok(table)
    }
}
