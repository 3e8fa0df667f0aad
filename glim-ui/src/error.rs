use thiserror::Error;

#[derive(Debug, Error)]
pub enum UiError {
    /// The usual cause is passing the size where the style code belongs.
    #[error("invalid font style code {0}; did you swap the style and size arguments?")]
    InvalidFontStyle(i32),

    #[error("string resource '{0}' not found")]
    StringNotFound(String),

    #[error("failed to read string table: {0}")]
    Io(#[from] std::io::Error),

    #[error("string table syntax error: {0}")]
    Toml(#[from] toml::de::Error),
}
