//! Error types for MIRAGE_TERM.

use std::io;

/// Errors produced by the MIRAGE_TERM framework.
#[derive(Debug, thiserror::Error)]
pub enum MirageError {
    /// A command rejected its input. The message is presentational and is
    /// rendered verbatim as an error-styled scrollback line.
    #[error("{0}")]
    Command(String),

    #[error("config error: {0}")]
    Config(String),

    #[error("host error: {0}")]
    Host(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, MirageError>;
