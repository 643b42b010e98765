//! Error types shared across the application.

use std::fmt::{Display, Formatter};

/// Shared application result type.
pub type Result<T> = std::result::Result<T, AppError>;

/// Application error enumeration covering all domain failure modes.
///
/// The ticket store itself is failure-free by design; errors arise only at
/// the edges: configuration loading, console I/O, and JSON export.
#[derive(Debug)]
pub enum AppError {
    /// Configuration parsing or validation failure.
    Config(String),
    /// File-system or terminal I/O failure.
    Io(String),
    /// Serialization failure when exporting the ticket board.
    Serialize(String),
    /// Malformed console command or arguments.
    Console(String),
}

impl Display for AppError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Config(msg) => write!(f, "config: {msg}"),
            Self::Io(msg) => write!(f, "io: {msg}"),
            Self::Serialize(msg) => write!(f, "serialize: {msg}"),
            Self::Console(msg) => write!(f, "console: {msg}"),
        }
    }
}

impl std::error::Error for AppError {}

impl From<toml::de::Error> for AppError {
    fn from(err: toml::de::Error) -> Self {
        Self::Config(format!("invalid config: {err}"))
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialize(err.to_string())
    }
}
