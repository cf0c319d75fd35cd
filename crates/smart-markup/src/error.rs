//! Error types for engine operations.

use smart_markup_config::ConfigError;
use thiserror::Error;

/// Engine error type
#[derive(Debug, Error)]
pub enum EngineError {
    /// No command with this id is registered.
    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    /// The host has no document to operate on.
    #[error("No active document")]
    NoActiveDocument,

    /// The clipboard could not be read or written.
    #[error("Clipboard unavailable: {0}")]
    ClipboardUnavailable(String),

    /// The configured URL pattern is not a valid regex.
    #[error("Invalid URL pattern: {0}")]
    InvalidUrlPattern(#[from] regex::Error),

    /// The configuration could not be built.
    #[error(transparent)]
    Config(#[from] ConfigError),
}
