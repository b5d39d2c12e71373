//! Color error types.

use thiserror::Error;

/// Errors that can occur while building a color.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    #[error("Invalid hex code: {0}")]
    InvalidFormat(String),

    #[error("Unknown color name: {0:?}")]
    UnknownColorName(String),

    #[error("Invalid color arguments: {0}")]
    InvalidArguments(String),

    #[error("Invalid component override: {0:?}")]
    InvalidOverride(String),

    #[error("Color field {0:?} has no value to clear")]
    UnsetField(String),
}
