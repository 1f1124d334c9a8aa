//! Error types for configuration parsing.

use thiserror::Error;

/// Errors raised while turning user-facing strings into configuration values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("Invalid color format: {value}")]
    InvalidColor { value: String },

    #[error("Unknown wood type: {value}")]
    UnknownWood { value: String },

    #[error("Unknown fabric type: {value}")]
    UnknownFabric { value: String },

    #[error("Unknown size: {value}")]
    UnknownSize { value: String },

    #[error("Unknown furniture item: {value}")]
    UnknownItem { value: String },
}
