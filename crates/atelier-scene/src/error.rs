//! Error types for atelier-scene.

use atelier_geometry::ScaleError;
use atelier_materials::ProfileError;
use thiserror::Error;

/// Result type for theme operations.
pub type Result<T> = std::result::Result<T, ThemeError>;

/// Errors raised while loading or validating a theme.
#[derive(Debug, Error)]
pub enum ThemeError {
    /// No built-in theme has this name.
    #[error("unknown theme: {0}")]
    UnknownTheme(String),

    /// I/O error reading a theme file.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed theme JSON.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// A material coefficient is out of range.
    #[error("material profile: {0}")]
    Profile(#[from] ProfileError),

    /// A size triple is not positive and increasing.
    #[error("scale table: {0}")]
    Scale(#[from] ScaleError),

    /// An idle-animation parameter is out of range.
    #[error("idle animation: {field} = {value} is outside {range}")]
    InvalidAnimation {
        field: &'static str,
        value: f32,
        range: &'static str,
    },
}
