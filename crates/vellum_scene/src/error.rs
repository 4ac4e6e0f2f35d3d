//! # Scene Error Types

use thiserror::Error;

/// Errors raised while building scene values from external input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SceneError {
    /// A color string was neither `#RRGGBB`, `#RRGGBBAA` nor a known name.
    #[error("invalid color: {0:?}")]
    InvalidColor(String),
}

/// Result type for scene operations.
pub type SceneResult<T> = Result<T, SceneError>;
