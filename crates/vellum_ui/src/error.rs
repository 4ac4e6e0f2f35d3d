//! # UI Error Types
//!
//! Widgets themselves never fail; these cover style loading only.

use thiserror::Error;

/// Errors that can occur while loading widget styles.
#[derive(Error, Debug)]
pub enum UiError {
    /// Style file could not be read.
    #[error("failed to read style file: {0}")]
    Io(#[from] std::io::Error),

    /// Style file is not valid TOML or has wrong field types.
    #[error("invalid style file: {0}")]
    Toml(#[from] toml::de::Error),

    /// Style values are out of range.
    #[error("invalid style: {0}")]
    InvalidStyle(String),
}

/// Result type for UI operations.
pub type UiResult<T> = Result<T, UiError>;
