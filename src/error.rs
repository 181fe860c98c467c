//! Error types for farmfog-report
//!
//! Toyota Way: Clear error messages with actionable guidance (Respect for People)

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// farmfog-report error types
#[derive(Error, Debug)]
pub enum Error {
    /// Dataset or chart definition rejected before rendering
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Drawing backend failure (font, bitmap encoder, file write)
    #[error("Render error for '{file}': {message}")]
    Render {
        /// Output file being rendered
        file: String,
        /// Backend error message
        message: String,
    },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Run summary serialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Wrap a plotters drawing error for the given output file.
    pub(crate) fn render(file: impl Into<String>, err: impl std::fmt::Display) -> Self {
        Self::Render {
            file: file.into(),
            message: err.to_string(),
        }
    }
}
