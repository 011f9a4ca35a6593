//! Error types for code generation

use std::path::PathBuf;

use thiserror::Error;

use crate::templates::TemplateError;

/// Errors that can occur during code generation
#[derive(Debug, Error)]
pub enum GenerationError {
    /// A required argument is missing or a value is outside its allowed set
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    /// A template references a placeholder with no derived token
    #[error("Missing token for placeholder: {0}")]
    MissingToken(String),

    /// A bundled template could not be parsed
    #[error("Invalid template: {0}")]
    InvalidTemplate(String),

    /// An output file could not be written
    #[error("Failed to write {}: {}", .path.display(), .source)]
    Io {
        /// Path that was being written
        path: PathBuf,
        /// Underlying OS error
        #[source]
        source: std::io::Error,
    },
}

impl From<TemplateError> for GenerationError {
    fn from(err: TemplateError) -> Self {
        match err {
            TemplateError::MissingToken(name) => GenerationError::MissingToken(name),
            other @ TemplateError::InvalidSyntax { .. } => {
                GenerationError::InvalidTemplate(other.to_string())
            }
        }
    }
}
