// CLI error type and user-facing messages

use gobjectgen_generation::GenerationError;
use thiserror::Error;

/// CLI-specific errors
#[derive(Error, Debug)]
pub enum CliError {
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    #[error("Generation error: {0}")]
    Generation(#[from] GenerationError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl CliError {
    /// Get a user-friendly error message with suggestions
    pub fn user_message(&self) -> String {
        match self {
            CliError::InvalidArgument { message }
            | CliError::Generation(GenerationError::InvalidArguments(message)) => {
                format!(
                    "Invalid argument: {}\n\nRun 'gobjectgen --help' for usage information.",
                    message
                )
            }
            CliError::Generation(GenerationError::Io { path, source }) => {
                format!(
                    "Could not write {}: {}\n\nCheck that the current directory is writable.",
                    path.display(),
                    source
                )
            }
            CliError::Generation(e @ GenerationError::MissingToken(_))
            | CliError::Generation(e @ GenerationError::InvalidTemplate(_)) => {
                format!(
                    "Internal error: {}\n\nThe bundled templates are inconsistent. Please report this issue.",
                    e
                )
            }
            CliError::Io(e) => {
                format!("File operation failed: {}", e)
            }
        }
    }

    /// Get technical details for verbose mode
    pub fn technical_details(&self) -> String {
        format!("{:?}", self)
    }
}

pub type CliResult<T> = Result<T, CliError>;
