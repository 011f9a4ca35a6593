//! Template error types

use thiserror::Error;

/// Errors raised while parsing or rendering a template
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateError {
    /// Placeholder name has no corresponding token
    #[error("Missing token for placeholder: {0}")]
    MissingToken(String),

    /// Malformed placeholder syntax
    #[error("Invalid template syntax at line {line}: {message}")]
    InvalidSyntax {
        /// Line number where the syntax error starts
        line: usize,
        /// Error message describing the syntax issue
        message: String,
    },
}
