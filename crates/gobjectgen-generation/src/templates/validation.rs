//! Template validation engine
//!
//! Checks template syntax and that every placeholder maps to a known token.

use crate::naming::Token;
use crate::templates::error::TemplateError;
use crate::templates::parser::{ParsedTemplate, TemplateParser};

/// Template validation engine
pub struct ValidationEngine;

impl ValidationEngine {
    /// Validate that every placeholder in a parsed template names a token
    ///
    /// # Returns
    /// Ok if all placeholders resolve, `MissingToken` with the first unknown name otherwise
    pub fn validate_placeholder_references(parsed: &ParsedTemplate) -> Result<(), TemplateError> {
        match Self::unknown_placeholders(parsed).into_iter().next() {
            Some(name) => Err(TemplateError::MissingToken(name)),
            None => Ok(()),
        }
    }

    /// Placeholder names with no corresponding token, sorted
    pub fn unknown_placeholders(parsed: &ParsedTemplate) -> Vec<String> {
        parsed
            .placeholder_names
            .iter()
            .filter(|name| Token::from_name(name).is_none())
            .cloned()
            .collect()
    }

    /// Parse a template and check its placeholder references
    pub fn validate_template(content: &str) -> Result<(), TemplateError> {
        let parsed = TemplateParser::parse(content)?;
        Self::validate_placeholder_references(&parsed)
    }
}
