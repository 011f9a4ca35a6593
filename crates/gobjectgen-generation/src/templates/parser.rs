//! Template syntax parser
//!
//! Splits template text into literal runs and `{{name}}` placeholders,
//! tracking line numbers for error reporting.

use std::collections::BTreeSet;

use crate::templates::error::TemplateError;

const OPEN: &str = "{{";
const CLOSE: &str = "}}";

/// Represents a parsed template element
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateElement {
    /// Plain text content
    Text(String),
    /// Placeholder: {{name}}
    Placeholder(String),
}

/// Parsed template structure
#[derive(Debug, Clone)]
pub struct ParsedTemplate {
    /// Template elements in source order
    pub elements: Vec<TemplateElement>,
    /// All placeholder names found
    pub placeholder_names: BTreeSet<String>,
}

/// Template parser
pub struct TemplateParser;

impl TemplateParser {
    /// Parse template content and extract structure
    ///
    /// # Arguments
    /// * `content` - Template content to parse
    ///
    /// # Returns
    /// Parsed template structure or error with line number
    pub fn parse(content: &str) -> Result<ParsedTemplate, TemplateError> {
        let mut parser = Parser::new(content);
        parser.parse()
    }
}

/// Internal parser state
struct Parser<'a> {
    content: &'a str,
    position: usize,
    line: usize,
    placeholder_names: BTreeSet<String>,
}

impl<'a> Parser<'a> {
    fn new(content: &'a str) -> Self {
        Self {
            content,
            position: 0,
            line: 1,
            placeholder_names: BTreeSet::new(),
        }
    }

    fn parse(&mut self) -> Result<ParsedTemplate, TemplateError> {
        let elements = self.parse_elements()?;

        Ok(ParsedTemplate {
            elements,
            placeholder_names: std::mem::take(&mut self.placeholder_names),
        })
    }

    fn parse_elements(&mut self) -> Result<Vec<TemplateElement>, TemplateError> {
        let mut elements = Vec::new();

        while self.position < self.content.len() {
            let rest = &self.content[self.position..];
            match rest.find(OPEN) {
                Some(0) => elements.push(self.parse_placeholder()?),
                Some(offset) => elements.push(TemplateElement::Text(self.take_text(offset))),
                None => elements.push(TemplateElement::Text(self.take_text(rest.len()))),
            }
        }

        Ok(elements)
    }

    fn parse_placeholder(&mut self) -> Result<TemplateElement, TemplateError> {
        let start_line = self.line;
        let body_start = self.position + OPEN.len();
        let body = &self.content[body_start..];

        let end = body.find(CLOSE).ok_or_else(|| TemplateError::InvalidSyntax {
            line: start_line,
            message: format!("Unterminated placeholder, expected '{}'", CLOSE),
        })?;

        let raw = &body[..end];
        if raw.contains('\n') {
            return Err(TemplateError::InvalidSyntax {
                line: start_line,
                message: "Placeholder cannot span multiple lines".to_string(),
            });
        }

        let name = raw.trim();
        if name.is_empty() {
            return Err(TemplateError::InvalidSyntax {
                line: start_line,
                message: "Empty placeholder".to_string(),
            });
        }

        self.position = body_start + end + CLOSE.len();
        self.placeholder_names.insert(name.to_string());

        Ok(TemplateElement::Placeholder(name.to_string()))
    }

    fn take_text(&mut self, len: usize) -> String {
        let text = &self.content[self.position..self.position + len];
        self.line += text.matches('\n').count();
        self.position += len;
        text.to_string()
    }
}
