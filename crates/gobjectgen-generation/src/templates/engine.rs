//! Template engine for rendering templates with token substitution

use crate::{
    naming::NameSet,
    templates::{
        error::TemplateError,
        parser::{TemplateElement, TemplateParser},
        resolver::PlaceholderResolver,
    },
};

/// Template engine for rendering templates against a [`NameSet`]
pub struct TemplateEngine<'a> {
    resolver: PlaceholderResolver<'a>,
}

impl<'a> TemplateEngine<'a> {
    /// Create a new template engine over the derived names
    pub fn new(names: &'a NameSet) -> Self {
        Self {
            resolver: PlaceholderResolver::new(names),
        }
    }

    /// Render a template
    ///
    /// # Arguments
    /// * `template_content` - The template content to render
    ///
    /// # Returns
    /// Rendered content, or `MissingToken` for the first placeholder with no token
    pub fn render(&self, template_content: &str) -> Result<String, TemplateError> {
        let parsed = TemplateParser::parse(template_content)?;
        self.render_elements(&parsed.elements)
    }

    fn render_elements(&self, elements: &[TemplateElement]) -> Result<String, TemplateError> {
        let mut result = String::new();

        for element in elements {
            match element {
                TemplateElement::Text(text) => result.push_str(text),
                TemplateElement::Placeholder(name) => {
                    result.push_str(self.resolver.resolve(name)?);
                }
            }
        }

        Ok(result)
    }
}
