//! Placeholder resolution and case transformation

use crate::naming::{NameSet, Token};
use crate::templates::error::TemplateError;

/// Represents a case transformation for derived names
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaseTransform {
    /// UPPERCASE (e.g., GTK)
    UpperCase,
    /// lowercase (e.g., gtk)
    LowerCase,
    /// First character upper, the rest lower (e.g., Gtk)
    ///
    /// The first character is upper-cased, not title-cased, so digraphs such
    /// as `ǆ` become `Ǆ` rather than `ǅ`.
    Capitalized,
}

impl CaseTransform {
    /// Apply case transformation to a string
    pub fn apply(&self, input: &str) -> String {
        match self {
            CaseTransform::UpperCase => input.to_uppercase(),
            CaseTransform::LowerCase => input.to_lowercase(),
            CaseTransform::Capitalized => {
                let mut chars = input.chars();
                match chars.next() {
                    Some(first) => first
                        .to_uppercase()
                        .chain(chars.flat_map(char::to_lowercase))
                        .collect(),
                    None => String::new(),
                }
            }
        }
    }
}

/// Resolves placeholder names against a derived [`NameSet`]
pub struct PlaceholderResolver<'a> {
    names: &'a NameSet,
}

impl<'a> PlaceholderResolver<'a> {
    /// Create a resolver over the given names
    pub fn new(names: &'a NameSet) -> Self {
        Self { names }
    }

    /// Resolve a placeholder name to its value
    pub fn resolve(&self, name: &str) -> Result<&'a str, TemplateError> {
        let token =
            Token::from_name(name).ok_or_else(|| TemplateError::MissingToken(name.to_string()))?;
        Ok(self.names.get(token))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Configuration;

    #[test]
    fn test_case_transform_upper_case() {
        assert_eq!(CaseTransform::UpperCase.apply("Gtk"), "GTK");
    }

    #[test]
    fn test_case_transform_lower_case() {
        assert_eq!(CaseTransform::LowerCase.apply("GtkButton"), "gtkbutton");
    }

    #[test]
    fn test_case_transform_capitalized() {
        assert_eq!(CaseTransform::Capitalized.apply("gtk"), "Gtk");
        assert_eq!(CaseTransform::Capitalized.apply("GTK"), "Gtk");
        assert_eq!(CaseTransform::Capitalized.apply("toggleButton"), "Togglebutton");
    }

    #[test]
    fn test_case_transform_capitalized_keeps_separators() {
        assert_eq!(CaseTransform::Capitalized.apply("my_mod"), "My_mod");
    }

    #[test]
    fn test_case_transform_capitalized_uses_upper_case_for_digraphs() {
        assert_eq!(CaseTransform::Capitalized.apply("ǆem"), "Ǆem");
    }

    #[test]
    fn test_case_transform_empty_string() {
        assert_eq!(CaseTransform::Capitalized.apply(""), "");
        assert_eq!(CaseTransform::UpperCase.apply(""), "");
    }

    #[test]
    fn test_resolver_resolve() {
        let names = NameSet::derive(&Configuration::new("Gtk", "Button"));
        let resolver = PlaceholderResolver::new(&names);
        assert_eq!(resolver.resolve("type_name").unwrap(), "GtkButton");
        assert_eq!(resolver.resolve("header_file").unwrap(), "gtk-button.h");
    }

    #[test]
    fn test_resolver_missing_token() {
        let names = NameSet::derive(&Configuration::new("Gtk", "Button"));
        let resolver = PlaceholderResolver::new(&names);
        assert_eq!(
            resolver.resolve("objectname"),
            Err(TemplateError::MissingToken("objectname".to_string()))
        );
    }
}
