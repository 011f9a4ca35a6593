//! Naming-convention derivation
//!
//! Turns a [`Configuration`] into the fixed set of identifiers the GObject
//! boilerplate needs. Everything here is a pure function of the input.

use crate::models::Configuration;
use crate::templates::CaseTransform;

/// A substitutable value derived from the configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Token {
    /// Upper-cased module, e.g. `GTK`
    ModuleUpper,
    /// Lower-cased module, e.g. `gtk`
    ModuleLower,
    /// Upper-cased object, e.g. `BUTTON`
    ObjectUpper,
    /// Lower-cased object, e.g. `button`
    ObjectLower,
    /// Generated type name, e.g. `GtkButton`
    TypeName,
    /// Parent type name, e.g. `GObject`
    ParentTypeName,
    /// Parent get-type macro, e.g. `G_TYPE_OBJECT`
    ParentTypeMacro,
    /// Header file name, e.g. `gtk-button.h`
    HeaderFile,
}

impl Token {
    /// Every token, in declaration order
    pub const ALL: [Token; 8] = [
        Token::ModuleUpper,
        Token::ModuleLower,
        Token::ObjectUpper,
        Token::ObjectLower,
        Token::TypeName,
        Token::ParentTypeName,
        Token::ParentTypeMacro,
        Token::HeaderFile,
    ];

    /// Placeholder name used inside templates
    pub fn name(&self) -> &'static str {
        match self {
            Token::ModuleUpper => "module_upper",
            Token::ModuleLower => "module_lower",
            Token::ObjectUpper => "object_upper",
            Token::ObjectLower => "object_lower",
            Token::TypeName => "type_name",
            Token::ParentTypeName => "parent_type_name",
            Token::ParentTypeMacro => "parent_type_macro",
            Token::HeaderFile => "header_file",
        }
    }

    /// Look up a token by its placeholder name
    pub fn from_name(name: &str) -> Option<Token> {
        match name {
            "module_upper" => Some(Token::ModuleUpper),
            "module_lower" => Some(Token::ModuleLower),
            "object_upper" => Some(Token::ObjectUpper),
            "object_lower" => Some(Token::ObjectLower),
            "type_name" => Some(Token::TypeName),
            "parent_type_name" => Some(Token::ParentTypeName),
            "parent_type_macro" => Some(Token::ParentTypeMacro),
            "header_file" => Some(Token::HeaderFile),
            _ => None,
        }
    }
}

/// Identifiers derived from a [`Configuration`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameSet {
    module_upper: String,
    module_lower: String,
    object_upper: String,
    object_lower: String,
    type_name: String,
    type_macro: String,
    parent_type_name: String,
    parent_type_macro: String,
    header_file: String,
    source_file: String,
}

impl NameSet {
    /// Derive all names from the configuration
    pub fn derive(config: &Configuration) -> Self {
        let module_upper = CaseTransform::UpperCase.apply(&config.module);
        let module_lower = CaseTransform::LowerCase.apply(&config.module);
        let object_upper = CaseTransform::UpperCase.apply(&config.object);
        let object_lower = CaseTransform::LowerCase.apply(&config.object);

        let type_name = format!(
            "{}{}",
            CaseTransform::Capitalized.apply(&module_lower),
            CaseTransform::Capitalized.apply(&object_lower)
        );
        let type_macro = format!("{}_TYPE_{}", module_upper, object_upper);

        let parent_module = CaseTransform::Capitalized
            .apply(&CaseTransform::LowerCase.apply(&config.parent.module));
        let parent_class = CaseTransform::Capitalized
            .apply(&CaseTransform::LowerCase.apply(&config.parent.class));
        let parent_type_macro = format!(
            "{}_TYPE_{}",
            CaseTransform::UpperCase.apply(&parent_module),
            CaseTransform::UpperCase.apply(&parent_class)
        );
        let parent_type_name = parent_module + &parent_class;

        let basename = format!("{}-{}", module_lower, object_lower);

        Self {
            header_file: format!("{}.h", basename),
            source_file: format!("{}.c", basename),
            module_upper,
            module_lower,
            object_upper,
            object_lower,
            type_name,
            type_macro,
            parent_type_name,
            parent_type_macro,
        }
    }

    /// Value substituted for `token`
    pub fn get(&self, token: Token) -> &str {
        match token {
            Token::ModuleUpper => &self.module_upper,
            Token::ModuleLower => &self.module_lower,
            Token::ObjectUpper => &self.object_upper,
            Token::ObjectLower => &self.object_lower,
            Token::TypeName => &self.type_name,
            Token::ParentTypeName => &self.parent_type_name,
            Token::ParentTypeMacro => &self.parent_type_macro,
            Token::HeaderFile => &self.header_file,
        }
    }

    /// Generated type name, e.g. `GtkButton`
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// Get-type macro of the generated type, e.g. `GTK_TYPE_BUTTON`
    pub fn type_macro(&self) -> &str {
        &self.type_macro
    }

    /// Parent type name, e.g. `GObject`
    pub fn parent_type_name(&self) -> &str {
        &self.parent_type_name
    }

    /// Parent get-type macro, e.g. `G_TYPE_OBJECT`
    pub fn parent_type_macro(&self) -> &str {
        &self.parent_type_macro
    }

    /// Header file name, e.g. `gtk-button.h`
    pub fn header_file(&self) -> &str {
        &self.header_file
    }

    /// Source file name, e.g. `gtk-button.c`
    pub fn source_file(&self) -> &str {
        &self.source_file
    }
}
