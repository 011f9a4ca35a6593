//! Core data models for code generation

use std::{fmt, path::PathBuf, str::FromStr};

use crate::error::GenerationError;

/// Structural variant of the generated type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Variant {
    /// `G_DECLARE_FINAL_TYPE`: the type cannot be subclassed
    #[default]
    Final,
    /// `G_DECLARE_DERIVABLE_TYPE`: adds private data and a public class struct
    Derivable,
}

impl Variant {
    /// Every variant, in declaration order
    pub const ALL: [Variant; 2] = [Variant::Final, Variant::Derivable];

    /// Name used on the command line
    pub fn as_str(&self) -> &'static str {
        match self {
            Variant::Final => "final",
            Variant::Derivable => "derivable",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Variant {
    type Err = GenerationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "final" => Ok(Variant::Final),
            "derivable" => Ok(Variant::Derivable),
            other => Err(GenerationError::InvalidArguments(format!(
                "unknown type '{}', expected one of: final, derivable",
                other
            ))),
        }
    }
}

/// Module and class name of the parent type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParentType {
    /// Parent namespace, e.g. `G` or `Gtk`
    pub module: String,
    /// Parent class, e.g. `Object` or `Widget`
    pub class: String,
}

impl ParentType {
    /// Create a parent type from its module and class names
    pub fn new(module: impl Into<String>, class: impl Into<String>) -> Self {
        Self {
            module: module.into(),
            class: class.into(),
        }
    }
}

impl Default for ParentType {
    fn default() -> Self {
        Self::new("G", "Object")
    }
}

/// Input for one generation run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Configuration {
    /// Module/namespace token, e.g. `Gtk`
    pub module: String,
    /// Object token, e.g. `Button`
    pub object: String,
    /// Parent type to derive from
    pub parent: ParentType,
    /// Which template family to emit
    pub variant: Variant,
}

impl Configuration {
    /// Create a configuration deriving from `GObject` with the `final` variant
    pub fn new(module: impl Into<String>, object: impl Into<String>) -> Self {
        Self {
            module: module.into(),
            object: object.into(),
            parent: ParentType::default(),
            variant: Variant::default(),
        }
    }

    /// Set the parent type
    pub fn with_parent(mut self, parent: ParentType) -> Self {
        self.parent = parent;
        self
    }

    /// Set the structural variant
    pub fn with_variant(mut self, variant: Variant) -> Self {
        self.variant = variant;
        self
    }

    /// Check that module and object are non-empty
    pub fn validate(&self) -> Result<(), GenerationError> {
        if self.module.is_empty() {
            return Err(GenerationError::InvalidArguments(
                "module name cannot be empty".to_string(),
            ));
        }

        if self.object.is_empty() {
            return Err(GenerationError::InvalidArguments(
                "object name cannot be empty".to_string(),
            ));
        }

        Ok(())
    }
}

/// A rendered output file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    /// File path, relative to the output directory until written
    pub path: PathBuf,
    /// File content
    pub content: String,
}

/// The declaration/definition pair produced by one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedPair {
    /// The `.h` file
    pub header: GeneratedFile,
    /// The `.c` file
    pub source: GeneratedFile,
}

impl GeneratedPair {
    /// Iterate header first, then source
    pub fn iter(&self) -> impl Iterator<Item = &GeneratedFile> {
        std::iter::once(&self.header).chain(std::iter::once(&self.source))
    }
}
