#![warn(missing_docs)]

//! Code generation module for gobjectgen
//!
//! Derives GObject naming tokens from a module/object/parent triple, selects one
//! of two bundled template pairs (`final` or `derivable`), substitutes the tokens
//! and writes the resulting `.h`/`.c` pair to disk.

pub mod error;
pub mod generator;
pub mod models;
pub mod naming;
pub mod output_writer;
pub mod templates;

// Re-export public API
pub use error::GenerationError;
pub use generator::{generate, GenerationReport, Generator};
pub use models::{Configuration, GeneratedFile, GeneratedPair, ParentType, Variant};
pub use naming::{NameSet, Token};
pub use output_writer::{FileWriteResult, OutputWriter, WriteResult};
pub use templates::{
    CaseTransform, ParsedTemplate, PlaceholderResolver, TemplateElement, TemplateEngine,
    TemplateError, TemplateParser, TemplateSet, ValidationEngine,
};
