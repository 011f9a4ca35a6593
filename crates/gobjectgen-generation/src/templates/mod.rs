//! Template engine module for code generation
//!
//! Provides template parsing, rendering, validation and the bundled
//! `final`/`derivable` template sets.

pub mod bundled;
pub mod engine;
pub mod error;
pub mod parser;
pub mod resolver;
pub mod validation;

// Re-export public API
pub use bundled::TemplateSet;
pub use engine::TemplateEngine;
pub use error::TemplateError;
pub use parser::{ParsedTemplate, TemplateElement, TemplateParser};
pub use resolver::{CaseTransform, PlaceholderResolver};
pub use validation::ValidationEngine;
