//! GObject boilerplate generator
//!
//! Ties the pipeline together: validate configuration, derive names, pick the
//! template set, render both files and hand them to the [`OutputWriter`].

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::GenerationError;
use crate::models::{Configuration, GeneratedFile, GeneratedPair};
use crate::naming::NameSet;
use crate::output_writer::{OutputWriter, WriteResult};
use crate::templates::{TemplateEngine, TemplateSet};

/// Rendered files together with what the writer did with them
#[derive(Debug, Clone)]
pub struct GenerationReport {
    /// Rendered header and source, paths relative to the target directory
    pub files: GeneratedPair,
    /// Outcome of writing the files
    pub write: WriteResult,
}

/// Generates a `.h`/`.c` pair from a [`Configuration`]
#[derive(Debug, Clone)]
pub struct Generator {
    config: Configuration,
    writer: OutputWriter,
}

impl Generator {
    /// Create a generator, rejecting an invalid configuration before any work
    pub fn new(config: Configuration) -> Result<Self, GenerationError> {
        config.validate()?;
        Ok(Self {
            config,
            writer: OutputWriter::new(),
        })
    }

    /// Derive the naming tokens for this configuration
    pub fn names(&self) -> NameSet {
        NameSet::derive(&self.config)
    }

    /// Render both files without touching the filesystem
    pub fn render(&self) -> Result<GeneratedPair, GenerationError> {
        let names = self.names();
        debug!(
            "Derived names: type={} macro={} parent={} ({})",
            names.type_name(),
            names.type_macro(),
            names.parent_type_name(),
            names.parent_type_macro()
        );

        let templates = TemplateSet::for_variant(self.config.variant);
        debug!("Using {} templates", self.config.variant);

        let engine = TemplateEngine::new(&names);
        let header = engine.render(templates.header)?;
        let source = engine.render(templates.source)?;

        Ok(GeneratedPair {
            header: GeneratedFile {
                path: PathBuf::from(names.header_file()),
                content: header,
            },
            source: GeneratedFile {
                path: PathBuf::from(names.source_file()),
                content: source,
            },
        })
    }

    /// Render both files and write them under `target_dir`, header first
    pub fn generate(&self, target_dir: &Path) -> Result<GenerationReport, GenerationError> {
        let files = self.render()?;
        let write = self.writer.write(files.iter(), target_dir)?;
        Ok(GenerationReport { files, write })
    }
}

/// Generate and write the file pair for `config` under `target_dir`
pub fn generate(config: Configuration, target_dir: &Path) -> Result<GenerationReport, GenerationError> {
    Generator::new(config)?.generate(target_dir)
}
