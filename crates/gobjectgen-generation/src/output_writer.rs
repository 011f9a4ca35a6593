//! Output writer for generated files
//!
//! Writes generated files in order with overwrite semantics. A failure stops the
//! run; files already written stay on disk.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::GenerationError;
use crate::models::GeneratedFile;

/// Result of writing a single file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileWriteResult {
    /// Path the file was written to
    pub path: PathBuf,
    /// Size of the content in bytes
    pub bytes: usize,
}

/// Result of writing multiple files
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteResult {
    /// Results for each file, in write order
    pub files: Vec<FileWriteResult>,
}

/// Writes generated files to disk
#[derive(Debug, Clone, Copy, Default)]
pub struct OutputWriter;

impl OutputWriter {
    /// Create a new output writer
    pub fn new() -> Self {
        Self
    }

    /// Write generated files under `target_dir`
    ///
    /// Existing files are truncated and overwritten. The first failure is
    /// returned immediately with the offending path.
    pub fn write<'a, I>(&self, files: I, target_dir: &Path) -> Result<WriteResult, GenerationError>
    where
        I: IntoIterator<Item = &'a GeneratedFile>,
    {
        let mut results = Vec::new();

        for file in files {
            let file_path = target_dir.join(&file.path);
            results.push(self.write_file(&file_path, &file.content)?);
        }

        Ok(WriteResult { files: results })
    }

    fn write_file(&self, file_path: &Path, content: &str) -> Result<FileWriteResult, GenerationError> {
        debug!("Writing {}", file_path.display());

        fs::write(file_path, content).map_err(|source| GenerationError::Io {
            path: file_path.to_path_buf(),
            source,
        })?;

        info!("Wrote {} ({} bytes)", file_path.display(), content.len());

        Ok(FileWriteResult {
            path: file_path.to_path_buf(),
            bytes: content.len(),
        })
    }
}
