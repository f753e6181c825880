use std::path::{Path, PathBuf};

use eyre::Result;

/// Trait for types that represent a generated file
pub trait GeneratedFile {
    /// Get the file path relative to the base directory
    fn path(&self, base: &Path) -> PathBuf;

    /// Get the rules for writing this file
    fn rules(&self) -> FileRules {
        FileRules::default()
    }

    /// Render the file body, without the header
    fn render(&self) -> String;

    /// Full file contents: the header from [`FileRules`] followed by the body
    fn contents(&self) -> String {
        match self.rules().header {
            Some(header) => format!("{header}\n\n{}", self.render()),
            None => self.render(),
        }
    }

    /// Write the file to disk, leaving it untouched when nothing changed
    fn write(&self, base: &Path) -> Result<WriteResult> {
        write_if_changed(&self.path(base), &self.contents())
    }
}

fn write_if_changed(path: &Path, content: &str) -> Result<WriteResult> {
    match std::fs::read_to_string(path).ok() {
        None => {
            write_file(path, content)?;
            Ok(WriteResult::Created)
        }
        Some(existing) if existing == content => Ok(WriteResult::Unchanged),
        Some(_) => {
            write_file(path, content)?;
            Ok(WriteResult::Updated)
        }
    }
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, content)?;
    Ok(())
}

/// Result of a write operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteResult {
    /// File did not exist and was created
    Created,
    /// File existed and its contents were replaced
    Updated,
    /// File already had identical contents
    Unchanged,
}

/// Rules that determine how a file should be written
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FileRules {
    /// First line of the file, followed by a blank line
    pub header: Option<&'static str>,
}

impl FileRules {
    /// Rules for a generated file carrying the given header line.
    pub fn generated(header: &'static str) -> Self {
        Self {
            header: Some(header),
        }
    }
}
