//! Language-agnostic generation traits.

use std::path::Path;

use eyre::Result;
use glot_core::WriteResult;
use glot_ir::{OptionType, Primitive};

/// A target-language generator for one pass.
///
/// Rendering happens entirely in memory: [`generate`](Self::generate) must
/// not write anything unless every artifact rendered.
pub trait LanguageCodegen {
    /// Language identifier (e.g., "typescript")
    fn language(&self) -> &'static str;

    /// File extension for generated sources (e.g., "ts")
    fn file_extension(&self) -> &'static str;

    /// Render every artifact without writing to disk.
    fn preview(&self) -> Result<Vec<PreviewFile>>;

    /// Render every artifact and write it under `output_dir`.
    fn generate(&self, output_dir: &Path) -> Result<GenerateResult>;
}

/// What writing the artifacts of a pass did.
#[derive(Debug, Default)]
pub struct GenerateResult {
    pub created: Vec<String>,
    pub updated: Vec<String>,
    /// Files whose content was already up to date.
    pub unchanged: Vec<String>,
}

impl GenerateResult {
    /// Record the outcome of one write.
    pub fn record(&mut self, path: impl Into<String>, result: WriteResult) {
        let path = path.into();
        match result {
            WriteResult::Created => self.created.push(path),
            WriteResult::Updated => self.updated.push(path),
            WriteResult::Unchanged => self.unchanged.push(path),
        }
    }

    pub fn written(&self) -> usize {
        self.created.len() + self.updated.len()
    }
}

/// A rendered file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewFile {
    /// Relative path from the output directory
    pub path: String,
    pub content: String,
}

/// Maps host-side types to target type strings.
pub trait TypeMapper {
    fn language(&self) -> &'static str;

    fn map_primitive(&self, primitive: Primitive) -> &'static str;

    /// The opaque placeholder for erased types.
    fn map_unknown(&self) -> &'static str;

    /// Target type of a recipe option value.
    fn map_option_type(&self, ty: &OptionType) -> String;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_write_results() {
        let mut result = GenerateResult::default();
        result.record("types.d.ts", WriteResult::Created);
        result.record("adapters/runtime.ts", WriteResult::Unchanged);
        result.record("adapters/find.ts", WriteResult::Updated);

        assert_eq!(result.written(), 2);
        assert_eq!(result.unchanged, vec!["adapters/runtime.ts"]);
    }
}
