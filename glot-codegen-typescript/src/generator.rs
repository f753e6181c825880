//! TypeScript generator for one completed pass.

use std::path::Path;

use eyre::Result;
use glot_codegen::{
    language::{GenerateResult, LanguageCodegen, PreviewFile},
    pipeline::{CompilationContext, Diagnostic},
};
use glot_core::GeneratedFile;
use glot_ir::{AdapterUnit, DeclarationUnit};
use tracing::debug;

use crate::{
    adapter::{AdapterEmitter, RenderedAdapters},
    declarations::{DeclarationEmitter, EmittedDeclarations},
    files::{AdapterTs, DeclarationsDts, RuntimeTs},
};

/// Every TypeScript artifact of a pass, rendered in memory.
///
/// Construction fails on a fatal error, before anything touches the disk.
pub struct Generator {
    declarations_file: String,
    adapters_dir: String,
    declarations: EmittedDeclarations,
    adapters: RenderedAdapters,
}

impl LanguageCodegen for Generator {
    fn language(&self) -> &'static str {
        "typescript"
    }

    fn file_extension(&self) -> &'static str {
        "ts"
    }

    fn preview(&self) -> Result<Vec<PreviewFile>> {
        Ok(self
            .files()
            .iter()
            .map(|file| PreviewFile {
                path: file.path(Path::new("")).display().to_string(),
                content: file.contents(),
            })
            .collect())
    }

    fn generate(&self, output_dir: &Path) -> Result<GenerateResult> {
        let mut result = GenerateResult::default();
        for file in self.files() {
            let path = file.path(Path::new("")).display().to_string();
            result.record(path, file.write(output_dir)?);
        }
        debug!(written = result.written(), "generated files");
        Ok(result)
    }
}

impl Generator {
    /// Render the declaration unit and the recipe adapters of `ctx`.
    pub fn from_context(ctx: &CompilationContext) -> Result<Self> {
        let declarations =
            DeclarationEmitter::new(ctx.graph()?, ctx.order()?, &ctx.config.emit).emit()?;
        let adapters = AdapterEmitter::new(
            &ctx.recipes,
            &ctx.config.declarations,
            &ctx.config.adapters,
        )
        .emit();

        Ok(Self {
            declarations_file: ctx.config.declarations.clone(),
            adapters_dir: ctx.config.adapters.clone(),
            declarations,
            adapters,
        })
    }

    pub fn declarations(&self) -> &DeclarationUnit {
        &self.declarations.unit
    }

    pub fn adapters(&self) -> &[AdapterUnit] {
        &self.adapters.units
    }

    /// Warnings from rendering and errors for adapters that were skipped.
    pub fn diagnostics(&self) -> impl Iterator<Item = &Diagnostic> {
        self.declarations
            .diagnostics
            .iter()
            .chain(&self.adapters.diagnostics)
    }

    fn files(&self) -> Vec<Box<dyn GeneratedFile + '_>> {
        let mut files: Vec<Box<dyn GeneratedFile + '_>> = vec![Box::new(DeclarationsDts::new(
            &self.declarations_file,
            self.declarations.body(),
        ))];

        if !self.adapters.units.is_empty() {
            files.push(Box::new(RuntimeTs::new(&self.adapters_dir)));
        }
        for unit in &self.adapters.units {
            files.push(Box::new(AdapterTs::new(&self.adapters_dir, unit)));
        }
        files
    }
}
