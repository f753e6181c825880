//! Generate operation - one full pass from project to files.

use std::path::Path;

use eyre::{Context, Result};
use glot_codegen::pipeline::{Pipeline, SnapshotPlugin};
use glot_codegen_typescript::{Generator, LanguageCodegen};
use glot_model::Project;
use tracing::{debug, info};

use crate::reports::{GenerateReport, GenerationResult, PreviewResult, WrittenResult};

/// Options for the generate operation.
pub struct GenerateOptions<'a> {
    /// Output directory for generated files.
    pub output_dir: &'a Path,
    /// Whether to preview without writing files.
    pub dry_run: bool,
    /// Whether to output phase snapshots.
    pub visualize: bool,
}

/// Execute the generate operation.
///
/// Everything is rendered before the first write, so a fatal error leaves
/// the output directory untouched.
pub fn generate(project: &Project, opts: GenerateOptions) -> Result<GenerateReport> {
    let debug_dir = opts.output_dir.join(".glot");

    let mut pipeline = Pipeline::new();
    if opts.visualize {
        pipeline = pipeline.plugin(SnapshotPlugin::with_output_dir(&debug_dir));
    }
    let ctx = pipeline
        .run(project.config().generate.clone(), project.model().clone())
        .wrap_err("Pipeline failed")?;
    debug!(
        errors = ctx.error_count(),
        warnings = ctx.warning_count(),
        "pass finished"
    );

    let generator = Generator::from_context(&ctx).wrap_err("Rendering failed")?;
    let diagnostics = ctx
        .diagnostics
        .iter()
        .chain(generator.diagnostics())
        .cloned()
        .collect();

    let result = if opts.dry_run {
        GenerationResult::Preview(PreviewResult {
            files: generator.preview()?,
        })
    } else {
        let written = generator
            .generate(opts.output_dir)
            .wrap_err("Failed to write generated files")?;
        info!(
            output = %opts.output_dir.display(),
            written = written.written(),
            "generation finished"
        );
        GenerationResult::Written(WrittenResult {
            output_dir: opts.output_dir.to_path_buf(),
            created: written.created,
            updated: written.updated,
            unchanged: written.unchanged.len(),
            debug_dir: opts.visualize.then_some(debug_dir),
        })
    };

    Ok(GenerateReport {
        declarations: generator.declarations().declarations().len(),
        adapters: generator.adapters().len(),
        diagnostics,
        result,
    })
}
