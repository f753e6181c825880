//! Check operation - a full pass that renders nothing to disk.

use eyre::{Context, Result};
use glot_codegen::pipeline::Pipeline;
use glot_codegen_typescript::Generator;
use glot_model::Project;

use crate::reports::CheckReport;

/// Execute the check operation.
///
/// Runs the pipeline and renders in memory, so that emitter failures are
/// reported too, then returns every diagnostic.
pub fn check(project: &Project) -> Result<CheckReport> {
    let ctx = Pipeline::new()
        .run(project.config().generate.clone(), project.model().clone())
        .wrap_err("Validation failed")?;
    let generator = Generator::from_context(&ctx).wrap_err("Validation failed")?;

    Ok(CheckReport {
        config_path: project.path().to_path_buf(),
        diagnostics: ctx
            .diagnostics
            .iter()
            .chain(generator.diagnostics())
            .cloned()
            .collect(),
    })
}
