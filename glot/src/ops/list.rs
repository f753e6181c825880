//! List operation - candidate discovery only.

use eyre::Result;
use glot_codegen::pipeline::{CompilationContext, Phase, phases::DiscoverPhase};
use glot_model::Project;

use crate::reports::ListReport;

/// Run discovery alone; resolution failures do not hide the candidates.
pub fn list(project: &Project) -> Result<ListReport> {
    let mut ctx =
        CompilationContext::new(project.config().generate.clone(), project.model().clone());
    DiscoverPhase.run(&mut ctx)?;
    let candidates = ctx.candidates()?.clone();

    Ok(ListReport {
        declarations: candidates.declarations,
        recipes: candidates.recipes,
        warnings: ctx.warnings().map(ToString::to_string).collect(),
    })
}
