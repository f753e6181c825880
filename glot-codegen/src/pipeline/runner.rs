//! Pipeline orchestrator.

use eyre::Result;
use glot_model::{GenerateConfig, Model};
use tracing::{debug, debug_span};

use super::{
    CompilationContext, Phase, Plugin,
    phases::{DiscoverPhase, ExtractPhase, OrderPhase, ResolvePhase},
};

/// The compilation pipeline orchestrator.
///
/// Runs the built-in phases followed by any user phases, calling plugin
/// hooks before and after each phase.
///
/// ```ignore
/// let pipeline = Pipeline::new()
///     .plugin(SnapshotPlugin::with_output_dir(".glot"))
///     .phase(MyCustomPhase);
///
/// let ctx = pipeline.run(config, model)?;
/// ```
pub struct Pipeline {
    phases: Vec<Box<dyn Phase>>,
    plugins: Vec<Box<dyn Plugin>>,
}

impl Pipeline {
    pub fn new() -> Self {
        Self {
            phases: Vec::new(),
            plugins: Vec::new(),
        }
    }

    /// Add a phase to run after the built-in phases.
    pub fn phase(mut self, phase: impl Phase + 'static) -> Self {
        self.phases.push(Box::new(phase));
        self
    }

    /// Add a plugin to receive phase lifecycle hooks.
    pub fn plugin(mut self, plugin: impl Plugin + 'static) -> Self {
        self.plugins.push(Box::new(plugin));
        self
    }

    /// Run one generation pass over a model.
    ///
    /// # Errors
    ///
    /// Returns an error carrying a [`PassError`](super::PassError) if the
    /// pass must abort. Isolated recipe failures are left in the returned
    /// context's diagnostics.
    pub fn run(&self, config: GenerateConfig, model: Model) -> Result<CompilationContext> {
        let mut ctx = CompilationContext::new(config, model);

        let builtin_phases: Vec<Box<dyn Phase>> = vec![
            Box::new(DiscoverPhase),
            Box::new(ResolvePhase),
            Box::new(OrderPhase),
            Box::new(ExtractPhase::new()),
        ];

        for phase in builtin_phases.iter().chain(self.phases.iter()) {
            self.run_phase(phase.as_ref(), &mut ctx)?;
        }

        Ok(ctx)
    }

    fn run_phase(&self, phase: &dyn Phase, ctx: &mut CompilationContext) -> Result<()> {
        let phase_name = phase.name();
        let _span = debug_span!("phase", name = phase_name).entered();

        for plugin in &self.plugins {
            plugin.on_before_phase(phase_name, ctx)?;
        }

        phase.run(ctx)?;
        debug!(diagnostics = ctx.diagnostics.len(), "phase complete");

        for plugin in &self.plugins {
            plugin.on_after_phase(phase_name, ctx)?;
        }

        Ok(())
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}
