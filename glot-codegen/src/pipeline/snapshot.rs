//! Pipeline snapshot plugin for visualization and debugging.

use std::{
    fs,
    path::{Path, PathBuf},
    sync::RwLock,
};

use eyre::{Result, eyre};
use glot_ir::{DeclarationOrder, RecipeSchema, TypeGraph};
use serde::Serialize;

use super::{CompilationContext, Diagnostic, Plugin, phases::Candidates};

/// The pass state right after one phase.
#[derive(Debug, Clone, Serialize)]
pub struct PhaseSnapshot {
    pub phase: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub candidates: Option<Candidates>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub graph: Option<TypeGraph>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<DeclarationOrder>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub recipes: Vec<RecipeSchema>,

    pub diagnostics: Vec<Diagnostic>,
}

/// A plugin that captures pipeline state after each phase.
///
/// Used by `glot generate --visualize` to dump one JSON file per phase.
pub struct SnapshotPlugin {
    snapshots: RwLock<Vec<PhaseSnapshot>>,
    output_dir: Option<PathBuf>,
}

impl SnapshotPlugin {
    pub fn new() -> Self {
        Self {
            snapshots: RwLock::new(Vec::new()),
            output_dir: None,
        }
    }

    /// Create a snapshot plugin that writes each snapshot as it is taken.
    pub fn with_output_dir(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            snapshots: RwLock::new(Vec::new()),
            output_dir: Some(output_dir.into()),
        }
    }

    /// All snapshots collected so far.
    pub fn snapshots(&self) -> Result<Vec<PhaseSnapshot>> {
        Ok(self
            .snapshots
            .read()
            .map_err(|_| eyre!("snapshot lock poisoned"))?
            .clone())
    }

    fn write_snapshot(dir: &Path, snapshot: &PhaseSnapshot) -> Result<()> {
        fs::create_dir_all(dir)?;
        let json = serde_json::to_string_pretty(snapshot)?;
        fs::write(dir.join(format!("{}.json", snapshot.phase)), json)?;
        Ok(())
    }
}

impl Default for SnapshotPlugin {
    fn default() -> Self {
        Self::new()
    }
}

impl Plugin for SnapshotPlugin {
    fn name(&self) -> &'static str {
        "snapshot"
    }

    fn on_after_phase(&self, phase: &str, ctx: &mut CompilationContext) -> Result<()> {
        let snapshot = PhaseSnapshot {
            phase: phase.to_string(),
            candidates: ctx.candidates.clone(),
            graph: ctx.graph.clone(),
            order: ctx.order.clone(),
            recipes: ctx.recipes.clone(),
            diagnostics: ctx.diagnostics.clone(),
        };

        if let Some(dir) = &self.output_dir {
            Self::write_snapshot(dir, &snapshot)?;
        }

        self.snapshots
            .write()
            .map_err(|_| eyre!("snapshot lock poisoned"))?
            .push(snapshot);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;
    use crate::pipeline::Pipeline;

    #[test]
    fn test_snapshot_per_phase_written_as_json() {
        let temp = TempDir::new().unwrap();
        let config: glot_model::Config = "[generate]\nmodels = [\"m.toml\"]\n".parse().unwrap();
        let model = r#"
            [[types]]
            name = "org.x.Node"
            annotations = ["GeneratePolyglot"]
        "#
        .parse()
        .unwrap();

        Pipeline::new()
            .plugin(SnapshotPlugin::with_output_dir(temp.path()))
            .run(config.generate, model)
            .unwrap();

        for phase in ["discover", "resolve", "order", "extract"] {
            let json = fs::read_to_string(temp.path().join(format!("{phase}.json"))).unwrap();
            let value: serde_json::Value = serde_json::from_str(&json).unwrap();
            assert_eq!(value["phase"], phase);
        }
    }

    #[test]
    fn test_snapshot_plugin_starts_empty() {
        let plugin = SnapshotPlugin::new();
        assert!(plugin.snapshots().unwrap().is_empty());
    }
}
