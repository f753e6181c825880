//! Compilation context passed through pipeline phases.

use eyre::{Result, eyre};
use glot_ir::{DeclarationOrder, RecipeSchema, TypeGraph};
use glot_model::{GenerateConfig, Model};

use super::{
    diagnostic::{Diagnostic, Severity},
    phases::Candidates,
};

/// State of one generation pass.
///
/// Owned exclusively by the pass: the model is read-only, and the
/// resolution results are filled in phase by phase.
#[derive(Debug)]
pub struct CompilationContext {
    pub config: GenerateConfig,
    pub model: Model,
    /// Candidate types (populated by DiscoverPhase).
    pub candidates: Option<Candidates>,
    /// Resolved type closure (populated by ResolvePhase).
    pub graph: Option<TypeGraph>,
    /// Emission order (populated by OrderPhase).
    pub order: Option<DeclarationOrder>,
    /// Recipe schemas that passed every rule (populated by ExtractPhase).
    pub recipes: Vec<RecipeSchema>,
    pub diagnostics: Vec<Diagnostic>,
}

impl CompilationContext {
    pub fn new(config: GenerateConfig, model: Model) -> Self {
        Self {
            config,
            model,
            candidates: None,
            graph: None,
            order: None,
            recipes: Vec::new(),
            diagnostics: Vec::new(),
        }
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(|d| d.severity.is_error())
    }

    pub fn has_warnings(&self) -> bool {
        self.diagnostics.iter().any(|d| d.severity.is_warning())
    }

    pub fn error_count(&self) -> usize {
        self.errors().count()
    }

    pub fn warning_count(&self) -> usize {
        self.warnings().count()
    }

    pub fn add_diagnostic(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| matches!(d.severity, Severity::Error))
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| matches!(d.severity, Severity::Warning))
    }

    pub fn candidates(&self) -> Result<&Candidates> {
        self.candidates
            .as_ref()
            .ok_or_else(|| eyre!("candidates not set - did DiscoverPhase run?"))
    }

    pub fn graph(&self) -> Result<&TypeGraph> {
        self.graph
            .as_ref()
            .ok_or_else(|| eyre!("type graph not set - did ResolvePhase run?"))
    }

    pub fn order(&self) -> Result<&DeclarationOrder> {
        self.order
            .as_ref()
            .ok_or_else(|| eyre!("declaration order not set - did OrderPhase run?"))
    }
}
