//! Lint trait for recipe schema rules.

use glot_ir::TypeGraph;
use glot_model::Model;

use super::RecipeDraft;
use crate::pipeline::Diagnostic;

/// What a lint may consult besides the recipe itself.
#[derive(Debug, Clone, Copy)]
pub struct LintContext<'a> {
    pub model: &'a Model,
    /// The declaration closure of the pass.
    pub graph: &'a TypeGraph,
}

/// Information about a lint.
#[derive(Debug, Clone)]
pub struct LintInfo {
    pub name: &'static str,
    pub description: &'static str,
}

/// One schema rule checked against every recipe candidate.
///
/// An error diagnostic skips the recipe; warnings leave it in the output.
pub trait Lint: Send + Sync {
    /// The name of this lint, reported as the violated rule.
    fn name(&self) -> &'static str;

    /// A human-readable description of what this lint checks.
    fn description(&self) -> &'static str;

    /// Check one recipe and add any diagnostics.
    fn check(&self, recipe: &RecipeDraft, cx: &LintContext<'_>, diagnostics: &mut Vec<Diagnostic>);

    fn info(&self) -> LintInfo {
        LintInfo {
            name: self.name(),
            description: self.description(),
        }
    }

    /// A diagnostic against `recipe` attributed to this lint.
    fn error(&self, recipe: &RecipeDraft, message: String) -> Diagnostic {
        Diagnostic::error("extract", message)
            .at(recipe.name.clone())
            .rule(self.name())
    }

    fn warning(&self, recipe: &RecipeDraft, message: String) -> Diagnostic {
        Diagnostic::warning("extract", message)
            .at(recipe.name.clone())
            .rule(self.name())
    }
}
