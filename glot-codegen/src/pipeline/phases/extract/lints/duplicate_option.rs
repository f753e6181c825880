//! Lint for duplicate option names.

use super::super::{Lint, LintContext, RecipeDraft};
use crate::pipeline::Diagnostic;

/// Lint that rejects options declared twice by the fields of a recipe, or
/// twice within one constructor.
pub struct DuplicateOptionLint;

impl Lint for DuplicateOptionLint {
    fn name(&self) -> &'static str {
        "duplicate-option"
    }

    fn description(&self) -> &'static str {
        "Require option names to be unique within a recipe"
    }

    fn check(&self, recipe: &RecipeDraft, _cx: &LintContext<'_>, diagnostics: &mut Vec<Diagnostic>) {
        for name in &recipe.duplicates {
            diagnostics.push(self.error(recipe, format!("option '{name}' is declared more than once")));
        }
    }
}
