//! Lint for empty option descriptions.

use super::super::{Lint, LintContext, RecipeDraft};
use crate::pipeline::Diagnostic;

/// Lint that warns about options missing descriptions.
pub struct EmptyOptionDescriptionLint;

impl Lint for EmptyOptionDescriptionLint {
    fn name(&self) -> &'static str {
        "empty-option-description"
    }

    fn description(&self) -> &'static str {
        "Warn about options without a description"
    }

    fn check(&self, recipe: &RecipeDraft, _cx: &LintContext<'_>, diagnostics: &mut Vec<Diagnostic>) {
        for option in &recipe.options {
            if option.description.as_deref().is_none_or(|d| d.trim().is_empty()) {
                diagnostics.push(
                    self.warning(recipe, format!("option '{}' has no description", option.name)),
                );
            }
        }
    }
}
