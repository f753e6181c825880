//! Lint for required options without an example.

use super::super::{Lint, LintContext, RecipeDraft};
use crate::pipeline::Diagnostic;

/// Lint that rejects required options without a non-empty example.
pub struct RequiredExampleLint;

impl Lint for RequiredExampleLint {
    fn name(&self) -> &'static str {
        "required-example"
    }

    fn description(&self) -> &'static str {
        "Require an example value on every required option"
    }

    fn check(&self, recipe: &RecipeDraft, _cx: &LintContext<'_>, diagnostics: &mut Vec<Diagnostic>) {
        for option in recipe.options.iter().filter(|o| o.is_required() && !o.has_example()) {
            diagnostics.push(self.error(
                recipe,
                format!("required option '{}' has no example", option.name),
            ));
        }
    }
}
