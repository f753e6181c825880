//! Lint for visitor targets.

use super::super::{Lint, LintContext, RecipeDraft};
use crate::pipeline::Diagnostic;

/// Lint that rejects visitors without a target node type, or with a target
/// outside the declaration closure.
pub struct VisitorTargetLint;

impl Lint for VisitorTargetLint {
    fn name(&self) -> &'static str {
        "visitor-target"
    }

    fn description(&self) -> &'static str {
        "Require visitors to target a node type in the declaration closure"
    }

    fn check(&self, recipe: &RecipeDraft, cx: &LintContext<'_>, diagnostics: &mut Vec<Diagnostic>) {
        let Some(visitor) = &recipe.visitor else {
            return;
        };
        match visitor.target.as_deref() {
            None => diagnostics.push(self.error(
                recipe,
                "visitor does not declare a target node type".to_string(),
            )),
            Some(target) if !cx.graph.contains(target) => diagnostics.push(self.error(
                recipe,
                format!("visitor target '{target}' is not in the declaration closure"),
            )),
            Some(_) => {}
        }
    }
}
