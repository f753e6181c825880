//! Lint for recipe display names and descriptions.

use super::super::{Lint, LintContext, RecipeDraft};
use crate::pipeline::Diagnostic;

/// Lint that rejects recipes without a display name or description.
pub struct RecipeMetadataLint;

impl Lint for RecipeMetadataLint {
    fn name(&self) -> &'static str {
        "recipe-metadata"
    }

    fn description(&self) -> &'static str {
        "Require a display name and a description on every recipe"
    }

    fn check(&self, recipe: &RecipeDraft, _cx: &LintContext<'_>, diagnostics: &mut Vec<Diagnostic>) {
        let fields = [
            ("display name", &recipe.display_name),
            ("description", &recipe.description),
        ];
        for (label, value) in fields {
            if value.as_deref().is_none_or(|v| v.trim().is_empty()) {
                diagnostics.push(self.error(recipe, format!("recipe has no {label}")));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::phases::lints::testing::check;

    #[test]
    fn test_complete_metadata() {
        let diagnostics = check(
            &RecipeMetadataLint,
            r#"
            [[types]]
            name = "org.x.R"
            annotations = [{ name = "Recipe", args = { display_name = "R", description = "Does R." } }]
            "#,
            &[],
        );
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_missing_metadata() {
        let diagnostics = check(
            &RecipeMetadataLint,
            r#"
            [[types]]
            name = "org.x.R"
            annotations = [{ name = "Recipe", args = { display_name = " " } }]
            "#,
            &[],
        );

        let messages: Vec<_> = diagnostics.iter().map(|d| d.message.as_str()).collect();
        assert_eq!(messages, vec!["recipe has no display name", "recipe has no description"]);
        assert!(diagnostics.iter().all(|d| {
            d.severity.is_error()
                && d.location.as_deref() == Some("org.x.R")
                && d.rule.as_deref() == Some("recipe-metadata")
        }));
    }
}
