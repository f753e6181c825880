//! Lint for option types.

use super::super::{Lint, LintContext, RecipeDraft, option_type};
use crate::pipeline::Diagnostic;

/// Lint that rejects options whose type has no scripting representation,
/// including host types outside the declaration closure.
pub struct OptionTypeLint;

impl Lint for OptionTypeLint {
    fn name(&self) -> &'static str {
        "option-type"
    }

    fn description(&self) -> &'static str {
        "Require option types to be scalars, enums, lists or types in the closure"
    }

    fn check(&self, recipe: &RecipeDraft, cx: &LintContext<'_>, diagnostics: &mut Vec<Diagnostic>) {
        for option in &recipe.options {
            if let Err(reason) = option_type(&option.ty, cx) {
                diagnostics.push(self.error(recipe, format!("option '{}': {reason}", option.name)));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::phases::lints::testing::check;

    const MODEL: &str = r#"
        [[types]]
        name = "org.x.R"
        annotations = ["Recipe"]
        members = [
            { name = "tree", type = "org.x.Tree", annotations = ["Option"] },
            { name = "attrs", type = "java.util.Map<String, String>", annotations = ["Option"] },
        ]
    "#;

    #[test]
    fn test_host_type_in_closure() {
        let diagnostics = check(&OptionTypeLint, MODEL, &["org.x.Tree"]);

        assert_eq!(diagnostics.len(), 1);
        assert_eq!(
            diagnostics[0].message,
            "option 'attrs': unsupported option type `java.util.Map<String, String>`"
        );
    }

    #[test]
    fn test_host_type_outside_closure() {
        let diagnostics = check(&OptionTypeLint, MODEL, &[]);

        assert_eq!(diagnostics.len(), 2);
        assert_eq!(
            diagnostics[0].message,
            "option 'tree': host type 'org.x.Tree' is not in the declaration closure"
        );
    }
}
