//! Extract phase - builds recipe schemas.

mod draft;
mod lint;
pub mod lints;

pub use draft::{DraftOption, DraftVisitor, RecipeDraft, option_type};
use eyre::Result;
pub use lint::{Lint, LintContext, LintInfo};
pub use lints::{
    DuplicateOptionLint, EmptyOptionDescriptionLint, OptionTypeLint, RecipeMetadataLint,
    RequiredExampleLint, VisitorTargetLint,
};
use tracing::{debug, warn};

use crate::pipeline::{CompilationContext, Diagnostic, Phase};

/// Phase that turns recipe candidates into [`RecipeSchema`]s.
///
/// Every recipe is checked by every lint. A recipe with an error diagnostic
/// is skipped; the others proceed, so one broken recipe never blocks its
/// siblings. Must run after `ResolvePhase`.
///
/// [`RecipeSchema`]: glot_ir::RecipeSchema
pub struct ExtractPhase {
    lints: Vec<Box<dyn Lint>>,
}

impl ExtractPhase {
    /// Create a new extract phase with the default lints.
    pub fn new() -> Self {
        Self {
            lints: vec![
                Box::new(RecipeMetadataLint),
                Box::new(DuplicateOptionLint),
                Box::new(RequiredExampleLint),
                Box::new(OptionTypeLint),
                Box::new(VisitorTargetLint),
                Box::new(EmptyOptionDescriptionLint),
            ],
        }
    }

    /// Create an extract phase with no lints.
    pub fn empty() -> Self {
        Self { lints: Vec::new() }
    }

    /// Add a custom lint.
    pub fn with_lint(mut self, lint: impl Lint + 'static) -> Self {
        self.lints.push(Box::new(lint));
        self
    }

    /// Information about every lint that will be run.
    pub fn lint_info(&self) -> Vec<LintInfo> {
        self.lints.iter().map(|l| l.info()).collect()
    }
}

impl Default for ExtractPhase {
    fn default() -> Self {
        Self::new()
    }
}

impl Phase for ExtractPhase {
    fn name(&self) -> &'static str {
        "extract"
    }

    fn description(&self) -> &'static str {
        "Build recipe schemas, skipping recipes that break a rule"
    }

    fn run(&self, ctx: &mut CompilationContext) -> Result<()> {
        let cx = LintContext {
            model: &ctx.model,
            graph: ctx.graph()?,
        };

        let mut recipes = Vec::new();
        let mut diagnostics = Vec::new();
        for name in &ctx.candidates()?.recipes {
            let Some(decl) = ctx.model.get(name) else {
                continue;
            };
            let draft = RecipeDraft::from_decl(decl);

            let mut found = Vec::new();
            for lint in &self.lints {
                lint.check(&draft, &cx, &mut found);
            }
            let failed = found.iter().any(|d| d.severity.is_error());
            diagnostics.extend(found);
            if failed {
                warn!(recipe = %name, "skipping recipe");
                continue;
            }

            match draft.to_schema(&cx) {
                Ok(schema) => recipes.push(schema),
                Err(detail) => diagnostics.push(
                    Diagnostic::error(self.name(), detail)
                        .at(name.clone())
                        .rule("option-type"),
                ),
            }
        }

        debug!(recipes = recipes.len(), "extracted recipe schemas");
        for diagnostic in diagnostics {
            ctx.add_diagnostic(diagnostic);
        }
        ctx.recipes = recipes;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use glot_model::Config;

    use super::*;
    use crate::pipeline::phases::{DiscoverPhase, ResolvePhase};

    fn run(phase: ExtractPhase, model: &str) -> CompilationContext {
        let config: Config = r#"
            [generate]
            models = ["m.toml"]
            allow = ["org.x"]
        "#
        .parse()
        .unwrap();
        let mut ctx = CompilationContext::new(config.generate, model.parse().unwrap());
        DiscoverPhase.run(&mut ctx).unwrap();
        ResolvePhase.run(&mut ctx).unwrap();
        phase.run(&mut ctx).unwrap();
        ctx
    }

    fn recipe(name: &str, option: &str) -> String {
        format!(
            r#"
            [[types]]
            name = "org.x.{name}"
            kind = "class"
            annotations = [{{ name = "Recipe", args = {{ display_name = "{name}", description = "Does {name}." }} }}]

            [[types.members]]
            name = "{option}"
            type = "String"
            annotations = [{{ name = "Option", args = {{ description = "An option.", example = "x" }} }}]
            "#
        )
    }

    #[test]
    fn test_one_broken_recipe_is_isolated() {
        let mut model = String::new();
        for name in ["First", "Second", "Third"] {
            model.push_str(&recipe(name, "pattern"));
        }
        model.push_str(
            r#"
            [[types.members]]
            name = "pattern"
            type = "String"
            annotations = [{ name = "Option", args = { description = "Again.", example = "y" } }]
            "#,
        );

        let ctx = run(ExtractPhase::new(), &model);

        let names: Vec<_> = ctx.recipes.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["org.x.First", "org.x.Second"]);

        let errors: Vec<_> = ctx.errors().collect();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].location.as_deref(), Some("org.x.Third"));
        assert_eq!(errors[0].rule.as_deref(), Some("duplicate-option"));
        assert!(errors[0].message.contains("'pattern'"));
    }

    #[test]
    fn test_visitor_subtypes_from_closure() {
        let ctx = run(
            ExtractPhase::new(),
            r#"
            [[types]]
            name = "org.x.J"
            annotations = ["GeneratePolyglot"]

            [[types]]
            name = "org.x.J$Literal"
            supertypes = ["org.x.J"]
            annotations = ["GeneratePolyglot"]

            [[types]]
            name = "org.x.Finder"
            kind = "class"
            annotations = [
                { name = "Recipe", args = { display_name = "Finder", description = "Finds." } },
                { name = "Visitor", args = { target = "org.x.J" } },
            ]
            "#,
        );

        let visitor = ctx.recipes[0].visitor.as_ref().unwrap();
        assert_eq!(visitor.target, "org.x.J");
        assert_eq!(visitor.subtypes, vec!["org.x.J$Literal"]);
    }

    #[test]
    fn test_warnings_keep_the_recipe() {
        let mut phase = ExtractPhase::empty().with_lint(EmptyOptionDescriptionLint);
        phase = phase.with_lint(RecipeMetadataLint);
        let ctx = run(
            phase,
            r#"
            [[types]]
            name = "org.x.R"
            kind = "class"
            annotations = [{ name = "Recipe", args = { display_name = "R", description = "Does R." } }]
            members = [{ name = "a", type = "String", annotations = [{ name = "Option", args = { example = "x" } }] }]
            "#,
        );

        assert_eq!(ctx.recipes.len(), 1);
        assert!(ctx.has_warnings());
        assert!(!ctx.has_errors());
    }

    #[test]
    fn test_lint_info() {
        let names: Vec<_> = ExtractPhase::new().lint_info().iter().map(|l| l.name).collect();
        assert_eq!(
            names,
            vec![
                "recipe-metadata",
                "duplicate-option",
                "required-example",
                "option-type",
                "visitor-target",
                "empty-option-description",
            ]
        );
    }
}
