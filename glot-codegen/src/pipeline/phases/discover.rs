//! Discover phase - finds the candidates of a pass.

use eyre::Result;
use glot_model::{Annotated, TypeDecl};
use serde::Serialize;
use tracing::debug;

use crate::pipeline::{CompilationContext, Diagnostic, Phase};

/// Qualified names selected for generation, in model order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Candidates {
    /// Roots of the declaration closure.
    pub declarations: Vec<String>,
    /// Types carrying the recipe annotation.
    pub recipes: Vec<String>,
}

/// Phase that scans the model for declaration roots and recipes.
///
/// A declaration root is a type carrying the configured marker annotation,
/// or a type assignable to one of the configured roots. Recipes are not
/// roots: their option and visitor types must already be in the closure.
pub struct DiscoverPhase;

impl Phase for DiscoverPhase {
    fn name(&self) -> &'static str {
        "discover"
    }

    fn description(&self) -> &'static str {
        "Find declaration roots and recipe candidates"
    }

    fn run(&self, ctx: &mut CompilationContext) -> Result<()> {
        let mut candidates = Candidates::default();
        let mut diagnostics = Vec::new();

        for root in &ctx.config.roots {
            if !ctx.model.contains(root) {
                diagnostics.push(
                    Diagnostic::warning(self.name(), format!("root type '{root}' is not in the model"))
                        .at(root.clone()),
                );
            }
        }

        for decl in ctx.model.iter() {
            let name = decl.name();
            let is_recipe = decl.is_recipe();
            let is_root = is_declaration_root(decl, ctx);
            if !is_recipe && !is_root {
                continue;
            }

            if !decl.visibility.is_api() {
                diagnostics.push(
                    Diagnostic::warning(self.name(), "skipping type that is not public")
                        .at(name),
                );
                continue;
            }
            if !ctx.config.allow.contains(name) {
                diagnostics.push(
                    Diagnostic::warning(self.name(), "skipping type outside the allow-list")
                        .at(name),
                );
                continue;
            }

            if is_root {
                candidates.declarations.push(name.to_string());
            }
            if is_recipe {
                candidates.recipes.push(name.to_string());
            }
        }

        debug!(
            declarations = candidates.declarations.len(),
            recipes = candidates.recipes.len(),
            "discovered candidates"
        );
        ctx.diagnostics.extend(diagnostics);
        ctx.candidates = Some(candidates);
        Ok(())
    }
}

fn is_declaration_root(decl: &TypeDecl, ctx: &CompilationContext) -> bool {
    decl.has_annotation(&ctx.config.marker)
        || ctx
            .config
            .roots
            .iter()
            .any(|root| ctx.model.is_assignable(decl.name(), root))
}
