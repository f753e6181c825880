//! Resolve phase - builds the type graph of the declaration closure.

use eyre::Result;
use tracing::debug;

use crate::{
    pipeline::{CompilationContext, Phase},
    resolve::TypeModelReader,
};

/// Phase that resolves the declaration candidates into a [`TypeGraph`].
///
/// This phase must run after `DiscoverPhase`. A reference the model cannot
/// satisfy inside the allow-list aborts the pass.
///
/// [`TypeGraph`]: glot_ir::TypeGraph
pub struct ResolvePhase;

impl Phase for ResolvePhase {
    fn name(&self) -> &'static str {
        "resolve"
    }

    fn description(&self) -> &'static str {
        "Resolve the transitive type closure of the declaration roots"
    }

    fn run(&self, ctx: &mut CompilationContext) -> Result<()> {
        let roots = &ctx.candidates()?.declarations;
        let graph =
            TypeModelReader::new(&ctx.model, &ctx.config.allow).resolve(roots.iter())?;

        debug!(types = graph.len(), "resolved closure");
        ctx.graph = Some(graph);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use glot_model::Config;

    use super::*;
    use crate::pipeline::{PassError, phases::DiscoverPhase};

    fn context(model: &str) -> CompilationContext {
        let config: Config = r#"
            [generate]
            models = ["m.toml"]
            allow = ["org.x"]
        "#
        .parse()
        .unwrap();
        CompilationContext::new(config.generate, model.parse().unwrap())
    }

    #[test]
    fn test_requires_discovery() {
        let mut ctx = context("");
        assert!(ResolvePhase.run(&mut ctx).is_err());
        assert!(ctx.graph.is_none());
    }

    #[test]
    fn test_closure_from_candidates() {
        let mut ctx = context(
            r#"
            [[types]]
            name = "org.x.Root"
            annotations = ["GeneratePolyglot"]
            members = [{ name = "leaf", type = "org.x.Leaf" }]

            [[types]]
            name = "org.x.Leaf"
            "#,
        );
        DiscoverPhase.run(&mut ctx).unwrap();
        ResolvePhase.run(&mut ctx).unwrap();

        let graph = ctx.graph().unwrap();
        assert_eq!(graph.get("org.x.Root").unwrap().index, 0);
        assert_eq!(graph.get("org.x.Leaf").unwrap().index, 1);
    }

    #[test]
    fn test_unknown_variant_is_fatal() {
        let mut ctx = context(
            r#"
            [[types]]
            name = "org.x.Shape"
            annotations = ["GeneratePolyglot"]
            closed = true
            variants = ["org.x.Circle"]
            "#,
        );
        DiscoverPhase.run(&mut ctx).unwrap();
        let err = ResolvePhase.run(&mut ctx).unwrap_err();

        assert_eq!(
            err.downcast_ref::<PassError>(),
            Some(&PassError::UnknownVariant {
                owner: "org.x.Shape".into(),
                variant: "org.x.Circle".into(),
            })
        );
    }
}
