//! Order phase - computes the emission order of the closure.

use eyre::Result;
use tracing::debug;

use crate::{
    order::declaration_order,
    pipeline::{CompilationContext, Phase},
};

/// Phase that groups the type graph into strongly-connected components and
/// sorts them topologically.
///
/// Must run after `ResolvePhase`. Inheritance cycles and emitted-name
/// collisions abort the pass.
pub struct OrderPhase;

impl Phase for OrderPhase {
    fn name(&self) -> &'static str {
        "order"
    }

    fn description(&self) -> &'static str {
        "Compute a deterministic topological emission order"
    }

    fn run(&self, ctx: &mut CompilationContext) -> Result<()> {
        let order = declaration_order(ctx.graph()?)?;
        debug!(groups = order.groups.len(), "ordered declarations");
        ctx.order = Some(order);
        Ok(())
    }
}
