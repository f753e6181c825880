//! Built-in pipeline phases.
//!
//! - [`DiscoverPhase`] - finds declaration roots and recipe candidates
//! - [`ResolvePhase`] - resolves the declaration closure into a type graph
//! - [`OrderPhase`] - computes the emission order of the closure
//! - [`ExtractPhase`] - builds recipe schemas, isolating per-recipe failures

mod discover;
mod extract;
mod order;
mod resolve;

pub use discover::{Candidates, DiscoverPhase};
pub use extract::{
    DuplicateOptionLint, EmptyOptionDescriptionLint, ExtractPhase, Lint, LintInfo,
    OptionTypeLint, RecipeDraft, RecipeMetadataLint, RequiredExampleLint, VisitorTargetLint,
    lints,
};
pub use order::OrderPhase;
pub use resolve::ResolvePhase;
