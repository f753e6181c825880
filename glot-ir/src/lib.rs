//! Intermediate representation types for glot.
//!
//! This crate provides the data model shared by every stage of a
//! generation pass:
//!
//! ```text
//! snapshot (TOML) → glot-model (parsing) → glot-ir (resolved graph) → codegen
//! ```
//!
//! The IR types are language-agnostic: they describe the host type model
//! after resolution and the recipe schemas extracted from it, plus the
//! rendered artifacts a pass produces.

mod graph;
mod names;
mod node;
mod recipe;
mod types;
mod unit;

pub use graph::{DeclarationOrder, TypeGraph};
pub use names::{AllowList, emitted_path, enclosing_name, simple_name};
pub use node::{GenericParam, Member, MemberKind, Param, TypeKind, TypeNode, Variance};
pub use recipe::{OptionSpec, OptionType, RecipeSchema, VisitorSpec};
pub use types::{Primitive, TypeRef, Wildcard};
pub use unit::{AdapterUnit, Declaration, DeclarationUnit};
