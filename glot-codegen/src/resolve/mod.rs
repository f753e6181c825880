//! Type Model Reader.
//!
//! Resolves the declaration roots of a pass into a [`TypeGraph`]: the
//! transitive closure over supertypes, member signatures, generic bounds,
//! closed variants and nested types, restricted to the allow-list.
//!
//! [`TypeGraph`]: glot_ir::TypeGraph

mod builtins;
mod reader;

pub use builtins::{Builtin, lookup as lookup_builtin};
pub use reader::TypeModelReader;
