//! TypeScript AST builders for declarations, imports and adapter code.
//!
//! These provide a high-level API for constructing TypeScript syntax,
//! which can then be rendered via CodeBuilder.

mod arrays;
mod consts;
mod fns;
mod imports;
mod interface;
mod namespace;
mod objects;
mod types;

pub use arrays::JsArray;
pub use consts::Const;
pub use fns::{Fn, Param};
pub use imports::Import;
pub use interface::{Interface, Member, MethodSignature, Property};
pub use namespace::Namespace;
pub use objects::JsObject;
pub use types::{IntersectionAlias, TypeAlias, Union};

/// Quote a string as a TypeScript string literal.
pub fn quote(s: &str) -> String {
    serde_json::Value::String(s.to_string()).to_string()
}

/// Render type parameters (`<T extends Node, U>`), or nothing.
pub fn type_params(params: &[String]) -> String {
    if params.is_empty() {
        String::new()
    } else {
        format!("<{}>", params.join(", "))
    }
}
