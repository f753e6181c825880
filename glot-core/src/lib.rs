//! Core utilities and types for glot.
//!
//! This crate provides the generated-file abstraction and the string
//! helpers shared by every other glot crate.

mod file;
mod utils;

// File operations
pub use file::{FileRules, GeneratedFile, WriteResult};
// String utilities
pub use utils::{to_camel_case, to_kebab_case, to_pascal_case, toml_value_to_string};
