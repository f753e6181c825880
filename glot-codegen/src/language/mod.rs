//! Target-language abstractions.
//!
//! - [`LanguageCodegen`] - renders and writes the artifacts of one pass
//! - [`TypeMapper`] - maps primitive and option types to target type strings
//! - [`NamingConvention`] - target naming rules and reserved words
//! - [`GenerateResult`] - what a write did, per file
//! - [`PreviewFile`] - a rendered artifact that has not been written

mod naming;
mod traits;

pub use naming::NamingConvention;
pub use traits::{GenerateResult, LanguageCodegen, PreviewFile, TypeMapper};
