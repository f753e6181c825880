//! TypeScript file generators.

mod adapter_ts;
mod declarations_dts;
mod runtime_ts;

pub use adapter_ts::AdapterTs;
pub use declarations_dts::DeclarationsDts;
pub use runtime_ts::RuntimeTs;

/// First line of every generated file.
pub const GENERATED_HEADER: &str = "// Generated by glot. Do not edit.";
