//! Compilation pipeline for one generation pass.
//!
//! The [`Pipeline`] runs the built-in phases in order
//! (discover → resolve → order → extract), calling plugin hooks around
//! each one. Phases share a [`CompilationContext`]; per-candidate failures
//! become [`Diagnostic`]s while a [`PassError`] aborts the whole pass.
//!
//! # Example
//!
//! ```ignore
//! use glot_codegen::pipeline::Pipeline;
//!
//! let ctx = Pipeline::new().run(config, model)?;
//! for diag in ctx.errors() {
//!     eprintln!("{diag}");
//! }
//! ```

mod context;
mod diagnostic;
mod error;
mod phase;
pub mod phases;
mod plugin;
mod runner;
mod snapshot;

pub use context::CompilationContext;
pub use diagnostic::{Diagnostic, Severity};
pub use error::PassError;
pub use phase::{Phase, PhaseInfo};
pub use plugin::Plugin;
pub use runner::Pipeline;
pub use snapshot::{PhaseSnapshot, SnapshotPlugin};
