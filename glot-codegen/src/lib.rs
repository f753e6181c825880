//! Language-agnostic generation pipeline for glot.
//!
//! This crate turns a host [`Model`](glot_model::Model) into the resolved,
//! ordered and validated data the dialect generators render.
//!
//! # Module Organization
//!
//! - [`pipeline`] - Phases, plugins and the compilation context
//! - [`resolve`] - Type Model Reader: the type closure of a pass
//! - [`order`] - Strongly-connected grouping and topological emission order
//! - [`structure`] - Structural member sets with type-argument substitution
//! - [`builder`] - Code generation building blocks (CodeBuilder, CodeFragment, etc.)
//! - [`language`] - Target-language abstractions (LanguageCodegen, TypeMapper, etc.)

pub mod builder;
pub mod language;
pub mod order;
pub mod pipeline;
pub mod resolve;
pub mod structure;
