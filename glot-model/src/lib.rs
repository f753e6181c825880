//! Configuration and host-model snapshot parsing for glot.
//!
//! A project is a `glot.toml` naming one or more snapshot files. Each
//! snapshot describes host types, their members and annotations; the
//! snapshots are merged into one [`Model`] that the generation pipeline
//! reads. Every parse or validation failure is a [`miette`] diagnostic
//! pointing into the offending file.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod annotation;
mod config;
mod error;
mod file;
mod snapshot;
mod type_expr;
mod validate;

pub use annotation::{Annotated, Annotation, names as annotations};
pub use config::{Config, EmitConfig, GenerateConfig, SupertypeStyle, VariancePolicy, parse_config};
pub use error::{Error, Result, SourceContext};
pub use file::Project;
pub use snapshot::{
    ConstructorDecl, DeclKind, GenericDecl, MemberDecl, MemberDeclKind, Model, ParamDecl,
    Snapshot, TypeDecl, Visibility, parse_snapshot,
};
pub use type_expr::{TypeExpr, TypeExprError, WildcardExpr};
