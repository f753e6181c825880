//! Host-model snapshot files.
//!
//! A snapshot is the compile-time export of the host type graph: every
//! type with its generics, members, constructors, supertypes and nested
//! types. Multiple snapshot files are merged into one [`Model`].

mod model;
mod parse;

use glot_ir::Variance;
pub use model::Model;
pub use parse::parse_snapshot;
use serde::Deserialize;
use toml::Spanned;

use crate::{
    TypeExpr,
    annotation::{Annotated, Annotation, names},
};

/// Root of one snapshot file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Snapshot {
    #[serde(default)]
    pub types: Vec<TypeDecl>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeclKind {
    #[default]
    Interface,
    Class,
    Enum,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    #[default]
    Public,
    Protected,
    Package,
    Private,
}

impl Visibility {
    /// Visible to code outside the declaring package hierarchy.
    pub fn is_api(&self) -> bool {
        matches!(self, Visibility::Public | Visibility::Protected)
    }
}

/// One host type.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TypeDecl {
    pub name: Spanned<String>,
    #[serde(default)]
    pub kind: DeclKind,
    #[serde(default)]
    pub visibility: Visibility,
    pub doc: Option<String>,
    #[serde(default)]
    pub generics: Vec<GenericDecl>,
    #[serde(default)]
    pub supertypes: Vec<TypeExpr>,
    #[serde(default)]
    pub members: Vec<MemberDecl>,
    #[serde(default)]
    pub constructors: Vec<ConstructorDecl>,
    #[serde(default)]
    pub nested: Vec<TypeDecl>,
    #[serde(default)]
    pub closed: bool,
    #[serde(default)]
    pub variants: Vec<String>,
    #[serde(default)]
    pub constants: Vec<String>,
    #[serde(default)]
    pub annotations: Vec<Annotation>,
}

impl TypeDecl {
    /// Qualified name.
    pub fn name(&self) -> &str {
        self.name.get_ref()
    }

    pub fn is_recipe(&self) -> bool {
        self.has_annotation(names::RECIPE)
    }
}

impl Annotated for TypeDecl {
    fn annotations(&self) -> &[Annotation] {
        &self.annotations
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GenericDecl {
    pub name: String,
    pub bound: Option<TypeExpr>,
    pub variance: Option<Variance>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MemberDeclKind {
    #[default]
    Field,
    Method,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MemberDecl {
    pub name: String,
    #[serde(default)]
    pub kind: MemberDeclKind,
    /// Field type, or return type for methods.
    #[serde(rename = "type")]
    pub ty: TypeExpr,
    #[serde(default)]
    pub nullable: bool,
    #[serde(default)]
    pub optional: bool,
    #[serde(default, rename = "static")]
    pub is_static: bool,
    #[serde(default)]
    pub visibility: Visibility,
    pub doc: Option<String>,
    #[serde(default)]
    pub params: Vec<ParamDecl>,
    #[serde(default)]
    pub generics: Vec<GenericDecl>,
    #[serde(default)]
    pub annotations: Vec<Annotation>,
}

impl MemberDecl {
    pub fn is_nullable(&self) -> bool {
        self.nullable || self.has_annotation(names::NULLABLE)
    }

    pub fn is_method(&self) -> bool {
        self.kind == MemberDeclKind::Method
    }
}

impl Annotated for MemberDecl {
    fn annotations(&self) -> &[Annotation] {
        &self.annotations
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ParamDecl {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: TypeExpr,
    #[serde(default)]
    pub nullable: bool,
    #[serde(default)]
    pub annotations: Vec<Annotation>,
}

impl ParamDecl {
    pub fn is_nullable(&self) -> bool {
        self.nullable || self.has_annotation(names::NULLABLE)
    }
}

impl Annotated for ParamDecl {
    fn annotations(&self) -> &[Annotation] {
        &self.annotations
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConstructorDecl {
    #[serde(default)]
    pub visibility: Visibility,
    #[serde(default)]
    pub params: Vec<ParamDecl>,
}
