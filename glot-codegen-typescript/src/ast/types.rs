//! TypeScript type alias, union and intersection builders.

use glot_codegen::builder::{CodeBuilder, CodeFragment, Renderable};

use super::{Member, type_params};

/// Builder for `type Name<G> = <type>;`.
#[derive(Debug, Clone)]
pub struct TypeAlias {
    name: String,
    doc: Option<String>,
    generics: Vec<String>,
    ty: String,
}

impl TypeAlias {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            doc: None,
            generics: Vec::new(),
            ty: ty.into(),
        }
    }

    pub fn doc(mut self, doc: Option<impl Into<String>>) -> Self {
        self.doc = doc.map(Into::into);
        self
    }

    pub fn generics(mut self, generics: Vec<String>) -> Self {
        self.generics = generics;
        self
    }

    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::typescript();
        builder.emit(self);
        builder.build()
    }
}

impl Renderable for TypeAlias {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments = Vec::new();
        if let Some(doc) = &self.doc {
            fragments.push(CodeFragment::jsdoc(doc.clone()));
        }
        fragments.push(CodeFragment::Line(format!(
            "export type {}{} = {};",
            self.name,
            type_params(&self.generics),
            self.ty
        )));
        fragments
    }
}

/// Builder for union type aliases (`type Kind = "a" | "b";`).
///
/// An empty union renders as `never`.
#[derive(Debug, Clone)]
pub struct Union {
    name: String,
    doc: Option<String>,
    generics: Vec<String>,
    variants: Vec<String>,
}

impl Union {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            doc: None,
            generics: Vec::new(),
            variants: Vec::new(),
        }
    }

    pub fn doc(mut self, doc: Option<impl Into<String>>) -> Self {
        self.doc = doc.map(Into::into);
        self
    }

    pub fn generics(mut self, generics: Vec<String>) -> Self {
        self.generics = generics;
        self
    }

    /// Add a type variant.
    pub fn variant(mut self, ty: impl Into<String>) -> Self {
        self.variants.push(ty.into());
        self
    }

    /// Add a string literal variant.
    pub fn literal(self, value: &str) -> Self {
        self.variant(super::quote(value))
    }

    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::typescript();
        builder.emit(self);
        builder.build()
    }

    fn alias(&self) -> TypeAlias {
        let ty = if self.variants.is_empty() {
            "never".to_string()
        } else {
            self.variants.join(" | ")
        };
        TypeAlias {
            name: self.name.clone(),
            doc: self.doc.clone(),
            generics: self.generics.clone(),
            ty,
        }
    }
}

impl Renderable for Union {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        self.alias().to_fragments()
    }
}

/// Builder for `type Name<G> = A & B & { ... };`.
#[derive(Debug, Clone)]
pub struct IntersectionAlias {
    name: String,
    doc: Option<String>,
    generics: Vec<String>,
    parts: Vec<String>,
    members: Vec<Member>,
}

impl IntersectionAlias {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            doc: None,
            generics: Vec::new(),
            parts: Vec::new(),
            members: Vec::new(),
        }
    }

    pub fn doc(mut self, doc: Option<impl Into<String>>) -> Self {
        self.doc = doc.map(Into::into);
        self
    }

    pub fn generics(mut self, generics: Vec<String>) -> Self {
        self.generics = generics;
        self
    }

    pub fn part(mut self, ty: impl Into<String>) -> Self {
        self.parts.push(ty.into());
        self
    }

    pub fn members(mut self, members: impl IntoIterator<Item = Member>) -> Self {
        self.members.extend(members);
        self
    }

    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::typescript();
        builder.emit(self);
        builder.build()
    }
}

impl Renderable for IntersectionAlias {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments = Vec::new();
        if let Some(doc) = &self.doc {
            fragments.push(CodeFragment::jsdoc(doc.clone()));
        }

        let mut prefix = format!(
            "export type {}{} = ",
            self.name,
            type_params(&self.generics)
        );
        for part in &self.parts {
            prefix.push_str(part);
            prefix.push_str(" & ");
        }

        if self.members.is_empty() {
            fragments.push(CodeFragment::Line(format!("{prefix}{{}};")));
        } else {
            fragments.push(CodeFragment::block(
                format!("{prefix}{{"),
                self.members.iter().flat_map(|m| m.to_fragments()).collect(),
                Some("};".to_string()),
            ));
        }
        fragments
    }
}
