//! TypeScript interface builder.

use glot_codegen::builder::{CodeBuilder, CodeFragment, Renderable};

use super::type_params;

/// A property signature.
#[derive(Debug, Clone, PartialEq)]
pub struct Property {
    pub name: String,
    pub ty: String,
    pub doc: Option<String>,
    pub optional: bool,
    pub readonly: bool,
}

impl Property {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            doc: None,
            optional: false,
            readonly: false,
        }
    }

    pub fn doc(mut self, doc: Option<impl Into<String>>) -> Self {
        self.doc = doc.map(Into::into);
        self
    }

    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    pub fn readonly(mut self) -> Self {
        self.readonly = true;
        self
    }
}

/// A method signature.
#[derive(Debug, Clone, PartialEq)]
pub struct MethodSignature {
    pub name: String,
    /// Rendered type parameters.
    pub generics: Vec<String>,
    /// `(name, type)` pairs.
    pub params: Vec<(String, String)>,
    pub returns: String,
    pub doc: Option<String>,
    pub optional: bool,
}

impl MethodSignature {
    pub fn new(name: impl Into<String>, returns: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            generics: Vec::new(),
            params: Vec::new(),
            returns: returns.into(),
            doc: None,
            optional: false,
        }
    }

    pub fn generic(mut self, param: impl Into<String>) -> Self {
        self.generics.push(param.into());
        self
    }

    pub fn param(mut self, name: impl Into<String>, ty: impl Into<String>) -> Self {
        self.params.push((name.into(), ty.into()));
        self
    }

    pub fn doc(mut self, doc: Option<impl Into<String>>) -> Self {
        self.doc = doc.map(Into::into);
        self
    }

    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }
}

/// One member of an object type.
#[derive(Debug, Clone, PartialEq)]
pub enum Member {
    Property(Property),
    Method(MethodSignature),
}

impl From<Property> for Member {
    fn from(property: Property) -> Self {
        Member::Property(property)
    }
}

impl From<MethodSignature> for Member {
    fn from(method: MethodSignature) -> Self {
        Member::Method(method)
    }
}

impl Member {
    pub fn name(&self) -> &str {
        match self {
            Member::Property(p) => &p.name,
            Member::Method(m) => &m.name,
        }
    }
}

impl Renderable for Member {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let (doc, line) = match self {
            Member::Property(p) => {
                let readonly = if p.readonly { "readonly " } else { "" };
                let optional = if p.optional { "?" } else { "" };
                (&p.doc, format!("{readonly}{}{optional}: {};", p.name, p.ty))
            }
            Member::Method(m) => {
                let optional = if m.optional { "?" } else { "" };
                let params = m
                    .params
                    .iter()
                    .map(|(name, ty)| format!("{name}: {ty}"))
                    .collect::<Vec<_>>()
                    .join(", ");
                (
                    &m.doc,
                    format!(
                        "{}{optional}{}({params}): {};",
                        m.name,
                        type_params(&m.generics),
                        m.returns
                    ),
                )
            }
        };

        let mut fragments = Vec::new();
        if let Some(doc) = doc {
            fragments.push(CodeFragment::jsdoc(doc.clone()));
        }
        fragments.push(CodeFragment::Line(line));
        fragments
    }
}

/// Builder for TypeScript interfaces.
#[derive(Debug, Clone)]
pub struct Interface {
    name: String,
    doc: Option<String>,
    generics: Vec<String>,
    extends: Vec<String>,
    members: Vec<Member>,
}

impl Interface {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            doc: None,
            generics: Vec::new(),
            extends: Vec::new(),
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

    pub fn extends(mut self, ty: impl Into<String>) -> Self {
        self.extends.push(ty.into());
        self
    }

    pub fn member(mut self, member: impl Into<Member>) -> Self {
        self.members.push(member.into());
        self
    }

    pub fn members(mut self, members: impl IntoIterator<Item = Member>) -> Self {
        self.members.extend(members);
        self
    }

    /// Build the interface as a string.
    pub fn build(&self) -> String {
        let mut builder = CodeBuilder::typescript();
        builder.emit(self);
        builder.build()
    }

    fn header(&self) -> String {
        let extends = if self.extends.is_empty() {
            String::new()
        } else {
            format!(" extends {}", self.extends.join(", "))
        };
        format!(
            "export interface {}{}{extends}",
            self.name,
            type_params(&self.generics)
        )
    }
}

impl Renderable for Interface {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments = Vec::new();
        if let Some(doc) = &self.doc {
            fragments.push(CodeFragment::jsdoc(doc.clone()));
        }

        if self.members.is_empty() {
            fragments.push(CodeFragment::Line(format!("{} {{}}", self.header())));
        } else {
            fragments.push(CodeFragment::block(
                format!("{} {{", self.header()),
                self.members.iter().flat_map(|m| m.to_fragments()).collect(),
                Some("}".to_string()),
            ));
        }
        fragments
    }
}
