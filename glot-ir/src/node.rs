//! Resolved type nodes.

use serde::{Deserialize, Serialize};

use crate::TypeRef;

/// Kind of host type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeKind {
    Interface,
    Class,
    Enum,
}

/// Declaration-site variance of a generic parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variance {
    /// Contravariant (consumer) position.
    In,
    /// Covariant (producer) position.
    Out,
}

impl Variance {
    pub fn as_str(&self) -> &'static str {
        match self {
            Variance::In => "in",
            Variance::Out => "out",
        }
    }
}

/// A generic type parameter: constrained when it has a bound.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenericParam {
    pub name: String,
    pub bound: Option<TypeRef>,
    pub variance: Option<Variance>,
}

impl GenericParam {
    pub fn unbounded(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            bound: None,
            variance: None,
        }
    }

    pub fn bounded(name: impl Into<String>, bound: TypeRef) -> Self {
        Self {
            name: name.into(),
            bound: Some(bound),
            variance: None,
        }
    }
}

/// A method parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Param {
    pub name: String,
    pub ty: TypeRef,
    pub nullable: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum MemberKind {
    Field,
    Method {
        params: Vec<Param>,
        generics: Vec<GenericParam>,
    },
}

/// A declared member. For methods `ty` is the return type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Member {
    pub name: String,
    pub kind: MemberKind,
    pub ty: TypeRef,
    pub nullable: bool,
    /// "default" member: may be absent on an implementation.
    pub optional: bool,
    pub doc: Option<String>,
}

impl Member {
    pub fn field(name: impl Into<String>, ty: TypeRef) -> Self {
        Self {
            name: name.into(),
            kind: MemberKind::Field,
            ty,
            nullable: false,
            optional: false,
            doc: None,
        }
    }

    pub fn is_method(&self) -> bool {
        matches!(self.kind, MemberKind::Method { .. })
    }

    /// Identity used when merging member sets: fields by name, methods by
    /// name and arity so overloads stay distinct.
    pub fn key(&self) -> String {
        match &self.kind {
            MemberKind::Field => self.name.clone(),
            MemberKind::Method { params, .. } => format!("{}/{}", self.name, params.len()),
        }
    }

    /// Every type this member's signature mentions.
    pub fn type_refs(&self) -> Vec<&TypeRef> {
        let mut refs = vec![&self.ty];
        if let MemberKind::Method { params, generics } = &self.kind {
            refs.extend(params.iter().map(|p| &p.ty));
            refs.extend(generics.iter().filter_map(|g| g.bound.as_ref()));
        }
        refs
    }
}

/// One entry in the resolved host type graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TypeNode {
    pub name: String,
    pub kind: TypeKind,
    pub doc: Option<String>,
    pub generics: Vec<GenericParam>,
    pub members: Vec<Member>,
    pub supertypes: Vec<TypeRef>,
    /// Qualified names of public nested children.
    pub nested: Vec<String>,
    /// Qualified names of the variants of a closed type.
    pub variants: Vec<String>,
    pub constants: Vec<String>,
    /// Breadth-first discovery index within the pass.
    pub index: usize,
}

impl TypeNode {
    pub fn new(name: impl Into<String>, kind: TypeKind) -> Self {
        Self {
            name: name.into(),
            kind,
            doc: None,
            generics: Vec::new(),
            members: Vec::new(),
            supertypes: Vec::new(),
            nested: Vec::new(),
            variants: Vec::new(),
            constants: Vec::new(),
            index: 0,
        }
    }

    /// A closed polymorphic type with a fixed set of variants.
    pub fn is_closed(&self) -> bool {
        !self.variants.is_empty()
    }

    pub fn is_enum(&self) -> bool {
        self.kind == TypeKind::Enum
    }

    /// Qualified names of the direct supertypes that are in the graph.
    pub fn supertype_names(&self) -> impl Iterator<Item = &str> {
        self.supertypes.iter().filter_map(TypeRef::as_named)
    }

    /// Qualified names of every graph type this node depends on: supertypes,
    /// member signatures, generic bounds and closed variants.
    pub fn dependencies(&self) -> Vec<&str> {
        let mut out = Vec::new();
        for ty in &self.supertypes {
            ty.collect_named(&mut out);
        }
        for bound in self.generics.iter().filter_map(|g| g.bound.as_ref()) {
            bound.collect_named(&mut out);
        }
        for member in &self.members {
            for ty in member.type_refs() {
                ty.collect_named(&mut out);
            }
        }
        out.extend(self.variants.iter().map(String::as_str));

        let mut seen = std::collections::HashSet::new();
        out.retain(|name| *name != self.name && seen.insert(*name));
        out
    }
}
