//! Type references as they appear in member signatures.

use serde::Serialize;

/// A primitive recognized in every declaration dialect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Primitive {
    Boolean,
    Number,
    String,
    Void,
}

impl Primitive {
    pub fn as_str(&self) -> &'static str {
        match self {
            Primitive::Boolean => "boolean",
            Primitive::Number => "number",
            Primitive::String => "string",
            Primitive::Void => "void",
        }
    }
}

/// A use-site wildcard argument (`?`, `? extends X`, `? super X`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "wildcard", content = "bound", rename_all = "lowercase")]
pub enum Wildcard {
    Any,
    Extends(Box<TypeRef>),
    Super(Box<TypeRef>),
}

/// A resolved reference to a type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "ref", rename_all = "lowercase")]
pub enum TypeRef {
    Primitive { primitive: Primitive },
    /// A type in the resolved graph, keyed by qualified name.
    Named { name: String, args: Vec<TypeRef> },
    /// A generic type variable in scope at the referencing site.
    Var { name: String },
    Array { element: Box<TypeRef> },
    Set { element: Box<TypeRef> },
    Map { key: Box<TypeRef>, value: Box<TypeRef> },
    Optional { inner: Box<TypeRef> },
    Wildcard { wildcard: Wildcard },
    /// Opaque placeholder for types outside the allow-list.
    Unknown,
}

impl TypeRef {
    pub fn primitive(primitive: Primitive) -> Self {
        TypeRef::Primitive { primitive }
    }

    pub fn named(name: impl Into<String>, args: Vec<TypeRef>) -> Self {
        TypeRef::Named {
            name: name.into(),
            args,
        }
    }

    pub fn var(name: impl Into<String>) -> Self {
        TypeRef::Var { name: name.into() }
    }

    pub fn array(element: TypeRef) -> Self {
        TypeRef::Array {
            element: Box::new(element),
        }
    }

    /// Qualified name when this is a reference into the graph.
    pub fn as_named(&self) -> Option<&str> {
        match self {
            TypeRef::Named { name, .. } => Some(name),
            _ => None,
        }
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, TypeRef::Unknown)
    }

    /// Collect every graph type referenced anywhere in this reference.
    pub fn collect_named<'a>(&'a self, out: &mut Vec<&'a str>) {
        match self {
            TypeRef::Named { name, args } => {
                out.push(name);
                for arg in args {
                    arg.collect_named(out);
                }
            }
            TypeRef::Array { element }
            | TypeRef::Set { element }
            | TypeRef::Optional { inner: element } => element.collect_named(out),
            TypeRef::Map { key, value } => {
                key.collect_named(out);
                value.collect_named(out);
            }
            TypeRef::Wildcard { wildcard } => match wildcard {
                Wildcard::Any => {}
                Wildcard::Extends(bound) | Wildcard::Super(bound) => bound.collect_named(out),
            },
            TypeRef::Primitive { .. } | TypeRef::Var { .. } | TypeRef::Unknown => {}
        }
    }
}
