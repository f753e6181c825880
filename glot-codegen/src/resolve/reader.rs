//! Type Model Reader: breadth-first resolution of the type closure.

use std::collections::{HashSet, VecDeque};

use glot_ir::{
    AllowList, GenericParam, Member, MemberKind, Param, TypeGraph, TypeKind, TypeNode, TypeRef,
    Wildcard, enclosing_name,
};
use glot_model::{DeclKind, GenericDecl, Model, TypeDecl, TypeExpr, WildcardExpr};
use tracing::{trace, warn};

use super::builtins::{self, Builtin};
use crate::pipeline::PassError;

/// Methods every host object carries; they never appear in declarations.
const OBJECT_METHODS: &[&str] = &["equals", "hashCode", "toString", "canEqual"];

/// Resolves the transitive closure of a root set against the model.
///
/// Each type is resolved exactly once: the queue is deduplicated by
/// qualified name, and the resulting [`TypeGraph`] is the cache. References
/// outside the allow-list become [`TypeRef::Unknown`]; references inside it
/// that the model does not contain abort the pass.
pub struct TypeModelReader<'m> {
    model: &'m Model,
    allow: &'m AllowList,
    graph: TypeGraph,
    queue: VecDeque<String>,
    queued: HashSet<String>,
    raw_in_progress: HashSet<String>,
}

impl<'m> TypeModelReader<'m> {
    pub fn new(model: &'m Model, allow: &'m AllowList) -> Self {
        Self {
            model,
            allow,
            graph: TypeGraph::new(),
            queue: VecDeque::new(),
            queued: HashSet::new(),
            raw_in_progress: HashSet::new(),
        }
    }

    /// Resolve the closure of `roots`. Roots missing from the model are ignored.
    pub fn resolve<I, S>(mut self, roots: I) -> Result<TypeGraph, PassError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for root in roots {
            self.enqueue(root.as_ref());
        }

        while let Some(name) = self.queue.pop_front() {
            let Some(decl) = self.model.get(&name) else {
                continue;
            };
            let node = self.read_type(decl)?;
            trace!(name = %node.name, members = node.members.len(), "resolved type");
            self.graph.insert(node);
        }

        Ok(self.graph)
    }

    fn enqueue(&mut self, name: &str) {
        if self.queued.insert(name.to_string()) {
            self.queue.push_back(name.to_string());
        }
    }

    fn read_type(&mut self, decl: &'m TypeDecl) -> Result<TypeNode, PassError> {
        let name = decl.name();
        let mut scope = self.enclosing_generics(name);
        scope.extend(decl.generics.iter().map(|g| g.name.clone()));

        let kind = match decl.kind {
            DeclKind::Interface => TypeKind::Interface,
            DeclKind::Class => TypeKind::Class,
            DeclKind::Enum => TypeKind::Enum,
        };
        let mut node = TypeNode::new(name, kind);
        node.doc = decl.doc.clone();
        node.constants = decl.constants.clone();
        node.generics = self.read_generics(&decl.generics, &scope, name)?;

        let supertype_path = format!("{name} (supertype)");
        for supertype in &decl.supertypes {
            let ty = self.resolve_expr(supertype, &scope, &supertype_path)?;
            // A supertype erased to `unknown` contributes nothing structural
            if ty.as_named().is_some() {
                node.supertypes.push(ty);
            }
        }

        for member in &decl.members {
            if member.is_static
                || !member.visibility.is_api()
                || (member.is_method() && OBJECT_METHODS.contains(&member.name.as_str()))
            {
                continue;
            }

            let path = format!("{name}.{}", member.name);
            let mut member_scope = scope.clone();
            let kind = if member.is_method() {
                member_scope.extend(member.generics.iter().map(|g| g.name.clone()));
                let generics = self.read_generics(&member.generics, &member_scope, &path)?;
                let mut params = Vec::with_capacity(member.params.len());
                for param in &member.params {
                    let param_path = format!("{path}({})", param.name);
                    params.push(Param {
                        name: param.name.clone(),
                        ty: self.resolve_expr(&param.ty, &member_scope, &param_path)?,
                        nullable: param.is_nullable(),
                    });
                }
                MemberKind::Method { params, generics }
            } else {
                MemberKind::Field
            };

            node.members.push(Member {
                name: member.name.clone(),
                kind,
                ty: self.resolve_expr(&member.ty, &member_scope, &path)?,
                nullable: member.is_nullable(),
                optional: member.optional,
                doc: member.doc.clone(),
            });
        }

        for nested in &decl.nested {
            if nested.visibility.is_api() && self.allow.contains(nested.name()) {
                node.nested.push(nested.name().to_string());
                self.enqueue(nested.name());
            }
        }

        if let Some(parent) = enclosing_name(name) {
            if self.model.contains(parent) {
                self.enqueue(parent);
            }
        }

        for variant in &decl.variants {
            let Some(variant_decl) = self.model.get(variant) else {
                return Err(PassError::UnknownVariant {
                    owner: name.to_string(),
                    variant: variant.clone(),
                });
            };
            if !self.allow.contains(variant) || !variant_decl.visibility.is_api() {
                warn!(owner = name, variant = %variant, "dropping variant outside the allow-list");
                continue;
            }
            node.variants.push(variant.clone());
            self.enqueue(variant);
        }

        Ok(node)
    }

    fn read_generics(
        &mut self,
        generics: &[GenericDecl],
        scope: &[String],
        path: &str,
    ) -> Result<Vec<GenericParam>, PassError> {
        generics
            .iter()
            .map(|g| {
                let bound = g
                    .bound
                    .as_ref()
                    .map(|b| self.resolve_expr(b, scope, &format!("{path}<{}>", g.name)))
                    .transpose()?;
                Ok(GenericParam {
                    name: g.name.clone(),
                    bound,
                    variance: g.variance,
                })
            })
            .collect()
    }

    /// Generic parameter names visible from enclosing types, outermost first.
    fn enclosing_generics(&self, name: &str) -> Vec<String> {
        let mut chain = Vec::new();
        let mut current = enclosing_name(name);
        while let Some(parent) = current {
            if let Some(decl) = self.model.get(parent) {
                chain.push(decl);
            }
            current = enclosing_name(parent);
        }
        chain
            .iter()
            .rev()
            .flat_map(|decl| decl.generics.iter().map(|g| g.name.clone()))
            .collect()
    }

    fn resolve_expr(
        &mut self,
        expr: &TypeExpr,
        scope: &[String],
        path: &str,
    ) -> Result<TypeRef, PassError> {
        match expr {
            TypeExpr::Wildcard(wildcard) => {
                let wildcard = match wildcard {
                    WildcardExpr::Any => Wildcard::Any,
                    WildcardExpr::Extends(bound) => {
                        Wildcard::Extends(Box::new(self.resolve_expr(bound, scope, path)?))
                    }
                    WildcardExpr::Super(bound) => {
                        Wildcard::Super(Box::new(self.resolve_expr(bound, scope, path)?))
                    }
                };
                Ok(TypeRef::Wildcard { wildcard })
            }
            TypeExpr::Array(element) => Ok(TypeRef::array(self.resolve_expr(element, scope, path)?)),
            TypeExpr::Named { name, args } => self.resolve_named(name, args, scope, path),
        }
    }

    fn resolve_named(
        &mut self,
        name: &str,
        args: &[TypeExpr],
        scope: &[String],
        path: &str,
    ) -> Result<TypeRef, PassError> {
        if args.is_empty() && scope.iter().any(|var| var == name) {
            return Ok(TypeRef::var(name));
        }

        if let Some(builtin) = builtins::lookup(name) {
            let args = self.resolve_args(args, scope, path)?;
            let arg = |i: usize| Box::new(args.get(i).cloned().unwrap_or(TypeRef::Unknown));
            return Ok(match builtin {
                Builtin::Primitive(primitive) => TypeRef::primitive(primitive),
                Builtin::Unknown => TypeRef::Unknown,
                Builtin::Array => TypeRef::Array { element: arg(0) },
                Builtin::Set => TypeRef::Set { element: arg(0) },
                Builtin::Map => TypeRef::Map {
                    key: arg(0),
                    value: arg(1),
                },
                Builtin::Optional => TypeRef::Optional { inner: arg(0) },
            });
        }

        match self.model.get(name) {
            Some(decl) if self.allow.contains(name) && decl.visibility.is_api() => {
                self.enqueue(name);
                let expected = decl.generics.len();
                if !args.is_empty() && args.len() != expected {
                    return Err(PassError::GenericArity {
                        reference: name.to_string(),
                        path: path.to_string(),
                        expected,
                        found: args.len(),
                    });
                }
                let args = if args.is_empty() {
                    self.raw_arguments(decl)?
                } else {
                    self.resolve_args(args, scope, path)?
                };
                Ok(TypeRef::named(name, args))
            }
            Some(_) => Ok(TypeRef::Unknown),
            None if self.allow.contains(name) => Err(PassError::UnresolvedType {
                reference: name.to_string(),
                path: path.to_string(),
            }),
            None => Ok(TypeRef::Unknown),
        }
    }

    fn resolve_args(
        &mut self,
        args: &[TypeExpr],
        scope: &[String],
        path: &str,
    ) -> Result<Vec<TypeRef>, PassError> {
        args.iter()
            .map(|arg| self.resolve_expr(arg, scope, path))
            .collect()
    }

    /// Arguments for a raw reference: each parameter's bound, or `unknown`
    /// when the parameter is unbounded or its bound mentions type variables.
    fn raw_arguments(&mut self, decl: &'m TypeDecl) -> Result<Vec<TypeRef>, PassError> {
        let name = decl.name();
        if !self.raw_in_progress.insert(name.to_string()) {
            return Ok(vec![TypeRef::Unknown; decl.generics.len()]);
        }

        let mut scope = self.enclosing_generics(name);
        scope.extend(decl.generics.iter().map(|g| g.name.clone()));

        let mut args = Vec::with_capacity(decl.generics.len());
        for generic in &decl.generics {
            let arg = match &generic.bound {
                Some(bound) => {
                    let path = format!("{name}<{}>", generic.name);
                    let ty = self.resolve_expr(bound, &scope, &path)?;
                    if mentions_var(&ty) { TypeRef::Unknown } else { ty }
                }
                None => TypeRef::Unknown,
            };
            args.push(arg);
        }

        self.raw_in_progress.remove(name);
        Ok(args)
    }
}

fn mentions_var(ty: &TypeRef) -> bool {
    match ty {
        TypeRef::Var { .. } => true,
        TypeRef::Named { args, .. } => args.iter().any(mentions_var),
        TypeRef::Array { element } | TypeRef::Set { element } => mentions_var(element),
        TypeRef::Optional { inner } => mentions_var(inner),
        TypeRef::Map { key, value } => mentions_var(key) || mentions_var(value),
        TypeRef::Wildcard { wildcard } => match wildcard {
            Wildcard::Any => false,
            Wildcard::Extends(bound) | Wildcard::Super(bound) => mentions_var(bound),
        },
        TypeRef::Primitive { .. } | TypeRef::Unknown => false,
    }
}
