//! Structural member sets.
//!
//! Some emission styles cannot refer to a supertype by name: a flattened
//! interface repeats everything it inherits, and a variant of a closed type
//! cannot extend the union it belongs to. Both inline members computed here,
//! with the supertype's type arguments substituted for its parameters.

use std::collections::HashMap;

use glot_ir::{Member, MemberKind, Param, TypeGraph, TypeNode, TypeRef, Wildcard};
use indexmap::IndexMap;

/// Two inherited members with the same key but different signatures.
/// The first one reached in supertype order is kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberConflict {
    pub key: String,
    pub kept: String,
    pub dropped: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemberSet {
    pub members: Vec<Member>,
    pub conflicts: Vec<MemberConflict>,
}

type Bindings = HashMap<String, TypeRef>;

/// Every member of `node`, inherited ones included: supertype members in
/// supertype order, then own members, overriding by key.
pub fn structural_members(graph: &TypeGraph, node: &TypeNode) -> MemberSet {
    let mut conflicts = Vec::new();
    let members = collect(graph, node, &Bindings::new(), &mut Vec::new(), &mut conflicts);
    MemberSet {
        members: members.into_values().map(|(member, _)| member).collect(),
        conflicts,
    }
}

/// Members a variant inlines from its closed supertypes, followed by its own
/// members. Open supertypes are left out; they are still referenced by name.
pub fn variant_members(graph: &TypeGraph, node: &TypeNode) -> MemberSet {
    let mut conflicts = Vec::new();
    let mut visiting = vec![node.name.clone()];
    let mut merged: IndexMap<String, (Member, String)> = IndexMap::new();

    for (parent, bindings) in supertypes(graph, node, &Bindings::new()) {
        if parent.is_closed() {
            let inherited = collect(graph, parent, &bindings, &mut visiting, &mut conflicts);
            merge(&mut merged, inherited, &mut conflicts);
        }
    }
    for member in &node.members {
        merged.insert(member.key(), (member.clone(), node.name.clone()));
    }

    MemberSet {
        members: merged.into_values().map(|(member, _)| member).collect(),
        conflicts,
    }
}

fn collect(
    graph: &TypeGraph,
    node: &TypeNode,
    bindings: &Bindings,
    visiting: &mut Vec<String>,
    conflicts: &mut Vec<MemberConflict>,
) -> IndexMap<String, (Member, String)> {
    let mut merged = IndexMap::new();
    if visiting.contains(&node.name) {
        return merged;
    }
    visiting.push(node.name.clone());

    for (parent, parent_bindings) in supertypes(graph, node, bindings) {
        let inherited = collect(graph, parent, &parent_bindings, visiting, conflicts);
        merge(&mut merged, inherited, conflicts);
    }
    for member in &node.members {
        merged.insert(
            member.key(),
            (substitute_member(member, bindings), node.name.clone()),
        );
    }

    visiting.pop();
    merged
}

fn merge(
    into: &mut IndexMap<String, (Member, String)>,
    inherited: IndexMap<String, (Member, String)>,
    conflicts: &mut Vec<MemberConflict>,
) {
    for (key, (member, origin)) in inherited {
        match into.get(&key) {
            Some((existing, kept)) if *existing != member => conflicts.push(MemberConflict {
                key,
                kept: kept.clone(),
                dropped: origin,
            }),
            Some(_) => {}
            None => {
                into.insert(key, (member, origin));
            }
        }
    }
}

/// Resolved supertypes of `node` with the bindings their parameters receive.
fn supertypes<'g>(
    graph: &'g TypeGraph,
    node: &TypeNode,
    bindings: &Bindings,
) -> Vec<(&'g TypeNode, Bindings)> {
    node.supertypes
        .iter()
        .filter_map(|supertype| match supertype {
            TypeRef::Named { name, args } => graph.get(name).map(|parent| {
                let parent_bindings = parent
                    .generics
                    .iter()
                    .zip(args)
                    .map(|(param, arg)| (param.name.clone(), substitute(arg, bindings)))
                    .collect();
                (parent, parent_bindings)
            }),
            _ => None,
        })
        .collect()
}

fn substitute_member(member: &Member, bindings: &Bindings) -> Member {
    match &member.kind {
        MemberKind::Field => Member {
            ty: substitute(&member.ty, bindings),
            ..member.clone()
        },
        MemberKind::Method { params, generics } => {
            // Method type parameters shadow the enclosing ones
            let mut scoped = bindings.clone();
            for generic in generics {
                scoped.remove(&generic.name);
            }
            let generics = generics
                .iter()
                .map(|g| glot_ir::GenericParam {
                    bound: g.bound.as_ref().map(|b| substitute(b, &scoped)),
                    ..g.clone()
                })
                .collect();
            let params = params
                .iter()
                .map(|p| Param {
                    ty: substitute(&p.ty, &scoped),
                    ..p.clone()
                })
                .collect();
            Member {
                kind: MemberKind::Method { params, generics },
                ty: substitute(&member.ty, &scoped),
                ..member.clone()
            }
        }
    }
}

/// Replace type variables bound in `bindings`.
pub fn substitute(ty: &TypeRef, bindings: &HashMap<String, TypeRef>) -> TypeRef {
    if bindings.is_empty() {
        return ty.clone();
    }
    let boxed = |inner: &TypeRef| Box::new(substitute(inner, bindings));
    match ty {
        TypeRef::Var { name } => bindings.get(name).cloned().unwrap_or_else(|| ty.clone()),
        TypeRef::Named { name, args } => TypeRef::Named {
            name: name.clone(),
            args: args.iter().map(|a| substitute(a, bindings)).collect(),
        },
        TypeRef::Array { element } => TypeRef::Array {
            element: boxed(element),
        },
        TypeRef::Set { element } => TypeRef::Set {
            element: boxed(element),
        },
        TypeRef::Map { key, value } => TypeRef::Map {
            key: boxed(key),
            value: boxed(value),
        },
        TypeRef::Optional { inner } => TypeRef::Optional {
            inner: boxed(inner),
        },
        TypeRef::Wildcard { wildcard } => TypeRef::Wildcard {
            wildcard: match wildcard {
                Wildcard::Any => Wildcard::Any,
                Wildcard::Extends(bound) => Wildcard::Extends(boxed(bound)),
                Wildcard::Super(bound) => Wildcard::Super(boxed(bound)),
            },
        },
        TypeRef::Primitive { .. } | TypeRef::Unknown => ty.clone(),
    }
}

#[cfg(test)]
mod tests {
    use glot_ir::{GenericParam, Primitive, TypeKind};

    use super::*;

    fn string() -> TypeRef {
        TypeRef::primitive(Primitive::String)
    }

    fn graph(nodes: Vec<TypeNode>) -> TypeGraph {
        let mut graph = TypeGraph::new();
        for node in nodes {
            graph.insert(node);
        }
        graph
    }

    fn names(set: &MemberSet) -> Vec<&str> {
        set.members.iter().map(|m| m.name.as_str()).collect()
    }

    #[test]
    fn test_inherited_members_are_substituted() {
        let mut holder = TypeNode::new("a.Holder", TypeKind::Interface);
        holder.generics = vec![GenericParam::unbounded("T")];
        holder.members = vec![
            Member::field("value", TypeRef::var("T")),
            Member::field("all", TypeRef::array(TypeRef::var("T"))),
        ];

        let mut names_node = TypeNode::new("a.Names", TypeKind::Interface);
        names_node.supertypes = vec![TypeRef::named("a.Holder", vec![string()])];
        names_node.members = vec![Member::field("count", TypeRef::primitive(Primitive::Number))];

        let graph = graph(vec![holder, names_node]);
        let set = structural_members(&graph, graph.get("a.Names").unwrap());

        assert_eq!(names(&set), vec!["value", "all", "count"]);
        assert_eq!(set.members[0].ty, string());
        assert_eq!(set.members[1].ty, TypeRef::array(string()));
        assert!(set.conflicts.is_empty());
    }

    #[test]
    fn test_method_generics_shadow_type_parameters() {
        let mut holder = TypeNode::new("a.Holder", TypeKind::Interface);
        holder.generics = vec![GenericParam::unbounded("T")];
        holder.members = vec![Member {
            kind: MemberKind::Method {
                params: vec![],
                generics: vec![GenericParam::unbounded("T")],
            },
            ..Member::field("convert", TypeRef::var("T"))
        }];

        let mut names_node = TypeNode::new("a.Names", TypeKind::Interface);
        names_node.supertypes = vec![TypeRef::named("a.Holder", vec![string()])];

        let graph = graph(vec![holder, names_node]);
        let set = structural_members(&graph, graph.get("a.Names").unwrap());

        assert_eq!(set.members[0].ty, TypeRef::var("T"));
    }

    #[test]
    fn test_own_members_override_in_place() {
        let mut base = TypeNode::new("a.Base", TypeKind::Interface);
        base.members = vec![
            Member::field("id", string()),
            Member::field("name", string()),
        ];
        let mut derived = TypeNode::new("a.Derived", TypeKind::Interface);
        derived.supertypes = vec![TypeRef::named("a.Base", vec![])];
        derived.members = vec![Member::field("id", TypeRef::primitive(Primitive::Number))];

        let graph = graph(vec![base, derived]);
        let set = structural_members(&graph, graph.get("a.Derived").unwrap());

        assert_eq!(names(&set), vec!["id", "name"]);
        assert_eq!(set.members[0].ty, TypeRef::primitive(Primitive::Number));
    }

    #[test]
    fn test_conflicting_inherited_members() {
        let mut left = TypeNode::new("a.Left", TypeKind::Interface);
        left.members = vec![Member::field("id", string())];
        let mut right = TypeNode::new("a.Right", TypeKind::Interface);
        right.members = vec![Member::field("id", TypeRef::primitive(Primitive::Number))];
        let mut both = TypeNode::new("a.Both", TypeKind::Interface);
        both.supertypes = vec![
            TypeRef::named("a.Left", vec![]),
            TypeRef::named("a.Right", vec![]),
        ];

        let graph = graph(vec![left, right, both]);
        let set = structural_members(&graph, graph.get("a.Both").unwrap());

        assert_eq!(set.members, vec![Member::field("id", string())]);
        assert_eq!(
            set.conflicts,
            vec![MemberConflict {
                key: "id".into(),
                kept: "a.Left".into(),
                dropped: "a.Right".into(),
            }]
        );
    }

    #[test]
    fn test_variant_inlines_only_closed_parents() {
        let mut tree = TypeNode::new("a.Tree", TypeKind::Interface);
        tree.members = vec![Member::field("id", string())];
        let mut expr = TypeNode::new("a.Expr", TypeKind::Interface);
        expr.variants = vec!["a.Expr$Literal".into()];
        expr.members = vec![Member::field("prefix", string())];
        let mut literal = TypeNode::new("a.Expr$Literal", TypeKind::Class);
        literal.supertypes = vec![
            TypeRef::named("a.Tree", vec![]),
            TypeRef::named("a.Expr", vec![]),
        ];
        literal.members = vec![Member::field("value", string())];

        let graph = graph(vec![tree, expr, literal]);
        let set = variant_members(&graph, graph.get("a.Expr$Literal").unwrap());

        assert_eq!(names(&set), vec!["prefix", "value"]);
    }
}
