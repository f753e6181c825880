//! Declaration emitter.
//!
//! Renders every type of the resolved closure, in declaration order, as a
//! TypeScript declaration. Nested types live in `export namespace Outer`
//! blocks and are referenced as `Outer.Inner`; closed types become
//! discriminated unions of their variants.

use std::collections::{HashMap, HashSet};

use glot_codegen::{
    builder::{CodeBuilder, Renderable},
    language::TypeMapper,
    pipeline::{Diagnostic, PassError},
    structure::{MemberSet, structural_members, variant_members},
};
use glot_ir::{
    Declaration, DeclarationOrder, DeclarationUnit, GenericParam, Member as IrMember, MemberKind,
    TypeGraph, TypeNode, TypeRef, Wildcard, emitted_path,
};
use glot_model::{EmitConfig, SupertypeStyle, VariancePolicy};
use tracing::{debug, trace};

use crate::{
    ast::{Interface, IntersectionAlias, Member, MethodSignature, Namespace, Property, Union, quote},
    naming::TS_NAMING,
    type_mapper::TypeScriptTypeMapper,
};

const PHASE: &str = "emit";

/// The declaration unit of a pass plus the warnings raised while rendering it.
#[derive(Debug, Clone, Default)]
pub struct EmittedDeclarations {
    pub unit: DeclarationUnit,
    pub diagnostics: Vec<Diagnostic>,
}

impl EmittedDeclarations {
    /// The declaration texts in order, one blank line apart.
    pub fn body(&self) -> String {
        self.unit
            .declarations()
            .iter()
            .map(|d| d.text.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

pub struct DeclarationEmitter<'a> {
    graph: &'a TypeGraph,
    order: &'a DeclarationOrder,
    config: &'a EmitConfig,
    /// Emitted name to qualified name, for shadowing checks.
    emitted: HashMap<String, &'a str>,
}

/// Render state of one declaration.
struct Scope<'a> {
    qualified: &'a str,
    namespace: Vec<&'a str>,
    references: Vec<String>,
    diagnostics: Vec<Diagnostic>,
}

impl<'a> Scope<'a> {
    fn new(qualified: &'a str) -> Self {
        let mut namespace = emitted_path(qualified);
        namespace.pop();
        Self {
            qualified,
            namespace,
            references: Vec::new(),
            diagnostics: Vec::new(),
        }
    }

    fn warn(&mut self, rule: &str, message: String) {
        self.diagnostics.push(
            Diagnostic::warning(PHASE, message)
                .at(self.qualified)
                .rule(rule),
        );
    }
}

impl<'a> DeclarationEmitter<'a> {
    pub fn new(graph: &'a TypeGraph, order: &'a DeclarationOrder, config: &'a EmitConfig) -> Self {
        let emitted = graph
            .iter()
            .map(|node| {
                (
                    TypeScriptTypeMapper::emitted_name(&node.name),
                    node.name.as_str(),
                )
            })
            .collect();
        Self {
            graph,
            order,
            config,
            emitted,
        }
    }

    /// Render the declaration unit.
    ///
    /// Fails the whole pass when a reference cannot be spelled correctly
    /// from inside its namespace.
    pub fn emit(&self) -> Result<EmittedDeclarations, PassError> {
        let mut declarations = Vec::new();
        let mut diagnostics = Vec::new();

        for (group, name) in self.order.iter() {
            let Some(node) = self.graph.get(name) else {
                continue;
            };
            let mut scope = Scope::new(&node.name);
            let body = self.declaration(node, &mut scope)?;
            let wrapped = Namespace::new(scope.namespace.iter().copied()).emit(&body);

            let mut builder = CodeBuilder::typescript();
            builder.emit(&wrapped);
            trace!(name = %node.name, group, "rendered declaration");

            diagnostics.append(&mut scope.diagnostics);
            declarations.push(Declaration {
                qualified: node.name.clone(),
                name: TypeScriptTypeMapper::emitted_name(&node.name),
                group,
                references: scope.references,
                text: builder.build(),
            });
        }

        debug!(declarations = declarations.len(), "emitted declarations");
        Ok(EmittedDeclarations {
            unit: DeclarationUnit::new(declarations),
            diagnostics,
        })
    }

    fn declaration(
        &self,
        node: &TypeNode,
        scope: &mut Scope,
    ) -> Result<Box<dyn Renderable>, PassError> {
        let emitted = TypeScriptTypeMapper::emitted_name(&node.name);
        let name = emitted_path(&node.name)
            .last()
            .copied()
            .unwrap_or_default()
            .to_string();

        if node.is_enum() {
            let union = node
                .constants
                .iter()
                .fold(Union::new(name).doc(node.doc.as_deref()), |u, c| {
                    u.literal(c)
                });
            return Ok(Box::new(union));
        }

        let generics = self.generic_params(&node.generics, true, scope)?;

        if node.is_closed() {
            let mut union = Union::new(name)
                .doc(node.doc.as_deref())
                .generics(generics);
            for variant in &node.variants {
                let reference = self.variant_reference(node, variant);
                union = union.variant(self.render(&reference, scope)?);
            }
            return Ok(Box::new(union));
        }

        let is_variant = node
            .supertype_names()
            .filter_map(|s| self.graph.get(s))
            .any(TypeNode::is_closed);

        let mut source = match (self.config.supertypes, is_variant) {
            (SupertypeStyle::Flatten, _) => self.merged(structural_members(self.graph, node), scope),
            (_, true) => self.merged(variant_members(self.graph, node), scope),
            _ => node.members.clone(),
        };
        if is_variant {
            let discriminant = self.config.discriminant.as_str();
            if source.iter().any(|m| m.name == discriminant) {
                scope.warn(
                    "member-clash",
                    format!(
                        "member '{discriminant}' clashes with the union discriminant and is omitted"
                    ),
                );
                source.retain(|m| m.name != discriminant);
            }
        }

        let mut members: Vec<Member> = Vec::new();
        if is_variant {
            members.push(
                Property::new(&self.config.discriminant, quote(&emitted))
                    .readonly()
                    .into(),
            );
        }
        members.extend(self.members(&source, scope)?);

        let supertypes = match self.config.supertypes {
            SupertypeStyle::Flatten => Vec::new(),
            _ => self.open_supertypes(node, scope)?,
        };

        if self.config.supertypes == SupertypeStyle::Intersection && !supertypes.is_empty() {
            let alias = supertypes.into_iter().fold(
                IntersectionAlias::new(name)
                    .doc(node.doc.as_deref())
                    .generics(generics),
                IntersectionAlias::part,
            );
            return Ok(Box::new(alias.members(members)));
        }

        let interface = supertypes.into_iter().fold(
            Interface::new(name)
                .doc(node.doc.as_deref())
                .generics(generics),
            Interface::extends,
        );
        Ok(Box::new(interface.members(members)))
    }

    /// The reference a closed type's union uses for one of its variants.
    ///
    /// Variant parameters bound to one of the closed type's parameters are
    /// spelled with that parameter; anything else becomes `unknown`.
    fn variant_reference(&self, closed: &TypeNode, variant: &str) -> TypeRef {
        let Some(node) = self.graph.get(variant) else {
            return TypeRef::named(variant, Vec::new());
        };
        let parent_args = node
            .supertypes
            .iter()
            .find_map(|s| match s {
                TypeRef::Named { name, args } if *name == closed.name => Some(args.as_slice()),
                _ => None,
            })
            .unwrap_or_default();

        let args = node
            .generics
            .iter()
            .map(|g| {
                parent_args
                    .iter()
                    .position(|a| matches!(a, TypeRef::Var { name } if *name == g.name))
                    .and_then(|k| closed.generics.get(k))
                    .map(|p| TypeRef::var(&p.name))
                    .unwrap_or(TypeRef::Unknown)
            })
            .collect();
        TypeRef::named(variant, args)
    }

    /// Supertypes referenced by name. Closed types are never extended.
    fn open_supertypes(&self, node: &TypeNode, scope: &mut Scope) -> Result<Vec<String>, PassError> {
        node.supertypes
            .iter()
            .filter(|s| {
                s.as_named()
                    .and_then(|n| self.graph.get(n))
                    .is_some_and(|parent| !parent.is_closed())
            })
            .map(|s| self.render(s, scope))
            .collect()
    }

    fn merged(&self, set: MemberSet, scope: &mut Scope) -> Vec<IrMember> {
        for conflict in set.conflicts {
            scope.warn(
                "member-conflict",
                format!(
                    "member '{}' inherited from {} conflicts with {}; keeping the latter",
                    conflict.key, conflict.dropped, conflict.kept
                ),
            );
        }
        set.members
    }

    fn members(&self, members: &[IrMember], scope: &mut Scope) -> Result<Vec<Member>, PassError> {
        let methods: HashSet<&str> = members
            .iter()
            .filter(|m| m.is_method())
            .map(|m| m.name.as_str())
            .collect();

        let mut out = Vec::with_capacity(members.len());
        for member in members {
            if !member.is_method() && methods.contains(member.name.as_str()) {
                scope.warn(
                    "member-clash",
                    format!(
                        "field '{}' clashes with a method of the same name and is omitted",
                        member.name
                    ),
                );
                continue;
            }
            out.push(self.member(member, scope)?);
        }
        Ok(out)
    }

    fn member(&self, member: &IrMember, scope: &mut Scope) -> Result<Member, PassError> {
        let ty = self.render(&member.ty, scope)?;

        match &member.kind {
            MemberKind::Field => {
                let property = if member.nullable {
                    Property::new(&member.name, nullable(ty)).optional()
                } else if member.optional {
                    Property::new(&member.name, ty).optional()
                } else {
                    Property::new(&member.name, ty)
                };
                Ok(property.doc(member.doc.as_deref()).into())
            }
            MemberKind::Method { params, generics } => {
                let returns = if member.nullable { nullable(ty) } else { ty };
                let mut method =
                    MethodSignature::new(&member.name, returns).doc(member.doc.as_deref());
                for generic in self.generic_params(generics, false, scope)? {
                    method = method.generic(generic);
                }
                for param in params {
                    let ty = self.render(&param.ty, scope)?;
                    let ty = if param.nullable { nullable(ty) } else { ty };
                    method = method.param(TS_NAMING.safe_name(&param.name), ty);
                }
                if member.optional {
                    method = method.optional();
                }
                Ok(method.into())
            }
        }
    }

    /// Type parameters; variance modifiers only where TypeScript accepts them.
    fn generic_params(
        &self,
        generics: &[GenericParam],
        declaration_site: bool,
        scope: &mut Scope,
    ) -> Result<Vec<String>, PassError> {
        generics
            .iter()
            .map(|g| {
                let mut out = String::new();
                if declaration_site && self.config.variance == VariancePolicy::Preserve {
                    if let Some(variance) = g.variance {
                        out.push_str(variance.as_str());
                        out.push(' ');
                    }
                }
                out.push_str(&g.name);
                if let Some(bound) = &g.bound {
                    out.push_str(" extends ");
                    out.push_str(&self.render(bound, scope)?);
                }
                Ok(out)
            })
            .collect()
    }

    fn render(&self, ty: &TypeRef, scope: &mut Scope) -> Result<String, PassError> {
        let mapper = TypeScriptTypeMapper;
        Ok(match ty {
            TypeRef::Primitive { primitive } => mapper.map_primitive(*primitive).to_string(),
            TypeRef::Named { name, args } => {
                let emitted = self.reference(name, scope)?;
                if args.is_empty() {
                    emitted
                } else {
                    let args = args
                        .iter()
                        .map(|a| self.render(a, scope))
                        .collect::<Result<Vec<_>, _>>()?;
                    format!("{emitted}<{}>", args.join(", "))
                }
            }
            TypeRef::Var { name } => name.clone(),
            TypeRef::Array { element } => TypeScriptTypeMapper::array_of(&self.render(element, scope)?),
            TypeRef::Set { element } => format!("Set<{}>", self.render(element, scope)?),
            TypeRef::Map { key, value } => format!(
                "Map<{}, {}>",
                self.render(key, scope)?,
                self.render(value, scope)?
            ),
            TypeRef::Optional { inner } => nullable(self.render(inner, scope)?),
            TypeRef::Wildcard {
                wildcard: Wildcard::Extends(bound),
            } => self.render(bound, scope)?,
            TypeRef::Wildcard { .. } | TypeRef::Unknown => mapper.map_unknown().to_string(),
        })
    }

    /// Spell a reference to a graph type and record it.
    ///
    /// Inside `namespace A.B`, a leading segment `X` resolves to `A.B.X` or
    /// `A.X` before the top-level `X`.
    fn reference(&self, name: &str, scope: &mut Scope) -> Result<String, PassError> {
        let emitted = TypeScriptTypeMapper::emitted_name(name);
        let head = emitted.split('.').next().unwrap_or_default();

        for depth in 1..=scope.namespace.len() {
            let namespace = scope.namespace[..depth].join(".");
            if let Some(shadow) = self.emitted.get(&format!("{namespace}.{head}")) {
                return Err(PassError::ShadowedReference {
                    reference: name.to_string(),
                    namespace,
                    shadow: shadow.to_string(),
                });
            }
        }

        if !scope.references.contains(&emitted) {
            scope.references.push(emitted.clone());
        }
        Ok(emitted)
    }
}

fn nullable(ty: String) -> String {
    if ty.ends_with(" | null") {
        ty
    } else {
        format!("{ty} | null")
    }
}

#[cfg(test)]
mod tests {
    use glot_codegen::order::declaration_order;
    use glot_ir::{Param, Primitive, TypeKind, Variance};

    use super::*;

    fn string() -> TypeRef {
        TypeRef::primitive(Primitive::String)
    }

    fn node(name: &str, kind: TypeKind, build: impl FnOnce(&mut TypeNode)) -> TypeNode {
        let mut node = TypeNode::new(name, kind);
        build(&mut node);
        node
    }

    fn graph(nodes: Vec<TypeNode>) -> TypeGraph {
        let mut graph = TypeGraph::new();
        for node in nodes {
            graph.insert(node);
        }
        graph
    }

    fn emit_with(graph: &TypeGraph, config: &EmitConfig) -> Result<EmittedDeclarations, PassError> {
        let order = declaration_order(graph)?;
        DeclarationEmitter::new(graph, &order, config).emit()
    }

    fn emit(graph: &TypeGraph) -> EmittedDeclarations {
        emit_with(graph, &EmitConfig::default()).unwrap()
    }

    fn node_and_container() -> TypeGraph {
        graph(vec![
            node("org.x.Node", TypeKind::Interface, |n| {
                n.members.push(IrMember::field("value", string()));
            }),
            node("org.x.Container", TypeKind::Interface, |n| {
                n.supertypes.push(TypeRef::named("org.x.Node", vec![]));
                n.members.push(IrMember::field(
                    "children",
                    TypeRef::array(TypeRef::named("org.x.Node", vec![])),
                ));
            }),
        ])
    }

    fn closed_j() -> TypeGraph {
        graph(vec![
            node("org.x.J", TypeKind::Interface, |n| {
                n.variants = vec!["org.x.J$Binary".into(), "org.x.J$Literal".into()];
                n.members.push(IrMember::field("id", string()));
            }),
            node("org.x.J$Binary", TypeKind::Class, |n| {
                n.supertypes.push(TypeRef::named("org.x.J", vec![]));
                n.members
                    .push(IrMember::field("left", TypeRef::named("org.x.J", vec![])));
            }),
            node("org.x.J$Literal", TypeKind::Class, |n| {
                n.supertypes.push(TypeRef::named("org.x.J", vec![]));
                n.members.push(IrMember {
                    nullable: true,
                    ..IrMember::field("value", string())
                });
            }),
        ])
    }

    #[test]
    fn test_node_before_container() {
        let out = emit(&node_and_container());

        assert_eq!(
            out.body(),
            "export interface Node {\n  value: string;\n}\n\nexport interface Container extends Node {\n  children: Node[];\n}\n"
        );
        assert_eq!(out.unit.declarations()[1].references, vec!["Node"]);
    }

    #[test]
    fn test_intersection_style() {
        let config = EmitConfig {
            supertypes: SupertypeStyle::Intersection,
            ..EmitConfig::default()
        };
        let out = emit_with(&node_and_container(), &config).unwrap();

        assert_eq!(
            out.unit.declarations()[1].text,
            "export type Container = Node & {\n  children: Node[];\n};\n"
        );
        // No supertypes: still an interface
        assert!(out.unit.declarations()[0].text.starts_with("export interface Node {"));
    }

    #[test]
    fn test_flatten_style() {
        let config = EmitConfig {
            supertypes: SupertypeStyle::Flatten,
            ..EmitConfig::default()
        };
        let out = emit_with(&node_and_container(), &config).unwrap();

        assert_eq!(
            out.unit.declarations()[1].text,
            "export interface Container {\n  value: string;\n  children: Node[];\n}\n"
        );
    }

    #[test]
    fn test_closed_type_renders_discriminated_union() {
        let out = emit(&closed_j());
        let texts: Vec<&str> = out
            .unit
            .declarations()
            .iter()
            .map(|d| d.text.as_str())
            .collect();

        assert_eq!(
            texts,
            vec![
                "export type J = J.Binary | J.Literal;\n",
                "export namespace J {\n  export interface Binary {\n    readonly kind: \"J.Binary\";\n    id: string;\n    left: J;\n  }\n}\n",
                "export namespace J {\n  export interface Literal {\n    readonly kind: \"J.Literal\";\n    id: string;\n    value?: string | null;\n  }\n}\n",
            ]
        );
        let groups: HashSet<usize> = out.unit.declarations().iter().map(|d| d.group).collect();
        assert_eq!(groups.len(), 1);
    }

    #[test]
    fn test_variant_member_named_like_discriminant_is_omitted() {
        let out = emit(&graph(vec![
            node("org.x.J", TypeKind::Interface, |n| {
                n.variants = vec!["org.x.J$ClassDecl".into()];
                n.members.push(IrMember::field("id", string()));
            }),
            node("org.x.J$ClassDecl", TypeKind::Class, |n| {
                n.supertypes.push(TypeRef::named("org.x.J", vec![]));
                n.members.push(IrMember::field("kind", string()));
                n.members.push(IrMember::field("name", string()));
            }),
        ]));

        let decl = out
            .unit
            .declarations()
            .iter()
            .find(|d| d.name == "J.ClassDecl")
            .unwrap();
        assert_eq!(decl.text.matches("kind:").count(), 1);
        assert!(decl.text.contains("readonly kind: \"J.ClassDecl\";\n    id: string;\n    name: string;\n"));
        let clashes: Vec<_> = out
            .diagnostics
            .iter()
            .map(|d| (d.location.as_deref(), d.rule.as_deref()))
            .collect();
        assert_eq!(clashes, vec![(Some("org.x.J$ClassDecl"), Some("member-clash"))]);
    }

    #[test]
    fn test_generic_variant_maps_parameters() {
        let graph = graph(vec![
            node("org.x.Expr", TypeKind::Interface, |n| {
                n.generics.push(GenericParam::unbounded("T"));
                n.variants = vec!["org.x.Expr$Lit".into(), "org.x.Expr$Any".into()];
            }),
            node("org.x.Expr$Lit", TypeKind::Class, |n| {
                n.generics.push(GenericParam::unbounded("V"));
                n.supertypes
                    .push(TypeRef::named("org.x.Expr", vec![TypeRef::var("V")]));
            }),
            node("org.x.Expr$Any", TypeKind::Class, |n| {
                n.generics.push(GenericParam::unbounded("U"));
                n.supertypes
                    .push(TypeRef::named("org.x.Expr", vec![string()]));
            }),
        ]);
        let out = emit(&graph);

        assert_eq!(
            out.unit.declarations()[0].text,
            "export type Expr<T> = Expr.Lit<T> | Expr.Any<unknown>;\n"
        );
    }

    #[test]
    fn test_enum_renders_literal_union() {
        let out = emit(&graph(vec![
            node("org.x.Mode", TypeKind::Enum, |n| {
                n.constants = vec!["FAST".into(), "SAFE".into()];
            }),
            node("org.x.Empty", TypeKind::Enum, |_| {}),
        ]));

        assert_eq!(
            out.body(),
            "export type Mode = \"FAST\" | \"SAFE\";\n\nexport type Empty = never;\n"
        );
    }

    #[test]
    fn test_methods_and_params() {
        let tree = TypeRef::named("org.x.Tree", vec![]);
        let out = emit(&graph(vec![node("org.x.Tree", TypeKind::Interface, |n| {
            n.members.push(IrMember {
                name: "accept".into(),
                kind: MemberKind::Method {
                    params: vec![
                        Param {
                            name: "new".into(),
                            ty: tree.clone(),
                            nullable: true,
                        },
                        Param {
                            name: "p".into(),
                            ty: TypeRef::var("P"),
                            nullable: false,
                        },
                    ],
                    generics: vec![GenericParam::unbounded("P")],
                },
                ty: tree.clone(),
                nullable: true,
                optional: false,
                doc: Some("Dispatch to a visitor.".into()),
            });
            n.members.push(IrMember {
                name: "withId".into(),
                kind: MemberKind::Method {
                    params: vec![],
                    generics: vec![],
                },
                ty: tree.clone(),
                nullable: false,
                optional: true,
                doc: None,
            });
        })]));

        assert_eq!(
            out.body(),
            "export interface Tree {\n  /** Dispatch to a visitor. */\n  accept<P>(new_: Tree | null, p: P): Tree | null;\n  withId?(): Tree;\n}\n"
        );
    }

    #[test]
    fn test_container_types_and_wildcards() {
        let node_ref = TypeRef::named("org.x.Node", vec![]);
        let out = emit(&graph(vec![
            node("org.x.Node", TypeKind::Interface, |_| {}),
            node("org.x.Holder", TypeKind::Interface, |n| {
                n.members.push(IrMember::field(
                    "byName",
                    TypeRef::Map {
                        key: Box::new(string()),
                        value: Box::new(TypeRef::Wildcard {
                            wildcard: Wildcard::Extends(Box::new(node_ref.clone())),
                        }),
                    },
                ));
                n.members.push(IrMember::field(
                    "sinks",
                    TypeRef::Set {
                        element: Box::new(TypeRef::Wildcard {
                            wildcard: Wildcard::Super(Box::new(node_ref.clone())),
                        }),
                    },
                ));
                n.members.push(IrMember::field(
                    "maybe",
                    TypeRef::array(TypeRef::Optional {
                        inner: Box::new(string()),
                    }),
                ));
                n.members.push(IrMember {
                    optional: true,
                    ..IrMember::field("opaque", TypeRef::Unknown)
                });
            }),
        ]));

        assert_eq!(
            out.unit.declarations()[1].text,
            "export interface Holder {\n  byName: Map<string, Node>;\n  sinks: Set<unknown>;\n  maybe: (string | null)[];\n  opaque?: unknown;\n}\n"
        );
    }

    #[test]
    fn test_variance_policy() {
        let graph = graph(vec![
            node("org.x.Node", TypeKind::Interface, |_| {}),
            node("org.x.Source", TypeKind::Interface, |n| {
                n.generics.push(GenericParam {
                    variance: Some(Variance::Out),
                    ..GenericParam::bounded("T", TypeRef::named("org.x.Node", vec![]))
                });
            }),
        ]);

        let erased = emit(&graph);
        assert_eq!(
            erased.unit.declarations()[1].text,
            "export interface Source<T extends Node> {}\n"
        );

        let config = EmitConfig {
            variance: VariancePolicy::Preserve,
            ..EmitConfig::default()
        };
        let preserved = emit_with(&graph, &config).unwrap();
        assert_eq!(
            preserved.unit.declarations()[1].text,
            "export interface Source<out T extends Node> {}\n"
        );
    }

    #[test]
    fn test_shadowed_reference_is_fatal() {
        let graph = graph(vec![
            node("org.a.Binary", TypeKind::Interface, |_| {}),
            node("org.x.J", TypeKind::Interface, |_| {}),
            node("org.x.J$Binary", TypeKind::Interface, |_| {}),
            node("org.x.J$Unary", TypeKind::Interface, |n| {
                n.members
                    .push(IrMember::field("other", TypeRef::named("org.a.Binary", vec![])));
            }),
        ]);

        let err = emit_with(&graph, &EmitConfig::default()).unwrap_err();
        assert_eq!(
            err,
            PassError::ShadowedReference {
                reference: "org.a.Binary".into(),
                namespace: "J".into(),
                shadow: "org.x.J$Binary".into(),
            }
        );
    }

    #[test]
    fn test_field_clashing_with_method_is_dropped() {
        let out = emit(&graph(vec![node("org.x.Named", TypeKind::Class, |n| {
            n.members.push(IrMember::field("name", string()));
            n.members.push(IrMember {
                name: "name".into(),
                kind: MemberKind::Method {
                    params: vec![],
                    generics: vec![],
                },
                ty: string(),
                nullable: false,
                optional: false,
                doc: None,
            });
        })]));

        assert_eq!(out.body(), "export interface Named {\n  name(): string;\n}\n");
        assert_eq!(out.diagnostics.len(), 1);
        assert_eq!(out.diagnostics[0].rule.as_deref(), Some("member-clash"));
        assert!(out.diagnostics[0].severity.is_warning());
    }
}
