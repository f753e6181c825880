//! The resolved type closure of one generation pass.

use indexmap::IndexMap;
use serde::Serialize;

use crate::TypeNode;

/// Resolved type nodes keyed by qualified name, in discovery order.
#[derive(Debug, Clone, Default, Serialize)]
pub struct TypeGraph {
    nodes: IndexMap<String, TypeNode>,
}

impl TypeGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a node, assigning its discovery index.
    pub fn insert(&mut self, mut node: TypeNode) {
        node.index = self.nodes.len();
        self.nodes.insert(node.name.clone(), node);
    }

    pub fn get(&self, name: &str) -> Option<&TypeNode> {
        self.nodes.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.nodes.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Nodes in discovery order.
    pub fn iter(&self) -> impl Iterator<Item = &TypeNode> {
        self.nodes.values()
    }

    pub fn by_index(&self, index: usize) -> Option<&TypeNode> {
        self.nodes.get_index(index).map(|(_, node)| node)
    }

    /// Returns true if `sub` reaches `sup` through the supertype relation
    /// or is `sup` itself.
    pub fn is_assignable(&self, sub: &str, sup: &str) -> bool {
        let mut stack = vec![sub];
        let mut seen = std::collections::HashSet::new();
        while let Some(name) = stack.pop() {
            if name == sup {
                return true;
            }
            if !seen.insert(name) {
                continue;
            }
            if let Some(node) = self.nodes.get(name) {
                stack.extend(node.supertype_names());
            }
        }
        false
    }

    /// Every graph type assignable to `name`, excluding `name`, in discovery order.
    pub fn subtypes_of(&self, name: &str) -> Vec<&str> {
        self.nodes
            .keys()
            .filter(|candidate| candidate.as_str() != name && self.is_assignable(candidate, name))
            .map(String::as_str)
            .collect()
    }
}

/// Emission order: groups of qualified names, each a strongly-connected
/// component, in topological order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DeclarationOrder {
    pub groups: Vec<Vec<String>>,
}

impl DeclarationOrder {
    /// Iterate `(group index, qualified name)` in emission order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &str)> {
        self.groups
            .iter()
            .enumerate()
            .flat_map(|(i, group)| group.iter().map(move |name| (i, name.as_str())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{TypeKind, TypeRef};

    fn node(name: &str, supers: &[&str]) -> TypeNode {
        let mut node = TypeNode::new(name, TypeKind::Interface);
        node.supertypes = supers.iter().map(|s| TypeRef::named(*s, vec![])).collect();
        node
    }

    #[test]
    fn test_insert_assigns_discovery_index() {
        let mut graph = TypeGraph::new();
        graph.insert(node("a.Tree", &[]));
        graph.insert(node("a.Expr", &["a.Tree"]));

        assert_eq!(graph.get("a.Expr").map(|n| n.index), Some(1));
        assert_eq!(graph.by_index(0).map(|n| n.name.as_str()), Some("a.Tree"));
    }

    #[test]
    fn test_subtypes_are_transitive() {
        let mut graph = TypeGraph::new();
        graph.insert(node("a.Tree", &[]));
        graph.insert(node("a.Expr", &["a.Tree"]));
        graph.insert(node("a.Binary", &["a.Expr"]));
        graph.insert(node("a.Other", &[]));

        assert_eq!(graph.subtypes_of("a.Tree"), vec!["a.Expr", "a.Binary"]);
        assert!(graph.is_assignable("a.Binary", "a.Tree"));
        assert!(!graph.is_assignable("a.Other", "a.Tree"));
    }

    #[test]
    fn test_order_iter_carries_group_index() {
        let order = DeclarationOrder {
            groups: vec![vec!["a.A".into()], vec!["a.B".into(), "a.C".into()]],
        };

        let flat: Vec<_> = order.iter().collect();
        assert_eq!(flat, vec![(0, "a.A"), (1, "a.B"), (1, "a.C")]);
    }
}
