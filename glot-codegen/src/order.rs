//! Declaration ordering.
//!
//! Strongly-connected components of the dependency graph are emitted in
//! topological order, ties broken by the smallest discovery index. Within a
//! component, supertypes come before their subtypes.

use std::{
    cmp::Reverse,
    collections::{BinaryHeap, HashMap, HashSet},
};

use glot_ir::{DeclarationOrder, TypeGraph, emitted_path};

use crate::pipeline::PassError;

/// Compute the emission order of every type in the graph.
///
/// # Errors
///
/// Fails with [`PassError::CyclicInheritance`] when the supertype relation
/// alone is cyclic, and with [`PassError::NameCollision`] when two types map
/// to the same emitted name.
pub fn declaration_order(graph: &TypeGraph) -> Result<DeclarationOrder, PassError> {
    check_inheritance(graph)?;
    check_collisions(graph)?;

    let names: Vec<&str> = graph.iter().map(|n| n.name.as_str()).collect();
    let dependencies = adjacency(graph, |node| node.dependencies());
    let components = strongly_connected(&dependencies);

    let mut component_of = vec![0; names.len()];
    for (c, members) in components.iter().enumerate() {
        for &v in members {
            component_of[v] = c;
        }
    }

    // `dependents[b]` holds the components waiting on `b`
    let mut pending = vec![0usize; components.len()];
    let mut dependents: Vec<HashSet<usize>> = vec![HashSet::new(); components.len()];
    for (v, edges) in dependencies.iter().enumerate() {
        for &w in edges {
            let (from, to) = (component_of[v], component_of[w]);
            if from != to && dependents[to].insert(from) {
                pending[from] += 1;
            }
        }
    }

    // Components are sorted, so the first member is the smallest index
    let mut ready: BinaryHeap<Reverse<(usize, usize)>> = pending
        .iter()
        .enumerate()
        .filter(|(_, count)| **count == 0)
        .map(|(c, _)| Reverse((components[c][0], c)))
        .collect();

    let supertypes = adjacency(graph, |node| node.supertype_names().collect());
    let mut groups = Vec::with_capacity(components.len());
    while let Some(Reverse((_, c))) = ready.pop() {
        groups.push(
            supertypes_first(&components[c], &supertypes)
                .into_iter()
                .map(|v| names[v].to_string())
                .collect(),
        );

        let mut released: Vec<usize> = dependents[c].iter().copied().collect();
        released.sort_unstable();
        for dependent in released {
            pending[dependent] -= 1;
            if pending[dependent] == 0 {
                ready.push(Reverse((components[dependent][0], dependent)));
            }
        }
    }

    Ok(DeclarationOrder { groups })
}

fn check_inheritance(graph: &TypeGraph) -> Result<(), PassError> {
    let supertypes = adjacency(graph, |node| node.supertype_names().collect());
    for component in strongly_connected(&supertypes) {
        let first = component[0];
        if component.len() > 1 || supertypes[first].contains(&first) {
            let mut cycle: Vec<String> = component
                .iter()
                .filter_map(|&v| graph.by_index(v))
                .map(|n| n.name.clone())
                .collect();
            if let Some(start) = cycle.first().cloned() {
                cycle.push(start);
            }
            return Err(PassError::CyclicInheritance { cycle });
        }
    }
    Ok(())
}

fn check_collisions(graph: &TypeGraph) -> Result<(), PassError> {
    let mut emitted: HashMap<String, &str> = HashMap::new();
    for node in graph.iter() {
        let name = emitted_path(&node.name).join(".");
        if let Some(first) = emitted.insert(name.clone(), &node.name) {
            return Err(PassError::NameCollision {
                name,
                first: first.to_string(),
                second: node.name.clone(),
            });
        }
    }
    Ok(())
}

/// Edges by discovery index. Names outside the graph are dropped.
fn adjacency<'g>(
    graph: &'g TypeGraph,
    edges: impl Fn(&'g glot_ir::TypeNode) -> Vec<&'g str>,
) -> Vec<Vec<usize>> {
    graph
        .iter()
        .map(|node| {
            edges(node)
                .into_iter()
                .filter_map(|name| graph.get(name).map(|n| n.index))
                .collect()
        })
        .collect()
}

/// Order a component so that every supertype inside it precedes its subtypes,
/// otherwise by discovery index.
fn supertypes_first(component: &[usize], supertypes: &[Vec<usize>]) -> Vec<usize> {
    let members: HashSet<usize> = component.iter().copied().collect();
    let mut remaining = component.to_vec();
    let mut placed = HashSet::new();
    let mut ordered = Vec::with_capacity(component.len());

    while !remaining.is_empty() {
        let next = remaining
            .iter()
            .position(|v| {
                supertypes[*v]
                    .iter()
                    .all(|s| !members.contains(s) || placed.contains(s))
            })
            .unwrap_or(0);
        let v = remaining.remove(next);
        placed.insert(v);
        ordered.push(v);
    }
    ordered
}

/// Tarjan's algorithm. Each component is sorted by index.
fn strongly_connected(adjacency: &[Vec<usize>]) -> Vec<Vec<usize>> {
    struct Tarjan<'a> {
        adjacency: &'a [Vec<usize>],
        index: Vec<Option<usize>>,
        low: Vec<usize>,
        on_stack: Vec<bool>,
        stack: Vec<usize>,
        next: usize,
        components: Vec<Vec<usize>>,
    }

    impl Tarjan<'_> {
        fn visit(&mut self, v: usize) {
            self.index[v] = Some(self.next);
            self.low[v] = self.next;
            self.next += 1;
            self.stack.push(v);
            self.on_stack[v] = true;

            let adjacency = self.adjacency;
            for &w in &adjacency[v] {
                match self.index[w] {
                    None => {
                        self.visit(w);
                        self.low[v] = self.low[v].min(self.low[w]);
                    }
                    Some(index) if self.on_stack[w] => {
                        self.low[v] = self.low[v].min(index);
                    }
                    Some(_) => {}
                }
            }

            if self.index[v] == Some(self.low[v]) {
                let mut component = Vec::new();
                while let Some(w) = self.stack.pop() {
                    self.on_stack[w] = false;
                    component.push(w);
                    if w == v {
                        break;
                    }
                }
                component.sort_unstable();
                self.components.push(component);
            }
        }
    }

    let n = adjacency.len();
    let mut tarjan = Tarjan {
        adjacency,
        index: vec![None; n],
        low: vec![0; n],
        on_stack: vec![false; n],
        stack: Vec::new(),
        next: 0,
        components: Vec::new(),
    };
    for v in 0..n {
        if tarjan.index[v].is_none() {
            tarjan.visit(v);
        }
    }
    tarjan.components
}

#[cfg(test)]
mod tests {
    use glot_ir::{Member, TypeKind, TypeNode, TypeRef};

    use super::*;

    fn node(name: &str, supers: &[&str], refs: &[&str]) -> TypeNode {
        let mut node = TypeNode::new(name, TypeKind::Interface);
        node.supertypes = supers.iter().map(|s| TypeRef::named(*s, vec![])).collect();
        node.members = refs
            .iter()
            .map(|r| Member::field(simple(r), TypeRef::named(*r, vec![])))
            .collect();
        node
    }

    fn simple(name: &str) -> String {
        name.rsplit('.').next().unwrap_or(name).to_lowercase()
    }

    fn graph(nodes: Vec<TypeNode>) -> TypeGraph {
        let mut graph = TypeGraph::new();
        for node in nodes {
            graph.insert(node);
        }
        graph
    }

    fn group_of<'a>(order: &'a DeclarationOrder) -> HashMap<&'a str, usize> {
        order.iter().map(|(g, name)| (name, g)).collect()
    }

    #[test]
    fn test_dependencies_come_first() {
        let graph = graph(vec![
            node("a.Container", &["a.Node"], &[]),
            node("a.Node", &[], &["a.Value"]),
            node("a.Value", &[], &[]),
        ]);

        let order = declaration_order(&graph).unwrap();
        assert_eq!(
            order.groups,
            vec![vec!["a.Value"], vec!["a.Node"], vec!["a.Container"]]
        );
    }

    #[test]
    fn test_mutual_references_share_a_group() {
        let graph = graph(vec![
            node("a.Container", &["a.Node"], &[]),
            node("a.Node", &[], &["a.Container"]),
        ]);

        let order = declaration_order(&graph).unwrap();
        assert_eq!(order.groups, vec![vec!["a.Node", "a.Container"]]);
    }

    #[test]
    fn test_every_reference_is_emitted_no_later() {
        let graph = graph(vec![
            node("a.J", &["a.Tree"], &["a.Space", "a.Marker"]),
            node("a.Tree", &[], &["a.Marker"]),
            node("a.Space", &[], &["a.Comment"]),
            node("a.Marker", &[], &["a.Tree"]),
            node("a.Comment", &[], &["a.Space"]),
        ]);

        let order = declaration_order(&graph).unwrap();
        let groups = group_of(&order);
        for node in graph.iter() {
            for dep in node.dependencies() {
                assert!(groups[dep] <= groups[node.name.as_str()], "{dep} after {}", node.name);
            }
        }
    }

    #[test]
    fn test_order_is_deterministic_by_discovery_index() {
        let graph = graph(vec![
            node("a.Root", &[], &["a.B", "a.A"]),
            node("a.B", &[], &[]),
            node("a.A", &[], &[]),
        ]);

        let first = declaration_order(&graph).unwrap();
        let second = declaration_order(&graph).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.groups, vec![vec!["a.B"], vec!["a.A"], vec!["a.Root"]]);
    }

    #[test]
    fn test_inheritance_cycle_is_fatal() {
        let graph = graph(vec![
            node("a.A", &["a.B"], &[]),
            node("a.B", &["a.A"], &[]),
        ]);

        assert_eq!(
            declaration_order(&graph).unwrap_err(),
            PassError::CyclicInheritance {
                cycle: vec!["a.A".into(), "a.B".into(), "a.A".into()],
            }
        );
    }

    #[test]
    fn test_emitted_name_collision_is_fatal() {
        let graph = graph(vec![node("a.Node", &[], &[]), node("b.Node", &[], &[])]);

        assert_eq!(
            declaration_order(&graph).unwrap_err(),
            PassError::NameCollision {
                name: "Node".into(),
                first: "a.Node".into(),
                second: "b.Node".into(),
            }
        );
    }

    #[test]
    fn test_tarjan_components() {
        let components = strongly_connected(&[vec![1], vec![0, 2], vec![], vec![3]]);
        assert_eq!(components, vec![vec![2], vec![0, 1], vec![3]]);
    }
}
