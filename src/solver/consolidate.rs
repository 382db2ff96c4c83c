//! Cable consolidation.
//!
//! Nodes joined by ideal wires are one electrical node. They are merged
//! with a disjoint-set forest before assembly, so cables never show up as
//! branches in the MNA system.

use std::collections::HashMap;

use crate::circuit::{Node, NodeId};
use crate::components::Element;

/// Disjoint-set forest over node ids.
///
/// No rank or size balancing: `union` always hangs the first root under
/// the second.
#[derive(Debug, Clone)]
struct DisjointSet {
    parent: HashMap<NodeId, NodeId>,
}

impl DisjointSet {
    fn new(ids: impl IntoIterator<Item = NodeId>) -> Self {
        Self {
            parent: ids.into_iter().map(|id| (id, id)).collect(),
        }
    }

    /// Root of `id`'s set, compressing the path on the way.
    ///
    /// An id that was never inserted is its own root.
    fn find(&mut self, id: NodeId) -> NodeId {
        let mut root = id;
        while let Some(&parent) = self.parent.get(&root) {
            if parent == root {
                break;
            }
            root = parent;
        }

        let mut current = id;
        while current != root {
            let Some(next) = self.parent.insert(current, root) else {
                break;
            };
            current = next;
        }

        root
    }

    fn union(&mut self, a: NodeId, b: NodeId) {
        let root_a = self.find(a);
        let root_b = self.find(b);
        if root_a != root_b {
            self.parent.insert(root_a, root_b);
        }
    }
}

/// Mapping from every original node id to the canonical id of its class.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NodeMap {
    canonical: HashMap<NodeId, NodeId>,
}

impl NodeMap {
    /// Build the mapping for `nodes`, merging across every cable in `elements`.
    ///
    /// The canonical node of a class is the first of its members in `nodes`
    /// order, except that a class containing ground is always represented by
    /// ground.
    pub fn build(nodes: &[Node], elements: &[Element]) -> Self {
        let mut sets = DisjointSet::new(nodes.iter().map(|n| n.id));
        for element in elements {
            if let Element::Cable(cable) = element {
                sets.union(cable.nodes[0], cable.nodes[1]);
            }
        }

        let ground_root = sets.find(NodeId::GROUND);
        let has_ground = nodes.iter().any(|n| n.is_ground());

        let mut canonical_of_root: HashMap<NodeId, NodeId> = HashMap::new();
        if has_ground {
            canonical_of_root.insert(ground_root, NodeId::GROUND);
        }

        let mut canonical = HashMap::with_capacity(nodes.len());
        for node in nodes {
            let root = sets.find(node.id);
            let rep = *canonical_of_root.entry(root).or_insert(node.id);
            canonical.insert(node.id, rep);
        }

        Self { canonical }
    }

    /// Canonical id for `id`, or `None` if `id` was not in the node list.
    pub fn canonical(&self, id: NodeId) -> Option<NodeId> {
        self.canonical.get(&id).copied()
    }

    /// Canonical id for `id`, falling back to `id` itself.
    pub fn canonical_or_self(&self, id: NodeId) -> NodeId {
        self.canonical(id).unwrap_or(id)
    }

    /// Check whether `id` represents its own class.
    pub fn is_canonical(&self, id: NodeId) -> bool {
        self.canonical(id) == Some(id)
    }

    /// Number of mapped ids.
    pub fn len(&self) -> usize {
        self.canonical.len()
    }

    pub fn is_empty(&self) -> bool {
        self.canonical.is_empty()
    }
}

/// A circuit with every cable-joined class contracted to one node.
#[derive(Debug, Clone)]
pub struct Consolidated {
    /// One node per class, in original order of the canonical node
    pub nodes: Vec<Node>,
    /// Every original element, endpoints rewritten to canonical ids
    pub elements: Vec<Element>,
    /// The id -> canonical id mapping used for the rewrite
    pub map: NodeMap,
}

/// Contract cable-joined nodes.
///
/// Element order and count are preserved, so an element's index means the
/// same thing before and after. Cables stay in the list as loops on their
/// class node and contribute nothing to assembly.
pub fn consolidate(nodes: Vec<Node>, mut elements: Vec<Element>) -> Consolidated {
    let map = NodeMap::build(&nodes, &elements);

    let nodes: Vec<Node> = nodes.into_iter().filter(|n| map.is_canonical(n.id)).collect();

    for element in &mut elements {
        for end in element.nodes_mut().iter_mut() {
            *end = map.canonical_or_self(*end);
        }
    }

    log::debug!(
        "Consolidated {} node(s) into {} class(es)",
        map.len(),
        nodes.len()
    );

    Consolidated {
        nodes,
        elements,
        map,
    }
}
