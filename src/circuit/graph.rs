//! Circuit graph structure.

use super::types::{Node, NodeId};
use crate::components::{Element, ElementKind};
use crate::dsl::parse_value;
use crate::error::{NodalError, Result};

/// An editable circuit: nodes in insertion order plus two-terminal elements.
///
/// Node order matters: it fixes the order of unknowns in the MNA system and
/// decides which node represents a group of cable-joined nodes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Circuit {
    /// All nodes, in insertion order
    nodes: Vec<Node>,

    /// All elements, in insertion order
    elements: Vec<Element>,
}

impl Circuit {
    /// Create an empty circuit.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a circuit directly from nodes and elements, validating
    /// node uniqueness and element endpoints.
    pub fn from_parts(nodes: Vec<Node>, elements: Vec<Element>) -> Result<Self> {
        let mut circuit = Circuit::new();
        for node in nodes {
            circuit.add_node(node.id.0, node.x, node.y)?;
        }
        for element in elements {
            circuit.push_element(element)?;
        }
        Ok(circuit)
    }

    /// Add a node. Fails if a node with the same id already exists.
    pub fn add_node(&mut self, id: i64, x: i32, y: i32) -> Result<()> {
        let id = NodeId(id);
        if self.contains_node(id) {
            return Err(NodalError::DuplicateNode { id });
        }
        self.nodes.push(Node::new(id, x, y));
        Ok(())
    }

    /// Add an element between two existing nodes.
    ///
    /// `value` is ignored for cables.
    pub fn add_element(
        &mut self,
        kind: ElementKind,
        node1: i64,
        node2: i64,
        value: f64,
    ) -> Result<()> {
        let nodes = [NodeId(node1), NodeId(node2)];
        self.check_endpoints(nodes)?;
        let element = Element::from_kind(kind, nodes, value)?;
        self.elements.push(element);
        Ok(())
    }

    /// Add an element from its textual kind code and value, e.g.
    /// `add_element_str("R", 1, 0, "4.7k")`.
    ///
    /// The value text of a cable is not parsed.
    pub fn add_element_str(
        &mut self,
        code: &str,
        node1: i64,
        node2: i64,
        value: &str,
    ) -> Result<()> {
        let kind = ElementKind::from_code(code)?;
        let value = match kind {
            ElementKind::Cable => 0.0,
            _ => parse_value(value)?,
        };
        self.add_element(kind, node1, node2, value)
    }

    /// Add an already-built element, checking its endpoints.
    pub fn push_element(&mut self, element: Element) -> Result<()> {
        self.check_endpoints(element.nodes())?;
        if let Element::Resistor(r) = &element {
            if !r.is_valid() {
                return Err(NodalError::InvalidResistance {
                    node1: r.nodes[0],
                    node2: r.nodes[1],
                    value: r.resistance,
                });
            }
        }
        self.elements.push(element);
        Ok(())
    }

    fn check_endpoints(&self, nodes: [NodeId; 2]) -> Result<()> {
        for id in nodes {
            if !self.contains_node(id) {
                return Err(NodalError::NodeNotFound { id });
            }
        }
        Ok(())
    }

    /// Remove every node and element.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.elements.clear();
    }

    /// Take an independent copy for solving.
    ///
    /// Nothing done to the snapshot is visible in `self`.
    pub fn snapshot(&self) -> Circuit {
        self.clone()
    }

    /// All nodes, in insertion order.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// All elements, in insertion order.
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    /// Find a node by id.
    pub fn find_node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.iter().find(|n| n.id == id)
    }

    /// Check whether a node id is present.
    pub fn contains_node(&self, id: NodeId) -> bool {
        self.find_node(id).is_some()
    }

    /// Check whether the ground node (id 0) is present.
    pub fn has_ground(&self) -> bool {
        self.contains_node(NodeId::GROUND)
    }

    /// Check whether the circuit has no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub(crate) fn into_parts(self) -> (Vec<Node>, Vec<Element>) {
        (self.nodes, self.elements)
    }
}
