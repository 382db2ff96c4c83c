//! Passive elements: Resistor and Cable.

use crate::circuit::NodeId;

/// A linear resistor.
#[derive(Debug, Clone, PartialEq)]
pub struct Resistor {
    pub nodes: [NodeId; 2],
    /// Resistance in ohms, always finite and positive
    pub resistance: f64,
}

impl Resistor {
    /// Create a new resistor.
    pub fn new(nodes: [NodeId; 2], resistance: f64) -> Self {
        Self { nodes, resistance }
    }

    /// Get the conductance (1/R).
    pub fn conductance(&self) -> f64 {
        1.0 / self.resistance
    }

    /// The endpoint opposite to `node`, if `node` is one of the endpoints.
    ///
    /// A resistor whose ends were merged onto the same node returns that
    /// node for either end.
    pub fn other_end(&self, node: NodeId) -> Option<NodeId> {
        if self.nodes[0] == node {
            Some(self.nodes[1])
        } else if self.nodes[1] == node {
            Some(self.nodes[0])
        } else {
            None
        }
    }

    /// Check whether the resistance can be divided by.
    pub fn is_valid(&self) -> bool {
        self.resistance.is_finite() && self.resistance > 0.0
    }
}

/// An ideal zero-resistance wire.
///
/// Cables carry no unknown of their own: the nodes they join are merged
/// into one before assembly.
#[derive(Debug, Clone, PartialEq)]
pub struct Cable {
    pub nodes: [NodeId; 2],
}

impl Cable {
    /// Create a new cable.
    pub fn new(nodes: [NodeId; 2]) -> Self {
        Self { nodes }
    }
}
