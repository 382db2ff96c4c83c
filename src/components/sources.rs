//! Voltage and current sources.

use crate::circuit::NodeId;

/// An ideal voltage source.
///
/// Voltage sources require an extra row/column in the MNA matrix for the
/// branch current. The source enforces: V(nodes[0]) - V(nodes[1]) = voltage
#[derive(Debug, Clone, PartialEq)]
pub struct VoltageSource {
    pub nodes: [NodeId; 2], // [positive, negative]
    pub voltage: f64,
}

impl VoltageSource {
    /// Create a new voltage source.
    pub fn new(nodes: [NodeId; 2], voltage: f64) -> Self {
        Self { nodes, voltage }
    }
}

/// An ideal current source.
///
/// Current sources add directly to the RHS vector of the MNA equations.
#[derive(Debug, Clone, PartialEq)]
pub struct CurrentSource {
    pub nodes: [NodeId; 2], // current flows out of nodes[0], into nodes[1]
    pub current: f64,
}

impl CurrentSource {
    /// Create a new current source.
    pub fn new(nodes: [NodeId; 2], current: f64) -> Self {
        Self { nodes, current }
    }

    /// Net current this source pushes into `node`.
    pub fn injection_into(&self, node: NodeId) -> f64 {
        let mut injected = 0.0;
        if self.nodes[0] == node {
            injected -= self.current;
        }
        if self.nodes[1] == node {
            injected += self.current;
        }
        injected
    }
}
