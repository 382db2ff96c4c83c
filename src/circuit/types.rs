//! Core types for circuit representation.

use std::fmt;

/// A user-assigned identifier for a node in the circuit.
/// Node 0 is always ground.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub i64);

impl NodeId {
    /// The ground node (always id 0).
    pub const GROUND: NodeId = NodeId(0);

    /// Check if this is the ground node.
    pub fn is_ground(&self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "N{}", self.0)
    }
}

impl From<i64> for NodeId {
    fn from(id: i64) -> Self {
        NodeId(id)
    }
}

/// Position of an element in the circuit's element list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(pub usize);

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "E{}", self.0)
    }
}

/// Ordinal of a voltage source among all voltage sources.
///
/// Each voltage source owns one extra row/column in the MNA matrix,
/// holding the current through it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BranchId(pub usize);

impl fmt::Display for BranchId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "I{}", self.0)
    }
}

/// A circuit node.
///
/// The position is only meaningful to editors and renderers; the solver
/// never reads it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Node {
    pub id: NodeId,
    pub x: i32,
    pub y: i32,
}

impl Node {
    /// Create a new node.
    pub fn new(id: NodeId, x: i32, y: i32) -> Self {
        Self { id, x, y }
    }

    /// Check if this is the ground node.
    pub fn is_ground(&self) -> bool {
        self.id.is_ground()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ground() {
        assert!(NodeId::GROUND.is_ground());
        assert!(!NodeId(-1).is_ground());
        assert!(Node::new(NodeId(0), 10, 20).is_ground());
    }

    #[test]
    fn test_display() {
        assert_eq!(NodeId(12).to_string(), "N12");
        assert_eq!(ElementId(3).to_string(), "E3");
        assert_eq!(BranchId(1).to_string(), "I1");
    }
}
