//! MNA system assembly.

use std::collections::HashMap;
use std::fmt::Write as _;

use crate::circuit::{BranchId, ElementId, Node, NodeId};
use crate::components::Element;
use crate::error::Result;

use super::gauss;

/// MNA system Ax = z.
///
/// Rows and columns `0..num_nodes` belong to the non-ground nodes, in node
/// list order. Rows and columns `num_nodes..size` belong to the voltage
/// sources, in element list order.
#[derive(Debug, Clone, PartialEq)]
pub struct MnaMatrix {
    /// System matrix A (row-major)
    pub a: Vec<f64>,
    /// Source vector z
    pub z: Vec<f64>,
    /// Matrix dimension
    pub size: usize,
    /// Number of node-voltage unknowns
    pub num_nodes: usize,
    /// Node id -> matrix index, for non-ground nodes
    node_index: HashMap<NodeId, usize>,
    /// Element index of each voltage source, by branch
    branches: Vec<ElementId>,
}

impl MnaMatrix {
    /// Create a zeroed system for the given nodes and elements.
    pub fn new(nodes: &[Node], elements: &[Element]) -> Self {
        let mut node_index = HashMap::new();
        for node in nodes.iter().filter(|n| !n.is_ground()) {
            let next = node_index.len();
            node_index.entry(node.id).or_insert(next);
        }

        let branches: Vec<ElementId> = elements
            .iter()
            .enumerate()
            .filter(|(_, e)| matches!(e, Element::VoltageSource(_)))
            .map(|(idx, _)| ElementId(idx))
            .collect();

        let num_nodes = node_index.len();
        let size = num_nodes + branches.len();

        Self {
            a: vec![0.0; size * size],
            z: vec![0.0; size],
            size,
            num_nodes,
            node_index,
            branches,
        }
    }

    /// Get matrix element at (row, col).
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.a[row * self.size + col]
    }

    /// Set matrix element at (row, col).
    pub fn set(&mut self, row: usize, col: usize, value: f64) {
        self.a[row * self.size + col] = value;
    }

    /// Add to matrix element at (row, col).
    pub fn add(&mut self, row: usize, col: usize, value: f64) {
        self.a[row * self.size + col] += value;
    }

    /// Add to source vector element.
    pub fn add_source(&mut self, row: usize, value: f64) {
        self.z[row] += value;
    }

    /// Get the matrix index for a node voltage.
    /// Returns None for ground and for ids not in the system.
    pub fn node_index(&self, node: NodeId) -> Option<usize> {
        if node.is_ground() {
            None
        } else {
            self.node_index.get(&node).copied()
        }
    }

    /// Get the matrix index for a branch current.
    pub fn branch_index(&self, branch: BranchId) -> usize {
        self.num_nodes + branch.0
    }

    /// Element index of each voltage source, in branch order.
    pub fn branches(&self) -> &[ElementId] {
        &self.branches
    }

    /// Build the full system from consolidated nodes and elements.
    ///
    /// One KCL row per non-ground node, then one constraint row per
    /// voltage source. Cables are skipped.
    pub fn assemble(nodes: &[Node], elements: &[Element]) -> Self {
        let mut matrix = Self::new(nodes, elements);

        for node in nodes.iter().filter(|n| !n.is_ground()) {
            let Some(eq) = matrix.node_index(node.id) else {
                continue;
            };

            // Conductances
            for element in elements {
                if let Element::Resistor(r) = element {
                    let Some(other) = r.other_end(node.id) else {
                        continue;
                    };
                    let g = r.conductance();
                    matrix.add(eq, eq, g);
                    if let Some(col) = matrix.node_index(other) {
                        matrix.add(eq, col, -g);
                    }
                }
            }

            // Current injections
            for element in elements {
                if let Element::CurrentSource(i) = element {
                    matrix.add_source(eq, i.injection_into(node.id));
                }
            }

            // Branch currents of the voltage sources at this node
            let mut branch = 0;
            for element in elements {
                if let Element::VoltageSource(v) = element {
                    let col = matrix.branch_index(BranchId(branch));
                    if v.nodes[0] == node.id {
                        matrix.add(eq, col, 1.0);
                    }
                    if v.nodes[1] == node.id {
                        matrix.add(eq, col, -1.0);
                    }
                    branch += 1;
                }
            }
        }

        // V(n+) - V(n-) = E
        let mut branch = 0;
        for element in elements {
            if let Element::VoltageSource(v) = element {
                let row = matrix.branch_index(BranchId(branch));
                if let Some(col) = matrix.node_index(v.nodes[0]) {
                    matrix.set(row, col, 1.0);
                }
                if let Some(col) = matrix.node_index(v.nodes[1]) {
                    matrix.set(row, col, -1.0);
                }
                matrix.z[row] = v.voltage;
                branch += 1;
            }
        }

        log::debug!(
            "Assembled {}x{} MNA system ({} node(s), {} voltage source(s))",
            matrix.size,
            matrix.size,
            matrix.num_nodes,
            matrix.branches.len()
        );
        log::trace!("Augmented matrix:\n{}", matrix.augmented_string());

        matrix
    }

    /// The augmented matrix `[A | z]` as fixed-point text, one row per line.
    pub fn augmented_string(&self) -> String {
        let mut out = String::new();
        for row in 0..self.size {
            for col in 0..self.size {
                let _ = write!(out, "{:10.4} ", self.get(row, col));
            }
            let _ = writeln!(out, "{:10.4} ", self.z[row]);
        }
        out
    }

    /// The augmented matrix `[A | z]` as an `size x (size + 1)` row-major vector.
    pub fn augmented(&self) -> Vec<f64> {
        let n = self.size;
        let mut aug = Vec::with_capacity(n * (n + 1));
        for row in 0..n {
            aug.extend_from_slice(&self.a[row * n..(row + 1) * n]);
            aug.push(self.z[row]);
        }
        aug
    }

    /// Solve the system with Gaussian elimination.
    pub fn solve(&self) -> Result<Vec<f64>> {
        gauss::solve_augmented(self.augmented(), self.size)
    }
}
